use churnscope::application::inference::InferenceService;
use churnscope::application::ml::loader::ModelCache;
use churnscope::config::Config;
use churnscope::interfaces::ui::ChurnApp;

use anyhow::Context;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

fn main() -> anyhow::Result<()> {
    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    info!("Initializing Churnscope...");

    let config = Config::from_env()?;
    let cache = ModelCache::new(config.model_path.clone());

    // Fail fast: a missing artifact is a deployment error, not something the
    // form can recover from.
    let artifact = cache.get().with_context(|| {
        format!(
            "failed to load churn model from {}",
            config.model_path.display()
        )
    })?;

    info!("Model ready. Launching UI.");

    let service = InferenceService::new(artifact);

    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([980.0, 760.0])
            .with_title("Churnscope"),
        ..Default::default()
    };

    eframe::run_native(
        "Churnscope",
        native_options,
        Box::new(|_cc| Ok(Box::new(ChurnApp::new(service)))),
    )
    .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

    Ok(())
}
