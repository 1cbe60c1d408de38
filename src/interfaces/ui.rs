use crate::application::inference::{InferenceService, Prediction};
use crate::domain::customer::{ChurnLabel, CustomerRecord};
use crate::domain::errors::PredictionError;
use crate::domain::ml::field_registry::{self, FieldValue};
use crate::interfaces::components::card::Card;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::form::render_customer_form;

const INTERPRETATION_NOTES: &[&str] = &[
    "Higher complaints, lower satisfaction, and inactivity tend to increase churn risk.",
    "More products, higher engagement, and good satisfaction usually reduce churn risk.",
    "Use this prediction as a signal to target retention offers or follow up with the customer.",
];

/// Single-window churn prediction form.
pub struct ChurnApp {
    service: InferenceService,
    record: CustomerRecord,
    outcome: Option<Result<Prediction, PredictionError>>,
}

impl ChurnApp {
    pub fn new(service: InferenceService) -> Self {
        Self {
            service,
            record: CustomerRecord::default(),
            outcome: None,
        }
    }

    fn render_result(&self, ui: &mut egui::Ui) {
        let Some(outcome) = &self.outcome else {
            ui.label(
                egui::RichText::new("Fill in the customer details and press Predict Churn.")
                    .color(DesignSystem::TEXT_MUTED),
            );
            return;
        };

        match outcome {
            Ok(prediction) => {
                let color = match prediction.label {
                    ChurnLabel::Churned => DesignSystem::DANGER,
                    ChurnLabel::Retained => DesignSystem::SUCCESS,
                };

                ui.label(
                    egui::RichText::new(prediction.label.headline())
                        .size(22.0)
                        .strong()
                        .color(color),
                );
                ui.add_space(DesignSystem::SPACING_SMALL);
                ui.label(
                    egui::RichText::new(format!(
                        "Estimated churn probability: {:.2}%",
                        prediction.probability * 100.0
                    ))
                    .size(16.0)
                    .color(DesignSystem::TEXT_PRIMARY),
                );

                ui.add_space(DesignSystem::SPACING_MEDIUM);
                ui.separator();
                ui.label(
                    egui::RichText::new("Interpretation (high-level)")
                        .strong()
                        .color(DesignSystem::TEXT_SECONDARY),
                );
                for note in INTERPRETATION_NOTES {
                    ui.label(
                        egui::RichText::new(format!("• {note}"))
                            .color(DesignSystem::TEXT_SECONDARY),
                    );
                }
            }
            Err(e) => {
                ui.label(
                    egui::RichText::new("Error while predicting")
                        .size(18.0)
                        .strong()
                        .color(DesignSystem::DANGER),
                );
                ui.add_space(DesignSystem::SPACING_SMALL);
                ui.label(egui::RichText::new(e.to_string()).color(DesignSystem::TEXT_PRIMARY));
                ui.add_space(DesignSystem::SPACING_SMALL);
                ui.label(
                    egui::RichText::new("Adjust the inputs and try again.")
                        .color(DesignSystem::TEXT_MUTED),
                );
            }
        }
    }

    fn render_summary(&self, ui: &mut egui::Ui) {
        egui::Grid::new("input_summary")
            .num_columns(2)
            .spacing([24.0, 4.0])
            .striped(true)
            .show(ui, |ui| {
                for (name, value) in field_registry::record_fields(&self.record) {
                    ui.label(egui::RichText::new(name).color(DesignSystem::TEXT_SECONDARY));
                    let text = match value {
                        FieldValue::Number(v) => {
                            if v.fract() == 0.0 {
                                format!("{v:.0}")
                            } else {
                                format!("{v:.2}")
                            }
                        }
                        FieldValue::Category(v) => v.to_string(),
                    };
                    ui.label(egui::RichText::new(text).color(DesignSystem::TEXT_PRIMARY));
                    ui.end_row();
                }
            });
    }
}

impl eframe::App for ChurnApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(DesignSystem::theme());

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("💳 Bank Customer Churn Prediction");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.service.model_name())
                            .small()
                            .color(DesignSystem::TEXT_MUTED),
                    );
                });
            });
            ui.label(
                egui::RichText::new(
                    "Enter customer details to predict if they are likely to churn (exit) the bank.",
                )
                .color(DesignSystem::TEXT_SECONDARY),
            );
        });

        egui::SidePanel::left("customer_panel")
            .default_width(340.0)
            .min_width(280.0)
            .resizable(true)
            .show(ctx, |ui| {
                ui.heading("Customer Details");
                ui.separator();

                egui::ScrollArea::vertical()
                    .auto_shrink([false, true])
                    .show(ui, |ui| {
                        render_customer_form(ui, &mut self.record);

                        ui.add_space(DesignSystem::SPACING_LARGE);
                        let predict = egui::Button::new(
                            egui::RichText::new("🔮 Predict Churn").size(16.0).strong(),
                        )
                        .fill(DesignSystem::ACCENT_PRIMARY);

                        if ui.add_sized([ui.available_width(), 36.0], predict).clicked() {
                            self.outcome = Some(self.service.run(&self.record));
                        }
                    });
            });

        egui::CentralPanel::default()
            .frame(DesignSystem::main_frame())
            .show(ctx, |ui| {
                Card::new().title("INPUT SUMMARY").show(ui, |ui| {
                    self.render_summary(ui);
                });

                ui.add_space(DesignSystem::SPACING_MEDIUM);

                Card::new()
                    .title("PREDICTION RESULT")
                    .min_height(160.0)
                    .show(ui, |ui| {
                        self.render_result(ui);
                    });
            });
    }
}
