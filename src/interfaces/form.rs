//! Customer details form (sidebar)

use crate::domain::customer::{CardType, CustomerRecord, Gender, Geography};
use crate::interfaces::design_system::DesignSystem;

/// Renders the fourteen input widgets over the record itself. Widget ranges
/// enforce the schema domains, so the record is always fully populated and
/// in-range by the time the predict action fires.
pub fn render_customer_form(ui: &mut egui::Ui, record: &mut CustomerRecord) {
    section_label(ui, "Profile");

    ui.add(egui::Slider::new(&mut record.credit_score, 300..=900).text("Credit Score"));

    egui::ComboBox::from_label("Geography")
        .selected_text(record.geography.as_str())
        .show_ui(ui, |ui| {
            for geo in Geography::ALL {
                ui.selectable_value(&mut record.geography, geo, geo.as_str());
            }
        });

    egui::ComboBox::from_label("Gender")
        .selected_text(record.gender.as_str())
        .show_ui(ui, |ui| {
            for gender in Gender::ALL {
                ui.selectable_value(&mut record.gender, gender, gender.as_str());
            }
        });

    ui.add(egui::Slider::new(&mut record.age, 18..=90).text("Age"));

    ui.add_space(DesignSystem::SPACING_MEDIUM);
    section_label(ui, "Relationship");

    ui.add(egui::Slider::new(&mut record.tenure, 0..=10).text("Tenure (years with bank)"));

    ui.horizontal(|ui| {
        ui.add(
            egui::DragValue::new(&mut record.balance)
                .range(0.0..=300_000.0)
                .speed(1_000.0)
                .prefix("$"),
        );
        ui.label("Balance");
    });

    ui.add(egui::Slider::new(&mut record.num_of_products, 1..=4).text("Number of Products"));

    ui.checkbox(&mut record.has_cr_card, "Has credit card");
    ui.checkbox(&mut record.is_active_member, "Is active member");

    ui.horizontal(|ui| {
        ui.add(
            egui::DragValue::new(&mut record.estimated_salary)
                .range(0.0..=250_000.0)
                .speed(1_000.0)
                .prefix("$"),
        );
        ui.label("Estimated Salary");
    });

    ui.add_space(DesignSystem::SPACING_MEDIUM);
    section_label(ui, "Engagement");

    ui.checkbox(&mut record.complain, "Filed a complaint");

    ui.add(egui::Slider::new(&mut record.satisfaction_score, 1..=5).text("Satisfaction Score"));

    egui::ComboBox::from_label("Card Type")
        .selected_text(record.card_type.as_str())
        .show_ui(ui, |ui| {
            for card in CardType::ALL {
                ui.selectable_value(&mut record.card_type, card, card.as_str());
            }
        });

    ui.horizontal(|ui| {
        ui.add(
            egui::DragValue::new(&mut record.point_earned)
                .range(0..=20_000)
                .speed(100),
        );
        ui.label("Reward Points");
    });
}

fn section_label(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(12.0)
            .color(DesignSystem::TEXT_MUTED)
            .strong(),
    );
    ui.add_space(DesignSystem::SPACING_SMALL);
}
