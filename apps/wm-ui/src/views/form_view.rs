//! Workout entry form.

use egui::{RichText, Ui};
use wm_app::EntryForm;
use wm_core::ActivityKind;

pub enum FormAction {
    Submit,
    Dismiss,
}

pub fn show(ui: &mut Ui, form: &mut EntryForm) -> Option<FormAction> {
    let mut action = None;

    ui.group(|ui| {
        ui.label(RichText::new("New workout").strong());
        if let Some(anchor) = form.anchor() {
            ui.label(format!("at {anchor}"));
        }

        egui::ComboBox::from_label("Type")
            .selected_text(form.kind.label())
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut form.kind, ActivityKind::Running, "Running");
                ui.selectable_value(&mut form.kind, ActivityKind::Cycling, "Cycling");
            });

        ui.horizontal(|ui| {
            ui.label("Distance (km)");
            ui.text_edit_singleline(&mut form.distance);
        });
        ui.horizontal(|ui| {
            ui.label("Duration (min)");
            ui.text_edit_singleline(&mut form.duration);
        });
        // Exactly one kind-specific field is active at a time.
        match form.kind {
            ActivityKind::Running => {
                ui.horizontal(|ui| {
                    ui.label("Cadence (spm)");
                    ui.text_edit_singleline(&mut form.cadence);
                });
            }
            ActivityKind::Cycling => {
                ui.horizontal(|ui| {
                    ui.label("Elev gain (m)");
                    ui.text_edit_singleline(&mut form.elevation);
                });
            }
        }

        ui.horizontal(|ui| {
            if ui.button("OK").clicked() {
                action = Some(FormAction::Submit);
            }
            if ui.button("Cancel").clicked() {
                action = Some(FormAction::Dismiss);
            }
        });
    });

    if action.is_none() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
        action = Some(FormAction::Submit);
    }
    action
}
