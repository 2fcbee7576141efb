//! Rendered workout list.

use egui::{RichText, ScrollArea, Sense, Ui};
use wm_core::{ActivityDetail, Workout, WorkoutId};

use super::kind_color;

pub enum ListAction {
    Focus(WorkoutId),
    Delete(WorkoutId),
}

pub fn show(ui: &mut Ui, workouts: &[Workout]) -> Option<ListAction> {
    let mut action = None;

    if workouts.is_empty() {
        ui.label("No workouts logged yet");
        return None;
    }

    ScrollArea::vertical()
        .auto_shrink([false, true])
        .show(ui, |ui| {
            for workout in workouts {
                let entry = ui.group(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(workout.description())
                                .strong()
                                .color(kind_color(workout.kind())),
                        );
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if ui.small_button("✕").clicked() {
                                    action = Some(ListAction::Delete(workout.id().clone()));
                                }
                            },
                        );
                    });
                    ui.horizontal(|ui| {
                        ui.label(format!("{:.1} km", workout.distance_km()));
                        ui.label(format!("{:.0} min", workout.duration_min()));
                        match workout.detail() {
                            ActivityDetail::Running {
                                cadence_spm,
                                pace_min_per_km,
                            } => {
                                ui.label(format!("{pace_min_per_km:.1} min/km"));
                                ui.label(format!("{cadence_spm:.0} spm"));
                            }
                            ActivityDetail::Cycling {
                                elevation_gain_m,
                                speed_kmh,
                            } => {
                                ui.label(format!("{speed_kmh:.1} km/h"));
                                ui.label(format!("{elevation_gain_m:.0} m"));
                            }
                        }
                    });
                });

                // Anywhere on the entry that is not the delete control
                // re-centers the map on this workout.
                let clicked = entry.response.interact(Sense::click()).clicked();
                if clicked && action.is_none() {
                    action = Some(ListAction::Focus(workout.id().clone()));
                }
            }
        });

    action
}
