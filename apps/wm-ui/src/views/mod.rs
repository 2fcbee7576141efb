pub mod form_view;
pub mod list_view;

pub use form_view::FormAction;
pub use list_view::ListAction;

use egui::Color32;
use wm_core::ActivityKind;

/// Per-kind accent used by both the list and the map popups.
pub fn kind_color(kind: ActivityKind) -> Color32 {
    match kind {
        ActivityKind::Running => Color32::from_rgb(46, 160, 67),
        ActivityKind::Cycling => Color32::from_rgb(255, 149, 0),
    }
}
