#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod map_panel;
mod views;

use app::WaymarkApp;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("Waymark"),
        ..Default::default()
    };

    eframe::run_native(
        "Waymark",
        options,
        Box::new(|cc| Ok(Box::new(WaymarkApp::new(cc)))),
    )
}
