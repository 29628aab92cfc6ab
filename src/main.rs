#![warn(clippy::all, rust_2018_idioms)]

use sketch_pad::{SketchApp, SketchConfig};

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = SketchConfig::from_env().unwrap_or_else(|err| {
        log::warn!("Ignoring configuration overrides: {err}");
        SketchConfig::default()
    });
    log::info!(
        "Starting sketch pad on a {}x{} canvas",
        config.canvas.width,
        config.canvas.height
    );

    let size = [config.canvas.width as f32, config.canvas.height as f32];
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Sketch")
            .with_inner_size(size)
            .with_min_inner_size(size),
        ..Default::default()
    };

    eframe::run_native(
        "Sketch",
        native_options,
        Box::new(move |cc| Ok(Box::new(SketchApp::new(cc, config)))),
    )
}
