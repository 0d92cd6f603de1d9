mod app;
mod config;
mod input;
mod ticker;
mod ui;

use std::time::Instant;

use common::log;
use common::logger::init_logger;
use common::version::VERSION;
use eframe::egui;

use app::SnakeApp;
use config::get_config_manager;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger(Some("snake".to_string()));

    let config_manager = get_config_manager();
    log!(
        "Snake {} reading config from {}",
        VERSION,
        config_manager.content_provider().file_path().display()
    );
    let config = config_manager.get_config()?;

    let settings = config.game.session_settings();
    let window_size = config.window.window_size(&settings.field_size);
    let seed = config.game.seed;
    let cell_size = config.window.cell_size as f32;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(window_size)
            .with_resizable(false)
            .with_title("Snake Game"),
        ..Default::default()
    };

    eframe::run_native(
        "Snake Game",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(SnakeApp::new(
                settings,
                seed,
                cell_size,
                Instant::now(),
            )))
        }),
    )?;

    log!("Window closed");
    Ok(())
}
