mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use app::SalesDashApp;
use eframe::egui;
use state::AppState;

const DEFAULT_DATA_FILE: &str = "sales_data.csv";

fn main() -> eframe::Result {
    env_logger::init();

    // Load the startup dataset eagerly; a different file can be opened from
    // the File menu at any time.
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Sales Analytics Dashboard",
        options,
        Box::new(move |_cc| {
            let mut state = AppState::default();
            if path.exists() {
                match data::loader::load_file(&path) {
                    Ok(dataset) => {
                        log::info!("Loaded {} records from {}", dataset.len(), path.display());
                        state.set_dataset(dataset);
                    }
                    Err(e) => {
                        log::error!("Failed to load {}: {e}", path.display());
                        state.status_message = Some(format!("Error: {e}"));
                    }
                }
            }
            Ok(Box::new(SalesDashApp::new(state)))
        }),
    )
}
