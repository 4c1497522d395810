use eframe::egui::{self, Color32, RichText, ScrollArea, Slider, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::SalesDataset;
use crate::data::stats::{self, SummaryStats};
use crate::state::{AppState, FORECAST_MONTH_MAX, FORECAST_MONTH_MIN};
use crate::ui::plot;

// ---------------------------------------------------------------------------
// Left side panel – range filters
// ---------------------------------------------------------------------------

/// Render the filter panel: month-range and sales-range sliders.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    // Copy the slider bounds out so the sliders can mutate the criteria.
    let Some((record_count, sales_lo, sales_hi)) = state.dataset.as_ref().map(|ds| {
        let (lo, hi) = ds
            .sales_bounds()
            .map(|(min, max)| (min.floor() as i64, max.ceil() as i64))
            .unwrap_or((0, 0));
        (ds.len().max(1), lo, hi)
    }) else {
        ui.label("No dataset loaded.");
        return;
    };

    ui.strong("Month range");
    ui.add(Slider::new(&mut state.criteria.index_range.0, 1..=record_count).text("From"));
    ui.add(Slider::new(&mut state.criteria.index_range.1, 1..=record_count).text("To"));
    if state.criteria.index_range.0 > state.criteria.index_range.1 {
        state.criteria.index_range.1 = state.criteria.index_range.0;
    }
    ui.separator();

    ui.strong("Sales range");
    ui.add(Slider::new(&mut state.criteria.sales_range.0, sales_lo..=sales_hi).text("Min"));
    ui.add(Slider::new(&mut state.criteria.sales_range.1, sales_lo..=sales_hi).text("Max"));
    if state.criteria.sales_range.0 > state.criteria.sales_range.1 {
        state.criteria.sales_range.1 = state.criteria.sales_range.0;
    }

    // Recompute visible indices after any slider change.
    state.refilter();
}

// ---------------------------------------------------------------------------
// Central panel – table, metrics, charts, forecast
// ---------------------------------------------------------------------------

/// Render the dashboard body in the central panel.
pub fn dashboard(ui: &mut Ui, state: &mut AppState) {
    if state.dataset.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a data file to get started  (File → Open…)");
        });
        return;
    }

    let sales = state.visible_sales();
    let summary = stats::summarize(&sales);

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            if let Some(ds) = &state.dataset {
                ui.heading("Filtered Sales Data");
                data_table(ui, ds, &state.visible_indices);
                ui.add_space(12.0);

                ui.heading("Key Metrics");
                metrics_row(ui, &summary);
                ui.add_space(12.0);

                ui.heading("Monthly Sales Trend");
                plot::trend_line(ui, ds, &state.visible_indices);
                ui.add_space(12.0);

                ui.heading("Monthly Sales Comparison");
                plot::sales_bars(ui, ds, &state.visible_indices, &state.color_map);
                ui.add_space(12.0);

                ui.heading("Sales Distribution");
                plot::sales_histogram(ui, &sales);
                ui.add_space(12.0);
            }

            forecast_section(ui, state);
        });
}

/// Month/sales table of the filtered view.
fn data_table(ui: &mut Ui, dataset: &SalesDataset, visible: &[usize]) {
    TableBuilder::new(ui)
        .striped(true)
        .max_scroll_height(260.0)
        .column(Column::auto().at_least(120.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Month");
            });
            header.col(|ui| {
                ui.strong("Sales");
            });
        })
        .body(|mut body| {
            for &i in visible {
                let record = &dataset.records[i];
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(record.month.as_str());
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.0}", record.sales));
                    });
                });
            }
        });
}

/// Three metric boxes: average / highest / lowest sales of the view.
fn metrics_row(ui: &mut Ui, summary: &SummaryStats) {
    ui.columns(3, |cols| {
        metric_box(&mut cols[0], "Average Sales", format!("{}", summary.mean));
        metric_box(&mut cols[1], "Highest Sales", format!("{:.0}", summary.max));
        metric_box(&mut cols[2], "Lowest Sales", format!("{:.0}", summary.min));
    });
}

fn metric_box(ui: &mut Ui, title: &str, value: String) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.vertical_centered(|ui: &mut Ui| {
            ui.heading(value);
            ui.label(title);
        });
    });
}

/// Future-month slider and the predicted value.
///
/// The trend is fit on the full history at load time; the current filter
/// selection does not change the forecast.
fn forecast_section(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Sales Forecast");
    ui.add(
        Slider::new(
            &mut state.forecast_month,
            FORECAST_MONTH_MIN..=FORECAST_MONTH_MAX,
        )
        .text("Future month (13 = next month)"),
    );

    match &state.model {
        Some(model) => {
            let predicted = model.predict_sales(state.forecast_month);
            ui.label(
                RichText::new(format!("Predicted sales: {predicted}"))
                    .color(Color32::LIGHT_GREEN)
                    .strong(),
            );
            ui.small("Trend fit on the full dataset; the filters above do not affect it.");
        }
        None => {
            let reason = state
                .fit_error
                .clone()
                .unwrap_or_else(|| "no trend model".to_string());
            ui.label(RichText::new(format!("Forecast unavailable: {reason}")).color(Color32::RED));
        }
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} records loaded, {} visible",
                ds.len(),
                state.visible_indices.len()
            ));
        }

        ui.separator();

        if state.loading {
            ui.spinner();
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open sales data")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        state.loading = true;
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!("Loaded {} records from {}", dataset.len(), path.display());
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e}");
                state.status_message = Some(format!("Error: {e}"));
                state.loading = false;
            }
        }
    }
}
