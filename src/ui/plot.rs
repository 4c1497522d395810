use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Line, Plot, PlotPoints, Points};

use crate::color::ColorMap;
use crate::data::model::{SalesDataset, SalesRecord};
use crate::data::stats;

/// Fixed bin count for the sales distribution histogram.
const HISTOGRAM_BINS: usize = 5;

const CHART_HEIGHT: f32 = 240.0;

// ---------------------------------------------------------------------------
// Chart renderers (stateless, one per chart)
// ---------------------------------------------------------------------------
//
// Each renderer draws from the filtered view. An empty view produces an
// empty plot frame, never a panic.

/// Line chart: sales over month, with point markers.
pub fn trend_line(ui: &mut Ui, dataset: &SalesDataset, visible: &[usize]) {
    let points: Vec<[f64; 2]> = visible
        .iter()
        .map(|&i| {
            let r = &dataset.records[i];
            [r.index as f64, r.sales]
        })
        .collect();

    let labels = dataset.month_labels();
    Plot::new("sales_trend")
        .height(CHART_HEIGHT)
        .x_axis_label("Month")
        .y_axis_label("Sales")
        .x_axis_formatter(move |mark, _range| month_tick(&labels, mark.value))
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(PlotPoints::from(points.clone())).width(2.0));
            plot_ui.points(Points::new(PlotPoints::from(points)).radius(3.0));
        });
}

/// Bar chart: one bar per month, coloured via the month colour map.
pub fn sales_bars(ui: &mut Ui, dataset: &SalesDataset, visible: &[usize], colors: &ColorMap) {
    let bars: Vec<Bar> = visible
        .iter()
        .map(|&i| {
            let r: &SalesRecord = &dataset.records[i];
            Bar::new(r.index as f64, r.sales)
                .width(0.6)
                .fill(colors.color_for(&r.month))
                .name(r.month.clone())
        })
        .collect();

    let labels = dataset.month_labels();
    Plot::new("sales_bars")
        .height(CHART_HEIGHT)
        .x_axis_label("Month")
        .y_axis_label("Sales")
        .x_axis_formatter(move |mark, _range| month_tick(&labels, mark.value))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

/// Histogram of the filtered sales values, five equal-width bins.
pub fn sales_histogram(ui: &mut Ui, sales: &[f64]) {
    let bars: Vec<Bar> = stats::histogram(sales, HISTOGRAM_BINS)
        .iter()
        .map(|bin| {
            Bar::new(bin.center(), bin.count as f64)
                .width(bin.width() * 0.95)
                .name(format!("{:.0}–{:.0}", bin.lo, bin.hi))
        })
        .collect();

    Plot::new("sales_histogram")
        .height(CHART_HEIGHT)
        .x_axis_label("Sales")
        .y_axis_label("Frequency")
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

/// Month label for an integer axis tick; other marks get no label.
fn month_tick(labels: &[String], value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() > 1e-6 || rounded < 1.0 {
        return String::new();
    }
    labels
        .get(rounded as usize - 1)
        .cloned()
        .unwrap_or_default()
}
