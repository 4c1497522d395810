use crate::color::ColorMap;
use crate::data::filter::{filtered_indices, FilterCriteria};
use crate::data::forecast::TrendModel;
use crate::data::model::SalesDataset;

/// UI bounds for the future-month selector. Month 13 is the first month
/// past a 12-month history; the trend model itself accepts any index.
pub const FORECAST_MONTH_MIN: usize = 13;
pub const FORECAST_MONTH_MAX: usize = 24;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full session state, independent of rendering.
///
/// One interaction = one synchronous pass: slider changes update
/// `criteria`, `refilter` recomputes `visible_indices`, and the next frame
/// redraws table, metrics, and charts from that. The dataset and the trend
/// model are read-only between loads.
pub struct AppState {
    /// Loaded dataset (None until a file is loaded).
    pub dataset: Option<SalesDataset>,

    /// Current range criteria from the sidebar sliders.
    pub criteria: FilterCriteria,

    /// Indices of records passing the current criteria (cached).
    pub visible_indices: Vec<usize>,

    /// Trend model fit over the full dataset at load time. Never refit on
    /// the filtered view.
    pub model: Option<TrendModel>,

    /// Why the trend model is unavailable, if it is.
    pub fit_error: Option<String>,

    /// Month label → bar colour.
    pub color_map: ColorMap,

    /// Future month selected for the forecast.
    pub forecast_month: usize,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            criteria: FilterCriteria::default(),
            visible_indices: Vec::new(),
            model: None,
            fit_error: None,
            color_map: ColorMap::default(),
            forecast_month: FORECAST_MONTH_MIN,
            status_message: None,
            loading: false,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset: initialise the criteria to the full
    /// span, fit the trend model, rebuild the colour map.
    pub fn set_dataset(&mut self, dataset: SalesDataset) {
        self.criteria = FilterCriteria::spanning(&dataset);
        self.visible_indices = (0..dataset.len()).collect();
        self.color_map = ColorMap::new(&dataset.month_labels());
        self.forecast_month = FORECAST_MONTH_MIN;

        match TrendModel::fit(&dataset) {
            Ok(model) => {
                log::info!(
                    "Fit trend: slope {:.2}, intercept {:.2}",
                    model.slope,
                    model.intercept
                );
                self.model = Some(model);
                self.fit_error = None;
            }
            Err(e) => {
                log::error!("Trend fit failed: {e}");
                self.model = None;
                self.fit_error = Some(e.to_string());
            }
        }

        self.dataset = Some(dataset);
        self.status_message = None;
        self.loading = false;
    }

    /// Recompute `visible_indices` after a criteria change.
    pub fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            self.visible_indices = filtered_indices(ds, &self.criteria);
        }
    }

    /// Sales values of the filtered view, in view order. Input to the
    /// summary statistics and the histogram.
    pub fn visible_sales(&self) -> Vec<f64> {
        match &self.dataset {
            Some(ds) => self
                .visible_indices
                .iter()
                .map(|&i| ds.records[i].sales)
                .collect(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded_state() -> AppState {
        let mut state = AppState::default();
        state.set_dataset(SalesDataset::from_rows(vec![
            ("Jan".into(), 100.0),
            ("Feb".into(), 200.0),
            ("Mar".into(), 300.0),
        ]));
        state
    }

    #[test]
    fn set_dataset_spans_and_fits() {
        let state = loaded_state();
        assert_eq!(state.criteria.index_range, (1, 3));
        assert_eq!(state.criteria.sales_range, (100, 300));
        assert_eq!(state.visible_indices, vec![0, 1, 2]);
        assert_eq!(state.forecast_month, FORECAST_MONTH_MIN);

        let model = state.model.expect("model should fit");
        assert!((model.slope - 100.0).abs() < 1e-9);
    }

    #[test]
    fn refilter_tracks_criteria_changes() {
        let mut state = loaded_state();
        state.criteria = FilterCriteria {
            index_range: (1, 2),
            sales_range: (0, 1000),
        };
        state.refilter();
        assert_eq!(state.visible_indices, vec![0, 1]);
        assert_eq!(state.visible_sales(), vec![100.0, 200.0]);
    }

    #[test]
    fn filtering_does_not_refit_the_model() {
        let mut state = loaded_state();
        let before = state.model;
        state.criteria.sales_range = (500, 600);
        state.refilter();
        assert!(state.visible_indices.is_empty());
        assert_eq!(state.model, before);
    }

    #[test]
    fn degenerate_dataset_surfaces_fit_error() {
        let mut state = AppState::default();
        state.set_dataset(SalesDataset::from_rows(vec![("Jan".into(), 100.0)]));
        assert!(state.model.is_none());
        assert!(state.fit_error.is_some());
        // The rest of the dashboard still works.
        assert_eq!(state.visible_indices, vec![0]);
    }
}
