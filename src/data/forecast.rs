use thiserror::Error;

use super::model::SalesDataset;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Degenerate regression input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelFitError {
    #[error("need at least 2 records to fit a trend, got {0}")]
    TooFewRecords(usize),

    #[error("predictor has zero variance, slope is undefined")]
    ZeroVariance,
}

// ---------------------------------------------------------------------------
// TrendModel – univariate OLS over the full dataset
// ---------------------------------------------------------------------------

/// Ordinary least squares line `sales = slope * index + intercept`.
///
/// The model is fit once per dataset load over the complete, *unfiltered*
/// dataset: narrowing the view does not refit the trend. The forecast is an
/// extrapolation of the whole history, not of the current selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendModel {
    pub slope: f64,
    pub intercept: f64,
}

impl TrendModel {
    /// Fit the least-squares line through `(index, sales)`.
    pub fn fit(dataset: &SalesDataset) -> Result<Self, ModelFitError> {
        let n = dataset.len();
        if n < 2 {
            return Err(ModelFitError::TooFewRecords(n));
        }

        let x_mean = dataset.records.iter().map(|r| r.index as f64).sum::<f64>() / n as f64;
        let y_mean = dataset.records.iter().map(|r| r.sales).sum::<f64>() / n as f64;

        let mut sxx = 0.0;
        let mut sxy = 0.0;
        for r in &dataset.records {
            let dx = r.index as f64 - x_mean;
            sxx += dx * dx;
            sxy += dx * (r.sales - y_mean);
        }
        if sxx == 0.0 {
            return Err(ModelFitError::ZeroVariance);
        }

        let slope = sxy / sxx;
        Ok(TrendModel {
            slope,
            intercept: y_mean - slope * x_mean,
        })
    }

    /// Predicted sales at the given index. Pure linear extrapolation; no
    /// bound on how far past the data it may be asked to reach.
    pub fn predict(&self, index: f64) -> f64 {
        self.slope * index + self.intercept
    }

    /// Predicted sales for a future month, truncated toward zero to whole
    /// units for display.
    pub fn predict_sales(&self, index: usize) -> i64 {
        self.predict(index as f64) as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> SalesDataset {
        SalesDataset::from_rows(vec![
            ("Jan".into(), 100.0),
            ("Feb".into(), 200.0),
            ("Mar".into(), 300.0),
        ])
    }

    #[test]
    fn fit_recovers_an_exact_line() {
        let model = TrendModel::fit(&dataset()).unwrap();
        assert!((model.slope - 100.0).abs() < 1e-9);
        assert!(model.intercept.abs() < 1e-9);
    }

    #[test]
    fn forecast_month_thirteen() {
        let model = TrendModel::fit(&dataset()).unwrap();
        assert_eq!(model.predict_sales(13), 1300);
    }

    #[test]
    fn fit_is_deterministic() {
        let a = TrendModel::fit(&dataset()).unwrap();
        let b = TrendModel::fit(&dataset()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn forecast_is_monotonic_with_positive_slope() {
        let model = TrendModel::fit(&dataset()).unwrap();
        assert!(model.slope > 0.0);
        for m in 13..24 {
            assert!(model.predict_sales(m + 1) >= model.predict_sales(m));
        }
    }

    #[test]
    fn forecast_is_monotonic_decreasing_with_negative_slope() {
        let ds = SalesDataset::from_rows(vec![
            ("Jan".into(), 300.0),
            ("Feb".into(), 200.0),
            ("Mar".into(), 100.0),
        ]);
        let model = TrendModel::fit(&ds).unwrap();
        assert!(model.slope < 0.0);
        for m in 13..24 {
            assert!(model.predict_sales(m + 1) <= model.predict_sales(m));
        }
    }

    #[test]
    fn prediction_truncates_toward_zero() {
        let model = TrendModel {
            slope: 0.0,
            intercept: -10.7,
        };
        // An integer cast truncates toward zero, so -10.7 becomes -10.
        assert_eq!(model.predict_sales(13), -10);

        let model = TrendModel {
            slope: 0.0,
            intercept: 10.7,
        };
        assert_eq!(model.predict_sales(13), 10);
    }

    #[test]
    fn fewer_than_two_records_is_an_error() {
        let empty = SalesDataset::default();
        assert_eq!(TrendModel::fit(&empty), Err(ModelFitError::TooFewRecords(0)));

        let one = SalesDataset::from_rows(vec![("Jan".into(), 100.0)]);
        assert_eq!(TrendModel::fit(&one), Err(ModelFitError::TooFewRecords(1)));
    }

    #[test]
    fn noisy_series_still_fits() {
        let ds = SalesDataset::from_rows(vec![
            ("Jan".into(), 120.0),
            ("Feb".into(), 95.0),
            ("Mar".into(), 180.0),
            ("Apr".into(), 160.0),
            ("May".into(), 210.0),
        ]);
        let model = TrendModel::fit(&ds).unwrap();
        // Residuals of an OLS fit with an intercept sum to zero.
        let residual_sum: f64 = ds
            .records
            .iter()
            .map(|r| r.sales - model.predict(r.index as f64))
            .sum();
        assert!(residual_sum.abs() < 1e-9);
    }
}
