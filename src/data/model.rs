// ---------------------------------------------------------------------------
// SalesRecord – one row of the dataset
// ---------------------------------------------------------------------------

/// A single observation: one month of sales.
///
/// `index` is the synthetic 1-based position of the record in file order.
/// It is derived at load time, never read from the file, and serves as the
/// sole predictor for the trend model.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesRecord {
    /// Month label as it appears in the file (e.g. "Jan").
    pub month: String,
    /// Sales value. Taken as-is from the file; no range validation.
    pub sales: f64,
    /// Sequential 1..N position in load order.
    pub index: usize,
}

// ---------------------------------------------------------------------------
// SalesDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset, immutable after load.
#[derive(Debug, Clone, Default)]
pub struct SalesDataset {
    /// All records, in file order.
    pub records: Vec<SalesRecord>,
}

impl SalesDataset {
    /// Build a dataset from parsed `(month, sales)` rows, assigning the
    /// sequential index.
    pub fn from_rows(rows: Vec<(String, f64)>) -> Self {
        let records = rows
            .into_iter()
            .enumerate()
            .map(|(i, (month, sales))| SalesRecord {
                month,
                sales,
                index: i + 1,
            })
            .collect();
        SalesDataset { records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// `(min, max)` of the sales column, or `None` for an empty dataset.
    pub fn sales_bounds(&self) -> Option<(f64, f64)> {
        if self.records.is_empty() {
            return None;
        }
        let min = self
            .records
            .iter()
            .map(|r| r.sales)
            .fold(f64::INFINITY, f64::min);
        let max = self
            .records
            .iter()
            .map(|r| r.sales)
            .fold(f64::NEG_INFINITY, f64::max);
        Some((min, max))
    }

    /// Month labels in load order (x-axis labels for the charts).
    pub fn month_labels(&self) -> Vec<String> {
        self.records.iter().map(|r| r.month.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_assigns_one_based_index() {
        let ds = SalesDataset::from_rows(vec![
            ("Jan".into(), 100.0),
            ("Feb".into(), 200.0),
            ("Mar".into(), 300.0),
        ]);
        let indices: Vec<usize> = ds.records.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
        assert_eq!(ds.records[0].month, "Jan");
        assert_eq!(ds.records[2].sales, 300.0);
    }

    #[test]
    fn sales_bounds_span_the_column() {
        let ds = SalesDataset::from_rows(vec![
            ("Jan".into(), 150.0),
            ("Feb".into(), 90.0),
            ("Mar".into(), 310.0),
        ]);
        assert_eq!(ds.sales_bounds(), Some((90.0, 310.0)));
    }

    #[test]
    fn sales_bounds_empty_is_none() {
        assert_eq!(SalesDataset::default().sales_bounds(), None);
    }
}
