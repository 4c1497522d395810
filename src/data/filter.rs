use super::model::{SalesDataset, SalesRecord};

// ---------------------------------------------------------------------------
// Filter criteria: the two range predicates driven by the sidebar sliders
// ---------------------------------------------------------------------------

/// Closed-interval bounds on the month index and the sales value.
///
/// A record passes when both predicates hold; both ends are inclusive.
/// An inverted range (`lo > hi`) matches nothing, which is a valid state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterCriteria {
    /// `[lo, hi]` over the 1-based record index.
    pub index_range: (usize, usize),
    /// `[lo, hi]` over the sales value, in whole units (slider granularity).
    pub sales_range: (i64, i64),
}

impl Default for FilterCriteria {
    fn default() -> Self {
        FilterCriteria {
            index_range: (1, 1),
            sales_range: (0, 0),
        }
    }
}

impl FilterCriteria {
    /// Criteria spanning the full dataset, so the initial view shows
    /// everything. Sales bounds are widened to whole units so the inclusive
    /// interval always covers the extremes.
    pub fn spanning(dataset: &SalesDataset) -> Self {
        let (lo, hi) = dataset
            .sales_bounds()
            .map(|(min, max)| (min.floor() as i64, max.ceil() as i64))
            .unwrap_or((0, 0));
        FilterCriteria {
            index_range: (1, dataset.len().max(1)),
            sales_range: (lo, hi),
        }
    }

    /// Whether a record satisfies both range predicates.
    pub fn matches(&self, record: &SalesRecord) -> bool {
        record.index >= self.index_range.0
            && record.index <= self.index_range.1
            && record.sales >= self.sales_range.0 as f64
            && record.sales <= self.sales_range.1 as f64
    }
}

/// Return indices of records that pass the current criteria.
///
/// Full rescan on every call; the datasets this tool targets are tens of
/// rows, so there is nothing to cache or update incrementally. An empty
/// result is a valid state, not an error.
pub fn filtered_indices(dataset: &SalesDataset, criteria: &FilterCriteria) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, r)| criteria.matches(r))
        .map(|(i, _)| i)
        .collect()
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
    fn spanning_criteria_keep_everything() {
        let ds = dataset();
        let criteria = FilterCriteria::spanning(&ds);
        assert_eq!(criteria.index_range, (1, 3));
        assert_eq!(criteria.sales_range, (100, 300));
        assert_eq!(filtered_indices(&ds, &criteria), vec![0, 1, 2]);
    }

    #[test]
    fn index_and_sales_predicates_are_conjunctive() {
        let ds = dataset();
        let criteria = FilterCriteria {
            index_range: (1, 2),
            sales_range: (0, 1000),
        };
        assert_eq!(filtered_indices(&ds, &criteria), vec![0, 1]);

        // Narrow sales range too: only Feb satisfies both.
        let criteria = FilterCriteria {
            index_range: (1, 2),
            sales_range: (150, 1000),
        };
        assert_eq!(filtered_indices(&ds, &criteria), vec![1]);
    }

    #[test]
    fn bounds_are_inclusive() {
        let ds = dataset();
        let criteria = FilterCriteria {
            index_range: (2, 2),
            sales_range: (200, 200),
        };
        assert_eq!(filtered_indices(&ds, &criteria), vec![1]);
    }

    #[test]
    fn every_included_record_satisfies_both_ranges() {
        let ds = dataset();
        let criteria = FilterCriteria {
            index_range: (2, 3),
            sales_range: (0, 250),
        };
        let included = filtered_indices(&ds, &criteria);
        for (i, record) in ds.records.iter().enumerate() {
            if included.contains(&i) {
                assert!(criteria.matches(record));
            } else {
                assert!(!criteria.matches(record));
            }
        }
    }

    #[test]
    fn no_match_yields_empty_view() {
        let ds = dataset();
        let criteria = FilterCriteria {
            index_range: (1, 3),
            sales_range: (500, 600),
        };
        assert!(filtered_indices(&ds, &criteria).is_empty());
    }

    #[test]
    fn narrowing_a_range_never_grows_the_view() {
        let ds = dataset();
        let wide = FilterCriteria {
            index_range: (1, 3),
            sales_range: (0, 1000),
        };
        let wide_len = filtered_indices(&ds, &wide).len();

        for lo in 1..=3 {
            for hi in lo..=3 {
                let narrow = FilterCriteria {
                    index_range: (lo, hi),
                    ..wide
                };
                assert!(filtered_indices(&ds, &narrow).len() <= wide_len);
            }
        }
        for lo in [0, 100, 250] {
            for hi in [lo, lo + 50, (lo + 500).min(1000)] {
                let narrow = FilterCriteria {
                    sales_range: (lo, hi),
                    ..wide
                };
                assert!(filtered_indices(&ds, &narrow).len() <= wide_len);
            }
        }
    }

    #[test]
    fn inverted_range_matches_nothing() {
        let ds = dataset();
        let criteria = FilterCriteria {
            index_range: (3, 1),
            sales_range: (0, 1000),
        };
        assert!(filtered_indices(&ds, &criteria).is_empty());
    }
}
