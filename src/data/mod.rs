/// Data layer: core types, loading, filtering, statistics, and forecasting.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → SalesDataset (index derived from row order)
///   └──────────┘
///        │
///        ├──────────────────────────────┐
///        ▼                              ▼
///   ┌──────────┐                  ┌──────────┐
///   │  filter   │ range criteria  │ forecast  │  OLS fit on the FULL
///   └──────────┘ → visible rows   └──────────┘  dataset, never refit
///        │                              │       on the filtered view
///        ▼                              ▼
///   ┌──────────┐                  predicted sales
///   │  stats    │  mean/max/min,
///   └──────────┘  histogram bins
/// ```

pub mod filter;
pub mod forecast;
pub mod loader;
pub mod model;
pub mod stats;
