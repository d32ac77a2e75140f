/// Data layer: record types, loading, filtering and aggregation.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + validate file → LaunchDataset (once, at startup)
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ LaunchDataset  │  Vec<LaunchRecord>, sites, payload bounds
///   └───────────────┘
///        │  (site selector, payload range)
///        ▼
///   ┌──────────┐
///   │  filter   │  payload range → site → filtered subset
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  pie summary + scatter projection
///   └───────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ dashboard  │  DashboardUpdate handed to the UI
///   └───────────┘
/// ```

pub mod aggregate;
pub mod dashboard;
pub mod filter;
pub mod loader;
pub mod model;
