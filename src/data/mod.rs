/// Data layer: generation, filtering, aggregation and export.
///
/// Architecture:
/// ```text
///   seed + N
///        │
///        ▼
///   ┌───────────┐
///   │ generator  │  seeded draws → SalesDataset (cached once per process)
///   └───────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ SalesDataset  │  Vec<Record>, distinct filter values
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  year / region / category / segment → filtered indices
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  KPIs, grouped sums, series, margins, top-N
///   └───────────┘      (bundled per filter state by `snapshot`)
///        │
///        ▼
///   ┌──────────┐
///   │  export   │  filtered records → .csv / .json / .parquet
///   └──────────┘
/// ```

pub mod aggregate;
pub mod export;
pub mod filter;
pub mod generator;
pub mod model;
pub mod snapshot;
