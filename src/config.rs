use std::path::PathBuf;

use crate::data::aggregate::DEFAULT_TOP_N;
use crate::data::generator::{DEFAULT_RECORD_COUNT, DEFAULT_SEED};

/// Rows shown in the raw-data table.
pub const DEFAULT_RAW_ROWS: usize = 200;

/// Runtime knobs, read once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// RNG seed for the synthetic dataset.
    pub seed: u64,
    /// Number of generated records.
    pub record_count: usize,
    /// Length of the top-products ranking.
    pub top_n: usize,
    /// Rows shown in the raw-data table.
    pub raw_rows: usize,
    /// Optional footer avatar image.
    pub avatar_path: PathBuf,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            record_count: DEFAULT_RECORD_COUNT,
            top_n: DEFAULT_TOP_N,
            raw_rows: DEFAULT_RAW_ROWS,
            avatar_path: PathBuf::from("assets/avatar.png"),
        }
    }
}

impl DashboardConfig {
    /// Read `DASHBOARD_*` environment variables; unset or unparseable values
    /// keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let d = Self::default();
        Self {
            seed: lookup("DASHBOARD_SEED").and_then(|v| v.parse().ok()).unwrap_or(d.seed),
            record_count: lookup("DASHBOARD_RECORDS").and_then(|v| v.parse().ok()).unwrap_or(d.record_count),
            top_n: lookup("DASHBOARD_TOP_N").and_then(|v| v.parse().ok()).unwrap_or(d.top_n),
            raw_rows: lookup("DASHBOARD_RAW_ROWS").and_then(|v| v.parse().ok()).unwrap_or(d.raw_rows),
            avatar_path: lookup("DASHBOARD_AVATAR").map(PathBuf::from).unwrap_or(d.avatar_path),
        }
    }
}
