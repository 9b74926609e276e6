//! Sales & revenue analytics over a synthetic Superstore-style dataset.
//!
//! The library holds everything that is independent of rendering: the
//! seeded generator, the filter and aggregation pipeline, export, display
//! formatting and the UI state. The `sales-dashboard` binary draws it with
//! egui; `export_dataset` writes the generated table to disk.

pub mod assets;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod format;
pub mod state;
