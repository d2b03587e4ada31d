//! Output module for sweep results
//!
//! This module provides tools to output sweep results in two forms:
//! - **Export**: CSV data files for external analysis
//! - **Visualization**: PNG plots using plotters
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── export/             ← Data export
//! │   ├── mod.rs
//! │   └── csv.rs
//! └── visualization/      ← Plots and graphics
//!     ├── mod.rs
//!     ├── config.rs
//!     └── shape_map.rs
//! ```
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use taper_rs::output::export::{export_tapering_map, export_untapered_sizes, map_filename};
//! use taper_rs::output::visualization::plot_shape_map;
//!
//! let outcome = run_sweep(&config, None)?;
//!
//! export_tapering_map(&outcome.tapering, &map_filename(&config), None)?;
//! plot_shape_map(&outcome.tapering, &outcome.untapered, "shape_map.png", None)?;
//! ```
//!
//! Both sinks are pure consumers of [`crate::sweep::SweepOutcome`]: they
//! never recompute anything, so exporting and plotting the same outcome
//! twice produces identical files.

pub mod export;
pub mod visualization;

// Re-export commonly used items for convenience
pub use export::{
    export_tapering_map,
    export_untapered_sizes,
    map_filename,
    size_filename,
    CsvConfig,
};

pub use visualization::{plot_shape_map, plot_untapered_sizes, PlotConfig};
