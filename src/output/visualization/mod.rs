//! Visualization module for sweep results
//!
//! This module uses the `plotters` library to generate static PNG images
//! of the two sweep artefacts:
//!
//! - `plot_shape_map()`: the (flux ratio × growth time) tapering heatmap,
//!   with the untapered operating points overlaid as a curve
//! - `plot_untapered_sizes()`: the achievable straight-wire geometries,
//!   diameter against length
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use taper_rs::output::visualization::{plot_shape_map, plot_untapered_sizes};
//!
//! let outcome = run_sweep(&config, None)?;
//!
//! plot_shape_map(&outcome.tapering, &outcome.untapered, "shape_map.png", None)?;
//! plot_untapered_sizes(&outcome.untapered, "sizes.png", None)?;
//! ```
//!
//! Plots are a convenience view of the data; the CSV export in
//! [`crate::output::export`] is the authoritative record.

mod config;
mod shape_map;

pub use config::{PlotConfig, NO_TITLE};
pub use shape_map::{plot_shape_map, plot_untapered_sizes};
