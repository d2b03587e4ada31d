//! Export module for sweep results.
//!
//! # Available formats
//!
//! | Format  | Module          |
//! |---------|-----------------|
//! | CSV     | [`csv`]         |
//!
//! Each format lives in its own sub-module; adding a new one means adding
//! a file, without modifying existing code.
//!
//! # Usage example
//!
//! ```rust,ignore
//! use taper_rs::output::export::{export_tapering_map, map_filename};
//!
//! // Conventional filename encoding the sweep bounds
//! export_tapering_map(&outcome.tapering, &map_filename(&config), None)?;
//!
//! // Or any explicit path
//! export_tapering_map(&outcome.tapering, "map.csv", None)?;
//! ```

pub mod csv;

// Re-export the most commonly used items at the module level so users can write:
//   use taper_rs::output::export::{export_tapering_map, CsvConfig};
// instead of the full sub-module path.
pub use csv::{
    export_tapering_map,
    export_untapered_sizes,
    map_filename,
    size_filename,
    CsvConfig,
    CsvMetadata,
};
