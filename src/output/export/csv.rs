//! CSV export functionality for tapering sweep results
//!
//! This module writes the two sweep artefacts to CSV (Comma-Separated
//! Values) files, compatible with Excel, Python pandas, MATLAB, and most
//! data analysis tools.
//!
//! # Features
//!
//! - **Matrix export**: one row per flux ratio, one column per growth time
//! - **Size-table export**: one `(length, diameter)` row per untapered point
//! - **Conventional filenames**: sweep bounds encoded in the name, so runs
//!   with different parameter sets never overwrite each other
//! - **Metadata support**: optional header comments with sweep parameters
//! - **Validation**: checks for NaN, Inf, and empty matrices before writing
//!
//! # Quick Examples
//!
//! ## Minimal Export
//!
//! ```rust,ignore
//! use taper_rs::output::export::{export_tapering_map, map_filename};
//!
//! let outcome = run_sweep(&config, None)?;
//! export_tapering_map(&outcome.tapering, &map_filename(&config), None)?;
//! ```
//!
//! **Output** (`Map-time10_120_1-ratio1_30_0-lambda2400.csv`):
//! ```csv
//! 0.812311,0.734919,...
//! 0.799402,0.721051,...
//! ...
//! ```
//!
//! Data rows only, no column header: the filename carries the axes, and
//! downstream tools reload the file as a bare matrix.
//!
//! ## With Metadata
//!
//! ```rust,ignore
//! use taper_rs::output::export::{export_tapering_map, CsvConfig, CsvMetadata};
//!
//! let config_csv = CsvConfig::default()
//!     .with_metadata(CsvMetadata::from_config(&config));
//!
//! export_tapering_map(&outcome.tapering, "map.csv", Some(&config_csv))?;
//! ```
//!
//! **Output**:
//! ```csv
//! # Nanowire Tapering Sweep Data
//! # Generated: 2026-08-25T15:30:00Z
//! # Eta: 3.25
//! # Diffusion Length: 2400 nm
//! # ...
//! #
//! 0.812311,0.734919,...
//! ```

use std::error::Error;
use std::fs::File;
use std::io::Write;

use crate::config::SweepConfig;
use crate::sweep::{TaperingMap, UntaperedTable};

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Example
///
/// ```rust,ignore
/// let config = CsvConfig {
///     delimiter: ';',        // European CSV
///     precision: 10,         // High precision
///     ..Default::default()
/// };
/// ```
#[derive(Clone)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal separator (default: '.')
    pub decimal_separator: char,

    /// Number of decimal places for floating-point values (default: 6)
    pub precision: usize,

    /// Include metadata header comments (default: false)
    ///
    /// Off by default: the metadata header carries a generation timestamp,
    /// so enabling it makes repeated exports of the same outcome differ.
    pub include_metadata: bool,

    /// Metadata to include in header
    pub metadata: Option<CsvMetadata>,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 6,
            include_metadata: false,
            metadata: None,
        }
    }
}

impl CsvConfig {
    /// Create config with European CSV format (semicolon, comma for decimal)
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// Create config with high precision (12 decimal places)
    pub fn high_precision() -> Self {
        Self {
            precision: 12,
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }
}

/// Metadata for CSV header comments
///
/// All fields are optional. Only non-None fields are included in the CSV
/// header.
#[derive(Clone, Default)]
pub struct CsvMetadata {
    /// Droplet shape factor η
    pub eta: Option<f64>,

    /// Sidewall diffusion length λ (nm)
    pub diffusion_length: Option<f64>,

    /// Axial growth rate v (nm/min)
    pub axial_growth_rate: Option<f64>,

    /// Initial nanowire radius R₀ (nm)
    pub initial_radius: Option<f64>,

    /// Flux-ratio sweep bounds (min, max, step)
    pub ratio_bounds: Option<(f64, f64, f64)>,

    /// Growth-time sweep bounds (min, max, step) (min)
    pub time_bounds: Option<(f64, f64, f64)>,

    /// Additional custom parameters
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Create metadata from the sweep configuration
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let metadata = CsvMetadata::from_config(&SweepConfig::default());
    /// ```
    pub fn from_config(config: &SweepConfig) -> Self {
        Self {
            eta: Some(config.eta),
            diffusion_length: Some(config.diffusion_length),
            axial_growth_rate: Some(config.axial_growth_rate),
            initial_radius: Some(config.initial_radius),
            ratio_bounds: Some((config.ratio_min, config.ratio_max, config.ratio_step)),
            time_bounds: Some((config.time_min, config.time_max, config.time_step)),
            ..Default::default()
        }
    }

    /// Add custom parameter
    pub fn add_custom(&mut self, key: String, value: String) {
        self.custom.push((key, value));
    }
}

// =============================================================================
// Filename Conventions
// =============================================================================

/// Conventional filename for the tapering-map CSV
///
/// Sweep bounds are truncated to integers, so ratio bounds like 1.4 print
/// as 1. The name distinguishes parameter sets, it does not round-trip
/// them; the metadata header carries the exact values when enabled.
///
/// Default configuration: `Map-time10_120_1-ratio1_30_0-lambda2400.csv`
pub fn map_filename(config: &SweepConfig) -> String {
    format!(
        "Map-time{}_{}_{}-ratio{}_{}_{}-lambda{}.csv",
        config.time_min as i64,
        config.time_max as i64,
        config.time_step as i64,
        config.ratio_min as i64,
        config.ratio_max as i64,
        config.ratio_step as i64,
        config.diffusion_length as i64,
    )
}

/// Conventional filename for the untapered-sizes CSV
///
/// Default configuration: `size-flux10_120_1-ratio1_30_0-lambda2400.csv`
pub fn size_filename(config: &SweepConfig) -> String {
    format!(
        "size-flux{}_{}_{}-ratio{}_{}_{}-lambda{}.csv",
        config.time_min as i64,
        config.time_max as i64,
        config.time_step as i64,
        config.ratio_min as i64,
        config.ratio_max as i64,
        config.ratio_step as i64,
        config.diffusion_length as i64,
    )
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Write metadata header comments to file
fn write_metadata_header(file: &mut File, metadata: &CsvMetadata) -> Result<(), Box<dyn Error>> {
    writeln!(file, "# Nanowire Tapering Sweep Data")?;

    // Timestamp (current time)
    let now = chrono::Utc::now();
    writeln!(file, "# Generated: {}", now.to_rfc3339())?;

    if let Some(eta) = metadata.eta {
        writeln!(file, "# Eta: {}", eta)?;
    }
    if let Some(lambda) = metadata.diffusion_length {
        writeln!(file, "# Diffusion Length: {} nm", lambda)?;
    }
    if let Some(v) = metadata.axial_growth_rate {
        writeln!(file, "# Axial Growth Rate: {} nm/min", v)?;
    }
    if let Some(r0) = metadata.initial_radius {
        writeln!(file, "# Initial Radius: {} nm", r0)?;
    }
    if let Some((min, max, step)) = metadata.ratio_bounds {
        writeln!(file, "# Flux Ratio: {} to {} step {}", min, max, step)?;
    }
    if let Some((min, max, step)) = metadata.time_bounds {
        writeln!(file, "# Growth Time: {} to {} step {} min", min, max, step)?;
    }

    // Custom parameters
    for (key, value) in &metadata.custom {
        writeln!(file, "# {}: {}", key, value)?;
    }

    // Separator
    writeln!(file, "#")?;

    Ok(())
}

/// Format number with configured precision and decimal separator
fn format_number(value: f64, config: &CsvConfig) -> String {
    let formatted = format!("{:.prec$}", value, prec = config.precision);

    // Replace decimal separator if needed
    if config.decimal_separator != '.' {
        formatted.replace('.', &config.decimal_separator.to_string())
    } else {
        formatted
    }
}

// =============================================================================
// Export Functions
// =============================================================================

/// Export the tapering map to CSV
///
/// Writes one row per flux ratio (ascending) with one column per growth
/// time (ascending). No header row: downstream tools reload the file as a
/// bare matrix and the filename convention carries the axes.
///
/// # Arguments
///
/// * `map` - Tapering map from [`crate::sweep::run_sweep`]
/// * `output_path` - Output file path (see [`map_filename`])
/// * `configuration` - Optional CSV configuration (uses default if None)
///
/// # Errors
///
/// - Empty matrix
/// - NaN or Inf values
/// - File creation errors
///
/// # Example
///
/// ```rust,ignore
/// export_tapering_map(&outcome.tapering, &map_filename(&config), None)?;
/// ```
pub fn export_tapering_map(
    map: &TaperingMap,
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<(), Box<dyn Error>> {
    // ============================= Validation =============================

    if map.matrix.is_empty() {
        return Err("Empty data: tapering matrix has no cells".into());
    }

    if !map.is_finite() {
        return Err("Invalid data: NaN or Inf detected in tapering matrix".into());
    }

    // ============================= Configuration ==========================

    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    // ============================= Open File ==============================

    let mut file = File::create(output_path)?;

    // ============================= Write Metadata =========================

    if configuration.include_metadata {
        if let Some(metadata) = &configuration.metadata {
            write_metadata_header(&mut file, metadata)?;
        }
    }

    // ============================= Write Data =============================

    for row in map.matrix.rows() {
        let mut first = true;
        for &value in row.iter() {
            if !first {
                write!(file, "{}", configuration.delimiter)?;
            }
            write!(file, "{}", format_number(value, configuration))?;
            first = false;
        }
        writeln!(file)?;
    }

    Ok(())
}

/// Export the untapered size table to CSV
///
/// Writes one `length,diameter` row per untapered point, in ascending
/// flux-ratio order. An empty table is not an error: the file is written
/// with zero data rows, recording that no flux ratio produced a straight
/// wire.
///
/// # Arguments
///
/// * `table` - Untapered table from [`crate::sweep::run_sweep`]
/// * `output_path` - Output file path (see [`size_filename`])
/// * `configuration` - Optional CSV configuration
///
/// # Errors
///
/// - NaN or Inf values
/// - File creation errors
pub fn export_untapered_sizes(
    table: &UntaperedTable,
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<(), Box<dyn Error>> {
    // ============================= Validation =============================

    for point in &table.points {
        if !point.length.is_finite() || !point.diameter.is_finite() {
            return Err(format!(
                "Invalid data: NaN or Inf detected at flux ratio {}",
                point.flux_ratio
            )
            .into());
        }
    }

    // ============================= Configuration ==========================

    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    // ============================= Open File ==============================

    let mut file = File::create(output_path)?;

    // ============================= Write Metadata =========================

    if configuration.include_metadata {
        if let Some(metadata) = &configuration.metadata {
            write_metadata_header(&mut file, metadata)?;
        }
    }

    // ============================= Write Data =============================

    for point in &table.points {
        writeln!(
            file,
            "{}{}{}",
            format_number(point.length, configuration),
            configuration.delimiter,
            format_number(point.diameter, configuration),
        )?;
    }

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
