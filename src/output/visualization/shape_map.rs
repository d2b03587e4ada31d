//! Static plot generation for tapering sweep results
//!
//! This module uses the `plotters` library to generate PNG images of the
//! sweep artefacts:
//!
//! - **Shape map**: the (flux ratio × growth time) tapering matrix drawn
//!   as a heatmap on a diverging blue-white-red scale centred on zero
//!   (white = untapered), with the untapered operating points overlaid as
//!   a curve
//! - **Untapered sizes**: scatter of the achievable straight-wire
//!   geometries, diameter against length
//!
//! # Example
//!
//! ```rust,ignore
//! use taper_rs::output::visualization::{plot_shape_map, PlotConfig};
//!
//! let outcome = run_sweep(&config, None)?;
//!
//! // Default styling
//! plot_shape_map(&outcome.tapering, &outcome.untapered, "shape_map.png", None)?;
//!
//! // Or with custom config
//! let plot_config = PlotConfig::shape_map("GaAs, lambda = 2400 nm");
//! plot_shape_map(&outcome.tapering, &outcome.untapered, "map.png", Some(&plot_config))?;
//! ```

use plotters::coord::Shift;
use plotters::prelude::*;
use std::error::Error;

use super::config::PlotConfig;
use crate::sweep::{TaperingMap, UntaperedTable};

// =================================================================================================
// Color Scale
// =================================================================================================

/// Map a tapering value onto a diverging blue-white-red scale
///
/// The scale is symmetric about zero: `-max_abs` is full blue, zero is
/// white, `+max_abs` is full red. Symmetry matters — it puts the visually
/// neutral color exactly on the untapered contour, whatever the range of
/// the matrix.
fn diverging_color(value: f64, max_abs: f64) -> RGBColor {
    if max_abs == 0.0 {
        return WHITE;
    }

    let t = (value / max_abs).clamp(-1.0, 1.0);
    let fade = (255.0 * (1.0 - t.abs())) as u8;
    if t >= 0.0 {
        RGBColor(255, fade, fade)
    } else {
        RGBColor(fade, fade, 255)
    }
}

// =================================================================================================
// Drawing Helpers
// =================================================================================================

/// Draw the shape-map heatmap and untapered overlay on any drawing area
fn draw_shape_map_on_area<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    map: &TaperingMap,
    untapered: &UntaperedTable,
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    <DB as DrawingBackend>::ErrorType: 'static,
{
    let ratio_step = map.ratio_axis.step();
    let time_step = map.time_axis.step();
    let ratios = map.ratio_axis.values();
    let times = map.time_axis.values();

    // Cell-centred extents: each grid value owns a half-step on each side.
    let x_min = ratios[0] - ratio_step / 2.0;
    let x_max = ratios[ratios.len() - 1] + ratio_step / 2.0;
    let y_min = times[0] - time_step / 2.0;
    let y_max = times[times.len() - 1] + time_step / 2.0;

    let max_abs = map
        .matrix
        .iter()
        .fold(0.0_f64, |acc, &v| acc.max(v.abs()));

    root.fill(&config.background)?;

    // Create chart
    let mut chart = ChartBuilder::on(root)
        .caption(&config.title, ("sans-serif", 40.0).into_font())
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    // Configure mesh
    let mut mesh = chart.configure_mesh();
    mesh.x_desc(&config.xlabel).y_desc(&config.ylabel);

    if config.show_grid {
        mesh.draw()?;
    } else {
        mesh.disable_mesh().draw()?;
    }

    // Heatmap cells
    chart.draw_series(
        map.matrix
            .indexed_iter()
            .map(|((ratio_index, time_index), &value)| {
                let ratio = ratios[ratio_index];
                let time = times[time_index];
                Rectangle::new(
                    [
                        (ratio - ratio_step / 2.0, time - time_step / 2.0),
                        (ratio + ratio_step / 2.0, time + time_step / 2.0),
                    ],
                    diverging_color(value, max_abs).filled(),
                )
            }),
    )?;

    // Untapered contour: the (ratio, time) curve of the selected points
    if !untapered.is_empty() {
        let accent = config.accent_color;
        let curve: Vec<(f64, f64)> = untapered
            .points
            .iter()
            .filter_map(|p| map.time_axis.get(p.time_index).map(|t| (p.flux_ratio, t)))
            .collect();

        chart
            .draw_series(LineSeries::new(
                curve,
                accent.stroke_width(config.line_width),
            ))?
            .label("Untapered")
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], accent.stroke_width(2))
            });

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
    }

    root.present()?;
    Ok(())
}

/// Draw the untapered-sizes scatter on any drawing area
fn draw_sizes_on_area<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    untapered: &UntaperedTable,
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    <DB as DrawingBackend>::ErrorType: 'static,
{
    let lengths = untapered.lengths();
    let diameters = untapered.diameters();

    // An empty table still yields a valid (blank) plot; fall back to a
    // unit range so the chart builder has something to work with.
    let (x_min, x_max) = axis_range(&lengths);
    let (y_min, y_max) = axis_range(&diameters);

    root.fill(&config.background)?;

    // Create chart
    let mut chart = ChartBuilder::on(root)
        .caption(&config.title, ("sans-serif", 40.0).into_font())
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    // Configure mesh
    let mut mesh = chart.configure_mesh();
    mesh.x_desc(&config.xlabel).y_desc(&config.ylabel);

    if config.show_grid {
        mesh.draw()?;
    } else {
        mesh.disable_mesh().draw()?;
    }

    // One marker per untapered point
    chart.draw_series(
        lengths
            .iter()
            .zip(diameters.iter())
            .map(|(&l, &d)| Circle::new((l, d), config.marker_size, config.accent_color.filled())),
    )?;

    root.present()?;
    Ok(())
}

/// Data range with a 10% margin, or a unit range for empty data
fn axis_range(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 1.0);
    }

    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let span = (max - min).max(f64::MIN_POSITIVE);
    (min - 0.1 * span, max + 0.1 * span)
}

// =================================================================================================
// Plotting Functions
// =================================================================================================

/// Plot the tapering shape map as a PNG heatmap
///
/// Flux ratio runs along the x-axis, growth time along the y-axis. Each
/// cell is colored on a diverging blue-white-red scale centred on zero
/// tapering, and the untapered operating points are overlaid as a curve
/// when the table is non-empty.
///
/// # Arguments
///
/// * `map` - Tapering map from [`crate::sweep::run_sweep`]
/// * `untapered` - Untapered table from the same outcome
/// * `output_path` - Output file path (.png)
/// * `configuration` - Optional PlotConfig (uses shape-map defaults if None)
///
/// # Errors
///
/// Returns error if the file cannot be written or plotting fails.
///
/// # Panics
///
/// Panics when the tapering matrix is empty.
pub fn plot_shape_map(
    map: &TaperingMap,
    untapered: &UntaperedTable,
    output_path: &str,
    configuration: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    assert!(
        !map.matrix.is_empty(),
        "Tapering matrix must not be empty"
    );

    let owned_config = configuration
        .cloned()
        .unwrap_or_else(|| PlotConfig::shape_map(None::<&str>));
    let config = &owned_config;

    let root =
        BitMapBackend::new(output_path, (config.width, config.height)).into_drawing_area();
    draw_shape_map_on_area(&root, map, untapered, config)
}

/// Plot the untapered wire sizes as a PNG scatter plot
///
/// Each marker is one achievable straight-wire geometry: wire length on
/// the x-axis, top diameter on the y-axis. An empty table yields a blank
/// plot, not an error.
///
/// # Arguments
///
/// * `untapered` - Untapered table from [`crate::sweep::run_sweep`]
/// * `output_path` - Output file path (.png)
/// * `configuration` - Optional PlotConfig (uses sizes defaults if None)
///
/// # Errors
///
/// Returns error if the file cannot be written or plotting fails.
pub fn plot_untapered_sizes(
    untapered: &UntaperedTable,
    output_path: &str,
    configuration: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    let owned_config = configuration
        .cloned()
        .unwrap_or_else(|| PlotConfig::untapered_sizes(None::<&str>));
    let config = &owned_config;

    let root =
        BitMapBackend::new(output_path, (config.width, config.height)).into_drawing_area();
    draw_sizes_on_area(&root, untapered, config)
}

// =================================================================================================
// Tests
// =================================================================================================
