//! The parameter-sweep pipeline
//!
//! One outer loop over the flux-ratio axis drives everything:
//!
//! 1. Solve the VLS radial ODE once for the ratio, over the axial axis
//!    of the *longest* wire of the sweep
//! 2. For every growth time, integrate the VS sidewall rate at every
//!    axial position of that time's axis, sum with the matching VLS
//!    prefix, and evaluate the tapering metric
//! 3. Select the ratio's untapered operating point, if any
//!
//! Rows land in the tapering matrix at their ratio index — indexed
//! writes, not append order — so the optional Rayon path (feature
//! `parallel`) produces byte-identical results to the sequential one.
//!
//! # Module Organization
//!
//! - **`tapering`**: total-profile assembly and the tapering metric
//! - **`selector`**: untapered-point selection
//! - this module: the driver, [`run_sweep`], and the result containers

pub mod selector;
pub mod tapering;

use ndarray::{Array1, Array2};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::SweepConfig;
use crate::models::{VlsDropletModel, VsSidewallModel};
use crate::physics::RadiusProfile;
use crate::solver::{Axis, Rkf45Solver, SimpsonIntegrator};

pub use selector::UntaperedPoint;
pub use tapering::TaperingSample;

// =================================================================================================
// Result Containers
// =================================================================================================

/// The 2D tapering map: rows = flux ratios (ascending), columns = growth
/// times (ascending), cell = tapering percentage
#[derive(Debug, Clone, PartialEq)]
pub struct TaperingMap {
    /// Tapering percentages, shape (ratio axis len, time axis len)
    pub matrix: Array2<f64>,

    /// Flux-ratio axis the rows are indexed by
    pub ratio_axis: Axis,

    /// Growth-time axis the columns are indexed by
    pub time_axis: Axis,
}

impl TaperingMap {
    /// True when every cell is finite
    pub fn is_finite(&self) -> bool {
        self.matrix.iter().all(|v| v.is_finite())
    }
}

/// Sparse table of straight-wire operating points, at most one per flux
/// ratio, in ascending ratio order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UntaperedTable {
    /// Selected points, ascending by flux ratio
    pub points: Vec<UntaperedPoint>,
}

impl UntaperedTable {
    /// Number of flux ratios that produced a straight wire
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when no flux ratio met the threshold
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Wire lengths (nm), row order
    pub fn lengths(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.length).collect()
    }

    /// Wire diameters (nm), row order
    pub fn diameters(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.diameter).collect()
    }
}

/// Everything one sweep produces
#[derive(Debug, Clone, PartialEq)]
pub struct SweepOutcome {
    /// The (ratio × time) tapering matrix
    pub tapering: TaperingMap,

    /// The straight-wire table
    pub untapered: UntaperedTable,
}

// =================================================================================================
// Sweep Driver
// =================================================================================================

/// Progress callback: `(completed-or-starting row index, total rows)`.
/// Invoked once per flux ratio; with the `parallel` feature the
/// invocation order across rows is unspecified.
pub type ProgressFn<'a> = &'a (dyn Fn(usize, usize) + Sync);

/// One flux ratio's contribution to the sweep
struct RatioRow {
    tapering: Vec<f64>,
    untapered: Option<UntaperedPoint>,
}

/// Run the full (flux ratio × growth time) tapering sweep
///
/// Validates the configuration, then evaluates every grid point. The
/// computation is pure and deterministic: identical configurations yield
/// identical outcomes, sequentially or in parallel.
///
/// # Errors
///
/// - configuration validation failures (fix the value and rerun)
/// - numerical non-convergence, reported with the offending
///   (ratio, time, position) coordinates — fatal for the run, since the
///   downstream tapering values would be meaningless
///
/// # Example
///
/// ```rust
/// use taper_rs::config::SweepConfig;
/// use taper_rs::sweep::run_sweep;
///
/// # fn main() -> Result<(), String> {
/// let config = SweepConfig {
///     ratio_min: 3.0,
///     ratio_max: 4.0,
///     ratio_step: 1.0,
///     time_min: 10.0,
///     time_max: 12.0,
///     time_step: 1.0,
///     ..SweepConfig::default()
/// };
///
/// let outcome = run_sweep(&config, Some(&|i, n| eprintln!("row {}/{}", i + 1, n)))?;
/// assert!(outcome.tapering.is_finite());
/// # Ok(())
/// # }
/// ```
pub fn run_sweep(
    config: &SweepConfig,
    progress: Option<ProgressFn<'_>>,
) -> Result<SweepOutcome, String> {
    config.validate()?;

    let ratio_axis = config.ratio_axis();
    let time_axis = config.time_axis();
    let vls_axis = config.vls_axial_axis();
    let total_rows = ratio_axis.len();

    let compute = |(index, &flux_ratio): (usize, &f64)| -> Result<RatioRow, String> {
        if let Some(report) = progress {
            report(index, total_rows);
        }
        sweep_ratio(config, flux_ratio, &time_axis, &vls_axis)
    };

    #[cfg(feature = "parallel")]
    let rows: Vec<Result<RatioRow, String>> =
        if total_rows >= crate::solver::parallel_threshold() {
            ratio_axis
                .values()
                .par_iter()
                .enumerate()
                .map(compute)
                .collect()
        } else {
            ratio_axis.values().iter().enumerate().map(compute).collect()
        };

    #[cfg(not(feature = "parallel"))]
    let rows: Vec<Result<RatioRow, String>> =
        ratio_axis.values().iter().enumerate().map(compute).collect();

    // Assembly is sequential and indexed, so row order is the ascending
    // ratio order whichever path produced the rows.
    let mut matrix = Array2::zeros((total_rows, time_axis.len()));
    let mut points = Vec::new();
    for (index, row) in rows.into_iter().enumerate() {
        let row = row?;
        matrix.row_mut(index).assign(&Array1::from(row.tapering));
        if let Some(point) = row.untapered {
            points.push(point);
        }
    }

    Ok(SweepOutcome {
        tapering: TaperingMap {
            matrix,
            ratio_axis,
            time_axis,
        },
        untapered: UntaperedTable { points },
    })
}

/// Evaluate the full time series for one flux ratio
fn sweep_ratio(
    config: &SweepConfig,
    flux_ratio: f64,
    time_axis: &Axis,
    vls_axis: &Axis,
) -> Result<RatioRow, String> {
    // The VLS profile only depends on the ratio; solve it once over the
    // longest wire and let each time point consume its prefix.
    let vls_model = VlsDropletModel::new(config, flux_ratio);
    let vls_profile = Rkf45Solver::new()
        .integrate_over(&vls_model, vls_axis.values())
        .map_err(|e| format!("flux ratio {}: {}", flux_ratio, e))?;

    let vs_model = VsSidewallModel::new(config, flux_ratio);
    let integrator = SimpsonIntegrator::new();

    let mut tapering_series = Vec::with_capacity(time_axis.len());
    let mut top_radius_series = Vec::with_capacity(time_axis.len());

    for &time in time_axis.values() {
        let axial_axis = config.axial_axis(time);

        // VS contribution at every axial position of this time's axis.
        // Not cached across times: the upper integration bound moves.
        let mut vs_values = Vec::with_capacity(axial_axis.len());
        for &position in axial_axis.values() {
            // The rate is identically zero until the tip passes the
            // position; start the quadrature on the support.
            let lower = config.onset_time.max(vs_model.tip_passage_time(position));
            let contribution = integrator
                .integrate(|tau| vs_model.rate(tau, position), lower, time)
                .map_err(|e| {
                    format!(
                        "flux ratio {}, time {} min, position {} nm: {}",
                        flux_ratio, time, position, e
                    )
                })?;
            vs_values.push(contribution);
        }

        let vs_profile = RadiusProfile::from_vec(vs_values);
        let total = tapering::total_profile(&vls_profile, &vs_profile)
            .map_err(|e| format!("flux ratio {}, time {} min: {}", flux_ratio, time, e))?;

        let sample = tapering::evaluate(&total, config.axial_growth_rate * time)
            .map_err(|e| format!("flux ratio {}, time {} min: {}", flux_ratio, time, e))?;

        tapering_series.push(sample.tapering);
        top_radius_series.push(sample.top_radius);
    }

    let untapered = selector::select_untapered(
        flux_ratio,
        &tapering_series,
        &top_radius_series,
        time_axis.values(),
        config.axial_growth_rate,
    );

    Ok(RatioRow {
        tapering: tapering_series,
        untapered,
    })
}

// =================================================================================================
// Tests
// =================================================================================================
