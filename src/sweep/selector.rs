//! Untapered-point selection
//!
//! After a flux ratio's full time series of tapering values is known,
//! one growth time may yield an essentially straight wire. The selector
//! scans the series for the index minimizing |tapering| and accepts it
//! only when that minimum is below a fixed threshold — a ratio whose
//! best time still tapers noticeably simply contributes no point, which
//! is an expected outcome, not an error.

/// A tapering magnitude below this (in percent) counts as "untapered"
pub const UNTAPERED_THRESHOLD: f64 = 0.02;

/// The straight-wire operating point found for one flux ratio
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UntaperedPoint {
    /// V/III flux ratio of the sweep row this point belongs to
    pub flux_ratio: f64,

    /// Index into the time axis of the minimally tapered time
    pub time_index: usize,

    /// Wire length at that time, `time × axial growth rate` (nm)
    pub length: f64,

    /// Wire diameter at the top at that time, `2 × top radius` (nm)
    pub diameter: f64,
}

/// Scan one flux ratio's time series for its untapered point
///
/// `tapering_series` and `top_radius_series` are co-indexed with
/// `times`. Ties on |tapering| resolve to the first index (standard
/// minimum-index selection). Returns `None` when the series is empty or
/// the minimum |tapering| is not below [`UNTAPERED_THRESHOLD`].
pub fn select_untapered(
    flux_ratio: f64,
    tapering_series: &[f64],
    top_radius_series: &[f64],
    times: &[f64],
    axial_growth_rate: f64,
) -> Option<UntaperedPoint> {
    debug_assert_eq!(tapering_series.len(), top_radius_series.len());
    debug_assert_eq!(tapering_series.len(), times.len());

    let mut best_index = None;
    let mut best_magnitude = f64::INFINITY;
    for (i, &taper) in tapering_series.iter().enumerate() {
        if taper.abs() < best_magnitude {
            best_magnitude = taper.abs();
            best_index = Some(i);
        }
    }

    let index = best_index?;
    if best_magnitude >= UNTAPERED_THRESHOLD {
        return None;
    }

    Some(UntaperedPoint {
        flux_ratio,
        time_index: index,
        length: times[index] * axial_growth_rate,
        diameter: 2.0 * top_radius_series[index],
    })
}

// =================================================================================================
// Tests
// =================================================================================================
