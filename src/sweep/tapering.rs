//! Tapering evaluation
//!
//! Tapering is the relative narrowing (or widening) of the nanowire
//! radius along its axial length, expressed as a percentage slope:
//!
//! ```text
//! taper = −(R_top − R_ref) / (v·t) × 100
//! ```
//!
//! `R_top` is the total radius at the farthest axial position, `R_ref`
//! the total radius at a fixed reference point near the wire base, and
//! `v·t` the wire length at growth time `t`. The sign convention makes
//! positive tapering mean the radius *decreases* outward (a narrowing,
//! needle-like wire) and negative tapering a widening one.

use crate::physics::RadiusProfile;

/// Index of the tapering reference point on the axial axis.
///
/// Not the first grid point: the reference sits a fixed physical
/// distance of `REFERENCE_POINT_INDEX` axial steps above the wire base,
/// past the steep transient where the droplet equilibrates. With the
/// default 20 nm step this is 120 nm up the wire.
/// [`crate::config::SweepConfig::validate`] guarantees every axial axis
/// of the sweep reaches this index.
pub const REFERENCE_POINT_INDEX: usize = 6;

/// Tapering metric and top radius for one (flux ratio, time) pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaperingSample {
    /// Tapering percentage; positive = narrowing outward
    pub tapering: f64,

    /// Total radius at the top (farthest axial position) of the wire (nm)
    pub top_radius: f64,
}

/// Total radius profile: VLS prefix plus VS contribution, elementwise
///
/// The VLS profile spans the full axial axis (solved once per flux
/// ratio); the VS profile spans only the current time's axial extent, so
/// the VLS profile is truncated to match before summing.
///
/// # Errors
///
/// VS profile longer than the VLS profile (the axial axes are
/// inconsistent).
pub fn total_profile(
    vls_full: &RadiusProfile,
    vs: &RadiusProfile,
) -> Result<RadiusProfile, String> {
    vls_full.prefix(vs.len())?.sum_with(vs)
}

/// Evaluate the tapering metric for one (flux ratio, time) pair
///
/// `wire_length` is the axial length grown in the current time,
/// `axial_growth_rate × time`.
///
/// # Errors
///
/// - profile shorter than `REFERENCE_POINT_INDEX + 1` points (the
///   configuration precondition was bypassed)
/// - non-finite profile values (numerical failure upstream)
pub fn evaluate(total: &RadiusProfile, wire_length: f64) -> Result<TaperingSample, String> {
    if !total.is_finite() {
        return Err("tapering: non-finite total radius profile".to_string());
    }

    let top_radius = total.top().ok_or_else(|| {
        "tapering: empty total radius profile".to_string()
    })?;

    let reference = total.get(REFERENCE_POINT_INDEX).ok_or_else(|| {
        format!(
            "tapering: profile has {} points, reference index {} out of bounds",
            total.len(),
            REFERENCE_POINT_INDEX
        )
    })?;

    let tapering = -(top_radius - reference) / wire_length * 100.0;

    Ok(TaperingSample {
        tapering,
        top_radius,
    })
}

// =================================================================================================
// Tests
// =================================================================================================
