//! Sweep configuration
//!
//! One immutable value holds every physical constant and sweep bound the
//! pipeline needs. Components receive it explicitly; there is no
//! module-level mutable state, so test runs with alternate parameter sets
//! never interfere with each other.
//!
//! # Units
//!
//! - Lengths in nanometres (nm)
//! - Times in minutes (min)
//! - The axial growth rate couples the two: length = rate × time
//!
//! # Validation
//!
//! [`SweepConfig::validate`] must be called before running a sweep. It
//! rejects inverted or degenerate bounds and — important and easy to
//! miss — a `time_min` so small that the axial-position axis would not
//! reach the tapering reference point (index 6 from the wire base).

use crate::solver::Axis;
use crate::sweep::tapering::REFERENCE_POINT_INDEX;

/// Configuration of the (flux ratio × growth time) tapering sweep
///
/// # Example
///
/// ```rust
/// use taper_rs::config::SweepConfig;
///
/// let config = SweepConfig::default();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    /// Droplet shape factor η (dimensionless)
    pub eta: f64,

    /// Diffusion length λ of adatoms on the sidewall (nm)
    pub diffusion_length: f64,

    /// Linear coefficient for the nominal VS growth rate, from a fit to
    /// the Tersoff model (dimensionless); nominal rate = coefficient / ratio
    pub vs_rate_coefficient: f64,

    /// Axial growth rate v (nm/min)
    pub axial_growth_rate: f64,

    /// Initial nanowire radius R₀ (nm)
    pub initial_radius: f64,

    /// Nucleation/first-growth-step duration (min); the second growth
    /// step — the one being swept — starts here, so the axial axis begins
    /// at `axial_growth_rate * onset_time` and the VS integral starts at
    /// `onset_time`
    pub onset_time: f64,

    /// V/III flux ratio sweep: lower bound (inclusive)
    pub ratio_min: f64,
    /// V/III flux ratio sweep: upper bound (exclusive)
    pub ratio_max: f64,
    /// V/III flux ratio sweep: step
    pub ratio_step: f64,

    /// Growth time sweep: lower bound (inclusive, min)
    pub time_min: f64,
    /// Growth time sweep: upper bound (exclusive, min)
    pub time_max: f64,
    /// Growth time sweep: step (min)
    pub time_step: f64,

    /// Axial-position axis step (nm)
    pub axial_step: f64,
}

impl Default for SweepConfig {
    /// Published parameter set for GaAs-type nanowires
    fn default() -> Self {
        Self {
            eta: 3.25,
            diffusion_length: 2400.0,
            vs_rate_coefficient: 5.616,
            axial_growth_rate: 76.0,
            initial_radius: 15.0,
            onset_time: 5.0,
            ratio_min: 1.4,
            ratio_max: 30.0,
            ratio_step: 0.2,
            time_min: 10.0,
            time_max: 120.0,
            time_step: 1.0,
            axial_step: 20.0,
        }
    }
}

impl SweepConfig {
    /// Flux-ratio sweep axis (ascending, half-open)
    pub fn ratio_axis(&self) -> Axis {
        Axis::new(self.ratio_min, self.ratio_max, self.ratio_step)
    }

    /// Growth-time sweep axis (ascending, half-open, min)
    pub fn time_axis(&self) -> Axis {
        Axis::new(self.time_min, self.time_max, self.time_step)
    }

    /// Axial-position axis for a wire grown for `time` minutes (nm)
    ///
    /// Runs from the length at the end of the first growth step up to
    /// (exclusive) the length reached at `time`. The upper bound depends
    /// on the time value under evaluation, so this is recomputed per time
    /// point rather than built once.
    pub fn axial_axis(&self, time: f64) -> Axis {
        Axis::new(
            self.axial_growth_rate * self.onset_time,
            self.axial_growth_rate * time,
            self.axial_step,
        )
    }

    /// Axial-position axis covering the longest wire of the sweep
    ///
    /// The VLS profile is solved once per flux ratio over this full axis;
    /// shorter times consume a prefix of it.
    pub fn vls_axial_axis(&self) -> Axis {
        self.axial_axis(self.time_max)
    }

    /// Validate bounds and preconditions
    ///
    /// All failures are configuration errors: fix the value and rerun.
    ///
    /// # Errors
    ///
    /// - any non-finite or non-positive physical constant
    /// - inverted sweep bounds (`min >= max`) or non-positive steps
    /// - `time_min` not past the growth onset (the axial axis would be
    ///   empty or start at zero length)
    /// - an axial axis at `time_min` with fewer than
    ///   `REFERENCE_POINT_INDEX + 1` points, which would put the tapering
    ///   reference point out of bounds
    pub fn validate(&self) -> Result<(), String> {
        let positive = [
            ("eta", self.eta),
            ("diffusion_length", self.diffusion_length),
            ("vs_rate_coefficient", self.vs_rate_coefficient),
            ("axial_growth_rate", self.axial_growth_rate),
            ("initial_radius", self.initial_radius),
            ("onset_time", self.onset_time),
            ("ratio_step", self.ratio_step),
            ("time_step", self.time_step),
            ("axial_step", self.axial_step),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("{} must be positive and finite, got {}", name, value));
            }
        }

        if self.ratio_min >= self.ratio_max {
            return Err(format!(
                "ratio bounds inverted: ratio_min {} >= ratio_max {}",
                self.ratio_min, self.ratio_max
            ));
        }
        if self.time_min >= self.time_max {
            return Err(format!(
                "time bounds inverted: time_min {} >= time_max {}",
                self.time_min, self.time_max
            ));
        }
        if self.ratio_min <= 0.0 {
            return Err(format!(
                "ratio_min must be positive (nominal VS rate divides by it), got {}",
                self.ratio_min
            ));
        }
        if self.time_min <= self.onset_time {
            return Err(format!(
                "time_min {} must exceed the growth onset time {}",
                self.time_min, self.onset_time
            ));
        }

        // Tapering compares the top radius against a reference point a
        // fixed number of axial steps above the base; the shortest wire of
        // the sweep must reach it.
        let shortest_axis = self.axial_axis(self.time_min);
        if shortest_axis.len() < REFERENCE_POINT_INDEX + 1 {
            return Err(format!(
                "axial axis at time_min {} has {} points; the tapering \
                 reference point needs at least {} (raise time_min or \
                 shrink axial_step)",
                self.time_min,
                shortest_axis.len(),
                REFERENCE_POINT_INDEX + 1
            ));
        }

        Ok(())
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SweepConfig::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_ratio_bounds_rejected() {
        let config = SweepConfig {
            ratio_min: 30.0,
            ratio_max: 1.4,
            ..SweepConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.contains("ratio bounds inverted"));
    }

    #[test]
    fn test_inverted_time_bounds_rejected() {
        let config = SweepConfig {
            time_min: 120.0,
            time_max: 10.0,
            ..SweepConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.contains("time bounds inverted"));
    }

    #[test]
    fn test_zero_step_rejected() {
        let config = SweepConfig {
            time_step: 0.0,
            ..SweepConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_time_min_before_onset_rejected() {
        let config = SweepConfig {
            time_min: 4.0,
            ..SweepConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.contains("onset"));
    }

    #[test]
    fn test_reference_point_precondition() {
        // time_min barely past onset: axial axis spans v*(6-5) = 76 nm,
        // only 4 points at 20 nm step — too short for index 6.
        let config = SweepConfig {
            time_min: 6.0,
            ..SweepConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.contains("reference point"));
    }

    #[test]
    fn test_default_axial_axis_lengths() {
        let config = SweepConfig::default();

        // time_min = 10: x in [380, 760) step 20 -> 19 points
        assert_eq!(config.axial_axis(config.time_min).len(), 19);

        // VLS axis covers the longest wire: [380, 9120) step 20
        let vls_axis = config.vls_axial_axis();
        assert_eq!(vls_axis.len(), 437);
        assert!(vls_axis.len() >= config.axial_axis(config.time_min).len());
    }

    #[test]
    fn test_shorter_time_axis_is_prefix_of_vls_axis() {
        let config = SweepConfig::default();
        let full = config.vls_axial_axis();
        let short = config.axial_axis(40.0);

        for (a, b) in short.values().iter().zip(full.values().iter()) {
            assert_eq!(a, b);
        }
    }
}
