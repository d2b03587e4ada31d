//! Vapor-solid (VS) sidewall growth model
//!
//! # Mathematical Background
//!
//! Behind the growing tip, direct vapor-solid deposition thickens the
//! sidewall. At elapsed time τ the tip sits at height v·τ; a sidewall
//! position y only collects material once the tip has grown past it, and
//! the rate decays with distance from the tip over the diffusion length:
//!
//! ```text
//! rate(τ, y) = gr_tot · (1 − exp(−(v·τ − y)/λ))   for y < v·τ
//! rate(τ, y) = 0                                   otherwise
//! ```
//!
//! Where:
//! - **gr_tot** : Nominal VS rate = coefficient / flux ratio [nm/min]
//! - **v** : Axial growth rate [nm/min]
//! - **λ** : Diffusion length [nm]
//!
//! The sidewall radius contribution at position y after growing for time
//! t is the definite integral of this rate over τ from the growth onset
//! to t; the sweep evaluates it with adaptive quadrature
//! ([`crate::solver::SimpsonIntegrator`]) for every
//! (flux ratio, time, axial position) triple.

use crate::config::SweepConfig;

/// Instantaneous sidewall growth rate for one flux ratio
///
/// Built once per outer-loop iteration; immutable afterwards.
///
/// # Example
///
/// ```rust
/// use taper_rs::config::SweepConfig;
/// use taper_rs::models::VsSidewallModel;
///
/// let model = VsSidewallModel::new(&SweepConfig::default(), 5.0);
///
/// // Before the tip passes y = 760 nm (at τ = 10 min) nothing deposits.
/// assert_eq!(model.rate(9.0, 760.0), 0.0);
/// assert!(model.rate(11.0, 760.0) > 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct VsSidewallModel {
    /// Nominal VS growth rate, coefficient / flux ratio (nm/min)
    nominal_rate: f64,

    /// Axial growth rate v (nm/min)
    axial_growth_rate: f64,

    /// Diffusion length λ (nm)
    diffusion_length: f64,
}

impl VsSidewallModel {
    /// Create the model for one flux ratio
    pub fn new(config: &SweepConfig, flux_ratio: f64) -> Self {
        Self {
            nominal_rate: config.vs_rate_coefficient / flux_ratio,
            axial_growth_rate: config.axial_growth_rate,
            diffusion_length: config.diffusion_length,
        }
    }

    /// Nominal (far-behind-the-tip) VS rate (nm/min)
    pub fn nominal_rate(&self) -> f64 {
        self.nominal_rate
    }

    /// Instantaneous rate at elapsed time `tau` (min) and axial position
    /// `y` (nm); exactly zero until the tip has grown past `y`
    pub fn rate(&self, tau: f64, y: f64) -> f64 {
        let tip_height = self.axial_growth_rate * tau;
        if y < tip_height {
            self.nominal_rate * (1.0 - (-(tip_height - y) / self.diffusion_length).exp())
        } else {
            0.0
        }
    }

    /// Elapsed time at which the tip passes axial position `y` (min)
    ///
    /// The rate is identically zero before this instant, so integration
    /// can start at `max(onset, tip_passage_time(y))` without changing
    /// the integral's value.
    pub fn tip_passage_time(&self, y: f64) -> f64 {
        y / self.axial_growth_rate
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn model(flux_ratio: f64) -> VsSidewallModel {
        VsSidewallModel::new(&SweepConfig::default(), flux_ratio)
    }

    #[test]
    fn test_nominal_rate_divides_by_ratio() {
        assert!((model(2.0).nominal_rate() - 5.616 / 2.0).abs() < 1e-12);
        assert!((model(28.08).nominal_rate() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_rate_zero_at_and_above_tip() {
        let m = model(5.0);
        // Tip at v*tau = 760 nm after 10 min.
        assert_eq!(m.rate(10.0, 760.0), 0.0);
        assert_eq!(m.rate(10.0, 800.0), 0.0);
    }

    #[test]
    fn test_rate_strictly_positive_below_tip() {
        let m = model(5.0);
        let rate = m.rate(10.0, 759.9);
        assert!(rate > 0.0);
        assert!(rate < m.nominal_rate());
    }

    #[test]
    fn test_rate_approaches_nominal_far_behind_tip() {
        let m = model(5.0);
        // 100 diffusion lengths behind the tip the exponential is gone.
        let tau = (100.0 * 2400.0) / 76.0;
        let rate = m.rate(tau, 0.1);
        assert!((rate - m.nominal_rate()).abs() < 1e-12);
    }

    #[test]
    fn test_rate_matches_closed_form() {
        let m = model(4.0);
        let (tau, y): (f64, f64) = (20.0, 500.0);
        let expected = (5.616 / 4.0) * (1.0 - (-(76.0 * tau - y) / 2400.0).exp());
        assert!((m.rate(tau, y) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_tip_passage_time() {
        let m = model(5.0);
        assert!((m.tip_passage_time(760.0) - 10.0).abs() < 1e-12);
        // One instant later the rate turns on.
        assert_eq!(m.rate(10.0, 760.0), 0.0);
        assert!(m.rate(10.0 + 1e-9, 760.0 - 1e-6) > 0.0);
    }
}
