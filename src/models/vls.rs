//! Droplet-mediated (VLS) radial growth model
//!
//! # Mathematical Background
//!
//! During vapor-liquid-solid growth the liquid droplet at the tip couples
//! axial elongation to a slow change of the radius underneath it. From a
//! fit to the Tersoff droplet model, the radius obeys the first-order ODE
//!
//! ```text
//! dR/dx = 0.84/(η(3+η²)) · (1/R_eff · (1 + λ/((1+η²)·R)) − 1)
//! ```
//!
//! Where:
//! - **R** : Current nanowire radius [nm]
//! - **η** : Droplet shape factor (dimensionless)
//! - **λ** : Adatom diffusion length [nm]
//! - **R_eff** : Effective V/III ratio = 0.459 × flux ratio
//!
//! The derivative depends on the radius only; the axial position enters
//! through the integration variable. The λ/R diffusion term vanishes for
//! large radii, leaving the asymptotic slope
//! `0.84/(η(3+η²)) · (1/R_eff − 1)`: ratios with R_eff > 1 taper the
//! droplet radius down, ratios with R_eff < 1 widen it.
//!
//! The expression divides by the radius, so it is undefined at R = 0. The
//! configured initial radius is strictly positive and the derivative is
//! bounded on the integration interval, so the solver never reaches it.

use crate::config::SweepConfig;
use crate::physics::RadialOde;

/// Fraction of the V/III flux ratio that is effective at the droplet
pub const EFFECTIVE_RATIO_FACTOR: f64 = 0.459;

/// Droplet-mediated radial growth ODE for one flux ratio
///
/// Built once per outer-loop iteration; immutable afterwards.
///
/// # Example
///
/// ```rust
/// use taper_rs::config::SweepConfig;
/// use taper_rs::models::VlsDropletModel;
/// use taper_rs::physics::RadialOde;
///
/// let config = SweepConfig::default();
/// let model = VlsDropletModel::new(&config, 5.0);
///
/// let slope = model.derivative(380.0, config.initial_radius);
/// assert!(slope.is_finite());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct VlsDropletModel {
    /// Droplet shape factor η (dimensionless)
    eta: f64,

    /// Diffusion length λ (nm)
    diffusion_length: f64,

    /// V/III flux ratio of the current sweep iteration (dimensionless)
    flux_ratio: f64,

    /// Radius at the start of the second growth step (nm)
    initial_radius: f64,
}

impl VlsDropletModel {
    /// Create the model for one flux ratio
    pub fn new(config: &SweepConfig, flux_ratio: f64) -> Self {
        Self {
            eta: config.eta,
            diffusion_length: config.diffusion_length,
            flux_ratio,
            initial_radius: config.initial_radius,
        }
    }

    /// Effective V/III ratio at the droplet
    pub fn effective_ratio(&self) -> f64 {
        EFFECTIVE_RATIO_FACTOR * self.flux_ratio
    }

    /// Geometric prefactor 0.84/(η(3+η²))
    fn prefactor(&self) -> f64 {
        0.84 / (self.eta * (3.0 + self.eta * self.eta))
    }

    /// Asymptotic slope for large radii, where the diffusion term vanishes
    pub fn asymptotic_derivative(&self) -> f64 {
        self.prefactor() * (1.0 / self.effective_ratio() - 1.0)
    }
}

impl RadialOde for VlsDropletModel {
    fn derivative(&self, _x: f64, radius: f64) -> f64 {
        let eta_sq = self.eta * self.eta;
        let diffusion_term = self.diffusion_length / ((1.0 + eta_sq) * radius);

        self.prefactor() * ((1.0 + diffusion_term) / self.effective_ratio() - 1.0)
    }

    fn initial_radius(&self) -> f64 {
        self.initial_radius
    }

    fn name(&self) -> &str {
        "VLS droplet radial growth"
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn model(flux_ratio: f64) -> VlsDropletModel {
        VlsDropletModel::new(&SweepConfig::default(), flux_ratio)
    }

    #[test]
    fn test_effective_ratio() {
        let m = model(10.0);
        assert!((m.effective_ratio() - 4.59).abs() < 1e-12);
    }

    #[test]
    fn test_derivative_matches_closed_form() {
        let m = model(5.0);
        let (eta, lambda) = (3.25, 2400.0);
        let r = 15.0;

        let r_eff = 0.459 * 5.0;
        let expected = 0.84 / (eta * (3.0 + eta * eta))
            * (1.0 / r_eff * (1.0 + lambda / ((1.0 + eta * eta) * r)) - 1.0);

        let actual = m.derivative(380.0, r);
        assert!((actual - expected).abs() < 1e-14);
    }

    #[test]
    fn test_derivative_independent_of_axial_position() {
        let m = model(3.0);
        let a = m.derivative(380.0, 20.0);
        let b = m.derivative(9000.0, 20.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_diffusion_term_vanishes_for_large_radius() {
        // As R grows, λ/((1+η²)R) → 0 and the derivative approaches
        // prefactor · (1/R_eff − 1).
        let m = model(8.0);
        let at_large_radius = m.derivative(500.0, 1e9);
        assert!((at_large_radius - m.asymptotic_derivative()).abs() < 1e-9);
    }

    #[test]
    fn test_asymptotic_sign_flips_with_ratio() {
        // R_eff < 1 (ratio below ~2.18): droplet radius widens.
        assert!(model(1.5).asymptotic_derivative() > 0.0);
        // R_eff > 1: droplet radius narrows.
        assert!(model(10.0).asymptotic_derivative() < 0.0);
    }

    #[test]
    fn test_initial_radius_comes_from_config() {
        let m = model(2.0);
        assert_eq!(m.initial_radius(), 15.0);
    }
}
