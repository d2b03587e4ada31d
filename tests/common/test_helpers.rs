//! Helper functions for integration tests

use taper_rs::config::SweepConfig;

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

/// Coarse sweep configuration that keeps integration tests fast
///
/// Two flux ratios, three growth times; physical constants stay at their
/// defaults so the test exercises the real models.
pub fn fast_config() -> SweepConfig {
    SweepConfig {
        ratio_min: 2.0,
        ratio_max: 3.0,
        ratio_step: 0.5,
        time_min: 10.0,
        time_max: 13.0,
        time_step: 1.0,
        ..SweepConfig::default()
    }
}

/// Closed-form VS sidewall contribution at axial position `y` after
/// growth time `t`
///
/// The rate `g·(1 − exp(−(v·τ − y)/λ))` integrates in closed form over
/// `τ ∈ [a, t]` with `a = max(onset, y/v)`:
///
/// ```text
/// g·[(t − a) + (λ/v)·(exp(−(v·t − y)/λ) − exp(−(v·a − y)/λ))]
/// ```
///
/// Used as the reference the adaptive quadrature must reproduce.
pub fn vs_integral_closed_form(config: &SweepConfig, flux_ratio: f64, y: f64, t: f64) -> f64 {
    let g = config.vs_rate_coefficient / flux_ratio;
    let v = config.axial_growth_rate;
    let lambda = config.diffusion_length;

    let a = config.onset_time.max(y / v);
    if t <= a {
        return 0.0;
    }

    let tail = |tau: f64| (-(v * tau - y) / lambda).exp();
    g * ((t - a) + (lambda / v) * (tail(t) - tail(a)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_error() {
        assert!((relative_error(1.0, 1.0) - 0.0).abs() < 1e-10);
        assert!((relative_error(1.1, 1.0) - 0.1).abs() < 1e-10);
        assert!((relative_error(0.9, 1.0) - 0.1).abs() < 1e-10);
    }

    #[test]
    fn test_closed_form_is_zero_before_tip_passage() {
        let config = fast_config();
        // y far ahead of the tip at t = 10 (tip at 760 nm)
        assert_eq!(vs_integral_closed_form(&config, 2.0, 5000.0, 10.0), 0.0);
    }
}
