//! Adaptive Simpson quadrature
//!
//! # Mathematical Background
//!
//! Simpson's rule on an interval `[a, b]` with midpoint `m`:
//!
//! ```text
//! S(a, b) = (b − a)/6 · (f(a) + 4·f(m) + f(b))
//! ```
//!
//! The adaptive scheme compares `S(a, b)` against the two-panel refinement
//! `S(a, m) + S(m, b)`. For a smooth integrand the difference
//! overestimates the refinement's error by a factor of 15, so
//!
//! ```text
//! |S₂ − S₁| ≤ 15·tol  →  accept S₂ + (S₂ − S₁)/15
//! ```
//!
//! (the correction term is one Richardson extrapolation, raising the
//! accepted value to sixth order). Intervals that fail the test are
//! bisected recursively, each half receiving half the tolerance budget.
//!
//! # Role in the Sweep
//!
//! Every (flux ratio, time, axial position) triple integrates the VS
//! sidewall rate over elapsed time — this is the dominant cost center of
//! the whole computation. The contract is the integral's value to
//! tolerance, not a specific quadrature rule.

/// Hard cap on bisection depth. 2⁵⁰ panels is far past anything the VS
/// integrand needs; hitting it means the integrand or the tolerances are
/// inconsistent.
const MAX_DEPTH: usize = 50;

/// Adaptive Simpson integrator
///
/// Stateless and reusable; tolerances are the only knobs.
///
/// # Example
///
/// ```rust
/// use taper_rs::solver::SimpsonIntegrator;
///
/// # fn main() -> Result<(), String> {
/// let integrator = SimpsonIntegrator::new();
/// let value = integrator.integrate(|x| x * x, 0.0, 3.0)?;
/// assert!((value - 9.0).abs() < 1e-9);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SimpsonIntegrator {
    /// Absolute tolerance on the integral value
    pub abs_tol: f64,

    /// Relative tolerance on the integral value
    pub rel_tol: f64,
}

impl Default for SimpsonIntegrator {
    fn default() -> Self {
        Self {
            abs_tol: 1e-9,
            rel_tol: 1e-9,
        }
    }
}

impl SimpsonIntegrator {
    /// Create an integrator with the default tolerances
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an integrator with explicit tolerances
    pub fn with_tolerances(abs_tol: f64, rel_tol: f64) -> Self {
        Self { abs_tol, rel_tol }
    }

    /// Definite integral of `f` over `[a, b]`
    ///
    /// An empty interval (`b <= a`) integrates to zero — the sweep hands
    /// in clamped supports, which may collapse.
    ///
    /// # Errors
    ///
    /// Non-finite integrand values or bisection-depth exhaustion, both
    /// reported with the offending interval.
    pub fn integrate<F>(&self, f: F, a: f64, b: f64) -> Result<f64, String>
    where
        F: Fn(f64) -> f64,
    {
        if b <= a {
            return Ok(0.0);
        }

        let fa = f(a);
        let fb = f(b);
        let m = 0.5 * (a + b);
        let fm = f(m);

        let whole = simpson(a, b, fa, fm, fb);
        if !whole.is_finite() {
            return Err(format!(
                "quadrature: non-finite integrand on [{}, {}]",
                a, b
            ));
        }

        let tolerance = self.abs_tol.max(self.rel_tol * whole.abs());
        self.refine(&f, a, b, fa, fm, fb, whole, tolerance, 0)
    }

    /// Recursive bisection step
    #[allow(clippy::too_many_arguments)]
    fn refine<F>(
        &self,
        f: &F,
        a: f64,
        b: f64,
        fa: f64,
        fm: f64,
        fb: f64,
        whole: f64,
        tolerance: f64,
        depth: usize,
    ) -> Result<f64, String>
    where
        F: Fn(f64) -> f64,
    {
        let m = 0.5 * (a + b);
        let lm = 0.5 * (a + m);
        let rm = 0.5 * (m + b);
        let flm = f(lm);
        let frm = f(rm);

        let left = simpson(a, m, fa, flm, fm);
        let right = simpson(m, b, fm, frm, fb);
        let refined = left + right;

        if !refined.is_finite() {
            return Err(format!(
                "quadrature: non-finite integrand on [{}, {}]",
                a, b
            ));
        }

        let delta = refined - whole;
        if delta.abs() <= 15.0 * tolerance {
            return Ok(refined + delta / 15.0);
        }

        if depth >= MAX_DEPTH {
            return Err(format!(
                "quadrature: failed to converge on [{}, {}] after {} bisections \
                 (abs_tol {}, rel_tol {})",
                a, b, MAX_DEPTH, self.abs_tol, self.rel_tol
            ));
        }

        let half_tol = 0.5 * tolerance;
        let left_value = self.refine(f, a, m, fa, flm, fm, left, half_tol, depth + 1)?;
        let right_value = self.refine(f, m, b, fm, frm, fb, right, half_tol, depth + 1)?;
        Ok(left_value + right_value)
    }
}

/// Single Simpson panel
fn simpson(a: f64, b: f64, fa: f64, fm: f64, fb: f64) -> f64 {
    (b - a) / 6.0 * (fa + 4.0 * fm + fb)
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polynomial_exact() {
        // Simpson is exact for cubics; the extrapolated scheme is exact
        // through fifth order on symmetric intervals.
        let integrator = SimpsonIntegrator::new();
        let value = integrator.integrate(|x| x * x * x, 0.0, 2.0).unwrap();
        assert!((value - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_exponential() {
        let integrator = SimpsonIntegrator::new();
        let value = integrator.integrate(|x| x.exp(), 0.0, 1.0).unwrap();
        let exact = std::f64::consts::E - 1.0;
        assert!((value - exact).abs() < 1e-9);
    }

    #[test]
    fn test_oscillatory() {
        let integrator = SimpsonIntegrator::new();
        let value = integrator
            .integrate(|x| (10.0 * x).sin(), 0.0, std::f64::consts::PI)
            .unwrap();
        // ∫ sin(10x) dx over [0, π] = (1 − cos(10π))/10 = 0
        assert!(value.abs() < 1e-8);
    }

    #[test]
    fn test_piecewise_integrand_with_kink() {
        // The VS rate has exactly this shape: zero, then a smooth rise.
        let integrator = SimpsonIntegrator::new();
        let value = integrator
            .integrate(|x| if x < 1.0 { 0.0 } else { x - 1.0 }, 0.0, 2.0)
            .unwrap();
        assert!((value - 0.5).abs() < 1e-8);
    }

    #[test]
    fn test_empty_interval_is_zero() {
        let integrator = SimpsonIntegrator::new();
        assert_eq!(integrator.integrate(|x| x.exp(), 1.0, 1.0).unwrap(), 0.0);
        assert_eq!(integrator.integrate(|x| x.exp(), 2.0, 1.0).unwrap(), 0.0);
    }

    #[test]
    fn test_tighter_tolerance_reduces_error() {
        let exact = 2.0; // ∫ sin over [0, π]
        let loose = SimpsonIntegrator::with_tolerances(1e-3, 1e-3)
            .integrate(|x| x.sin(), 0.0, std::f64::consts::PI)
            .unwrap();
        let tight = SimpsonIntegrator::with_tolerances(1e-12, 1e-12)
            .integrate(|x| x.sin(), 0.0, std::f64::consts::PI)
            .unwrap();

        assert!((tight - exact).abs() <= (loose - exact).abs());
        assert!((tight - exact).abs() < 1e-11);
    }

    #[test]
    fn test_non_finite_integrand_reported() {
        let integrator = SimpsonIntegrator::new();
        let result = integrator.integrate(|x| 1.0 / x, 0.0, 1.0);
        let message = result.unwrap_err();
        assert!(message.contains("non-finite"));
    }

    #[test]
    fn test_error_carries_interval() {
        let integrator = SimpsonIntegrator::new();
        let message = integrator.integrate(|x| 1.0 / x, 0.0, 4.0).unwrap_err();
        assert!(message.contains("[0, 4]") || message.contains("[0, 2]") || message.contains("[0, 1]"));
    }
}
