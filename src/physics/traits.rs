//! Radial growth model trait
//!
//! The trait is the seam between physics and numerics: a model computes
//! the local growth-rate derivative, a solver decides where to evaluate
//! it and how to accumulate the solution.

/// First-order radial ODE dR/dx = f(x, R)
///
/// # Responsibility
///
/// Computes the derivative of the nanowire radius with respect to axial
/// position at a given state. Does NOT integrate it (that's the solver's
/// job).
///
/// # Contract
///
/// Implementations must be pure: the same `(x, radius)` always yields the
/// same derivative. The sweep relies on this for determinism and for the
/// optional parallel path.
pub trait RadialOde: Send + Sync {
    /// Right-hand side dR/dx at axial position `x` (nm) and radius
    /// `radius` (nm), in nm/nm
    fn derivative(&self, x: f64, radius: f64) -> f64;

    /// Radius at the start of the integration interval (nm)
    fn initial_radius(&self) -> f64;

    /// Name of the model (used for display and error reporting)
    fn name(&self) -> &str;
}
