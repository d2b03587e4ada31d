//! Numerical methods
//!
//! Concrete numerical machinery, kept strictly separate from the physics
//! it is applied to:
//!
//! - **[`Rkf45Solver`]**: Runge-Kutta-Fehlberg 4(5) adaptive integrator
//!   for the VLS radial ODE
//!   - Order: fifth-order solution, fourth-order error control
//!   - Cost: 6 function evaluations per attempted step
//!   - Contract: solution values at the requested sample points to
//!     tolerance; step placement is the controller's business
//!
//! - **[`SimpsonIntegrator`]**: adaptive Simpson quadrature for the VS
//!   sidewall integral
//!   - Order: sixth-order per accepted panel (one Richardson
//!     extrapolation)
//!   - Contract: the definite integral's value to tolerance, not a
//!     specific panel layout
//!
//! Both methods are self-contained, stateless, and report
//! non-convergence with the offending coordinates instead of silently
//! producing NaN.

mod quadrature;
mod rkf45;

// Re-exports for convenience
pub use quadrature::SimpsonIntegrator;
pub use rkf45::Rkf45Solver;
