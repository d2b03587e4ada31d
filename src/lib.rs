//! taper-rs: Nanowire Tapering Map Simulation
//!
//! Computes a two-dimensional parameter-sweep map predicting the tapering
//! (radial profile change along the growth axis) of semiconductor nanowires
//! grown by a combined vapor-liquid-solid (VLS) and vapor-solid (VS)
//! mechanism, as a function of the V/III flux ratio and the total growth
//! time.
//!
//! # Architecture
//!
//! taper-rs is built on two core principles:
//!
//! 1. **Separation of Physics and Numerics**
//!    - Physical models define equations (what to solve)
//!    - Numerical solvers provide methods (how to solve)
//!
//! 2. **Explicit configuration, no global state**
//!    - All physical constants and sweep bounds live in one immutable
//!      [`config::SweepConfig`] value, validated at startup
//!    - Every component receives the configuration it needs explicitly
//!
//! # The Computation
//!
//! For each flux ratio on the sweep axis:
//!
//! 1. Solve the VLS radial ODE dR/dx once over the full axial axis
//!    (adaptive Runge-Kutta-Fehlberg, [`solver::Rkf45Solver`])
//! 2. For each growth time, integrate the VS sidewall rate over elapsed
//!    time at every axial position (adaptive Simpson,
//!    [`solver::SimpsonIntegrator`])
//! 3. Sum both contributions into the total radius profile and evaluate
//!    the tapering metric ([`sweep::tapering`])
//! 4. Select the minimally tapered ("straight") time point
//!    ([`sweep::selector`])
//!
//! The results are a tapering matrix (ratio × time) and an untapered-size
//! table, exported as CSV ([`output::export`]) and rendered as a
//! heatmap + scatter figure ([`output::visualization`]).
//!
//! # Quick Start
//!
//! ```rust
//! use taper_rs::config::SweepConfig;
//! use taper_rs::sweep::run_sweep;
//!
//! # fn main() -> Result<(), String> {
//! // Coarse grid so the doctest stays fast; `SweepConfig::default()`
//! // carries the published parameter set.
//! let config = SweepConfig {
//!     ratio_min: 2.0,
//!     ratio_max: 3.0,
//!     ratio_step: 0.5,
//!     time_min: 10.0,
//!     time_max: 14.0,
//!     time_step: 2.0,
//!     ..SweepConfig::default()
//! };
//! config.validate()?;
//!
//! let outcome = run_sweep(&config, None)?;
//! assert_eq!(outcome.tapering.matrix.nrows(), 2);
//! assert_eq!(outcome.tapering.matrix.ncols(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`config`]: Sweep configuration and validation
//! - [`physics`]: Model trait and radius-profile container
//! - [`models`]: VLS droplet ODE and VS sidewall rate
//! - [`solver`]: Numerical methods (grid, ODE integrator, quadrature)
//! - [`sweep`]: The parameter-sweep pipeline
//! - [`output`]: CSV export and plotters visualization

pub mod config;
pub mod physics;

pub mod models;
pub mod solver;
pub mod sweep;
pub mod output;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use taper_rs::prelude::*;
    //! ```
    pub use crate::config::SweepConfig;
    pub use crate::physics::{RadialOde, RadiusProfile};
    pub use crate::models::{VlsDropletModel, VsSidewallModel};
    pub use crate::solver::{Axis, Rkf45Solver, SimpsonIntegrator};
    pub use crate::sweep::{run_sweep, SweepOutcome, TaperingMap, UntaperedTable};
}
