//! Growth models
//!
//! Two mechanisms contribute to the nanowire radius:
//!
//! - [`VlsDropletModel`]: droplet-mediated (vapor-liquid-solid) radial
//!   growth, a first-order ODE in axial position solved once per flux
//!   ratio
//! - [`VsSidewallModel`]: direct vapor-solid sidewall deposition behind
//!   the tip, an instantaneous rate integrated over elapsed time per
//!   (flux ratio, time, axial position) triple
//!
//! Both are parameterized from one [`crate::config::SweepConfig`] plus
//! the flux ratio of the current sweep iteration; all fields are named so
//! no positional argument lists can be transposed.

pub mod vls;
pub mod vs;

pub use vls::VlsDropletModel;
pub use vs::VsSidewallModel;
