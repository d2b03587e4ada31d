//! Physical models (equations)
//!
//! This module defines the physics side of the physics/numerics split:
//!
//! - [`RadialOde`]: trait for droplet-mediated radial growth models.
//!   The model provides the right-hand side dR/dx; the solver integrates
//!   it ([`crate::solver::Rkf45Solver`]).
//! - [`RadiusProfile`]: ordered radius values co-indexed with an axial
//!   axis, the currency every pipeline stage trades in.
//!
//! Models that are integrated over *time* rather than axial position (the
//! VS sidewall contribution) expose a plain rate function instead and are
//! fed to the quadrature method directly; see [`crate::models::vs`].

mod profile;
mod traits;

pub use profile::RadiusProfile;
pub use traits::RadialOde;
