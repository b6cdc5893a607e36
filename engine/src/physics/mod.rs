//! Physics Module
//!
//! The only physics this core performs itself is the ground-contact
//! question; everything heavier (collision resolution, sweeps) stays on the
//! host side behind the [`SpatialQuery`] collaborator.
//!
//! # Unit System
//!
//! **1 unit = 1 meter** (SI units throughout): distances in meters,
//! velocities in m/s, accelerations in m/s².

pub mod ground;

pub use ground::{GroundDetector, LayerMask, SpatialQuery};
