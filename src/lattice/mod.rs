//! Particle lattice: grid storage and particle variants.
//!
//! The lattice owns particle existence; per-step motion integration belongs
//! to the surrounding simulation framework.

mod grid;
mod particle;

pub use grid::Lattice;
pub use particle::{FixedPoint, FreeParticle, GridCoord, LatticeParticle, ParticleGenerator};
