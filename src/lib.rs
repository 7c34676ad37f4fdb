//! Membrane Sim - discretized elastic membrane simulation engine.
//!
//! Simulates wave propagation (e.g. diffraction through slits) on a
//! rectangular lattice of particles. Each particle is restrained to a single
//! degree of freedom and coupled to its four grid neighbors through a
//! restoring force derived from its mean relative displacement.
//!
//! The crate provides the lattice and the per-step coupling engine; motion
//! integration over time is the caller's concern.

// Allow non-snake-case for unit suffixes in field names (N, kg, m, etc.)
// This follows the project convention of including units in names.
#![allow(non_snake_case)]

pub mod config;
pub mod export;
pub mod lattice;
pub mod membrane;

pub use config::Parameters;
pub use lattice::{GridCoord, Lattice, LatticeParticle, ParticleGenerator};
pub use membrane::{CouplingEngine, Membrane, MembraneError};
