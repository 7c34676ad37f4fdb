//! Rectangular membrane: restrained-particle lattice plus coupling engine.
//!
//! A membrane is a structure of particles restricted to one degree of
//! freedom; each particle experiences a correcting force that is a function
//! of its average displacement relative to its grid neighbors. With fixed
//! edges enabled, boundary particles are additionally coupled to the
//! membrane's initial reference plane.
//!
//! The membrane plays a dual role toward the surrounding simulation
//! framework: a placeable structure (it owns its particles, reachable
//! through [`Membrane::lattice`] / [`Membrane::lattice_mut`]) and a force
//! generator ([`Membrane::apply_forces`] contributes the current step's
//! coupling forces; the caller integrates motion afterwards).

mod coupling;
mod presets;

pub use coupling::{CouplingEngine, ForceResponse};
pub use presets::{double_slit, single_slit};

use glam::Vec3;
use thiserror::Error;

use crate::config::Parameters;
use crate::lattice::{Lattice, LatticeParticle, ParticleGenerator};

/// Errors that can occur while constructing a membrane.
#[derive(Debug, Error)]
pub enum MembraneError {
    /// Width and height must both be at least 1.
    #[error("invalid lattice dimensions {width}x{height}: width and height must be at least 1")]
    InvalidDimensions { width: usize, height: usize },

    /// The spacing vectors are parallel or degenerate, so their cross
    /// product cannot define the degree-of-freedom axis.
    #[error("invalid lattice geometry: spacing vectors are parallel or degenerate")]
    InvalidGeometry,
}

/// Minimum squared length of the spacing cross product for the dof axis to
/// be well-defined.
const DOF_EPSILON: f32 = 1e-12;

/// A rectangular membrane of restrained particles.
pub struct Membrane {
    lattice: Lattice,
    engine: CouplingEngine,
}

impl Membrane {
    /// Create a new rectangular membrane.
    ///
    /// `origin` is the position of the top-left particle; `column_spacing`
    /// and `row_spacing` separate adjacent columns and rows. The
    /// degree-of-freedom axis is the normalized cross product of the two
    /// spacing vectors. The generator supplies each cell's particle; the
    /// response function maps mean relative displacement (m) to force (N).
    pub fn new(
        width: usize,
        height: usize,
        origin: Vec3,
        column_spacing: Vec3,
        row_spacing: Vec3,
        generator: ParticleGenerator,
        response: impl Fn(f32) -> f32 + 'static,
    ) -> Result<Self, MembraneError> {
        if width == 0 || height == 0 {
            return Err(MembraneError::InvalidDimensions { width, height });
        }

        let cross = column_spacing.cross(row_spacing);
        if !cross.is_finite() || cross.length_squared() < DOF_EPSILON {
            return Err(MembraneError::InvalidGeometry);
        }
        let dof = cross.normalize();

        let lattice = Lattice::build(
            width,
            height,
            origin,
            column_spacing,
            row_spacing,
            dof,
            &generator,
        );
        let engine = CouplingEngine::new(
            width,
            height,
            dof,
            origin.dot(dof),
            false,
            Box::new(response),
        );

        Ok(Self { lattice, engine })
    }

    /// Convenience constructor: identical particles of `particle_mass_kg` at
    /// rest, linear restoring response `-stiffness_N_per_m * d`.
    pub fn with_linear_response(
        width: usize,
        height: usize,
        origin: Vec3,
        column_spacing: Vec3,
        row_spacing: Vec3,
        particle_mass_kg: f32,
        stiffness_N_per_m: f32,
        fixed_edges: bool,
    ) -> Result<Self, MembraneError> {
        let mut membrane = Self::new(
            width,
            height,
            origin,
            column_spacing,
            row_spacing,
            ParticleGenerator::uniform(particle_mass_kg),
            move |d| -stiffness_N_per_m * d,
        )?;
        membrane.set_fixed_edges(fixed_edges);
        Ok(membrane)
    }

    /// Build a membrane from loaded parameters.
    pub fn from_parameters(params: &Parameters) -> Result<Self, MembraneError> {
        Self::with_linear_response(
            params.lattice.width,
            params.lattice.height,
            params.lattice.origin(),
            params.lattice.column_spacing(),
            params.lattice.row_spacing(),
            params.lattice.particle_mass_kg,
            params.coupling.stiffness_N_per_m,
            params.coupling.fixed_edges,
        )
    }

    /// Degree-of-freedom axis (unit vector)
    pub fn dof(&self) -> Vec3 {
        self.engine.dof()
    }

    pub fn width(&self) -> usize {
        self.lattice.width()
    }

    pub fn height(&self) -> usize {
        self.lattice.height()
    }

    /// Number of particles in this membrane
    pub fn num_particles(&self) -> usize {
        self.lattice.num_particles()
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    pub fn lattice_mut(&mut self) -> &mut Lattice {
        &mut self.lattice
    }

    /// Coupling engine accessor, for field observability
    pub fn coupling(&self) -> &CouplingEngine {
        &self.engine
    }

    pub fn fixed_edges(&self) -> bool {
        self.engine.fixed_edges()
    }

    pub fn set_fixed_edges(&mut self, fixed: bool) {
        self.engine.set_fixed_edges(fixed);
    }

    /// Compute and apply this step's coupling forces to every particle.
    /// The surrounding framework integrates motion afterwards.
    pub fn apply_forces(&mut self) {
        self.engine.apply(&mut self.lattice);
    }

    /// Displace the particle at (col, row) along the dof axis by `delta_m`.
    /// Fixed particles do not move.
    pub fn offset_along_dof(&mut self, col: usize, row: usize, delta_m: f32) {
        let dof = self.engine.dof();
        if let LatticeParticle::Free(p) = self.lattice.particle_mut(col, row) {
            p.position += dof * delta_m;
        }
    }
}
