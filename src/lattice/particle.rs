//! Particle variants for the membrane lattice.
//!
//! Every lattice cell holds exactly one particle: an ordinary restrained
//! particle free to move along the membrane's degree-of-freedom axis, or a
//! fixed point that never moves (e.g. a diffraction barrier). Fixed particles
//! report a position but silently discard applied forces.

use glam::Vec3;

/// Grid coordinate of a cell in the lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCoord {
    /// Column index, `0..width`
    pub col: usize,
    /// Row index, `0..height`
    pub row: usize,
}

impl GridCoord {
    pub fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

/// An ordinary restrained particle.
#[derive(Debug, Clone)]
pub struct FreeParticle {
    /// Mass (kg)
    pub mass_kg: f32,
    /// Position (m)
    pub position: Vec3,
    /// Velocity (m/s), directed along the dof axis
    pub velocity: Vec3,
    /// Force accumulated for the current step (N)
    pub force: Vec3,
    /// Constant driving force along the dof axis (N), e.g. a wave source.
    /// Applied by the external integrator, not by the coupling engine.
    pub driving_force_N: f32,
}

/// An immovable particle. Applied forces are discarded.
#[derive(Debug, Clone)]
pub struct FixedPoint {
    /// Mass (kg)
    pub mass_kg: f32,
    /// Position (m)
    pub position: Vec3,
}

/// A particle occupying one lattice cell.
#[derive(Debug, Clone)]
pub enum LatticeParticle {
    Free(FreeParticle),
    Fixed(FixedPoint),
}

impl LatticeParticle {
    /// Current spatial position (m)
    pub fn position(&self) -> Vec3 {
        match self {
            LatticeParticle::Free(p) => p.position,
            LatticeParticle::Fixed(p) => p.position,
        }
    }

    /// Accumulate a force for the current step. No-op for fixed particles.
    pub fn apply_force(&mut self, force: Vec3) {
        if let LatticeParticle::Free(p) = self {
            p.force += force;
        }
    }

    /// Force accumulated so far this step (always zero for fixed particles)
    pub fn force(&self) -> Vec3 {
        match self {
            LatticeParticle::Free(p) => p.force,
            LatticeParticle::Fixed(_) => Vec3::ZERO,
        }
    }

    /// Mass (kg)
    pub fn mass_kg(&self) -> f32 {
        match self {
            LatticeParticle::Free(p) => p.mass_kg,
            LatticeParticle::Fixed(p) => p.mass_kg,
        }
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self, LatticeParticle::Fixed(_))
    }
}

/// Per-cell particle factory injected at membrane construction.
///
/// Maps a grid coordinate to the particle's mass, initial velocity along the
/// dof axis, and constant driving force along the dof axis; cells matching
/// the fixed predicate get an immovable particle instead.
pub struct ParticleGenerator {
    mass_kg: Box<dyn Fn(GridCoord) -> f32>,
    initial_velocity: Box<dyn Fn(GridCoord) -> f32>,
    driving_force_N: Box<dyn Fn(GridCoord) -> f32>,
    fixed: Box<dyn Fn(GridCoord) -> bool>,
}

impl ParticleGenerator {
    pub fn new(
        mass_kg: impl Fn(GridCoord) -> f32 + 'static,
        initial_velocity: impl Fn(GridCoord) -> f32 + 'static,
        driving_force_N: impl Fn(GridCoord) -> f32 + 'static,
    ) -> Self {
        Self {
            mass_kg: Box::new(mass_kg),
            initial_velocity: Box::new(initial_velocity),
            driving_force_N: Box::new(driving_force_N),
            fixed: Box::new(|_| false),
        }
    }

    /// Generator producing identical particles of the given mass, at rest,
    /// with no driving force.
    pub fn uniform(mass_kg: f32) -> Self {
        Self::new(move |_| mass_kg, |_| 0.0, |_| 0.0)
    }

    /// Mark cells matching the predicate as fixed (immovable).
    pub fn fixed_where(mut self, predicate: impl Fn(GridCoord) -> bool + 'static) -> Self {
        self.fixed = Box::new(predicate);
        self
    }

    /// Instantiate the particle for one cell.
    pub(crate) fn generate(&self, coord: GridCoord, position: Vec3, dof: Vec3) -> LatticeParticle {
        let mass_kg = (self.mass_kg)(coord);

        if (self.fixed)(coord) {
            LatticeParticle::Fixed(FixedPoint { mass_kg, position })
        } else {
            LatticeParticle::Free(FreeParticle {
                mass_kg,
                position,
                velocity: dof * (self.initial_velocity)(coord),
                force: Vec3::ZERO,
                driving_force_N: (self.driving_force_N)(coord),
            })
        }
    }
}
