//! The rectangular particle grid.
//!
//! Owns particle existence: every cell is populated exactly once at
//! construction by walking a position cursor column by column. The grid
//! reports positions and accumulates applied forces; it never moves
//! particles itself.

use glam::Vec3;

use super::particle::{GridCoord, LatticeParticle, ParticleGenerator};

/// A fixed-size 2D grid of restrained particles, stored column-major.
pub struct Lattice {
    width: usize,
    height: usize,
    /// Column-major: `index = col * height + row`
    particles: Vec<LatticeParticle>,
}

impl Lattice {
    /// Populate the grid column-major from the top-left anchor.
    ///
    /// The cursor advances by `row_spacing` for each row and resets to the
    /// next column anchor (advanced by `column_spacing`) between columns.
    /// Deterministic given the same generator and geometry.
    pub(crate) fn build(
        width: usize,
        height: usize,
        origin: Vec3,
        column_spacing: Vec3,
        row_spacing: Vec3,
        dof: Vec3,
        generator: &ParticleGenerator,
    ) -> Self {
        let mut particles = Vec::with_capacity(width * height);

        let mut column_anchor = origin;
        for col in 0..width {
            let mut cursor = column_anchor;
            for row in 0..height {
                particles.push(generator.generate(GridCoord::new(col, row), cursor, dof));
                cursor += row_spacing;
            }
            column_anchor += column_spacing;
        }

        Self {
            width,
            height,
            particles,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of particles
    pub fn num_particles(&self) -> usize {
        self.particles.len()
    }

    fn index(&self, col: usize, row: usize) -> usize {
        assert!(
            col < self.width && row < self.height,
            "lattice coordinate ({}, {}) out of range for {}x{} grid",
            col,
            row,
            self.width,
            self.height
        );
        col * self.height + row
    }

    /// Current position of the particle at (col, row)
    pub fn position(&self, col: usize, row: usize) -> Vec3 {
        self.particles[self.index(col, row)].position()
    }

    /// Accumulate a force onto the particle at (col, row) for the current
    /// step. No immediate positional effect; fixed particles discard it.
    pub fn apply_force(&mut self, col: usize, row: usize, force: Vec3) {
        let idx = self.index(col, row);
        self.particles[idx].apply_force(force);
    }

    pub fn particle(&self, col: usize, row: usize) -> &LatticeParticle {
        &self.particles[self.index(col, row)]
    }

    pub fn particle_mut(&mut self, col: usize, row: usize) -> &mut LatticeParticle {
        let idx = self.index(col, row);
        &mut self.particles[idx]
    }

    /// All particles in column-major order
    pub fn particles(&self) -> impl Iterator<Item = &LatticeParticle> {
        self.particles.iter()
    }

    pub fn particles_mut(&mut self) -> impl Iterator<Item = &mut LatticeParticle> {
        self.particles.iter_mut()
    }

    /// Clear all force accumulators. The external integrator calls this
    /// between steps after consuming the accumulated forces.
    pub fn reset_forces(&mut self) {
        for particle in &mut self.particles {
            if let LatticeParticle::Free(p) = particle {
                p.force = Vec3::ZERO;
            }
        }
    }
}
