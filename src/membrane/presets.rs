//! Preset membrane experiments.
//!
//! Rebuilds the classic slit-diffraction setups: a fixed barrier row with
//! one or two gaps, and a driven source particle at the top edge.

use glam::Vec3;

use super::{Membrane, MembraneError};
use crate::lattice::ParticleGenerator;

const WIDTH: usize = 100;
const HEIGHT: usize = 50;
const SPACING_M: f32 = 0.01;
const SOURCE_FORCE_N: f32 = 5.0;
const STIFFNESS_N_PER_M: f32 = 100.0;

fn slit_membrane(gap_cols: Vec<usize>) -> Result<Membrane, MembraneError> {
    let barrier_row = HEIGHT / 2;
    let source_col = WIDTH / 2;

    let generator = ParticleGenerator::new(
        |_| 1.0,
        |_| 0.0,
        move |c| {
            if c.col == source_col && c.row == 0 {
                SOURCE_FORCE_N
            } else {
                0.0
            }
        },
    )
    .fixed_where(move |c| c.row == barrier_row && !gap_cols.contains(&c.col));

    let mut membrane = Membrane::new(
        WIDTH,
        HEIGHT,
        Vec3::ZERO,
        Vec3::new(SPACING_M, 0.0, 0.0),
        Vec3::new(0.0, 0.0, SPACING_M),
        generator,
        |d| -STIFFNESS_N_PER_M * d,
    )?;
    membrane.set_fixed_edges(true);
    Ok(membrane)
}

/// Single-slit diffraction: a fixed barrier across the middle row with one
/// gap at the center column, and a driven source at the top edge.
pub fn single_slit() -> Result<Membrane, MembraneError> {
    slit_membrane(vec![WIDTH / 2])
}

/// Double-slit diffraction: two gaps, one column either side of center.
pub fn double_slit() -> Result<Membrane, MembraneError> {
    slit_membrane(vec![WIDTH / 2 - 1, WIDTH / 2 + 1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::LatticeParticle;

    #[test]
    fn test_single_slit_barrier() {
        let membrane = single_slit().expect("preset geometry is valid");
        let barrier_row = HEIGHT / 2;

        assert!(membrane.lattice().particle(10, barrier_row).is_fixed());
        assert!(membrane.lattice().particle(WIDTH - 1, barrier_row).is_fixed());
        assert!(!membrane.lattice().particle(WIDTH / 2, barrier_row).is_fixed());
        assert!(!membrane.lattice().particle(10, barrier_row + 1).is_fixed());
        assert!(membrane.fixed_edges());
    }

    #[test]
    fn test_double_slit_barrier() {
        let membrane = double_slit().expect("preset geometry is valid");
        let barrier_row = HEIGHT / 2;

        assert!(!membrane.lattice().particle(WIDTH / 2 - 1, barrier_row).is_fixed());
        assert!(membrane.lattice().particle(WIDTH / 2, barrier_row).is_fixed());
        assert!(!membrane.lattice().particle(WIDTH / 2 + 1, barrier_row).is_fixed());
    }

    #[test]
    fn test_source_particle_driven() {
        let membrane = single_slit().expect("preset geometry is valid");

        match membrane.lattice().particle(WIDTH / 2, 0) {
            LatticeParticle::Free(p) => {
                assert!((p.driving_force_N - SOURCE_FORCE_N).abs() < 1e-6)
            }
            LatticeParticle::Fixed(_) => panic!("source particle must be free"),
        }

        match membrane.lattice().particle(0, 0) {
            LatticeParticle::Free(p) => assert_eq!(p.driving_force_N, 0.0),
            LatticeParticle::Fixed(_) => panic!("corner particle must be free"),
        }
    }
}
