//! Integration tests for lattice construction and the particle generator.

use glam::Vec3;
use membrane_sim::lattice::{GridCoord, LatticeParticle, ParticleGenerator};
use membrane_sim::{Membrane, MembraneError};

const EPS: f32 = 1e-6;

fn grid_membrane(generator: ParticleGenerator) -> Membrane {
    Membrane::new(
        4,
        3,
        Vec3::new(1.0, 2.0, 3.0),
        Vec3::new(0.5, 0.0, 0.0),
        Vec3::new(0.0, 0.25, 0.0),
        generator,
        |d| -d,
    )
    .expect("valid membrane geometry")
}

#[test]
fn test_construction_cursor_walk() {
    let membrane = grid_membrane(ParticleGenerator::uniform(1.0));

    // position(col, row) = origin + col * column_spacing + row * row_spacing
    assert!((membrane.lattice().position(0, 0) - Vec3::new(1.0, 2.0, 3.0)).length() < EPS);
    assert!((membrane.lattice().position(3, 0) - Vec3::new(2.5, 2.0, 3.0)).length() < EPS);
    assert!((membrane.lattice().position(0, 2) - Vec3::new(1.0, 2.5, 3.0)).length() < EPS);
    assert!((membrane.lattice().position(3, 2) - Vec3::new(2.5, 2.5, 3.0)).length() < EPS);
}

#[test]
fn test_dof_perpendicular_to_spacing() {
    let membrane = grid_membrane(ParticleGenerator::uniform(1.0));
    let dof = membrane.dof();

    // X cross Y, normalized
    assert!((dof - Vec3::Z).length() < EPS);
    assert!((dof.length() - 1.0).abs() < EPS);
}

#[test]
fn test_generator_receives_grid_coordinates() {
    // Encode the coordinate into the mass to confirm column-major visitation.
    let membrane = grid_membrane(ParticleGenerator::new(
        |c: GridCoord| (c.col * 10 + c.row) as f32,
        |_| 0.0,
        |_| 0.0,
    ));

    assert!((membrane.lattice().particle(0, 0).mass_kg() - 0.0).abs() < EPS);
    assert!((membrane.lattice().particle(2, 1).mass_kg() - 21.0).abs() < EPS);
    assert!((membrane.lattice().particle(3, 2).mass_kg() - 32.0).abs() < EPS);
}

#[test]
fn test_generator_initial_velocity_along_dof() {
    let membrane = grid_membrane(ParticleGenerator::new(|_| 1.0, |c| c.row as f32, |_| 0.0));
    let dof = membrane.dof();

    match membrane.lattice().particle(1, 2) {
        LatticeParticle::Free(p) => assert!((p.velocity - dof * 2.0).length() < EPS),
        LatticeParticle::Fixed(_) => panic!("expected a free particle"),
    }
}

#[test]
fn test_generator_driving_force() {
    let membrane = grid_membrane(
        ParticleGenerator::new(
            |_| 1.0,
            |_| 0.0,
            |c| if c.col == 2 && c.row == 0 { 5.0 } else { 0.0 },
        ),
    );

    match membrane.lattice().particle(2, 0) {
        LatticeParticle::Free(p) => assert!((p.driving_force_N - 5.0).abs() < EPS),
        LatticeParticle::Fixed(_) => panic!("expected a free particle"),
    }
    match membrane.lattice().particle(1, 1) {
        LatticeParticle::Free(p) => assert_eq!(p.driving_force_N, 0.0),
        LatticeParticle::Fixed(_) => panic!("expected a free particle"),
    }
}

#[test]
fn test_fixed_override_keeps_position() {
    let mut membrane =
        grid_membrane(ParticleGenerator::uniform(1.0).fixed_where(|c| c.col == 1 && c.row == 1));

    let particle = membrane.lattice().particle(1, 1);
    assert!(particle.is_fixed());
    let position_before = particle.position();

    // Neither direct forces nor dof offsets move a fixed particle.
    membrane.lattice_mut().apply_force(1, 1, Vec3::new(0.0, 0.0, 9.0));
    membrane.offset_along_dof(1, 1, 1.0);

    let particle = membrane.lattice().particle(1, 1);
    assert_eq!(particle.force(), Vec3::ZERO);
    assert_eq!(particle.position(), position_before);
}

#[test]
fn test_construction_is_deterministic() {
    let build = || {
        grid_membrane(ParticleGenerator::new(
            |c: GridCoord| 1.0 + c.col as f32,
            |c| c.row as f32,
            |_| 0.0,
        ))
    };

    let a = build();
    let b = build();

    assert_eq!(a.num_particles(), b.num_particles());
    for col in 0..a.width() {
        for row in 0..a.height() {
            assert_eq!(
                a.lattice().position(col, row),
                b.lattice().position(col, row)
            );
            assert_eq!(
                a.lattice().particle(col, row).mass_kg(),
                b.lattice().particle(col, row).mass_kg()
            );
        }
    }
}

#[test]
fn test_invalid_dimensions_rejected() {
    for (width, height) in [(0, 5), (5, 0), (0, 0)] {
        let result = Membrane::new(
            width,
            height,
            Vec3::ZERO,
            Vec3::X,
            Vec3::Z,
            ParticleGenerator::uniform(1.0),
            |d| -d,
        );
        assert!(
            matches!(result, Err(MembraneError::InvalidDimensions { .. })),
            "{}x{} must be rejected",
            width,
            height
        );
    }
}

#[test]
fn test_degenerate_spacing_rejected() {
    // Parallel spacing vectors
    let parallel = Membrane::new(
        3,
        3,
        Vec3::ZERO,
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(2.0, 0.0, 0.0),
        ParticleGenerator::uniform(1.0),
        |d| -d,
    );
    assert!(matches!(parallel, Err(MembraneError::InvalidGeometry)));

    // Zero spacing vector
    let zero = Membrane::new(
        3,
        3,
        Vec3::ZERO,
        Vec3::ZERO,
        Vec3::Z,
        ParticleGenerator::uniform(1.0),
        |d| -d,
    );
    assert!(matches!(zero, Err(MembraneError::InvalidGeometry)));
}

#[test]
#[should_panic(expected = "out of range")]
fn test_out_of_range_coordinate_panics() {
    let membrane = grid_membrane(ParticleGenerator::uniform(1.0));
    membrane.lattice().position(4, 0);
}
