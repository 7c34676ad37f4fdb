//! Parameter structures for membrane construction.
//!
//! Field names carry their SI units as suffixes.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level parameters container
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameters {
    /// Lattice geometry and particle parameters
    pub lattice: LatticeParameters,
    /// Neighbor-coupling parameters
    pub coupling: CouplingParameters,
}

impl Parameters {
    /// Load parameters from JSON files, or use defaults if files don't exist
    pub fn load_or_default() -> Self {
        let lattice = LatticeParameters::load_or_default("data/parameters/lattice.json");
        let coupling = CouplingParameters::load_or_default("data/parameters/coupling.json");

        Self { lattice, coupling }
    }

    /// Load parameters from specific directory
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        let lattice = LatticeParameters::load_or_default(dir.join("lattice.json"));
        let coupling = CouplingParameters::load_or_default(dir.join("coupling.json"));

        Self { lattice, coupling }
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            lattice: LatticeParameters::default(),
            coupling: CouplingParameters::default(),
        }
    }
}

/// Lattice geometry and particle parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatticeParameters {
    /// Number of columns
    pub width: usize,

    /// Number of rows
    pub height: usize,

    /// Position of the top-left particle (m)
    pub origin_m: [f32; 3],

    /// Displacement between adjacent columns (m)
    pub column_spacing_m: [f32; 3],

    /// Displacement between adjacent rows (m)
    pub row_spacing_m: [f32; 3],

    /// Mass of each particle (kg)
    pub particle_mass_kg: f32,
}

impl LatticeParameters {
    /// Load from JSON file or return defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(params) => {
                    log::info!("Loaded lattice parameters from {:?}", path.as_ref());
                    params
                }
                Err(e) => {
                    log::warn!("Failed to parse lattice parameters: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Lattice parameters file not found, using defaults");
                Self::default()
            }
        }
    }

    pub fn origin(&self) -> Vec3 {
        Vec3::from_array(self.origin_m)
    }

    pub fn column_spacing(&self) -> Vec3 {
        Vec3::from_array(self.column_spacing_m)
    }

    pub fn row_spacing(&self) -> Vec3 {
        Vec3::from_array(self.row_spacing_m)
    }
}

impl Default for LatticeParameters {
    fn default() -> Self {
        Self {
            width: 100,
            height: 50,
            origin_m: [0.0, 0.0, 0.0],

            // 1 cm grid pitch in the XZ plane; the dof axis is then -Y
            column_spacing_m: [0.01, 0.0, 0.0],
            row_spacing_m: [0.0, 0.0, 0.01],

            particle_mass_kg: 1.0,
        }
    }
}

/// Neighbor-coupling parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouplingParameters {
    /// Linear restoring stiffness (N/m): force = -stiffness * displacement
    pub stiffness_N_per_m: f32,

    /// Couple edge particles to the membrane's initial reference plane
    pub fixed_edges: bool,
}

impl CouplingParameters {
    /// Load from JSON file or return defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(params) => {
                    log::info!("Loaded coupling parameters from {:?}", path.as_ref());
                    params
                }
                Err(e) => {
                    log::warn!("Failed to parse coupling parameters: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Coupling parameters file not found, using defaults");
                Self::default()
            }
        }
    }
}

impl Default for CouplingParameters {
    fn default() -> Self {
        Self {
            stiffness_N_per_m: 100.0,
            fixed_edges: false,
        }
    }
}
