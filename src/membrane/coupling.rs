//! The membrane coupling engine.
//!
//! Per-step transform from particle positions to coupling forces:
//!
//! 1. Project every particle's position onto the dof axis to get its
//!    absolute displacement.
//! 2. Accumulate signed relative displacement over every adjacent pair
//!    (antisymmetric: a pair contributes equal and opposite stretch to its
//!    two endpoints), add virtual-reference terms at fixed edges, and
//!    normalize by neighbor count.
//! 3. Map each cell's mean relative displacement through the force-response
//!    function and apply the result along the dof axis.
//!
//! Both field buffers are sized at construction and reused every step.

use glam::Vec3;

use crate::lattice::Lattice;

/// Scalar force-response function: mean relative displacement (m) to force (N).
pub type ForceResponse = Box<dyn Fn(f32) -> f32>;

/// Computes and applies neighbor-coupling forces for one membrane.
pub struct CouplingEngine {
    width: usize,
    height: usize,
    /// Degree-of-freedom axis (unit vector)
    dof: Vec3,
    /// Projection of the construction-time anchor onto the dof axis; the
    /// displacement of the virtual reference neighbors at fixed edges
    reference_displacement_m: f32,
    fixed_edges: bool,
    response: ForceResponse,
    /// Per-cell absolute displacement along dof (m), column-major
    absolute_m: Vec<f32>,
    /// Per-cell mean relative displacement (m), column-major
    relative_m: Vec<f32>,
}

impl CouplingEngine {
    pub(crate) fn new(
        width: usize,
        height: usize,
        dof: Vec3,
        reference_displacement_m: f32,
        fixed_edges: bool,
        response: ForceResponse,
    ) -> Self {
        Self {
            width,
            height,
            dof,
            reference_displacement_m,
            fixed_edges,
            response,
            absolute_m: vec![0.0; width * height],
            relative_m: vec![0.0; width * height],
        }
    }

    /// Degree-of-freedom axis (unit vector)
    pub fn dof(&self) -> Vec3 {
        self.dof
    }

    /// Whether membrane edges couple to the stationary reference plane
    pub fn fixed_edges(&self) -> bool {
        self.fixed_edges
    }

    pub fn set_fixed_edges(&mut self, fixed: bool) {
        self.fixed_edges = fixed;
    }

    fn index(&self, col: usize, row: usize) -> usize {
        assert!(
            col < self.width && row < self.height,
            "cell ({}, {}) out of range for {}x{} membrane",
            col,
            row,
            self.width,
            self.height
        );
        col * self.height + row
    }

    /// Absolute displacement of the cell at (col, row) as of the last
    /// [`apply`](Self::apply) call (m)
    pub fn absolute_displacement(&self, col: usize, row: usize) -> f32 {
        self.absolute_m[self.index(col, row)]
    }

    /// Mean relative displacement of the cell at (col, row) as of the last
    /// [`apply`](Self::apply) call (m)
    pub fn mean_relative_displacement(&self, col: usize, row: usize) -> f32 {
        self.relative_m[self.index(col, row)]
    }

    /// The full mean-relative-displacement field, column-major
    pub fn mean_relative_field(&self) -> &[f32] {
        &self.relative_m
    }

    /// Compute and apply this step's coupling forces to every particle.
    pub fn apply(&mut self, lattice: &mut Lattice) {
        self.project_displacements(lattice);
        self.update_mean_relative_displacements();
        self.apply_forces(lattice);
    }

    /// Recompute each cell's absolute displacement from its position.
    fn project_displacements(&mut self, lattice: &Lattice) {
        for col in 0..self.width {
            for row in 0..self.height {
                self.absolute_m[col * self.height + row] =
                    lattice.position(col, row).dot(self.dof);
            }
        }
    }

    /// Recompute each cell's mean relative displacement from the absolute
    /// displacement field.
    fn update_mean_relative_displacements(&mut self) {
        self.relative_m.fill(0.0);

        // Column-adjacent pairs: the stretch between (col-1, row) and
        // (col, row) contributes equal and opposite terms to both endpoints.
        for col in 1..self.width {
            for row in 0..self.height {
                let d = self.absolute_m[col * self.height + row]
                    - self.absolute_m[(col - 1) * self.height + row];
                self.relative_m[col * self.height + row] += d;
                self.relative_m[(col - 1) * self.height + row] -= d;
            }
        }

        // Row-adjacent pairs.
        for col in 0..self.width {
            for row in 1..self.height {
                let d = self.absolute_m[col * self.height + row]
                    - self.absolute_m[col * self.height + row - 1];
                self.relative_m[col * self.height + row] += d;
                self.relative_m[col * self.height + row - 1] -= d;
            }
        }

        if self.fixed_edges {
            self.add_boundary_terms();

            // Every cell has exactly four neighbor slots, real or virtual.
            for relative in &mut self.relative_m {
                *relative /= 4.0;
            }
        } else {
            self.normalize_by_neighbor_count();
        }
    }

    /// Each boundary cell treats the membrane's reference plane as one extra
    /// stationary neighbor per boundary it lies on. A corner lies on two
    /// boundaries and receives the term twice; in a single-column or
    /// single-row lattice a cell lies on both opposite boundaries.
    fn add_boundary_terms(&mut self) {
        let last_col = self.width - 1;
        let last_row = self.height - 1;

        for row in 0..self.height {
            let left = row;
            self.relative_m[left] += self.absolute_m[left] - self.reference_displacement_m;

            let right = last_col * self.height + row;
            self.relative_m[right] += self.absolute_m[right] - self.reference_displacement_m;
        }

        for col in 0..self.width {
            let top = col * self.height;
            self.relative_m[top] += self.absolute_m[top] - self.reference_displacement_m;

            let bottom = col * self.height + last_row;
            self.relative_m[bottom] += self.absolute_m[bottom] - self.reference_displacement_m;
        }
    }

    fn normalize_by_neighbor_count(&mut self) {
        for col in 0..self.width {
            for row in 0..self.height {
                let neighbors = self.neighbor_count(col, row);
                if neighbors > 0 {
                    self.relative_m[col * self.height + row] /= neighbors as f32;
                }
                // neighbors == 0 only for a 1x1 lattice, where the
                // accumulated value is already zero.
            }
        }
    }

    /// Number of real grid neighbors of (col, row): one of the four slots is
    /// lost per lattice boundary the cell lies on.
    fn neighbor_count(&self, col: usize, row: usize) -> u32 {
        let mut neighbors = 4u32;
        if col == 0 {
            neighbors -= 1;
        }
        if col == self.width - 1 {
            neighbors -= 1;
        }
        if row == 0 {
            neighbors -= 1;
        }
        if row == self.height - 1 {
            neighbors -= 1;
        }
        neighbors
    }

    /// Map each cell's mean relative displacement through the response
    /// function and apply the resulting force along the dof axis.
    fn apply_forces(&self, lattice: &mut Lattice) {
        for col in 0..self.width {
            for row in 0..self.height {
                let magnitude = (self.response)(self.relative_m[col * self.height + row]);
                lattice.apply_force(col, row, self.dof * magnitude);
            }
        }
    }
}
