//! CSV snapshot export of the membrane displacement fields.

use std::fs::File;
use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use serde::Serialize;

use crate::membrane::Membrane;

/// Record for one lattice cell
#[derive(Debug, Clone, Serialize)]
pub struct CellRecord {
    /// Column index
    pub col: usize,
    /// Row index
    pub row: usize,
    /// Position (m)
    pub x_m: f32,
    pub y_m: f32,
    pub z_m: f32,
    /// Position projected onto the dof axis (m)
    pub absolute_displacement_m: f32,
    /// Average signed displacement relative to neighbors (m)
    pub mean_relative_displacement_m: f32,
    /// Whether the cell holds an immovable particle
    pub fixed: bool,
}

/// CSV exporter for displacement-field snapshots
pub struct CsvExporter {
    dir: PathBuf,
}

impl CsvExporter {
    /// Create an exporter writing into the given directory.
    ///
    /// Creates the directory if it doesn't exist.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Write one snapshot of the membrane's displacement fields.
    ///
    /// Filename is auto-generated with a timestamp. Returns the output path.
    pub fn write_snapshot(&self, membrane: &Membrane) -> Result<PathBuf> {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let filename = format!("membrane_{}.csv", timestamp);
        let path = self.dir.join(&filename);

        let file = File::create(&path)?;
        let mut writer = csv::Writer::from_writer(file);

        let coupling = membrane.coupling();
        for col in 0..membrane.width() {
            for row in 0..membrane.height() {
                let particle = membrane.lattice().particle(col, row);
                let position = particle.position();

                writer.serialize(CellRecord {
                    col,
                    row,
                    x_m: position.x,
                    y_m: position.y,
                    z_m: position.z,
                    absolute_displacement_m: coupling.absolute_displacement(col, row),
                    mean_relative_displacement_m: coupling.mean_relative_displacement(col, row),
                    fixed: particle.is_fixed(),
                })?;
            }
        }
        writer.flush()?;

        log::info!("Snapshot exported: {}", path.display());
        Ok(path)
    }
}
