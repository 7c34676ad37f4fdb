//! Headless demo driver for the membrane engine.
//!
//! Builds a membrane (from config or a slit preset), perturbs the center
//! particle along the dof axis, runs one coupling pass, and reports field
//! and force statistics. Timestepping is left to an external integrator.

// Unit suffixes in names, as in the library crate.
#![allow(non_snake_case)]

use anyhow::Result;
use glam::Vec3;

use membrane_sim::export::CsvExporter;
use membrane_sim::membrane::{double_slit, single_slit};
use membrane_sim::{LatticeParticle, Membrane, Parameters};

struct Args {
    preset: String,
    displace_m: f32,
    export: bool,
}

fn parse_args() -> Args {
    let mut args = Args {
        preset: "flat".to_string(),
        displace_m: 0.1,
        export: false,
    };

    let argv: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < argv.len() {
        match argv[i].as_str() {
            "-p" | "--preset" => {
                if i + 1 < argv.len() {
                    args.preset = argv[i + 1].clone();
                    i += 1;
                }
            }
            "-d" | "--displace" => {
                if i + 1 < argv.len() {
                    args.displace_m = argv[i + 1].parse().unwrap_or(0.1);
                    i += 1;
                }
            }
            "--export" => args.export = true,
            "--help" | "-h" => {
                println!("Membrane Sim - discretized elastic membrane engine");
                println!();
                println!("Usage: membrane-sim [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -p, --preset NAME  flat, single-slit, or double-slit (default: flat)");
                println!("  -d, --displace D   Center-particle displacement in m (default: 0.1)");
                println!("  --export           Write a CSV snapshot of the displacement fields");
                println!("  --help, -h         Show this help");
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    args
}

fn build_membrane(preset: &str) -> Result<Membrane> {
    let membrane = match preset {
        "single-slit" => single_slit()?,
        "double-slit" => double_slit()?,
        _ => {
            let params = Parameters::load_or_default();
            Membrane::from_parameters(&params)?
        }
    };
    Ok(membrane)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = parse_args();

    log::info!("Membrane Sim starting...");

    let mut membrane = build_membrane(&args.preset)?;
    log::info!(
        "Membrane built: {}x{} particles, dof axis {:?}, fixed edges: {}",
        membrane.width(),
        membrane.height(),
        membrane.dof(),
        membrane.fixed_edges()
    );

    // Perturb the center particle, then run one coupling pass.
    let center_col = membrane.width() / 2;
    let center_row = membrane.height() / 2;
    membrane.offset_along_dof(center_col, center_row, args.displace_m);
    membrane.apply_forces();

    // Per-particle driving forces (e.g. the slit-preset source) are the
    // integrator's job; apply them here so the report includes them.
    let dof = membrane.dof();
    for particle in membrane.lattice_mut().particles_mut() {
        if let LatticeParticle::Free(p) = particle {
            let driving = dof * p.driving_force_N;
            p.force += driving;
        }
    }

    let max_relative_m = membrane
        .coupling()
        .mean_relative_field()
        .iter()
        .fold(0.0f32, |acc, r| acc.max(r.abs()));

    let mut max_force_N = 0.0f32;
    let mut net_force_N = Vec3::ZERO;
    for particle in membrane.lattice().particles() {
        let force = particle.force();
        max_force_N = max_force_N.max(force.length());
        net_force_N += force;
    }

    log::info!(
        "Center particle ({}, {}) displaced by {} m along dof",
        center_col,
        center_row,
        args.displace_m
    );
    log::info!("Max |mean relative displacement|: {:.6} m", max_relative_m);
    log::info!("Max particle force: {:.6} N", max_force_N);
    log::info!("Net force: {:?} N", net_force_N);

    if args.export {
        let exporter = CsvExporter::new("exports")?;
        exporter.write_snapshot(&membrane)?;
    }

    Ok(())
}
