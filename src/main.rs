use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;
use wingbox::report::{render_station_table, render_summary};
use wingbox::{
    error, info, sweep, warn, ConstraintReport, SpanProfile, TipResponse, WingBoxConfig,
    WingDeflection,
};

/// Sweep a tapered wing box from root to tip and check its tip deflection and twist.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON configuration file; the reference wing is used when omitted.
    config: Option<PathBuf>,

    /// Override the number of span stations.
    #[arg(short = 'n', long)]
    stations: Option<usize>,

    /// Print section properties for every station.
    #[arg(short, long)]
    table: bool,

    /// Write the stations and tip response as JSON.
    #[arg(short, long, value_name = "PATH")]
    export: Option<PathBuf>,
}

/// Everything written by `--export`.
#[derive(Serialize)]
struct Export<'a> {
    /// Swept stations.
    profile: &'a SpanProfile,
    /// Response at the tip.
    tip: TipResponse,
    /// Design-limit check.
    constraints: ConstraintReport,
}

fn main() -> Result<(), Box<dyn Error>> {
    run(Args::parse()).map_err(|e| {
        error!("{e}");
        e
    })
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    // Read the wing description. Every field has a default, so a partial file only
    // overrides what it names.
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            WingBoxConfig::from_json_file(path)?
        }
        None => {
            info!("No configuration given, using the reference wing");
            WingBoxConfig::default()
        }
    };
    if let Some(stations) = args.stations {
        config.n_stations = stations;
    }

    // Scale the unit section to the local chord at each station and compute its
    // second moments of area.
    // See: https://en.wikipedia.org/wiki/Second_moment_of_area
    let sweep_config = config.to_sweep_config()?;
    info!(
        "Sweeping {} stations from y = {} m to y = {} m",
        sweep_config.n_stations, sweep_config.span_min, sweep_config.span_max
    );
    let profile = sweep(&sweep_config)?;

    // Integrate the bending and torsion relations outward from the clamp at y = 0.
    // See https://en.wikipedia.org/wiki/Euler%E2%80%93Bernoulli_beam_theory and
    // https://en.wikipedia.org/wiki/Torsion_(mechanics).
    info!("Integrating deflection and twist");
    let wing = WingDeflection::new(
        &profile,
        config.material(),
        config.bending_moment.clone(),
        config.torque.clone(),
    )
    .with_quadrature(config.quadrature);
    let tip = wing.tip_response()?;

    // The deflection limit is a fraction of the full span, twice the swept length.
    let half_span = profile.tip().span_position - profile.root().span_position;
    let constraints = config.limits.check(half_span, tip.deflection, tip.twist_angle);
    if !constraints.deflection_ok() {
        warn!(
            "Tip deflection {:.4} m exceeds the allowed {:.4} m",
            constraints.tip_deflection, constraints.allowed_deflection
        );
    }
    if !constraints.twist_ok() {
        warn!(
            "Tip twist {:.3} deg exceeds the allowed {:.3} deg",
            constraints.tip_twist_deg, constraints.allowed_twist_deg
        );
    }

    // Print the report, then the optional table and JSON export.
    println!("{}", render_summary(&profile, &tip, &constraints));
    if args.table {
        println!("{}", render_station_table(&profile));
    }

    if let Some(path) = &args.export {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(
            writer,
            &Export {
                profile: &profile,
                tip,
                constraints,
            },
        )?;
        info!("Wrote {}", path.display());
    }

    Ok(())
}
