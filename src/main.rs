//! AstroImpact command-line interface.
//!
//! Runs the impact estimator against a catalog preset, custom slider
//! values, or a NASA NeoWs JSON object, prints a formatted report and
//! optionally persists the run to a local simulation store.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::info;

use astroimpact::catalog::{self, Preset};
use astroimpact::estimator::{CraterModel, ImpactResult, estimate_impact_with};
use astroimpact::format;
use astroimpact::neo::{DiameterMode, NeoObject};
use astroimpact::record::SimulationRecord;
use astroimpact::store::{SimulationStore, generate_id};
use astroimpact::types::{AsteroidParameters, Composition};

#[derive(Parser)]
#[command(name = "astroimpact", about = "Asteroid impact estimator", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Estimate an impact from a preset or custom parameters
    Estimate(EstimateArgs),
    /// List the built-in asteroid presets
    Presets,
    /// Estimate an impact from a NASA NeoWs JSON object
    Neo(NeoArgs),
}

#[derive(clap::Args)]
struct EstimateArgs {
    /// Catalog preset id (see `presets`); default is Bennu
    #[arg(long, conflicts_with_all = ["diameter", "velocity"])]
    preset: Option<String>,

    /// Custom impactor diameter in meters
    #[arg(long, requires = "velocity")]
    diameter: Option<f64>,

    /// Custom entry velocity in km/s
    #[arg(long, requires = "diameter")]
    velocity: Option<f64>,

    /// Impact angle in degrees (overrides the preset's angle)
    #[arg(long)]
    angle: Option<f64>,

    /// Composition: stone, iron, ice or mixed
    #[arg(long)]
    composition: Option<String>,

    /// Crater scaling law: baseline (default) or scaled
    #[arg(long, default_value = "baseline")]
    crater_model: String,

    /// Emit the simulation record as JSON instead of a report
    #[arg(long)]
    json: bool,

    /// Persist the run to the simulation store
    #[arg(long)]
    save: bool,

    /// Store directory (with --save)
    #[arg(long, default_value = "simulations")]
    store_dir: PathBuf,

    /// User name recorded with saved simulations
    #[arg(long, default_value = "anonymous")]
    user: String,
}

#[derive(clap::Args)]
struct NeoArgs {
    /// Path to a NeoWs JSON object
    #[arg(long)]
    file: PathBuf,

    /// Composition assumed for the object
    #[arg(long, default_value = "stone")]
    composition: String,

    /// Use the maximum of the estimated diameter range instead of the average
    #[arg(long)]
    max_diameter: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Command::Estimate(args) => estimate(args),
        Command::Presets => list_presets(),
        Command::Neo(args) => neo(args),
    }
}

fn parse_crater_model(name: &str) -> Result<CraterModel> {
    match name {
        "baseline" => Ok(CraterModel::Baseline),
        "scaled" => Ok(CraterModel::Scaled),
        other => bail!("unknown crater model {other:?} (expected baseline or scaled)"),
    }
}

fn estimate(args: EstimateArgs) -> Result<()> {
    let model = parse_crater_model(&args.crater_model)?;
    let composition = args.composition.as_deref().map(Composition::parse_lenient);

    let (preset, mut params) = match (&args.preset, args.diameter, args.velocity) {
        (_, Some(diameter), Some(velocity)) => {
            let params = AsteroidParameters::new(
                diameter,
                velocity,
                args.angle.unwrap_or(45.0),
                composition.unwrap_or_default(),
            );
            (None, params)
        }
        (preset_id, _, _) => {
            let id = preset_id.as_deref().unwrap_or(catalog::DEFAULT_PRESET_ID);
            let preset = catalog::find_preset(id)
                .with_context(|| format!("unknown preset {id:?} (see `astroimpact presets`)"))?;
            (Some(preset), preset.parameters())
        }
    };

    if preset.is_some() {
        if let Some(angle) = args.angle {
            params = AsteroidParameters::new(params.diameter_m, params.velocity_km_s, angle, params.composition);
        }
        if let Some(composition) = composition {
            params = AsteroidParameters::new(params.diameter_m, params.velocity_km_s, params.angle_deg, composition);
        }
    }

    let result = estimate_impact_with(&params, model);
    let record = build_record(generate_id(), &args.user, preset, &params, &result);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print_report(preset, &params, &result);
    }

    if args.save {
        let store = SimulationStore::new(&args.store_dir)?;
        let id = store.save(&record)?;
        info!("saved simulation {id} to {}", store.dir().display());
    }

    Ok(())
}

fn build_record(
    id: String,
    user: &str,
    preset: Option<&'static Preset>,
    params: &AsteroidParameters,
    result: &ImpactResult,
) -> SimulationRecord {
    match preset {
        Some(preset) => SimulationRecord::from_preset(id, user, preset, params, result),
        None => SimulationRecord::custom(id, user, params, result),
    }
}

fn list_presets() -> Result<()> {
    for preset in catalog::PRESETS {
        let hazard = if preset.hazardous { " [PHA]" } else { "" };
        println!(
            "{:<14} {:<28} {:>7.0} m  {:>5.1} km/s  {}{}",
            preset.id,
            preset.name,
            preset.diameter_m,
            preset.velocity_km_s,
            preset.description,
            hazard,
        );
    }
    Ok(())
}

fn neo(args: NeoArgs) -> Result<()> {
    let neo = NeoObject::from_file(&args.file)
        .with_context(|| format!("reading NeoWs object from {}", args.file.display()))?;
    let mode = if args.max_diameter {
        DiameterMode::Maximum
    } else {
        DiameterMode::Average
    };
    let params = neo.to_parameters(Composition::parse_lenient(&args.composition), mode);

    info!(
        "loaded {} ({} m, {} km/s, PHA: {})",
        neo.display_name(),
        params.diameter_m,
        params.velocity_km_s,
        neo.is_potentially_hazardous_asteroid,
    );

    let result = estimate_impact_with(&params, CraterModel::Baseline);
    print_report(None, &params, &result);
    Ok(())
}

fn print_report(preset: Option<&'static Preset>, params: &AsteroidParameters, result: &ImpactResult) {
    let name = preset.map_or("Custom Meteor", |p| p.name);
    println!("=== AstroImpact: {name} ===");
    println!(
        "input:    {:.1} m {} at {:.1} km/s, {:.0}° angle",
        params.diameter_m, params.composition, params.velocity_km_s, params.angle_deg,
    );
    println!("mass:     {} kg", format::format_mass_kg(result.mass_kg));
    println!(
        "energy:   {} megatons TNT",
        format::format_energy_megatons(result.energy_megatons)
    );
    println!(
        "crater:   {} m diameter",
        format::format_crater_meters(result.crater_diameter_m)
    );
    println!(
        "affected: {} km²",
        format::format_area_km2(result.affected_area_km2)
    );
    println!(
        "compare:  {} ({})",
        result.comparable_event.event, result.comparable_event.equivalent
    );
}
