//! # Estimate CLI
//!
//! Command-line front end for `estimate_core`.
//!
//! ```text
//! estimate services
//! estimate project --land-area 500 --stories 2 --coverage 50 --service 1 --quality 2 --urgency 1
//! estimate building --land-area 500 --coverage 50 --stories 2 --factor-id 1
//! estimate export ./rates
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use estimate_core::config::EstimatorConfig;
use estimate_core::{define_building, define_project, save_rate_tables, EstimateRequest, RateTables};

#[derive(Parser, Debug)]
#[command(name = "estimate", version, about = "Construction cost estimator")]
struct Cli {
    /// Directory with services.json, qualities.json, urgencies.json
    /// (overrides ESTIMATE_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List services, quality levels, urgency levels and quality factors
    Services,

    /// Price a project for one service
    Project {
        #[arg(long)]
        land_area: f64,
        #[arg(long)]
        stories: i32,
        /// Ground coverage in percent
        #[arg(long)]
        coverage: f64,
        #[arg(long)]
        service: u32,
        #[arg(long)]
        quality: u32,
        #[arg(long)]
        urgency: u32,
    },

    /// Price a whole building
    Building {
        #[arg(long)]
        land_area: f64,
        /// Percent of land covered
        #[arg(long)]
        coverage: f64,
        #[arg(long)]
        stories: i32,
        /// Raw quality multiplier
        #[arg(long, conflicts_with = "factor_id")]
        factor: Option<f64>,
        /// Quality factor id from the reference tables
        #[arg(long)]
        factor_id: Option<u32>,
    },

    /// Write the active tables to a directory as JSON
    Export { dir: PathBuf },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = EstimatorConfig::from_env();
    if let Some(dir) = &cli.data_dir {
        config = config.with_data_dir(dir);
    }
    let tables = config.rate_tables().context("failed to load rate tables")?;
    debug!(data_dir = ?config.data_dir, "rate tables ready");

    match cli.command {
        Command::Services => print_tables(&tables, cli.json)?,
        Command::Project {
            land_area,
            stories,
            coverage,
            service,
            quality,
            urgency,
        } => {
            let request = EstimateRequest {
                project: define_project(land_area, stories, coverage),
                service_id: service,
                quality_id: quality,
                urgency_id: urgency,
            };
            let estimate = tables.estimate(&request)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&estimate)?);
            } else {
                println!("Service:  {} ({:.2}/unit)", estimate.service, estimate.rate);
                println!("Quality:  {} (x{})", estimate.quality, estimate.quality_multiplier);
                println!("Urgency:  {} (x{})", estimate.urgency, estimate.urgency_multiplier);
                println!();
                println!("Area:       {:.2}", estimate.area);
                println!("Base cost:  {:.2}", estimate.base_cost);
                println!("Final cost: {:.2}", estimate.final_cost);
            }
        }
        Command::Building {
            land_area,
            coverage,
            stories,
            factor,
            factor_id,
        } => {
            let building = define_building(land_area, coverage, stories);
            let cost = match (factor, factor_id) {
                (Some(f), None) => building.building_cost(f),
                (None, Some(id)) => tables.building_cost_for(&building, id)?,
                _ => bail!("pass exactly one of --factor or --factor-id"),
            };
            if cli.json {
                let out = serde_json::json!({
                    "building": building,
                    "area": building.build_area(),
                    "cost": cost,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("Area: {:.2}", building.build_area());
                println!("Cost: {:.2}", cost);
            }
        }
        Command::Export { dir } => {
            save_rate_tables(&tables, &dir)?;
            info!(dir = %dir.display(), "exported rate tables");
            println!("Wrote rate tables to {}", dir.display());
        }
    }

    Ok(())
}

fn print_tables(tables: &RateTables, json: bool) -> anyhow::Result<()> {
    if json {
        let out = serde_json::json!({
            "services": tables.services().collect::<Vec<_>>(),
            "qualities": tables.qualities().collect::<Vec<_>>(),
            "urgencies": tables.urgencies().collect::<Vec<_>>(),
            "quality_factors": tables.quality_factors().collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("Services:");
    for s in tables.services() {
        println!("  {:>3}  {:<24} {:>10.2}", s.id, s.name, s.rate);
    }
    println!("Quality levels:");
    for q in tables.qualities() {
        println!("  {:>3}  {:<24} {:>9}%", q.id, q.label, q.percentage);
    }
    println!("Urgency levels:");
    for u in tables.urgencies() {
        println!("  {:>3}  {:<24} {:>9}%", u.id, u.label, u.percentage);
    }
    println!("Quality factors:");
    for f in tables.quality_factors() {
        println!("  {:>3}  {:<24} {:>10}", f.id, f.label, f.factor);
    }
    Ok(())
}
