//! CRS command-line tool
//!
//! Lists, searches and transforms between the coordinate reference systems
//! known to the registry.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use crs_cli::config::DefinitionsConfig;
use crs_cli::output::{self, Format};
use crs_common::Point;
use crs_registry::{search, CrsRegistry, TransformEngine};
use projection::Proj4Backend;

/// CRS catalog and point transform tool
#[derive(Parser, Debug)]
#[command(name = "crs-cli")]
#[command(about = "Coordinate reference system catalog and point transforms")]
struct Args {
    /// YAML file with additional coordinate system definitions
    #[arg(long, env = "CRS_DEFINITIONS")]
    definitions: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text, env = "CRS_OUTPUT")]
    format: Format,

    /// Log level
    #[arg(long, default_value = "warn", env = "RUST_LOG")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long, env = "CRS_LOG_JSON")]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every known coordinate system
    List,

    /// Show one coordinate system including its definition
    Info {
        code: String,
    },

    /// Find systems whose code, name or description contains the query
    Search {
        query: String,
    },

    /// Transform a single point
    Transform {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
    },

    /// Transform several `x,y` points, stopping at the first failure
    Batch {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        #[arg(required = true, allow_hyphen_values = true)]
        points: Vec<String>,
    },
}

fn main() {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_tracing(&args);

    if let Err(e) = run(args) {
        error!("{:#}", e);
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(args: &Args) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr);

    if args.log_json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run(args: Args) -> Result<()> {
    let mut registry = CrsRegistry::new(Proj4Backend::new());

    if let Some(path) = &args.definitions {
        let added = DefinitionsConfig::load_from_file(path)?.apply(&mut registry)?;
        info!(added = added, "Applied configured coordinate systems");
    }

    let rendered = match args.command {
        Command::List => output::render_summaries(&registry.list(), args.format)?,
        Command::Info { code } => {
            let system = registry
                .get(&code)
                .with_context(|| format!("Unknown CRS: {}", code))?;
            output::render_system(system, args.format)?
        }
        Command::Search { query } => {
            output::render_summaries(&search(&registry, &query), args.format)?
        }
        Command::Transform { from, to, x, y } => {
            let engine = TransformEngine::new(&registry);
            let point = engine.transform_point(Point::new(x, y), &from, &to)?;
            output::render_points(&[point], args.format)?
        }
        Command::Batch { from, to, points } => {
            let parsed = points
                .iter()
                .map(|s| Point::from_pair_string(s))
                .collect::<Result<Vec<_>, _>>()
                .context("Invalid point")?;

            let engine = TransformEngine::new(&registry);
            let result = engine.transform_batch(&parsed, &from, &to)?;
            output::render_points(&result, args.format)?
        }
    };

    println!("{}", rendered);
    Ok(())
}
