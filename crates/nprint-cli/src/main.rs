mod commands;
mod output;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "nprint",
    version,
    about = "Nitrogen footprint calculator for food and energy consumption"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
pub struct SnapshotArgs {
    /// Path to a reference snapshot (.xlsx workbook or raw .json)
    #[arg(required_unless_present = "sample")]
    pub snapshot: Option<PathBuf>,

    /// Use the bundled sample snapshot instead of a file
    #[arg(long)]
    pub sample: bool,
}

#[derive(Args)]
pub struct CalculateArgs {
    #[command(flatten)]
    pub snapshot: SnapshotArgs,

    /// Country to calculate for
    #[arg(short, long)]
    pub country: String,

    /// Weekly servings as '<category>=<count>' (repeatable)
    #[arg(short = 's', long = "serving", value_name = "CAT=N")]
    pub servings: Vec<String>,

    /// Household electricity use (kWh/month)
    #[arg(long, value_name = "KWH")]
    pub electricity: Option<String>,

    /// Household natural gas use (m3/month)
    #[arg(long, value_name = "M3")]
    pub gas: Option<String>,

    /// Number of people in the household
    #[arg(long, value_name = "N")]
    pub household: Option<u32>,

    /// Flying hours per year
    #[arg(long, value_name = "HOURS")]
    pub flights: Option<String>,

    /// Public transit distance (km/week)
    #[arg(long, value_name = "KM")]
    pub transit: Option<String>,

    /// Car travel distance (km/week)
    #[arg(long, value_name = "KM")]
    pub car: Option<String>,

    /// Personal spending level: none, minimal, moderate, high
    #[arg(long, default_value = "none")]
    pub spending: String,

    /// Household sewage treatment: unknown, none, primary, secondary, tertiary
    #[arg(long, default_value = "unknown")]
    pub treatment: String,

    /// Output format: table (default) or json
    #[arg(short, long, default_value = "table")]
    pub output: String,

    /// Write the result to a JSON file
    #[arg(short = 'O', long = "out", value_name = "FILE")]
    pub out: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate a nitrogen footprint against a reference snapshot
    Calculate(CalculateArgs),
    /// List the countries a snapshot can calculate for
    Countries(SnapshotArgs),
    /// Inspect and validate reference tables
    Tables {
        #[command(subcommand)]
        action: TablesAction,
    },
}

#[derive(Subcommand)]
enum TablesAction {
    /// List the seven reference tables and their column schemas
    List,
    /// Normalize a snapshot and report per-table row counts
    Validate {
        #[command(flatten)]
        snapshot: SnapshotArgs,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Calculate(args) => commands::calculate::run(args),
        Commands::Countries(args) => commands::countries::run(&args),
        Commands::Tables { action } => match action {
            TablesAction::List => commands::tables::list(),
            TablesAction::Validate { snapshot } => commands::tables::validate(&snapshot),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
