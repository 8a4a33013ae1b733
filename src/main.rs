use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;

use shapekit::replay::{load_script, run_script};
use shapekit::{init_logging, Config, BUILD_DATE, VERSION};

#[derive(Parser)]
#[command(name = "shapekit")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Anchor-based primitive shape editor", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (.toml or .json); defaults to the platform config dir
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a JSON script of editor events and print the final state
    Replay {
        /// Script file
        script: PathBuf,
    },

    /// Print the anchors of the start-up shape
    Anchors {
        /// Shape kind to show instead of the configured default
        #[arg(short, long)]
        kind: Option<String>,
    },
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => {
            let path = shapekit_settings::default_config_path();
            Config::load_or_default(&path)
                .with_context(|| format!("Failed to load config {}", path.display()))
        }
    }
}

fn cmd_replay(config: &Config, script: &Path) -> Result<()> {
    let events = load_script(script)?;
    info!("Replaying {} events from {}", events.len(), script.display());
    let report = run_script(config, &events)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn cmd_anchors(config: &Config, kind: Option<&str>) -> Result<()> {
    let mut session = config.build_session();
    if let Some(name) = kind {
        session.select_shape_by_name(name)?;
    }
    println!("{}", serde_json::to_string_pretty(&session.anchors().to_vec())?);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;
    info!("ShapeKit {} (built {})", VERSION, BUILD_DATE);

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Replay { script } => cmd_replay(&config, &script),
        Commands::Anchors { kind } => cmd_anchors(&config, kind.as_deref()),
    }
}
