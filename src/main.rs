//! Quantum Password Analyzer CLI
//!
//! Rescales brute-force cracking-time tables by a quantum speedup factor
//! and draws them as heat-map infographics.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::info;
use std::path::PathBuf;

use quantum_password_analyzer::commands::utils::{display_version, print_entries, prompt_choice};
use quantum_password_analyzer::commands::{
    entries_to_json, execute_pipeline, execute_transform, execute_visualize, list_tables,
    select_table, validate_args, PipelineArgs, TransformArgs, VisualizeArgs,
};
use quantum_password_analyzer::utils::AnalyzerConfig;

/// Quantum Password Analyzer - brute-force estimates under a quantum speedup
#[derive(Parser, Debug)]
#[command(name = "qpa")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// TOML config file
    #[arg(long, global = true, env = "QPA_CONFIG")]
    config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Divide every duration in a table by a speedup factor
    Transform {
        /// Input estimate table
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Directory for the transformed table
        #[arg(short, long, env = "QPA_OUTPUT_DIR")]
        output_dir: Option<PathBuf>,

        /// Speedup factor
        #[arg(short, long)]
        factor: Option<f64>,

        /// Do not write password_bruteforce_old.csv
        #[arg(long)]
        no_save_old: bool,
    },

    /// Render a transformed table as a PNG heat-map
    Visualize {
        /// Table to draw; prompts from the output directory when omitted
        #[arg(short, long)]
        csv: Option<PathBuf>,

        /// Output directory for the image (and to choose from)
        #[arg(short, long, env = "QPA_OUTPUT_DIR")]
        output_dir: Option<PathBuf>,

        /// Title prefix
        #[arg(short, long)]
        title: Option<String>,

        /// Image resolution
        #[arg(long)]
        dpi: Option<u32>,

        /// Figure width in inches
        #[arg(long)]
        width: Option<f64>,

        /// Figure height in inches
        #[arg(long)]
        height: Option<f64>,
    },

    /// Transform, then render the result
    Pipeline {
        /// Input estimate table
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Directory for the table and the image
        #[arg(short, long, env = "QPA_OUTPUT_DIR")]
        output_dir: Option<PathBuf>,

        /// Speedup factor
        #[arg(short, long)]
        factor: Option<f64>,

        /// Title prefix
        #[arg(short, long)]
        title: Option<String>,

        /// Image resolution
        #[arg(long)]
        dpi: Option<u32>,
    },

    /// List transformed tables in the output directory
    List {
        /// Directory to scan
        #[arg(short, long, env = "QPA_OUTPUT_DIR")]
        output_dir: Option<PathBuf>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let mut config = AnalyzerConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;

    match cli.command {
        Commands::Transform {
            input,
            output_dir,
            factor,
            no_save_old,
        } => {
            let args = transform_args(&config, input, output_dir, factor, no_save_old);

            // Validate args first
            validate_args(&args, &config)?;

            execute_transform(&args, &config)?;
        }

        Commands::Visualize {
            csv,
            output_dir,
            title,
            dpi,
            width,
            height,
        } => {
            if let Some(dpi) = dpi {
                config.heatmap.dpi = dpi;
            }
            if width.is_some() || height.is_some() {
                config.heatmap = config.heatmap.clone().with_size(
                    width.unwrap_or(config.heatmap.width),
                    height.unwrap_or(config.heatmap.height),
                );
            }
            config.heatmap.validate().map_err(anyhow::Error::msg)?;

            let csv = match csv {
                Some(path) => path,
                None => {
                    let dir = output_dir.clone().unwrap_or_else(|| config.output_dir.clone());
                    let mut prompt_error = None;
                    let picked = select_table(&dir, |entries| {
                        prompt_choice(entries).unwrap_or_else(|e| {
                            prompt_error = Some(e);
                            None
                        })
                    })?;
                    if let Some(e) = prompt_error {
                        return Err(e).context("Failed to read table selection");
                    }

                    match picked {
                        Some(path) => path,
                        None => {
                            info!("No table selected");
                            return Ok(());
                        }
                    }
                }
            };

            let args = VisualizeArgs {
                csv,
                output_dir,
                title_prefix: title.unwrap_or_else(|| config.title_prefix.clone()),
            };

            execute_visualize(&args, &config)?;
        }

        Commands::Pipeline {
            input,
            output_dir,
            factor,
            title,
            dpi,
        } => {
            if let Some(dpi) = dpi {
                config.heatmap.dpi = dpi;
            }
            config.heatmap.validate().map_err(anyhow::Error::msg)?;

            let args = PipelineArgs {
                transform: transform_args(&config, input, output_dir, factor, false),
                title_prefix: title.unwrap_or_else(|| config.title_prefix.clone()),
            };

            validate_args(&args.transform, &config)?;

            let output = execute_pipeline(&args, &config)?;
            info!("✓ Table: {}", output.table_path.display());
            info!("✓ Image: {}", output.image_path.display());
        }

        Commands::List { output_dir, json } => {
            let dir = output_dir.unwrap_or_else(|| config.output_dir.clone());
            let entries = list_tables(&dir)?;

            if json {
                println!("{}", entries_to_json(&entries)?);
            } else {
                print_entries(&entries);
            }
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

/// Merge CLI flags over config defaults
///
/// **Private** - shared by transform and pipeline
fn transform_args(
    config: &AnalyzerConfig,
    input: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    factor: Option<f64>,
    no_save_old: bool,
) -> TransformArgs {
    let defaults = TransformArgs::from_config(config);

    TransformArgs {
        input: input.unwrap_or(defaults.input),
        output_dir: output_dir.unwrap_or(defaults.output_dir),
        factor: factor.unwrap_or(defaults.factor),
        save_original: defaults.save_original && !no_save_old,
    }
}
