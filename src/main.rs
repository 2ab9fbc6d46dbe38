use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use scorecard::rendering::Layout;
use scorecard::style::all_style_keys;
use scorecard::{samples, MatchState, RenderRequest, RendererConfig, ScorecardRenderer};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "scorecard", version, about = "Render cricket match state into SVG scorecards")]
struct Cli {
    /// JSON renderer config (partial; missing keys use defaults)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory scorecards are written to
    #[arg(long, global = true, env = "SCORECARD_OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a match state JSON file
    Render {
        /// Match state JSON file
        #[arg(long)]
        input: PathBuf,

        /// Tournament (PSL, IPL, BPL, LPL, BBL, SA20, ILT20, INTERNATIONAL)
        #[arg(long)]
        tournament: Option<String>,

        /// Format for INTERNATIONAL (t20, odi, test)
        #[arg(long)]
        format: Option<String>,

        /// Layout (minimal, styled, detailed, innings)
        #[arg(long)]
        layout: Option<Layout>,

        /// Print the SHA-256 of the written document
        #[arg(long)]
        print_digest: bool,
    },

    /// Render the built-in sample matches
    Sample,

    /// List the registered tournament styles
    Styles,
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn load_config(cli: &Cli) -> Result<RendererConfig> {
    let mut config = match &cli.config {
        Some(path) => RendererConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => RendererConfig::default(),
    };
    if let Some(dir) = &cli.output_dir {
        config.output_dir = dir.clone();
    }
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(&cli)?;

    match cli.command {
        Commands::Render {
            input,
            tournament,
            format,
            layout,
            print_digest,
        } => {
            let raw = std::fs::read_to_string(&input)
                .with_context(|| format!("Failed to read match file {}", input.display()))?;
            let state = MatchState::from_json(&raw)
                .with_context(|| format!("Invalid match data in {}", input.display()))?;
            let request = RenderRequest {
                tournament,
                format,
                layout,
            };
            let artifact = ScorecardRenderer::new(config).generate(&state, &request)?;
            println!("{}", artifact.path.display());
            if print_digest {
                println!("sha256 {}", artifact.document.digest());
            }
        }

        Commands::Sample => {
            for (name, state, request) in samples::all() {
                // Samples are written within the same second; the prefix keeps them apart
                let sample_config = RendererConfig {
                    file_prefix: format!("{}_{}", config.file_prefix, name),
                    ..config.clone()
                };
                let artifact = ScorecardRenderer::new(sample_config)
                    .generate(&state, &request)
                    .with_context(|| format!("Failed to render sample {}", name))?;
                println!("{:<14} {}", name, artifact.path.display());
            }
        }

        Commands::Styles => {
            for key in all_style_keys() {
                let style = key.profile();
                println!(
                    "{:<20} {:<8} {:<8} {:<8} {}",
                    key.to_string(),
                    style.background_color,
                    style.text_color,
                    style.accent(),
                    style.title
                );
            }
        }
    }

    Ok(())
}
