//! Pathsort CLI - order an edge file into a single path

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

use pathsort::error::{FixSuggestion, PathsortError};
use pathsort::{render, EdgeDocument, EmptyInput, OutputFormat, PathOrderer, PathsortConfig};

#[derive(Parser)]
#[command(name = "pathsort")]
#[command(about = "Reconstruct a single ordered path from an unordered set of edges")]
#[command(version)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sort an edge file and print the path
    Sort {
        /// Path to a YAML or JSON edge file
        file: PathBuf,

        /// Output format (overrides config and PATHSORT_FORMAT)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Treat an empty edge list as an empty path instead of an error
        #[arg(long)]
        allow_empty: bool,
    },

    /// Check that an edge file forms a single path
    Validate {
        /// Path to a YAML or JSON edge file
        file: PathBuf,

        /// Treat an empty edge list as valid
        #[arg(long)]
        allow_empty: bool,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration (file + environment)
    Show,
    /// Print the config file location
    Path,
}

fn main() {
    // Load .env file (ignore if not present)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Sort {
            file,
            format,
            allow_empty,
        } => sort_file(&file, format, allow_empty),
        Commands::Validate { file, allow_empty } => validate_file(&file, allow_empty),
        Commands::Config { action } => handle_config_command(action),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        if let Some(suggestion) = e.fix_suggestion() {
            eprintln!("  {} {}", "Fix:".yellow(), suggestion);
        }
        std::process::exit(1);
    }
}

/// Effective config: file, then env, then the --allow-empty flag
fn load_config(allow_empty: bool) -> Result<PathsortConfig, PathsortError> {
    let mut config = PathsortConfig::load()?.with_env();
    if allow_empty {
        config.sort.empty_input = EmptyInput::Allow;
    }
    Ok(config)
}

fn load_document(file: &Path) -> Result<EdgeDocument, PathsortError> {
    let document = EdgeDocument::from_path(file)?;
    document.validate()?;
    Ok(document)
}

#[instrument(skip_all, fields(file = %file.display()))]
fn sort_file(
    file: &Path,
    format_override: Option<OutputFormat>,
    allow_empty: bool,
) -> Result<(), PathsortError> {
    let config = load_config(allow_empty)?;
    let format = format_override.unwrap_or(config.output.format);
    let document = load_document(file)?;

    let orderer = PathOrderer::with_options(config.sort_options());
    let path = orderer.sort(&document.edges)?;
    info!(edges = path.len(), ?format, "sorted path");

    let rendered = render(&path, format)?;
    if format == OutputFormat::Yaml {
        // serde_yaml output already ends with a newline
        print!("{}", rendered);
    } else if !rendered.is_empty() {
        println!("{}", rendered);
    }
    Ok(())
}

#[instrument(skip_all, fields(file = %file.display()))]
fn validate_file(file: &Path, allow_empty: bool) -> Result<(), PathsortError> {
    let config = load_config(allow_empty)?;
    let document = load_document(file)?;

    let orderer = PathOrderer::with_options(config.sort_options());
    let path = orderer.sort(&document.edges)?;
    info!(edges = path.len(), "path is valid");

    println!("{} '{}' forms a single path", "✓".green(), file.display());
    println!("  Edges: {}", path.len());
    if let (Some(first), Some(last)) = (path.first(), path.last()) {
        println!("  Source: {}", first.from());
        println!("  Sink: {}", last.to());
    }
    Ok(())
}

fn handle_config_command(action: ConfigAction) -> Result<(), PathsortError> {
    match action {
        ConfigAction::Show => {
            let config = load_config(false)?;
            let content =
                toml::to_string_pretty(&config).map_err(|e| PathsortError::Serialize {
                    details: e.to_string(),
                })?;
            print!("{}", content);
        }
        ConfigAction::Path => {
            println!("{}", PathsortConfig::config_path().display());
        }
    }
    Ok(())
}
