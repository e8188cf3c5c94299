//! Detective Quest - Main entrypoint.
//!
//! This is the main entry point for the Detective Quest console game.
//! It initializes the logging system, loads configuration, and plays one game
//! on standard input and output.

use clap::{Parser, Subcommand};
use detective_quest_lib::config::{ConfigLoader, DetectiveConfig, LogConfig};
use detective_quest_lib::engine::Session;
use detective_quest_lib::error::{
    report_error, set_error_reporter, DetectiveError, DetectiveResult, ErrorContext,
    TracingErrorReporter,
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing::info;

/// Command line arguments for Detective Quest.
#[derive(Parser, Debug)]
#[clap(name = "Detective Quest", version, author, about)]
struct Args {
    /// Path to a TOML or JSON configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Override the configured log level (trace, debug, info, warn, error)
    #[clap(short, long, value_parser)]
    log_level: Option<String>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Play one game (default)
    Play,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file (.toml or .json)
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// Logs go to standard error so they never interleave with the game on
/// standard output.
fn init_logging(log: &LogConfig) -> DetectiveResult<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&log.level))
        .with_writer(io::stderr)
        .with_line_number(log.source_location)
        .with_file(log.source_location)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber).map_err(|e| {
        DetectiveError::Custom(format!("Failed to set global tracing subscriber: {e}"))
    })
}

/// Loads the configuration, applying the command line log level override.
fn load_config(args: &Args) -> DetectiveResult<DetectiveConfig> {
    let mut config = ConfigLoader::new(args.config.as_deref()).load()?;
    if let Some(level) = &args.log_level {
        config.log.level = level.to_lowercase();
        detective_quest_lib::config::Validate::validate(&config.log)?;
    }
    Ok(config)
}

fn run(args: Args) -> DetectiveResult<()> {
    match args.command.as_ref().unwrap_or(&Command::Play) {
        Command::Play => {
            let config = load_config(&args)?;
            init_logging(&config.log)?;
            info!(suspects = config.case.suspects.len(), "Starting game");

            let stdin = io::stdin();
            let mut stdout = io::stdout().lock();

            let mut session = Session::new(config.case);
            let summary = session.play(stdin.lock(), &mut stdout)?;
            let released = session.end();
            info!(
                stop_reason = ?summary.exploration.stop_reason,
                released = released.total(),
                "Game finished"
            );

            writeln!(stdout, "\nVocê saiu da mansão. O jogo terminou.")?;
            stdout.flush()?;
            Ok(())
        }
        Command::Validate => {
            let config = load_config(&args)?;
            init_logging(&config.log)?;
            info!("Configuration validated successfully");
            println!("Configuration is valid");
            Ok(())
        }
        Command::GenConfig { output } => {
            init_logging(&LogConfig::default())?;

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }

            let rendered = ConfigLoader::render_default(output)?;
            std::fs::write(output, rendered)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}

/// Main entry point for the application.
fn main() {
    // Set up error reporter
    set_error_reporter(Arc::new(TracingErrorReporter));

    let args = Args::parse();
    let component = match &args.command {
        Some(Command::Validate) => "validate",
        Some(Command::GenConfig { .. }) => "gen-config",
        _ => "play",
    };

    if let Err(error) = run(args) {
        // Failures before logging was configured still need a subscriber
        let _ = init_logging(&LogConfig::default());
        report_error(ErrorContext::new(error, component));
        process::exit(1);
    }
}
