//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use passcheck::config::Overrides;
use passcheck::output::OutputMode;

/// passcheck - Password composition checks
#[derive(Parser, Debug)]
#[command(
    name = "passcheck",
    version,
    about = "Password composition checks over HTTP",
    long_about = "Check passwords against fixed composition rules.\n\n\
                  Passwords need at least 8 characters, an uppercase letter,\n\
                  a digit and a special symbol."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the validation endpoint over HTTP
    Serve {
        /// Config file (defaults to ./passcheck.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to bind
        #[arg(short, long)]
        port: Option<u16>,

        /// Number of worker threads
        #[arg(short, long)]
        workers: Option<usize>,
    },

    /// Check a single password (reads one line from stdin if omitted)
    Check {
        /// Password to check
        password: Option<String>,
    },

    /// Show version
    Version,
}

/// Parse arguments and run the selected command
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Serve {
            config,
            host,
            port,
            workers,
        }) => commands::serve(
            config.as_deref(),
            Overrides {
                host,
                port,
                workers,
            },
            output_mode,
        ),
        Some(Command::Check { password }) => commands::check(password, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": passcheck::VERSION
                    })
                );
            } else {
                println!("passcheck v{}", passcheck::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": passcheck::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("passcheck v{}", passcheck::VERSION);
                println!("\nRun 'passcheck --help' for usage");
                println!("Run 'passcheck serve' to start the endpoint");
            }
            Ok(())
        },
    }
}
