//! oas-explorer: terminal explorer for OpenAPI change reports.

#![allow(clippy::needless_pass_by_value)]

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use oas_explorer::{
    cli,
    config::{OutputConfig, ViewConfig},
    reports::OutputFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "oas-explorer")]
#[command(version)]
#[command(about = "Explore OpenAPI change reports in the terminal", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Clean run
    1  Breaking changes in the latest revision (--fail-on-breaking)
    3  Error occurred

EXAMPLES:
    # Interactive exploration
    oas-explorer view changes.json

    # CI/CD pipeline gate
    oas-explorer view changes.json -o summary --fail-on-breaking

    # Export JSON for processing
    oas-explorer view changes.json -o json > digest.json")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `view` subcommand
#[derive(Parser)]
struct ViewArgs {
    /// Path to the change report JSON document
    report: PathBuf,

    /// Output format (auto detects TTY: tui if interactive, summary otherwise)
    #[arg(short, long, default_value = "auto")]
    output: OutputFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Exit with code 1 if the latest revision has breaking changes
    #[arg(long)]
    fail_on_breaking: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Explore a change report (TUI, summary, or JSON)
    View(ViewArgs),

    /// Print a compact summary of a change report
    Summary {
        /// Path to the change report JSON document
        report: PathBuf,

        /// Output file path (stdout if not specified)
        #[arg(short = 'O', long)]
        output_file: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize logging
    let log_level = if args.verbose {
        "debug"
    } else if args.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match args.command {
        Commands::View(view) => {
            let config = ViewConfig {
                report_path: view.report,
                output: OutputConfig {
                    format: view.output,
                    file: view.output_file,
                    no_color: args.no_color,
                },
                fail_on_breaking: view.fail_on_breaking,
            };
            let exit_code = cli::run_view(config).unwrap_or_else(|e| {
                eprintln!("Error: {e:#}");
                cli::exit_codes::ERROR
            });
            if exit_code != cli::exit_codes::SUCCESS {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Commands::Summary {
            report,
            output_file,
        } => {
            let output = OutputConfig {
                format: OutputFormat::Summary,
                file: output_file,
                no_color: args.no_color,
            };
            let exit_code = cli::run_summary(&report, &output).unwrap_or_else(|e| {
                eprintln!("Error: {e:#}");
                cli::exit_codes::ERROR
            });
            if exit_code != cli::exit_codes::SUCCESS {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "oas-explorer", &mut io::stdout());
            Ok(())
        }
    }
}
