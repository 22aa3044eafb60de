//! eidon CLI
//!
//! Cognitive function analysis from the command line.
//!
//! # Commands
//!
//! - `analyze --type INFJ`: role stacks (ego, subconscious, unconscious,
//!   superego) and the type each stack maps back to
//! - `infer --stack Ni Fe Ti Se`: best-matching type for a stack
//! - `relation INFJ ESTJ`: Socionics intertype relation
//!
//! Exit code 1 on validation errors.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

use eidon::report::{write_analysis, write_inference, write_json, write_relation, RelationReport};
use eidon::{analyze, infer_type_str, relation_str, AnalysisConfig, FunctionRole, OutputFormat, TypeCode};

/// MBTI Cognitive Function Analysis
#[derive(Parser)]
#[command(name = "eidon")]
#[command(version)]
#[command(about = "MBTI cognitive function analysis and Socionics intertype relations")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze MBTI cognitive functions
    Analyze {
        /// The MBTI type (e.g., INFJ, INTJ)
        #[arg(long = "type")]
        type_code: String,

        /// Functions to output
        #[arg(long, num_args = 1.., value_parser = ["ego", "subconscious", "unconscious", "superego"])]
        functions: Option<Vec<String>>,

        /// Show Socionics types in analysis output
        #[arg(long)]
        show_socionics: bool,

        /// Compare to another MBTI type for Socionics relation
        #[arg(long)]
        compare_to: Option<String>,

        /// Load analysis settings from a JSON file (flags override it)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Infer MBTI type from cognitive function stack
    Infer {
        /// Four-function cognitive stack (e.g., Ni Fe Ti Se)
        #[arg(long, num_args = 4, required = true)]
        stack: Vec<String>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Socionics intertype relation of A towards B
    Relation {
        a: String,
        b: String,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = run(cli.command, &mut out) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(command: Commands, out: &mut dyn Write) -> eidon::Result<()> {
    match command {
        Commands::Analyze { type_code, functions, show_socionics, compare_to, config, json } => {
            let code = TypeCode::parse(&type_code)?;

            let mut settings = match config {
                Some(path) => AnalysisConfig::from_json_file(path)?,
                None => AnalysisConfig::default(),
            };
            if let Some(names) = functions {
                let roles = names
                    .iter()
                    .map(|name| name.parse::<FunctionRole>())
                    .collect::<eidon::Result<Vec<_>>>()?;
                settings = settings.with_roles(roles);
            }
            if show_socionics {
                let compare_to = compare_to.or(settings.compare_to.take());
                settings = settings.with_socionics(compare_to);
            } else if compare_to.is_some() {
                settings.compare_to = compare_to;
            }
            if json {
                settings = settings.with_format(OutputFormat::Json);
            }
            debug!(?settings, "effective analysis settings");

            let analysis = analyze(&code, &settings);
            match settings.format {
                OutputFormat::Json => write_json(&analysis, out)?,
                OutputFormat::Text => write_analysis(&analysis, out)?,
            }
        }
        Commands::Infer { stack, json } => {
            let inference = infer_type_str(stack.as_slice())?;
            if json {
                write_json(&inference, out)?;
            } else {
                write_inference(&inference, out)?;
            }
        }
        Commands::Relation { a, b, json } => {
            let relation = relation_str(&a, &b);
            if json {
                write_json(&RelationReport::new(&a, &b, relation), out)?;
            } else {
                write_relation(&a, &b, relation, out)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}
