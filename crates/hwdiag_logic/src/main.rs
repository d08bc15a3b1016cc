//! hwdiag - Hardware Diagnosis CLI
//!
//! Select observed symptoms from the knowledge base and print the most likely
//! cause.
//!
//! ## Usage
//!
//! Without `--knowledge-base` or `HWDIAG_KNOWLEDGE_BASE`, the hardware knowledge
//! base bundled at `crates/hwdiag_logic/data/knowledge_base.json` is used.
//!
//! Exits 0 on any verdict, 2 on a selection or configuration error.
//!
//! ```bash
//! # List the symptoms the knowledge base knows about
//! hwdiag --list
//!
//! # Diagnose by symptom number or exact label
//! hwdiag 1 "The screen is black"
//!
//! # Use another knowledge base
//! HWDIAG_KNOWLEDGE_BASE=/etc/hwdiag/kb.json hwdiag 2 5
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use hwdiag_logic::selection::render_conditions;
use hwdiag_logic::{loader, render_result, select_facts, Config, Error, Result};

/// Hardware diagnosis expert system
#[derive(Parser, Debug)]
#[command(name = "hwdiag")]
#[command(version)]
#[command(about = "Match observed hardware symptoms against diagnosis rules", long_about = None)]
struct Args {
    /// Knowledge-base JSON file (overrides HWDIAG_KNOWLEDGE_BASE)
    #[arg(short, long)]
    knowledge_base: Option<PathBuf>,

    /// List the selectable symptoms and exit
    #[arg(short, long)]
    list: bool,

    /// Print the verdict as JSON
    #[arg(long)]
    json: bool,

    /// Disable the built-in mutually-exclusive symptom pairs
    #[arg(long)]
    no_builtin_exclusions: bool,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Observed symptoms, by exact label or 1-based number from --list
    selections: Vec<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut config = Config::from_env();
    if let Some(path) = args.knowledge_base.clone() {
        config.knowledge_base = path;
    }
    if args.no_builtin_exclusions {
        config.builtin_exclusions = false;
    }
    match args.verbose {
        0 => {}
        1 => config.log_level = "debug".to_string(),
        _ => config.log_level = "trace".to_string(),
    }

    if let Err(e) = config.validate() {
        eprintln!("{}", e);
        return ExitCode::from(2);
    }

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ (Error::EmptySelection | Error::UnknownCondition(_))) => {
            eprintln!("{}", e);
            ExitCode::from(2)
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args, config: &Config) -> Result<()> {
    let kb = loader::load(&config.knowledge_base);

    if args.list {
        println!("{}", render_conditions(&kb));
        return Ok(());
    }

    let facts = select_facts(&kb, &args.selections)?;
    let verdict = config.matcher().infer(&kb, &facts);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&verdict)?);
    } else {
        println!("{}", render_result(&verdict));
    }
    Ok(())
}
