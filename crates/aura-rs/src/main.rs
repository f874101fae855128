//! Inspect and render AURA profiles from the command line.
//!
//! # Examples
//!
//! ```sh
//! # Which profile would an agent pick up?
//! aura find --dir ./workspace --agent scout
//!
//! # Check a profile by hand
//! aura validate ./workspace/AURA.yaml
//!
//! # Render the prompt block an agent would receive
//! aura prompt --dir ./workspace --compact
//!
//! # Print the JSON Schema for editor tooling
//! aura schema > aura.schema.json
//! ```

use std::path::PathBuf;
use std::process;

use aura_rs::aura_json_schema;
use aura_rs::prelude::*;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Inspect and render AURA personality profiles.
#[derive(Parser)]
#[command(name = "aura", version)]
struct Cli {
    /// Log discovery and loading at debug level (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the path of the profile that discovery selects
    Find(SearchArgs),
    /// Validate a single profile file
    Validate {
        /// Profile file to check
        file: PathBuf,
    },
    /// Render the profile as system prompt text
    Prompt {
        #[command(flatten)]
        search: SearchArgs,

        /// Pipe-joined rows instead of one bullet per field
        #[arg(long)]
        compact: bool,

        /// Leave out the SOMA block
        #[arg(long)]
        no_soma: bool,
    },
    /// Print a one-line summary and the anti-sycophancy verdict
    Summary(SearchArgs),
    /// Print the JSON Schema of a profile document
    Schema,
}

#[derive(Args)]
struct SearchArgs {
    /// Directory to search
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// Explicit profile path, relative to --dir unless absolute
    #[arg(long, env = "AURA_PROFILE")]
    profile: Option<PathBuf>,

    /// Agent id; prefers {dir}/{agent}.aura.yaml
    #[arg(long, env = "AURA_AGENT_ID")]
    agent: Option<String>,
}

impl SearchArgs {
    fn options(&self) -> SearchOptions {
        SearchOptions {
            explicit_path: self.profile.clone(),
            agent_id: self.agent.clone(),
        }
    }

    /// Load the profile, exiting on failure. `None` means no profile exists.
    fn load(&self) -> Option<AuraProfile> {
        match load_aura_from_directory(&self.dir, &self.options()) {
            LoadResult::Loaded { profile, .. } => Some(profile),
            LoadResult::NotFound => None,
            LoadResult::Failed { error, .. } => {
                eprintln!("Error: {error}");
                process::exit(1);
            }
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Find(search) => match find_aura_profile(&search.dir, &search.options()) {
            Some(path) => println!("{}", path.display()),
            None => {
                eprintln!("No AURA profile found in {}", search.dir.display());
                process::exit(1);
            }
        },
        Command::Validate { file } => match load_aura_profile(&file) {
            LoadResult::Loaded { profile, .. } => println!("ok: {}", profile.name),
            other => {
                let message = other
                    .error()
                    .unwrap_or_else(|| format!("no profile at {}", file.display()));
                eprintln!("Error: {message}");
                process::exit(1);
            }
        },
        Command::Prompt {
            search,
            compact,
            no_soma,
        } => {
            if let Some(profile) = search.load() {
                let options = PromptOptions::default()
                    .with_compact(compact)
                    .with_include_soma(!no_soma);
                print!("{}", aura_to_prompt(&profile, &options));
            }
        }
        Command::Summary(search) => {
            if let Some(profile) = search.load() {
                println!("{}", aura_one_liner(&profile));
                println!("anti-sycophant: {}", is_anti_sycophant(&profile));
            }
        }
        Command::Schema => match serde_json::to_string_pretty(&aura_json_schema()) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: failed to serialize schema: {e}");
                process::exit(1);
            }
        },
    }
}
