//! tsconfig-alias CLI
//!
//! Entry point for the `tsconfig-alias` command-line tool.

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;
use tsconfig_alias::commands::{self, MatchOutput, ResolveOutput};
use tsconfig_alias::{EffectiveOptions, OptionsLayer, PluginOptions};

#[derive(Parser)]
#[command(name = "tsconfig-alias")]
#[command(about = "Translate tsconfig path mappings into resolver aliases", version)]
struct Cli {
    /// Project root configuration names are resolved against (default: cwd)
    #[arg(long, short = 'r', global = true)]
    root: Option<PathBuf>,

    /// Configuration file to consult; repeat to consult several, in order
    #[arg(long = "config-name", short = 'c', global = true)]
    config_names: Vec<String>,

    /// Path to options file (default: ./.tsconfig-alias.toml)
    #[arg(long, global = true)]
    options: Option<PathBuf>,

    /// Log skipped sources and per-source contributions to stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved alias list
    Resolve {
        /// Output in human-readable format instead of JSON
        #[arg(long)]
        human: bool,
    },

    /// Merge resolved aliases ahead of an existing alias file (JSON list or mapping)
    Merge {
        /// Existing alias configuration
        #[arg(long, short = 'e')]
        existing: PathBuf,
    },

    /// Run the plugin config hook on a host configuration (JSON) and print it
    Apply {
        /// Host configuration file
        #[arg(long)]
        host_config: PathBuf,
    },

    /// Show which alias rewrites a specifier
    Match {
        /// Import specifier to rewrite (e.g. "@/components/Button")
        specifier: String,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = match load_options(&cli) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Error loading options: {}", e);
            process::exit(1);
        }
    };

    match cli.command {
        Commands::Resolve { human } => run_resolve(&options, human),
        Commands::Merge { existing } => run_merge(&options, existing),
        Commands::Apply { host_config } => run_apply(options, host_config),
        Commands::Match { specifier, json } => run_match(&options, &specifier, json),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_options(cli: &Cli) -> Result<PluginOptions, String> {
    let overrides = OptionsLayer {
        root: cli.root.clone(),
        config_names: (!cli.config_names.is_empty()).then(|| cli.config_names.clone()),
    };

    let effective = match cli.options {
        Some(ref path) => {
            if !path.exists() {
                return Err(format!("options file not found: {}", path.display()));
            }
            EffectiveOptions::build(Some(path.as_path()), Some(overrides))
        }
        None => {
            let cwd = std::env::current_dir().map_err(|e| e.to_string())?;
            EffectiveOptions::discover(&cwd, Some(overrides))
        }
    };

    effective.map(|e| e.options).map_err(|e| e.to_string())
}

fn run_resolve(options: &PluginOptions, human: bool) {
    let output = ResolveOutput::run(options);

    if human {
        println!("{}", output.to_human());
    } else {
        print_serialized(output.to_json());
    }
}

fn run_merge(options: &PluginOptions, existing_path: PathBuf) {
    match commands::merge_with_file(options, &existing_path) {
        Ok(merged) => print_json(&merged),
        Err(e) => {
            eprintln!("Error reading existing aliases: {}", e);
            process::exit(1);
        }
    }
}

fn run_apply(options: PluginOptions, host_config_path: PathBuf) {
    match commands::apply_to_file(options, &host_config_path) {
        Ok(config) => print_json(&config),
        Err(e) => {
            eprintln!("Error reading host config: {}", e);
            process::exit(1);
        }
    }
}

fn run_match(options: &PluginOptions, specifier: &str, json_output: bool) {
    let output = MatchOutput::run(options, specifier);

    if json_output {
        print_serialized(output.to_json());
    } else {
        println!("{}", output.to_human());
    }

    if !output.matched {
        process::exit(1);
    }
}

fn print_json<T: Serialize>(value: &T) {
    print_serialized(serde_json::to_string_pretty(value));
}

fn print_serialized(json: Result<String, serde_json::Error>) {
    match json {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing output: {}", e);
            process::exit(1);
        }
    }
}
