use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod commands;
mod core;
mod error;
mod models;

use commands::{check_source, convert_source, show_rules, CheckOptions, ConvertOptions};

/// PseudoPy - regex-rule pseudocode-to-Python converter
#[derive(Parser)]
#[command(name = "pseudopy")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert pseudocode to Python
    Convert {
        /// Input file (reads stdin when omitted)
        input: Option<PathBuf>,

        /// Output file (writes stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Config file (defaults to pseudopy.toml in the current directory)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Use only config-defined rules, skip the built-in table
        #[arg(long)]
        no_builtin_rules: bool,
    },

    /// Report which rule fires on each line
    Check {
        /// Input file (reads stdin when omitted)
        input: Option<PathBuf>,

        /// Config file (defaults to pseudopy.toml in the current directory)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Use only config-defined rules, skip the built-in table
        #[arg(long)]
        no_builtin_rules: bool,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the active ruleset in priority order
    Rules {
        /// Config file (defaults to pseudopy.toml in the current directory)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Use only config-defined rules, skip the built-in table
        #[arg(long)]
        no_builtin_rules: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .init();

    let project_root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let result = match cli.command {
        Commands::Convert {
            input,
            output,
            config,
            no_builtin_rules,
        } => {
            let options = ConvertOptions {
                input,
                output,
                config,
                no_builtin_rules,
            };
            convert_source(&project_root, options)
        }

        Commands::Check {
            input,
            config,
            no_builtin_rules,
            json,
        } => {
            let options = CheckOptions {
                input,
                config,
                no_builtin_rules,
                json,
            };
            check_source(&project_root, options)
        }

        Commands::Rules {
            config,
            no_builtin_rules,
        } => show_rules(&project_root, config.as_ref(), no_builtin_rules),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
