//! CLI command definitions for the `sform` binary.
//!
//! Uses clap derive macros for argument parsing. Every command takes an
//! optional script reference: a path to a `.rhai` file or inline script
//! text. Without one, `default_script` from `config.toml` is used.

pub mod form;
pub mod replay;
pub mod run;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Turn interactive scripts into forms.
#[derive(Parser)]
#[command(name = "sform", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export spans to stdout via OpenTelemetry.
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the form a script implies.
    Form {
        /// Script path or inline script text.
        script: Option<String>,

        /// Output format.
        #[arg(long, value_enum, default_value_t = FormFormat::Text)]
        format: FormFormat,
    },

    /// Fill in a script's form in the terminal, then run it.
    Run {
        /// Script path or inline script text.
        script: Option<String>,
    },

    /// Run a script with pre-collected answers.
    Replay {
        /// Script path or inline script text.
        script: Option<String>,

        /// Answer for the next input request (repeatable, in order).
        #[arg(short, long = "answer", value_name = "ANSWER")]
        answers: Vec<String>,

        /// JSON file holding an array of answers.
        #[arg(long, value_name = "FILE", conflicts_with = "answers")]
        answers_file: Option<PathBuf>,
    },

    /// Serve a script as a web form.
    Serve {
        /// Script path or inline script text.
        script: Option<String>,

        /// Port to listen on (default from config, else 5000).
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (default from config, else 127.0.0.1).
        #[arg(long)]
        host: Option<String>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

/// How `sform form` prints the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormFormat {
    Text,
    Html,
    Json,
}
