//! CLI command definitions and dispatch for the `loops` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod chat;
pub mod classify;
pub mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use loops_types::chat::LanguageMode;
use loops_types::config::DetectionPolicy;

/// Loops Integrated chat assistant: relay server and terminal widget.
#[derive(Parser)]
#[command(name = "loops", version, about, long_about = None)]
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

    /// Path to loops.toml (defaults to $LOOPS_CONFIG, then the user config dir).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP relay server.
    Serve {
        /// Port to listen on (overrides server.port).
        #[arg(long, short)]
        port: Option<u16>,

        /// Host address to bind to (overrides server.host).
        #[arg(long)]
        host: Option<String>,

        /// Static site directory served as fallback (overrides server.web_dir).
        #[arg(long)]
        web_dir: Option<PathBuf>,

        /// Emit logs as JSON lines.
        #[arg(long)]
        log_json: bool,

        /// Export spans to stdout via OpenTelemetry.
        #[arg(long)]
        otel: bool,
    },

    /// Chat with a running server from the terminal.
    Chat {
        /// Server origin.
        #[arg(long, default_value = "http://127.0.0.1:3000", env = "LOOPS_SERVER")]
        server: String,

        /// Reply language: auto, en or si.
        #[arg(long, default_value = "auto")]
        lang: LanguageMode,
    },

    /// Classify text as English or Sinhala.
    Classify {
        /// Text to classify.
        text: String,

        /// Detection policy (defaults to language.policy from config).
        #[arg(long, value_enum)]
        policy: Option<PolicyArg>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

/// Command-line spelling of [`DetectionPolicy`].
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PolicyArg {
    Strict,
    Romanized,
}

impl From<PolicyArg> for DetectionPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Strict => DetectionPolicy::Strict,
            PolicyArg::Romanized => DetectionPolicy::Romanized,
        }
    }
}
