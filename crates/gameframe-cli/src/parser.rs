//! Main CLI parser.
//!
//! Options come first; the first positional argument starts the launched
//! command and everything after it is passed through untouched.

use std::path::PathBuf;

use clap::Parser;
use gameframe_core::{DEFAULT_ISOLATION_SCRIPT, DEFAULT_PROBE_TIMEOUT_SECS, DEFAULT_SHELL};

/// Usage line shown when no command is given.
pub const USAGE: &str = "Usage: gameframe [OPTIONS] <command> [args...]";

/// Example shown under the usage line.
pub const USAGE_EXAMPLE: &str = "Example: gameframe wine supertuxkart.exe";

/// Command-line interface for the gameframe launcher.
#[derive(Debug, Parser)]
#[command(name = "gameframe")]
#[command(about = "Launch games in an isolated environment tuned for the host GPU")]
#[command(version)]
#[command(override_usage = "gameframe [OPTIONS] <command> [args...]")]
pub struct Cli {
    /// Isolation entry point to run the command through
    #[arg(
        long = "isolate-script",
        env = "GAMEFRAME_ISOLATE_SCRIPT",
        value_name = "PATH",
        default_value = DEFAULT_ISOLATION_SCRIPT
    )]
    pub isolate_script: PathBuf,

    /// Shell used to run the isolation entry point
    #[arg(long, env = "GAMEFRAME_SHELL", default_value = DEFAULT_SHELL)]
    pub shell: String,

    /// JSON profile file layered over the built-in profiles
    #[arg(long, env = "GAMEFRAME_PROFILES", value_name = "PATH")]
    pub profiles: Option<PathBuf>,

    /// Timeout for each hardware probe, in seconds
    #[arg(
        long = "probe-timeout",
        env = "GAMEFRAME_PROBE_TIMEOUT",
        value_name = "SECS",
        default_value_t = DEFAULT_PROBE_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub probe_timeout: u64,

    /// Print the environment and invocation instead of launching
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Join the command with plain spaces, without quoting
    #[arg(long = "raw-join")]
    pub raw_join: bool,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Command to launch, followed by its arguments
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,
}
