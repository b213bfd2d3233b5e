//! rembed CLI: compiles resource files into C++ headers.
//!
//! Provides `rembed embed` to (re)generate headers for changed resources and
//! `rembed status` to report which resources are stale without writing.

#![warn(missing_docs)]

mod embed;
mod settings;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

/// rembed, a build-time resource embedder.
#[derive(Parser, Debug)]
#[command(name = "rembed", version, about = "Embed binary resources as C++ headers")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose (debug-level) output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a custom `rembed.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Regenerate headers for new or changed resources.
    Embed(EmbedArgs),
    /// List resources and whether the next `embed` would regenerate them.
    Status(EmbedArgs),
}

/// Arguments shared by `rembed embed` and `rembed status`.
///
/// Anything not given here falls back to `rembed.toml`.
#[derive(Parser, Debug)]
pub struct EmbedArgs {
    /// Build root; embedded paths are recorded relative to it.
    #[arg(short, long = "working-directory")]
    pub working_directory: Option<PathBuf>,

    /// Directory receiving `EmbedResources/`.
    #[arg(short = 'o', long = "export-directory")]
    pub export_directory: Option<PathBuf>,

    /// Files or directories to embed, separated by `|` or `;`.
    #[arg(short, long)]
    pub resources: Option<String>,

    /// Output format for the run summary.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Summary output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    Text,
    /// Machine-readable JSON output on stdout.
    Json,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print verbose/debug information.
    pub verbose: bool,
    /// Optional path to a custom config file.
    pub config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.quiet, cli.verbose);

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        config: cli.config,
    };

    let result = match cli.command {
        Command::Embed(ref args) => embed::run(args, &global),
        Command::Status(ref args) => embed::status(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

/// Installs the logger. `RUST_LOG` overrides the flag-derived default.
fn init_logging(quiet: bool, verbose: bool) {
    let env = env_logger::Env::default().default_filter_or(log_filter(quiet, verbose));
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_target(false)
        .init();
}

/// Default log filter for the given verbosity flags.
fn log_filter(quiet: bool, verbose: bool) -> &'static str {
    if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_embed_default() {
        let cli = Cli::parse_from(["rembed", "embed"]);
        match cli.command {
            Command::Embed(ref args) => {
                assert!(args.working_directory.is_none());
                assert!(args.export_directory.is_none());
                assert!(args.resources.is_none());
                assert_eq!(args.format, ReportFormat::Text);
            }
            _ => panic!("expected Embed command"),
        }
    }

    #[test]
    fn parse_embed_with_args() {
        let cli = Cli::parse_from([
            "rembed",
            "embed",
            "--working-directory",
            "/project",
            "--export-directory",
            "/project/build",
            "--resources",
            "assets/icons|assets/logo.png",
        ]);
        match cli.command {
            Command::Embed(ref args) => {
                assert_eq!(
                    args.working_directory.as_deref(),
                    Some(std::path::Path::new("/project"))
                );
                assert_eq!(
                    args.export_directory.as_deref(),
                    Some(std::path::Path::new("/project/build"))
                );
                assert_eq!(
                    args.resources.as_deref(),
                    Some("assets/icons|assets/logo.png")
                );
            }
            _ => panic!("expected Embed command"),
        }
    }

    #[test]
    fn parse_short_flags() {
        let cli = Cli::parse_from(["rembed", "embed", "-w", "p", "-o", "out", "-r", "a.png"]);
        match cli.command {
            Command::Embed(ref args) => {
                assert!(args.working_directory.is_some());
                assert!(args.export_directory.is_some());
                assert_eq!(args.resources.as_deref(), Some("a.png"));
            }
            _ => panic!("expected Embed command"),
        }
    }

    #[test]
    fn parse_status_json() {
        let cli = Cli::parse_from(["rembed", "status", "--format", "json"]);
        match cli.command {
            Command::Status(ref args) => assert_eq!(args.format, ReportFormat::Json),
            _ => panic!("expected Status command"),
        }
    }

    #[test]
    fn parse_global_flags() {
        let cli = Cli::parse_from(["rembed", "--quiet", "--config", "ci/rembed.toml", "embed"]);
        assert!(cli.quiet);
        assert!(!cli.verbose);
        assert_eq!(
            cli.config.as_deref(),
            Some(std::path::Path::new("ci/rembed.toml"))
        );
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["rembed", "status", "--verbose"]);
        assert!(cli.verbose);
    }

    #[test]
    fn log_filter_levels() {
        assert_eq!(log_filter(true, false), "error");
        assert_eq!(log_filter(true, true), "error");
        assert_eq!(log_filter(false, true), "debug");
        assert_eq!(log_filter(false, false), "warn");
    }
}
