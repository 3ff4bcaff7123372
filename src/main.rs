//! CLI entry point and command dispatch for speclint.

mod cmd;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;

use cmd::lint::OutputFormat;

#[derive(Parser)]
#[command(name = "speclint")]
#[command(version)]
#[command(about = "Lint markdown spec documents against formatting rules", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lint a spec document
    ///
    /// Checks required sections, the SPEC-ID identifier, scope and approval
    /// wording, and file targets. Exits 0 on pass, 1 on failure, 2 when the
    /// document cannot be read.
    Lint {
        /// Path to the spec document
        #[arg(default_value = speclint::DEFAULT_SPEC_PATH, value_name = "FILE")]
        file: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Generate shell completion script
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Show version information
    Version,
}

fn main() -> Result<()> {
    // Piped output gets plain text
    if !atty::is(atty::Stream::Stdout) {
        colored::control::set_override(false);
    }

    let cli = Cli::parse();

    match cli.command {
        Commands::Lint { file, format } => cmd::lint::cmd_lint(&file, format),
        Commands::Completion { shell } => cmd_completion(shell),
        Commands::Version => cmd_version(),
    }
}

/// Generate shell completion script
fn cmd_completion(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "speclint", &mut io::stdout());
    Ok(())
}

/// Show version and build information
fn cmd_version() -> Result<()> {
    const GIT_SHA: &str = env!("GIT_SHA");
    println!("speclint {}", env!("CARGO_PKG_VERSION"));
    println!("commit: {}", GIT_SHA);
    Ok(())
}
