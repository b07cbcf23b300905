use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "bsd-ifgen")]
#[command(about = "Render and check OpenBSD hostname.if files from a declarative document")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Generate hostname.if content for the interfaces of a document.
    Render(RenderArgs),
    /// Compare installed hostname.if files with generated content.
    Check(CheckArgs),
    /// Render carp(4) settings from the carp entries of a document.
    Carp(CarpArgs),
}

#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Interface document (TOML, or JSON with a .json extension).
    pub file: PathBuf,
    /// Only render this interface.
    #[arg(long)]
    pub interface: Option<String>,
    /// Write hostname.<if> files into this directory instead of stdout.
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
    /// Platform release to format for (defaults to `uname -r`).
    #[arg(long)]
    pub kernel_version: Option<String>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Interface document (TOML, or JSON with a .json extension).
    pub file: PathBuf,
    /// Directory holding the installed hostname.<if> files.
    #[arg(long, default_value = "/etc")]
    pub dir: PathBuf,
    /// Only check this interface.
    #[arg(long)]
    pub interface: Option<String>,
    /// Platform release to format for (defaults to `uname -r`).
    #[arg(long)]
    pub kernel_version: Option<String>,
    /// Print only per-file status lines, not the line diff.
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Parser, Debug)]
pub struct CarpArgs {
    /// Interface document (TOML, or JSON with a .json extension).
    pub file: PathBuf,
    /// Only render this carp interface.
    #[arg(long)]
    pub interface: Option<String>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
