use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "fortuna",
    version,
    about = "A terminal dashboard for the Fortuna community funding DAO",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Site base used to build project share links.
    #[arg(long, value_name = "URL")]
    pub share_base_url: Option<String>,

    /// Show keybinding hints in the footer bar.
    #[arg(long)]
    pub show_hints: Option<bool>,
}
