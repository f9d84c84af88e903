use clap::{Parser, ValueEnum};
use scrub_core::OutputFormat;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "scrub")]
#[command(about = "Replace hardware-identity values in plist configs with a placeholder", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Plist file to redact
    #[arg(short, long, default_value = "config.plist")]
    pub file: PathBuf,

    /// Directory of plist files to redact (takes precedence over --file)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Print debug logs and full error details
    #[arg(short, long)]
    pub verbose: bool,

    /// Write outputs into this directory instead of next to each input
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Show what would be redacted without writing anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Output encoding (default from config: xml)
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Config file to use instead of the default location
    #[arg(long, env = "SCRUB_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Xml,
    Binary,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Xml => OutputFormat::Xml,
            FormatArg::Binary => OutputFormat::Binary,
        }
    }
}
