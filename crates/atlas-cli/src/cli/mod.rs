use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `atlas` binary.
#[derive(Debug, Parser)]
#[command(name = "atlas", version, about = "Atlas - AI tool catalog routes and favorites")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw (defaults to `general.default_format`)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Table colors: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding favorites (overrides `storage.data_dir`)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,
}

impl Cli {
    /// Resolve global flags, falling back to configured defaults.
    #[must_use]
    pub fn global_flags(&self, config: &atlas_config::AtlasConfig) -> GlobalFlags {
        GlobalFlags {
            format: self
                .format
                .unwrap_or_else(|| config.general.default_format.into()),
            color: self.color,
            quiet: self.quiet,
            data_dir: self.data_dir.clone(),
        }
    }
}
