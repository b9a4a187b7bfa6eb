use clap::ValueEnum;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Raw,
}

impl From<atlas_config::OutputFormat> for OutputFormat {
    fn from(format: atlas_config::OutputFormat) -> Self {
        match format {
            atlas_config::OutputFormat::Json => Self::Json,
            atlas_config::OutputFormat::Table => Self::Table,
            atlas_config::OutputFormat::Raw => Self::Raw,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Global flags after config defaults have been applied.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub color: ColorMode,
    pub quiet: bool,
    pub data_dir: Option<String>,
}
