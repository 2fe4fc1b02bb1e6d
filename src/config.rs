// src/config.rs
use derive_builder::Builder;
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::cli::Args;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable sentences
    #[default]
    Text,
    /// Pretty-printed JSON object
    Json,
    /// One JSON object per line
    Jsonl,
}

/// Runtime settings for a single session.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub format: OutputFormat,
    #[builder(default = "LevelFilter::Warn")]
    pub log_level: LevelFilter,
    /// Print the "Please enter ..." prompts.
    #[builder(default = "true")]
    pub prompts: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            log_level: LevelFilter::Warn,
            prompts: true,
        }
    }
}

impl TryFrom<Args> for Config {
    type Error = ConfigBuilderError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        ConfigBuilder::default()
            .format(OutputFormat::from(args.format))
            .log_level(args.log_level)
            .prompts(!args.quiet)
            .build()
    }
}
