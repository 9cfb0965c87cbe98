//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for the result page
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Sectioned report
    Text,
    /// JSON output
    Json,
}

impl From<OutputFormat> for madori_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => madori_domain::OutputFormat::Text,
            OutputFormat::Json => madori_domain::OutputFormat::Json,
        }
    }
}

/// Image provider selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProviderArg {
    /// Hugging Face Inference API (needs HUGGINGFACE_API_KEY)
    Huggingface,
    /// Pollinations (no key)
    Pollinations,
}

impl ProviderArg {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderArg::Huggingface => "huggingface",
            ProviderArg::Pollinations => "pollinations",
        }
    }
}

/// Image to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SlotArg {
    /// Exterior view
    Exterior,
    /// Floor plan
    FloorPlan,
}

impl From<SlotArg> for madori_domain::ImageSlot {
    fn from(slot: SlotArg) -> Self {
        match slot {
            SlotArg::Exterior => madori_domain::ImageSlot::Exterior,
            SlotArg::FloorPlan => madori_domain::ImageSlot::FloorPlan,
        }
    }
}

/// CLI arguments for madori
#[derive(Parser, Debug)]
#[command(name = "madori")]
#[command(author, version, about = "House-planning questionnaire with layout, budget and vendor suggestions")]
#[command(long_about = r#"
madori asks eight questions about your household and wishes, then suggests a
layout concept, a floor-area band, a budget advisory and a shortlist of house
makers. It can also generate an exterior and a floor-plan image.

Configuration files are loaded from (in priority order):
1. MADORI_* environment variables
2. --config <path>     Explicit config file
3. ./madori.toml       Project-level config
4. ~/.config/madori/config.toml   Global config

Example:
  madori quiz
  madori result --format json
  madori images --provider pollinations
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Directory holding the saved answers
    #[arg(long, value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Also write logs to daily files in this directory
    #[arg(long, value_name = "DIR", global = true)]
    pub log_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Take the questionnaire and save the answers
    Quiz,

    /// Show the recommendation for the saved answers
    Result {
        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Generate the exterior and floor-plan images for the saved answers
    Images {
        /// Image provider (overrides config)
        #[arg(short, long, value_enum)]
        provider: Option<ProviderArg>,

        /// Generate only this image
        #[arg(long, value_enum)]
        only: Option<SlotArg>,

        /// Suppress progress indicators
        #[arg(short, long)]
        quiet: bool,
    },

    /// Show configuration file locations and the effective settings
    ShowConfig,
}
