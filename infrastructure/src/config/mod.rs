//! Configuration file loading for madori
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `MADORI_`-prefixed environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./madori.toml` or `./.madori.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/madori/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileImageConfig, FileOutputConfig, FileOutputFormat,
    FileStorageConfig, ImageProvider,
};
pub use loader::ConfigLoader;
