use config_rs::Config as ConfigRs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::{
    charset::{Charset, SamplingMode},
    cli::Cli,
    separator::{self, SeparatorError},
    transform::{Mangle, OutputTransformer, DEFAULT_BLOCK_SIZE},
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Source(#[from] config_rs::ConfigError),
    #[error("Separator error: {0}")]
    Separator(#[from] SeparatorError),
}

/// Run parameters as given on the command line, before normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub tracing: TracingConfig,
    #[serde(default = "default_chars")]
    pub chars: String,
    #[serde(default = "default_length")]
    pub length: usize,
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(default)]
    pub mangle: String,
    #[serde(default)]
    pub base64: bool,
    #[serde(default)]
    pub block: bool,
    #[serde(default)]
    pub keyblock: bool,
    /// PIN length, `0` when unused.
    #[serde(default)]
    pub pin: usize,
    #[serde(default = "default_blocksize")]
    pub blocksize: usize,
    #[serde(default)]
    pub unique: bool,
    #[serde(default = "default_separator")]
    pub separator: String,
    /// Custom alphabet, empty when unused.
    #[serde(default)]
    pub custom: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tracing: TracingConfig::default(),
            chars: default_chars(),
            length: default_length(),
            count: default_count(),
            mangle: String::new(),
            base64: false,
            block: false,
            keyblock: false,
            pin: 0,
            blocksize: default_blocksize(),
            unique: false,
            separator: default_separator(),
            custom: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TracingConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_chars() -> String {
    Charset::All.to_string()
}

const fn default_length() -> usize {
    20
}

const fn default_count() -> usize {
    20
}

const fn default_blocksize() -> usize {
    DEFAULT_BLOCK_SIZE
}

fn default_separator() -> String {
    "\n".to_owned()
}

fn default_log_level() -> String {
    "warn".to_owned()
}

/// Layers the command line over the defaults.
pub fn read_config(cli: &Cli) -> Result<Settings, ConfigError> {
    trace!("Reading configuration from command line");

    let settings = ConfigRs::builder()
        .set_override_option("tracing.log_level", cli.log_level.clone())?
        .set_override_option("chars", cli.chars.clone())?
        .set_override_option("length", cli.length)?
        .set_override_option("count", cli.count)?
        .set_override_option("mangle", cli.mangle.clone())?
        .set_override_option("base64", cli.base64.then_some(true))?
        .set_override_option("block", cli.block.then_some(true))?
        .set_override_option("keyblock", cli.keyblock.then_some(true))?
        .set_override_option("pin", cli.pin)?
        .set_override_option("blocksize", cli.blocksize)?
        .set_override_option("unique", cli.unique.then_some(true))?
        .set_override_option("separator", cli.separator.clone())?
        .set_override_option("custom", cli.custom.clone())?
        .build()?
        .try_deserialize()?;

    Ok(settings)
}

/// Fully resolved run parameters. Shortcuts are already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub mode: SamplingMode,
    pub length: usize,
    pub count: usize,
    pub transform: OutputTransformer,
    pub unique: bool,
    pub separator: Vec<u8>,
}

impl Config {
    /// Distinct tokens the sampler can produce, before transforms.
    #[must_use]
    pub fn symbol_space(&self) -> u128 {
        self.mode.symbol_space(self.length)
    }
}

impl Settings {
    /// Applies the `keyblock` and `pin` shortcuts, in that order, and
    /// resolves names, the separator and the alphabet.
    pub fn resolve(self) -> Result<Config, ConfigError> {
        let mut charset = Charset::from_name(&self.chars);
        let mut length = self.length;
        let mut base64 = self.base64;
        let mut block = self.block;
        let mut blocksize = self.blocksize;

        if self.keyblock {
            charset = Charset::Bytes;
            base64 = true;
            block = true;
            blocksize = DEFAULT_BLOCK_SIZE;
        }
        if self.pin > 0 {
            charset = Charset::Numeric;
            length = self.pin;
        }

        let separator = separator::unescape(&self.separator)?;
        let custom = Some(self.custom.as_str()).filter(|custom| !custom.is_empty());
        let mode = SamplingMode::resolve(charset, custom);
        let mangle = Mangle::from_name(&self.mangle);

        if mangle.is_some() && base64 {
            warn!("--mangle decreases the cardinality of base64 output");
        }

        let config = Config {
            mode,
            length,
            count: self.count,
            transform: OutputTransformer {
                base64,
                mangle,
                block: block.then_some(blocksize),
            },
            unique: self.unique,
            separator,
        };

        debug!(
            charset = %charset,
            length = config.length,
            count = config.count,
            unique = config.unique,
            "Configuration resolved"
        );

        Ok(config)
    }
}
