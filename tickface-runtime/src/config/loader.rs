//! Configuration loading
//!
//! Tries the TOML file first and falls back to a postcard-encoded config
//! blob. Whatever is loaded is validated before the face sees it.

use tickface_core::config::{ConfigError as InvalidConfig, FaceConfig};

use super::file::FaceFile;

/// Configuration loading errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Neither TOML nor binary config was provided
    NotFound,
    /// TOML parsing failed
    TomlParse,
    /// Binary deserialization failed
    Deserialize,
    /// Serialization buffer too small
    Serialize,
    /// Parsed fine but inconsistent
    Invalid(InvalidConfig),
}

impl From<InvalidConfig> for ConfigError {
    fn from(e: InvalidConfig) -> Self {
        ConfigError::Invalid(e)
    }
}

/// Parse a TOML face configuration
pub fn parse_config(input: &str) -> Result<FaceConfig, ConfigError> {
    let file: FaceFile = toml::from_str(input).map_err(|_e| {
        warn!("TOML parse error");
        ConfigError::TomlParse
    })?;

    let config = file.resolve();
    config.validate()?;
    log_config_summary(&config);
    Ok(config)
}

/// Decode a postcard-encoded face configuration
pub fn decode_config(bytes: &[u8]) -> Result<FaceConfig, ConfigError> {
    let config: FaceConfig = postcard::from_bytes(bytes).map_err(|_| ConfigError::Deserialize)?;
    config.validate()?;
    log_config_summary(&config);
    Ok(config)
}

/// Encode a configuration for [`decode_config`]
pub fn encode_config<'b>(
    config: &FaceConfig,
    buffer: &'b mut [u8],
) -> Result<&'b mut [u8], ConfigError> {
    postcard::to_slice(config, buffer).map_err(|_| ConfigError::Serialize)
}

/// Load a configuration, TOML first
pub fn load_config(toml: Option<&str>, binary: Option<&[u8]>) -> Result<FaceConfig, ConfigError> {
    info!("Loading face configuration...");

    match toml.map(parse_config) {
        Some(Ok(config)) => {
            info!("Loaded configuration from TOML");
            return Ok(config);
        }
        Some(Err(e)) => warn!("Failed to load TOML config: {:?}, trying binary", e),
        None => debug!("No TOML config found, trying binary format"),
    }

    binary.map(decode_config).unwrap_or(Err(ConfigError::NotFound))
}

fn log_config_summary(config: &FaceConfig) {
    debug!("  shape: {:?}", config.shape);
    debug!("  clock: {:?}", config.clock);
    debug!(
        "  play count {}, stale timers {:?}",
        config.animation.play_count,
        config.animation.stale_timers
    );
    debug!(
        "  gesture {}, battery {}",
        config.features.gesture,
        config.features.battery
    );
}
