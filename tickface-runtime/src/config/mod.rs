//! Configuration loading and parsing
//!
//! Loads the face configuration from TOML or a postcard blob and validates
//! it against the display shape.

pub mod file;
pub mod loader;

pub use file::FaceFile;
pub use loader::{decode_config, encode_config, load_config, parse_config, ConfigError};
