// crates/ident-rig-server/src/config.rs
// ============================================================================
// Module: Server Configuration
// Description: Bind-address configuration for the fake record service.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: serde, thiserror, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from an optional TOML file with a hard size limit
//! and unknown-field rejection; everything not set in the file falls back to
//! the loopback defaults. The config path resolves from an explicit argument,
//! then the `IDENT_RIG_CONFIG` environment variable, then a conventional
//! filename in the working directory.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::io;
use std::net::Ipv4Addr;
use std::net::SocketAddr;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "IDENT_RIG_CONFIG";

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "ident-rig.toml";

/// Maximum configuration file size in bytes.
const MAX_CONFIG_FILE_SIZE: u64 = 64 * 1024;

/// Fixed port the standalone service listens on by default.
pub const DEFAULT_PORT: u16 = 61_616;

/// Returns the default loopback bind address.
#[must_use]
pub fn default_bind() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT))
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config '{path}': {source}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// The config file exceeds the size limit.
    #[error("config '{path}' exceeds size limit ({actual} > {limit} bytes)")]
    TooLarge {
        /// Path that was rejected.
        path: PathBuf,
        /// Maximum allowed size in bytes.
        limit: u64,
        /// Actual file size in bytes.
        actual: u64,
    },
    /// The config file is not valid TOML or has unknown fields.
    #[error("failed to parse config '{path}': {source}")]
    Parse {
        /// Path that failed to parse.
        path: PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },
}

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// On-disk configuration shape.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
struct RigConfigFile {
    /// Socket address the service binds, e.g. `"127.0.0.1:61616"`.
    #[serde(default)]
    bind: Option<SocketAddr>,
}

/// Resolved record service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RigConfig {
    /// Socket address the service binds.
    pub bind: SocketAddr,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

impl RigConfig {
    /// Loads configuration from the given path, the `IDENT_RIG_CONFIG`
    /// environment variable, or the conventional filename, in that order.
    /// Falls back to defaults when no config file is present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a resolved file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = path
            .map(Path::to_path_buf)
            .or_else(|| env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
            .or_else(|| {
                let fallback = PathBuf::from(DEFAULT_CONFIG_NAME);
                fallback.exists().then_some(fallback)
            });
        let Some(path) = resolved else {
            return Ok(Self::default());
        };
        Self::load_file(&path)
    }

    /// Loads and validates a single config file.
    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let metadata = fs::metadata(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::TooLarge {
                path: path.to_path_buf(),
                limit: MAX_CONFIG_FILE_SIZE,
                actual: metadata.len(),
            });
        }
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parses configuration from a TOML document, applying defaults.
    fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        let file: RigConfigFile = toml::from_str(raw)?;
        let mut config = Self::default();
        if let Some(bind) = file.bind {
            config.bind = bind;
        }
        Ok(config)
    }
}
