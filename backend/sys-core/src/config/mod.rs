use crate::error::config::ConfigError;
use crate::{CONFIG_FILE_NAME, CONFIG_TEMP_FILE_NAME};

use common::ErrorLocation;
use models::interpreter::{DEFAULT_FLAG, DEFAULT_PROGRAM};
use models::{Interpreter, InterpreterBuilder};

use std::panic::Location;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

const CONFIG_VERSION: u32 = 1;

pub const DEFAULT_CHUNK_SIZE: usize = 1024;
pub const MIN_CHUNK_SIZE: usize = 1;
pub const MAX_CHUNK_SIZE: usize = 1024 * 1024;

// ============================================
// CONFIG STRUCTS
// ============================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpreterConfig {
    #[serde(default = "default_program")]
    pub program: String,
    #[serde(default = "default_flag")]
    pub flag: String,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            flag: default_flag(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalConfig {
    /// Upper bound of a single pipe read in `eval`.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log commands and paths verbatim at info level instead of redacted at debug.
    #[serde(default)]
    pub log_commands: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SysConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub interpreter: InterpreterConfig,

    #[serde(default)]
    pub eval: EvalConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for SysConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            interpreter: InterpreterConfig::default(),
            eval: EvalConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

// ============================================
// DEFAULT FUNCTIONS
// ============================================

fn default_version() -> u32 {
    CONFIG_VERSION
}
fn default_program() -> String {
    DEFAULT_PROGRAM.to_string()
}
fn default_flag() -> String {
    DEFAULT_FLAG.to_string()
}
fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

// ============================================
// IMPLEMENTATION
// ============================================

impl SysConfig {
    /// Load config from {config_dir}/pg_sys.json.
    ///
    /// # Returns
    ///
    /// Returns `Ok(SysConfig)` if loaded successfully or defaults if the file is missing.
    /// Returns `Err(ConfigError)` if the file exists but is unreadable or invalid.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            info!(
                "Config file not found at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path).map_err(|e| {
            warn!("Failed to read config file: {}", e);
            ConfigError::ReadError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.clone(),
                source: e,
            }
        })?;

        let config: SysConfig = serde_json::from_str(&contents).map_err(|e| {
            warn!("Failed to parse config JSON: {}", e);
            ConfigError::ParseError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.clone(),
                reason: e.to_string(),
            }
        })?;

        config.validate()?;

        info!("Config loaded from {}", config_path.display());
        Ok(config)
    }

    /// Save config to {config_dir}/pg_sys.json using atomic write.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if validation, directory creation, serialization,
    /// the temp file write, or the rename fails.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        self.validate()?;

        std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: config_dir.to_path_buf(),
            source: e,
        })?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let temp_path = config_dir.join(CONFIG_TEMP_FILE_NAME);

        let json = serde_json::to_string_pretty(self).map_err(|e| ConfigError::SerializeError {
            location: ErrorLocation::from(Location::caller()),
            reason: e.to_string(),
        })?;

        std::fs::write(&temp_path, json).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: temp_path.clone(),
            source: e,
        })?;

        // Atomic rename (POSIX guarantees atomicity)
        std::fs::rename(&temp_path, &config_path).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: config_path.clone(),
            source: e,
        })?;

        info!("Config saved to {}", config_path.display());
        Ok(())
    }

    /// Validate config values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version == 0 || self.version > CONFIG_VERSION {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "Invalid version: {} (expected 1-{})",
                    self.version, CONFIG_VERSION
                ),
            });
        }

        if !(MIN_CHUNK_SIZE..=MAX_CHUNK_SIZE).contains(&self.eval.chunk_size) {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "Invalid chunk size: {} (must be {MIN_CHUNK_SIZE}-{MAX_CHUNK_SIZE})",
                    self.eval.chunk_size
                ),
            });
        }

        self.interpreter()?;

        Ok(())
    }

    /// Build the validated interpreter described by this config.
    #[track_caller]
    pub fn interpreter(&self) -> Result<Interpreter, ConfigError> {
        InterpreterBuilder::default()
            .with_program(self.interpreter.program.as_str())
            .with_flag(self.interpreter.flag.as_str())
            .build()
            .map_err(|e| ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: e.to_string(),
            })
    }
}
