//! Configuration file parser for ~/.config/atompub/config.toml.
//!
//! The file is optional and only tunes how service documents are parsed
//! and rendered; see [`Config`] for the keys.
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML in config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// SEC-014: Config file exceeds maximum allowed size.
    #[error("Config file too large: {0}")]
    TooLarge(String),
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// XML reading and writing options.
///
/// All fields use `#[serde(default)]` so any subset of keys can be specified.
/// Missing keys fall back to `Default::default()`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Spaces per nesting level when rendering XML. 0 = single line.
    pub indent: usize,

    /// Whether rendered documents start with an XML declaration.
    pub xml_declaration: bool,

    /// SEC-003: Maximum element nesting depth accepted when parsing.
    pub max_depth: usize,

    /// Maximum size in bytes of a service document accepted when parsing.
    pub max_document_bytes: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent: 2,
            xml_declaration: true,
            max_depth: 64,
            max_document_bytes: 4 * 1024 * 1024,
        }
    }
}

/// Keys `Config` understands; anything else in the file is reported.
const KNOWN_KEYS: [&str; 4] = ["indent", "xml_declaration", "max_depth", "max_document_bytes"];

impl Config {
    /// SEC-014: Maximum config file size (1 MB).
    const MAX_FILE_SIZE: u64 = 1_048_576;

    /// Loads codec settings from a TOML file.
    ///
    /// A missing, empty or whitespace-only file gives `Config::default()`.
    /// Keys not in the file keep their defaults; unrecognized keys are
    /// accepted and logged.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let Some(content) = read_if_present(path)? else {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        };
        if content.trim().is_empty() {
            tracing::debug!(path = %path.display(), "Empty config file, using defaults");
            return Ok(Self::default());
        }

        let table: toml::Table = content.parse()?;
        for key in table.keys().filter(|k| !KNOWN_KEYS.contains(&k.as_str())) {
            tracing::warn!(key = %key, path = %path.display(), "Unknown config key ignored");
        }

        let config: Config = toml::from_str(&content)?;
        tracing::info!(
            path = %path.display(),
            indent = config.indent,
            max_depth = config.max_depth,
            "Loaded configuration"
        );
        Ok(config)
    }
}

/// Reads `path`, or `None` if it does not exist.
///
/// SEC-014: the size is checked before anything is read.
fn read_if_present(path: &Path) -> Result<Option<String>, ConfigError> {
    let not_found = |e: &std::io::Error| e.kind() == std::io::ErrorKind::NotFound;

    let size = match std::fs::metadata(path) {
        Ok(meta) => meta.len(),
        Err(e) if not_found(&e) => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    if size > Config::MAX_FILE_SIZE {
        return Err(ConfigError::TooLarge(format!(
            "Config file is {size} bytes (max {} bytes)",
            Config::MAX_FILE_SIZE
        )));
    }

    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        // Removed between metadata() and read
        Err(e) if not_found(&e) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

// ============================================================================
// Tests
// ============================================================================
