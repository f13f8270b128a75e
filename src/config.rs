use crate::error::{Result, YadtError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Engine configuration. Constructed once before processing begins and
/// never mutated during a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Language code text fields are translated into.
    pub target_language: String,
    /// Minimum detection confidence to skip an already-translated field.
    /// Zero or below disables skip logic entirely.
    pub detect_language_threshold: f64,
    /// Glob patterns selecting which fields to translate.
    pub field_patterns_to_translate: Vec<String>,
    /// Boolean field set on every output record. Empty string disables it.
    pub translation_marker_field: String,
    /// Prefix for fields preserving pre-translation values. Empty string
    /// disables preservation.
    pub original_value_field_prefix: String,
    /// Use the deterministic placeholder backend instead of the real API.
    pub mock_mode: bool,
    /// Google Cloud Translation API key. Passed through opaquely.
    pub api_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_language: "en".to_string(),
            detect_language_threshold: 0.7,
            field_patterns_to_translate: vec!["*".to_string()],
            translation_marker_field: "wasTranslated".to_string(),
            original_value_field_prefix: "original_".to_string(),
            mock_mode: false,
            api_key: String::new(),
        }
    }
}

impl Config {
    /// Load configuration: defaults, then the default config file if it
    /// exists, then environment variable overrides.
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        if let Some(config_path) = Self::config_file_path() {
            if config_path.exists() {
                config = Self::load_from(&config_path)?;
            }
        }

        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from an explicit TOML file, with environment
    /// variable overrides applied on top.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(YadtError::FileNotFound(path.display().to_string()));
        }
        let mut config = Self::load_from(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| YadtError::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var("GOOGLE_TRANSLATE_API_KEY") {
            self.api_key = key;
        }
        if let Ok(lang) = std::env::var("YADT_TARGET_LANGUAGE") {
            self.target_language = lang;
        }
        if let Ok(mock) = std::env::var("YADT_MOCK_MODE") {
            if let Ok(m) = mock.parse() {
                self.mock_mode = m;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.target_language.trim().is_empty() {
            return Err(YadtError::Config(
                "target_language must not be empty".to_string(),
            ));
        }

        if self.detect_language_threshold > 1.0 {
            return Err(YadtError::Config(
                "detect_language_threshold must be <= 1.0".to_string(),
            ));
        }

        Ok(())
    }

    fn config_file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("yadt").join("config.toml"))
    }
}
