//! Global settings loaded from TOML, lazy-initialized through a OnceLock.
//!
//! - `init_custom(toml_content)` sets a custom TOML before the first
//!   `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before the first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub suggestions: SuggestionSettings,
    pub bigram: BigramSettings,
    pub feedback: FeedbackSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SuggestionSettings {
    /// Marker returned in suggestion slots with no live candidate.
    pub placeholder: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BigramSettings {
    /// Per-word successor table capacity.
    pub max_successors: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackSettings {
    /// Frequency increment applied when feedback names a known word.
    pub frequency_boost: u32,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.bigram.max_successors == 0 {
        return Err(SettingsError::InvalidValue {
            field: "bigram.max_successors".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    if s.suggestions.placeholder.is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "suggestions.placeholder".to_string(),
            reason: "must be non-empty".to_string(),
        });
    }
    Ok(())
}
