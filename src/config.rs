use thiserror::Error;

/// Application-level constants
pub const APP_NAME: &str = "Laudoscan";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Gemini REST API base (models live under `{base}/models/{name}`).
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used when GEMINI_MODEL is not set.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Request timeout in seconds. A report analysis is a single long generation.
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Default log filter when RUST_LOG is not set.
pub fn default_log_filter() -> String {
    format!("{}=info", env!("CARGO_PKG_NAME"))
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY is not set — export your Gemini API key before running")]
    MissingApiKey,

    #[error("Invalid {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Runtime settings for the analyzer.
///
/// The API key is required and checked at startup; everything else falls
/// back to defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Settings {
    /// Load settings from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var("GEMINI_API_KEY").ok(),
            std::env::var("GEMINI_MODEL").ok(),
            std::env::var("GEMINI_BASE_URL").ok(),
            std::env::var("GEMINI_TIMEOUT_SECS").ok(),
        )
    }

    /// Build settings from already-read variables. Split out of `from_env`
    /// so tests never mutate the process environment.
    pub fn from_vars(
        api_key: Option<String>,
        model: Option<String>,
        base_url: Option<String>,
        timeout_secs: Option<String>,
    ) -> Result<Self, ConfigError> {
        let api_key = match api_key {
            Some(key) if !key.trim().is_empty() => key,
            _ => return Err(ConfigError::MissingApiKey),
        };

        let timeout_secs = match timeout_secs {
            None => DEFAULT_TIMEOUT_SECS,
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: "GEMINI_TIMEOUT_SECS",
                value: raw,
            })?,
        };

        Ok(Self {
            api_key,
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout_secs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_api_key_is_fatal() {
        let result = Settings::from_vars(None, None, None, None);
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn blank_api_key_is_fatal() {
        let result = Settings::from_vars(Some("   ".into()), None, None, None);
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn defaults_applied_when_only_key_set() {
        let settings = Settings::from_vars(Some("test-key".into()), None, None, None).unwrap();
        assert_eq!(settings.api_key, "test-key");
        assert_eq!(settings.model, DEFAULT_MODEL);
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn overrides_take_precedence() {
        let settings = Settings::from_vars(
            Some("test-key".into()),
            Some("gemini-2.5-pro".into()),
            Some("http://localhost:8080/v1beta".into()),
            Some("60".into()),
        )
        .unwrap();
        assert_eq!(settings.model, "gemini-2.5-pro");
        assert_eq!(settings.base_url, "http://localhost:8080/v1beta");
        assert_eq!(settings.timeout_secs, 60);
    }

    #[test]
    fn bad_timeout_rejected() {
        let result = Settings::from_vars(
            Some("test-key".into()),
            None,
            None,
            Some("five minutes".into()),
        );
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn default_filter_targets_crate() {
        assert!(default_log_filter().contains("laudoscan"));
        assert!(default_log_filter().ends_with("=info"));
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }
}
