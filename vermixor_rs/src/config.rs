//! Site configuration.
//!
//! The landing embeds a `site.toml`; native tools can load one from disk with
//! [`SiteConfig::load_from_path`]. Every field has a default, and a file that
//! fails to parse falls back to defaults with a warning.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::forms::FormRules;
use crate::submit::RetryPolicy;
use crate::theme::{THEME_STORAGE_KEY, Theme};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse site config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub brand: BrandConfig,
    pub timing: TimingConfig,
    pub forms: FormsConfig,
    pub theme: ThemeConfig,
    pub submission: SubmissionConfig,
}

/// Agency identity and contact details
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BrandConfig {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub calendly_url: String,
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            name: "Vermixor".to_string(),
            email: "vermixor@gmail.com".to_string(),
            phone: "+92 (323) 357-2739".to_string(),
            location: "Lahore, Pakistan".to_string(),
            calendly_url: "https://calendly.com/vermixor".to_string(),
        }
    }
}

/// Delays and animation lengths, in milliseconds
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub submission_delay_ms: u64,
    pub carousel_interval_ms: u64,
    pub counter_duration_ms: u64,
    pub counter_frames: u32,
    pub toast_lifetime_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            submission_delay_ms: 1500,
            carousel_interval_ms: 5000,
            counter_duration_ms: 2000,
            counter_frames: 60,
            toast_lifetime_ms: 5000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FormsConfig {
    pub min_review_length: usize,
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            min_review_length: crate::forms::MIN_REVIEW_LEN,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// `localStorage` key holding the selected theme id
    pub storage_key: String,
    /// Theme id used when nothing valid is stored
    pub default: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: THEME_STORAGE_KEY.to_string(),
            default: Theme::default().id().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SubmissionConfig {
    pub max_attempts: u32,
    pub timeout_ms: u64,
    pub backoff_ms: u64,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        let policy = RetryPolicy::default();
        Self {
            max_attempts: policy.max_attempts,
            timeout_ms: policy.timeout.as_millis() as u64,
            backoff_ms: policy.backoff.as_millis() as u64,
        }
    }
}

impl SiteConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Parse `content`, or return defaults when it is invalid.
    pub fn parse_or_default(content: &str) -> Self {
        match Self::from_toml_str(content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{e}, using defaults");
                Self::default()
            }
        }
    }

    /// Load config from a specific path.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => Self::parse_or_default(&content),
            Err(source) => {
                let err = ConfigError::Read {
                    path: path.display().to_string(),
                    source,
                };
                tracing::warn!("{err}, using defaults");
                Self::default()
            }
        }
    }

    pub fn default_theme(&self) -> Theme {
        Theme::parse(&self.theme.default).unwrap_or_else(|| {
            tracing::warn!("unknown default theme {:?}", self.theme.default);
            Theme::default()
        })
    }

    pub fn form_rules(&self) -> FormRules {
        FormRules {
            min_review_len: self.forms.min_review_length,
        }
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.submission.max_attempts,
            timeout: Duration::from_millis(self.submission.timeout_ms),
            backoff: Duration::from_millis(self.submission.backoff_ms),
        }
    }

    pub fn submission_delay(&self) -> Duration {
        Duration::from_millis(self.timing.submission_delay_ms)
    }

    pub fn carousel_interval(&self) -> Duration {
        Duration::from_millis(self.timing.carousel_interval_ms)
    }

    pub fn counter_duration(&self) -> Duration {
        Duration::from_millis(self.timing.counter_duration_ms)
    }

    pub fn toast_lifetime(&self) -> Duration {
        Duration::from_millis(self.timing.toast_lifetime_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.brand.name, "Vermixor");
        assert_eq!(config.submission_delay(), Duration::from_millis(1500));
        assert_eq!(config.carousel_interval(), Duration::from_millis(5000));
        assert_eq!(config.form_rules().min_review_len, 20);
        assert_eq!(config.default_theme(), Theme::Fire);
        assert_eq!(config.retry_policy(), RetryPolicy::default());
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
[timing]
carousel_interval_ms = 8000

[theme]
default = "ocean"
"#,
        )
        .expect("valid toml");
        assert_eq!(config.carousel_interval(), Duration::from_millis(8000));
        assert_eq!(config.timing.counter_frames, 60);
        assert_eq!(config.default_theme(), Theme::Ocean);
        assert_eq!(config.theme.storage_key, "theme");
    }

    #[test]
    fn test_invalid_toml_falls_back() {
        assert!(SiteConfig::from_toml_str("[timing\n").is_err());
        assert_eq!(SiteConfig::parse_or_default("[timing\n"), SiteConfig::default());
    }

    #[test]
    fn test_unknown_default_theme_uses_fire() {
        let config = SiteConfig::from_toml_str("[theme]\ndefault = \"neon\"\n").expect("valid toml");
        assert_eq!(config.default_theme(), Theme::Fire);
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = SiteConfig::load_from_path(&temp.path().join("site.toml"));
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_load_valid_file() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("site.toml");
        let mut file = std::fs::File::create(&path).expect("create config");
        writeln!(
            file,
            r#"
[brand]
email = "hello@vermixor.com"

[forms]
min_review_length = 40

[submission]
max_attempts = 5
timeout_ms = 2500
"#
        )
        .expect("write config");

        let config = SiteConfig::load_from_path(&path);
        assert_eq!(config.brand.email, "hello@vermixor.com");
        assert_eq!(config.brand.name, "Vermixor");
        assert_eq!(config.form_rules().min_review_len, 40);
        let policy = config.retry_policy();
        assert_eq!(policy.max_attempts, 5);
        assert_eq!(policy.timeout, Duration::from_millis(2500));
        assert_eq!(policy.backoff, Duration::from_millis(500));
    }
}
