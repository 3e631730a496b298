//! Runtime settings
//!
//! Loaded from an optional settings file, then from `FEISHU_`-prefixed
//! environment variables (`FEISHU_APP_ID` becomes `app_id`). Environment
//! values override the file.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::platforms::feishu::DEFAULT_BASE_URL;
use crate::sharer::PollPolicy;

/// Prefix of the environment variables read by [`Settings::load`]
pub const ENV_PREFIX: &str = "FEISHU";

/// Where public minutes links point
pub const DEFAULT_MINUTES_BASE_URL: &str = "https://meetings.feishu.cn/minutes";

/// Shortest lookup interval the recording endpoint allows (50 calls per second)
pub const MIN_POLL_INTERVAL_MS: u64 = 20;

/// Most recording lookups the endpoint allows within one minute
pub const MAX_LOOKUPS_PER_MINUTE: u64 = 1000;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub app_id: String,
    pub app_secret: SecretString,
    /// Comma-separated user IDs granted access to every recording
    #[serde(default)]
    pub authorized_users_id_list: String,
    /// A refresh token issued earlier; skips the authorization-code exchange
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_minutes_base_url")]
    pub minutes_base_url: String,
    #[serde(default = "default_poll_attempts")]
    pub poll_attempts: u32,
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    #[serde(default = "default_initial_delay_ms")]
    pub initial_delay_ms: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_minutes_base_url() -> String {
    DEFAULT_MINUTES_BASE_URL.to_string()
}

fn default_poll_attempts() -> u32 {
    200
}

fn default_poll_interval_ms() -> u64 {
    50
}

fn default_initial_delay_ms() -> u64 {
    5000
}

impl Settings {
    /// Load settings from the environment, layered over an optional file
    ///
    /// # Arguments
    /// * `path` - Settings file (any format the `config` crate recognises by extension)
    pub fn load(path: Option<&str>) -> Result<Self> {
        let mut builder = ::config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(::config::File::with_name(path));
        }

        let settings = builder
            .add_source(::config::Environment::with_prefix(ENV_PREFIX))
            .build()?;

        Self::from_config(settings)
    }

    /// Deserialize and validate an already-built configuration
    pub fn from_config(settings: ::config::Config) -> Result<Self> {
        let settings: Settings = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if self.app_id.trim().is_empty() {
            return Err(Error::configuration("app_id must not be empty"));
        }
        if self.app_secret.expose_secret().trim().is_empty() {
            return Err(Error::configuration("app_secret must not be empty"));
        }
        if self.poll_attempts == 0 {
            return Err(Error::configuration("poll_attempts must be at least 1"));
        }
        if self.poll_interval_ms < MIN_POLL_INTERVAL_MS {
            return Err(Error::configuration(format!(
                "poll_interval_ms must be at least {MIN_POLL_INTERVAL_MS}"
            )));
        }
        let lookups_per_minute = u64::from(self.poll_attempts).min(60_000 / self.poll_interval_ms + 1);
        if lookups_per_minute > MAX_LOOKUPS_PER_MINUTE {
            return Err(Error::configuration(format!(
                "{} lookups {}ms apart exceed {MAX_LOOKUPS_PER_MINUTE} per minute",
                self.poll_attempts, self.poll_interval_ms
            )));
        }
        Ok(())
    }

    /// The configured collaborators, in list order
    ///
    /// Entries are trimmed; empty entries are dropped.
    pub fn authorized_user_ids(&self) -> Vec<String> {
        self.authorized_users_id_list
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Recording lookup schedule
    pub fn poll_policy(&self) -> PollPolicy {
        PollPolicy {
            attempts: self.poll_attempts,
            interval: Duration::from_millis(self.poll_interval_ms),
            initial_delay: Duration::from_millis(self.initial_delay_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::config::{File, FileFormat};

    fn settings_from_toml(toml: &str) -> Result<Settings> {
        let built = ::config::Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;
        Settings::from_config(built)
    }

    #[test]
    fn test_defaults() {
        let settings = settings_from_toml(
            r#"
            app_id = "cli_a1"
            app_secret = "s3cret"
            "#,
        )
        .unwrap();

        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.minutes_base_url, DEFAULT_MINUTES_BASE_URL);
        assert!(settings.refresh_token.is_none());
        assert!(settings.authorized_user_ids().is_empty());

        let policy = settings.poll_policy();
        assert_eq!(policy.attempts, 200);
        assert_eq!(policy.interval, Duration::from_millis(50));
        assert_eq!(policy.initial_delay, Duration::from_secs(5));
    }

    #[test]
    fn test_user_id_list_order_and_trimming() {
        let settings = settings_from_toml(
            r#"
            app_id = "cli_a1"
            app_secret = "s3cret"
            authorized_users_id_list = "u2, u1,,u3 "
            "#,
        )
        .unwrap();

        assert_eq!(settings.authorized_user_ids(), vec!["u2", "u1", "u3"]);
    }

    #[test]
    fn test_missing_secret_is_configuration_error() {
        let err = settings_from_toml(r#"app_id = "cli_a1""#).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::Configuration);
    }

    #[test]
    fn test_empty_app_id_rejected() {
        let err = settings_from_toml(
            r#"
            app_id = "  "
            app_secret = "s3cret"
            "#,
        )
        .unwrap_err();
        assert!(err.message.contains("app_id"));
    }

    #[test]
    fn test_poll_interval_below_rate_limit_rejected() {
        let err = settings_from_toml(
            r#"
            app_id = "cli_a1"
            app_secret = "s3cret"
            poll_interval_ms = 0
            "#,
        )
        .unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::Configuration);
        assert!(err.message.contains("poll_interval_ms"));

        let err = settings_from_toml(
            r#"
            app_id = "cli_a1"
            app_secret = "s3cret"
            poll_interval_ms = 19
            "#,
        )
        .unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::Configuration);
    }

    #[test]
    fn test_poll_attempts_over_minute_limit_rejected() {
        // 1201 lookups fit in a minute at 50 ms
        let err = settings_from_toml(
            r#"
            app_id = "cli_a1"
            app_secret = "s3cret"
            poll_attempts = 5000
            "#,
        )
        .unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::Configuration);

        let settings = settings_from_toml(
            r#"
            app_id = "cli_a1"
            app_secret = "s3cret"
            poll_attempts = 1000
            poll_interval_ms = 20
            "#,
        )
        .unwrap();
        assert_eq!(settings.poll_policy().attempts, 1000);

        let settings = settings_from_toml(
            r#"
            app_id = "cli_a1"
            app_secret = "s3cret"
            poll_attempts = 5000
            poll_interval_ms = 61
            "#,
        )
        .unwrap();
        assert_eq!(settings.poll_policy().interval, Duration::from_millis(61));
    }

    #[test]
    fn test_secret_not_in_debug_output() {
        let settings = settings_from_toml(
            r#"
            app_id = "cli_a1"
            app_secret = "s3cret"
            "#,
        )
        .unwrap();
        assert!(!format!("{settings:?}").contains("s3cret"));
    }
}
