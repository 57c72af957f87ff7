use std::env;
use std::time::Duration;

use tracing::warn;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_ALERT_DISMISS_AFTER_MS: u64 = 5000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub hospital_base_url: String,
    pub session_cookie: Option<String>,
    pub alert_dismiss_after_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            hospital_base_url: DEFAULT_BASE_URL.to_string(),
            session_cookie: None,
            alert_dismiss_after_ms: DEFAULT_ALERT_DISMISS_AFTER_MS,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            hospital_base_url: lookup("HOSPITAL_BASE_URL")
                .unwrap_or_else(|| {
                    warn!("HOSPITAL_BASE_URL not set, using {}", DEFAULT_BASE_URL);
                    DEFAULT_BASE_URL.to_string()
                }),
            session_cookie: lookup("HOSPITAL_SESSION_COOKIE")
                .filter(|cookie| !cookie.trim().is_empty()),
            alert_dismiss_after_ms: lookup("ALERT_DISMISS_AFTER_MS")
                .and_then(|raw| match raw.parse::<u64>() {
                    Ok(ms) => Some(ms),
                    Err(_) => {
                        warn!("ALERT_DISMISS_AFTER_MS is not a number ({}), using default", raw);
                        None
                    }
                })
                .unwrap_or(DEFAULT_ALERT_DISMISS_AFTER_MS),
        };

        if !config.is_configured() {
            warn!("Portal not fully configured - hospital base URL is empty");
        }

        config
    }

    /// Returns a copy pointed at another server, keeping everything else.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.hospital_base_url = base_url.into();
        self
    }

    pub fn is_configured(&self) -> bool {
        !self.hospital_base_url.trim().is_empty()
    }

    pub fn has_session(&self) -> bool {
        self.session_cookie.is_some()
    }

    pub fn alert_dismiss_delay(&self) -> Duration {
        Duration::from_millis(self.alert_dismiss_after_ms)
    }
}
