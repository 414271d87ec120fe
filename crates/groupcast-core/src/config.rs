//! Configuration module
//!
//! Endpoint location, anti-forgery token, locale and the timings of the
//! simulated progress bar and status banner. Values come from the
//! environment (and a `.env` file when present).

use std::env;
use std::time::Duration;

use crate::messages::Locale;

const DEFAULT_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_ENDPOINT: &str = "/send-mass-message/";
const REQUEST_TIMEOUT_SECS: u64 = 60;
const PROGRESS_TICK_MS: u64 = 100;
const PROGRESS_STEP: u8 = 2;
const PROGRESS_CEILING: u8 = 90;
const PROGRESS_HIDE_MS: u64 = 1000;
const STATUS_SUCCESS_HIDE_MS: u64 = 10_000;
const STATUS_ERROR_HIDE_MS: u64 = 15_000;

/// Simulated progress bar settings
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressConfig {
    /// Interval between ticks while a request is outstanding
    pub tick: Duration,
    /// Percentage points added per tick
    pub step: u8,
    /// Highest value shown while the request is outstanding
    pub ceiling: u8,
    /// Delay between settlement (100%) and hiding the bar
    pub hide_delay: Duration,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(PROGRESS_TICK_MS),
            step: PROGRESS_STEP,
            ceiling: PROGRESS_CEILING,
            hide_delay: Duration::from_millis(PROGRESS_HIDE_MS),
        }
    }
}

/// Auto-hide delays of the status banner
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusTimings {
    pub success_hide: Duration,
    pub error_hide: Duration,
}

impl Default for StatusTimings {
    fn default() -> Self {
        Self {
            success_hide: Duration::from_millis(STATUS_SUCCESS_HIDE_MS),
            error_hide: Duration::from_millis(STATUS_ERROR_HIDE_MS),
        }
    }
}

/// Composer configuration
#[derive(Clone, Debug)]
pub struct ComposerConfig {
    pub base_url: String,
    pub endpoint: String,
    /// Anti-forgery token copied into every submission
    pub csrf_token: Option<String>,
    pub locale: Locale,
    pub request_timeout: Duration,
    pub progress: ProgressConfig,
    pub status: StatusTimings,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            csrf_token: None,
            locale: Locale::default(),
            request_timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            progress: ProgressConfig::default(),
            status: StatusTimings::default(),
        }
    }
}

impl ComposerConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let millis = |key: &str, default: u64| -> Result<Duration, anyhow::Error> {
            match lookup(key) {
                Some(raw) => raw
                    .trim()
                    .parse::<u64>()
                    .map(Duration::from_millis)
                    .map_err(|_| anyhow::anyhow!("{} must be a number of milliseconds", key)),
                None => Ok(Duration::from_millis(default)),
            }
        };
        let percent = |key: &str, default: u8| -> Result<u8, anyhow::Error> {
            match lookup(key) {
                Some(raw) => raw
                    .trim()
                    .parse::<u8>()
                    .map_err(|_| anyhow::anyhow!("{} must be a number between 0 and 255", key)),
                None => Ok(default),
            }
        };

        let locale = match lookup("GROUPCAST_LOCALE") {
            Some(raw) => raw.parse::<Locale>().map_err(|e| anyhow::anyhow!(e))?,
            None => Locale::default(),
        };

        let request_timeout_secs = lookup("GROUPCAST_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|| REQUEST_TIMEOUT_SECS.to_string())
            .trim()
            .parse::<u64>()
            .map_err(|_| anyhow::anyhow!("GROUPCAST_REQUEST_TIMEOUT_SECS must be a valid number"))?;

        let config = Self {
            base_url: lookup("GROUPCAST_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            endpoint: lookup("GROUPCAST_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            csrf_token: lookup("GROUPCAST_CSRF_TOKEN").filter(|t| !t.trim().is_empty()),
            locale,
            request_timeout: Duration::from_secs(request_timeout_secs),
            progress: ProgressConfig {
                tick: millis("GROUPCAST_PROGRESS_TICK_MS", PROGRESS_TICK_MS)?,
                step: percent("GROUPCAST_PROGRESS_STEP", PROGRESS_STEP)?,
                ceiling: percent("GROUPCAST_PROGRESS_CEILING", PROGRESS_CEILING)?,
                hide_delay: millis("GROUPCAST_PROGRESS_HIDE_MS", PROGRESS_HIDE_MS)?,
            },
            status: StatusTimings {
                success_hide: millis("GROUPCAST_STATUS_SUCCESS_HIDE_MS", STATUS_SUCCESS_HIDE_MS)?,
                error_hide: millis("GROUPCAST_STATUS_ERROR_HIDE_MS", STATUS_ERROR_HIDE_MS)?,
            },
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(anyhow::anyhow!(
                "GROUPCAST_BASE_URL must start with http:// or https://"
            ));
        }
        if !self.endpoint.starts_with('/') {
            return Err(anyhow::anyhow!("GROUPCAST_ENDPOINT must start with '/'"));
        }
        if self.progress.tick.is_zero() {
            return Err(anyhow::anyhow!("GROUPCAST_PROGRESS_TICK_MS must be greater than 0"));
        }
        if self.progress.step == 0 {
            return Err(anyhow::anyhow!("GROUPCAST_PROGRESS_STEP must be greater than 0"));
        }
        if self.progress.ceiling == 0 || self.progress.ceiling >= 100 {
            return Err(anyhow::anyhow!(
                "GROUPCAST_PROGRESS_CEILING must be between 1 and 99"
            ));
        }
        if self.status.error_hide < self.status.success_hide {
            return Err(anyhow::anyhow!(
                "GROUPCAST_STATUS_ERROR_HIDE_MS must not be shorter than GROUPCAST_STATUS_SUCCESS_HIDE_MS"
            ));
        }
        Ok(())
    }

    /// Full URL of the mass-message endpoint.
    pub fn endpoint_url(&self) -> String {
        format!("{}{}", self.base_url, self.endpoint)
    }
}
