use std::env;
use std::time::Duration;
use log::warn;

/// Mobile Safari on iOS; the short-link service serves the web redirect chain
/// to browsers and an app-store interstitial to unknown clients.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_4 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Mobile/15E148 Safari/604.1";

pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_READ_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Runtime settings, read once from the environment at startup
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub user_agent: String,
    pub connect_timeout: Duration,
    /// Not a per-read bound: added to `connect_timeout` to form the single
    /// whole-request deadline (see [`Config::request_timeout`]), since
    /// reqwest 0.11 only offers connect and total timeouts.
    pub read_timeout: Duration,
    pub max_redirects: usize,
    pub sentry_dsn: Option<String>,
    pub sentry_environment: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            read_timeout: Duration::from_secs(DEFAULT_READ_TIMEOUT_SECS),
            max_redirects: DEFAULT_MAX_REDIRECTS,
            sentry_dsn: None,
            sentry_environment: "production".to_string(),
        }
    }
}

impl Config {
    /// Builds the configuration from process environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let user_agent = lookup("CLEANTOK_USER_AGENT")
            .filter(|ua| !ua.trim().is_empty())
            .unwrap_or(defaults.user_agent);

        let connect_timeout = parse_or_default(
            "CLEANTOK_CONNECT_TIMEOUT_SECS",
            lookup("CLEANTOK_CONNECT_TIMEOUT_SECS"),
            DEFAULT_CONNECT_TIMEOUT_SECS,
        );
        let read_timeout = parse_or_default(
            "CLEANTOK_READ_TIMEOUT_SECS",
            lookup("CLEANTOK_READ_TIMEOUT_SECS"),
            DEFAULT_READ_TIMEOUT_SECS,
        );
        let max_redirects = parse_or_default(
            "CLEANTOK_MAX_REDIRECTS",
            lookup("CLEANTOK_MAX_REDIRECTS"),
            DEFAULT_MAX_REDIRECTS,
        );

        Config {
            user_agent,
            connect_timeout: Duration::from_secs(connect_timeout),
            read_timeout: Duration::from_secs(read_timeout),
            max_redirects,
            sentry_dsn: lookup("SENTRY_DSN").filter(|dsn| !dsn.is_empty()),
            sentry_environment: lookup("SENTRY_ENVIRONMENT")
                .unwrap_or(defaults.sentry_environment),
        }
    }

    /// Whole-request deadline (20 s by default): connect budget plus read
    /// budget, covering every redirect hop and the final response headers
    pub fn request_timeout(&self) -> Duration {
        self.connect_timeout + self.read_timeout
    }
}

fn parse_or_default<T>(name: &str, value: Option<String>, default: T) -> T
where
    T: std::str::FromStr + Copy + PartialOrd + Default,
{
    match value {
        None => default,
        Some(raw) => match raw.trim().parse::<T>() {
            // zero would disable the bound entirely
            Ok(parsed) if parsed > T::default() => parsed,
            _ => {
                warn!("Ignoring invalid value {:?} for {}", raw, name);
                default
            }
        },
    }
}
