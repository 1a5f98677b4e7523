use std::env;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub redis_url: String,
    pub user_service_url: String,
    pub server_host: String,
    pub server_port: u16,
    /// Expiry applied to cached user records. Zero keeps them until overwritten.
    pub user_cache_ttl_secs: u64,
    pub api_base_uri: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            redis_url: "redis://127.0.0.1:6379/0".to_string(),
            user_service_url: "http://127.0.0.1:50051".to_string(),
            server_host: "0.0.0.0".to_string(),
            server_port: 8080,
            user_cache_ttl_secs: 0,
            api_base_uri: String::new(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup, falling back to
    /// the defaults for every key the lookup does not know.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        Ok(Config {
            redis_url: lookup("REDIS_URL").unwrap_or(defaults.redis_url),
            user_service_url: lookup("USER_SERVICE_URL").unwrap_or(defaults.user_service_url),
            server_host: lookup("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: parse_or(&lookup, "SERVER_PORT", defaults.server_port)?,
            user_cache_ttl_secs: parse_or(
                &lookup,
                "USER_CACHE_TTL",
                defaults.user_cache_ttl_secs,
            )?,
            api_base_uri: lookup("API_BASE_URI")
                .map(|uri| uri.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_uri),
        })
    }

    pub fn user_cache_ttl(&self) -> Option<Duration> {
        match self.user_cache_ttl_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}
