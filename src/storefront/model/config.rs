use std::time::Duration;
use chrono::TimeDelta;

/// Client configs
#[derive(Debug, Clone)]
pub(crate) struct ClientConfig {
    /// base url of the rest api, e.g. `http://127.0.0.1:8080/api`
    pub api_base: String,
    /// how long a toast stays on screen
    pub toast_lifetime: TimeDelta,
    pub http_timeout: Duration,
}

impl ClientConfig {
    pub fn new(api_base: String, toast_lifetime: TimeDelta, http_timeout: Duration) -> Self {
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            toast_lifetime,
            http_timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_dropped_from_base() {
        let config = ClientConfig::new(
            "http://localhost:8080/api/".to_string(),
            TimeDelta::milliseconds(3000),
            Duration::from_secs(10),
        );
        assert_eq!(config.api_base, "http://localhost:8080/api");
    }
}
