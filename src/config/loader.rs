use super::types::Config;

pub const DOCKER_HOST_VAR: &str = "LETHE_DOCKER_HOST";
pub const LOG_VAR: &str = "LETHE_LOG";

impl Config {
    /// Build config from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup. Blank values are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut cfg = Config::default();
        if let Some(host) = get(DOCKER_HOST_VAR) {
            cfg.docker_host = Some(host);
        }
        if let Some(filter) = get(LOG_VAR) {
            cfg.log_filter = filter;
        }
        cfg
    }
}
