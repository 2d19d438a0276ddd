/// Runtime settings. Taken from the environment, never written back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Daemon endpoint overriding the client's own `DOCKER_HOST` lookup.
    pub docker_host: Option<String>,
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            docker_host: None,
            log_filter: "info".to_string(),
        }
    }
}
