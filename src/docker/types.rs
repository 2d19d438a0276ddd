use std::collections::HashMap;

use bollard::container::ListContainersOptions;

/// Engine-defined container summary, passed to the front-end as-is.
pub use bollard::models::ContainerSummary;

/// Server-side filters for a container listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOptions {
    /// Include stopped containers, not only running ones.
    pub all: bool,
    pub filters: HashMap<String, Vec<String>>,
}

impl ListOptions {
    /// Containers whose process has terminated but which still exist.
    pub fn exited() -> Self {
        Self {
            all: true,
            filters: HashMap::from([("status".to_string(), vec!["exited".to_string()])]),
        }
    }

    pub fn to_request(&self) -> ListContainersOptions<String> {
        ListContainersOptions {
            all: self.all,
            filters: self.filters.clone(),
            ..Default::default()
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DockerError {
    #[error("invalid docker endpoint: {0}")]
    Connect(#[source] bollard::errors::Error),

    #[error("docker daemon is not reachable: {0}")]
    Unreachable(#[source] bollard::errors::Error),

    #[error("docker rejected the container query: {0}")]
    QueryRejected(#[source] bollard::errors::Error),

    /// A connection was used after [`Connection::close`](super::Connection::close).
    #[error("connection is closed")]
    Closed,
}
