mod loader;
mod types;

pub use loader::{DOCKER_HOST_VAR, LOG_VAR};
pub use types::Config;
