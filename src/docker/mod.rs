// Container-engine access: one fresh bollard client per listing.

pub mod engine;
pub mod list;
pub mod types;

pub use engine::{EngineConnection, EngineConnector};
pub use list::{Connection, Connector, Session, list_exited};
pub use types::{ContainerSummary, DockerError, ListOptions};
