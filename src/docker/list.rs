use std::future::Future;

use super::types::{ContainerSummary, DockerError, ListOptions};

/// Opens connections to a container-engine daemon.
pub trait Connector {
    type Connection: Connection + Send;

    fn connect(&self) -> impl Future<Output = Result<Self::Connection, DockerError>> + Send;
}

/// A single daemon connection. Owned by one call, never shared.
pub trait Connection {
    fn list_containers(
        &mut self,
        opts: &ListOptions,
    ) -> impl Future<Output = Result<Vec<ContainerSummary>, DockerError>> + Send;

    /// Release whatever the connection holds. Called exactly once by [`Session`].
    fn close(&mut self);
}

/// Scope guard that closes its connection on every exit path, including
/// a dropped future.
pub struct Session<C: Connection> {
    conn: C,
}

impl<C: Connection> Session<C> {
    pub async fn open<K>(connector: &K) -> Result<Self, DockerError>
    where
        K: Connector<Connection = C>,
    {
        let conn = connector.connect().await?;
        Ok(Self { conn })
    }

    pub async fn list_containers(
        &mut self,
        opts: &ListOptions,
    ) -> Result<Vec<ContainerSummary>, DockerError> {
        self.conn.list_containers(opts).await
    }
}

impl<C: Connection> Drop for Session<C> {
    fn drop(&mut self) {
        self.conn.close();
    }
}

/// List exited containers over a fresh connection, in engine order.
pub async fn list_exited<K>(connector: &K) -> Result<Vec<ContainerSummary>, DockerError>
where
    K: Connector + Sync,
{
    let mut session = Session::open(connector).await?;
    let containers = session.list_containers(&ListOptions::exited()).await?;
    tracing::debug!(count = containers.len(), "listed exited containers");
    Ok(containers)
}
