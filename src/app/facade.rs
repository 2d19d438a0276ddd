use crate::config::Config;
use crate::dialog::{self, DialogError, DirectoryDialog};
use crate::docker::{self, Connector, ContainerSummary, DockerError};

/// Session context handed over by the GUI runtime at startup.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: Config,
    /// Window that dialogs are attached to.
    pub window_label: String,
}

/// Backend behind the web view.
///
/// Only constructed from [`App::startup`], so every handler sees a
/// populated context. Holds no mutable state and is safe to share
/// across concurrent requests.
pub struct App<K, D> {
    context: AppContext,
    connector: K,
    dialog: D,
}

impl<K, D> App<K, D>
where
    K: Connector + Sync,
    D: DirectoryDialog,
{
    /// The dialog is built from the stored context so it targets the
    /// window the context names.
    pub fn startup(
        context: AppContext,
        connector: K,
        dialog_for: impl FnOnce(&AppContext) -> D,
    ) -> Self {
        tracing::info!(
            docker_host = context.config.docker_host.as_deref().unwrap_or("<env>"),
            window = %context.window_label,
            "backend started"
        );
        let dialog = dialog_for(&context);
        Self {
            context,
            connector,
            dialog,
        }
    }

    pub fn context(&self) -> &AppContext {
        &self.context
    }

    /// Front-end resources finished loading. Nothing to do.
    pub fn dom_ready(&self) {
        tracing::trace!("front-end ready");
    }

    /// Returns whether to keep the window open. Closing is always allowed.
    pub fn before_close(&self) -> bool {
        false
    }

    /// Process is exiting. Nothing is held that needs releasing.
    pub fn shutdown(&self) {
        tracing::trace!("backend shut down");
    }

    pub async fn list_containers(&self) -> Result<Vec<ContainerSummary>, DockerError> {
        docker::list_exited(&self.connector).await.inspect_err(|e| {
            tracing::warn!(error = %e, "listing exited containers failed");
        })
    }

    pub fn select_directory(&self) -> Result<String, DialogError> {
        dialog::select_directory(&self.dialog).inspect_err(|e| {
            tracing::warn!(error = %e, "folder selection failed");
        })
    }
}
