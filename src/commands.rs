//! Handlers invoked from the web view.
//!
//! The folder dialog is modal and blocks, so it runs on the blocking pool
//! instead of the event loop thread.

use std::sync::Arc;

use tauri::State;

use crate::desktop::DesktopApp;
use crate::docker::ContainerSummary;
use crate::error::AppError;

#[tauri::command]
pub async fn list_containers(
    app: State<'_, Arc<DesktopApp>>,
) -> Result<Vec<ContainerSummary>, AppError> {
    Ok(app.list_containers().await?)
}

#[tauri::command]
pub async fn select_directory(app: State<'_, Arc<DesktopApp>>) -> Result<String, AppError> {
    let app = Arc::clone(app.inner());
    run_blocking(move || Ok(app.select_directory()?)).await
}

async fn run_blocking<T, F>(f: F) -> Result<T, AppError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, AppError> + Send + 'static,
{
    tauri::async_runtime::spawn_blocking(f)
        .await
        .map_err(|e| AppError::Worker(e.to_string()))?
}
