use std::path::PathBuf;

use tauri::{AppHandle, Manager, Runtime};
use tauri_plugin_dialog::DialogExt;

use super::picker::DirectoryDialog;
use super::types::{DialogError, DirectoryDialogOptions};

/// Folder picker backed by `tauri-plugin-dialog`, parented to one window.
///
/// The plugin exposes the title and directory-creation flag. Hidden files,
/// alias resolution and package handling are left at the platform defaults,
/// which already match [`DirectoryDialogOptions::input_folder`].
pub struct NativeDirectoryDialog<R: Runtime> {
    app: AppHandle<R>,
    window_label: String,
}

impl<R: Runtime> NativeDirectoryDialog<R> {
    pub fn new(app: AppHandle<R>, window_label: impl Into<String>) -> Self {
        Self {
            app,
            window_label: window_label.into(),
        }
    }
}

impl<R: Runtime> DirectoryDialog for NativeDirectoryDialog<R> {
    fn pick_directory(&self, opts: &DirectoryDialogOptions) -> Result<Option<PathBuf>, DialogError> {
        let window = self
            .app
            .get_webview_window(&self.window_label)
            .ok_or_else(|| DialogError::NoWindow(self.window_label.clone()))?;

        let picked = self
            .app
            .dialog()
            .file()
            .set_title(&opts.title)
            .set_can_create_directories(opts.can_create_directories)
            .set_parent(&window)
            .blocking_pick_folder();

        match picked {
            None => Ok(None),
            Some(path) => path
                .into_path()
                .map(Some)
                .map_err(|e| DialogError::Toolkit(e.to_string())),
        }
    }
}
