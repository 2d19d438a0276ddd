use std::path::PathBuf;

use super::types::{DialogError, DirectoryDialogOptions};

/// A native folder-selection primitive.
pub trait DirectoryDialog {
    /// Block until the user picks a folder. `Ok(None)` means cancelled.
    fn pick_directory(&self, opts: &DirectoryDialogOptions) -> Result<Option<PathBuf>, DialogError>;
}

/// Ask for the input folder. Cancelling yields an empty string.
pub fn select_directory<D: DirectoryDialog + ?Sized>(dialog: &D) -> Result<String, DialogError> {
    let opts = DirectoryDialogOptions::input_folder();
    tracing::debug!(title = %opts.title, "opening folder dialog");

    match dialog.pick_directory(&opts)? {
        None => {
            tracing::debug!("folder dialog cancelled");
            Ok(String::new())
        }
        Some(path) => path
            .into_os_string()
            .into_string()
            .map_err(|raw| DialogError::NonUtf8Path(PathBuf::from(raw))),
    }
}
