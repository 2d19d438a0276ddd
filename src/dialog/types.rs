use std::path::PathBuf;

pub const INPUT_FOLDER_TITLE: &str = "Select Input folder";

/// Everything the native folder picker is configured with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryDialogOptions {
    pub title: String,
    pub show_hidden_files: bool,
    pub can_create_directories: bool,
    /// Follow symlinks and macOS aliases to their target.
    pub resolves_aliases: bool,
    /// Let the user descend into bundles such as `.app` directories.
    pub treat_packages_as_directories: bool,
}

impl DirectoryDialogOptions {
    /// Picker used for both the input and output folder fields.
    pub fn input_folder() -> Self {
        Self {
            title: INPUT_FOLDER_TITLE.to_string(),
            show_hidden_files: false,
            can_create_directories: false,
            resolves_aliases: true,
            treat_packages_as_directories: false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DialogError {
    #[error("no window labelled `{0}` to attach the dialog to")]
    NoWindow(String),

    #[error("folder dialog failed: {0}")]
    Toolkit(String),

    #[error("selected path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),
}
