// Native folder selection.

pub mod native;
pub mod picker;
pub mod types;

pub use native::NativeDirectoryDialog;
pub use picker::{DirectoryDialog, select_directory};
pub use types::{DialogError, DirectoryDialogOptions, INPUT_FOLDER_TITLE};
