use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::dialog::DialogError;
use crate::docker::DockerError;

/// Failure surfaced to the front-end.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Docker(#[from] DockerError),

    #[error(transparent)]
    Dialog(#[from] DialogError),

    #[error("request worker failed: {0}")]
    Worker(String),
}

impl AppError {
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Docker(_) => "docker",
            AppError::Dialog(_) => "dialog",
            AppError::Worker(_) => "worker",
        }
    }
}

/// Serialized as `{ "kind": ..., "message": ... }` for the web view.
impl Serialize for AppError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("AppError", 2)?;
        s.serialize_field("kind", self.kind())?;
        s.serialize_field("message", &self.to_string())?;
        s.end()
    }
}
