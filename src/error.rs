//! Error taxonomy for manifest and scaffold operations

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the manifest store, mutation operations, and the
/// filesystem scaffolder. The command layer presents these; nothing is
/// retried or swallowed below it.
#[derive(Debug, Error)]
pub enum DitError {
    #[error("no manifest found at {} (run `dit init` first)", path.display())]
    ManifestNotFound { path: PathBuf },

    #[error("{kind} '{name}' not found")]
    NotFound { kind: &'static str, name: String },

    #[error("{kind} '{name}' already exists")]
    DuplicateName { kind: &'static str, name: String },

    #[error("malformed manifest at {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{context}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
}

impl DitError {
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        DitError::Io {
            context: context.into(),
            source,
        }
    }
}
