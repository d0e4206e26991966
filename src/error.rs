use std::path::PathBuf;
use thiserror::Error;

use crate::graph::PageId;

/// Failures raised while building or querying the page graph
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("page id {0} is declared more than once")]
    DuplicateId(PageId),

    #[error("link {src} -> {dst} references undeclared page {missing}")]
    UnknownPage {
        src: PageId,
        dst: PageId,
        missing: PageId,
    },

    #[error("no page with id {0}")]
    NoSuchPage(PageId),

    #[error("no page titled '{0}'")]
    UnknownTitle(String),
}

/// Failures raised while reading the pages and links files
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("{path}:{line}: {reason}")]
    Malformed {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl IngestError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IngestError::Io {
            source,
            path: path.into(),
        }
    }
}
