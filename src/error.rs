use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to open packet log {path}: {source}")]
    OpenLog { path: PathBuf, source: io::Error },

    #[error("failed to write packet log {path}: {source}")]
    WriteLog { path: PathBuf, source: io::Error },

    #[error("packet log sink is poisoned by a panicked writer")]
    SinkPoisoned,
}

pub type Result<T> = std::result::Result<T, Error>;
