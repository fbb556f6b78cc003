use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SelfPlayError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown engine spec {0:?} (expected alphabeta[:depth] or random[:seed])")]
    UnknownEngine(String),
}
