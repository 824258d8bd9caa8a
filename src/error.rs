// Error types for the two pipeline stages. Stage 1 (fetch + save) errors
// are fatal; stage 2 (config write) errors are reported and swallowed.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure while downloading the logo or writing it under `assets/`.
#[derive(Debug, Error)]
pub enum FetchError {
    /// DNS, connect, TLS, timeout or any other transport-level failure.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status.
    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The connection dropped (or timed out) while reading the body.
    #[error("failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to create assets directory {}: {source}", path.display())]
    CreateAssetsDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    WriteAsset {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Failure while writing config.json back to disk.
#[derive(Debug, Error)]
pub enum ConfigWriteError {
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
