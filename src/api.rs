// HTTP module: a small blocking client that performs the single GET for
// the logo. Synchronous on purpose; the whole tool does one request.

use crate::error::FetchError;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

/// Total time allowed for the request, including reading the body.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// What came back from the server: the raw bytes and the Content-Type
/// header, if it was present and valid text.
#[derive(Debug, Clone)]
pub struct FetchedImage {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

/// Thin wrapper over a reqwest blocking client.
#[derive(Clone)]
pub struct LogoClient {
    client: Client,
}

impl LogoClient {
    /// Build a client with the default 30 second timeout.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FetchError::Client)?;
        Ok(LogoClient { client })
    }

    /// Wrap an already configured client (tests use this to bypass proxies).
    pub fn from_client(client: Client) -> Self {
        LogoClient { client }
    }

    /// GET `url`. Any non-2xx status is an error; redirects are followed.
    pub fn fetch(&self, url: &str) -> Result<FetchedImage, FetchError> {
        tracing::debug!("GET {}", url);
        let res = self
            .client
            .get(url)
            .send()
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = res.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let content_type = res
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let bytes = res.bytes().map_err(|source| FetchError::Body {
            url: url.to_string(),
            source,
        })?;

        tracing::info!(
            "fetched {} bytes from {} (status {}, content-type {:?})",
            bytes.len(),
            url,
            status,
            content_type
        );
        Ok(FetchedImage {
            bytes: bytes.to_vec(),
            content_type,
        })
    }
}
