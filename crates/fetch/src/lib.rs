//! Content identifier validation and contract document retrieval from an
//! IPFS-compatible content store.
//!
//! Identifiers are validated with the [`cid`] crate before any network
//! access. Retrieval is a single `cat` round-trip against the store's HTTP
//! API via [`reqwest`]; retries, caching and timeouts are the caller's
//! concern.

#![deny(missing_docs)]
#![deny(unsafe_code)]

use cid::Cid;
use thiserror::Error;

/// Connection details for the content store's HTTP API.
///
/// Passed explicitly at every call site. There is no process-wide default.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StoreConfig {
    /// Store API host name.
    pub host: String,
    /// Store API port.
    pub port: u16,
    /// URL scheme, `https` for the reference configuration.
    pub protocol: String,
}

impl StoreConfig {
    /// The reference configuration: the Infura IPFS gateway.
    pub fn infura() -> Self {
        Self {
            host: "ipfs.infura.io".to_string(),
            port: 5001,
            protocol: "https".to_string(),
        }
    }

    fn cat_url(&self, cid: &str) -> String {
        format!(
            "{}://{}:{}/api/v0/cat?arg={}",
            self.protocol, self.host, self.port, cid
        )
    }
}

/// A string or byte sequence that did not decode as a content identifier.
#[derive(Debug, Error)]
#[error("Invalid CID")]
pub struct InvalidContentId;

/// [`cat`] error.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The identifier did not decode as a CID.
    #[error("{0}")]
    InvalidContentId(#[from] InvalidContentId),
    /// The store transport failed.
    #[error("content store request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The store answered with a non-success status.
    #[error("content store returned status {0}")]
    Status(reqwest::StatusCode),
    /// The fetched document was not valid UTF-8 text.
    #[error("fetched content is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Whether a string decodes as a content identifier (CID v0 or v1).
///
/// Never errors; every decode failure collapses to `false`.
pub fn is_content_id(s: &str) -> bool {
    Cid::try_from(s).is_ok()
}

/// Whether a byte sequence decodes as a binary content identifier.
pub fn is_content_id_bytes(bytes: &[u8]) -> bool {
    Cid::try_from(bytes).is_ok()
}

/// Extract a content identifier from the final segment of a URL path.
///
/// The store redirects append the CID as the last path segment.
pub fn content_id_from_path(path: &str) -> Result<String, InvalidContentId> {
    let candidate = path.rsplit('/').next().unwrap_or(path);
    if is_content_id(candidate) {
        Ok(candidate.to_string())
    } else {
        Err(InvalidContentId)
    }
}

/// Fetch the full content behind `cid` from the store and decode it as
/// UTF-8 text.
///
/// The identifier is validated before any network access. The body is
/// collected in full; there is no partial success.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(config), err))]
pub async fn cat(cid: &str, config: &StoreConfig) -> Result<String, FetchError> {
    if !is_content_id(cid) {
        return Err(InvalidContentId.into());
    }
    let client = reqwest::Client::new();
    let response = client.post(config.cat_url(cid)).send().await?;
    if !response.status().is_success() {
        return Err(FetchError::Status(response.status()));
    }
    let bytes = response.bytes().await?;
    Ok(String::from_utf8(bytes.to_vec())?)
}
