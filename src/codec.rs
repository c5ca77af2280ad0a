//! Base64 transport encoding for source images.

use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use tracing::debug;

use crate::utils::{StudioError, StudioResult};

/// Reads `path` fully into memory and resolves to the bare base64 payload.
///
/// The payload is recomputed on every call; nothing is cached between
/// dispatches. A read failure is an error the caller must propagate — no
/// default payload is ever substituted.
pub async fn encode_file(path: &Path) -> StudioResult<String> {
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        StudioError::encoding(format!("Failed to read {}: {}", path.display(), e))
    })?;
    debug!("Encoding {} bytes from {}", bytes.len(), path.display());
    Ok(STANDARD.encode(&bytes))
}

/// Strips a `data:` URI scheme prefix from a payload.
///
/// Returns the portion after the first comma; payloads without a scheme pass
/// through unchanged.
pub fn strip_data_uri(payload: &str) -> &str {
    if payload.starts_with("data:") {
        payload
            .split_once(',')
            .map(|(_, rest)| rest)
            .unwrap_or(payload)
    } else {
        payload
    }
}

/// Decodes a base64 payload back to bytes, ignoring any data-URI scheme.
pub fn decode(payload: &str) -> StudioResult<Vec<u8>> {
    STANDARD
        .decode(strip_data_uri(payload))
        .map_err(|e| StudioError::encoding(format!("Invalid base64 payload: {}", e)))
}
