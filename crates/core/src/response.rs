//! Status gate and body decoding for records endpoint responses

use serde::{Deserialize, Serialize};

use crate::colors::Disposition;

/// Record as returned by the records endpoint
///
/// `color` stays a raw string so records with colors outside the known table
/// still decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: u64,
    pub color: String,
    pub disposition: Disposition,
}

/// Non-success status returned by the endpoint
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} (HTTP {status})")]
pub struct HttpError {
    pub status: u16,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
#[error("Failed to decode records: {0}")]
pub struct DecodeError(#[from] serde_json::Error);

/// Classify a response status before the body is looked at.
///
/// Any status below 400 passes.
pub fn check_status(status: u16, endpoint: &str) -> Result<(), HttpError> {
    if status < 400 {
        return Ok(());
    }

    Err(HttpError {
        status,
        message: format!("Request to {endpoint} failed"),
    })
}

/// Decode a response body as a sequence of records
pub fn decode_records(body: &[u8]) -> Result<Vec<Record>, DecodeError> {
    Ok(serde_json::from_slice(body)?)
}
