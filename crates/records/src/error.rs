use records_core::query::QueryError;
use records_core::response::{DecodeError, HttpError};

use crate::transport::TransportError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] QueryError),

    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("Configuration error: {0}")]
    Config(String),
}
