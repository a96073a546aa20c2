//! Error contexts for the adapter.
//!
//! Processor-level failures (a non-zero `DS_ERROR_ID`) are not errors in this
//! taxonomy; they come back as a failed [`crate::types::OperationResult`].
//! These contexts cover local validation, encoding/decoding and transport
//! problems only.

use thiserror::Error;

/// Result type carrying an [`error_stack::Report`] as its error.
pub type CustomResult<T, E> = error_stack::Result<T, E>;

/// Failures raised by the client before, during or after a Bankstore
/// exchange.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Missing required field: {field_name}")]
    MissingRequiredField { field_name: &'static str },
    #[error("Invalid data format for field: {field_name}")]
    InvalidDataFormat { field_name: &'static str },
    #[error("Unknown currency: {0}")]
    InvalidCurrency(String),
    #[error("Failed to encode bankstore request")]
    RequestEncodingFailed,
    #[error("Failed to deserialize bankstore response")]
    ResponseDeserializationFailed,
    #[error("Failed to communicate with PAYCOMET")]
    NetworkFailure,
}

/// Failures raised by a [`crate::transport::Transport`] implementation.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Failed to construct the outgoing request")]
    RequestConstructionFailed,
    #[error("Failed to send the request")]
    SendFailed,
    #[error("Unexpected HTTP status: {status_code}")]
    UnexpectedStatus { status_code: u16 },
    #[error("Failed to read the response body")]
    BodyReadFailed,
}
