//! Query-protocol errors.

use std::fmt;

use serde::Serialize;
use wirestack_xml::XmlError;

/// A service error parsed from an `<ErrorResponse>` body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryServiceError {
    /// `Sender` or `Receiver`.
    pub error_type: Option<String>,
    /// Error code, e.g. `AccessDenied`.
    pub code: Option<String>,
    /// Human-readable message.
    pub message: Option<String>,
    /// Request id.
    pub request_id: Option<String>,
    /// HTTP status code of the response.
    pub status: u16,
}

wirestack_xml::stax_struct!(QueryServiceError {
    "Error/Type" => opt error_type,
    "Error/Code" => opt code,
    "Error/Message" => opt message,
    "RequestId" => opt request_id,
});

impl fmt::Display for QueryServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (HTTP {})",
            self.code.as_deref().unwrap_or("Unknown"),
            self.status
        )?;
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        Ok(())
    }
}

impl std::error::Error for QueryServiceError {}

/// Errors raised by the query-protocol codecs.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// The response body could not be unmarshalled.
    #[error("XML error: {0}")]
    Xml(#[from] XmlError),

    /// The service returned an `<ErrorResponse>`.
    #[error("service error: {0}")]
    Service(QueryServiceError),

    /// The HTTP request could not be built.
    #[error("HTTP error: {0}")]
    Http(#[from] http::Error),
}
