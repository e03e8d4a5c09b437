//! Client-side errors and S3 error-response parsing.

use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use tracing::debug;
use wirestack_s3_model::error::{S3Error, S3ErrorCode};
use wirestack_xml::{ErrorResponse, XmlError, from_xml};

use crate::integrity::Transfer;

/// Boxed error returned by an [`HttpTransport`](crate::client::HttpTransport).
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// Errors raised while turning an input into an HTTP request.
#[derive(Debug, thiserror::Error)]
pub enum MarshallError {
    /// A required URI label or copy source was empty.
    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),

    /// A header value could not be represented in HTTP.
    #[error("invalid value for header {name}: {reason}")]
    InvalidHeader {
        /// Header name.
        name: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// The endpoint URL is not absolute.
    #[error("invalid endpoint '{0}': expected an absolute URL such as https://s3.amazonaws.com")]
    InvalidEndpoint(String),

    /// The XML payload could not be written.
    #[error("XML serialization failed: {0}")]
    Xml(#[from] XmlError),

    /// The HTTP request could not be assembled.
    #[error("failed to build HTTP request: {0}")]
    Http(#[from] http::Error),
}

/// Errors returned by [`S3Client`](crate::client::S3Client) calls.
#[derive(Debug, thiserror::Error)]
pub enum S3ClientError {
    /// The request could not be marshalled.
    #[error(transparent)]
    Marshall(#[from] MarshallError),

    /// S3 answered with an error.
    #[error("{0}")]
    Service(S3Error),

    /// The response body was not the expected XML.
    #[error("failed to parse response XML: {0}")]
    Xml(#[from] XmlError),

    /// The transport failed to deliver the request.
    #[error("transport error: {0}")]
    Transport(#[source] TransportError),

    /// The response was well-formed but unusable.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// The MD5 of the transferred data did not match the returned ETag.
    #[error(
        "Unable to verify integrity of data {transfer}: client calculated content hash \
         {client_md5} didn't match ETag {etag} returned by Amazon S3"
    )]
    Integrity {
        /// Direction of the transfer.
        transfer: Transfer,
        /// Base64 MD5 computed by the client.
        client_md5: String,
        /// ETag returned by S3.
        etag: String,
    },
}

impl From<S3Error> for S3ClientError {
    fn from(error: S3Error) -> Self {
        Self::Service(error)
    }
}

impl S3ClientError {
    /// The service error, if S3 returned one.
    #[must_use]
    pub fn service_error(&self) -> Option<&S3Error> {
        match self {
            Self::Service(e) => Some(e),
            _ => None,
        }
    }
}

/// Build the [`S3Error`] for an error response.
///
/// The `<Error>` body supplies the code and details; when it is empty (HEAD)
/// or not XML, the code is derived from the status. `x-amz-request-id` and
/// `x-amz-id-2` fill the ids the body lacks.
#[must_use]
pub fn parse_error_response(status: StatusCode, headers: &HeaderMap, body: &Bytes) -> S3Error {
    let parsed = if body.is_empty() {
        None
    } else {
        match from_xml::<ErrorResponse>(body) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                debug!(status = status.as_u16(), error = %e, "error body is not XML");
                None
            }
        }
    };

    let mut error = S3Error::from_status(status);
    if let Some(parsed) = parsed {
        if let Some(code) = parsed.code.as_deref() {
            error.code = S3ErrorCode::from(code);
        }
        error.message = parsed.message;
        error.resource = parsed.resource;
        error.request_id = parsed.request_id;
        error.host_id = parsed.host_id;
        error.bucket_name = parsed.bucket_name;
        error.key = parsed.key;
        error.region = parsed.region;
    }

    if error.request_id.is_none() {
        error.request_id = header_value(headers, "x-amz-request-id");
    }
    if error.host_id.is_none() {
        error.host_id = header_value(headers, "x-amz-id-2");
    }
    error
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToOwned::to_owned)
}
