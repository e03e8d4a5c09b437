//! S3 service errors as reported by the server.

use std::fmt;

use http::StatusCode;

macro_rules! s3_error_codes {
    ($($name:ident),+ $(,)?) => {
        /// S3 error codes known to this crate.
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        pub enum S3ErrorCode {
            $(
                #[doc = concat!("`", stringify!($name), "`")]
                $name,
            )+
            /// Any other code, kept verbatim.
            Other(String),
        }

        impl S3ErrorCode {
            /// Returns the error code as sent on the wire.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$name => stringify!($name),)+
                    Self::Other(s) => s.as_str(),
                }
            }
        }

        impl From<&str> for S3ErrorCode {
            fn from(s: &str) -> Self {
                match s {
                    $(stringify!($name) => Self::$name,)+
                    other => Self::Other(other.to_owned()),
                }
            }
        }
    };
}

s3_error_codes! {
    AccessDenied,
    AccountProblem,
    BadDigest,
    BadRequest,
    BucketAlreadyExists,
    BucketAlreadyOwnedByYou,
    BucketNotEmpty,
    EntityTooLarge,
    EntityTooSmall,
    ExpiredToken,
    Forbidden,
    IllegalLocationConstraintException,
    InternalError,
    InvalidAccessKeyId,
    InvalidArgument,
    InvalidBucketName,
    InvalidBucketState,
    InvalidDigest,
    InvalidLocationConstraint,
    InvalidObjectState,
    InvalidPart,
    InvalidPartOrder,
    InvalidRange,
    InvalidRequest,
    InvalidStorageClass,
    KeyTooLongError,
    MalformedXML,
    MetadataTooLarge,
    MethodNotAllowed,
    MissingContentLength,
    MovedPermanently,
    NoSuchBucket,
    NoSuchBucketPolicy,
    NoSuchCORSConfiguration,
    NoSuchKey,
    NoSuchLifecycleConfiguration,
    NoSuchObjectLockConfiguration,
    NoSuchPublicAccessBlockConfiguration,
    NoSuchTagSet,
    NoSuchUpload,
    NoSuchVersion,
    NoSuchWebsiteConfiguration,
    NotFound,
    NotImplemented,
    NotModified,
    OwnershipControlsNotFoundError,
    PermanentRedirect,
    PreconditionFailed,
    ReplicationConfigurationNotFoundError,
    RequestTimeTooSkewed,
    ServerSideEncryptionConfigurationNotFoundError,
    ServiceUnavailable,
    SignatureDoesNotMatch,
    SlowDown,
    TemporaryRedirect,
    TooManyBuckets,
}

impl S3ErrorCode {
    /// Code S3 implies by a status when the response has no error body.
    ///
    /// HEAD responses never carry a body, so this is the only source of a
    /// code for them.
    #[must_use]
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::MOVED_PERMANENTLY => Self::MovedPermanently,
            StatusCode::NOT_MODIFIED => Self::NotModified,
            StatusCode::TEMPORARY_REDIRECT => Self::TemporaryRedirect,
            StatusCode::PERMANENT_REDIRECT => Self::PermanentRedirect,
            StatusCode::BAD_REQUEST => Self::BadRequest,
            StatusCode::FORBIDDEN => Self::Forbidden,
            StatusCode::NOT_FOUND => Self::NotFound,
            StatusCode::METHOD_NOT_ALLOWED => Self::MethodNotAllowed,
            StatusCode::PRECONDITION_FAILED => Self::PreconditionFailed,
            StatusCode::RANGE_NOT_SATISFIABLE => Self::InvalidRange,
            StatusCode::NOT_IMPLEMENTED => Self::NotImplemented,
            StatusCode::SERVICE_UNAVAILABLE => Self::ServiceUnavailable,
            StatusCode::INTERNAL_SERVER_ERROR => Self::InternalError,
            other => Self::Other(other.as_u16().to_string()),
        }
    }
}

impl fmt::Display for S3ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error returned by S3.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct S3Error {
    /// The error code.
    pub code: S3ErrorCode,
    /// Human-readable message, when S3 sent one.
    pub message: Option<String>,
    /// The resource the error refers to.
    pub resource: Option<String>,
    /// `RequestId` element or `x-amz-request-id` header.
    pub request_id: Option<String>,
    /// `HostId` element or `x-amz-id-2` header.
    pub host_id: Option<String>,
    /// Bucket named in the error body.
    pub bucket_name: Option<String>,
    /// Object key named in the error body.
    pub key: Option<String>,
    /// Region named in the error body (redirects).
    pub region: Option<String>,
    /// The HTTP status code of the response.
    pub status_code: StatusCode,
}

impl S3Error {
    /// Create an error carrying only a code and status.
    #[must_use]
    pub fn new(code: S3ErrorCode, status_code: StatusCode) -> Self {
        Self {
            code,
            message: None,
            resource: None,
            request_id: None,
            host_id: None,
            bucket_name: None,
            key: None,
            region: None,
            status_code,
        }
    }

    /// Create an error for a response that carried no error body.
    #[must_use]
    pub fn from_status(status_code: StatusCode) -> Self {
        Self::new(S3ErrorCode::from_status(status_code), status_code)
    }

    /// Set the message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Set the request ID.
    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Set the host ID.
    #[must_use]
    pub fn with_host_id(mut self, host_id: impl Into<String>) -> Self {
        self.host_id = Some(host_id.into());
        self
    }
}

impl fmt::Display for S3Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S3Error({}, {})", self.code, self.status_code.as_u16())?;
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        Ok(())
    }
}

impl std::error::Error for S3Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_parse_known_and_unknown_codes() {
        assert_eq!(S3ErrorCode::from("NoSuchKey"), S3ErrorCode::NoSuchKey);
        assert_eq!(
            S3ErrorCode::from("InvalidTag"),
            S3ErrorCode::Other("InvalidTag".to_owned())
        );
        assert_eq!(S3ErrorCode::Other("InvalidTag".to_owned()).as_str(), "InvalidTag");
    }

    #[test]
    fn test_should_derive_code_from_status() {
        assert_eq!(S3ErrorCode::from_status(StatusCode::NOT_FOUND), S3ErrorCode::NotFound);
        assert_eq!(S3ErrorCode::from_status(StatusCode::FORBIDDEN), S3ErrorCode::Forbidden);
        assert_eq!(
            S3ErrorCode::from_status(StatusCode::MOVED_PERMANENTLY),
            S3ErrorCode::MovedPermanently
        );
        assert_eq!(
            S3ErrorCode::from_status(StatusCode::IM_A_TEAPOT),
            S3ErrorCode::Other("418".to_owned())
        );
    }

    #[test]
    fn test_should_display_code_status_and_message() {
        let err = S3Error::new(S3ErrorCode::NoSuchBucket, StatusCode::NOT_FOUND)
            .with_message("The specified bucket does not exist");
        assert_eq!(
            err.to_string(),
            "S3Error(NoSuchBucket, 404): The specified bucket does not exist"
        );
        assert_eq!(S3Error::from_status(StatusCode::FORBIDDEN).to_string(), "S3Error(Forbidden, 403)");
    }
}
