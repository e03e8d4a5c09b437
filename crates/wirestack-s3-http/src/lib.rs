//! S3 REST-XML client codecs.
//!
//! This crate turns the typed inputs of `wirestack-s3-model` into HTTP
//! requests and HTTP responses back into typed outputs:
//!
//! - [`marshall`]: [`IntoS3Request`] for every operation input
//! - [`unmarshall`]: [`FromS3Response`] for every operation output
//! - [`error`]: marshalling and client errors, `<Error>` response parsing
//! - [`endpoint`]: virtual-hosted-style and path-style URI resolution
//! - [`config`]: client configuration loaded from the environment
//! - [`integrity`]: Content-MD5 checks of uploads and downloads against ETags
//! - [`client`]: [`S3Client`] over an injected [`HttpTransport`], with
//!   verified transfers, existence checks and listing pagination
//!
//! # Request flow
//!
//! ```text
//! *Input --IntoS3Request--> MarshalledRequest --S3Endpoint--> http::Request
//!                                                                  |
//!                                                            HttpTransport
//!                                                                  |
//! *Output <--FromS3Response-- status / <Error> check <-- http::Response
//! ```

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod integrity;
pub mod marshall;
pub mod unmarshall;

pub use client::{HttpTransport, S3Client, S3Request, output_to_json};
pub use config::S3ClientConfig;
pub use endpoint::{S3Endpoint, is_dns_compatible};
pub use error::{MarshallError, S3ClientError, TransportError, parse_error_response};
pub use integrity::Transfer;
pub use marshall::{IntoS3Request, MarshalledRequest};
pub use unmarshall::{FromS3Response, from_http_response};
