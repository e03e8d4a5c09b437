//! AWS query-protocol codecs.
//!
//! Requests are flat `key=value` lists built with a [`QueryWriter`] and sent
//! as form-urlencoded POST bodies; responses are `<XResponse><XResult>`
//! documents read with the depth-tracking unmarshallers of `wirestack-xml`.
//!
//! - [`writer`]: parameter encoding and [`QueryMarshall`]
//! - [`response`]: result and `<ErrorResponse>` parsing
//! - [`sts`]: `AssumeRole`, `AssumeRoleWithSAML`, `GetSessionToken`
//! - [`sqs`]: `GetQueueAttributes`, `SetQueueAttributes`, `SendMessageBatch`
//!
//! ```
//! use wirestack_query::QueryMarshall;
//! use wirestack_query::sts::GetSessionTokenRequest;
//!
//! let request = GetSessionTokenRequest {
//!     duration_seconds: Some(900),
//!     ..Default::default()
//! }
//! .marshall();
//! assert_eq!(
//!     request.body(),
//!     "Action=GetSessionToken&Version=2011-06-15&DurationSeconds=900"
//! );
//! ```

pub mod error;
pub mod response;
pub mod sqs;
pub mod sts;
pub mod writer;

pub use error::{QueryError, QueryServiceError};
pub use response::{QueryResponse, parse_error_response, parse_query_response};
pub use writer::{ListStyle, MapStyle, QueryMarshall, QueryRequest, QueryValue, QueryWriter};
