//! Query-protocol response unmarshalling.
//!
//! Successful responses wrap the result in two elements:
//!
//! ```xml
//! <GetSessionTokenResponse>
//!   <GetSessionTokenResult>...</GetSessionTokenResult>
//!   <ResponseMetadata><RequestId>...</RequestId></ResponseMetadata>
//! </GetSessionTokenResponse>
//! ```
//!
//! The result is read from the root's `*Result` child only, so members of
//! `ResponseMetadata` never leak into it; the request id is read in a
//! separate pass.

use serde::Serialize;
use tracing::debug;
use wirestack_xml::unmarshall::read_struct;
use wirestack_xml::{StaxUnmarshall, StaxUnmarshallerContext, XmlError, from_xml};

use crate::error::{QueryError, QueryServiceError};

/// A parsed result together with the response's request id.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QueryResponse<T> {
    /// The `<XResult>` contents.
    pub result: T,
    /// `ResponseMetadata/RequestId`.
    pub request_id: Option<String>,
}

#[derive(Debug, Default)]
struct ResponseMetadata {
    request_id: Option<String>,
}

wirestack_xml::stax_struct!(ResponseMetadata {
    "ResponseMetadata/RequestId" => opt request_id,
});

/// The `<XResult>` child of an `<XResponse>` root.
#[derive(Debug, Default)]
struct ResultElement<T> {
    result: T,
}

impl<T: StaxUnmarshall + Default> StaxUnmarshall for ResultElement<T> {
    fn unmarshall(ctx: &mut StaxUnmarshallerContext<'_>) -> Result<Self, XmlError> {
        read_struct(ctx, |element: &mut Self, ctx, depth| {
            let is_result = ctx.current_depth() == depth
                && ctx
                    .current_element()
                    .is_some_and(|name| name.ends_with("Result"));
            if is_result {
                element.result = T::unmarshall(ctx)?;
            }
            Ok(is_result)
        })
    }
}

/// Parse a query-protocol response body.
///
/// A response without a `*Result` element (metadata only) yields
/// `T::default()`.
///
/// # Errors
///
/// Returns [`QueryError::Service`] for statuses of 300 and above and
/// [`QueryError::Xml`] when the body cannot be read.
pub fn parse_query_response<T: StaxUnmarshall + Default>(
    status: u16,
    body: &[u8],
) -> Result<QueryResponse<T>, QueryError> {
    debug!(status, len = body.len(), "unmarshalling query response");
    if status >= 300 {
        return Err(QueryError::Service(parse_error_response(status, body)));
    }
    let element: ResultElement<T> = from_xml(body)?;
    let metadata: ResponseMetadata = from_xml(body)?;
    Ok(QueryResponse {
        result: element.result,
        request_id: metadata.request_id,
    })
}

/// Parse an `<ErrorResponse>` body, falling back to the status alone when the
/// body is empty or not XML.
#[must_use]
pub fn parse_error_response(status: u16, body: &[u8]) -> QueryServiceError {
    let parsed = if body.iter().all(u8::is_ascii_whitespace) {
        QueryServiceError::default()
    } else {
        from_xml::<QueryServiceError>(body).unwrap_or_else(|e| {
            debug!(status, error = %e, "query error body is not XML");
            QueryServiceError::default()
        })
    };
    QueryServiceError { status, ..parsed }
}
