//! Response decoding for the inspect commands.

use anyhow::{Context, Result, bail};
use bytes::Bytes;
use serde::Serialize;
use tracing::debug;
use wirestack_query::sqs::{
    GetQueueAttributesResult, SendMessageBatchResult, SetQueueAttributesResult,
};
use wirestack_query::sts::{AssumeRoleResult, AssumeRoleWithSamlResult, GetSessionTokenResult};
use wirestack_query::{QueryError, QueryResponse, parse_query_response};
use wirestack_s3_http::{S3ClientError, output_to_json};
use wirestack_s3_model::operations::S3Operation;

/// Query-protocol actions the inspector understands.
pub const QUERY_ACTIONS: &[&str] = &[
    "AssumeRole",
    "AssumeRoleWithSAML",
    "GetSessionToken",
    "GetQueueAttributes",
    "SetQueueAttributes",
    "SendMessageBatch",
];

/// Split a `Name: value` header argument.
pub fn parse_header(raw: &str) -> Result<(String, String)> {
    let Some((name, value)) = raw.split_once(':') else {
        bail!("header '{raw}' is not in 'Name: value' form");
    };
    Ok((name.trim().to_owned(), value.trim().to_owned()))
}

/// Decode a saved S3 response as the output of `operation`.
pub fn decode_s3(
    operation: &str,
    status: u16,
    headers: &[(String, String)],
    body: Bytes,
) -> Result<serde_json::Value> {
    let Some(op) = S3Operation::from_name(operation) else {
        bail!("unknown S3 operation '{operation}'");
    };
    let mut builder = http::Response::builder().status(status);
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    let response = builder
        .body(body)
        .context("failed to assemble HTTP response")?;
    debug!(operation = %op, status, "decoding S3 response");

    match output_to_json(op, response) {
        Ok(json) => Ok(json),
        Err(S3ClientError::Service(err)) => Ok(serde_json::json!({ "error": err.to_string() })),
        Err(e) => Err(e).with_context(|| format!("failed to decode {op} response")),
    }
}

/// Decode a saved query-protocol response for `action`.
pub fn decode_query(action: &str, status: u16, body: &[u8]) -> Result<serde_json::Value> {
    debug!(action, status, "decoding query response");
    let decoded = match action {
        "AssumeRole" => to_json(parse_query_response::<AssumeRoleResult>(status, body)),
        "AssumeRoleWithSAML" => {
            to_json(parse_query_response::<AssumeRoleWithSamlResult>(status, body))
        }
        "GetSessionToken" => to_json(parse_query_response::<GetSessionTokenResult>(status, body)),
        "GetQueueAttributes" => {
            to_json(parse_query_response::<GetQueueAttributesResult>(status, body))
        }
        "SetQueueAttributes" => {
            to_json(parse_query_response::<SetQueueAttributesResult>(status, body))
        }
        "SendMessageBatch" => to_json(parse_query_response::<SendMessageBatchResult>(status, body)),
        other => bail!(
            "unknown query action '{other}', expected one of: {}",
            QUERY_ACTIONS.join(", ")
        ),
    };
    decoded.with_context(|| format!("failed to decode {action} response"))
}

fn to_json<T: Serialize>(
    response: Result<QueryResponse<T>, QueryError>,
) -> Result<serde_json::Value> {
    match response {
        Ok(response) => Ok(serde_json::to_value(response)?),
        Err(QueryError::Service(err)) => Ok(serde_json::json!({ "error": err })),
        Err(e) => Err(e.into()),
    }
}
