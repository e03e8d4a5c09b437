//! Object listing operations.

use serde::Serialize;

use crate::enums::{EncodingType, RequestCharged};
use crate::types::{CommonPrefix, DeleteMarkerEntry, Object, ObjectVersion};

/// Output of ListObjects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListObjectsOutput {
    pub name: Option<String>,
    pub prefix: Option<String>,
    pub marker: Option<String>,
    pub next_marker: Option<String>,
    pub max_keys: Option<i32>,
    pub delimiter: Option<String>,
    pub is_truncated: Option<bool>,
    pub contents: Vec<Object>,
    pub common_prefixes: Vec<CommonPrefix>,
    pub encoding_type: Option<EncodingType>,
    /// HTTP header: `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
}

/// Output of ListObjectsV2.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListObjectsV2Output {
    pub name: Option<String>,
    pub prefix: Option<String>,
    pub max_keys: Option<i32>,
    pub key_count: Option<i32>,
    pub delimiter: Option<String>,
    pub is_truncated: Option<bool>,
    pub contents: Vec<Object>,
    pub common_prefixes: Vec<CommonPrefix>,
    pub encoding_type: Option<EncodingType>,
    pub continuation_token: Option<String>,
    pub next_continuation_token: Option<String>,
    pub start_after: Option<String>,
    /// HTTP header: `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
}

/// Output of ListObjectVersions.
///
/// S3 interleaves `Version` and `DeleteMarker` entries in key order; they
/// are split into two lists, each keeping its relative order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListObjectVersionsOutput {
    pub name: Option<String>,
    pub prefix: Option<String>,
    pub key_marker: Option<String>,
    pub version_id_marker: Option<String>,
    pub next_key_marker: Option<String>,
    pub next_version_id_marker: Option<String>,
    pub max_keys: Option<i32>,
    pub delimiter: Option<String>,
    pub is_truncated: Option<bool>,
    pub versions: Vec<ObjectVersion>,
    pub delete_markers: Vec<DeleteMarkerEntry>,
    pub common_prefixes: Vec<CommonPrefix>,
    pub encoding_type: Option<EncodingType>,
    /// HTTP header: `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
}
