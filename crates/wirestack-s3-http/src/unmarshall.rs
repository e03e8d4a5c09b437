//! HTTP response to S3 Output struct deserialization.
//!
//! This module provides the [`FromS3Response`] trait and implementations for
//! every S3 output type. Header members are read from the response headers,
//! XML members through the [`StaxUnmarshall`] implementations in
//! `wirestack-xml`, and payload members (object data, bucket policy JSON) are
//! taken from the raw body.

use std::collections::HashMap;
use std::str::FromStr;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use http::HeaderMap;
use http::response::Parts;
use percent_encoding::percent_decode_str;
use tracing::{debug, warn};
use wirestack_s3_model::enums::EncodingType;
use wirestack_s3_model::operations::S3Operation;
use wirestack_s3_model::request::StreamingBlob;
use wirestack_s3_model::types::{CommonPrefix, Object};
use wirestack_xml::time::parse_timestamp;
use wirestack_xml::{StaxUnmarshall, StaxUnmarshallerContext, XmlEvent, from_xml};

use crate::error::{S3ClientError, parse_error_response};

/// Trait for building an S3 output struct from an HTTP response.
pub trait FromS3Response: Sized {
    /// Unmarshal a successful response.
    ///
    /// # Errors
    ///
    /// Returns [`S3ClientError::Xml`] if the body is not the expected XML, or
    /// [`S3ClientError::InvalidResponse`] if a payload cannot be represented.
    fn from_s3_response(parts: &Parts, body: Bytes) -> Result<Self, S3ClientError>;
}

/// Turn a raw HTTP response into the output of `operation`.
///
/// Any status of 300 or above is an S3 error. CompleteMultipartUpload,
/// CopyObject and UploadPartCopy can also report an error inside a 200
/// response, which is detected by the `<Error>` root element.
///
/// # Errors
///
/// Returns [`S3ClientError::Service`] for S3 errors, or the errors of
/// [`FromS3Response::from_s3_response`].
pub fn from_http_response<T: FromS3Response>(
    operation: S3Operation,
    response: http::Response<Bytes>,
) -> Result<T, S3ClientError> {
    let (parts, body) = response.into_parts();
    debug!(
        operation = %operation,
        status = parts.status.as_u16(),
        body_len = body.len(),
        "unmarshalling S3 response"
    );

    if parts.status.as_u16() >= 300 {
        return Err(parse_error_response(parts.status, &parts.headers, &body).into());
    }
    if reports_error_in_body(operation) && root_element(&body).as_deref() == Some("Error") {
        return Err(parse_error_response(parts.status, &parts.headers, &body).into());
    }

    T::from_s3_response(&parts, body)
}

fn reports_error_in_body(operation: S3Operation) -> bool {
    matches!(
        operation,
        S3Operation::CompleteMultipartUpload
            | S3Operation::CopyObject
            | S3Operation::UploadPartCopy
    )
}

/// Name of the root element of `body`, if it is XML.
fn root_element(body: &Bytes) -> Option<String> {
    let mut ctx = StaxUnmarshallerContext::new(body);
    loop {
        match ctx.next_event().ok()? {
            XmlEvent::StartElement { name, .. } => return Some(name),
            XmlEvent::EndDocument => return None,
            XmlEvent::EndElement(_) | XmlEvent::Text(_) => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Header helpers
// ---------------------------------------------------------------------------

/// Extract a header value as a string.
fn header_str(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToOwned::to_owned)
}

/// Extract a header value and parse it with `FromStr`, dropping bad values.
fn header_parse<T: FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
    let value = headers.get(name)?.to_str().ok()?;
    match value.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!(header = name, value, "dropping unparseable header value");
            None
        }
    }
}

/// Extract a header value as a boolean (`true`/`false`, case-insensitive).
fn header_bool(headers: &HeaderMap, name: &str) -> Option<bool> {
    let value = headers.get(name)?.to_str().ok()?;
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        warn!(header = name, value, "dropping unparseable header value");
        None
    }
}

/// Extract a timestamp header in HTTP-date or ISO-8601 form.
fn header_timestamp(headers: &HeaderMap, name: &str) -> Option<DateTime<Utc>> {
    let value = headers.get(name)?.to_str().ok()?;
    match parse_timestamp(value) {
        Ok(dt) => Some(dt),
        Err(e) => {
            warn!(header = name, value, error = %e, "dropping unparseable header value");
            None
        }
    }
}

/// Extract a header value and convert it using `From<&str>` (for enum types).
fn header_enum<T>(headers: &HeaderMap, name: &str) -> Option<T>
where
    T: for<'a> From<&'a str>,
{
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|s| T::from(s.trim()))
}

/// Collect `x-amz-meta-*` headers into a metadata map keyed by the suffix.
fn collect_metadata(headers: &HeaderMap) -> HashMap<String, String> {
    headers
        .iter()
        .filter_map(|(name, value)| {
            let key = name.as_str().strip_prefix("x-amz-meta-")?;
            Some((key.to_owned(), value.to_str().ok()?.to_owned()))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Body helpers
// ---------------------------------------------------------------------------

/// Unmarshal an XML body; an empty body yields the default value.
fn xml_body<T: StaxUnmarshall + Default>(body: &Bytes) -> Result<T, S3ClientError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    Ok(from_xml(body)?)
}

/// Unmarshal an XML body holding a single nested member.
fn optional_xml_body<T: StaxUnmarshall>(body: &Bytes) -> Result<Option<T>, S3ClientError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    Ok(Some(from_xml(body)?))
}

/// Undo `encoding-type=url` escaping of a listing value.
fn url_decode(value: &mut Option<String>) {
    if let Some(v) = value.as_mut() {
        let plus_decoded = v.replace('+', " ");
        if let Ok(decoded) = percent_decode_str(&plus_decoded).decode_utf8() {
            *v = decoded.into_owned();
        }
    }
}

fn url_decode_common(contents: &mut [Object], common_prefixes: &mut [CommonPrefix]) {
    for object in contents {
        url_decode(&mut object.key);
    }
    for prefix in common_prefixes {
        url_decode(&mut prefix.prefix);
    }
}

fn is_url_encoded(encoding_type: Option<&EncodingType>) -> bool {
    matches!(encoding_type, Some(EncodingType::Url))
}

// ---------------------------------------------------------------------------
// Macros for outputs that carry only headers
// ---------------------------------------------------------------------------

/// Implement `FromS3Response` for an output whose only member is
/// `x-amz-request-charged`.
macro_rules! impl_request_charged_output {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl FromS3Response for $ty {
                fn from_s3_response(parts: &Parts, _body: Bytes) -> Result<Self, S3ClientError> {
                    Ok(Self {
                        request_charged: header_enum(&parts.headers, "x-amz-request-charged"),
                    })
                }
            }
        )+
    };
}

/// Implement `FromS3Response` for an output that is its XML body.
macro_rules! impl_xml_output {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl FromS3Response for $ty {
                fn from_s3_response(_parts: &Parts, body: Bytes) -> Result<Self, S3ClientError> {
                    xml_body(&body)
                }
            }
        )+
    };
}

/// Implement `FromS3Response` for an output whose single member is the
/// whole XML document.
macro_rules! impl_nested_xml_output {
    ($($ty:ty => $field:ident),+ $(,)?) => {
        $(
            impl FromS3Response for $ty {
                fn from_s3_response(_parts: &Parts, body: Bytes) -> Result<Self, S3ClientError> {
                    Ok(Self {
                        $field: optional_xml_body(&body)?,
                    })
                }
            }
        )+
    };
}

impl FromS3Response for () {
    fn from_s3_response(_parts: &Parts, _body: Bytes) -> Result<Self, S3ClientError> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Implementations for all Output types
// ---------------------------------------------------------------------------

#[allow(clippy::wildcard_imports)] // Every output type gets an impl below.
use wirestack_s3_model::output::*;

impl_request_charged_output!(
    PutObjectLockConfigurationOutput,
    AbortMultipartUploadOutput,
    PutObjectAclOutput,
    PutObjectRetentionOutput,
    PutObjectLegalHoldOutput,
);

impl_xml_output!(
    ListBucketsOutput,
    GetBucketLocationOutput,
    GetBucketCorsOutput,
    GetBucketLifecycleConfigurationOutput,
    GetBucketLoggingOutput,
    GetBucketNotificationConfigurationOutput,
    GetBucketRequestPaymentOutput,
    GetBucketTaggingOutput,
    GetBucketVersioningOutput,
    GetBucketWebsiteOutput,
    GetBucketAclOutput,
    ListBucketInventoryConfigurationsOutput,
    ListBucketMetricsConfigurationsOutput,
);

impl_nested_xml_output!(
    GetBucketEncryptionOutput => server_side_encryption_configuration,
    GetBucketOwnershipControlsOutput => ownership_controls,
    GetBucketPolicyStatusOutput => policy_status,
    GetBucketReplicationOutput => replication_configuration,
    GetObjectLockConfigurationOutput => object_lock_configuration,
    GetPublicAccessBlockOutput => public_access_block_configuration,
    GetBucketInventoryConfigurationOutput => inventory_configuration,
    GetBucketMetricsConfigurationOutput => metrics_configuration,
    GetObjectRetentionOutput => retention,
    GetObjectLegalHoldOutput => legal_hold,
);

// --- Buckets ---

impl FromS3Response for CreateBucketOutput {
    fn from_s3_response(parts: &Parts, _body: Bytes) -> Result<Self, S3ClientError> {
        Ok(Self {
            location: header_str(&parts.headers, "Location"),
        })
    }
}

impl FromS3Response for HeadBucketOutput {
    fn from_s3_response(parts: &Parts, _body: Bytes) -> Result<Self, S3ClientError> {
        let h = &parts.headers;
        Ok(Self {
            access_point_alias: header_bool(h, "x-amz-access-point-alias"),
            bucket_location_name: header_str(h, "x-amz-bucket-location-name"),
            bucket_location_type: header_str(h, "x-amz-bucket-location-type"),
            bucket_region: header_str(h, "x-amz-bucket-region"),
        })
    }
}

impl FromS3Response for GetBucketAccelerateConfigurationOutput {
    fn from_s3_response(parts: &Parts, body: Bytes) -> Result<Self, S3ClientError> {
        let mut output: Self = xml_body(&body)?;
        output.request_charged = header_enum(&parts.headers, "x-amz-request-charged");
        Ok(output)
    }
}

impl FromS3Response for GetBucketPolicyOutput {
    fn from_s3_response(_parts: &Parts, body: Bytes) -> Result<Self, S3ClientError> {
        if body.is_empty() {
            return Ok(Self::default());
        }
        let policy = String::from_utf8(body.to_vec()).map_err(|e| {
            S3ClientError::InvalidResponse(format!("bucket policy is not UTF-8: {e}"))
        })?;
        Ok(Self {
            policy: Some(policy),
        })
    }
}

// --- Objects ---

impl FromS3Response for PutObjectOutput {
    fn from_s3_response(parts: &Parts, _body: Bytes) -> Result<Self, S3ClientError> {
        let h = &parts.headers;
        Ok(Self {
            bucket_key_enabled: header_bool(h, "x-amz-server-side-encryption-bucket-key-enabled"),
            checksum_crc32: header_str(h, "x-amz-checksum-crc32"),
            checksum_crc32c: header_str(h, "x-amz-checksum-crc32c"),
            checksum_sha1: header_str(h, "x-amz-checksum-sha1"),
            checksum_sha256: header_str(h, "x-amz-checksum-sha256"),
            e_tag: header_str(h, "ETag"),
            expiration: header_str(h, "x-amz-expiration"),
            request_charged: header_enum(h, "x-amz-request-charged"),
            sse_customer_algorithm: header_str(
                h,
                "x-amz-server-side-encryption-customer-algorithm",
            ),
            sse_customer_key_md5: header_str(h, "x-amz-server-side-encryption-customer-key-MD5"),
            ssekms_encryption_context: header_str(h, "x-amz-server-side-encryption-context"),
            ssekms_key_id: header_str(h, "x-amz-server-side-encryption-aws-kms-key-id"),
            server_side_encryption: header_enum(h, "x-amz-server-side-encryption"),
            version_id: header_str(h, "x-amz-version-id"),
        })
    }
}

impl FromS3Response for GetObjectOutput {
    fn from_s3_response(parts: &Parts, body: Bytes) -> Result<Self, S3ClientError> {
        let h = &parts.headers;
        Ok(Self {
            body: StreamingBlob::from(body),
            accept_ranges: header_str(h, "accept-ranges"),
            bucket_key_enabled: header_bool(h, "x-amz-server-side-encryption-bucket-key-enabled"),
            cache_control: header_str(h, "Cache-Control"),
            checksum_crc32: header_str(h, "x-amz-checksum-crc32"),
            checksum_crc32c: header_str(h, "x-amz-checksum-crc32c"),
            checksum_sha1: header_str(h, "x-amz-checksum-sha1"),
            checksum_sha256: header_str(h, "x-amz-checksum-sha256"),
            content_disposition: header_str(h, "Content-Disposition"),
            content_encoding: header_str(h, "Content-Encoding"),
            content_language: header_str(h, "Content-Language"),
            content_length: header_parse(h, "Content-Length"),
            content_range: header_str(h, "Content-Range"),
            content_type: header_str(h, "Content-Type"),
            delete_marker: header_bool(h, "x-amz-delete-marker"),
            e_tag: header_str(h, "ETag"),
            expiration: header_str(h, "x-amz-expiration"),
            expires: header_timestamp(h, "Expires"),
            last_modified: header_timestamp(h, "Last-Modified"),
            metadata: collect_metadata(h),
            missing_meta: header_parse(h, "x-amz-missing-meta"),
            object_lock_legal_hold_status: header_enum(h, "x-amz-object-lock-legal-hold"),
            object_lock_mode: header_enum(h, "x-amz-object-lock-mode"),
            object_lock_retain_until_date: header_timestamp(
                h,
                "x-amz-object-lock-retain-until-date",
            ),
            parts_count: header_parse(h, "x-amz-mp-parts-count"),
            replication_status: header_enum(h, "x-amz-replication-status"),
            request_charged: header_enum(h, "x-amz-request-charged"),
            restore: header_str(h, "x-amz-restore"),
            sse_customer_algorithm: header_str(
                h,
                "x-amz-server-side-encryption-customer-algorithm",
            ),
            sse_customer_key_md5: header_str(h, "x-amz-server-side-encryption-customer-key-MD5"),
            ssekms_key_id: header_str(h, "x-amz-server-side-encryption-aws-kms-key-id"),
            server_side_encryption: header_enum(h, "x-amz-server-side-encryption"),
            storage_class: header_enum(h, "x-amz-storage-class"),
            tag_count: header_parse(h, "x-amz-tagging-count"),
            version_id: header_str(h, "x-amz-version-id"),
            website_redirect_location: header_str(h, "x-amz-website-redirect-location"),
        })
    }
}

impl FromS3Response for HeadObjectOutput {
    fn from_s3_response(parts: &Parts, _body: Bytes) -> Result<Self, S3ClientError> {
        let h = &parts.headers;
        Ok(Self {
            accept_ranges: header_str(h, "accept-ranges"),
            archive_status: header_enum(h, "x-amz-archive-status"),
            bucket_key_enabled: header_bool(h, "x-amz-server-side-encryption-bucket-key-enabled"),
            cache_control: header_str(h, "Cache-Control"),
            checksum_crc32: header_str(h, "x-amz-checksum-crc32"),
            checksum_crc32c: header_str(h, "x-amz-checksum-crc32c"),
            checksum_sha1: header_str(h, "x-amz-checksum-sha1"),
            checksum_sha256: header_str(h, "x-amz-checksum-sha256"),
            content_disposition: header_str(h, "Content-Disposition"),
            content_encoding: header_str(h, "Content-Encoding"),
            content_language: header_str(h, "Content-Language"),
            content_length: header_parse(h, "Content-Length"),
            content_type: header_str(h, "Content-Type"),
            delete_marker: header_bool(h, "x-amz-delete-marker"),
            e_tag: header_str(h, "ETag"),
            expiration: header_str(h, "x-amz-expiration"),
            expires: header_timestamp(h, "Expires"),
            last_modified: header_timestamp(h, "Last-Modified"),
            metadata: collect_metadata(h),
            missing_meta: header_parse(h, "x-amz-missing-meta"),
            object_lock_legal_hold_status: header_enum(h, "x-amz-object-lock-legal-hold"),
            object_lock_mode: header_enum(h, "x-amz-object-lock-mode"),
            object_lock_retain_until_date: header_timestamp(
                h,
                "x-amz-object-lock-retain-until-date",
            ),
            parts_count: header_parse(h, "x-amz-mp-parts-count"),
            replication_status: header_enum(h, "x-amz-replication-status"),
            request_charged: header_enum(h, "x-amz-request-charged"),
            restore: header_str(h, "x-amz-restore"),
            sse_customer_algorithm: header_str(
                h,
                "x-amz-server-side-encryption-customer-algorithm",
            ),
            sse_customer_key_md5: header_str(h, "x-amz-server-side-encryption-customer-key-MD5"),
            ssekms_key_id: header_str(h, "x-amz-server-side-encryption-aws-kms-key-id"),
            server_side_encryption: header_enum(h, "x-amz-server-side-encryption"),
            storage_class: header_enum(h, "x-amz-storage-class"),
            version_id: header_str(h, "x-amz-version-id"),
            website_redirect_location: header_str(h, "x-amz-website-redirect-location"),
        })
    }
}

impl FromS3Response for DeleteObjectOutput {
    fn from_s3_response(parts: &Parts, _body: Bytes) -> Result<Self, S3ClientError> {
        let h = &parts.headers;
        Ok(Self {
            delete_marker: header_bool(h, "x-amz-delete-marker"),
            request_charged: header_enum(h, "x-amz-request-charged"),
            version_id: header_str(h, "x-amz-version-id"),
        })
    }
}

impl FromS3Response for DeleteObjectsOutput {
    fn from_s3_response(parts: &Parts, body: Bytes) -> Result<Self, S3ClientError> {
        let mut output: Self = xml_body(&body)?;
        output.request_charged = header_enum(&parts.headers, "x-amz-request-charged");
        Ok(output)
    }
}

impl FromS3Response for CopyObjectOutput {
    fn from_s3_response(parts: &Parts, body: Bytes) -> Result<Self, S3ClientError> {
        let h = &parts.headers;
        Ok(Self {
            copy_object_result: optional_xml_body(&body)?,
            bucket_key_enabled: header_bool(h, "x-amz-server-side-encryption-bucket-key-enabled"),
            copy_source_version_id: header_str(h, "x-amz-copy-source-version-id"),
            expiration: header_str(h, "x-amz-expiration"),
            request_charged: header_enum(h, "x-amz-request-charged"),
            sse_customer_algorithm: header_str(
                h,
                "x-amz-server-side-encryption-customer-algorithm",
            ),
            sse_customer_key_md5: header_str(h, "x-amz-server-side-encryption-customer-key-MD5"),
            ssekms_encryption_context: header_str(h, "x-amz-server-side-encryption-context"),
            ssekms_key_id: header_str(h, "x-amz-server-side-encryption-aws-kms-key-id"),
            server_side_encryption: header_enum(h, "x-amz-server-side-encryption"),
            version_id: header_str(h, "x-amz-version-id"),
        })
    }
}

impl FromS3Response for RestoreObjectOutput {
    fn from_s3_response(parts: &Parts, _body: Bytes) -> Result<Self, S3ClientError> {
        let h = &parts.headers;
        Ok(Self {
            request_charged: header_enum(h, "x-amz-request-charged"),
            restore_output_path: header_str(h, "x-amz-restore-output-path"),
        })
    }
}

impl FromS3Response for GetObjectTaggingOutput {
    fn from_s3_response(parts: &Parts, body: Bytes) -> Result<Self, S3ClientError> {
        let mut output: Self = xml_body(&body)?;
        output.version_id = header_str(&parts.headers, "x-amz-version-id");
        Ok(output)
    }
}

impl FromS3Response for PutObjectTaggingOutput {
    fn from_s3_response(parts: &Parts, _body: Bytes) -> Result<Self, S3ClientError> {
        Ok(Self {
            version_id: header_str(&parts.headers, "x-amz-version-id"),
        })
    }
}

impl FromS3Response for DeleteObjectTaggingOutput {
    fn from_s3_response(parts: &Parts, _body: Bytes) -> Result<Self, S3ClientError> {
        Ok(Self {
            version_id: header_str(&parts.headers, "x-amz-version-id"),
        })
    }
}

impl FromS3Response for GetObjectAclOutput {
    fn from_s3_response(parts: &Parts, body: Bytes) -> Result<Self, S3ClientError> {
        let mut output: Self = xml_body(&body)?;
        output.request_charged = header_enum(&parts.headers, "x-amz-request-charged");
        Ok(output)
    }
}

// --- Multipart uploads ---

impl FromS3Response for CreateMultipartUploadOutput {
    fn from_s3_response(parts: &Parts, body: Bytes) -> Result<Self, S3ClientError> {
        let h = &parts.headers;
        let mut output: Self = xml_body(&body)?;
        output.abort_date = header_timestamp(h, "x-amz-abort-date");
        output.abort_rule_id = header_str(h, "x-amz-abort-rule-id");
        output.bucket_key_enabled =
            header_bool(h, "x-amz-server-side-encryption-bucket-key-enabled");
        output.checksum_algorithm = header_enum(h, "x-amz-checksum-algorithm");
        output.request_charged = header_enum(h, "x-amz-request-charged");
        output.sse_customer_algorithm =
            header_str(h, "x-amz-server-side-encryption-customer-algorithm");
        output.sse_customer_key_md5 =
            header_str(h, "x-amz-server-side-encryption-customer-key-MD5");
        output.ssekms_encryption_context = header_str(h, "x-amz-server-side-encryption-context");
        output.ssekms_key_id = header_str(h, "x-amz-server-side-encryption-aws-kms-key-id");
        output.server_side_encryption = header_enum(h, "x-amz-server-side-encryption");
        Ok(output)
    }
}

impl FromS3Response for UploadPartOutput {
    fn from_s3_response(parts: &Parts, _body: Bytes) -> Result<Self, S3ClientError> {
        let h = &parts.headers;
        Ok(Self {
            bucket_key_enabled: header_bool(h, "x-amz-server-side-encryption-bucket-key-enabled"),
            checksum_crc32: header_str(h, "x-amz-checksum-crc32"),
            checksum_crc32c: header_str(h, "x-amz-checksum-crc32c"),
            checksum_sha1: header_str(h, "x-amz-checksum-sha1"),
            checksum_sha256: header_str(h, "x-amz-checksum-sha256"),
            e_tag: header_str(h, "ETag"),
            request_charged: header_enum(h, "x-amz-request-charged"),
            sse_customer_algorithm: header_str(
                h,
                "x-amz-server-side-encryption-customer-algorithm",
            ),
            sse_customer_key_md5: header_str(h, "x-amz-server-side-encryption-customer-key-MD5"),
            ssekms_key_id: header_str(h, "x-amz-server-side-encryption-aws-kms-key-id"),
            server_side_encryption: header_enum(h, "x-amz-server-side-encryption"),
        })
    }
}

impl FromS3Response for UploadPartCopyOutput {
    fn from_s3_response(parts: &Parts, body: Bytes) -> Result<Self, S3ClientError> {
        let h = &parts.headers;
        Ok(Self {
            copy_part_result: optional_xml_body(&body)?,
            bucket_key_enabled: header_bool(h, "x-amz-server-side-encryption-bucket-key-enabled"),
            copy_source_version_id: header_str(h, "x-amz-copy-source-version-id"),
            request_charged: header_enum(h, "x-amz-request-charged"),
            sse_customer_algorithm: header_str(
                h,
                "x-amz-server-side-encryption-customer-algorithm",
            ),
            sse_customer_key_md5: header_str(h, "x-amz-server-side-encryption-customer-key-MD5"),
            ssekms_key_id: header_str(h, "x-amz-server-side-encryption-aws-kms-key-id"),
            server_side_encryption: header_enum(h, "x-amz-server-side-encryption"),
        })
    }
}

impl FromS3Response for CompleteMultipartUploadOutput {
    fn from_s3_response(parts: &Parts, body: Bytes) -> Result<Self, S3ClientError> {
        let h = &parts.headers;
        let mut output: Self = xml_body(&body)?;
        output.bucket_key_enabled =
            header_bool(h, "x-amz-server-side-encryption-bucket-key-enabled");
        output.expiration = header_str(h, "x-amz-expiration");
        output.request_charged = header_enum(h, "x-amz-request-charged");
        output.ssekms_key_id = header_str(h, "x-amz-server-side-encryption-aws-kms-key-id");
        output.server_side_encryption = header_enum(h, "x-amz-server-side-encryption");
        output.version_id = header_str(h, "x-amz-version-id");
        Ok(output)
    }
}

impl FromS3Response for ListPartsOutput {
    fn from_s3_response(parts: &Parts, body: Bytes) -> Result<Self, S3ClientError> {
        let h = &parts.headers;
        let mut output: Self = xml_body(&body)?;
        output.abort_date = header_timestamp(h, "x-amz-abort-date");
        output.abort_rule_id = header_str(h, "x-amz-abort-rule-id");
        output.request_charged = header_enum(h, "x-amz-request-charged");
        Ok(output)
    }
}

impl FromS3Response for ListMultipartUploadsOutput {
    fn from_s3_response(parts: &Parts, body: Bytes) -> Result<Self, S3ClientError> {
        let mut output: Self = xml_body(&body)?;
        output.request_charged = header_enum(&parts.headers, "x-amz-request-charged");
        if is_url_encoded(output.encoding_type.as_ref()) {
            url_decode(&mut output.prefix);
            url_decode(&mut output.delimiter);
            url_decode(&mut output.key_marker);
            url_decode(&mut output.next_key_marker);
            for upload in &mut output.uploads {
                url_decode(&mut upload.key);
            }
            url_decode_common(&mut [], &mut output.common_prefixes);
        }
        Ok(output)
    }
}

// --- Listing ---

impl FromS3Response for ListObjectsOutput {
    fn from_s3_response(parts: &Parts, body: Bytes) -> Result<Self, S3ClientError> {
        let mut output: Self = xml_body(&body)?;
        output.request_charged = header_enum(&parts.headers, "x-amz-request-charged");
        if is_url_encoded(output.encoding_type.as_ref()) {
            url_decode(&mut output.prefix);
            url_decode(&mut output.delimiter);
            url_decode(&mut output.marker);
            url_decode(&mut output.next_marker);
            url_decode_common(&mut output.contents, &mut output.common_prefixes);
        }
        Ok(output)
    }
}

impl FromS3Response for ListObjectsV2Output {
    fn from_s3_response(parts: &Parts, body: Bytes) -> Result<Self, S3ClientError> {
        let mut output: Self = xml_body(&body)?;
        output.request_charged = header_enum(&parts.headers, "x-amz-request-charged");
        if is_url_encoded(output.encoding_type.as_ref()) {
            url_decode(&mut output.prefix);
            url_decode(&mut output.delimiter);
            url_decode(&mut output.start_after);
            url_decode_common(&mut output.contents, &mut output.common_prefixes);
        }
        Ok(output)
    }
}

impl FromS3Response for ListObjectVersionsOutput {
    fn from_s3_response(parts: &Parts, body: Bytes) -> Result<Self, S3ClientError> {
        let mut output: Self = xml_body(&body)?;
        output.request_charged = header_enum(&parts.headers, "x-amz-request-charged");
        if is_url_encoded(output.encoding_type.as_ref()) {
            url_decode(&mut output.prefix);
            url_decode(&mut output.delimiter);
            url_decode(&mut output.key_marker);
            url_decode(&mut output.next_key_marker);
            for version in &mut output.versions {
                url_decode(&mut version.key);
            }
            for marker in &mut output.delete_markers {
                url_decode(&mut marker.key);
            }
            url_decode_common(&mut [], &mut output.common_prefixes);
        }
        Ok(output)
    }
}
