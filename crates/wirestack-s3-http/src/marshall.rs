//! S3 Input struct to HTTP request serialization.
//!
//! This module provides the [`IntoS3Request`] trait and implementations that
//! turn the typed inputs of `wirestack-s3-model` into a [`MarshalledRequest`]:
//! method, bucket and key labels, query parameters, headers and body.
//!
//! Field placement follows the doc comments on the input structs:
//! - `HTTP label` - bucket or key in the URI path; must not be empty
//! - `HTTP header: x-amz-xxx` - a request header
//! - `HTTP query: name` - a query parameter
//! - `HTTP payload body` - the XML document or raw bytes
//! - `HTTP prefix headers: x-amz-meta-` - one header per metadata entry

use std::collections::HashMap;
use std::fmt::Display;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use http::header::{CONTENT_LENGTH, CONTENT_TYPE, HeaderName, HeaderValue};
use http::{HeaderMap, Method};
use md5::{Digest, Md5};
use percent_encoding::utf8_percent_encode;
use tracing::debug;
use wirestack_s3_model::operations::S3Operation;
use wirestack_s3_model::types::Tagging;
use wirestack_xml::time::{format_http_date, format_iso8601};
use wirestack_xml::{S3Serialize, to_xml};

use crate::endpoint::{S3Endpoint, URI_PATH, URI_UNRESERVED};
use crate::error::MarshallError;

/// Trait for turning an S3 input struct into an HTTP request description.
pub trait IntoS3Request {
    /// Marshal the input.
    ///
    /// # Errors
    ///
    /// Returns [`MarshallError::MissingParameter`] if a required label is
    /// empty, or another [`MarshallError`] if a value cannot be encoded.
    fn into_s3_request(&self) -> Result<MarshalledRequest, MarshallError>;
}

/// An S3 request, independent of the endpoint it is sent to.
#[derive(Debug, Clone)]
pub struct MarshalledRequest {
    /// The operation being invoked.
    pub operation: S3Operation,
    /// HTTP method.
    pub method: Method,
    /// Bucket label.
    pub bucket: Option<String>,
    /// Object key label.
    pub key: Option<String>,
    /// Query parameters in order; an empty value marks a sub-resource.
    pub query: Vec<(String, String)>,
    /// Request headers.
    pub headers: HeaderMap,
    /// Request body.
    pub body: Bytes,
}

impl MarshalledRequest {
    /// Start a request for an operation that addresses no bucket.
    #[must_use]
    pub fn new(operation: S3Operation) -> Self {
        Self {
            operation,
            method: operation.method(),
            bucket: None,
            key: None,
            query: Vec::new(),
            headers: HeaderMap::new(),
            body: Bytes::new(),
        }
    }

    /// Start a request addressed to a bucket.
    ///
    /// # Errors
    ///
    /// Returns [`MarshallError::MissingParameter`] if `bucket` is empty.
    pub fn for_bucket(operation: S3Operation, bucket: &str) -> Result<Self, MarshallError> {
        let mut req = Self::new(operation);
        req.bucket = Some(require("Bucket", bucket)?.to_owned());
        Ok(req)
    }

    /// Start a request addressed to an object.
    ///
    /// # Errors
    ///
    /// Returns [`MarshallError::MissingParameter`] if `bucket` or `key` is
    /// empty.
    pub fn for_object(
        operation: S3Operation,
        bucket: &str,
        key: &str,
    ) -> Result<Self, MarshallError> {
        let mut req = Self::for_bucket(operation, bucket)?;
        req.key = Some(require("Key", key)?.to_owned());
        Ok(req)
    }

    /// Add a valueless sub-resource marker such as `?acl`.
    pub fn sub_resource(&mut self, name: &str) {
        self.query.push((name.to_owned(), String::new()));
    }

    /// Add a query parameter when `value` is present.
    pub fn query(&mut self, name: &str, value: Option<&str>) {
        if let Some(v) = value {
            self.query.push((name.to_owned(), v.to_owned()));
        }
    }

    /// Add a query parameter from a `Display` value.
    pub fn query_display<T: Display>(&mut self, name: &str, value: Option<T>) {
        if let Some(v) = value {
            self.query.push((name.to_owned(), v.to_string()));
        }
    }

    /// Add an ISO-8601 timestamp query parameter.
    pub fn query_timestamp(&mut self, name: &str, value: Option<&DateTime<Utc>>) {
        if let Some(v) = value {
            self.query.push((name.to_owned(), format_iso8601(v)));
        }
    }

    /// Set a header when `value` is present.
    ///
    /// # Errors
    ///
    /// Returns [`MarshallError::InvalidHeader`] if the name or value cannot
    /// appear in an HTTP header.
    pub fn header(&mut self, name: &str, value: Option<&str>) -> Result<(), MarshallError> {
        let Some(value) = value else {
            return Ok(());
        };
        let header_name = HeaderName::try_from(name).map_err(|e| invalid_header(name, &e))?;
        let header_value = HeaderValue::from_str(value).map_err(|e| invalid_header(name, &e))?;
        self.headers.insert(header_name, header_value);
        Ok(())
    }

    /// Set a header from a `Display` value.
    ///
    /// # Errors
    ///
    /// Returns [`MarshallError::InvalidHeader`] if the value is not a valid
    /// header value.
    pub fn header_display<T: Display>(
        &mut self,
        name: &str,
        value: Option<T>,
    ) -> Result<(), MarshallError> {
        self.header(name, value.map(|v| v.to_string()).as_deref())
    }

    /// Set an RFC 7231 HTTP-date header.
    ///
    /// # Errors
    ///
    /// Returns [`MarshallError::InvalidHeader`] on an invalid header name.
    pub fn header_http_date(
        &mut self,
        name: &str,
        value: Option<&DateTime<Utc>>,
    ) -> Result<(), MarshallError> {
        self.header(name, value.map(format_http_date).as_deref())
    }

    /// Set an ISO-8601 timestamp header.
    ///
    /// # Errors
    ///
    /// Returns [`MarshallError::InvalidHeader`] on an invalid header name.
    pub fn header_iso8601(
        &mut self,
        name: &str,
        value: Option<&DateTime<Utc>>,
    ) -> Result<(), MarshallError> {
        self.header(name, value.map(format_iso8601).as_deref())
    }

    /// Set one `x-amz-meta-<key>` header per metadata entry, in key order.
    ///
    /// # Errors
    ///
    /// Returns [`MarshallError::InvalidHeader`] if a key or value cannot
    /// appear in a header.
    pub fn metadata(&mut self, metadata: &HashMap<String, String>) -> Result<(), MarshallError> {
        let mut entries: Vec<_> = metadata.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        for (key, value) in entries {
            self.header(&format!("x-amz-meta-{key}"), Some(value))?;
        }
        Ok(())
    }

    /// Use `value` as the XML payload under `root`.
    ///
    /// # Errors
    ///
    /// Returns [`MarshallError::Xml`] if writing the document fails.
    pub fn xml_body<T: S3Serialize>(&mut self, root: &str, value: &T) -> Result<(), MarshallError> {
        self.body = Bytes::from(to_xml(root, value)?);
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/xml"));
        Ok(())
    }

    /// Use `value` as the XML payload when present.
    ///
    /// # Errors
    ///
    /// Returns [`MarshallError::Xml`] if writing the document fails.
    pub fn optional_xml_body<T: S3Serialize>(
        &mut self,
        root: &str,
        value: Option<&T>,
    ) -> Result<(), MarshallError> {
        match value {
            Some(v) => self.xml_body(root, v),
            None => Ok(()),
        }
    }

    /// Use raw bytes as the payload.
    pub fn raw_body(&mut self, body: Bytes) {
        self.body = body;
    }

    /// Set the SSE-C headers of a request.
    fn sse_customer(
        &mut self,
        algorithm: Option<&str>,
        key: Option<&str>,
        key_md5: Option<&str>,
    ) -> Result<(), MarshallError> {
        self.header("x-amz-server-side-encryption-customer-algorithm", algorithm)?;
        self.header("x-amz-server-side-encryption-customer-key", key)?;
        self.header("x-amz-server-side-encryption-customer-key-MD5", key_md5)
    }

    /// Set the copy-source SSE-C headers of a request.
    fn copy_source_sse_customer(
        &mut self,
        algorithm: Option<&str>,
        key: Option<&str>,
        key_md5: Option<&str>,
    ) -> Result<(), MarshallError> {
        self.header(
            "x-amz-copy-source-server-side-encryption-customer-algorithm",
            algorithm,
        )?;
        self.header("x-amz-copy-source-server-side-encryption-customer-key", key)?;
        self.header(
            "x-amz-copy-source-server-side-encryption-customer-key-MD5",
            key_md5,
        )
    }

    /// Add integrity and length headers and log the request.
    ///
    /// # Errors
    ///
    /// Returns [`MarshallError::InvalidHeader`] if a computed header is
    /// invalid.
    pub fn finish(mut self) -> Result<Self, MarshallError> {
        if self.operation.requires_content_md5()
            && !self.body.is_empty()
            && !self.headers.contains_key("content-md5")
        {
            let digest = BASE64_STANDARD.encode(Md5::digest(&self.body));
            self.header("Content-MD5", Some(&digest))?;
        }
        if !self.headers.contains_key(CONTENT_LENGTH)
            && (!self.body.is_empty() || matches!(self.method, Method::PUT | Method::POST))
        {
            self.headers.insert(CONTENT_LENGTH, HeaderValue::from(self.body.len()));
        }

        debug!(
            operation = %self.operation,
            method = %self.method,
            bucket = self.bucket.as_deref().unwrap_or(""),
            key = self.key.as_deref().unwrap_or(""),
            body_len = self.body.len(),
            "marshalled S3 request"
        );
        Ok(self)
    }

    /// Returns a header value, if set and textual.
    #[must_use]
    pub fn header_str(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Render the query parameters; sub-resources are rendered without `=`.
    #[must_use]
    pub fn query_string(&self) -> String {
        self.query
            .iter()
            .map(|(k, v)| {
                let k = utf8_percent_encode(k, URI_UNRESERVED);
                if v.is_empty() {
                    k.to_string()
                } else {
                    format!("{k}={}", utf8_percent_encode(v, URI_UNRESERVED))
                }
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Build the HTTP request for `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`MarshallError::Http`] if the URI or request cannot be built.
    pub fn into_http(self, endpoint: &S3Endpoint) -> Result<http::Request<Bytes>, MarshallError> {
        let uri = endpoint.uri(self.bucket.as_deref(), self.key.as_deref(), &self.query_string())?;
        let mut builder = http::Request::builder().method(self.method).uri(uri);
        if let Some(headers) = builder.headers_mut() {
            headers.extend(self.headers);
        }
        Ok(builder.body(self.body)?)
    }
}

/// Fail with `MissingParameter` when a required label is empty.
fn require<'a>(name: &'static str, value: &'a str) -> Result<&'a str, MarshallError> {
    if value.is_empty() {
        Err(MarshallError::MissingParameter(name))
    } else {
        Ok(value)
    }
}

fn invalid_header(name: &str, error: &dyn Display) -> MarshallError {
    MarshallError::InvalidHeader {
        name: name.to_owned(),
        reason: error.to_string(),
    }
}

/// Encode tags as the URL-encoded `x-amz-tagging` header value.
#[must_use]
pub fn encode_tagging(tagging: &Tagging) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(tagging.tag_set.iter().map(|t| (&t.key, &t.value)))
        .finish()
}

/// Encode the `x-amz-copy-source` header value, `/` left unescaped.
///
/// # Errors
///
/// Returns [`MarshallError::MissingParameter`] if the source bucket or key is
/// empty.
pub fn encode_copy_source(
    bucket: &str,
    key: &str,
    version_id: Option<&str>,
) -> Result<String, MarshallError> {
    require("CopySource", bucket)?;
    require("CopySource", key)?;
    let mut source = utf8_percent_encode(&format!("{bucket}/{key}"), URI_PATH).to_string();
    if let Some(version) = version_id {
        source.push_str("?versionId=");
        source.extend(utf8_percent_encode(version, URI_UNRESERVED));
    }
    Ok(source)
}

// ---------------------------------------------------------------------------
// Macros for inputs that differ only in operation and sub-resource
// ---------------------------------------------------------------------------

/// Implement `IntoS3Request` for a bucket-only input: the bucket label, an
/// optional sub-resource and `x-amz-expected-bucket-owner`.
macro_rules! impl_bucket_only_input {
    ($ty:ty => $op:ident $(, $sub:literal)?) => {
        impl IntoS3Request for $ty {
            fn into_s3_request(&self) -> Result<MarshalledRequest, MarshallError> {
                let mut req = MarshalledRequest::for_bucket(S3Operation::$op, &self.bucket)?;
                $(req.sub_resource($sub);)?
                req.header(
                    "x-amz-expected-bucket-owner",
                    self.expected_bucket_owner.as_deref(),
                )?;
                req.finish()
            }
        }
    };
}

/// Implement `IntoS3Request` for a bucket input addressed by configuration id.
macro_rules! impl_bucket_id_input {
    ($ty:ty => $op:ident, $sub:literal) => {
        impl IntoS3Request for $ty {
            fn into_s3_request(&self) -> Result<MarshalledRequest, MarshallError> {
                let mut req = MarshalledRequest::for_bucket(S3Operation::$op, &self.bucket)?;
                req.sub_resource($sub);
                req.query("id", Some(require("Id", &self.id)?));
                req.header(
                    "x-amz-expected-bucket-owner",
                    self.expected_bucket_owner.as_deref(),
                )?;
                req.finish()
            }
        }
    };
}

/// Implement `IntoS3Request` for a bucket input whose only other member is
/// an XML payload plus the common checksum headers.
macro_rules! impl_bucket_payload_input {
    ($ty:ty => $op:ident, $sub:literal, $field:ident, $root:literal) => {
        impl IntoS3Request for $ty {
            fn into_s3_request(&self) -> Result<MarshalledRequest, MarshallError> {
                let mut req = MarshalledRequest::for_bucket(S3Operation::$op, &self.bucket)?;
                req.sub_resource($sub);
                req.header_display(
                    "x-amz-sdk-checksum-algorithm",
                    self.checksum_algorithm.as_ref(),
                )?;
                req.header("Content-MD5", self.content_md5.as_deref())?;
                req.header(
                    "x-amz-expected-bucket-owner",
                    self.expected_bucket_owner.as_deref(),
                )?;
                req.xml_body($root, &self.$field)?;
                req.finish()
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Implementations for all Input types
// ---------------------------------------------------------------------------

#[allow(clippy::wildcard_imports)] // Every input type gets an impl below.
use wirestack_s3_model::input::*;

// --- Buckets ---

impl_bucket_only_input!(DeleteBucketInput => DeleteBucket);
impl_bucket_only_input!(HeadBucketInput => HeadBucket);
impl_bucket_only_input!(GetBucketLocationInput => GetBucketLocation, "location");

impl IntoS3Request for ListBucketsInput {
    fn into_s3_request(&self) -> Result<MarshalledRequest, MarshallError> {
        let mut req = MarshalledRequest::new(S3Operation::ListBuckets);
        req.query("bucket-region", self.bucket_region.as_deref());
        req.query("continuation-token", self.continuation_token.as_deref());
        req.query_display("max-buckets", self.max_buckets);
        req.query("prefix", self.prefix.as_deref());
        req.finish()
    }
}

impl IntoS3Request for CreateBucketInput {
    fn into_s3_request(&self) -> Result<MarshalledRequest, MarshallError> {
        let mut req = MarshalledRequest::for_bucket(S3Operation::CreateBucket, &self.bucket)?;
        req.header_display("x-amz-acl", self.acl.as_ref())?;
        req.header("x-amz-grant-full-control", self.grant_full_control.as_deref())?;
        req.header("x-amz-grant-read", self.grant_read.as_deref())?;
        req.header("x-amz-grant-read-acp", self.grant_read_acp.as_deref())?;
        req.header("x-amz-grant-write", self.grant_write.as_deref())?;
        req.header("x-amz-grant-write-acp", self.grant_write_acp.as_deref())?;
        req.header_display(
            "x-amz-bucket-object-lock-enabled",
            self.object_lock_enabled_for_bucket,
        )?;
        req.header_display("x-amz-object-ownership", self.object_ownership.as_ref())?;
        req.optional_xml_body(
            "CreateBucketConfiguration",
            self.create_bucket_configuration.as_ref(),
        )?;
        req.finish()
    }
}

// --- Bucket sub-resources ---

impl_bucket_only_input!(DeleteBucketCorsInput => DeleteBucketCors, "cors");
impl_bucket_only_input!(DeleteBucketEncryptionInput => DeleteBucketEncryption, "encryption");
impl_bucket_only_input!(DeleteBucketLifecycleInput => DeleteBucketLifecycle, "lifecycle");
impl_bucket_only_input!(
    DeleteBucketOwnershipControlsInput => DeleteBucketOwnershipControls,
    "ownershipControls"
);
impl_bucket_only_input!(DeleteBucketPolicyInput => DeleteBucketPolicy, "policy");
impl_bucket_only_input!(DeleteBucketReplicationInput => DeleteBucketReplication, "replication");
impl_bucket_only_input!(DeleteBucketTaggingInput => DeleteBucketTagging, "tagging");
impl_bucket_only_input!(DeleteBucketWebsiteInput => DeleteBucketWebsite, "website");
impl_bucket_only_input!(DeletePublicAccessBlockInput => DeletePublicAccessBlock, "publicAccessBlock");
impl_bucket_only_input!(GetBucketAclInput => GetBucketAcl, "acl");
impl_bucket_only_input!(GetBucketCorsInput => GetBucketCors, "cors");
impl_bucket_only_input!(GetBucketEncryptionInput => GetBucketEncryption, "encryption");
impl_bucket_only_input!(
    GetBucketLifecycleConfigurationInput => GetBucketLifecycleConfiguration,
    "lifecycle"
);
impl_bucket_only_input!(GetBucketLoggingInput => GetBucketLogging, "logging");
impl_bucket_only_input!(
    GetBucketNotificationConfigurationInput => GetBucketNotificationConfiguration,
    "notification"
);
impl_bucket_only_input!(
    GetBucketOwnershipControlsInput => GetBucketOwnershipControls,
    "ownershipControls"
);
impl_bucket_only_input!(GetBucketPolicyInput => GetBucketPolicy, "policy");
impl_bucket_only_input!(GetBucketPolicyStatusInput => GetBucketPolicyStatus, "policyStatus");
impl_bucket_only_input!(GetBucketReplicationInput => GetBucketReplication, "replication");
impl_bucket_only_input!(GetBucketRequestPaymentInput => GetBucketRequestPayment, "requestPayment");
impl_bucket_only_input!(GetBucketTaggingInput => GetBucketTagging, "tagging");
impl_bucket_only_input!(GetBucketVersioningInput => GetBucketVersioning, "versioning");
impl_bucket_only_input!(GetBucketWebsiteInput => GetBucketWebsite, "website");
impl_bucket_only_input!(GetObjectLockConfigurationInput => GetObjectLockConfiguration, "object-lock");
impl_bucket_only_input!(GetPublicAccessBlockInput => GetPublicAccessBlock, "publicAccessBlock");

impl_bucket_payload_input!(PutBucketCorsInput => PutBucketCors, "cors", cors_configuration, "CORSConfiguration");
impl_bucket_payload_input!(
    PutBucketEncryptionInput => PutBucketEncryption,
    "encryption",
    server_side_encryption_configuration,
    "ServerSideEncryptionConfiguration"
);
impl_bucket_payload_input!(
    PutBucketLoggingInput => PutBucketLogging,
    "logging",
    bucket_logging_status,
    "BucketLoggingStatus"
);
impl_bucket_payload_input!(
    PutBucketRequestPaymentInput => PutBucketRequestPayment,
    "requestPayment",
    request_payment_configuration,
    "RequestPaymentConfiguration"
);
impl_bucket_payload_input!(PutBucketTaggingInput => PutBucketTagging, "tagging", tagging, "Tagging");
impl_bucket_payload_input!(
    PutBucketWebsiteInput => PutBucketWebsite,
    "website",
    website_configuration,
    "WebsiteConfiguration"
);
impl_bucket_payload_input!(
    PutPublicAccessBlockInput => PutPublicAccessBlock,
    "publicAccessBlock",
    public_access_block_configuration,
    "PublicAccessBlockConfiguration"
);

impl IntoS3Request for GetBucketAccelerateConfigurationInput {
    fn into_s3_request(&self) -> Result<MarshalledRequest, MarshallError> {
        let mut req = MarshalledRequest::for_bucket(
            S3Operation::GetBucketAccelerateConfiguration,
            &self.bucket,
        )?;
        req.sub_resource("accelerate");
        req.header("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        req.header_display("x-amz-request-payer", self.request_payer.as_ref())?;
        req.finish()
    }
}

impl IntoS3Request for PutBucketAccelerateConfigurationInput {
    fn into_s3_request(&self) -> Result<MarshalledRequest, MarshallError> {
        let mut req = MarshalledRequest::for_bucket(
            S3Operation::PutBucketAccelerateConfiguration,
            &self.bucket,
        )?;
        req.sub_resource("accelerate");
        req.header_display("x-amz-sdk-checksum-algorithm", self.checksum_algorithm.as_ref())?;
        req.header("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        req.xml_body("AccelerateConfiguration", &self.accelerate_configuration)?;
        req.finish()
    }
}

impl IntoS3Request for PutBucketAclInput {
    fn into_s3_request(&self) -> Result<MarshalledRequest, MarshallError> {
        let mut req = MarshalledRequest::for_bucket(S3Operation::PutBucketAcl, &self.bucket)?;
        req.sub_resource("acl");
        req.header_display("x-amz-acl", self.acl.as_ref())?;
        req.header_display("x-amz-sdk-checksum-algorithm", self.checksum_algorithm.as_ref())?;
        req.header("Content-MD5", self.content_md5.as_deref())?;
        req.header("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        req.header("x-amz-grant-full-control", self.grant_full_control.as_deref())?;
        req.header("x-amz-grant-read", self.grant_read.as_deref())?;
        req.header("x-amz-grant-read-acp", self.grant_read_acp.as_deref())?;
        req.header("x-amz-grant-write", self.grant_write.as_deref())?;
        req.header("x-amz-grant-write-acp", self.grant_write_acp.as_deref())?;
        req.optional_xml_body("AccessControlPolicy", self.access_control_policy.as_ref())?;
        req.finish()
    }
}

impl IntoS3Request for PutBucketLifecycleConfigurationInput {
    fn into_s3_request(&self) -> Result<MarshalledRequest, MarshallError> {
        let mut req = MarshalledRequest::for_bucket(
            S3Operation::PutBucketLifecycleConfiguration,
            &self.bucket,
        )?;
        req.sub_resource("lifecycle");
        req.header_display("x-amz-sdk-checksum-algorithm", self.checksum_algorithm.as_ref())?;
        req.header("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        req.optional_xml_body("LifecycleConfiguration", self.lifecycle_configuration.as_ref())?;
        req.finish()
    }
}

impl IntoS3Request for PutBucketNotificationConfigurationInput {
    fn into_s3_request(&self) -> Result<MarshalledRequest, MarshallError> {
        let mut req = MarshalledRequest::for_bucket(
            S3Operation::PutBucketNotificationConfiguration,
            &self.bucket,
        )?;
        req.sub_resource("notification");
        req.header("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        req.header_display(
            "x-amz-skip-destination-validation",
            self.skip_destination_validation,
        )?;
        req.xml_body("NotificationConfiguration", &self.notification_configuration)?;
        req.finish()
    }
}

impl IntoS3Request for PutBucketOwnershipControlsInput {
    fn into_s3_request(&self) -> Result<MarshalledRequest, MarshallError> {
        let mut req =
            MarshalledRequest::for_bucket(S3Operation::PutBucketOwnershipControls, &self.bucket)?;
        req.sub_resource("ownershipControls");
        req.header("Content-MD5", self.content_md5.as_deref())?;
        req.header("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        req.xml_body("OwnershipControls", &self.ownership_controls)?;
        req.finish()
    }
}

impl IntoS3Request for PutBucketPolicyInput {
    fn into_s3_request(&self) -> Result<MarshalledRequest, MarshallError> {
        let mut req = MarshalledRequest::for_bucket(S3Operation::PutBucketPolicy, &self.bucket)?;
        req.sub_resource("policy");
        req.header_display("x-amz-sdk-checksum-algorithm", self.checksum_algorithm.as_ref())?;
        req.header_display(
            "x-amz-confirm-remove-self-bucket-access",
            self.confirm_remove_self_bucket_access,
        )?;
        req.header("Content-MD5", self.content_md5.as_deref())?;
        req.header("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        req.raw_body(Bytes::from(self.policy.clone()));
        req.finish()
    }
}

impl IntoS3Request for PutBucketReplicationInput {
    fn into_s3_request(&self) -> Result<MarshalledRequest, MarshallError> {
        let mut req =
            MarshalledRequest::for_bucket(S3Operation::PutBucketReplication, &self.bucket)?;
        req.sub_resource("replication");
        req.header_display("x-amz-sdk-checksum-algorithm", self.checksum_algorithm.as_ref())?;
        req.header("Content-MD5", self.content_md5.as_deref())?;
        req.header("x-amz-bucket-object-lock-token", self.token.as_deref())?;
        req.header("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        req.xml_body("ReplicationConfiguration", &self.replication_configuration)?;
        req.finish()
    }
}

impl IntoS3Request for PutBucketVersioningInput {
    fn into_s3_request(&self) -> Result<MarshalledRequest, MarshallError> {
        let mut req =
            MarshalledRequest::for_bucket(S3Operation::PutBucketVersioning, &self.bucket)?;
        req.sub_resource("versioning");
        req.header_display("x-amz-sdk-checksum-algorithm", self.checksum_algorithm.as_ref())?;
        req.header("Content-MD5", self.content_md5.as_deref())?;
        req.header("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        req.header("x-amz-mfa", self.mfa.as_deref())?;
        req.xml_body("VersioningConfiguration", &self.versioning_configuration)?;
        req.finish()
    }
}

impl IntoS3Request for PutObjectLockConfigurationInput {
    fn into_s3_request(&self) -> Result<MarshalledRequest, MarshallError> {
        let mut req =
            MarshalledRequest::for_bucket(S3Operation::PutObjectLockConfiguration, &self.bucket)?;
        req.sub_resource("object-lock");
        req.header_display("x-amz-sdk-checksum-algorithm", self.checksum_algorithm.as_ref())?;
        req.header("Content-MD5", self.content_md5.as_deref())?;
        req.header("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        req.header_display("x-amz-request-payer", self.request_payer.as_ref())?;
        req.header("x-amz-bucket-object-lock-token", self.token.as_deref())?;
        req.optional_xml_body(
            "ObjectLockConfiguration",
            self.object_lock_configuration.as_ref(),
        )?;
        req.finish()
    }
}

// --- Inventory and metrics ---

impl_bucket_id_input!(GetBucketInventoryConfigurationInput => GetBucketInventoryConfiguration, "inventory");
impl_bucket_id_input!(DeleteBucketInventoryConfigurationInput => DeleteBucketInventoryConfiguration, "inventory");
impl_bucket_id_input!(GetBucketMetricsConfigurationInput => GetBucketMetricsConfiguration, "metrics");
impl_bucket_id_input!(DeleteBucketMetricsConfigurationInput => DeleteBucketMetricsConfiguration, "metrics");

impl IntoS3Request for PutBucketInventoryConfigurationInput {
    fn into_s3_request(&self) -> Result<MarshalledRequest, MarshallError> {
        let mut req = MarshalledRequest::for_bucket(
            S3Operation::PutBucketInventoryConfiguration,
            &self.bucket,
        )?;
        req.sub_resource("inventory");
        req.query("id", Some(require("Id", &self.id)?));
        req.header("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        req.xml_body("InventoryConfiguration", &self.inventory_configuration)?;
        req.finish()
    }
}

impl IntoS3Request for PutBucketMetricsConfigurationInput {
    fn into_s3_request(&self) -> Result<MarshalledRequest, MarshallError> {
        let mut req = MarshalledRequest::for_bucket(
            S3Operation::PutBucketMetricsConfiguration,
            &self.bucket,
        )?;
        req.sub_resource("metrics");
        req.query("id", Some(require("Id", &self.id)?));
        req.header("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        req.xml_body("MetricsConfiguration", &self.metrics_configuration)?;
        req.finish()
    }
}

impl IntoS3Request for ListBucketInventoryConfigurationsInput {
    fn into_s3_request(&self) -> Result<MarshalledRequest, MarshallError> {
        let mut req = MarshalledRequest::for_bucket(
            S3Operation::ListBucketInventoryConfigurations,
            &self.bucket,
        )?;
        req.sub_resource("inventory");
        req.query("continuation-token", self.continuation_token.as_deref());
        req.header("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        req.finish()
    }
}

impl IntoS3Request for ListBucketMetricsConfigurationsInput {
    fn into_s3_request(&self) -> Result<MarshalledRequest, MarshallError> {
        let mut req = MarshalledRequest::for_bucket(
            S3Operation::ListBucketMetricsConfigurations,
            &self.bucket,
        )?;
        req.sub_resource("metrics");
        req.query("continuation-token", self.continuation_token.as_deref());
        req.header("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        req.finish()
    }
}

// --- Objects ---

impl IntoS3Request for PutObjectInput {
    fn into_s3_request(&self) -> Result<MarshalledRequest, MarshallError> {
        let mut req =
            MarshalledRequest::for_object(S3Operation::PutObject, &self.bucket, &self.key)?;
        req.header_display("x-amz-acl", self.acl.as_ref())?;
        req.header_display(
            "x-amz-server-side-encryption-bucket-key-enabled",
            self.bucket_key_enabled,
        )?;
        req.header("Cache-Control", self.cache_control.as_deref())?;
        req.header_display("x-amz-sdk-checksum-algorithm", self.checksum_algorithm.as_ref())?;
        req.header("x-amz-checksum-crc32", self.checksum_crc32.as_deref())?;
        req.header("x-amz-checksum-crc32c", self.checksum_crc32c.as_deref())?;
        req.header("x-amz-checksum-sha1", self.checksum_sha1.as_deref())?;
        req.header("x-amz-checksum-sha256", self.checksum_sha256.as_deref())?;
        req.header("Content-Disposition", self.content_disposition.as_deref())?;
        req.header("Content-Encoding", self.content_encoding.as_deref())?;
        req.header("Content-Language", self.content_language.as_deref())?;
        req.header_display("Content-Length", self.content_length)?;
        req.header("Content-MD5", self.content_md5.as_deref())?;
        req.header("Content-Type", self.content_type.as_deref())?;
        req.header("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        req.header_http_date("Expires", self.expires.as_ref())?;
        req.header("x-amz-grant-full-control", self.grant_full_control.as_deref())?;
        req.header("x-amz-grant-read", self.grant_read.as_deref())?;
        req.header("x-amz-grant-read-acp", self.grant_read_acp.as_deref())?;
        req.header("x-amz-grant-write-acp", self.grant_write_acp.as_deref())?;
        req.header("If-Match", self.if_match.as_deref())?;
        req.header("If-None-Match", self.if_none_match.as_deref())?;
        req.metadata(&self.metadata)?;
        req.header_display(
            "x-amz-object-lock-legal-hold",
            self.object_lock_legal_hold_status.as_ref(),
        )?;
        req.header_display("x-amz-object-lock-mode", self.object_lock_mode.as_ref())?;
        req.header_iso8601(
            "x-amz-object-lock-retain-until-date",
            self.object_lock_retain_until_date.as_ref(),
        )?;
        req.header_display("x-amz-request-payer", self.request_payer.as_ref())?;
        req.sse_customer(
            self.sse_customer_algorithm.as_deref(),
            self.sse_customer_key.as_deref(),
            self.sse_customer_key_md5.as_deref(),
        )?;
        req.header(
            "x-amz-server-side-encryption-context",
            self.ssekms_encryption_context.as_deref(),
        )?;
        req.header(
            "x-amz-server-side-encryption-aws-kms-key-id",
            self.ssekms_key_id.as_deref(),
        )?;
        req.header_display("x-amz-server-side-encryption", self.server_side_encryption.as_ref())?;
        req.header_display("x-amz-storage-class", self.storage_class.as_ref())?;
        req.header("x-amz-tagging", self.tagging.as_ref().map(encode_tagging).as_deref())?;
        req.header(
            "x-amz-website-redirect-location",
            self.website_redirect_location.as_deref(),
        )?;
        req.raw_body(self.body.data.clone());
        req.finish()
    }
}

impl IntoS3Request for GetObjectInput {
    fn into_s3_request(&self) -> Result<MarshalledRequest, MarshallError> {
        let mut req =
            MarshalledRequest::for_object(S3Operation::GetObject, &self.bucket, &self.key)?;
        req.query_display("partNumber", self.part_number);
        req.query("response-cache-control", self.response_cache_control.as_deref());
        req.query(
            "response-content-disposition",
            self.response_content_disposition.as_deref(),
        );
        req.query(
            "response-content-encoding",
            self.response_content_encoding.as_deref(),
        );
        req.query(
            "response-content-language",
            self.response_content_language.as_deref(),
        );
        req.query("response-content-type", self.response_content_type.as_deref());
        req.query_timestamp("response-expires", self.response_expires.as_ref());
        req.query("versionId", self.version_id.as_deref());
        req.header_display("x-amz-checksum-mode", self.checksum_mode.as_ref())?;
        req.header("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        req.header("If-Match", self.if_match.as_deref())?;
        req.header_http_date("If-Modified-Since", self.if_modified_since.as_ref())?;
        req.header("If-None-Match", self.if_none_match.as_deref())?;
        req.header_http_date("If-Unmodified-Since", self.if_unmodified_since.as_ref())?;
        req.header("Range", self.range.as_deref())?;
        req.header_display("x-amz-request-payer", self.request_payer.as_ref())?;
        req.sse_customer(
            self.sse_customer_algorithm.as_deref(),
            self.sse_customer_key.as_deref(),
            self.sse_customer_key_md5.as_deref(),
        )?;
        req.finish()
    }
}

impl IntoS3Request for HeadObjectInput {
    fn into_s3_request(&self) -> Result<MarshalledRequest, MarshallError> {
        let mut req =
            MarshalledRequest::for_object(S3Operation::HeadObject, &self.bucket, &self.key)?;
        req.query_display("partNumber", self.part_number);
        req.query("versionId", self.version_id.as_deref());
        req.header_display("x-amz-checksum-mode", self.checksum_mode.as_ref())?;
        req.header("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        req.header("If-Match", self.if_match.as_deref())?;
        req.header_http_date("If-Modified-Since", self.if_modified_since.as_ref())?;
        req.header("If-None-Match", self.if_none_match.as_deref())?;
        req.header_http_date("If-Unmodified-Since", self.if_unmodified_since.as_ref())?;
        req.header("Range", self.range.as_deref())?;
        req.header_display("x-amz-request-payer", self.request_payer.as_ref())?;
        req.sse_customer(
            self.sse_customer_algorithm.as_deref(),
            self.sse_customer_key.as_deref(),
            self.sse_customer_key_md5.as_deref(),
        )?;
        req.finish()
    }
}

impl IntoS3Request for DeleteObjectInput {
    fn into_s3_request(&self) -> Result<MarshalledRequest, MarshallError> {
        let mut req =
            MarshalledRequest::for_object(S3Operation::DeleteObject, &self.bucket, &self.key)?;
        req.query("versionId", self.version_id.as_deref());
        req.header_display(
            "x-amz-bypass-governance-retention",
            self.bypass_governance_retention,
        )?;
        req.header("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        req.header("x-amz-mfa", self.mfa.as_deref())?;
        req.header_display("x-amz-request-payer", self.request_payer.as_ref())?;
        req.finish()
    }
}

impl IntoS3Request for DeleteObjectsInput {
    fn into_s3_request(&self) -> Result<MarshalledRequest, MarshallError> {
        let mut req = MarshalledRequest::for_bucket(S3Operation::DeleteObjects, &self.bucket)?;
        req.sub_resource("delete");
        req.header_display(
            "x-amz-bypass-governance-retention",
            self.bypass_governance_retention,
        )?;
        req.header_display("x-amz-sdk-checksum-algorithm", self.checksum_algorithm.as_ref())?;
        req.header("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        req.header("x-amz-mfa", self.mfa.as_deref())?;
        req.header_display("x-amz-request-payer", self.request_payer.as_ref())?;
        req.xml_body("Delete", &self.delete)?;
        req.finish()
    }
}

impl IntoS3Request for CopyObjectInput {
    fn into_s3_request(&self) -> Result<MarshalledRequest, MarshallError> {
        let mut req =
            MarshalledRequest::for_object(S3Operation::CopyObject, &self.bucket, &self.key)?;
        let copy_source = encode_copy_source(
            &self.copy_source_bucket,
            &self.copy_source_key,
            self.copy_source_version_id.as_deref(),
        )?;
        req.header("x-amz-copy-source", Some(&copy_source))?;
        req.header_display("x-amz-acl", self.acl.as_ref())?;
        req.header_display(
            "x-amz-server-side-encryption-bucket-key-enabled",
            self.bucket_key_enabled,
        )?;
        req.header("Cache-Control", self.cache_control.as_deref())?;
        req.header_display("x-amz-checksum-algorithm", self.checksum_algorithm.as_ref())?;
        req.header("Content-Disposition", self.content_disposition.as_deref())?;
        req.header("Content-Encoding", self.content_encoding.as_deref())?;
        req.header("Content-Language", self.content_language.as_deref())?;
        req.header("Content-Type", self.content_type.as_deref())?;
        req.header("x-amz-copy-source-if-match", self.copy_source_if_match.as_deref())?;
        req.header_http_date(
            "x-amz-copy-source-if-modified-since",
            self.copy_source_if_modified_since.as_ref(),
        )?;
        req.header(
            "x-amz-copy-source-if-none-match",
            self.copy_source_if_none_match.as_deref(),
        )?;
        req.header_http_date(
            "x-amz-copy-source-if-unmodified-since",
            self.copy_source_if_unmodified_since.as_ref(),
        )?;
        req.copy_source_sse_customer(
            self.copy_source_sse_customer_algorithm.as_deref(),
            self.copy_source_sse_customer_key.as_deref(),
            self.copy_source_sse_customer_key_md5.as_deref(),
        )?;
        req.header("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        req.header(
            "x-amz-source-expected-bucket-owner",
            self.expected_source_bucket_owner.as_deref(),
        )?;
        req.header_http_date("Expires", self.expires.as_ref())?;
        req.header("x-amz-grant-full-control", self.grant_full_control.as_deref())?;
        req.header("x-amz-grant-read", self.grant_read.as_deref())?;
        req.header("x-amz-grant-read-acp", self.grant_read_acp.as_deref())?;
        req.header("x-amz-grant-write-acp", self.grant_write_acp.as_deref())?;
        req.metadata(&self.metadata)?;
        req.header_display("x-amz-metadata-directive", self.metadata_directive.as_ref())?;
        req.header_display(
            "x-amz-object-lock-legal-hold",
            self.object_lock_legal_hold_status.as_ref(),
        )?;
        req.header_display("x-amz-object-lock-mode", self.object_lock_mode.as_ref())?;
        req.header_iso8601(
            "x-amz-object-lock-retain-until-date",
            self.object_lock_retain_until_date.as_ref(),
        )?;
        req.header_display("x-amz-request-payer", self.request_payer.as_ref())?;
        req.sse_customer(
            self.sse_customer_algorithm.as_deref(),
            self.sse_customer_key.as_deref(),
            self.sse_customer_key_md5.as_deref(),
        )?;
        req.header(
            "x-amz-server-side-encryption-context",
            self.ssekms_encryption_context.as_deref(),
        )?;
        req.header(
            "x-amz-server-side-encryption-aws-kms-key-id",
            self.ssekms_key_id.as_deref(),
        )?;
        req.header_display("x-amz-server-side-encryption", self.server_side_encryption.as_ref())?;
        req.header_display("x-amz-storage-class", self.storage_class.as_ref())?;
        req.header("x-amz-tagging", self.tagging.as_ref().map(encode_tagging).as_deref())?;
        req.header_display("x-amz-tagging-directive", self.tagging_directive.as_ref())?;
        req.header(
            "x-amz-website-redirect-location",
            self.website_redirect_location.as_deref(),
        )?;
        req.finish()
    }
}

impl IntoS3Request for RestoreObjectInput {
    fn into_s3_request(&self) -> Result<MarshalledRequest, MarshallError> {
        let mut req =
            MarshalledRequest::for_object(S3Operation::RestoreObject, &self.bucket, &self.key)?;
        req.sub_resource("restore");
        req.query("versionId", self.version_id.as_deref());
        req.header_display("x-amz-sdk-checksum-algorithm", self.checksum_algorithm.as_ref())?;
        req.header("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        req.header_display("x-amz-request-payer", self.request_payer.as_ref())?;
        req.optional_xml_body("RestoreRequest", self.restore_request.as_ref())?;
        req.finish()
    }
}

/// Implement `IntoS3Request` for an object sub-resource read: bucket, key,
/// `versionId` and the common owner/payer headers.
macro_rules! impl_object_subresource_get {
    ($ty:ty => $op:ident, $sub:literal) => {
        impl IntoS3Request for $ty {
            fn into_s3_request(&self) -> Result<MarshalledRequest, MarshallError> {
                let mut req =
                    MarshalledRequest::for_object(S3Operation::$op, &self.bucket, &self.key)?;
                req.sub_resource($sub);
                req.query("versionId", self.version_id.as_deref());
                req.header(
                    "x-amz-expected-bucket-owner",
                    self.expected_bucket_owner.as_deref(),
                )?;
                req.header_display("x-amz-request-payer", self.request_payer.as_ref())?;
                req.finish()
            }
        }
    };
}

impl_object_subresource_get!(GetObjectTaggingInput => GetObjectTagging, "tagging");
impl_object_subresource_get!(GetObjectAclInput => GetObjectAcl, "acl");
impl_object_subresource_get!(GetObjectRetentionInput => GetObjectRetention, "retention");
impl_object_subresource_get!(GetObjectLegalHoldInput => GetObjectLegalHold, "legal-hold");

impl IntoS3Request for PutObjectTaggingInput {
    fn into_s3_request(&self) -> Result<MarshalledRequest, MarshallError> {
        let mut req =
            MarshalledRequest::for_object(S3Operation::PutObjectTagging, &self.bucket, &self.key)?;
        req.sub_resource("tagging");
        req.query("versionId", self.version_id.as_deref());
        req.header_display("x-amz-sdk-checksum-algorithm", self.checksum_algorithm.as_ref())?;
        req.header("Content-MD5", self.content_md5.as_deref())?;
        req.header("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        req.header_display("x-amz-request-payer", self.request_payer.as_ref())?;
        req.xml_body("Tagging", &self.tagging)?;
        req.finish()
    }
}

impl IntoS3Request for DeleteObjectTaggingInput {
    fn into_s3_request(&self) -> Result<MarshalledRequest, MarshallError> {
        let mut req = MarshalledRequest::for_object(
            S3Operation::DeleteObjectTagging,
            &self.bucket,
            &self.key,
        )?;
        req.sub_resource("tagging");
        req.query("versionId", self.version_id.as_deref());
        req.header("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        req.finish()
    }
}

impl IntoS3Request for PutObjectAclInput {
    fn into_s3_request(&self) -> Result<MarshalledRequest, MarshallError> {
        let mut req =
            MarshalledRequest::for_object(S3Operation::PutObjectAcl, &self.bucket, &self.key)?;
        req.sub_resource("acl");
        req.query("versionId", self.version_id.as_deref());
        req.header_display("x-amz-acl", self.acl.as_ref())?;
        req.header_display("x-amz-sdk-checksum-algorithm", self.checksum_algorithm.as_ref())?;
        req.header("Content-MD5", self.content_md5.as_deref())?;
        req.header("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        req.header("x-amz-grant-full-control", self.grant_full_control.as_deref())?;
        req.header("x-amz-grant-read", self.grant_read.as_deref())?;
        req.header("x-amz-grant-read-acp", self.grant_read_acp.as_deref())?;
        req.header("x-amz-grant-write", self.grant_write.as_deref())?;
        req.header("x-amz-grant-write-acp", self.grant_write_acp.as_deref())?;
        req.header_display("x-amz-request-payer", self.request_payer.as_ref())?;
        req.optional_xml_body("AccessControlPolicy", self.access_control_policy.as_ref())?;
        req.finish()
    }
}

impl IntoS3Request for PutObjectRetentionInput {
    fn into_s3_request(&self) -> Result<MarshalledRequest, MarshallError> {
        let mut req = MarshalledRequest::for_object(
            S3Operation::PutObjectRetention,
            &self.bucket,
            &self.key,
        )?;
        req.sub_resource("retention");
        req.query("versionId", self.version_id.as_deref());
        req.header_display(
            "x-amz-bypass-governance-retention",
            self.bypass_governance_retention,
        )?;
        req.header_display("x-amz-sdk-checksum-algorithm", self.checksum_algorithm.as_ref())?;
        req.header("Content-MD5", self.content_md5.as_deref())?;
        req.header("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        req.header_display("x-amz-request-payer", self.request_payer.as_ref())?;
        req.optional_xml_body("Retention", self.retention.as_ref())?;
        req.finish()
    }
}

impl IntoS3Request for PutObjectLegalHoldInput {
    fn into_s3_request(&self) -> Result<MarshalledRequest, MarshallError> {
        let mut req = MarshalledRequest::for_object(
            S3Operation::PutObjectLegalHold,
            &self.bucket,
            &self.key,
        )?;
        req.sub_resource("legal-hold");
        req.query("versionId", self.version_id.as_deref());
        req.header_display("x-amz-sdk-checksum-algorithm", self.checksum_algorithm.as_ref())?;
        req.header("Content-MD5", self.content_md5.as_deref())?;
        req.header("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        req.header_display("x-amz-request-payer", self.request_payer.as_ref())?;
        req.optional_xml_body("LegalHold", self.legal_hold.as_ref())?;
        req.finish()
    }
}

// --- Multipart uploads ---

impl IntoS3Request for CreateMultipartUploadInput {
    fn into_s3_request(&self) -> Result<MarshalledRequest, MarshallError> {
        let mut req = MarshalledRequest::for_object(
            S3Operation::CreateMultipartUpload,
            &self.bucket,
            &self.key,
        )?;
        req.sub_resource("uploads");
        req.header_display("x-amz-acl", self.acl.as_ref())?;
        req.header_display(
            "x-amz-server-side-encryption-bucket-key-enabled",
            self.bucket_key_enabled,
        )?;
        req.header("Cache-Control", self.cache_control.as_deref())?;
        req.header_display("x-amz-checksum-algorithm", self.checksum_algorithm.as_ref())?;
        req.header("Content-Disposition", self.content_disposition.as_deref())?;
        req.header("Content-Encoding", self.content_encoding.as_deref())?;
        req.header("Content-Language", self.content_language.as_deref())?;
        req.header("Content-Type", self.content_type.as_deref())?;
        req.header("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        req.header_http_date("Expires", self.expires.as_ref())?;
        req.header("x-amz-grant-full-control", self.grant_full_control.as_deref())?;
        req.header("x-amz-grant-read", self.grant_read.as_deref())?;
        req.header("x-amz-grant-read-acp", self.grant_read_acp.as_deref())?;
        req.header("x-amz-grant-write-acp", self.grant_write_acp.as_deref())?;
        req.metadata(&self.metadata)?;
        req.header_display(
            "x-amz-object-lock-legal-hold",
            self.object_lock_legal_hold_status.as_ref(),
        )?;
        req.header_display("x-amz-object-lock-mode", self.object_lock_mode.as_ref())?;
        req.header_iso8601(
            "x-amz-object-lock-retain-until-date",
            self.object_lock_retain_until_date.as_ref(),
        )?;
        req.header_display("x-amz-request-payer", self.request_payer.as_ref())?;
        req.sse_customer(
            self.sse_customer_algorithm.as_deref(),
            self.sse_customer_key.as_deref(),
            self.sse_customer_key_md5.as_deref(),
        )?;
        req.header(
            "x-amz-server-side-encryption-context",
            self.ssekms_encryption_context.as_deref(),
        )?;
        req.header(
            "x-amz-server-side-encryption-aws-kms-key-id",
            self.ssekms_key_id.as_deref(),
        )?;
        req.header_display("x-amz-server-side-encryption", self.server_side_encryption.as_ref())?;
        req.header_display("x-amz-storage-class", self.storage_class.as_ref())?;
        req.header("x-amz-tagging", self.tagging.as_ref().map(encode_tagging).as_deref())?;
        req.header(
            "x-amz-website-redirect-location",
            self.website_redirect_location.as_deref(),
        )?;
        req.finish()
    }
}

impl IntoS3Request for UploadPartInput {
    fn into_s3_request(&self) -> Result<MarshalledRequest, MarshallError> {
        let mut req =
            MarshalledRequest::for_object(S3Operation::UploadPart, &self.bucket, &self.key)?;
        req.query_display("partNumber", Some(self.part_number));
        req.query("uploadId", Some(require("UploadId", &self.upload_id)?));
        req.header_display("x-amz-sdk-checksum-algorithm", self.checksum_algorithm.as_ref())?;
        req.header("x-amz-checksum-crc32", self.checksum_crc32.as_deref())?;
        req.header("x-amz-checksum-crc32c", self.checksum_crc32c.as_deref())?;
        req.header("x-amz-checksum-sha1", self.checksum_sha1.as_deref())?;
        req.header("x-amz-checksum-sha256", self.checksum_sha256.as_deref())?;
        req.header_display("Content-Length", self.content_length)?;
        req.header("Content-MD5", self.content_md5.as_deref())?;
        req.header("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        req.header_display("x-amz-request-payer", self.request_payer.as_ref())?;
        req.sse_customer(
            self.sse_customer_algorithm.as_deref(),
            self.sse_customer_key.as_deref(),
            self.sse_customer_key_md5.as_deref(),
        )?;
        req.raw_body(self.body.data.clone());
        req.finish()
    }
}

impl IntoS3Request for UploadPartCopyInput {
    fn into_s3_request(&self) -> Result<MarshalledRequest, MarshallError> {
        let mut req =
            MarshalledRequest::for_object(S3Operation::UploadPartCopy, &self.bucket, &self.key)?;
        req.query_display("partNumber", Some(self.part_number));
        req.query("uploadId", Some(require("UploadId", &self.upload_id)?));
        let copy_source = encode_copy_source(
            &self.copy_source_bucket,
            &self.copy_source_key,
            self.copy_source_version_id.as_deref(),
        )?;
        req.header("x-amz-copy-source", Some(&copy_source))?;
        req.header("x-amz-copy-source-if-match", self.copy_source_if_match.as_deref())?;
        req.header_http_date(
            "x-amz-copy-source-if-modified-since",
            self.copy_source_if_modified_since.as_ref(),
        )?;
        req.header(
            "x-amz-copy-source-if-none-match",
            self.copy_source_if_none_match.as_deref(),
        )?;
        req.header_http_date(
            "x-amz-copy-source-if-unmodified-since",
            self.copy_source_if_unmodified_since.as_ref(),
        )?;
        req.header("x-amz-copy-source-range", self.copy_source_range.as_deref())?;
        req.copy_source_sse_customer(
            self.copy_source_sse_customer_algorithm.as_deref(),
            self.copy_source_sse_customer_key.as_deref(),
            self.copy_source_sse_customer_key_md5.as_deref(),
        )?;
        req.header("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        req.header(
            "x-amz-source-expected-bucket-owner",
            self.expected_source_bucket_owner.as_deref(),
        )?;
        req.header_display("x-amz-request-payer", self.request_payer.as_ref())?;
        req.sse_customer(
            self.sse_customer_algorithm.as_deref(),
            self.sse_customer_key.as_deref(),
            self.sse_customer_key_md5.as_deref(),
        )?;
        req.finish()
    }
}

impl IntoS3Request for CompleteMultipartUploadInput {
    fn into_s3_request(&self) -> Result<MarshalledRequest, MarshallError> {
        let mut req = MarshalledRequest::for_object(
            S3Operation::CompleteMultipartUpload,
            &self.bucket,
            &self.key,
        )?;
        req.query("uploadId", Some(require("UploadId", &self.upload_id)?));
        req.header("x-amz-checksum-crc32", self.checksum_crc32.as_deref())?;
        req.header("x-amz-checksum-crc32c", self.checksum_crc32c.as_deref())?;
        req.header("x-amz-checksum-sha1", self.checksum_sha1.as_deref())?;
        req.header("x-amz-checksum-sha256", self.checksum_sha256.as_deref())?;
        req.header("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        req.header("If-Match", self.if_match.as_deref())?;
        req.header("If-None-Match", self.if_none_match.as_deref())?;
        req.header_display("x-amz-request-payer", self.request_payer.as_ref())?;
        req.sse_customer(
            self.sse_customer_algorithm.as_deref(),
            self.sse_customer_key.as_deref(),
            self.sse_customer_key_md5.as_deref(),
        )?;
        req.optional_xml_body("CompleteMultipartUpload", self.multipart_upload.as_ref())?;
        req.finish()
    }
}

impl IntoS3Request for AbortMultipartUploadInput {
    fn into_s3_request(&self) -> Result<MarshalledRequest, MarshallError> {
        let mut req = MarshalledRequest::for_object(
            S3Operation::AbortMultipartUpload,
            &self.bucket,
            &self.key,
        )?;
        req.query("uploadId", Some(require("UploadId", &self.upload_id)?));
        req.header("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        req.header_display("x-amz-request-payer", self.request_payer.as_ref())?;
        req.finish()
    }
}

impl IntoS3Request for ListPartsInput {
    fn into_s3_request(&self) -> Result<MarshalledRequest, MarshallError> {
        let mut req =
            MarshalledRequest::for_object(S3Operation::ListParts, &self.bucket, &self.key)?;
        req.query_display("max-parts", self.max_parts);
        req.query("part-number-marker", self.part_number_marker.as_deref());
        req.query("uploadId", Some(require("UploadId", &self.upload_id)?));
        req.header("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        req.header_display("x-amz-request-payer", self.request_payer.as_ref())?;
        req.sse_customer(
            self.sse_customer_algorithm.as_deref(),
            self.sse_customer_key.as_deref(),
            self.sse_customer_key_md5.as_deref(),
        )?;
        req.finish()
    }
}

impl IntoS3Request for ListMultipartUploadsInput {
    fn into_s3_request(&self) -> Result<MarshalledRequest, MarshallError> {
        let mut req =
            MarshalledRequest::for_bucket(S3Operation::ListMultipartUploads, &self.bucket)?;
        req.sub_resource("uploads");
        req.query("delimiter", self.delimiter.as_deref());
        req.query_display("encoding-type", self.encoding_type.as_ref());
        req.query("key-marker", self.key_marker.as_deref());
        req.query_display("max-uploads", self.max_uploads);
        req.query("prefix", self.prefix.as_deref());
        req.query("upload-id-marker", self.upload_id_marker.as_deref());
        req.header("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        req.header_display("x-amz-request-payer", self.request_payer.as_ref())?;
        req.finish()
    }
}

// --- Listing ---

impl IntoS3Request for ListObjectsInput {
    fn into_s3_request(&self) -> Result<MarshalledRequest, MarshallError> {
        let mut req = MarshalledRequest::for_bucket(S3Operation::ListObjects, &self.bucket)?;
        req.query("delimiter", self.delimiter.as_deref());
        req.query_display("encoding-type", self.encoding_type.as_ref());
        req.query("marker", self.marker.as_deref());
        req.query_display("max-keys", self.max_keys);
        req.query("prefix", self.prefix.as_deref());
        req.header("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        req.header_display("x-amz-request-payer", self.request_payer.as_ref())?;
        req.finish()
    }
}

impl IntoS3Request for ListObjectsV2Input {
    fn into_s3_request(&self) -> Result<MarshalledRequest, MarshallError> {
        let mut req = MarshalledRequest::for_bucket(S3Operation::ListObjectsV2, &self.bucket)?;
        req.query("list-type", Some("2"));
        req.query("continuation-token", self.continuation_token.as_deref());
        req.query("delimiter", self.delimiter.as_deref());
        req.query_display("encoding-type", self.encoding_type.as_ref());
        req.query_display("fetch-owner", self.fetch_owner);
        req.query_display("max-keys", self.max_keys);
        req.query("prefix", self.prefix.as_deref());
        req.query("start-after", self.start_after.as_deref());
        req.header("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        req.header_display("x-amz-request-payer", self.request_payer.as_ref())?;
        req.finish()
    }
}

impl IntoS3Request for ListObjectVersionsInput {
    fn into_s3_request(&self) -> Result<MarshalledRequest, MarshallError> {
        let mut req =
            MarshalledRequest::for_bucket(S3Operation::ListObjectVersions, &self.bucket)?;
        req.sub_resource("versions");
        req.query("delimiter", self.delimiter.as_deref());
        req.query_display("encoding-type", self.encoding_type.as_ref());
        req.query("key-marker", self.key_marker.as_deref());
        req.query_display("max-keys", self.max_keys);
        req.query("prefix", self.prefix.as_deref());
        req.query("version-id-marker", self.version_id_marker.as_deref());
        req.header("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        req.header_display("x-amz-request-payer", self.request_payer.as_ref())?;
        req.finish()
    }
}
