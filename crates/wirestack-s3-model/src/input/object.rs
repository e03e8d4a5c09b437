//! Object operations.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::enums::{
    ChecksumAlgorithm, ChecksumMode, MetadataDirective, ObjectCannedAcl,
    ObjectLockLegalHoldStatus, ObjectLockMode, RequestPayer, ServerSideEncryption, StorageClass,
    TaggingDirective,
};
use crate::request::StreamingBlob;
use crate::types::{
    AccessControlPolicy, Delete, ObjectLockLegalHold, ObjectLockRetention, RestoreRequest, Tagging,
};

/// Input of PutObject.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutObjectInput {
    /// HTTP label.
    pub bucket: String,
    /// HTTP label.
    pub key: String,
    /// HTTP payload body.
    pub body: StreamingBlob,
    /// HTTP header: `x-amz-acl`.
    pub acl: Option<ObjectCannedAcl>,
    /// HTTP header: `x-amz-server-side-encryption-bucket-key-enabled`.
    pub bucket_key_enabled: Option<bool>,
    /// HTTP header: `Cache-Control`.
    pub cache_control: Option<String>,
    /// HTTP header: `x-amz-sdk-checksum-algorithm`.
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    /// HTTP header: `x-amz-checksum-crc32`.
    pub checksum_crc32: Option<String>,
    /// HTTP header: `x-amz-checksum-crc32c`.
    pub checksum_crc32c: Option<String>,
    /// HTTP header: `x-amz-checksum-sha1`.
    pub checksum_sha1: Option<String>,
    /// HTTP header: `x-amz-checksum-sha256`.
    pub checksum_sha256: Option<String>,
    /// HTTP header: `Content-Disposition`.
    pub content_disposition: Option<String>,
    /// HTTP header: `Content-Encoding`.
    pub content_encoding: Option<String>,
    /// HTTP header: `Content-Language`.
    pub content_language: Option<String>,
    /// HTTP header: `Content-Length`. Defaults to the body length.
    pub content_length: Option<i64>,
    /// HTTP header: `Content-MD5`.
    pub content_md5: Option<String>,
    /// HTTP header: `Content-Type`.
    pub content_type: Option<String>,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// HTTP header: `Expires`.
    pub expires: Option<DateTime<Utc>>,
    /// HTTP header: `x-amz-grant-full-control`.
    pub grant_full_control: Option<String>,
    /// HTTP header: `x-amz-grant-read`.
    pub grant_read: Option<String>,
    /// HTTP header: `x-amz-grant-read-acp`.
    pub grant_read_acp: Option<String>,
    /// HTTP header: `x-amz-grant-write-acp`.
    pub grant_write_acp: Option<String>,
    /// HTTP header: `If-Match`.
    pub if_match: Option<String>,
    /// HTTP header: `If-None-Match`.
    pub if_none_match: Option<String>,
    /// HTTP prefix headers: `x-amz-meta-`.
    pub metadata: HashMap<String, String>,
    /// HTTP header: `x-amz-object-lock-legal-hold`.
    pub object_lock_legal_hold_status: Option<ObjectLockLegalHoldStatus>,
    /// HTTP header: `x-amz-object-lock-mode`.
    pub object_lock_mode: Option<ObjectLockMode>,
    /// HTTP header: `x-amz-object-lock-retain-until-date`.
    pub object_lock_retain_until_date: Option<DateTime<Utc>>,
    /// HTTP header: `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
    /// HTTP header: `x-amz-server-side-encryption-customer-algorithm`.
    pub sse_customer_algorithm: Option<String>,
    /// HTTP header: `x-amz-server-side-encryption-customer-key`.
    pub sse_customer_key: Option<String>,
    /// HTTP header: `x-amz-server-side-encryption-customer-key-MD5`.
    pub sse_customer_key_md5: Option<String>,
    /// HTTP header: `x-amz-server-side-encryption-context`.
    pub ssekms_encryption_context: Option<String>,
    /// HTTP header: `x-amz-server-side-encryption-aws-kms-key-id`.
    pub ssekms_key_id: Option<String>,
    /// HTTP header: `x-amz-server-side-encryption`.
    pub server_side_encryption: Option<ServerSideEncryption>,
    /// HTTP header: `x-amz-storage-class`.
    pub storage_class: Option<StorageClass>,
    /// HTTP header: `x-amz-tagging`, URL-encoded.
    pub tagging: Option<Tagging>,
    /// HTTP header: `x-amz-website-redirect-location`.
    pub website_redirect_location: Option<String>,
}

/// Input of GetObject.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetObjectInput {
    /// HTTP label.
    pub bucket: String,
    /// HTTP label.
    pub key: String,
    /// HTTP header: `x-amz-checksum-mode`.
    pub checksum_mode: Option<ChecksumMode>,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// HTTP header: `If-Match`.
    pub if_match: Option<String>,
    /// HTTP header: `If-Modified-Since`.
    pub if_modified_since: Option<DateTime<Utc>>,
    /// HTTP header: `If-None-Match`.
    pub if_none_match: Option<String>,
    /// HTTP header: `If-Unmodified-Since`.
    pub if_unmodified_since: Option<DateTime<Utc>>,
    /// HTTP query: `partNumber`.
    pub part_number: Option<i32>,
    /// HTTP header: `Range`.
    pub range: Option<String>,
    /// HTTP header: `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
    /// HTTP query: `response-cache-control`.
    pub response_cache_control: Option<String>,
    /// HTTP query: `response-content-disposition`.
    pub response_content_disposition: Option<String>,
    /// HTTP query: `response-content-encoding`.
    pub response_content_encoding: Option<String>,
    /// HTTP query: `response-content-language`.
    pub response_content_language: Option<String>,
    /// HTTP query: `response-content-type`.
    pub response_content_type: Option<String>,
    /// HTTP query: `response-expires`.
    pub response_expires: Option<DateTime<Utc>>,
    /// HTTP header: `x-amz-server-side-encryption-customer-algorithm`.
    pub sse_customer_algorithm: Option<String>,
    /// HTTP header: `x-amz-server-side-encryption-customer-key`.
    pub sse_customer_key: Option<String>,
    /// HTTP header: `x-amz-server-side-encryption-customer-key-MD5`.
    pub sse_customer_key_md5: Option<String>,
    /// HTTP query: `versionId`.
    pub version_id: Option<String>,
}

/// Input of HeadObject.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadObjectInput {
    /// HTTP label.
    pub bucket: String,
    /// HTTP label.
    pub key: String,
    /// HTTP header: `x-amz-checksum-mode`.
    pub checksum_mode: Option<ChecksumMode>,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// HTTP header: `If-Match`.
    pub if_match: Option<String>,
    /// HTTP header: `If-Modified-Since`.
    pub if_modified_since: Option<DateTime<Utc>>,
    /// HTTP header: `If-None-Match`.
    pub if_none_match: Option<String>,
    /// HTTP header: `If-Unmodified-Since`.
    pub if_unmodified_since: Option<DateTime<Utc>>,
    /// HTTP query: `partNumber`.
    pub part_number: Option<i32>,
    /// HTTP header: `Range`.
    pub range: Option<String>,
    /// HTTP header: `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
    /// HTTP header: `x-amz-server-side-encryption-customer-algorithm`.
    pub sse_customer_algorithm: Option<String>,
    /// HTTP header: `x-amz-server-side-encryption-customer-key`.
    pub sse_customer_key: Option<String>,
    /// HTTP header: `x-amz-server-side-encryption-customer-key-MD5`.
    pub sse_customer_key_md5: Option<String>,
    /// HTTP query: `versionId`.
    pub version_id: Option<String>,
}

/// Input of DeleteObject.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteObjectInput {
    /// HTTP label.
    pub bucket: String,
    /// HTTP label.
    pub key: String,
    /// HTTP header: `x-amz-bypass-governance-retention`.
    pub bypass_governance_retention: Option<bool>,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// HTTP header: `x-amz-mfa`.
    pub mfa: Option<String>,
    /// HTTP header: `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
    /// HTTP query: `versionId`.
    pub version_id: Option<String>,
}

/// Input of DeleteObjects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteObjectsInput {
    /// HTTP label.
    pub bucket: String,
    /// HTTP payload body.
    pub delete: Delete,
    /// HTTP header: `x-amz-bypass-governance-retention`.
    pub bypass_governance_retention: Option<bool>,
    /// HTTP header: `x-amz-sdk-checksum-algorithm`.
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// HTTP header: `x-amz-mfa`.
    pub mfa: Option<String>,
    /// HTTP header: `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
}

/// Input of CopyObject.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyObjectInput {
    /// HTTP label.
    pub bucket: String,
    /// HTTP label.
    pub key: String,
    /// Source bucket, part of the `x-amz-copy-source` header.
    pub copy_source_bucket: String,
    /// Source key, part of the `x-amz-copy-source` header.
    pub copy_source_key: String,
    /// Source version, part of the `x-amz-copy-source` header.
    pub copy_source_version_id: Option<String>,
    /// HTTP header: `x-amz-acl`.
    pub acl: Option<ObjectCannedAcl>,
    /// HTTP header: `x-amz-server-side-encryption-bucket-key-enabled`.
    pub bucket_key_enabled: Option<bool>,
    /// HTTP header: `Cache-Control`.
    pub cache_control: Option<String>,
    /// HTTP header: `x-amz-checksum-algorithm`.
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    /// HTTP header: `Content-Disposition`.
    pub content_disposition: Option<String>,
    /// HTTP header: `Content-Encoding`.
    pub content_encoding: Option<String>,
    /// HTTP header: `Content-Language`.
    pub content_language: Option<String>,
    /// HTTP header: `Content-Type`.
    pub content_type: Option<String>,
    /// HTTP header: `x-amz-copy-source-if-match`.
    pub copy_source_if_match: Option<String>,
    /// HTTP header: `x-amz-copy-source-if-modified-since`.
    pub copy_source_if_modified_since: Option<DateTime<Utc>>,
    /// HTTP header: `x-amz-copy-source-if-none-match`.
    pub copy_source_if_none_match: Option<String>,
    /// HTTP header: `x-amz-copy-source-if-unmodified-since`.
    pub copy_source_if_unmodified_since: Option<DateTime<Utc>>,
    /// HTTP header: `x-amz-copy-source-server-side-encryption-customer-algorithm`.
    pub copy_source_sse_customer_algorithm: Option<String>,
    /// HTTP header: `x-amz-copy-source-server-side-encryption-customer-key`.
    pub copy_source_sse_customer_key: Option<String>,
    /// HTTP header: `x-amz-copy-source-server-side-encryption-customer-key-MD5`.
    pub copy_source_sse_customer_key_md5: Option<String>,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// HTTP header: `x-amz-source-expected-bucket-owner`.
    pub expected_source_bucket_owner: Option<String>,
    /// HTTP header: `Expires`.
    pub expires: Option<DateTime<Utc>>,
    /// HTTP header: `x-amz-grant-full-control`.
    pub grant_full_control: Option<String>,
    /// HTTP header: `x-amz-grant-read`.
    pub grant_read: Option<String>,
    /// HTTP header: `x-amz-grant-read-acp`.
    pub grant_read_acp: Option<String>,
    /// HTTP header: `x-amz-grant-write-acp`.
    pub grant_write_acp: Option<String>,
    /// HTTP prefix headers: `x-amz-meta-`.
    pub metadata: HashMap<String, String>,
    /// HTTP header: `x-amz-metadata-directive`.
    pub metadata_directive: Option<MetadataDirective>,
    /// HTTP header: `x-amz-object-lock-legal-hold`.
    pub object_lock_legal_hold_status: Option<ObjectLockLegalHoldStatus>,
    /// HTTP header: `x-amz-object-lock-mode`.
    pub object_lock_mode: Option<ObjectLockMode>,
    /// HTTP header: `x-amz-object-lock-retain-until-date`.
    pub object_lock_retain_until_date: Option<DateTime<Utc>>,
    /// HTTP header: `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
    /// HTTP header: `x-amz-server-side-encryption-customer-algorithm`.
    pub sse_customer_algorithm: Option<String>,
    /// HTTP header: `x-amz-server-side-encryption-customer-key`.
    pub sse_customer_key: Option<String>,
    /// HTTP header: `x-amz-server-side-encryption-customer-key-MD5`.
    pub sse_customer_key_md5: Option<String>,
    /// HTTP header: `x-amz-server-side-encryption-context`.
    pub ssekms_encryption_context: Option<String>,
    /// HTTP header: `x-amz-server-side-encryption-aws-kms-key-id`.
    pub ssekms_key_id: Option<String>,
    /// HTTP header: `x-amz-server-side-encryption`.
    pub server_side_encryption: Option<ServerSideEncryption>,
    /// HTTP header: `x-amz-storage-class`.
    pub storage_class: Option<StorageClass>,
    /// HTTP header: `x-amz-tagging`, URL-encoded.
    pub tagging: Option<Tagging>,
    /// HTTP header: `x-amz-tagging-directive`.
    pub tagging_directive: Option<TaggingDirective>,
    /// HTTP header: `x-amz-website-redirect-location`.
    pub website_redirect_location: Option<String>,
}

/// Input of RestoreObject.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestoreObjectInput {
    /// HTTP label.
    pub bucket: String,
    /// HTTP label.
    pub key: String,
    /// HTTP payload body.
    pub restore_request: Option<RestoreRequest>,
    /// HTTP header: `x-amz-sdk-checksum-algorithm`.
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// HTTP header: `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
    /// HTTP query: `versionId`.
    pub version_id: Option<String>,
}

/// Input of GetObjectTagging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetObjectTaggingInput {
    /// HTTP label.
    pub bucket: String,
    /// HTTP label.
    pub key: String,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// HTTP header: `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
    /// HTTP query: `versionId`.
    pub version_id: Option<String>,
}

/// Input of PutObjectTagging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutObjectTaggingInput {
    /// HTTP label.
    pub bucket: String,
    /// HTTP label.
    pub key: String,
    /// HTTP payload body.
    pub tagging: Tagging,
    /// HTTP header: `x-amz-sdk-checksum-algorithm`.
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    /// HTTP header: `Content-MD5`.
    pub content_md5: Option<String>,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// HTTP header: `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
    /// HTTP query: `versionId`.
    pub version_id: Option<String>,
}

/// Input of DeleteObjectTagging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteObjectTaggingInput {
    /// HTTP label.
    pub bucket: String,
    /// HTTP label.
    pub key: String,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// HTTP query: `versionId`.
    pub version_id: Option<String>,
}

/// Input of GetObjectAcl.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetObjectAclInput {
    /// HTTP label.
    pub bucket: String,
    /// HTTP label.
    pub key: String,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// HTTP header: `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
    /// HTTP query: `versionId`.
    pub version_id: Option<String>,
}

/// Input of PutObjectAcl.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutObjectAclInput {
    /// HTTP label.
    pub bucket: String,
    /// HTTP label.
    pub key: String,
    /// HTTP header: `x-amz-acl`.
    pub acl: Option<ObjectCannedAcl>,
    /// HTTP payload body.
    pub access_control_policy: Option<AccessControlPolicy>,
    /// HTTP header: `x-amz-sdk-checksum-algorithm`.
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    /// HTTP header: `Content-MD5`.
    pub content_md5: Option<String>,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// HTTP header: `x-amz-grant-full-control`.
    pub grant_full_control: Option<String>,
    /// HTTP header: `x-amz-grant-read`.
    pub grant_read: Option<String>,
    /// HTTP header: `x-amz-grant-read-acp`.
    pub grant_read_acp: Option<String>,
    /// HTTP header: `x-amz-grant-write`.
    pub grant_write: Option<String>,
    /// HTTP header: `x-amz-grant-write-acp`.
    pub grant_write_acp: Option<String>,
    /// HTTP header: `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
    /// HTTP query: `versionId`.
    pub version_id: Option<String>,
}

/// Input of GetObjectRetention.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetObjectRetentionInput {
    /// HTTP label.
    pub bucket: String,
    /// HTTP label.
    pub key: String,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// HTTP header: `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
    /// HTTP query: `versionId`.
    pub version_id: Option<String>,
}

/// Input of PutObjectRetention.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutObjectRetentionInput {
    /// HTTP label.
    pub bucket: String,
    /// HTTP label.
    pub key: String,
    /// HTTP payload body.
    pub retention: Option<ObjectLockRetention>,
    /// HTTP header: `x-amz-bypass-governance-retention`.
    pub bypass_governance_retention: Option<bool>,
    /// HTTP header: `x-amz-sdk-checksum-algorithm`.
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    /// HTTP header: `Content-MD5`.
    pub content_md5: Option<String>,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// HTTP header: `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
    /// HTTP query: `versionId`.
    pub version_id: Option<String>,
}

/// Input of GetObjectLegalHold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetObjectLegalHoldInput {
    /// HTTP label.
    pub bucket: String,
    /// HTTP label.
    pub key: String,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// HTTP header: `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
    /// HTTP query: `versionId`.
    pub version_id: Option<String>,
}

/// Input of PutObjectLegalHold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutObjectLegalHoldInput {
    /// HTTP label.
    pub bucket: String,
    /// HTTP label.
    pub key: String,
    /// HTTP payload body.
    pub legal_hold: Option<ObjectLockLegalHold>,
    /// HTTP header: `x-amz-sdk-checksum-algorithm`.
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    /// HTTP header: `Content-MD5`.
    pub content_md5: Option<String>,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// HTTP header: `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
    /// HTTP query: `versionId`.
    pub version_id: Option<String>,
}
