//! Object operations.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::enums::{
    ArchiveStatus, ObjectLockLegalHoldStatus, ObjectLockMode, ReplicationStatus, RequestCharged,
    ServerSideEncryption, StorageClass,
};
use crate::request::StreamingBlob;
use crate::types::{
    CopyObjectResult, DeleteError, DeletedObject, Grant, ObjectLockLegalHold,
    ObjectLockRetention, Owner, Tag,
};

/// Output of PutObject.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PutObjectOutput {
    /// HTTP header: `x-amz-server-side-encryption-bucket-key-enabled`.
    pub bucket_key_enabled: Option<bool>,
    /// HTTP header: `x-amz-checksum-crc32`.
    pub checksum_crc32: Option<String>,
    /// HTTP header: `x-amz-checksum-crc32c`.
    pub checksum_crc32c: Option<String>,
    /// HTTP header: `x-amz-checksum-sha1`.
    pub checksum_sha1: Option<String>,
    /// HTTP header: `x-amz-checksum-sha256`.
    pub checksum_sha256: Option<String>,
    /// HTTP header: `ETag`.
    pub e_tag: Option<String>,
    /// HTTP header: `x-amz-expiration`.
    pub expiration: Option<String>,
    /// HTTP header: `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
    /// HTTP header: `x-amz-server-side-encryption-customer-algorithm`.
    pub sse_customer_algorithm: Option<String>,
    /// HTTP header: `x-amz-server-side-encryption-customer-key-MD5`.
    pub sse_customer_key_md5: Option<String>,
    /// HTTP header: `x-amz-server-side-encryption-context`.
    pub ssekms_encryption_context: Option<String>,
    /// HTTP header: `x-amz-server-side-encryption-aws-kms-key-id`.
    pub ssekms_key_id: Option<String>,
    /// HTTP header: `x-amz-server-side-encryption`.
    pub server_side_encryption: Option<ServerSideEncryption>,
    /// HTTP header: `x-amz-version-id`.
    pub version_id: Option<String>,
}

/// Output of GetObject.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetObjectOutput {
    /// HTTP payload body.
    #[serde(skip)]
    pub body: StreamingBlob,
    /// HTTP header: `accept-ranges`.
    pub accept_ranges: Option<String>,
    /// HTTP header: `x-amz-server-side-encryption-bucket-key-enabled`.
    pub bucket_key_enabled: Option<bool>,
    /// HTTP header: `Cache-Control`.
    pub cache_control: Option<String>,
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
    /// HTTP header: `Content-Length`.
    pub content_length: Option<i64>,
    /// HTTP header: `Content-Range`.
    pub content_range: Option<String>,
    /// HTTP header: `Content-Type`.
    pub content_type: Option<String>,
    /// HTTP header: `x-amz-delete-marker`.
    pub delete_marker: Option<bool>,
    /// HTTP header: `ETag`.
    pub e_tag: Option<String>,
    /// HTTP header: `x-amz-expiration`.
    pub expiration: Option<String>,
    /// HTTP header: `Expires`.
    pub expires: Option<DateTime<Utc>>,
    /// HTTP header: `Last-Modified`.
    pub last_modified: Option<DateTime<Utc>>,
    /// HTTP prefix headers: `x-amz-meta-`.
    pub metadata: HashMap<String, String>,
    /// HTTP header: `x-amz-missing-meta`.
    pub missing_meta: Option<i32>,
    /// HTTP header: `x-amz-object-lock-legal-hold`.
    pub object_lock_legal_hold_status: Option<ObjectLockLegalHoldStatus>,
    /// HTTP header: `x-amz-object-lock-mode`.
    pub object_lock_mode: Option<ObjectLockMode>,
    /// HTTP header: `x-amz-object-lock-retain-until-date`.
    pub object_lock_retain_until_date: Option<DateTime<Utc>>,
    /// HTTP header: `x-amz-mp-parts-count`.
    pub parts_count: Option<i32>,
    /// HTTP header: `x-amz-replication-status`.
    pub replication_status: Option<ReplicationStatus>,
    /// HTTP header: `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
    /// HTTP header: `x-amz-restore`.
    pub restore: Option<String>,
    /// HTTP header: `x-amz-server-side-encryption-customer-algorithm`.
    pub sse_customer_algorithm: Option<String>,
    /// HTTP header: `x-amz-server-side-encryption-customer-key-MD5`.
    pub sse_customer_key_md5: Option<String>,
    /// HTTP header: `x-amz-server-side-encryption-aws-kms-key-id`.
    pub ssekms_key_id: Option<String>,
    /// HTTP header: `x-amz-server-side-encryption`.
    pub server_side_encryption: Option<ServerSideEncryption>,
    /// HTTP header: `x-amz-storage-class`.
    pub storage_class: Option<StorageClass>,
    /// HTTP header: `x-amz-tagging-count`.
    pub tag_count: Option<i32>,
    /// HTTP header: `x-amz-version-id`.
    pub version_id: Option<String>,
    /// HTTP header: `x-amz-website-redirect-location`.
    pub website_redirect_location: Option<String>,
}

/// Output of HeadObject.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeadObjectOutput {
    /// HTTP header: `accept-ranges`.
    pub accept_ranges: Option<String>,
    /// HTTP header: `x-amz-archive-status`.
    pub archive_status: Option<ArchiveStatus>,
    /// HTTP header: `x-amz-server-side-encryption-bucket-key-enabled`.
    pub bucket_key_enabled: Option<bool>,
    /// HTTP header: `Cache-Control`.
    pub cache_control: Option<String>,
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
    /// HTTP header: `Content-Length`.
    pub content_length: Option<i64>,
    /// HTTP header: `Content-Type`.
    pub content_type: Option<String>,
    /// HTTP header: `x-amz-delete-marker`.
    pub delete_marker: Option<bool>,
    /// HTTP header: `ETag`.
    pub e_tag: Option<String>,
    /// HTTP header: `x-amz-expiration`.
    pub expiration: Option<String>,
    /// HTTP header: `Expires`.
    pub expires: Option<DateTime<Utc>>,
    /// HTTP header: `Last-Modified`.
    pub last_modified: Option<DateTime<Utc>>,
    /// HTTP prefix headers: `x-amz-meta-`.
    pub metadata: HashMap<String, String>,
    /// HTTP header: `x-amz-missing-meta`.
    pub missing_meta: Option<i32>,
    /// HTTP header: `x-amz-object-lock-legal-hold`.
    pub object_lock_legal_hold_status: Option<ObjectLockLegalHoldStatus>,
    /// HTTP header: `x-amz-object-lock-mode`.
    pub object_lock_mode: Option<ObjectLockMode>,
    /// HTTP header: `x-amz-object-lock-retain-until-date`.
    pub object_lock_retain_until_date: Option<DateTime<Utc>>,
    /// HTTP header: `x-amz-mp-parts-count`.
    pub parts_count: Option<i32>,
    /// HTTP header: `x-amz-replication-status`.
    pub replication_status: Option<ReplicationStatus>,
    /// HTTP header: `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
    /// HTTP header: `x-amz-restore`.
    pub restore: Option<String>,
    /// HTTP header: `x-amz-server-side-encryption-customer-algorithm`.
    pub sse_customer_algorithm: Option<String>,
    /// HTTP header: `x-amz-server-side-encryption-customer-key-MD5`.
    pub sse_customer_key_md5: Option<String>,
    /// HTTP header: `x-amz-server-side-encryption-aws-kms-key-id`.
    pub ssekms_key_id: Option<String>,
    /// HTTP header: `x-amz-server-side-encryption`.
    pub server_side_encryption: Option<ServerSideEncryption>,
    /// HTTP header: `x-amz-storage-class`.
    pub storage_class: Option<StorageClass>,
    /// HTTP header: `x-amz-version-id`.
    pub version_id: Option<String>,
    /// HTTP header: `x-amz-website-redirect-location`.
    pub website_redirect_location: Option<String>,
}

/// Output of DeleteObject.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeleteObjectOutput {
    /// HTTP header: `x-amz-delete-marker`.
    pub delete_marker: Option<bool>,
    /// HTTP header: `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
    /// HTTP header: `x-amz-version-id`.
    pub version_id: Option<String>,
}

/// Output of DeleteObjects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeleteObjectsOutput {
    pub deleted: Vec<DeletedObject>,
    pub errors: Vec<DeleteError>,
    /// HTTP header: `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
}

/// Output of CopyObject.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CopyObjectOutput {
    /// HTTP payload body.
    pub copy_object_result: Option<CopyObjectResult>,
    /// HTTP header: `x-amz-server-side-encryption-bucket-key-enabled`.
    pub bucket_key_enabled: Option<bool>,
    /// HTTP header: `x-amz-copy-source-version-id`.
    pub copy_source_version_id: Option<String>,
    /// HTTP header: `x-amz-expiration`.
    pub expiration: Option<String>,
    /// HTTP header: `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
    /// HTTP header: `x-amz-server-side-encryption-customer-algorithm`.
    pub sse_customer_algorithm: Option<String>,
    /// HTTP header: `x-amz-server-side-encryption-customer-key-MD5`.
    pub sse_customer_key_md5: Option<String>,
    /// HTTP header: `x-amz-server-side-encryption-context`.
    pub ssekms_encryption_context: Option<String>,
    /// HTTP header: `x-amz-server-side-encryption-aws-kms-key-id`.
    pub ssekms_key_id: Option<String>,
    /// HTTP header: `x-amz-server-side-encryption`.
    pub server_side_encryption: Option<ServerSideEncryption>,
    /// HTTP header: `x-amz-version-id`.
    pub version_id: Option<String>,
}

/// Output of RestoreObject.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RestoreObjectOutput {
    /// HTTP header: `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
    /// HTTP header: `x-amz-restore-output-path`.
    pub restore_output_path: Option<String>,
}

/// Output of GetObjectTagging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetObjectTaggingOutput {
    pub tag_set: Vec<Tag>,
    /// HTTP header: `x-amz-version-id`.
    pub version_id: Option<String>,
}

/// Output of PutObjectTagging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PutObjectTaggingOutput {
    /// HTTP header: `x-amz-version-id`.
    pub version_id: Option<String>,
}

/// Output of DeleteObjectTagging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeleteObjectTaggingOutput {
    /// HTTP header: `x-amz-version-id`.
    pub version_id: Option<String>,
}

/// Output of GetObjectAcl.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetObjectAclOutput {
    pub owner: Option<Owner>,
    pub grants: Vec<Grant>,
    /// HTTP header: `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
}

/// Output of PutObjectAcl.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PutObjectAclOutput {
    /// HTTP header: `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
}

/// Output of GetObjectRetention.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetObjectRetentionOutput {
    /// HTTP payload body.
    pub retention: Option<ObjectLockRetention>,
}

/// Output of PutObjectRetention.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PutObjectRetentionOutput {
    /// HTTP header: `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
}

/// Output of GetObjectLegalHold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetObjectLegalHoldOutput {
    /// HTTP payload body.
    pub legal_hold: Option<ObjectLockLegalHold>,
}

/// Output of PutObjectLegalHold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PutObjectLegalHoldOutput {
    /// HTTP header: `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
}
