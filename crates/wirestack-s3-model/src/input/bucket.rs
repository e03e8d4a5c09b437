//! Bucket lifecycle operations.

use crate::enums::{BucketCannedAcl, ObjectOwnership};
use crate::types::CreateBucketConfiguration;

/// Input of ListBuckets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListBucketsInput {
    /// HTTP query: `bucket-region`.
    pub bucket_region: Option<String>,
    /// HTTP query: `continuation-token`.
    pub continuation_token: Option<String>,
    /// HTTP query: `max-buckets`.
    pub max_buckets: Option<i32>,
    /// HTTP query: `prefix`.
    pub prefix: Option<String>,
}

/// Input of CreateBucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateBucketInput {
    /// HTTP label.
    pub bucket: String,
    /// HTTP header: `x-amz-acl`.
    pub acl: Option<BucketCannedAcl>,
    /// HTTP payload body.
    pub create_bucket_configuration: Option<CreateBucketConfiguration>,
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
    /// HTTP header: `x-amz-bucket-object-lock-enabled`.
    pub object_lock_enabled_for_bucket: Option<bool>,
    /// HTTP header: `x-amz-object-ownership`.
    pub object_ownership: Option<ObjectOwnership>,
}

/// Input of DeleteBucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteBucketInput {
    /// HTTP label.
    pub bucket: String,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

/// Input of HeadBucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadBucketInput {
    /// HTTP label.
    pub bucket: String,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

/// Input of GetBucketLocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBucketLocationInput {
    /// HTTP label.
    pub bucket: String,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}
