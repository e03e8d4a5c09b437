//! Bucket lifecycle operations.

use serde::Serialize;

use crate::types::{Bucket, Owner};

/// Output of ListBuckets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListBucketsOutput {
    pub buckets: Vec<Bucket>,
    pub owner: Option<Owner>,
    pub continuation_token: Option<String>,
    pub prefix: Option<String>,
}

/// Output of CreateBucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateBucketOutput {
    /// HTTP header: `Location`.
    pub location: Option<String>,
}

/// Output of HeadBucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeadBucketOutput {
    /// HTTP header: `x-amz-access-point-alias`.
    pub access_point_alias: Option<bool>,
    /// HTTP header: `x-amz-bucket-location-name`.
    pub bucket_location_name: Option<String>,
    /// HTTP header: `x-amz-bucket-location-type`.
    pub bucket_location_type: Option<String>,
    /// HTTP header: `x-amz-bucket-region`.
    pub bucket_region: Option<String>,
}

/// Output of GetBucketLocation.
///
/// An empty `LocationConstraint` element means `us-east-1`; it is reported
/// as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetBucketLocationOutput {
    pub location_constraint: Option<String>,
}
