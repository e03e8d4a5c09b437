//! Bucket sub-resource (configuration) operations.

use crate::enums::{BucketCannedAcl, ChecksumAlgorithm, RequestPayer};
use crate::types::{
    AccelerateConfiguration, AccessControlPolicy, BucketLifecycleConfiguration,
    BucketLoggingStatus, CorsConfiguration, InventoryConfiguration, MetricsConfiguration,
    NotificationConfiguration, ObjectLockConfiguration, OwnershipControls,
    PublicAccessBlockConfiguration, ReplicationConfiguration, RequestPaymentConfiguration,
    ServerSideEncryptionConfiguration, Tagging, VersioningConfiguration, WebsiteConfiguration,
};

/// Declares inputs that carry only the bucket label and the expected owner.
macro_rules! bucket_only_input {
    ($($(#[$meta:meta])* $name:ident;)+) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Default, PartialEq, Eq)]
            pub struct $name {
                /// HTTP label.
                pub bucket: String,
                /// HTTP header: `x-amz-expected-bucket-owner`.
                pub expected_bucket_owner: Option<String>,
            }
        )+
    };
}

bucket_only_input! {
    /// Input of DeleteBucketCors.
    DeleteBucketCorsInput;
    /// Input of DeleteBucketEncryption.
    DeleteBucketEncryptionInput;
    /// Input of DeleteBucketLifecycle.
    DeleteBucketLifecycleInput;
    /// Input of DeleteBucketOwnershipControls.
    DeleteBucketOwnershipControlsInput;
    /// Input of DeleteBucketPolicy.
    DeleteBucketPolicyInput;
    /// Input of DeleteBucketReplication.
    DeleteBucketReplicationInput;
    /// Input of DeleteBucketTagging.
    DeleteBucketTaggingInput;
    /// Input of DeleteBucketWebsite.
    DeleteBucketWebsiteInput;
    /// Input of DeletePublicAccessBlock.
    DeletePublicAccessBlockInput;
    /// Input of GetBucketAcl.
    GetBucketAclInput;
    /// Input of GetBucketCors.
    GetBucketCorsInput;
    /// Input of GetBucketEncryption.
    GetBucketEncryptionInput;
    /// Input of GetBucketLifecycleConfiguration.
    GetBucketLifecycleConfigurationInput;
    /// Input of GetBucketLogging.
    GetBucketLoggingInput;
    /// Input of GetBucketNotificationConfiguration.
    GetBucketNotificationConfigurationInput;
    /// Input of GetBucketOwnershipControls.
    GetBucketOwnershipControlsInput;
    /// Input of GetBucketPolicy.
    GetBucketPolicyInput;
    /// Input of GetBucketPolicyStatus.
    GetBucketPolicyStatusInput;
    /// Input of GetBucketReplication.
    GetBucketReplicationInput;
    /// Input of GetBucketRequestPayment.
    GetBucketRequestPaymentInput;
    /// Input of GetBucketTagging.
    GetBucketTaggingInput;
    /// Input of GetBucketVersioning.
    GetBucketVersioningInput;
    /// Input of GetBucketWebsite.
    GetBucketWebsiteInput;
    /// Input of GetObjectLockConfiguration.
    GetObjectLockConfigurationInput;
    /// Input of GetPublicAccessBlock.
    GetPublicAccessBlockInput;
}

/// Input of GetBucketAccelerateConfiguration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBucketAccelerateConfigurationInput {
    /// HTTP label.
    pub bucket: String,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// HTTP header: `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
}

/// Input of PutBucketAccelerateConfiguration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutBucketAccelerateConfigurationInput {
    /// HTTP label.
    pub bucket: String,
    /// HTTP payload body.
    pub accelerate_configuration: AccelerateConfiguration,
    /// HTTP header: `x-amz-sdk-checksum-algorithm`.
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

/// Input of PutBucketAcl.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutBucketAclInput {
    /// HTTP label.
    pub bucket: String,
    /// HTTP header: `x-amz-acl`.
    pub acl: Option<BucketCannedAcl>,
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
}

/// Input of PutBucketCors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutBucketCorsInput {
    /// HTTP label.
    pub bucket: String,
    /// HTTP payload body.
    pub cors_configuration: CorsConfiguration,
    /// HTTP header: `x-amz-sdk-checksum-algorithm`.
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    /// HTTP header: `Content-MD5`.
    pub content_md5: Option<String>,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

/// Input of PutBucketEncryption.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutBucketEncryptionInput {
    /// HTTP label.
    pub bucket: String,
    /// HTTP payload body.
    pub server_side_encryption_configuration: ServerSideEncryptionConfiguration,
    /// HTTP header: `x-amz-sdk-checksum-algorithm`.
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    /// HTTP header: `Content-MD5`.
    pub content_md5: Option<String>,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

/// Input of PutBucketLifecycleConfiguration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutBucketLifecycleConfigurationInput {
    /// HTTP label.
    pub bucket: String,
    /// HTTP payload body.
    pub lifecycle_configuration: Option<BucketLifecycleConfiguration>,
    /// HTTP header: `x-amz-sdk-checksum-algorithm`.
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

/// Input of PutBucketLogging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutBucketLoggingInput {
    /// HTTP label.
    pub bucket: String,
    /// HTTP payload body.
    pub bucket_logging_status: BucketLoggingStatus,
    /// HTTP header: `x-amz-sdk-checksum-algorithm`.
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    /// HTTP header: `Content-MD5`.
    pub content_md5: Option<String>,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

/// Input of PutBucketNotificationConfiguration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutBucketNotificationConfigurationInput {
    /// HTTP label.
    pub bucket: String,
    /// HTTP payload body.
    pub notification_configuration: NotificationConfiguration,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// HTTP header: `x-amz-skip-destination-validation`.
    pub skip_destination_validation: Option<bool>,
}

/// Input of PutBucketOwnershipControls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutBucketOwnershipControlsInput {
    /// HTTP label.
    pub bucket: String,
    /// HTTP payload body.
    pub ownership_controls: OwnershipControls,
    /// HTTP header: `Content-MD5`.
    pub content_md5: Option<String>,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

/// Input of PutBucketPolicy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutBucketPolicyInput {
    /// HTTP label.
    pub bucket: String,
    /// HTTP payload body (JSON policy document).
    pub policy: String,
    /// HTTP header: `x-amz-sdk-checksum-algorithm`.
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    /// HTTP header: `x-amz-confirm-remove-self-bucket-access`.
    pub confirm_remove_self_bucket_access: Option<bool>,
    /// HTTP header: `Content-MD5`.
    pub content_md5: Option<String>,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

/// Input of PutBucketReplication.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutBucketReplicationInput {
    /// HTTP label.
    pub bucket: String,
    /// HTTP payload body.
    pub replication_configuration: ReplicationConfiguration,
    /// HTTP header: `x-amz-sdk-checksum-algorithm`.
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    /// HTTP header: `Content-MD5`.
    pub content_md5: Option<String>,
    /// HTTP header: `x-amz-bucket-object-lock-token`.
    pub token: Option<String>,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

/// Input of PutBucketRequestPayment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutBucketRequestPaymentInput {
    /// HTTP label.
    pub bucket: String,
    /// HTTP payload body.
    pub request_payment_configuration: RequestPaymentConfiguration,
    /// HTTP header: `x-amz-sdk-checksum-algorithm`.
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    /// HTTP header: `Content-MD5`.
    pub content_md5: Option<String>,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

/// Input of PutBucketTagging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutBucketTaggingInput {
    /// HTTP label.
    pub bucket: String,
    /// HTTP payload body.
    pub tagging: Tagging,
    /// HTTP header: `x-amz-sdk-checksum-algorithm`.
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    /// HTTP header: `Content-MD5`.
    pub content_md5: Option<String>,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

/// Input of PutBucketVersioning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutBucketVersioningInput {
    /// HTTP label.
    pub bucket: String,
    /// HTTP payload body.
    pub versioning_configuration: VersioningConfiguration,
    /// HTTP header: `x-amz-sdk-checksum-algorithm`.
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    /// HTTP header: `Content-MD5`.
    pub content_md5: Option<String>,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// HTTP header: `x-amz-mfa`.
    pub mfa: Option<String>,
}

/// Input of PutBucketWebsite.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutBucketWebsiteInput {
    /// HTTP label.
    pub bucket: String,
    /// HTTP payload body.
    pub website_configuration: WebsiteConfiguration,
    /// HTTP header: `x-amz-sdk-checksum-algorithm`.
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    /// HTTP header: `Content-MD5`.
    pub content_md5: Option<String>,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

/// Input of PutObjectLockConfiguration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutObjectLockConfigurationInput {
    /// HTTP label.
    pub bucket: String,
    /// HTTP payload body.
    pub object_lock_configuration: Option<ObjectLockConfiguration>,
    /// HTTP header: `x-amz-sdk-checksum-algorithm`.
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    /// HTTP header: `Content-MD5`.
    pub content_md5: Option<String>,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// HTTP header: `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
    /// HTTP header: `x-amz-bucket-object-lock-token`.
    pub token: Option<String>,
}

/// Input of PutPublicAccessBlock.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutPublicAccessBlockInput {
    /// HTTP label.
    pub bucket: String,
    /// HTTP payload body.
    pub public_access_block_configuration: PublicAccessBlockConfiguration,
    /// HTTP header: `x-amz-sdk-checksum-algorithm`.
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    /// HTTP header: `Content-MD5`.
    pub content_md5: Option<String>,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

/// Input of GetBucketInventoryConfiguration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBucketInventoryConfigurationInput {
    /// HTTP label.
    pub bucket: String,
    /// HTTP query: `id`.
    pub id: String,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

/// Input of PutBucketInventoryConfiguration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutBucketInventoryConfigurationInput {
    /// HTTP label.
    pub bucket: String,
    /// HTTP query: `id`.
    pub id: String,
    /// HTTP payload body.
    pub inventory_configuration: InventoryConfiguration,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

/// Input of DeleteBucketInventoryConfiguration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteBucketInventoryConfigurationInput {
    /// HTTP label.
    pub bucket: String,
    /// HTTP query: `id`.
    pub id: String,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

/// Input of ListBucketInventoryConfigurations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListBucketInventoryConfigurationsInput {
    /// HTTP label.
    pub bucket: String,
    /// HTTP query: `continuation-token`.
    pub continuation_token: Option<String>,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

/// Input of GetBucketMetricsConfiguration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBucketMetricsConfigurationInput {
    /// HTTP label.
    pub bucket: String,
    /// HTTP query: `id`.
    pub id: String,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

/// Input of PutBucketMetricsConfiguration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutBucketMetricsConfigurationInput {
    /// HTTP label.
    pub bucket: String,
    /// HTTP query: `id`.
    pub id: String,
    /// HTTP payload body.
    pub metrics_configuration: MetricsConfiguration,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

/// Input of DeleteBucketMetricsConfiguration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteBucketMetricsConfigurationInput {
    /// HTTP label.
    pub bucket: String,
    /// HTTP query: `id`.
    pub id: String,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

/// Input of ListBucketMetricsConfigurations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListBucketMetricsConfigurationsInput {
    /// HTTP label.
    pub bucket: String,
    /// HTTP query: `continuation-token`.
    pub continuation_token: Option<String>,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}
