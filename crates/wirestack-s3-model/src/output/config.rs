//! Bucket sub-resource (configuration) operations.

use serde::Serialize;

use crate::enums::{BucketAccelerateStatus, BucketVersioningStatus, MfaDeleteStatus, Payer, RequestCharged};
use crate::types::{
    CorsRule, ErrorDocument, EventBridgeConfiguration, Grant, IndexDocument,
    InventoryConfiguration, LambdaFunctionConfiguration, LifecycleRule, LoggingEnabled,
    MetricsConfiguration, ObjectLockConfiguration, Owner, OwnershipControls, PolicyStatus,
    PublicAccessBlockConfiguration, QueueConfiguration, RedirectAllRequestsTo,
    ReplicationConfiguration, RoutingRule, ServerSideEncryptionConfiguration, Tag,
    TopicConfiguration,
};

/// Output of GetBucketAccelerateConfiguration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetBucketAccelerateConfigurationOutput {
    pub status: Option<BucketAccelerateStatus>,
    /// HTTP header: `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
}

/// Output of GetBucketAcl.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetBucketAclOutput {
    pub owner: Option<Owner>,
    pub grants: Vec<Grant>,
}

/// Output of GetBucketCors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetBucketCorsOutput {
    pub cors_rules: Vec<CorsRule>,
}

/// Output of GetBucketEncryption.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetBucketEncryptionOutput {
    pub server_side_encryption_configuration: Option<ServerSideEncryptionConfiguration>,
}

/// Output of GetBucketLifecycleConfiguration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetBucketLifecycleConfigurationOutput {
    pub rules: Vec<LifecycleRule>,
}

/// Output of GetBucketLogging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetBucketLoggingOutput {
    pub logging_enabled: Option<LoggingEnabled>,
}

/// Output of GetBucketNotificationConfiguration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetBucketNotificationConfigurationOutput {
    pub topic_configurations: Vec<TopicConfiguration>,
    pub queue_configurations: Vec<QueueConfiguration>,
    pub lambda_function_configurations: Vec<LambdaFunctionConfiguration>,
    pub event_bridge_configuration: Option<EventBridgeConfiguration>,
}

/// Output of GetBucketOwnershipControls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetBucketOwnershipControlsOutput {
    pub ownership_controls: Option<OwnershipControls>,
}

/// Output of GetBucketPolicy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetBucketPolicyOutput {
    /// HTTP payload body (JSON policy document).
    pub policy: Option<String>,
}

/// Output of GetBucketPolicyStatus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetBucketPolicyStatusOutput {
    pub policy_status: Option<PolicyStatus>,
}

/// Output of GetBucketReplication.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetBucketReplicationOutput {
    pub replication_configuration: Option<ReplicationConfiguration>,
}

/// Output of GetBucketRequestPayment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetBucketRequestPaymentOutput {
    pub payer: Option<Payer>,
}

/// Output of GetBucketTagging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetBucketTaggingOutput {
    pub tag_set: Vec<Tag>,
}

/// Output of GetBucketVersioning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetBucketVersioningOutput {
    pub status: Option<BucketVersioningStatus>,
    pub mfa_delete: Option<MfaDeleteStatus>,
}

/// Output of GetBucketWebsite.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetBucketWebsiteOutput {
    pub redirect_all_requests_to: Option<RedirectAllRequestsTo>,
    pub index_document: Option<IndexDocument>,
    pub error_document: Option<ErrorDocument>,
    pub routing_rules: Vec<RoutingRule>,
}

/// Output of GetObjectLockConfiguration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetObjectLockConfigurationOutput {
    pub object_lock_configuration: Option<ObjectLockConfiguration>,
}

/// Output of PutObjectLockConfiguration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PutObjectLockConfigurationOutput {
    /// HTTP header: `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
}

/// Output of GetPublicAccessBlock.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetPublicAccessBlockOutput {
    pub public_access_block_configuration: Option<PublicAccessBlockConfiguration>,
}

/// Output of GetBucketInventoryConfiguration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetBucketInventoryConfigurationOutput {
    pub inventory_configuration: Option<InventoryConfiguration>,
}

/// Output of ListBucketInventoryConfigurations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListBucketInventoryConfigurationsOutput {
    pub continuation_token: Option<String>,
    pub inventory_configuration_list: Vec<InventoryConfiguration>,
    pub is_truncated: Option<bool>,
    pub next_continuation_token: Option<String>,
}

/// Output of GetBucketMetricsConfiguration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetBucketMetricsConfigurationOutput {
    pub metrics_configuration: Option<MetricsConfiguration>,
}

/// Output of ListBucketMetricsConfigurations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListBucketMetricsConfigurationsOutput {
    pub continuation_token: Option<String>,
    pub metrics_configuration_list: Vec<MetricsConfiguration>,
    pub is_truncated: Option<bool>,
    pub next_continuation_token: Option<String>,
}
