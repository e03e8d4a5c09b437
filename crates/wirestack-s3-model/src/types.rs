//! Structures shared between S3 operation inputs and outputs.
//!
//! Members follow S3's data model one-to-one. Lists are ordered as they
//! appear on the wire; an empty list is never encoded.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{
    BucketAccelerateStatus, BucketLogsPermission, BucketVersioningStatus, ChecksumAlgorithm,
    DeleteMarkerReplicationStatus, Event, ExpirationStatus, FilterRuleName, GranteeType,
    InventoryFormat, InventoryFrequency, InventoryIncludedObjectVersions, InventoryOptionalField,
    MfaDelete, ObjectLockEnabled, ObjectLockLegalHoldStatus,
    ObjectLockRetentionMode, ObjectOwnership, OwnerOverride, Payer, Permission, Protocol,
    ReplicationRuleStatus, ServerSideEncryption, SseKmsEncryptedObjectsStatus, StorageClass, Tier,
};

// ---------------------------------------------------------------------------
// Ownership and access control
// ---------------------------------------------------------------------------

/// Canonical owner of a bucket or object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub display_name: Option<String>,
    pub id: Option<String>,
}

/// Initiator of a multipart upload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Initiator {
    pub display_name: Option<String>,
    pub id: Option<String>,
}

/// Receiver of an ACL grant.
///
/// `grantee_type` travels as the `xsi:type` attribute of the `Grantee`
/// element rather than as a child element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grantee {
    pub display_name: Option<String>,
    pub email_address: Option<String>,
    pub id: Option<String>,
    pub grantee_type: Option<GranteeType>,
    pub uri: Option<String>,
}

/// A single ACL grant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grant {
    pub grantee: Option<Grantee>,
    pub permission: Option<Permission>,
}

/// Body of PutBucketAcl / PutObjectAcl.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessControlPolicy {
    pub grants: Vec<Grant>,
    pub owner: Option<Owner>,
}

/// Grant on the target bucket of server access logs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetGrant {
    pub grantee: Option<Grantee>,
    pub permission: Option<BucketLogsPermission>,
}

// ---------------------------------------------------------------------------
// Buckets
// ---------------------------------------------------------------------------

/// Bucket entry returned by ListBuckets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    pub name: Option<String>,
    pub creation_date: Option<DateTime<Utc>>,
    pub bucket_region: Option<String>,
}

/// Body of CreateBucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBucketConfiguration {
    pub location_constraint: Option<String>,
}

/// Body of PutBucketVersioning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersioningConfiguration {
    pub mfa_delete: Option<MfaDelete>,
    pub status: Option<BucketVersioningStatus>,
}

/// Body of PutBucketAccelerateConfiguration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccelerateConfiguration {
    pub status: Option<BucketAccelerateStatus>,
}

/// Body of PutBucketRequestPayment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestPaymentConfiguration {
    pub payer: Option<Payer>,
}

/// Body of PutPublicAccessBlock.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicAccessBlockConfiguration {
    pub block_public_acls: Option<bool>,
    pub ignore_public_acls: Option<bool>,
    pub block_public_policy: Option<bool>,
    pub restrict_public_buckets: Option<bool>,
}

/// Policy status returned by GetBucketPolicyStatus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyStatus {
    pub is_public: Option<bool>,
}

/// Body of PutBucketOwnershipControls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnershipControls {
    pub rules: Vec<OwnershipControlsRule>,
}

/// A single ownership controls rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnershipControlsRule {
    pub object_ownership: Option<ObjectOwnership>,
}

// ---------------------------------------------------------------------------
// Tags
// ---------------------------------------------------------------------------

/// A key/value tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    /// Create a tag.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Body of PutBucketTagging / PutObjectTagging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tagging {
    pub tag_set: Vec<Tag>,
}

// ---------------------------------------------------------------------------
// Encryption
// ---------------------------------------------------------------------------

/// Body of PutBucketEncryption.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSideEncryptionConfiguration {
    pub rules: Vec<ServerSideEncryptionRule>,
}

/// A single default-encryption rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSideEncryptionRule {
    pub apply_server_side_encryption_by_default: Option<ServerSideEncryptionByDefault>,
    pub bucket_key_enabled: Option<bool>,
}

/// Default encryption applied to new objects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSideEncryptionByDefault {
    pub sse_algorithm: Option<ServerSideEncryption>,
    pub kms_master_key_id: Option<String>,
}

// ---------------------------------------------------------------------------
// CORS
// ---------------------------------------------------------------------------

/// Body of PutBucketCors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorsConfiguration {
    pub cors_rules: Vec<CorsRule>,
}

/// A single CORS rule. All lists are flattened on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorsRule {
    pub id: Option<String>,
    pub allowed_headers: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_origins: Vec<String>,
    pub expose_headers: Vec<String>,
    pub max_age_seconds: Option<i32>,
}

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

/// Body of PutBucketLifecycleConfiguration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketLifecycleConfiguration {
    pub rules: Vec<LifecycleRule>,
}

/// A single lifecycle rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifecycleRule {
    pub id: Option<String>,
    /// Deprecated top-level prefix; prefer `filter`.
    pub prefix: Option<String>,
    pub filter: Option<LifecycleRuleFilter>,
    pub status: Option<ExpirationStatus>,
    pub transitions: Vec<Transition>,
    pub noncurrent_version_transitions: Vec<NoncurrentVersionTransition>,
    pub expiration: Option<LifecycleExpiration>,
    pub noncurrent_version_expiration: Option<NoncurrentVersionExpiration>,
    pub abort_incomplete_multipart_upload: Option<AbortIncompleteMultipartUpload>,
}

/// Objects a lifecycle rule applies to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifecycleRuleFilter {
    pub prefix: Option<String>,
    pub tag: Option<Tag>,
    pub object_size_greater_than: Option<i64>,
    pub object_size_less_than: Option<i64>,
    pub and: Option<LifecycleRuleAndOperator>,
}

/// Conjunction of lifecycle filter predicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifecycleRuleAndOperator {
    pub prefix: Option<String>,
    pub tags: Vec<Tag>,
    pub object_size_greater_than: Option<i64>,
    pub object_size_less_than: Option<i64>,
}

/// When current object versions expire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifecycleExpiration {
    pub date: Option<DateTime<Utc>>,
    pub days: Option<i32>,
    pub expired_object_delete_marker: Option<bool>,
}

/// When current object versions move to another storage class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub date: Option<DateTime<Utc>>,
    pub days: Option<i32>,
    pub storage_class: Option<StorageClass>,
}

/// When noncurrent object versions move to another storage class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoncurrentVersionTransition {
    pub noncurrent_days: Option<i32>,
    pub newer_noncurrent_versions: Option<i32>,
    pub storage_class: Option<StorageClass>,
}

/// When noncurrent object versions expire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoncurrentVersionExpiration {
    pub noncurrent_days: Option<i32>,
    pub newer_noncurrent_versions: Option<i32>,
}

/// When incomplete multipart uploads are aborted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbortIncompleteMultipartUpload {
    pub days_after_initiation: Option<i32>,
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

/// Body of PutBucketNotificationConfiguration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationConfiguration {
    pub topic_configurations: Vec<TopicConfiguration>,
    pub queue_configurations: Vec<QueueConfiguration>,
    pub lambda_function_configurations: Vec<LambdaFunctionConfiguration>,
    pub event_bridge_configuration: Option<EventBridgeConfiguration>,
}

/// SNS topic notification target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicConfiguration {
    pub id: Option<String>,
    pub topic_arn: String,
    pub events: Vec<Event>,
    pub filter: Option<NotificationConfigurationFilter>,
}

/// SQS queue notification target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueConfiguration {
    pub id: Option<String>,
    pub queue_arn: String,
    pub events: Vec<Event>,
    pub filter: Option<NotificationConfigurationFilter>,
}

/// Lambda function notification target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LambdaFunctionConfiguration {
    pub id: Option<String>,
    pub lambda_function_arn: String,
    pub events: Vec<Event>,
    pub filter: Option<NotificationConfigurationFilter>,
}

/// Marker enabling EventBridge delivery. Carries no members.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventBridgeConfiguration {}

/// Key filter of a notification target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationConfigurationFilter {
    pub key: Option<S3KeyFilter>,
}

/// Object key name filter rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct S3KeyFilter {
    pub filter_rules: Vec<FilterRule>,
}

/// Prefix or suffix match on the object key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterRule {
    pub name: Option<FilterRuleName>,
    pub value: Option<String>,
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// Body of PutBucketLogging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketLoggingStatus {
    pub logging_enabled: Option<LoggingEnabled>,
}

/// Where server access logs are delivered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingEnabled {
    pub target_bucket: String,
    pub target_grants: Vec<TargetGrant>,
    pub target_prefix: String,
}

// ---------------------------------------------------------------------------
// Object Lock
// ---------------------------------------------------------------------------

/// Body of PutObjectLockConfiguration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectLockConfiguration {
    pub object_lock_enabled: Option<ObjectLockEnabled>,
    pub rule: Option<ObjectLockRule>,
}

/// Object Lock rule of a bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectLockRule {
    pub default_retention: Option<DefaultRetention>,
}

/// Default retention applied to new objects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultRetention {
    pub mode: Option<ObjectLockRetentionMode>,
    pub days: Option<i32>,
    pub years: Option<i32>,
}

/// Body of PutObjectRetention.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectLockRetention {
    pub mode: Option<ObjectLockRetentionMode>,
    pub retain_until_date: Option<DateTime<Utc>>,
}

/// Body of PutObjectLegalHold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectLockLegalHold {
    pub status: Option<ObjectLockLegalHoldStatus>,
}

// ---------------------------------------------------------------------------
// Website
// ---------------------------------------------------------------------------

/// Body of PutBucketWebsite.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebsiteConfiguration {
    pub error_document: Option<ErrorDocument>,
    pub index_document: Option<IndexDocument>,
    pub redirect_all_requests_to: Option<RedirectAllRequestsTo>,
    pub routing_rules: Vec<RoutingRule>,
}

/// Object returned on 4XX errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDocument {
    pub key: String,
}

/// Suffix appended to directory requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexDocument {
    pub suffix: String,
}

/// Redirect applied to every request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectAllRequestsTo {
    pub host_name: String,
    pub protocol: Option<Protocol>,
}

/// Conditional redirect rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingRule {
    pub condition: Option<Condition>,
    pub redirect: Redirect,
}

/// When a routing rule applies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub http_error_code_returned_equals: Option<String>,
    pub key_prefix_equals: Option<String>,
}

/// Where a routing rule sends the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Redirect {
    pub host_name: Option<String>,
    pub http_redirect_code: Option<String>,
    pub protocol: Option<Protocol>,
    pub replace_key_prefix_with: Option<String>,
    pub replace_key_with: Option<String>,
}

// ---------------------------------------------------------------------------
// Replication
// ---------------------------------------------------------------------------

/// Body of PutBucketReplication.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplicationConfiguration {
    pub role: String,
    pub rules: Vec<ReplicationRule>,
}

/// A single replication rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplicationRule {
    pub id: Option<String>,
    pub priority: Option<i32>,
    /// Deprecated top-level prefix; prefer `filter`.
    pub prefix: Option<String>,
    pub filter: Option<ReplicationRuleFilter>,
    pub status: Option<ReplicationRuleStatus>,
    pub source_selection_criteria: Option<SourceSelectionCriteria>,
    pub destination: Destination,
    pub delete_marker_replication: Option<DeleteMarkerReplication>,
}

/// Objects a replication rule applies to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplicationRuleFilter {
    pub prefix: Option<String>,
    pub tag: Option<Tag>,
    pub and: Option<ReplicationRuleAndOperator>,
}

/// Conjunction of replication filter predicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplicationRuleAndOperator {
    pub prefix: Option<String>,
    pub tags: Vec<Tag>,
}

/// Replication target bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub bucket: String,
    pub account: Option<String>,
    pub storage_class: Option<StorageClass>,
    pub access_control_translation: Option<AccessControlTranslation>,
    pub encryption_configuration: Option<EncryptionConfiguration>,
}

/// Replica ownership override.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessControlTranslation {
    pub owner: Option<OwnerOverride>,
}

/// KMS key used to encrypt replicas.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptionConfiguration {
    pub replica_kms_key_id: Option<String>,
}

/// Extra source objects selected for replication.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSelectionCriteria {
    pub sse_kms_encrypted_objects: Option<SseKmsEncryptedObjects>,
}

/// Whether SSE-KMS encrypted objects are replicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SseKmsEncryptedObjects {
    pub status: Option<SseKmsEncryptedObjectsStatus>,
}

/// Whether delete markers are replicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteMarkerReplication {
    pub status: Option<DeleteMarkerReplicationStatus>,
}

// ---------------------------------------------------------------------------
// Inventory
// ---------------------------------------------------------------------------

/// Body of PutBucketInventoryConfiguration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryConfiguration {
    pub destination: Option<InventoryDestination>,
    pub is_enabled: Option<bool>,
    pub filter: Option<InventoryFilter>,
    pub id: String,
    pub included_object_versions: Option<InventoryIncludedObjectVersions>,
    pub optional_fields: Vec<InventoryOptionalField>,
    pub schedule: Option<InventorySchedule>,
}

/// Where inventory reports are published.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryDestination {
    pub s3_bucket_destination: Option<InventoryS3BucketDestination>,
}

/// Bucket receiving inventory reports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryS3BucketDestination {
    pub account_id: Option<String>,
    pub bucket: String,
    pub format: Option<InventoryFormat>,
    pub prefix: Option<String>,
    pub encryption: Option<InventoryEncryption>,
}

/// Encryption of inventory reports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryEncryption {
    pub sse_s3: Option<SseS3>,
    pub sse_kms: Option<SseKms>,
}

/// SSE-S3 marker. Carries no members.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SseS3 {}

/// SSE-KMS key of inventory reports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SseKms {
    pub key_id: String,
}

/// Objects included in an inventory report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryFilter {
    pub prefix: String,
}

/// Inventory report schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySchedule {
    pub frequency: Option<InventoryFrequency>,
}

// ---------------------------------------------------------------------------
// Metrics
// ---------------------------------------------------------------------------

/// Body of PutBucketMetricsConfiguration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsConfiguration {
    pub id: String,
    pub filter: Option<MetricsFilter>,
}

/// Objects a metrics configuration covers. At most one member is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsFilter {
    pub prefix: Option<String>,
    pub tag: Option<Tag>,
    pub access_point_arn: Option<String>,
    pub and: Option<MetricsAndOperator>,
}

/// Conjunction of metrics filter predicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsAndOperator {
    pub prefix: Option<String>,
    pub tags: Vec<Tag>,
    pub access_point_arn: Option<String>,
}

// ---------------------------------------------------------------------------
// Objects
// ---------------------------------------------------------------------------

/// Object entry of ListObjects / ListObjectsV2.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Object {
    pub key: Option<String>,
    pub last_modified: Option<DateTime<Utc>>,
    pub e_tag: Option<String>,
    pub checksum_algorithm: Vec<ChecksumAlgorithm>,
    pub size: Option<i64>,
    pub storage_class: Option<StorageClass>,
    pub owner: Option<Owner>,
}

/// Key prefix rolled up by a delimiter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonPrefix {
    pub prefix: Option<String>,
}

/// Version entry of ListObjectVersions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectVersion {
    pub e_tag: Option<String>,
    pub checksum_algorithm: Vec<ChecksumAlgorithm>,
    pub size: Option<i64>,
    pub storage_class: Option<StorageClass>,
    pub key: Option<String>,
    pub version_id: Option<String>,
    pub is_latest: Option<bool>,
    pub last_modified: Option<DateTime<Utc>>,
    pub owner: Option<Owner>,
}

/// Delete marker entry of ListObjectVersions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteMarkerEntry {
    pub owner: Option<Owner>,
    pub key: Option<String>,
    pub version_id: Option<String>,
    pub is_latest: Option<bool>,
    pub last_modified: Option<DateTime<Utc>>,
}

/// Body of DeleteObjects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delete {
    pub objects: Vec<ObjectIdentifier>,
    pub quiet: Option<bool>,
}

/// Object (and optional version) to delete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectIdentifier {
    pub key: String,
    pub version_id: Option<String>,
}

impl ObjectIdentifier {
    /// Identify the current version of `key`.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            version_id: None,
        }
    }
}

/// Successfully deleted entry of DeleteObjects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedObject {
    pub key: Option<String>,
    pub version_id: Option<String>,
    pub delete_marker: Option<bool>,
    pub delete_marker_version_id: Option<String>,
}

/// Failed entry of DeleteObjects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteError {
    pub key: Option<String>,
    pub version_id: Option<String>,
    pub code: Option<String>,
    pub message: Option<String>,
}

/// Result element of CopyObject.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyObjectResult {
    pub e_tag: Option<String>,
    pub last_modified: Option<DateTime<Utc>>,
    pub checksum_crc32: Option<String>,
    pub checksum_crc32c: Option<String>,
    pub checksum_sha1: Option<String>,
    pub checksum_sha256: Option<String>,
}

/// Body of RestoreObject.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestoreRequest {
    pub days: Option<i32>,
    pub glacier_job_parameters: Option<GlacierJobParameters>,
    pub description: Option<String>,
}

/// Retrieval options of a restore.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlacierJobParameters {
    pub tier: Option<Tier>,
}

// ---------------------------------------------------------------------------
// Multipart uploads
// ---------------------------------------------------------------------------

/// Body of CompleteMultipartUpload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedMultipartUpload {
    pub parts: Vec<CompletedPart>,
}

/// Uploaded part listed in CompleteMultipartUpload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedPart {
    pub e_tag: Option<String>,
    pub checksum_crc32: Option<String>,
    pub checksum_crc32c: Option<String>,
    pub checksum_sha1: Option<String>,
    pub checksum_sha256: Option<String>,
    pub part_number: Option<i32>,
}

/// Result element of UploadPartCopy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyPartResult {
    pub e_tag: Option<String>,
    pub last_modified: Option<DateTime<Utc>>,
    pub checksum_crc32: Option<String>,
    pub checksum_crc32c: Option<String>,
    pub checksum_sha1: Option<String>,
    pub checksum_sha256: Option<String>,
}

/// In-progress upload entry of ListMultipartUploads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultipartUpload {
    pub upload_id: Option<String>,
    pub key: Option<String>,
    pub initiated: Option<DateTime<Utc>>,
    pub storage_class: Option<StorageClass>,
    pub owner: Option<Owner>,
    pub initiator: Option<Initiator>,
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
}

/// Part entry of ListParts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    pub part_number: Option<i32>,
    pub last_modified: Option<DateTime<Utc>>,
    pub e_tag: Option<String>,
    pub size: Option<i64>,
    pub checksum_crc32: Option<String>,
    pub checksum_crc32c: Option<String>,
    pub checksum_sha1: Option<String>,
    pub checksum_sha256: Option<String>,
}
