//! Unmarshallers for structures nested inside S3 results.

use wirestack_s3_model::enums::GranteeType;
use wirestack_s3_model::types::{
    AbortIncompleteMultipartUpload, AccessControlPolicy, AccessControlTranslation, Bucket,
    CommonPrefix, Condition, CopyObjectResult, CopyPartResult, CorsRule, DefaultRetention,
    DeleteError, DeleteMarkerEntry, DeleteMarkerReplication, DeletedObject, Destination,
    EncryptionConfiguration, ErrorDocument, EventBridgeConfiguration, FilterRule, Grant, Grantee,
    IndexDocument, Initiator, InventoryConfiguration, InventoryDestination, InventoryEncryption,
    InventoryFilter, InventoryS3BucketDestination, InventorySchedule, LambdaFunctionConfiguration,
    LifecycleExpiration, LifecycleRule, LifecycleRuleAndOperator, LifecycleRuleFilter,
    LoggingEnabled, MetricsAndOperator, MetricsConfiguration, MetricsFilter, MultipartUpload,
    NoncurrentVersionExpiration, NoncurrentVersionTransition, NotificationConfigurationFilter,
    Object, ObjectLockConfiguration, ObjectLockLegalHold, ObjectLockRetention, ObjectLockRule,
    ObjectVersion, Owner, OwnershipControls, OwnershipControlsRule, Part, PolicyStatus,
    PublicAccessBlockConfiguration, QueueConfiguration, Redirect, RedirectAllRequestsTo,
    ReplicationConfiguration, ReplicationRule, ReplicationRuleAndOperator, ReplicationRuleFilter,
    RoutingRule, S3KeyFilter, ServerSideEncryptionByDefault, ServerSideEncryptionConfiguration,
    ServerSideEncryptionRule, SourceSelectionCriteria, SseKms, SseKmsEncryptedObjects, SseS3, Tag,
    Tagging, TargetGrant, TopicConfiguration, Transition,
};

use super::{StaxUnmarshall, read_struct};
use crate::error::XmlError;
use crate::stax::StaxUnmarshallerContext;

// ---------------------------------------------------------------------------
// Ownership and access control
// ---------------------------------------------------------------------------

stax_struct!(Owner {
    "ID" => opt id,
    "DisplayName" => opt display_name,
});

stax_struct!(Initiator {
    "ID" => opt id,
    "DisplayName" => opt display_name,
});

impl StaxUnmarshall for Grantee {
    fn unmarshall(ctx: &mut StaxUnmarshallerContext<'_>) -> Result<Self, XmlError> {
        // The grantee kind travels as `xsi:type` on the element itself.
        let grantee_type = ctx.attribute("xsi:type").map(GranteeType::from);
        let mut grantee = read_struct(ctx, |grantee: &mut Grantee, ctx, depth| {
            if ctx.test_expression("DisplayName", depth) {
                grantee.display_name = Some(String::unmarshall(ctx)?);
            } else if ctx.test_expression("EmailAddress", depth) {
                grantee.email_address = Some(String::unmarshall(ctx)?);
            } else if ctx.test_expression("ID", depth) {
                grantee.id = Some(String::unmarshall(ctx)?);
            } else if ctx.test_expression("URI", depth) {
                grantee.uri = Some(String::unmarshall(ctx)?);
            } else {
                return Ok(false);
            }
            Ok(true)
        })?;
        grantee.grantee_type = grantee_type;
        Ok(grantee)
    }
}

stax_struct!(Grant {
    "Grantee" => opt grantee,
    "Permission" => opt permission,
});

stax_struct!(TargetGrant {
    "Grantee" => opt grantee,
    "Permission" => opt permission,
});

stax_struct!(AccessControlPolicy {
    "Owner" => opt owner,
    "AccessControlList/Grant" => list grants,
});

stax_struct!(PublicAccessBlockConfiguration {
    "BlockPublicAcls" => opt block_public_acls,
    "IgnorePublicAcls" => opt ignore_public_acls,
    "BlockPublicPolicy" => opt block_public_policy,
    "RestrictPublicBuckets" => opt restrict_public_buckets,
});

stax_struct!(PolicyStatus { "IsPublic" => opt is_public });

stax_struct!(OwnershipControls { "Rule" => list rules });

stax_struct!(OwnershipControlsRule { "ObjectOwnership" => opt object_ownership });

// ---------------------------------------------------------------------------
// Buckets and tags
// ---------------------------------------------------------------------------

stax_struct!(Bucket {
    "Name" => opt name,
    "CreationDate" => opt creation_date,
    "BucketRegion" => opt bucket_region,
});

stax_struct!(Tag {
    "Key" => val key,
    "Value" => val value,
});

stax_struct!(Tagging { "TagSet/Tag" => list tag_set });

// ---------------------------------------------------------------------------
// Encryption and CORS
// ---------------------------------------------------------------------------

stax_struct!(ServerSideEncryptionConfiguration { "Rule" => list rules });

stax_struct!(ServerSideEncryptionRule {
    "ApplyServerSideEncryptionByDefault" => opt apply_server_side_encryption_by_default,
    "BucketKeyEnabled" => opt bucket_key_enabled,
});

stax_struct!(ServerSideEncryptionByDefault {
    "SSEAlgorithm" => opt sse_algorithm,
    "KMSMasterKeyID" => opt kms_master_key_id,
});

stax_struct!(CorsRule {
    "ID" => opt id,
    "AllowedHeader" => list allowed_headers,
    "AllowedMethod" => list allowed_methods,
    "AllowedOrigin" => list allowed_origins,
    "ExposeHeader" => list expose_headers,
    "MaxAgeSeconds" => opt max_age_seconds,
});

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

stax_struct!(LifecycleRule {
    "ID" => opt id,
    "Prefix" => opt prefix,
    "Filter" => opt filter,
    "Status" => opt status,
    "Transition" => list transitions,
    "NoncurrentVersionTransition" => list noncurrent_version_transitions,
    "Expiration" => opt expiration,
    "NoncurrentVersionExpiration" => opt noncurrent_version_expiration,
    "AbortIncompleteMultipartUpload" => opt abort_incomplete_multipart_upload,
});

stax_struct!(LifecycleRuleFilter {
    "Prefix" => opt prefix,
    "Tag" => opt tag,
    "ObjectSizeGreaterThan" => opt object_size_greater_than,
    "ObjectSizeLessThan" => opt object_size_less_than,
    "And" => opt and,
});

stax_struct!(LifecycleRuleAndOperator {
    "Prefix" => opt prefix,
    "Tag" => list tags,
    "ObjectSizeGreaterThan" => opt object_size_greater_than,
    "ObjectSizeLessThan" => opt object_size_less_than,
});

stax_struct!(LifecycleExpiration {
    "Date" => opt date,
    "Days" => opt days,
    "ExpiredObjectDeleteMarker" => opt expired_object_delete_marker,
});

stax_struct!(Transition {
    "Date" => opt date,
    "Days" => opt days,
    "StorageClass" => opt storage_class,
});

stax_struct!(NoncurrentVersionTransition {
    "NoncurrentDays" => opt noncurrent_days,
    "NewerNoncurrentVersions" => opt newer_noncurrent_versions,
    "StorageClass" => opt storage_class,
});

stax_struct!(NoncurrentVersionExpiration {
    "NoncurrentDays" => opt noncurrent_days,
    "NewerNoncurrentVersions" => opt newer_noncurrent_versions,
});

stax_struct!(AbortIncompleteMultipartUpload {
    "DaysAfterInitiation" => opt days_after_initiation,
});

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

stax_struct!(TopicConfiguration {
    "Id" => opt id,
    "Topic" => val topic_arn,
    "Event" => list events,
    "Filter" => opt filter,
});

stax_struct!(QueueConfiguration {
    "Id" => opt id,
    "Queue" => val queue_arn,
    "Event" => list events,
    "Filter" => opt filter,
});

stax_struct!(LambdaFunctionConfiguration {
    "Id" => opt id,
    "CloudFunction" => val lambda_function_arn,
    "Event" => list events,
    "Filter" => opt filter,
});

impl StaxUnmarshall for EventBridgeConfiguration {
    fn unmarshall(ctx: &mut StaxUnmarshallerContext<'_>) -> Result<Self, XmlError> {
        read_struct(ctx, |_: &mut Self, _, _| Ok(false))
    }
}

stax_struct!(NotificationConfigurationFilter { "S3Key" => opt key });

stax_struct!(S3KeyFilter { "FilterRule" => list filter_rules });

stax_struct!(FilterRule {
    "Name" => opt name,
    "Value" => opt value,
});

// ---------------------------------------------------------------------------
// Logging, object lock and website
// ---------------------------------------------------------------------------

stax_struct!(LoggingEnabled {
    "TargetBucket" => val target_bucket,
    "TargetGrants/Grant" => list target_grants,
    "TargetPrefix" => val target_prefix,
});

stax_struct!(ObjectLockConfiguration {
    "ObjectLockEnabled" => opt object_lock_enabled,
    "Rule" => opt rule,
});

stax_struct!(ObjectLockRule { "DefaultRetention" => opt default_retention });

stax_struct!(DefaultRetention {
    "Mode" => opt mode,
    "Days" => opt days,
    "Years" => opt years,
});

stax_struct!(ObjectLockRetention {
    "Mode" => opt mode,
    "RetainUntilDate" => opt retain_until_date,
});

stax_struct!(ObjectLockLegalHold { "Status" => opt status });

stax_struct!(ErrorDocument { "Key" => val key });

stax_struct!(IndexDocument { "Suffix" => val suffix });

stax_struct!(RedirectAllRequestsTo {
    "HostName" => val host_name,
    "Protocol" => opt protocol,
});

stax_struct!(RoutingRule {
    "Condition" => opt condition,
    "Redirect" => val redirect,
});

stax_struct!(Condition {
    "HttpErrorCodeReturnedEquals" => opt http_error_code_returned_equals,
    "KeyPrefixEquals" => opt key_prefix_equals,
});

stax_struct!(Redirect {
    "HostName" => opt host_name,
    "HttpRedirectCode" => opt http_redirect_code,
    "Protocol" => opt protocol,
    "ReplaceKeyPrefixWith" => opt replace_key_prefix_with,
    "ReplaceKeyWith" => opt replace_key_with,
});

// ---------------------------------------------------------------------------
// Replication
// ---------------------------------------------------------------------------

stax_struct!(ReplicationConfiguration {
    "Role" => val role,
    "Rule" => list rules,
});

stax_struct!(ReplicationRule {
    "ID" => opt id,
    "Priority" => opt priority,
    "Prefix" => opt prefix,
    "Filter" => opt filter,
    "Status" => opt status,
    "SourceSelectionCriteria" => opt source_selection_criteria,
    "Destination" => val destination,
    "DeleteMarkerReplication" => opt delete_marker_replication,
});

stax_struct!(ReplicationRuleFilter {
    "Prefix" => opt prefix,
    "Tag" => opt tag,
    "And" => opt and,
});

stax_struct!(ReplicationRuleAndOperator {
    "Prefix" => opt prefix,
    "Tag" => list tags,
});

stax_struct!(Destination {
    "Bucket" => val bucket,
    "Account" => opt account,
    "StorageClass" => opt storage_class,
    "AccessControlTranslation" => opt access_control_translation,
    "EncryptionConfiguration" => opt encryption_configuration,
});

stax_struct!(AccessControlTranslation { "Owner" => opt owner });

stax_struct!(EncryptionConfiguration { "ReplicaKmsKeyID" => opt replica_kms_key_id });

stax_struct!(SourceSelectionCriteria {
    "SseKmsEncryptedObjects" => opt sse_kms_encrypted_objects,
});

stax_struct!(SseKmsEncryptedObjects { "Status" => opt status });

stax_struct!(DeleteMarkerReplication { "Status" => opt status });

// ---------------------------------------------------------------------------
// Inventory and metrics
// ---------------------------------------------------------------------------

stax_struct!(InventoryConfiguration {
    "Destination" => opt destination,
    "IsEnabled" => opt is_enabled,
    "Filter" => opt filter,
    "Id" => val id,
    "IncludedObjectVersions" => opt included_object_versions,
    "OptionalFields/Field" => list optional_fields,
    "Schedule" => opt schedule,
});

stax_struct!(InventoryDestination { "S3BucketDestination" => opt s3_bucket_destination });

stax_struct!(InventoryS3BucketDestination {
    "AccountId" => opt account_id,
    "Bucket" => val bucket,
    "Format" => opt format,
    "Prefix" => opt prefix,
    "Encryption" => opt encryption,
});

stax_struct!(InventoryEncryption {
    "SSE-S3" => opt sse_s3,
    "SSE-KMS" => opt sse_kms,
});

impl StaxUnmarshall for SseS3 {
    fn unmarshall(ctx: &mut StaxUnmarshallerContext<'_>) -> Result<Self, XmlError> {
        read_struct(ctx, |_: &mut Self, _, _| Ok(false))
    }
}

stax_struct!(SseKms { "KeyId" => val key_id });

stax_struct!(InventoryFilter { "Prefix" => val prefix });

stax_struct!(InventorySchedule { "Frequency" => opt frequency });

stax_struct!(MetricsConfiguration {
    "Id" => val id,
    "Filter" => opt filter,
});

stax_struct!(MetricsFilter {
    "Prefix" => opt prefix,
    "Tag" => opt tag,
    "AccessPointArn" => opt access_point_arn,
    "And" => opt and,
});

stax_struct!(MetricsAndOperator {
    "Prefix" => opt prefix,
    "Tag" => list tags,
    "AccessPointArn" => opt access_point_arn,
});

// ---------------------------------------------------------------------------
// Objects, versions and multipart uploads
// ---------------------------------------------------------------------------

stax_struct!(Object {
    "Key" => opt key,
    "LastModified" => opt last_modified,
    "ETag" => opt e_tag,
    "ChecksumAlgorithm" => list checksum_algorithm,
    "Size" => opt size,
    "StorageClass" => opt storage_class,
    "Owner" => opt owner,
});

stax_struct!(CommonPrefix { "Prefix" => opt prefix });

stax_struct!(ObjectVersion {
    "ETag" => opt e_tag,
    "ChecksumAlgorithm" => list checksum_algorithm,
    "Size" => opt size,
    "StorageClass" => opt storage_class,
    "Key" => opt key,
    "VersionId" => opt version_id,
    "IsLatest" => opt is_latest,
    "LastModified" => opt last_modified,
    "Owner" => opt owner,
});

stax_struct!(DeleteMarkerEntry {
    "Owner" => opt owner,
    "Key" => opt key,
    "VersionId" => opt version_id,
    "IsLatest" => opt is_latest,
    "LastModified" => opt last_modified,
});

stax_struct!(DeletedObject {
    "Key" => opt key,
    "VersionId" => opt version_id,
    "DeleteMarker" => opt delete_marker,
    "DeleteMarkerVersionId" => opt delete_marker_version_id,
});

stax_struct!(DeleteError {
    "Key" => opt key,
    "VersionId" => opt version_id,
    "Code" => opt code,
    "Message" => opt message,
});

stax_struct!(CopyObjectResult {
    "ETag" => opt e_tag,
    "LastModified" => opt last_modified,
    "ChecksumCRC32" => opt checksum_crc32,
    "ChecksumCRC32C" => opt checksum_crc32c,
    "ChecksumSHA1" => opt checksum_sha1,
    "ChecksumSHA256" => opt checksum_sha256,
});

stax_struct!(CopyPartResult {
    "ETag" => opt e_tag,
    "LastModified" => opt last_modified,
    "ChecksumCRC32" => opt checksum_crc32,
    "ChecksumCRC32C" => opt checksum_crc32c,
    "ChecksumSHA1" => opt checksum_sha1,
    "ChecksumSHA256" => opt checksum_sha256,
});

stax_struct!(MultipartUpload {
    "UploadId" => opt upload_id,
    "Key" => opt key,
    "Initiated" => opt initiated,
    "StorageClass" => opt storage_class,
    "Owner" => opt owner,
    "Initiator" => opt initiator,
    "ChecksumAlgorithm" => opt checksum_algorithm,
});

stax_struct!(Part {
    "PartNumber" => opt part_number,
    "LastModified" => opt last_modified,
    "ETag" => opt e_tag,
    "Size" => opt size,
    "ChecksumCRC32" => opt checksum_crc32,
    "ChecksumCRC32C" => opt checksum_crc32c,
    "ChecksumSHA1" => opt checksum_sha1,
    "ChecksumSHA256" => opt checksum_sha256,
});
