//! Unmarshallers for operation result documents.
//!
//! Outputs that mix headers and an XML body only get their XML members
//! filled here; the HTTP layer adds the header members afterwards.

use wirestack_s3_model::output::{
    CompleteMultipartUploadOutput, CreateMultipartUploadOutput, DeleteObjectsOutput,
    GetBucketAccelerateConfigurationOutput, GetBucketAclOutput, GetBucketCorsOutput,
    GetBucketLifecycleConfigurationOutput, GetBucketLocationOutput, GetBucketLoggingOutput,
    GetBucketNotificationConfigurationOutput, GetBucketRequestPaymentOutput,
    GetBucketTaggingOutput, GetBucketVersioningOutput, GetBucketWebsiteOutput,
    GetObjectAclOutput, GetObjectTaggingOutput, ListBucketInventoryConfigurationsOutput,
    ListBucketMetricsConfigurationsOutput, ListBucketsOutput, ListMultipartUploadsOutput,
    ListObjectVersionsOutput, ListObjectsOutput, ListObjectsV2Output, ListPartsOutput,
};

use super::StaxUnmarshall;
use crate::error::XmlError;
use crate::stax::{StaxUnmarshallerContext, XmlEvent};

/// Body of a REST-XML `<Error>` response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorResponse {
    /// `Code` element.
    pub code: Option<String>,
    /// `Message` element.
    pub message: Option<String>,
    /// `Resource` element.
    pub resource: Option<String>,
    /// `RequestId` element.
    pub request_id: Option<String>,
    /// `HostId` element.
    pub host_id: Option<String>,
    /// `BucketName` element.
    pub bucket_name: Option<String>,
    /// `Key` element.
    pub key: Option<String>,
    /// `Region` element, present on redirects.
    pub region: Option<String>,
}

stax_struct!(ErrorResponse {
    "Code" => opt code,
    "Message" => opt message,
    "Resource" => opt resource,
    "RequestId" => opt request_id,
    "HostId" => opt host_id,
    "BucketName" => opt bucket_name,
    "Key" => opt key,
    "Region" => opt region,
});

// ---------------------------------------------------------------------------
// Buckets
// ---------------------------------------------------------------------------

stax_struct!(ListBucketsOutput {
    "Buckets/Bucket" => list buckets,
    "Owner" => opt owner,
    "ContinuationToken" => opt continuation_token,
    "Prefix" => opt prefix,
});

impl StaxUnmarshall for GetBucketLocationOutput {
    fn unmarshall(ctx: &mut StaxUnmarshallerContext<'_>) -> Result<Self, XmlError> {
        // The root element itself carries the value; empty means us-east-1.
        loop {
            match ctx.next_event()? {
                XmlEvent::StartElement { .. } if ctx.test_expression("LocationConstraint", 1) => {
                    let text = ctx.read_text()?;
                    return Ok(Self {
                        location_constraint: (!text.is_empty()).then_some(text),
                    });
                }
                XmlEvent::EndDocument => return Ok(Self::default()),
                _ => {}
            }
        }
    }
}

stax_struct!(GetBucketAccelerateConfigurationOutput { "Status" => opt status });

stax_struct!(GetBucketAclOutput {
    "Owner" => opt owner,
    "AccessControlList/Grant" => list grants,
});

stax_struct!(GetBucketCorsOutput { "CORSRule" => list cors_rules });

stax_struct!(GetBucketLifecycleConfigurationOutput { "Rule" => list rules });

stax_struct!(GetBucketLoggingOutput { "LoggingEnabled" => opt logging_enabled });

stax_struct!(GetBucketNotificationConfigurationOutput {
    "TopicConfiguration" => list topic_configurations,
    "QueueConfiguration" => list queue_configurations,
    "CloudFunctionConfiguration" => list lambda_function_configurations,
    "EventBridgeConfiguration" => opt event_bridge_configuration,
});

stax_struct!(GetBucketRequestPaymentOutput { "Payer" => opt payer });

stax_struct!(GetBucketTaggingOutput { "TagSet/Tag" => list tag_set });

stax_struct!(GetBucketVersioningOutput {
    "Status" => opt status,
    "MfaDelete" => opt mfa_delete,
});

stax_struct!(GetBucketWebsiteOutput {
    "RedirectAllRequestsTo" => opt redirect_all_requests_to,
    "IndexDocument" => opt index_document,
    "ErrorDocument" => opt error_document,
    "RoutingRules/RoutingRule" => list routing_rules,
});

stax_struct!(ListBucketInventoryConfigurationsOutput {
    "ContinuationToken" => opt continuation_token,
    "InventoryConfiguration" => list inventory_configuration_list,
    "IsTruncated" => opt is_truncated,
    "NextContinuationToken" => opt next_continuation_token,
});

stax_struct!(ListBucketMetricsConfigurationsOutput {
    "ContinuationToken" => opt continuation_token,
    "MetricsConfiguration" => list metrics_configuration_list,
    "IsTruncated" => opt is_truncated,
    "NextContinuationToken" => opt next_continuation_token,
});

// ---------------------------------------------------------------------------
// Objects
// ---------------------------------------------------------------------------

stax_struct!(DeleteObjectsOutput {
    "Deleted" => list deleted,
    "Error" => list errors,
});

stax_struct!(GetObjectTaggingOutput { "TagSet/Tag" => list tag_set });

stax_struct!(GetObjectAclOutput {
    "Owner" => opt owner,
    "AccessControlList/Grant" => list grants,
});

stax_struct!(ListObjectsOutput {
    "Name" => opt name,
    "Prefix" => opt prefix,
    "Marker" => opt marker,
    "NextMarker" => opt next_marker,
    "MaxKeys" => opt max_keys,
    "Delimiter" => opt delimiter,
    "IsTruncated" => opt is_truncated,
    "Contents" => list contents,
    "CommonPrefixes" => list common_prefixes,
    "EncodingType" => opt encoding_type,
});

stax_struct!(ListObjectsV2Output {
    "Name" => opt name,
    "Prefix" => opt prefix,
    "MaxKeys" => opt max_keys,
    "KeyCount" => opt key_count,
    "Delimiter" => opt delimiter,
    "IsTruncated" => opt is_truncated,
    "Contents" => list contents,
    "CommonPrefixes" => list common_prefixes,
    "EncodingType" => opt encoding_type,
    "ContinuationToken" => opt continuation_token,
    "NextContinuationToken" => opt next_continuation_token,
    "StartAfter" => opt start_after,
});

stax_struct!(ListObjectVersionsOutput {
    "Name" => opt name,
    "Prefix" => opt prefix,
    "KeyMarker" => opt key_marker,
    "VersionIdMarker" => opt version_id_marker,
    "NextKeyMarker" => opt next_key_marker,
    "NextVersionIdMarker" => opt next_version_id_marker,
    "MaxKeys" => opt max_keys,
    "Delimiter" => opt delimiter,
    "IsTruncated" => opt is_truncated,
    "Version" => list versions,
    "DeleteMarker" => list delete_markers,
    "CommonPrefixes" => list common_prefixes,
    "EncodingType" => opt encoding_type,
});

// ---------------------------------------------------------------------------
// Multipart uploads
// ---------------------------------------------------------------------------

stax_struct!(CreateMultipartUploadOutput {
    "Bucket" => opt bucket,
    "Key" => opt key,
    "UploadId" => opt upload_id,
});

stax_struct!(CompleteMultipartUploadOutput {
    "Location" => opt location,
    "Bucket" => opt bucket,
    "Key" => opt key,
    "ETag" => opt e_tag,
    "ChecksumCRC32" => opt checksum_crc32,
    "ChecksumCRC32C" => opt checksum_crc32c,
    "ChecksumSHA1" => opt checksum_sha1,
    "ChecksumSHA256" => opt checksum_sha256,
});

stax_struct!(ListPartsOutput {
    "Bucket" => opt bucket,
    "Key" => opt key,
    "UploadId" => opt upload_id,
    "PartNumberMarker" => opt part_number_marker,
    "NextPartNumberMarker" => opt next_part_number_marker,
    "MaxParts" => opt max_parts,
    "IsTruncated" => opt is_truncated,
    "Part" => list parts,
    "Initiator" => opt initiator,
    "Owner" => opt owner,
    "StorageClass" => opt storage_class,
    "ChecksumAlgorithm" => opt checksum_algorithm,
});

stax_struct!(ListMultipartUploadsOutput {
    "Bucket" => opt bucket,
    "KeyMarker" => opt key_marker,
    "UploadIdMarker" => opt upload_id_marker,
    "NextKeyMarker" => opt next_key_marker,
    "NextUploadIdMarker" => opt next_upload_id_marker,
    "Prefix" => opt prefix,
    "Delimiter" => opt delimiter,
    "MaxUploads" => opt max_uploads,
    "IsTruncated" => opt is_truncated,
    "Upload" => list uploads,
    "CommonPrefixes" => list common_prefixes,
    "EncodingType" => opt encoding_type,
});
