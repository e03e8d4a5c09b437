//! XML writers for S3 request payloads.
//!
//! A shape writes only its members; the element that wraps it is chosen by
//! whoever embeds it (the parent shape, or [`to_xml`] for the document root).
//! This lets one writer serve every element name a shape appears under, e.g.
//! `Owner` and `Initiator`, or `Destination` reusing the
//! `EncryptionConfiguration` writer.

use std::io::{self, Write};

use chrono::{DateTime, Utc};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesText, Event};
use wirestack_s3_model::enums::Event as S3Event;
use wirestack_s3_model::types::{
    AbortIncompleteMultipartUpload, AccelerateConfiguration, AccessControlPolicy,
    AccessControlTranslation, BucketLifecycleConfiguration, BucketLoggingStatus,
    CompletedMultipartUpload, CompletedPart, Condition, CorsConfiguration, CorsRule,
    CreateBucketConfiguration, DefaultRetention, Delete, DeleteMarkerReplication, Destination,
    EncryptionConfiguration, ErrorDocument, EventBridgeConfiguration, FilterRule,
    GlacierJobParameters, Grant, Grantee, IndexDocument, InventoryConfiguration,
    InventoryDestination, InventoryEncryption, InventoryFilter, InventoryS3BucketDestination,
    InventorySchedule, LambdaFunctionConfiguration, LifecycleExpiration, LifecycleRule,
    LifecycleRuleAndOperator, LifecycleRuleFilter, LoggingEnabled, MetricsAndOperator,
    MetricsConfiguration, MetricsFilter, NoncurrentVersionExpiration, NoncurrentVersionTransition,
    NotificationConfiguration, NotificationConfigurationFilter, ObjectIdentifier,
    ObjectLockConfiguration, ObjectLockLegalHold, ObjectLockRetention, ObjectLockRule, Owner,
    OwnershipControls, OwnershipControlsRule, PublicAccessBlockConfiguration, QueueConfiguration,
    Redirect, RedirectAllRequestsTo, ReplicationConfiguration, ReplicationRule,
    ReplicationRuleAndOperator, ReplicationRuleFilter, RequestPaymentConfiguration,
    RestoreRequest, RoutingRule, S3KeyFilter, ServerSideEncryptionByDefault,
    ServerSideEncryptionConfiguration, ServerSideEncryptionRule, SourceSelectionCriteria, SseKms,
    SseKmsEncryptedObjects, SseS3, Tag, Tagging, TargetGrant, TopicConfiguration, Transition,
    VersioningConfiguration, WebsiteConfiguration,
};

use crate::error::XmlError;
use crate::time::format_iso8601;

/// The S3 XML namespace.
pub const S3_NAMESPACE: &str = "http://s3.amazonaws.com/doc/2006-03-01/";

const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Shapes that can be written as the members of an XML element.
///
/// Uses `io::Result` because `quick_xml::Writer` closures require `io::Result<()>`.
pub trait S3Serialize {
    /// Write this value's members as child elements.
    ///
    /// # Errors
    ///
    /// Returns `io::Error` if writing to the underlying writer fails.
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()>;
}

/// Serialize a value as a complete S3 request document.
///
/// Writes the XML declaration and a `root_element` carrying the S3 namespace
/// around the value's members.
///
/// # Errors
///
/// Returns `XmlError` if serialization fails.
pub fn to_xml<T: S3Serialize>(root_element: &str, value: &T) -> Result<Vec<u8>, XmlError> {
    let mut buf = Vec::with_capacity(256);
    let mut writer = Writer::new(&mut buf);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer
        .create_element(root_element)
        .with_attribute(("xmlns", S3_NAMESPACE))
        .write_inner_content(|w| value.serialize_xml(w))?;

    Ok(buf)
}

// ---------------------------------------------------------------------------
// Element helpers
// ---------------------------------------------------------------------------

fn write_text_element<W: Write>(writer: &mut Writer<W>, tag: &str, text: &str) -> io::Result<()> {
    writer
        .create_element(tag)
        .write_text_content(BytesText::new(text))?;
    Ok(())
}

fn write_optional_text<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: Option<&str>,
) -> io::Result<()> {
    match value {
        Some(v) => write_text_element(writer, tag, v),
        None => Ok(()),
    }
}

fn write_optional_display<W: Write, T: std::fmt::Display>(
    writer: &mut Writer<W>,
    tag: &str,
    value: Option<T>,
) -> io::Result<()> {
    match value {
        Some(v) => write_text_element(writer, tag, &v.to_string()),
        None => Ok(()),
    }
}

fn write_optional_timestamp<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: Option<&DateTime<Utc>>,
) -> io::Result<()> {
    match value {
        Some(v) => write_text_element(writer, tag, &format_iso8601(v)),
        None => Ok(()),
    }
}

/// Write `<tag>` around the members of `value`.
fn write_element<W: Write, T: S3Serialize>(
    writer: &mut Writer<W>,
    tag: &str,
    value: &T,
) -> io::Result<()> {
    writer
        .create_element(tag)
        .write_inner_content(|w| value.serialize_xml(w))?;
    Ok(())
}

fn write_optional_element<W: Write, T: S3Serialize>(
    writer: &mut Writer<W>,
    tag: &str,
    value: Option<&T>,
) -> io::Result<()> {
    match value {
        Some(v) => write_element(writer, tag, v),
        None => Ok(()),
    }
}

/// Write each item as a sibling `<tag>` element (flattened list).
fn write_each<W: Write, T: S3Serialize>(
    writer: &mut Writer<W>,
    tag: &str,
    items: &[T],
) -> io::Result<()> {
    items.iter().try_for_each(|item| write_element(writer, tag, item))
}

/// Write `<wrapper><tag/>...</wrapper>`; an empty list writes nothing.
fn write_wrapped<W: Write, T: S3Serialize>(
    writer: &mut Writer<W>,
    wrapper: &str,
    tag: &str,
    items: &[T],
) -> io::Result<()> {
    if items.is_empty() {
        return Ok(());
    }
    writer
        .create_element(wrapper)
        .write_inner_content(|w| write_each(w, tag, items))?;
    Ok(())
}

fn write_each_text<W: Write, T: AsRef<str>>(
    writer: &mut Writer<W>,
    tag: &str,
    items: &[T],
) -> io::Result<()> {
    items
        .iter()
        .try_for_each(|item| write_text_element(writer, tag, item.as_ref()))
}

// ---------------------------------------------------------------------------
// Access control
// ---------------------------------------------------------------------------

impl S3Serialize for Owner {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_text(writer, "ID", self.id.as_deref())?;
        write_optional_text(writer, "DisplayName", self.display_name.as_deref())
    }
}

/// Grantees carry their kind as `xsi:type` on the element, so they are
/// written whole instead of through [`S3Serialize`].
fn write_grantee<W: Write>(writer: &mut Writer<W>, grantee: &Grantee) -> io::Result<()> {
    let mut element = writer
        .create_element("Grantee")
        .with_attribute(("xmlns:xsi", XSI_NAMESPACE));
    if let Some(kind) = &grantee.grantee_type {
        element = element.with_attribute(("xsi:type", kind.as_str()));
    }
    element.write_inner_content(|w| {
        write_optional_text(w, "DisplayName", grantee.display_name.as_deref())?;
        write_optional_text(w, "EmailAddress", grantee.email_address.as_deref())?;
        write_optional_text(w, "ID", grantee.id.as_deref())?;
        write_optional_text(w, "URI", grantee.uri.as_deref())?;
        Ok(())
    })?;
    Ok(())
}

impl S3Serialize for Grant {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        if let Some(grantee) = &self.grantee {
            write_grantee(writer, grantee)?;
        }
        write_optional_display(writer, "Permission", self.permission.as_ref())
    }
}

impl S3Serialize for TargetGrant {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        if let Some(grantee) = &self.grantee {
            write_grantee(writer, grantee)?;
        }
        write_optional_display(writer, "Permission", self.permission.as_ref())
    }
}

impl S3Serialize for AccessControlPolicy {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_wrapped(writer, "AccessControlList", "Grant", &self.grants)?;
        write_optional_element(writer, "Owner", self.owner.as_ref())
    }
}

impl S3Serialize for PublicAccessBlockConfiguration {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_display(writer, "BlockPublicAcls", self.block_public_acls)?;
        write_optional_display(writer, "IgnorePublicAcls", self.ignore_public_acls)?;
        write_optional_display(writer, "BlockPublicPolicy", self.block_public_policy)?;
        write_optional_display(writer, "RestrictPublicBuckets", self.restrict_public_buckets)
    }
}

impl S3Serialize for OwnershipControls {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_each(writer, "Rule", &self.rules)
    }
}

impl S3Serialize for OwnershipControlsRule {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_display(writer, "ObjectOwnership", self.object_ownership.as_ref())
    }
}

// ---------------------------------------------------------------------------
// Bucket settings
// ---------------------------------------------------------------------------

impl S3Serialize for CreateBucketConfiguration {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_text(writer, "LocationConstraint", self.location_constraint.as_deref())
    }
}

impl S3Serialize for VersioningConfiguration {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_display(writer, "MfaDelete", self.mfa_delete.as_ref())?;
        write_optional_display(writer, "Status", self.status.as_ref())
    }
}

impl S3Serialize for AccelerateConfiguration {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_display(writer, "Status", self.status.as_ref())
    }
}

impl S3Serialize for RequestPaymentConfiguration {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_display(writer, "Payer", self.payer.as_ref())
    }
}

impl S3Serialize for Tag {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_text_element(writer, "Key", &self.key)?;
        write_text_element(writer, "Value", &self.value)
    }
}

impl S3Serialize for Tagging {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        // TagSet is required even when empty.
        writer
            .create_element("TagSet")
            .write_inner_content(|w| write_each(w, "Tag", &self.tag_set))?;
        Ok(())
    }
}

impl S3Serialize for ServerSideEncryptionConfiguration {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_each(writer, "Rule", &self.rules)
    }
}

impl S3Serialize for ServerSideEncryptionRule {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_element(
            writer,
            "ApplyServerSideEncryptionByDefault",
            self.apply_server_side_encryption_by_default.as_ref(),
        )?;
        write_optional_display(writer, "BucketKeyEnabled", self.bucket_key_enabled)
    }
}

impl S3Serialize for ServerSideEncryptionByDefault {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_display(writer, "SSEAlgorithm", self.sse_algorithm.as_ref())?;
        write_optional_text(writer, "KMSMasterKeyID", self.kms_master_key_id.as_deref())
    }
}

impl S3Serialize for CorsConfiguration {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_each(writer, "CORSRule", &self.cors_rules)
    }
}

impl S3Serialize for CorsRule {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_text(writer, "ID", self.id.as_deref())?;
        write_each_text(writer, "AllowedHeader", &self.allowed_headers)?;
        write_each_text(writer, "AllowedMethod", &self.allowed_methods)?;
        write_each_text(writer, "AllowedOrigin", &self.allowed_origins)?;
        write_each_text(writer, "ExposeHeader", &self.expose_headers)?;
        write_optional_display(writer, "MaxAgeSeconds", self.max_age_seconds)
    }
}

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

impl S3Serialize for BucketLifecycleConfiguration {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_each(writer, "Rule", &self.rules)
    }
}

impl S3Serialize for LifecycleRule {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_element(writer, "Expiration", self.expiration.as_ref())?;
        write_optional_text(writer, "ID", self.id.as_deref())?;
        write_optional_text(writer, "Prefix", self.prefix.as_deref())?;
        write_optional_element(writer, "Filter", self.filter.as_ref())?;
        write_optional_display(writer, "Status", self.status.as_ref())?;
        write_each(writer, "Transition", &self.transitions)?;
        write_each(
            writer,
            "NoncurrentVersionTransition",
            &self.noncurrent_version_transitions,
        )?;
        write_optional_element(
            writer,
            "NoncurrentVersionExpiration",
            self.noncurrent_version_expiration.as_ref(),
        )?;
        write_optional_element(
            writer,
            "AbortIncompleteMultipartUpload",
            self.abort_incomplete_multipart_upload.as_ref(),
        )
    }
}

impl S3Serialize for LifecycleRuleFilter {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_text(writer, "Prefix", self.prefix.as_deref())?;
        write_optional_element(writer, "Tag", self.tag.as_ref())?;
        write_optional_display(writer, "ObjectSizeGreaterThan", self.object_size_greater_than)?;
        write_optional_display(writer, "ObjectSizeLessThan", self.object_size_less_than)?;
        write_optional_element(writer, "And", self.and.as_ref())
    }
}

impl S3Serialize for LifecycleRuleAndOperator {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_text(writer, "Prefix", self.prefix.as_deref())?;
        write_each(writer, "Tag", &self.tags)?;
        write_optional_display(writer, "ObjectSizeGreaterThan", self.object_size_greater_than)?;
        write_optional_display(writer, "ObjectSizeLessThan", self.object_size_less_than)
    }
}

impl S3Serialize for LifecycleExpiration {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_timestamp(writer, "Date", self.date.as_ref())?;
        write_optional_display(writer, "Days", self.days)?;
        write_optional_display(
            writer,
            "ExpiredObjectDeleteMarker",
            self.expired_object_delete_marker,
        )
    }
}

impl S3Serialize for Transition {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_timestamp(writer, "Date", self.date.as_ref())?;
        write_optional_display(writer, "Days", self.days)?;
        write_optional_display(writer, "StorageClass", self.storage_class.as_ref())
    }
}

impl S3Serialize for NoncurrentVersionTransition {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_display(writer, "NoncurrentDays", self.noncurrent_days)?;
        write_optional_display(writer, "StorageClass", self.storage_class.as_ref())?;
        write_optional_display(
            writer,
            "NewerNoncurrentVersions",
            self.newer_noncurrent_versions,
        )
    }
}

impl S3Serialize for NoncurrentVersionExpiration {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_display(writer, "NoncurrentDays", self.noncurrent_days)?;
        write_optional_display(
            writer,
            "NewerNoncurrentVersions",
            self.newer_noncurrent_versions,
        )
    }
}

impl S3Serialize for AbortIncompleteMultipartUpload {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_display(writer, "DaysAfterInitiation", self.days_after_initiation)
    }
}

// ---------------------------------------------------------------------------
// Notifications and logging
// ---------------------------------------------------------------------------

impl S3Serialize for NotificationConfiguration {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_each(writer, "TopicConfiguration", &self.topic_configurations)?;
        write_each(writer, "QueueConfiguration", &self.queue_configurations)?;
        write_each(
            writer,
            "CloudFunctionConfiguration",
            &self.lambda_function_configurations,
        )?;
        write_optional_element(
            writer,
            "EventBridgeConfiguration",
            self.event_bridge_configuration.as_ref(),
        )
    }
}

fn write_notification_target<W: Write>(
    writer: &mut Writer<W>,
    id: Option<&str>,
    (arn_tag, arn): (&str, &str),
    events: &[S3Event],
    filter: Option<&NotificationConfigurationFilter>,
) -> io::Result<()> {
    write_optional_text(writer, "Id", id)?;
    write_text_element(writer, arn_tag, arn)?;
    events
        .iter()
        .try_for_each(|event| write_text_element(writer, "Event", event.as_str()))?;
    write_optional_element(writer, "Filter", filter)
}

impl S3Serialize for TopicConfiguration {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_notification_target(
            writer,
            self.id.as_deref(),
            ("Topic", &self.topic_arn),
            &self.events,
            self.filter.as_ref(),
        )
    }
}

impl S3Serialize for QueueConfiguration {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_notification_target(
            writer,
            self.id.as_deref(),
            ("Queue", &self.queue_arn),
            &self.events,
            self.filter.as_ref(),
        )
    }
}

impl S3Serialize for LambdaFunctionConfiguration {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_notification_target(
            writer,
            self.id.as_deref(),
            ("CloudFunction", &self.lambda_function_arn),
            &self.events,
            self.filter.as_ref(),
        )
    }
}

impl S3Serialize for EventBridgeConfiguration {
    fn serialize_xml<W: Write>(&self, _writer: &mut Writer<W>) -> io::Result<()> {
        Ok(())
    }
}

impl S3Serialize for NotificationConfigurationFilter {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_element(writer, "S3Key", self.key.as_ref())
    }
}

impl S3Serialize for S3KeyFilter {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_each(writer, "FilterRule", &self.filter_rules)
    }
}

impl S3Serialize for FilterRule {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_display(writer, "Name", self.name.as_ref())?;
        write_optional_text(writer, "Value", self.value.as_deref())
    }
}

impl S3Serialize for BucketLoggingStatus {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_element(writer, "LoggingEnabled", self.logging_enabled.as_ref())
    }
}

impl S3Serialize for LoggingEnabled {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_text_element(writer, "TargetBucket", &self.target_bucket)?;
        write_wrapped(writer, "TargetGrants", "Grant", &self.target_grants)?;
        write_text_element(writer, "TargetPrefix", &self.target_prefix)
    }
}

// ---------------------------------------------------------------------------
// Object lock
// ---------------------------------------------------------------------------

impl S3Serialize for ObjectLockConfiguration {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_display(writer, "ObjectLockEnabled", self.object_lock_enabled.as_ref())?;
        write_optional_element(writer, "Rule", self.rule.as_ref())
    }
}

impl S3Serialize for ObjectLockRule {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_element(writer, "DefaultRetention", self.default_retention.as_ref())
    }
}

impl S3Serialize for DefaultRetention {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_display(writer, "Mode", self.mode.as_ref())?;
        write_optional_display(writer, "Days", self.days)?;
        write_optional_display(writer, "Years", self.years)
    }
}

impl S3Serialize for ObjectLockRetention {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_display(writer, "Mode", self.mode.as_ref())?;
        write_optional_timestamp(writer, "RetainUntilDate", self.retain_until_date.as_ref())
    }
}

impl S3Serialize for ObjectLockLegalHold {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_display(writer, "Status", self.status.as_ref())
    }
}

// ---------------------------------------------------------------------------
// Website
// ---------------------------------------------------------------------------

impl S3Serialize for WebsiteConfiguration {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_element(writer, "ErrorDocument", self.error_document.as_ref())?;
        write_optional_element(writer, "IndexDocument", self.index_document.as_ref())?;
        write_optional_element(
            writer,
            "RedirectAllRequestsTo",
            self.redirect_all_requests_to.as_ref(),
        )?;
        write_wrapped(writer, "RoutingRules", "RoutingRule", &self.routing_rules)
    }
}

impl S3Serialize for ErrorDocument {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_text_element(writer, "Key", &self.key)
    }
}

impl S3Serialize for IndexDocument {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_text_element(writer, "Suffix", &self.suffix)
    }
}

impl S3Serialize for RedirectAllRequestsTo {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_text_element(writer, "HostName", &self.host_name)?;
        write_optional_display(writer, "Protocol", self.protocol.as_ref())
    }
}

impl S3Serialize for RoutingRule {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_element(writer, "Condition", self.condition.as_ref())?;
        write_element(writer, "Redirect", &self.redirect)
    }
}

impl S3Serialize for Condition {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_text(
            writer,
            "HttpErrorCodeReturnedEquals",
            self.http_error_code_returned_equals.as_deref(),
        )?;
        write_optional_text(writer, "KeyPrefixEquals", self.key_prefix_equals.as_deref())
    }
}

impl S3Serialize for Redirect {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_text(writer, "HostName", self.host_name.as_deref())?;
        write_optional_text(writer, "HttpRedirectCode", self.http_redirect_code.as_deref())?;
        write_optional_display(writer, "Protocol", self.protocol.as_ref())?;
        write_optional_text(
            writer,
            "ReplaceKeyPrefixWith",
            self.replace_key_prefix_with.as_deref(),
        )?;
        write_optional_text(writer, "ReplaceKeyWith", self.replace_key_with.as_deref())
    }
}

// ---------------------------------------------------------------------------
// Replication
// ---------------------------------------------------------------------------

impl S3Serialize for ReplicationConfiguration {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_text_element(writer, "Role", &self.role)?;
        write_each(writer, "Rule", &self.rules)
    }
}

impl S3Serialize for ReplicationRule {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_text(writer, "ID", self.id.as_deref())?;
        write_optional_display(writer, "Priority", self.priority)?;
        write_optional_text(writer, "Prefix", self.prefix.as_deref())?;
        write_optional_element(writer, "Filter", self.filter.as_ref())?;
        write_optional_display(writer, "Status", self.status.as_ref())?;
        write_optional_element(
            writer,
            "SourceSelectionCriteria",
            self.source_selection_criteria.as_ref(),
        )?;
        write_element(writer, "Destination", &self.destination)?;
        write_optional_element(
            writer,
            "DeleteMarkerReplication",
            self.delete_marker_replication.as_ref(),
        )
    }
}

impl S3Serialize for ReplicationRuleFilter {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_text(writer, "Prefix", self.prefix.as_deref())?;
        write_optional_element(writer, "Tag", self.tag.as_ref())?;
        write_optional_element(writer, "And", self.and.as_ref())
    }
}

impl S3Serialize for ReplicationRuleAndOperator {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_text(writer, "Prefix", self.prefix.as_deref())?;
        write_each(writer, "Tag", &self.tags)
    }
}

impl S3Serialize for Destination {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_text_element(writer, "Bucket", &self.bucket)?;
        write_optional_text(writer, "Account", self.account.as_deref())?;
        write_optional_display(writer, "StorageClass", self.storage_class.as_ref())?;
        write_optional_element(
            writer,
            "AccessControlTranslation",
            self.access_control_translation.as_ref(),
        )?;
        write_optional_element(
            writer,
            "EncryptionConfiguration",
            self.encryption_configuration.as_ref(),
        )
    }
}

impl S3Serialize for AccessControlTranslation {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_display(writer, "Owner", self.owner.as_ref())
    }
}

impl S3Serialize for EncryptionConfiguration {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_text(writer, "ReplicaKmsKeyID", self.replica_kms_key_id.as_deref())
    }
}

impl S3Serialize for SourceSelectionCriteria {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_element(
            writer,
            "SseKmsEncryptedObjects",
            self.sse_kms_encrypted_objects.as_ref(),
        )
    }
}

impl S3Serialize for SseKmsEncryptedObjects {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_display(writer, "Status", self.status.as_ref())
    }
}

impl S3Serialize for DeleteMarkerReplication {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_display(writer, "Status", self.status.as_ref())
    }
}

// ---------------------------------------------------------------------------
// Inventory and metrics
// ---------------------------------------------------------------------------

impl S3Serialize for InventoryConfiguration {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_element(writer, "Destination", self.destination.as_ref())?;
        write_optional_display(writer, "IsEnabled", self.is_enabled)?;
        write_optional_element(writer, "Filter", self.filter.as_ref())?;
        write_text_element(writer, "Id", &self.id)?;
        write_optional_display(
            writer,
            "IncludedObjectVersions",
            self.included_object_versions.as_ref(),
        )?;
        if !self.optional_fields.is_empty() {
            writer
                .create_element("OptionalFields")
                .write_inner_content(|w| {
                    self.optional_fields
                        .iter()
                        .try_for_each(|field| write_text_element(w, "Field", field.as_str()))
                })?;
        }
        write_optional_element(writer, "Schedule", self.schedule.as_ref())
    }
}

impl S3Serialize for InventoryDestination {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_element(writer, "S3BucketDestination", self.s3_bucket_destination.as_ref())
    }
}

impl S3Serialize for InventoryS3BucketDestination {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_text(writer, "AccountId", self.account_id.as_deref())?;
        write_text_element(writer, "Bucket", &self.bucket)?;
        write_optional_display(writer, "Format", self.format.as_ref())?;
        write_optional_text(writer, "Prefix", self.prefix.as_deref())?;
        write_optional_element(writer, "Encryption", self.encryption.as_ref())
    }
}

impl S3Serialize for InventoryEncryption {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_element(writer, "SSE-S3", self.sse_s3.as_ref())?;
        write_optional_element(writer, "SSE-KMS", self.sse_kms.as_ref())
    }
}

impl S3Serialize for SseS3 {
    fn serialize_xml<W: Write>(&self, _writer: &mut Writer<W>) -> io::Result<()> {
        Ok(())
    }
}

impl S3Serialize for SseKms {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_text_element(writer, "KeyId", &self.key_id)
    }
}

impl S3Serialize for InventoryFilter {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_text_element(writer, "Prefix", &self.prefix)
    }
}

impl S3Serialize for InventorySchedule {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_display(writer, "Frequency", self.frequency.as_ref())
    }
}

impl S3Serialize for MetricsConfiguration {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_text_element(writer, "Id", &self.id)?;
        write_optional_element(writer, "Filter", self.filter.as_ref())
    }
}

impl S3Serialize for MetricsFilter {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_text(writer, "Prefix", self.prefix.as_deref())?;
        write_optional_element(writer, "Tag", self.tag.as_ref())?;
        write_optional_text(writer, "AccessPointArn", self.access_point_arn.as_deref())?;
        write_optional_element(writer, "And", self.and.as_ref())
    }
}

impl S3Serialize for MetricsAndOperator {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_text(writer, "Prefix", self.prefix.as_deref())?;
        write_each(writer, "Tag", &self.tags)?;
        write_optional_text(writer, "AccessPointArn", self.access_point_arn.as_deref())
    }
}

// ---------------------------------------------------------------------------
// Objects and multipart uploads
// ---------------------------------------------------------------------------

impl S3Serialize for Delete {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_each(writer, "Object", &self.objects)?;
        write_optional_display(writer, "Quiet", self.quiet)
    }
}

impl S3Serialize for ObjectIdentifier {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_text_element(writer, "Key", &self.key)?;
        write_optional_text(writer, "VersionId", self.version_id.as_deref())
    }
}

impl S3Serialize for RestoreRequest {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_display(writer, "Days", self.days)?;
        write_optional_element(
            writer,
            "GlacierJobParameters",
            self.glacier_job_parameters.as_ref(),
        )?;
        write_optional_text(writer, "Description", self.description.as_deref())
    }
}

impl S3Serialize for GlacierJobParameters {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_display(writer, "Tier", self.tier.as_ref())
    }
}

impl S3Serialize for CompletedMultipartUpload {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_each(writer, "Part", &self.parts)
    }
}

impl S3Serialize for CompletedPart {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_text(writer, "ETag", self.e_tag.as_deref())?;
        write_optional_text(writer, "ChecksumCRC32", self.checksum_crc32.as_deref())?;
        write_optional_text(writer, "ChecksumCRC32C", self.checksum_crc32c.as_deref())?;
        write_optional_text(writer, "ChecksumSHA1", self.checksum_sha1.as_deref())?;
        write_optional_text(writer, "ChecksumSHA256", self.checksum_sha256.as_deref())?;
        write_optional_display(writer, "PartNumber", self.part_number)
    }
}
