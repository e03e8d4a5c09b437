//! Depth-tracking unmarshallers for S3 response bodies.
//!
//! Every unmarshaller follows the same loop: remember the depth it was entered
//! at, compute the depth its fields live at, and walk events until the element
//! it was entered on closes. Fields are claimed with
//! [`StaxUnmarshallerContext::test_expression`]; anything unclaimed is skipped.

use chrono::{DateTime, Utc};
use tracing::trace;

use crate::error::XmlError;
use crate::stax::{StaxUnmarshallerContext, XmlEvent};
use crate::time::parse_timestamp;

/// Declares a [`StaxUnmarshall`] impl from a table of element paths.
///
/// Each row is `"Path" => kind field` where `kind` is `opt` (assign
/// `Some(value)`), `val` (assign the value) or `list` (push the value). The
/// type must implement `Default`.
#[macro_export]
macro_rules! stax_struct {
    (@opt $place:expr, $ctx:ident) => {
        $place = Some($crate::unmarshall::StaxUnmarshall::unmarshall($ctx)?)
    };
    (@val $place:expr, $ctx:ident) => {
        $place = $crate::unmarshall::StaxUnmarshall::unmarshall($ctx)?
    };
    (@list $place:expr, $ctx:ident) => {
        $place.push($crate::unmarshall::StaxUnmarshall::unmarshall($ctx)?)
    };
    ($ty:ident { $($path:literal => $kind:ident $field:ident),+ $(,)? }) => {
        impl $crate::unmarshall::StaxUnmarshall for $ty {
            fn unmarshall(
                ctx: &mut $crate::stax::StaxUnmarshallerContext<'_>,
            ) -> Result<Self, $crate::error::XmlError> {
                $crate::unmarshall::read_struct(ctx, |value: &mut $ty, ctx, depth| {
                    $(
                        if ctx.test_expression($path, depth) {
                            $crate::stax_struct!(@$kind value.$field, ctx);
                            return Ok(true);
                        }
                    )+
                    Ok(false)
                })
            }
        }
    };
}

mod results;
mod types;

pub use results::ErrorResponse;

/// Types that can be read from a [`StaxUnmarshallerContext`].
pub trait StaxUnmarshall: Sized {
    /// Read a value whose start element has just been consumed (or, at the
    /// start of a document, the document's root structure).
    ///
    /// # Errors
    ///
    /// Returns [`XmlError`] on malformed XML or unconvertible text.
    fn unmarshall(ctx: &mut StaxUnmarshallerContext<'_>) -> Result<Self, XmlError>;
}

/// Unmarshall a REST-XML document whose root element holds the fields of `T`.
///
/// # Errors
///
/// Returns [`XmlError`] on malformed XML or unconvertible text.
pub fn from_xml<T: StaxUnmarshall>(xml: &[u8]) -> Result<T, XmlError> {
    from_xml_with_depth(xml, 1)
}

/// Unmarshall a document whose fields sit `document_depth` elements below the
/// root.
///
/// # Errors
///
/// Returns [`XmlError`] on malformed XML or unconvertible text.
pub fn from_xml_with_depth<T: StaxUnmarshall>(
    xml: &[u8],
    document_depth: usize,
) -> Result<T, XmlError> {
    let mut ctx = StaxUnmarshallerContext::with_document_depth(xml, document_depth);
    T::unmarshall(&mut ctx)
}

/// Drive the event loop of a structure unmarshaller.
///
/// `field` is called for every start element with the depth the structure's
/// members live at; it returns `true` when it consumed the element.
///
/// # Errors
///
/// Propagates errors from the context and from `field`.
pub fn read_struct<'a, T, F>(
    ctx: &mut StaxUnmarshallerContext<'a>,
    mut field: F,
) -> Result<T, XmlError>
where
    T: Default,
    F: FnMut(&mut T, &mut StaxUnmarshallerContext<'a>, usize) -> Result<bool, XmlError>,
{
    let mut value = T::default();
    let start_depth = ctx.current_depth();
    let mut target_depth = start_depth + 1;
    if ctx.is_start_of_document() {
        target_depth += ctx.document_depth();
    }

    loop {
        match ctx.next_event()? {
            XmlEvent::EndDocument => return Ok(value),
            XmlEvent::StartElement { name, .. } => {
                if !field(&mut value, ctx, target_depth)? && ctx.current_depth() == target_depth {
                    trace!(element = %name, "skipping unknown element");
                }
            }
            XmlEvent::EndElement(_) => {
                if ctx.current_depth() < start_depth {
                    return Ok(value);
                }
            }
            XmlEvent::Text(_) => {}
        }
    }
}

/// Read the text of the current element, converting it with `parse`.
fn read_scalar<T>(
    ctx: &mut StaxUnmarshallerContext<'_>,
    parse: impl FnOnce(&str) -> Result<T, XmlError>,
) -> Result<T, XmlError> {
    let text = ctx.read_text()?;
    parse(&text)
}

impl StaxUnmarshall for String {
    fn unmarshall(ctx: &mut StaxUnmarshallerContext<'_>) -> Result<Self, XmlError> {
        ctx.read_text()
    }
}

impl StaxUnmarshall for i32 {
    fn unmarshall(ctx: &mut StaxUnmarshallerContext<'_>) -> Result<Self, XmlError> {
        read_scalar(ctx, |s| {
            s.trim()
                .parse::<i32>()
                .map_err(|e| XmlError::ParseError(format!("invalid i32 '{s}': {e}")))
        })
    }
}

impl StaxUnmarshall for i64 {
    fn unmarshall(ctx: &mut StaxUnmarshallerContext<'_>) -> Result<Self, XmlError> {
        read_scalar(ctx, |s| {
            s.trim()
                .parse::<i64>()
                .map_err(|e| XmlError::ParseError(format!("invalid i64 '{s}': {e}")))
        })
    }
}

impl StaxUnmarshall for bool {
    fn unmarshall(ctx: &mut StaxUnmarshallerContext<'_>) -> Result<Self, XmlError> {
        read_scalar(ctx, |s| match s.trim() {
            t if t.eq_ignore_ascii_case("true") => Ok(true),
            t if t.eq_ignore_ascii_case("false") => Ok(false),
            _ => Err(XmlError::ParseError(format!("invalid boolean: {s}"))),
        })
    }
}

impl StaxUnmarshall for DateTime<Utc> {
    fn unmarshall(ctx: &mut StaxUnmarshallerContext<'_>) -> Result<Self, XmlError> {
        read_scalar(ctx, parse_timestamp)
    }
}

macro_rules! stax_enum {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl StaxUnmarshall for $ty {
                fn unmarshall(ctx: &mut StaxUnmarshallerContext<'_>) -> Result<Self, XmlError> {
                    read_scalar(ctx, |s| Ok($ty::from(s.trim())))
                }
            }
        )+
    };
}

use wirestack_s3_model::enums::{
    ArchiveStatus, BucketAccelerateStatus, BucketLogsPermission, BucketVersioningStatus,
    ChecksumAlgorithm, DeleteMarkerReplicationStatus, EncodingType, Event, ExpirationStatus,
    FilterRuleName, GranteeType, InventoryFormat, InventoryFrequency,
    InventoryIncludedObjectVersions, InventoryOptionalField, MfaDelete, MfaDeleteStatus,
    ObjectLockEnabled, ObjectLockLegalHoldStatus, ObjectLockMode, ObjectLockRetentionMode,
    ObjectOwnership, OwnerOverride, Payer, Permission, Protocol, ReplicationRuleStatus,
    ReplicationStatus, RequestCharged, ServerSideEncryption, SseKmsEncryptedObjectsStatus,
    StorageClass, Tier,
};

stax_enum!(
    ArchiveStatus,
    BucketAccelerateStatus,
    BucketLogsPermission,
    BucketVersioningStatus,
    ChecksumAlgorithm,
    DeleteMarkerReplicationStatus,
    EncodingType,
    Event,
    ExpirationStatus,
    FilterRuleName,
    GranteeType,
    InventoryFormat,
    InventoryFrequency,
    InventoryIncludedObjectVersions,
    InventoryOptionalField,
    MfaDelete,
    MfaDeleteStatus,
    ObjectLockEnabled,
    ObjectLockLegalHoldStatus,
    ObjectLockMode,
    ObjectLockRetentionMode,
    ObjectOwnership,
    OwnerOverride,
    Payer,
    Permission,
    Protocol,
    ReplicationRuleStatus,
    ReplicationStatus,
    RequestCharged,
    ServerSideEncryption,
    SseKmsEncryptedObjectsStatus,
    StorageClass,
    Tier,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct Sample {
        name: Option<String>,
        count: Option<i32>,
        flags: Vec<bool>,
        inner: Option<Inner>,
    }

    #[derive(Debug, Default, PartialEq)]
    struct Inner {
        name: Option<String>,
    }

    stax_struct!(Inner { "Name" => opt name });

    stax_struct!(Sample {
        "Name" => opt name,
        "Count" => opt count,
        "Flags/Flag" => list flags,
        "Inner" => opt inner,
    });

    #[test]
    fn test_should_disambiguate_same_named_elements_by_depth() {
        let xml = b"<Sample><Inner><Name>inner</Name></Inner><Name>outer</Name></Sample>";
        let sample: Sample = from_xml(xml).unwrap();
        assert_eq!(sample.name.as_deref(), Some("outer"));
        assert_eq!(sample.inner.unwrap().name.as_deref(), Some("inner"));
    }

    #[test]
    fn test_should_skip_unknown_elements_with_matching_children() {
        let xml = b"<Sample><Unknown><Name>hidden</Name><Deeper><Count>9</Count></Deeper></Unknown>\
                    <Count>3</Count></Sample>";
        let sample: Sample = from_xml(xml).unwrap();
        assert_eq!(sample.name, None);
        assert_eq!(sample.count, Some(3));
    }

    #[test]
    fn test_should_collect_wrapped_list_in_order() {
        let xml = b"<Sample><Flags><Flag>true</Flag><Flag>FALSE</Flag><Flag>True</Flag></Flags></Sample>";
        let sample: Sample = from_xml(xml).unwrap();
        assert_eq!(sample.flags, vec![true, false, true]);
    }

    #[test]
    fn test_should_honour_document_depth() {
        let xml = b"<SampleResponse><Name>top</Name><SampleResult><Name>r</Name></SampleResult>\
                    <ResponseMetadata><RequestId>id</RequestId></ResponseMetadata></SampleResponse>";
        let sample: Sample = from_xml_with_depth(xml, 2).unwrap();
        assert_eq!(sample.name.as_deref(), Some("r"));
    }

    #[test]
    fn test_should_return_default_for_empty_root() {
        let sample: Sample = from_xml(b"<Sample/>").unwrap();
        assert_eq!(sample, Sample::default());
    }

    #[test]
    fn test_should_reject_bad_scalars() {
        assert!(matches!(
            from_xml::<Sample>(b"<Sample><Count>many</Count></Sample>"),
            Err(XmlError::ParseError(_))
        ));
        assert!(matches!(
            from_xml::<Sample>(b"<Sample><Flags><Flag>yes</Flag></Flags></Sample>"),
            Err(XmlError::ParseError(_))
        ));
    }

    #[test]
    fn test_should_parse_enum_values_including_unknown() {
        let mut ctx = StaxUnmarshallerContext::new(b"<S>GLACIER_IR</S>");
        ctx.next_event().unwrap();
        assert_eq!(StorageClass::unmarshall(&mut ctx).unwrap(), StorageClass::GlacierIr);

        let mut ctx = StaxUnmarshallerContext::new(b"<S>FUTURE_TIER</S>");
        ctx.next_event().unwrap();
        assert_eq!(
            StorageClass::unmarshall(&mut ctx).unwrap(),
            StorageClass::Unknown("FUTURE_TIER".to_owned())
        );
    }
}
