//! S3 string enumerations.
//!
//! Every enum keeps values it does not recognize in an `Unknown` variant so a
//! value introduced by S3 later survives an unmarshall/marshall round trip.

/// Declares an S3 string enum with wire-value conversions.
macro_rules! s3_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                #[doc = concat!("`", $value, "`")]
                $variant,
            )+
            /// A value this model does not know about.
            Unknown(String),
        }

        impl $name {
            /// All wire values known to this model.
            pub const VALUES: &'static [&'static str] = &[$($value),+];

            /// Returns the wire value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $value,)+
                    Self::Unknown(s) => s.as_str(),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                match s {
                    $($value => Self::$variant,)+
                    other => Self::Unknown(other.to_owned()),
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::from(s))
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self::from(s.as_str()))
            }
        }
    };
}

s3_enum! {
    /// Archive tier of an object in S3 Intelligent-Tiering.
    ArchiveStatus {
        ArchiveAccess => "ARCHIVE_ACCESS",
        DeepArchiveAccess => "DEEP_ARCHIVE_ACCESS",
    }
}

s3_enum! {
    /// Transfer acceleration state of a bucket.
    BucketAccelerateStatus {
        Enabled => "Enabled",
        Suspended => "Suspended",
    }
}

s3_enum! {
    /// Canned ACL applied to a bucket.
    BucketCannedAcl {
        Private => "private",
        PublicRead => "public-read",
        PublicReadWrite => "public-read-write",
        AuthenticatedRead => "authenticated-read",
    }
}

s3_enum! {
    /// Permission granted on the target bucket of server access logging.
    BucketLogsPermission {
        FullControl => "FULL_CONTROL",
        Read => "READ",
        Write => "WRITE",
    }
}

s3_enum! {
    /// Versioning state of a bucket.
    BucketVersioningStatus {
        Enabled => "Enabled",
        Suspended => "Suspended",
    }
}

s3_enum! {
    /// Algorithm used to compute an additional object checksum.
    ChecksumAlgorithm {
        Crc32 => "CRC32",
        Crc32c => "CRC32C",
        Crc64Nvme => "CRC64NVME",
        Sha1 => "SHA1",
        Sha256 => "SHA256",
    }
}

s3_enum! {
    /// Whether checksum validation is requested on retrieval.
    ChecksumMode {
        Enabled => "ENABLED",
    }
}

s3_enum! {
    /// Status of delete-marker replication.
    DeleteMarkerReplicationStatus {
        Enabled => "Enabled",
        Disabled => "Disabled",
    }
}

s3_enum! {
    /// Encoding applied to object keys in list responses.
    EncodingType {
        Url => "url",
    }
}

s3_enum! {
    /// Bucket event type that triggers a notification.
    Event {
        ReducedRedundancyLostObject => "s3:ReducedRedundancyLostObject",
        ObjectCreated => "s3:ObjectCreated:*",
        ObjectCreatedPut => "s3:ObjectCreated:Put",
        ObjectCreatedPost => "s3:ObjectCreated:Post",
        ObjectCreatedCopy => "s3:ObjectCreated:Copy",
        ObjectCreatedCompleteMultipartUpload => "s3:ObjectCreated:CompleteMultipartUpload",
        ObjectRemoved => "s3:ObjectRemoved:*",
        ObjectRemovedDelete => "s3:ObjectRemoved:Delete",
        ObjectRemovedDeleteMarkerCreated => "s3:ObjectRemoved:DeleteMarkerCreated",
        ObjectRestore => "s3:ObjectRestore:*",
        ObjectRestorePost => "s3:ObjectRestore:Post",
        ObjectRestoreCompleted => "s3:ObjectRestore:Completed",
        Replication => "s3:Replication:*",
        ObjectTagging => "s3:ObjectTagging:*",
        ObjectAcl => "s3:ObjectAcl:Put",
    }
}

s3_enum! {
    /// Whether a lifecycle or replication rule is applied.
    ExpirationStatus {
        Enabled => "Enabled",
        Disabled => "Disabled",
    }
}

s3_enum! {
    /// Object key name part matched by a notification filter rule.
    FilterRuleName {
        Prefix => "prefix",
        Suffix => "suffix",
    }
}

s3_enum! {
    /// Type of an ACL grantee, carried in the `xsi:type` attribute.
    GranteeType {
        CanonicalUser => "CanonicalUser",
        AmazonCustomerByEmail => "AmazonCustomerByEmail",
        Group => "Group",
    }
}

s3_enum! {
    /// Output format of an inventory report.
    InventoryFormat {
        Csv => "CSV",
        Orc => "ORC",
        Parquet => "Parquet",
    }
}

s3_enum! {
    /// How often inventory reports are produced.
    InventoryFrequency {
        Daily => "Daily",
        Weekly => "Weekly",
    }
}

s3_enum! {
    /// Object versions listed in an inventory report.
    InventoryIncludedObjectVersions {
        All => "All",
        Current => "Current",
    }
}

s3_enum! {
    /// Optional field included in an inventory report.
    InventoryOptionalField {
        Size => "Size",
        LastModifiedDate => "LastModifiedDate",
        StorageClass => "StorageClass",
        ETag => "ETag",
        IsMultipartUploaded => "IsMultipartUploaded",
        ReplicationStatus => "ReplicationStatus",
        EncryptionStatus => "EncryptionStatus",
        ObjectLockRetainUntilDate => "ObjectLockRetainUntilDate",
        ObjectLockMode => "ObjectLockMode",
        ObjectLockLegalHoldStatus => "ObjectLockLegalHoldStatus",
        IntelligentTieringAccessTier => "IntelligentTieringAccessTier",
        BucketKeyStatus => "BucketKeyStatus",
        ChecksumAlgorithm => "ChecksumAlgorithm",
    }
}

s3_enum! {
    /// MFA delete state reported by GetBucketVersioning.
    MfaDeleteStatus {
        Enabled => "Enabled",
        Disabled => "Disabled",
    }
}

s3_enum! {
    /// MFA delete state sent with PutBucketVersioning.
    MfaDelete {
        Enabled => "Enabled",
        Disabled => "Disabled",
    }
}

s3_enum! {
    /// Whether metadata is copied from the source or replaced.
    MetadataDirective {
        Copy => "COPY",
        Replace => "REPLACE",
    }
}

s3_enum! {
    /// Canned ACL applied to an object.
    ObjectCannedAcl {
        Private => "private",
        PublicRead => "public-read",
        PublicReadWrite => "public-read-write",
        AuthenticatedRead => "authenticated-read",
        AwsExecRead => "aws-exec-read",
        BucketOwnerRead => "bucket-owner-read",
        BucketOwnerFullControl => "bucket-owner-full-control",
    }
}

s3_enum! {
    /// Whether a bucket has Object Lock enabled.
    ObjectLockEnabled {
        Enabled => "Enabled",
    }
}

s3_enum! {
    /// Legal hold state of an object.
    ObjectLockLegalHoldStatus {
        On => "ON",
        Off => "OFF",
    }
}

s3_enum! {
    /// Object Lock mode applied to an object.
    ObjectLockMode {
        Governance => "GOVERNANCE",
        Compliance => "COMPLIANCE",
    }
}

s3_enum! {
    /// Object Lock retention mode.
    ObjectLockRetentionMode {
        Governance => "GOVERNANCE",
        Compliance => "COMPLIANCE",
    }
}

s3_enum! {
    /// Object ownership setting of a bucket.
    ObjectOwnership {
        BucketOwnerPreferred => "BucketOwnerPreferred",
        ObjectWriter => "ObjectWriter",
        BucketOwnerEnforced => "BucketOwnerEnforced",
    }
}

s3_enum! {
    /// Replica ownership override for cross-account replication.
    OwnerOverride {
        Destination => "Destination",
    }
}

s3_enum! {
    /// Who pays for requests and data transfer on a bucket.
    Payer {
        Requester => "Requester",
        BucketOwner => "BucketOwner",
    }
}

s3_enum! {
    /// Permission carried by an ACL grant.
    Permission {
        FullControl => "FULL_CONTROL",
        Write => "WRITE",
        WriteAcp => "WRITE_ACP",
        Read => "READ",
        ReadAcp => "READ_ACP",
    }
}

s3_enum! {
    /// Protocol used in website redirects.
    Protocol {
        Http => "http",
        Https => "https",
    }
}

s3_enum! {
    /// Whether a replication rule is applied.
    ReplicationRuleStatus {
        Enabled => "Enabled",
        Disabled => "Disabled",
    }
}

s3_enum! {
    /// Replication state of an object.
    ReplicationStatus {
        Complete => "COMPLETE",
        Completed => "COMPLETED",
        Pending => "PENDING",
        Failed => "FAILED",
        Replica => "REPLICA",
    }
}

s3_enum! {
    /// Confirms the requester was charged for the request.
    RequestCharged {
        Requester => "requester",
    }
}

s3_enum! {
    /// Confirms the requester knows they will be charged.
    RequestPayer {
        Requester => "requester",
    }
}

s3_enum! {
    /// Server-side encryption algorithm.
    ServerSideEncryption {
        Aes256 => "AES256",
        AwsKms => "aws:kms",
        AwsKmsDsse => "aws:kms:dsse",
    }
}

s3_enum! {
    /// Whether SSE-KMS encrypted objects are replicated.
    SseKmsEncryptedObjectsStatus {
        Enabled => "Enabled",
        Disabled => "Disabled",
    }
}

s3_enum! {
    /// Storage class of an object, version, upload or transition.
    StorageClass {
        Standard => "STANDARD",
        ReducedRedundancy => "REDUCED_REDUNDANCY",
        StandardIa => "STANDARD_IA",
        OnezoneIa => "ONEZONE_IA",
        IntelligentTiering => "INTELLIGENT_TIERING",
        Glacier => "GLACIER",
        DeepArchive => "DEEP_ARCHIVE",
        Outposts => "OUTPOSTS",
        GlacierIr => "GLACIER_IR",
        Snow => "SNOW",
        ExpressOnezone => "EXPRESS_ONEZONE",
    }
}

s3_enum! {
    /// Whether object tags are copied from the source or replaced.
    TaggingDirective {
        Copy => "COPY",
        Replace => "REPLACE",
    }
}

s3_enum! {
    /// Retrieval tier used when restoring an archived object.
    Tier {
        Standard => "Standard",
        Bulk => "Bulk",
        Expedited => "Expedited",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_convert_known_values_both_ways() {
        let class = StorageClass::from("GLACIER_IR");
        assert_eq!(class, StorageClass::GlacierIr);
        assert_eq!(class.as_str(), "GLACIER_IR");
        assert_eq!(ObjectCannedAcl::BucketOwnerFullControl.to_string(), "bucket-owner-full-control");
    }

    #[test]
    fn test_should_keep_unknown_values_verbatim() {
        let class = StorageClass::from("FUTURE_TIER");
        assert_eq!(class, StorageClass::Unknown("FUTURE_TIER".to_owned()));
        assert_eq!(class.as_str(), "FUTURE_TIER");
    }

    #[test]
    fn test_should_be_case_sensitive() {
        assert!(matches!(Permission::from("read"), Permission::Unknown(_)));
    }

    #[test]
    fn test_should_parse_through_from_str() {
        let status: BucketVersioningStatus = "Suspended".parse().unwrap_or(BucketVersioningStatus::Enabled);
        assert_eq!(status, BucketVersioningStatus::Suspended);
    }

    #[test]
    fn test_should_serialize_as_wire_value() {
        let json = serde_json::to_string(&ServerSideEncryption::AwsKms).unwrap();
        assert_eq!(json, "\"aws:kms\"");
        let back: ServerSideEncryption = serde_json::from_str("\"AES256\"").unwrap();
        assert_eq!(back, ServerSideEncryption::Aes256);
    }
}
