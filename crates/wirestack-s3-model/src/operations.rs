//! Catalogue of supported S3 operations.

use http::Method;

macro_rules! s3_operations {
    ($($(#[$meta:meta])* $name:ident => $method:ident),+ $(,)?) => {
        /// All supported S3 operations.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum S3Operation {
            $(
                $(#[$meta])*
                #[doc = concat!("The ", stringify!($name), " operation.")]
                $name,
            )+
        }

        impl S3Operation {
            /// Every operation, in declaration order.
            pub const ALL: &'static [S3Operation] = &[$(Self::$name),+];

            /// Returns the AWS operation name.
            #[must_use]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$name => stringify!($name),)+
                }
            }

            /// Parse an AWS operation name.
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $(stringify!($name) => Some(Self::$name),)+
                    _ => None,
                }
            }

            /// HTTP method the operation is sent with.
            #[must_use]
            pub fn method(&self) -> Method {
                match self {
                    $(Self::$name => Method::$method,)+
                }
            }
        }
    };
}

s3_operations! {
    // Buckets
    ListBuckets => GET,
    CreateBucket => PUT,
    DeleteBucket => DELETE,
    HeadBucket => HEAD,
    GetBucketLocation => GET,
    GetBucketVersioning => GET,
    PutBucketVersioning => PUT,
    GetBucketEncryption => GET,
    PutBucketEncryption => PUT,
    DeleteBucketEncryption => DELETE,
    GetBucketCors => GET,
    PutBucketCors => PUT,
    DeleteBucketCors => DELETE,
    GetBucketLifecycleConfiguration => GET,
    PutBucketLifecycleConfiguration => PUT,
    DeleteBucketLifecycle => DELETE,
    GetBucketPolicy => GET,
    PutBucketPolicy => PUT,
    DeleteBucketPolicy => DELETE,
    GetBucketPolicyStatus => GET,
    GetBucketTagging => GET,
    PutBucketTagging => PUT,
    DeleteBucketTagging => DELETE,
    GetBucketNotificationConfiguration => GET,
    PutBucketNotificationConfiguration => PUT,
    GetBucketLogging => GET,
    PutBucketLogging => PUT,
    GetPublicAccessBlock => GET,
    PutPublicAccessBlock => PUT,
    DeletePublicAccessBlock => DELETE,
    GetBucketOwnershipControls => GET,
    PutBucketOwnershipControls => PUT,
    DeleteBucketOwnershipControls => DELETE,
    GetObjectLockConfiguration => GET,
    PutObjectLockConfiguration => PUT,
    GetBucketAccelerateConfiguration => GET,
    PutBucketAccelerateConfiguration => PUT,
    GetBucketRequestPayment => GET,
    PutBucketRequestPayment => PUT,
    GetBucketWebsite => GET,
    PutBucketWebsite => PUT,
    DeleteBucketWebsite => DELETE,
    GetBucketAcl => GET,
    PutBucketAcl => PUT,
    GetBucketReplication => GET,
    PutBucketReplication => PUT,
    DeleteBucketReplication => DELETE,
    GetBucketInventoryConfiguration => GET,
    PutBucketInventoryConfiguration => PUT,
    DeleteBucketInventoryConfiguration => DELETE,
    ListBucketInventoryConfigurations => GET,
    GetBucketMetricsConfiguration => GET,
    PutBucketMetricsConfiguration => PUT,
    DeleteBucketMetricsConfiguration => DELETE,
    ListBucketMetricsConfigurations => GET,
    // Objects
    PutObject => PUT,
    GetObject => GET,
    HeadObject => HEAD,
    DeleteObject => DELETE,
    DeleteObjects => POST,
    CopyObject => PUT,
    RestoreObject => POST,
    GetObjectTagging => GET,
    PutObjectTagging => PUT,
    DeleteObjectTagging => DELETE,
    GetObjectAcl => GET,
    PutObjectAcl => PUT,
    GetObjectRetention => GET,
    PutObjectRetention => PUT,
    GetObjectLegalHold => GET,
    PutObjectLegalHold => PUT,
    // Multipart uploads
    CreateMultipartUpload => POST,
    UploadPart => PUT,
    UploadPartCopy => PUT,
    CompleteMultipartUpload => POST,
    AbortMultipartUpload => DELETE,
    ListParts => GET,
    ListMultipartUploads => GET,
    // Listing
    ListObjects => GET,
    ListObjectsV2 => GET,
    ListObjectVersions => GET,
}

impl S3Operation {
    /// Whether S3 rejects the operation's XML body without a `Content-MD5`
    /// header.
    #[must_use]
    pub fn requires_content_md5(&self) -> bool {
        matches!(
            self,
            Self::DeleteObjects
                | Self::PutBucketLifecycleConfiguration
                | Self::PutBucketCors
                | Self::PutBucketTagging
                | Self::PutBucketReplication
                | Self::PutObjectLockConfiguration
                | Self::PutBucketEncryption
                | Self::PutPublicAccessBlock
                | Self::PutBucketOwnershipControls
                | Self::PutObjectRetention
                | Self::PutObjectLegalHold
                | Self::PutBucketAcl
                | Self::PutObjectAcl
        )
    }
}

impl std::fmt::Display for S3Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
