//! A thin S3 client over an injected HTTP transport.
//!
//! [`S3Client`] marshals an input, resolves the endpoint URI, hands the
//! request to an [`HttpTransport`] and unmarshals the response. Signing,
//! retries and connection management belong to the transport.

use std::fmt::Debug;
use std::sync::Arc;

use bytes::Bytes;
use tracing::debug;
use wirestack_s3_model::operations::S3Operation;

use crate::config::S3ClientConfig;
use crate::endpoint::S3Endpoint;
use crate::error::{MarshallError, S3ClientError, TransportError};
use crate::integrity::{Transfer, content_md5, etag_is_opaque, verify_md5};
use crate::marshall::IntoS3Request;
use crate::unmarshall::{FromS3Response, from_http_response};

/// Sends a fully built HTTP request and returns the buffered response.
///
/// The trait uses `#[async_trait]` so that it can be held as
/// `Arc<dyn HttpTransport>`.
#[async_trait::async_trait]
pub trait HttpTransport: Send + Sync + Debug {
    /// Send `request`.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] when the request could not be delivered.
    async fn send(
        &self,
        request: http::Request<Bytes>,
    ) -> Result<http::Response<Bytes>, TransportError>;
}

/// Pairs an input type with its output type and operation.
pub trait S3Request: IntoS3Request + Send + Sync {
    /// The output produced by the operation.
    type Output: FromS3Response + Send;

    /// The operation the input belongs to.
    const OPERATION: S3Operation;
}

macro_rules! s3_requests {
    ($($op:ident: $input:ident => $output:ty),+ $(,)?) => {
        $(
            impl S3Request for $input {
                type Output = $output;
                const OPERATION: S3Operation = S3Operation::$op;
            }
        )+

        /// Unmarshal `response` as the output of `operation` and render it as
        /// JSON. Payload members are left out.
        ///
        /// # Errors
        ///
        /// Returns [`S3ClientError`] on service errors or unreadable bodies.
        pub fn output_to_json(
            operation: S3Operation,
            response: http::Response<Bytes>,
        ) -> Result<serde_json::Value, S3ClientError> {
            match operation {
                $(
                    S3Operation::$op => {
                        let output: $output = from_http_response(operation, response)?;
                        serde_json::to_value(output)
                            .map_err(|e| S3ClientError::InvalidResponse(e.to_string()))
                    }
                )+
            }
        }
    };
}

#[allow(clippy::wildcard_imports)]
use wirestack_s3_model::input::*;
#[allow(clippy::wildcard_imports)]
use wirestack_s3_model::output::*;

s3_requests! {
    AbortMultipartUpload: AbortMultipartUploadInput => AbortMultipartUploadOutput,
    CompleteMultipartUpload: CompleteMultipartUploadInput => CompleteMultipartUploadOutput,
    CopyObject: CopyObjectInput => CopyObjectOutput,
    CreateBucket: CreateBucketInput => CreateBucketOutput,
    CreateMultipartUpload: CreateMultipartUploadInput => CreateMultipartUploadOutput,
    DeleteBucket: DeleteBucketInput => (),
    DeleteBucketCors: DeleteBucketCorsInput => (),
    DeleteBucketEncryption: DeleteBucketEncryptionInput => (),
    DeleteBucketInventoryConfiguration: DeleteBucketInventoryConfigurationInput => (),
    DeleteBucketLifecycle: DeleteBucketLifecycleInput => (),
    DeleteBucketMetricsConfiguration: DeleteBucketMetricsConfigurationInput => (),
    DeleteBucketOwnershipControls: DeleteBucketOwnershipControlsInput => (),
    DeleteBucketPolicy: DeleteBucketPolicyInput => (),
    DeleteBucketReplication: DeleteBucketReplicationInput => (),
    DeleteBucketTagging: DeleteBucketTaggingInput => (),
    DeleteBucketWebsite: DeleteBucketWebsiteInput => (),
    DeleteObject: DeleteObjectInput => DeleteObjectOutput,
    DeleteObjectTagging: DeleteObjectTaggingInput => DeleteObjectTaggingOutput,
    DeleteObjects: DeleteObjectsInput => DeleteObjectsOutput,
    DeletePublicAccessBlock: DeletePublicAccessBlockInput => (),
    GetBucketAccelerateConfiguration: GetBucketAccelerateConfigurationInput => GetBucketAccelerateConfigurationOutput,
    GetBucketAcl: GetBucketAclInput => GetBucketAclOutput,
    GetBucketCors: GetBucketCorsInput => GetBucketCorsOutput,
    GetBucketEncryption: GetBucketEncryptionInput => GetBucketEncryptionOutput,
    GetBucketInventoryConfiguration: GetBucketInventoryConfigurationInput => GetBucketInventoryConfigurationOutput,
    GetBucketLifecycleConfiguration: GetBucketLifecycleConfigurationInput => GetBucketLifecycleConfigurationOutput,
    GetBucketLocation: GetBucketLocationInput => GetBucketLocationOutput,
    GetBucketLogging: GetBucketLoggingInput => GetBucketLoggingOutput,
    GetBucketMetricsConfiguration: GetBucketMetricsConfigurationInput => GetBucketMetricsConfigurationOutput,
    GetBucketNotificationConfiguration: GetBucketNotificationConfigurationInput => GetBucketNotificationConfigurationOutput,
    GetBucketOwnershipControls: GetBucketOwnershipControlsInput => GetBucketOwnershipControlsOutput,
    GetBucketPolicy: GetBucketPolicyInput => GetBucketPolicyOutput,
    GetBucketPolicyStatus: GetBucketPolicyStatusInput => GetBucketPolicyStatusOutput,
    GetBucketReplication: GetBucketReplicationInput => GetBucketReplicationOutput,
    GetBucketRequestPayment: GetBucketRequestPaymentInput => GetBucketRequestPaymentOutput,
    GetBucketTagging: GetBucketTaggingInput => GetBucketTaggingOutput,
    GetBucketVersioning: GetBucketVersioningInput => GetBucketVersioningOutput,
    GetBucketWebsite: GetBucketWebsiteInput => GetBucketWebsiteOutput,
    GetObject: GetObjectInput => GetObjectOutput,
    GetObjectAcl: GetObjectAclInput => GetObjectAclOutput,
    GetObjectLegalHold: GetObjectLegalHoldInput => GetObjectLegalHoldOutput,
    GetObjectLockConfiguration: GetObjectLockConfigurationInput => GetObjectLockConfigurationOutput,
    GetObjectRetention: GetObjectRetentionInput => GetObjectRetentionOutput,
    GetObjectTagging: GetObjectTaggingInput => GetObjectTaggingOutput,
    GetPublicAccessBlock: GetPublicAccessBlockInput => GetPublicAccessBlockOutput,
    HeadBucket: HeadBucketInput => HeadBucketOutput,
    HeadObject: HeadObjectInput => HeadObjectOutput,
    ListBucketInventoryConfigurations: ListBucketInventoryConfigurationsInput => ListBucketInventoryConfigurationsOutput,
    ListBucketMetricsConfigurations: ListBucketMetricsConfigurationsInput => ListBucketMetricsConfigurationsOutput,
    ListBuckets: ListBucketsInput => ListBucketsOutput,
    ListMultipartUploads: ListMultipartUploadsInput => ListMultipartUploadsOutput,
    ListObjectVersions: ListObjectVersionsInput => ListObjectVersionsOutput,
    ListObjects: ListObjectsInput => ListObjectsOutput,
    ListObjectsV2: ListObjectsV2Input => ListObjectsV2Output,
    ListParts: ListPartsInput => ListPartsOutput,
    PutBucketAccelerateConfiguration: PutBucketAccelerateConfigurationInput => (),
    PutBucketAcl: PutBucketAclInput => (),
    PutBucketCors: PutBucketCorsInput => (),
    PutBucketEncryption: PutBucketEncryptionInput => (),
    PutBucketInventoryConfiguration: PutBucketInventoryConfigurationInput => (),
    PutBucketLifecycleConfiguration: PutBucketLifecycleConfigurationInput => (),
    PutBucketLogging: PutBucketLoggingInput => (),
    PutBucketMetricsConfiguration: PutBucketMetricsConfigurationInput => (),
    PutBucketNotificationConfiguration: PutBucketNotificationConfigurationInput => (),
    PutBucketOwnershipControls: PutBucketOwnershipControlsInput => (),
    PutBucketPolicy: PutBucketPolicyInput => (),
    PutBucketReplication: PutBucketReplicationInput => (),
    PutBucketRequestPayment: PutBucketRequestPaymentInput => (),
    PutBucketTagging: PutBucketTaggingInput => (),
    PutBucketVersioning: PutBucketVersioningInput => (),
    PutBucketWebsite: PutBucketWebsiteInput => (),
    PutObject: PutObjectInput => PutObjectOutput,
    PutObjectAcl: PutObjectAclInput => PutObjectAclOutput,
    PutObjectLegalHold: PutObjectLegalHoldInput => PutObjectLegalHoldOutput,
    PutObjectLockConfiguration: PutObjectLockConfigurationInput => PutObjectLockConfigurationOutput,
    PutObjectRetention: PutObjectRetentionInput => PutObjectRetentionOutput,
    PutObjectTagging: PutObjectTaggingInput => PutObjectTaggingOutput,
    PutPublicAccessBlock: PutPublicAccessBlockInput => (),
    RestoreObject: RestoreObjectInput => RestoreObjectOutput,
    UploadPart: UploadPartInput => UploadPartOutput,
    UploadPartCopy: UploadPartCopyInput => UploadPartCopyOutput,
}

/// S3 client: codecs plus endpoint resolution in front of a transport.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use bytes::Bytes;
/// use wirestack_s3_http::{HttpTransport, S3Client, S3ClientConfig, TransportError};
/// use wirestack_s3_model::input::HeadBucketInput;
///
/// #[derive(Debug)]
/// struct AlwaysOk;
///
/// #[async_trait::async_trait]
/// impl HttpTransport for AlwaysOk {
///     async fn send(
///         &self,
///         _request: http::Request<Bytes>,
///     ) -> Result<http::Response<Bytes>, TransportError> {
///         Ok(http::Response::builder()
///             .header("x-amz-bucket-region", "eu-west-1")
///             .body(Bytes::new())?)
///     }
/// }
///
/// # tokio_test::block_on(async {
/// let client = S3Client::new(S3ClientConfig::default(), Arc::new(AlwaysOk)).unwrap();
/// let input = HeadBucketInput {
///     bucket: "my-bucket".into(),
///     expected_bucket_owner: None,
/// };
/// let output = client.send(&input).await.unwrap();
/// assert_eq!(output.bucket_region.as_deref(), Some("eu-west-1"));
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct S3Client {
    config: S3ClientConfig,
    endpoint: S3Endpoint,
    transport: Arc<dyn HttpTransport>,
}

impl S3Client {
    /// Create a client for `config` that sends requests through `transport`.
    ///
    /// # Errors
    ///
    /// Returns [`MarshallError`] if the configured endpoint is not an
    /// absolute URL.
    pub fn new(
        config: S3ClientConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> Result<Self, MarshallError> {
        let endpoint = S3Endpoint::parse(&config.endpoint, config.force_path_style)?;
        Ok(Self {
            config,
            endpoint,
            transport,
        })
    }

    /// Returns the client configuration.
    #[must_use]
    pub fn config(&self) -> &S3ClientConfig {
        &self.config
    }

    /// Returns the resolved endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &S3Endpoint {
        &self.endpoint
    }

    /// Send `input` and unmarshal the operation's output.
    ///
    /// # Errors
    ///
    /// Returns [`S3ClientError`] if marshalling, transport or unmarshalling
    /// fails, or S3 answers with an error.
    pub async fn send<R: S3Request>(&self, input: &R) -> Result<R::Output, S3ClientError> {
        let request = input.into_s3_request()?.into_http(&self.endpoint)?;
        debug!(
            operation = %R::OPERATION,
            method = %request.method(),
            uri = %request.uri(),
            "sending S3 request"
        );
        let response = self
            .transport
            .send(request)
            .await
            .map_err(S3ClientError::Transport)?;
        from_http_response(R::OPERATION, response)
    }

    /// Upload an object, then check the returned ETag against the MD5 of the
    /// body (or the caller's `Content-MD5`).
    ///
    /// The check is skipped for SSE-C and SSE-KMS uploads, whose ETags are
    /// not content digests.
    ///
    /// # Errors
    ///
    /// Returns [`S3ClientError::Integrity`] on a digest mismatch, or any
    /// error of [`S3Client::send`].
    pub async fn put_object(
        &self,
        input: &PutObjectInput,
    ) -> Result<PutObjectOutput, S3ClientError> {
        let client_md5 = input
            .content_md5
            .clone()
            .unwrap_or_else(|| content_md5(&input.body.data));
        let output = self.send(input).await?;
        let opaque = etag_is_opaque(
            input.server_side_encryption.as_ref(),
            input.sse_customer_algorithm.as_deref(),
        ) || etag_is_opaque(
            output.server_side_encryption.as_ref(),
            output.sse_customer_algorithm.as_deref(),
        );
        if !opaque {
            verify_md5(Transfer::Upload, &client_md5, output.e_tag.as_deref())?;
        }
        Ok(output)
    }

    /// Upload one part, then check the returned ETag against the MD5 of the
    /// part data.
    ///
    /// # Errors
    ///
    /// Returns [`S3ClientError::Integrity`] on a digest mismatch, or any
    /// error of [`S3Client::send`].
    pub async fn upload_part(
        &self,
        input: &UploadPartInput,
    ) -> Result<UploadPartOutput, S3ClientError> {
        let client_md5 = input
            .content_md5
            .clone()
            .unwrap_or_else(|| content_md5(&input.body.data));
        let output = self.send(input).await?;
        let opaque = etag_is_opaque(None, input.sse_customer_algorithm.as_deref())
            || etag_is_opaque(
                output.server_side_encryption.as_ref(),
                output.sse_customer_algorithm.as_deref(),
            );
        if !opaque {
            verify_md5(Transfer::Upload, &client_md5, output.e_tag.as_deref())?;
        }
        Ok(output)
    }

    /// Download an object and check the MD5 of the body against a
    /// single-part ETag.
    ///
    /// Ranged and part downloads, SSE-C and SSE-KMS objects are not checked.
    ///
    /// # Errors
    ///
    /// Returns [`S3ClientError::Integrity`] on a digest mismatch, or any
    /// error of [`S3Client::send`].
    pub async fn get_object(
        &self,
        input: &GetObjectInput,
    ) -> Result<GetObjectOutput, S3ClientError> {
        let output = self.send(input).await?;
        let partial = input.range.is_some()
            || input.part_number.is_some()
            || output.content_range.is_some();
        let opaque = etag_is_opaque(None, input.sse_customer_algorithm.as_deref())
            || etag_is_opaque(
                output.server_side_encryption.as_ref(),
                output.sse_customer_algorithm.as_deref(),
            );
        if !partial && !opaque {
            verify_md5(
                Transfer::Download,
                &content_md5(&output.body.data),
                output.e_tag.as_deref(),
            )?;
        }
        Ok(output)
    }

    /// Whether `bucket` exists.
    ///
    /// A redirect (301) or access denied (403) still proves the bucket exists;
    /// 404 means it does not.
    ///
    /// # Errors
    ///
    /// Returns any other error of [`S3Client::send`].
    pub async fn does_bucket_exist(&self, bucket: &str) -> Result<bool, S3ClientError> {
        let input = HeadBucketInput {
            bucket: bucket.to_owned(),
            expected_bucket_owner: None,
        };
        match self.send(&input).await {
            Ok(_) => Ok(true),
            Err(S3ClientError::Service(e)) => match e.status_code.as_u16() {
                301 | 403 => Ok(true),
                404 => Ok(false),
                _ => Err(S3ClientError::Service(e)),
            },
            Err(e) => Err(e),
        }
    }

    /// Whether `key` exists in `bucket`. Only 404 means it does not.
    ///
    /// # Errors
    ///
    /// Returns any other error of [`S3Client::send`].
    pub async fn does_object_exist(&self, bucket: &str, key: &str) -> Result<bool, S3ClientError> {
        let input = HeadObjectInput {
            bucket: bucket.to_owned(),
            key: key.to_owned(),
            ..Default::default()
        };
        match self.send(&input).await {
            Ok(_) => Ok(true),
            Err(S3ClientError::Service(e)) if e.status_code.as_u16() == 404 => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Fetch the page of ListObjects that follows `previous`.
    ///
    /// When `previous` is not truncated no request is sent; the returned
    /// empty listing carries the bucket, prefix, delimiter, page size and
    /// next marker forward. A truncated page without `NextMarker` continues
    /// after its last key or common prefix.
    ///
    /// # Errors
    ///
    /// Returns [`MarshallError::MissingParameter`] when `previous` has no
    /// bucket name, or any error of [`S3Client::send`].
    pub async fn list_next_batch_of_objects(
        &self,
        previous: &ListObjectsOutput,
    ) -> Result<ListObjectsOutput, S3ClientError> {
        if previous.is_truncated != Some(true) {
            return Ok(ListObjectsOutput {
                name: previous.name.clone(),
                prefix: previous.prefix.clone(),
                marker: previous.next_marker.clone(),
                max_keys: previous.max_keys,
                delimiter: previous.delimiter.clone(),
                is_truncated: Some(false),
                encoding_type: previous.encoding_type.clone(),
                ..Default::default()
            });
        }

        let marker = previous.next_marker.clone().or_else(|| {
            let last_key = previous.contents.iter().filter_map(|o| o.key.as_ref()).max();
            let last_prefix = previous
                .common_prefixes
                .iter()
                .filter_map(|p| p.prefix.as_ref())
                .max();
            last_key.max(last_prefix).cloned()
        });
        let input = ListObjectsInput {
            bucket: listing_bucket(previous.name.as_deref())?,
            delimiter: previous.delimiter.clone(),
            encoding_type: previous.encoding_type.clone(),
            marker,
            max_keys: previous.max_keys,
            prefix: previous.prefix.clone(),
            ..Default::default()
        };
        self.send(&input).await
    }

    /// Fetch the page of ListObjectVersions that follows `previous`.
    ///
    /// When `previous` is not truncated no request is sent; the returned
    /// empty listing carries the bucket, prefix, delimiter, page size and
    /// next key and version-id markers forward.
    ///
    /// # Errors
    ///
    /// Returns [`MarshallError::MissingParameter`] when `previous` has no
    /// bucket name, or any error of [`S3Client::send`].
    pub async fn list_next_batch_of_versions(
        &self,
        previous: &ListObjectVersionsOutput,
    ) -> Result<ListObjectVersionsOutput, S3ClientError> {
        if previous.is_truncated != Some(true) {
            return Ok(ListObjectVersionsOutput {
                name: previous.name.clone(),
                prefix: previous.prefix.clone(),
                key_marker: previous.next_key_marker.clone(),
                version_id_marker: previous.next_version_id_marker.clone(),
                max_keys: previous.max_keys,
                delimiter: previous.delimiter.clone(),
                is_truncated: Some(false),
                encoding_type: previous.encoding_type.clone(),
                ..Default::default()
            });
        }

        let input = ListObjectVersionsInput {
            bucket: listing_bucket(previous.name.as_deref())?,
            delimiter: previous.delimiter.clone(),
            encoding_type: previous.encoding_type.clone(),
            key_marker: previous.next_key_marker.clone(),
            max_keys: previous.max_keys,
            prefix: previous.prefix.clone(),
            version_id_marker: previous.next_version_id_marker.clone(),
            ..Default::default()
        };
        self.send(&input).await
    }
}

fn listing_bucket(name: Option<&str>) -> Result<String, MarshallError> {
    name.filter(|n| !n.is_empty())
        .map(ToOwned::to_owned)
        .ok_or(MarshallError::MissingParameter("Bucket"))
}
