//! Content-MD5 integrity checks against the returned ETag.
//!
//! For single-part objects stored with SSE-S3 or no encryption, S3's ETag is
//! the hex MD5 of the object data. Uploads compare it with the client-side
//! digest of the body they sent; downloads compare it with the digest of the
//! body they received. Multipart ETags (`<hex>-<parts>`), SSE-C and SSE-KMS
//! ETags are not content digests and are never checked.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use md5::{Digest, Md5};
use wirestack_s3_model::enums::ServerSideEncryption;

use crate::error::S3ClientError;

/// Direction of the transfer being verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transfer {
    /// Data sent to S3.
    Upload,
    /// Data received from S3.
    Download,
}

impl std::fmt::Display for Transfer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Upload => "upload",
            Self::Download => "download",
        })
    }
}

/// Base64 Content-MD5 of `data`.
#[must_use]
pub fn content_md5(data: &[u8]) -> String {
    BASE64_STANDARD.encode(Md5::digest(data))
}

/// Whether `etag` belongs to an object assembled by multipart upload.
#[must_use]
pub fn is_multipart_etag(etag: &str) -> bool {
    etag.contains('-')
}

/// Whether an object encrypted this way has an ETag that is not its MD5.
#[must_use]
pub fn etag_is_opaque(
    server_side_encryption: Option<&ServerSideEncryption>,
    sse_customer_algorithm: Option<&str>,
) -> bool {
    sse_customer_algorithm.is_some()
        || matches!(
            server_side_encryption,
            Some(ServerSideEncryption::AwsKms | ServerSideEncryption::AwsKmsDsse)
        )
}

/// Compare a base64 MD5 digest with the hex digest carried by `etag`.
///
/// A missing or multipart ETag passes.
///
/// # Errors
///
/// Returns [`S3ClientError::Integrity`] when the digests differ.
pub fn verify_md5(
    transfer: Transfer,
    client_md5: &str,
    etag: Option<&str>,
) -> Result<(), S3ClientError> {
    let Some(etag) = etag else {
        return Ok(());
    };
    let server_hex = etag.trim().trim_matches('"');
    if is_multipart_etag(server_hex) {
        return Ok(());
    }

    let client_hex = BASE64_STANDARD
        .decode(client_md5)
        .map(hex::encode)
        .unwrap_or_default();
    if client_hex.is_empty() || !client_hex.eq_ignore_ascii_case(server_hex) {
        return Err(S3ClientError::Integrity {
            transfer,
            client_md5: client_md5.to_owned(),
            etag: etag.to_owned(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HELLO_MD5: &str = "XUFAKrxLKna5cZ2REBfFkg==";
    const HELLO_ETAG: &str = "\"5d41402abc4b2a76b9719d911017c592\"";

    #[test]
    fn test_should_compute_content_md5() {
        assert_eq!(content_md5(b"hello"), HELLO_MD5);
    }

    #[test]
    fn test_should_accept_matching_etag() {
        assert!(verify_md5(Transfer::Upload, HELLO_MD5, Some(HELLO_ETAG)).is_ok());
        assert!(
            verify_md5(
                Transfer::Download,
                HELLO_MD5,
                Some("5D41402ABC4B2A76B9719D911017C592")
            )
            .is_ok()
        );
    }

    #[test]
    fn test_should_reject_mismatched_etag() {
        let err = verify_md5(
            Transfer::Upload,
            HELLO_MD5,
            Some("\"00000000000000000000000000000000\""),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            S3ClientError::Integrity {
                transfer: Transfer::Upload,
                ..
            }
        ));
        assert!(
            err.to_string()
                .starts_with("Unable to verify integrity of data upload")
        );
    }

    #[test]
    fn test_should_skip_missing_and_multipart_etags() {
        assert!(verify_md5(Transfer::Upload, HELLO_MD5, None).is_ok());
        assert!(
            verify_md5(
                Transfer::Download,
                HELLO_MD5,
                Some("\"3858f62230ac3c915f300c664312c11f-9\"")
            )
            .is_ok()
        );
    }

    #[test]
    fn test_should_reject_undecodable_client_digest() {
        assert!(verify_md5(Transfer::Upload, "not base64!", Some(HELLO_ETAG)).is_err());
    }

    #[test]
    fn test_should_detect_opaque_etags() {
        assert!(etag_is_opaque(Some(&ServerSideEncryption::AwsKms), None));
        assert!(etag_is_opaque(None, Some("AES256")));
        assert!(!etag_is_opaque(Some(&ServerSideEncryption::Aes256), None));
        assert!(!etag_is_opaque(None, None));
    }
}
