//! Endpoint resolution: virtual-hosted-style and path-style addressing.
//!
//! Virtual-hosted-style puts the bucket in the host
//! (`mybucket.s3.amazonaws.com/key`); path-style puts it in the path
//! (`s3.amazonaws.com/mybucket/key`). Virtual hosting is used whenever it is
//! allowed and the bucket name can be a DNS label.

use std::net::{IpAddr, Ipv4Addr};

use http::Uri;
use http::uri::{Authority, Scheme};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::error::MarshallError;

/// Characters left unescaped in URI components (RFC 3986 unreserved).
pub(crate) const URI_UNRESERVED: &AsciiSet =
    &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Unreserved characters plus `/`, for object keys in paths.
pub(crate) const URI_PATH: &AsciiSet = &URI_UNRESERVED.remove(b'/');

/// A parsed S3 endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct S3Endpoint {
    scheme: Scheme,
    authority: Authority,
    force_path_style: bool,
}

impl S3Endpoint {
    /// Parse an endpoint URL such as `https://s3.amazonaws.com` or
    /// `http://localhost:4566`.
    ///
    /// # Errors
    ///
    /// Returns [`MarshallError::Http`] if the URL does not parse and
    /// [`MarshallError::InvalidEndpoint`] if it is not absolute.
    pub fn parse(endpoint: &str, force_path_style: bool) -> Result<Self, MarshallError> {
        let uri: Uri = endpoint.parse().map_err(http::Error::from)?;
        let parts = uri.into_parts();
        match (parts.scheme, parts.authority) {
            (Some(scheme), Some(authority)) => Ok(Self {
                scheme,
                authority,
                force_path_style,
            }),
            _ => Err(MarshallError::InvalidEndpoint(endpoint.to_owned())),
        }
    }

    /// Whether requests use TLS.
    #[must_use]
    pub fn is_tls(&self) -> bool {
        self.scheme == Scheme::HTTPS
    }

    /// Whether `bucket` is addressed in the host name.
    #[must_use]
    pub fn uses_virtual_host(&self, bucket: &str) -> bool {
        !self.force_path_style
            && !self.host_is_ip()
            && self.authority.host() != "localhost"
            && is_dns_compatible(bucket, self.is_tls())
    }

    /// Whether the endpoint host is an IPv4 or IPv6 literal.
    fn host_is_ip(&self) -> bool {
        let host = self.authority.host();
        host.strip_prefix('[')
            .and_then(|h| h.strip_suffix(']'))
            .unwrap_or(host)
            .parse::<IpAddr>()
            .is_ok()
    }

    /// Build the request URI for a bucket, key and pre-encoded query string.
    ///
    /// # Errors
    ///
    /// Returns [`MarshallError::Http`] if the pieces do not form a valid URI.
    pub fn uri(
        &self,
        bucket: Option<&str>,
        key: Option<&str>,
        query: &str,
    ) -> Result<Uri, MarshallError> {
        let key = key.map(|k| utf8_percent_encode(k, URI_PATH).to_string());

        let (host, mut path) = match bucket {
            Some(bucket) if self.uses_virtual_host(bucket) => {
                (format!("{bucket}.{}", self.authority), String::from("/"))
            }
            Some(bucket) => (
                self.authority.to_string(),
                format!("/{}/", utf8_percent_encode(bucket, URI_UNRESERVED)),
            ),
            None => (self.authority.to_string(), String::from("/")),
        };
        match key {
            Some(key) => path.push_str(&key),
            None if bucket.is_some() && path.len() > 1 => {
                path.pop();
            }
            None => {}
        }
        if !query.is_empty() {
            path.push('?');
            path.push_str(query);
        }

        let uri = Uri::builder()
            .scheme(self.scheme.clone())
            .authority(host)
            .path_and_query(path)
            .build()?;
        Ok(uri)
    }
}

/// Whether a bucket name can be used as a DNS label under the S3 domain.
///
/// Lowercase letters, digits, `.` and `-`; 3 to 63 characters; starts and
/// ends with a letter or digit; no `..`, `.-` or `-.`; not an IPv4 address.
/// Under TLS a dotted name would not match the wildcard certificate.
#[must_use]
pub fn is_dns_compatible(bucket: &str, tls: bool) -> bool {
    let bytes = bucket.as_bytes();
    if !(3..=63).contains(&bytes.len()) {
        return false;
    }
    let alnum = |b: u8| b.is_ascii_lowercase() || b.is_ascii_digit();
    if !alnum(bytes[0]) || !alnum(bytes[bytes.len() - 1]) {
        return false;
    }
    if !bytes.iter().all(|&b| alnum(b) || b == b'.' || b == b'-') {
        return false;
    }
    if bucket.contains("..") || bucket.contains(".-") || bucket.contains("-.") {
        return false;
    }
    if bucket.parse::<Ipv4Addr>().is_ok() {
        return false;
    }
    !(tls && bucket.contains('.'))
}
