//! S3 client configuration.
//!
//! Provides [`S3ClientConfig`]. Values can be loaded from the environment
//! variables the AWS CLI and SDKs understand.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// S3 client configuration.
///
/// # Examples
///
/// ```
/// use wirestack_s3_http::config::S3ClientConfig;
///
/// let config = S3ClientConfig::default();
/// assert_eq!(config.endpoint, "https://s3.amazonaws.com");
/// assert!(!config.force_path_style);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct S3ClientConfig {
    /// Base endpoint URL, scheme included.
    #[builder(default = String::from("https://s3.amazonaws.com"))]
    pub endpoint: String,

    /// Region requests are addressed to.
    #[builder(default = String::from("us-east-1"))]
    pub region: String,

    /// Always address buckets in the path (`/bucket/key`), never in the host.
    #[builder(default = false)]
    pub force_path_style: bool,

    /// Log level filter string (e.g. `"info"`, `"debug"`).
    #[builder(default = String::from("info"))]
    pub log_level: String,
}

impl Default for S3ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: String::from("https://s3.amazonaws.com"),
            region: String::from("us-east-1"),
            force_path_style: false,
            log_level: String::from("info"),
        }
    }
}

impl S3ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `AWS_ENDPOINT_URL_S3`, then `AWS_ENDPOINT_URL` | `https://s3.amazonaws.com` |
    /// | `AWS_REGION`, then `AWS_DEFAULT_REGION` | `us-east-1` |
    /// | `S3_FORCE_PATH_STYLE` | `false` |
    /// | `LOG_LEVEL` | `info` |
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(v) = lookup("AWS_ENDPOINT_URL_S3").or_else(|| lookup("AWS_ENDPOINT_URL")) {
            config.endpoint = v;
        }
        if let Some(v) = lookup("AWS_REGION").or_else(|| lookup("AWS_DEFAULT_REGION")) {
            config.region = v;
        }
        if let Some(v) = lookup("S3_FORCE_PATH_STYLE") {
            config.force_path_style = parse_bool(&v);
        }
        if let Some(v) = lookup("LOG_LEVEL") {
            config.log_level = v;
        }

        config
    }
}

/// Parse a string as a boolean, accepting `"1"` and `"true"` (case-insensitive).
fn parse_bool(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}
