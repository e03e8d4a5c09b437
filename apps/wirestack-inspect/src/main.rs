//! wirestack-inspect - decode saved AWS responses with the wirestack codecs.
//!
//! # Usage
//!
//! ```text
//! wirestack-inspect s3 --operation ListObjectsV2 --body listing.xml
//! wirestack-inspect s3 --operation HeadObject --status 200 \
//!     --header 'Content-Length: 434234' --header 'x-amz-meta-author: me'
//! wirestack-inspect query --action AssumeRole --body assume-role.xml
//! wirestack-inspect endpoint --bucket my-bucket --key photos/a.jpg
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `AWS_ENDPOINT_URL_S3` / `AWS_ENDPOINT_URL` | `https://s3.amazonaws.com` | S3 endpoint |
//! | `S3_FORCE_PATH_STYLE` | `false` | Disable virtual-hosted-style addressing |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

mod decode;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bytes::Bytes;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;
use wirestack_s3_http::{S3ClientConfig, S3Endpoint};

/// Decode saved S3 REST-XML and query-protocol responses.
#[derive(Debug, Parser)]
#[command(name = "wirestack-inspect", version)]
struct Cli {
    /// Log level filter, overridden by `RUST_LOG`.
    #[arg(long, env = "LOG_LEVEL", global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Decode an S3 response into the operation's output.
    S3 {
        /// Operation name, e.g. `GetBucketAcl`.
        #[arg(long)]
        operation: String,
        /// File holding the response body; omit for header-only responses.
        #[arg(long)]
        body: Option<PathBuf>,
        /// HTTP status code.
        #[arg(long, default_value_t = 200)]
        status: u16,
        /// Response header as `Name: value`; repeatable.
        #[arg(long = "header")]
        headers: Vec<String>,
    },
    /// Decode a query-protocol (STS, SQS) response.
    Query {
        /// Action name, e.g. `AssumeRole`.
        #[arg(long)]
        action: String,
        /// File holding the response body.
        #[arg(long)]
        body: PathBuf,
        /// HTTP status code.
        #[arg(long, default_value_t = 200)]
        status: u16,
    },
    /// Print the request URI a bucket and key resolve to.
    Endpoint {
        /// Bucket name.
        #[arg(long)]
        bucket: String,
        /// Object key.
        #[arg(long)]
        key: Option<String>,
        /// Endpoint URL, overriding the environment.
        #[arg(long)]
        endpoint: Option<String>,
        /// Force path-style addressing.
        #[arg(long)]
        path_style: bool,
    },
}

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL` config value.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

fn read_body(path: &Path) -> Result<Bytes> {
    let data =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    Ok(Bytes::from(data))
}

fn run(command: Command, config: &S3ClientConfig) -> Result<String> {
    match command {
        Command::S3 {
            operation,
            body,
            status,
            headers,
        } => {
            let body = body.as_deref().map(read_body).transpose()?.unwrap_or_default();
            let headers = headers
                .iter()
                .map(|h| decode::parse_header(h))
                .collect::<Result<Vec<_>>>()?;
            let json = decode::decode_s3(&operation, status, &headers, body)?;
            Ok(serde_json::to_string_pretty(&json)?)
        }
        Command::Query {
            action,
            body,
            status,
        } => {
            let body = read_body(&body)?;
            let json = decode::decode_query(&action, status, &body)?;
            Ok(serde_json::to_string_pretty(&json)?)
        }
        Command::Endpoint {
            bucket,
            key,
            endpoint,
            path_style,
        } => {
            let url = endpoint.as_deref().unwrap_or(&config.endpoint);
            let endpoint = S3Endpoint::parse(url, path_style || config.force_path_style)
                .with_context(|| format!("invalid endpoint: {url}"))?;
            let uri = endpoint.uri(Some(&bucket), key.as_deref(), "")?;
            info!(
                virtual_host = endpoint.uses_virtual_host(&bucket),
                "resolved endpoint"
            );
            Ok(uri.to_string())
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = S3ClientConfig::from_env();
    let log_level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    init_tracing(log_level)?;

    let output = run(cli.command, &config)?;
    println!("{output}");
    Ok(())
}
