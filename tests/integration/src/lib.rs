//! End-to-end tests for the wirestack codecs.
//!
//! Every test drives an [`S3Client`] (or the query codecs) against a
//! [`ScriptedTransport`] that replays responses taken from the AWS API
//! reference and records the requests it receives, so marshalling and
//! unmarshalling are checked together without a network.
//!
//! Run them with:
//! ```text
//! cargo test -p wirestack-integration
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, Once};

use bytes::Bytes;
use wirestack_s3_http::{HttpTransport, S3Client, S3ClientConfig, TransportError};

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// A request as seen by the transport.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method.
    pub method: http::Method,
    /// Full request URI.
    pub uri: String,
    /// Request headers.
    pub headers: http::HeaderMap,
    /// Request body.
    pub body: Bytes,
}

impl RecordedRequest {
    /// Header value as a string, if present.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Body as UTF-8.
    #[must_use]
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// A transport that answers with queued responses and records requests.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<http::Response<Bytes>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl ScriptedTransport {
    /// Queue a response with a body and no extra headers.
    pub fn respond(&self, status: u16, body: &'static str) {
        self.respond_with(status, &[], body);
    }

    /// Queue a response with headers.
    pub fn respond_with(&self, status: u16, headers: &[(&str, &str)], body: &'static str) {
        let mut builder = http::Response::builder().status(status);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let response = builder
            .body(Bytes::from_static(body.as_bytes()))
            .expect("valid scripted response");
        self.responses.lock().expect("lock").push_back(response);
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("lock").clone()
    }

    /// The most recent request.
    pub fn last_request(&self) -> RecordedRequest {
        self.requests
            .lock()
            .expect("lock")
            .last()
            .cloned()
            .expect("at least one request")
    }
}

#[async_trait::async_trait]
impl HttpTransport for ScriptedTransport {
    async fn send(
        &self,
        request: http::Request<Bytes>,
    ) -> Result<http::Response<Bytes>, TransportError> {
        let (parts, body) = request.into_parts();
        self.requests.lock().expect("lock").push(RecordedRequest {
            method: parts.method,
            uri: parts.uri.to_string(),
            headers: parts.headers,
            body,
        });
        self.responses
            .lock()
            .expect("lock")
            .pop_front()
            .ok_or_else(|| "no scripted response left".into())
    }
}

/// Create a path-style client against a local endpoint.
#[must_use]
pub fn s3_client() -> (S3Client, Arc<ScriptedTransport>) {
    client_for(
        S3ClientConfig::builder()
            .endpoint("http://localhost:4566".into())
            .build(),
    )
}

/// Create a client against the public, virtual-hosted endpoint.
#[must_use]
pub fn virtual_host_client() -> (S3Client, Arc<ScriptedTransport>) {
    client_for(S3ClientConfig::default())
}

fn client_for(config: S3ClientConfig) -> (S3Client, Arc<ScriptedTransport>) {
    init_tracing();
    let transport = Arc::new(ScriptedTransport::default());
    let client = S3Client::new(config, transport.clone()).expect("valid endpoint");
    (client, transport)
}

mod test_bucket;
mod test_cors;
mod test_error;
mod test_list;
mod test_multipart;
mod test_object;
mod test_precondition;
mod test_query;
mod test_transfer;
mod test_versioning;
