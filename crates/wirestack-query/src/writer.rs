//! Query-protocol parameter encoding.
//!
//! A query-protocol request is a flat list of `key=value` pairs sent as an
//! `application/x-www-form-urlencoded` POST body. Every request starts with
//! `Action` and `Version`; nested members are flattened into dotted keys:
//!
//! | Shape | Key |
//! |-------|-----|
//! | structure member | `Parent.Child` |
//! | wrapped list | `Name.member.1`, `Name.member.2` |
//! | flattened list | `Name.1`, `Name.2` |
//! | map | `Name.entry.1.key` / `Name.entry.1.value` |
//! | flattened map (SQS) | `Attribute.1.Name` / `Attribute.1.Value` |

use std::collections::HashMap;
use std::fmt::Display;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use http::header::{CONTENT_LENGTH, CONTENT_TYPE, HeaderValue};
use http::{Method, Uri};
use tracing::debug;
use wirestack_xml::time::format_iso8601;

use crate::error::QueryError;

/// Content type of query-protocol request bodies.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=utf-8";

/// A value that can be written under a query key.
///
/// Scalars write one parameter; structures write one parameter per member
/// under `key.Member`.
pub trait QueryValue {
    /// Write `self` under `key`.
    fn write_query(&self, writer: &mut QueryWriter, key: &str);
}

/// A request shape that can be encoded as query-protocol parameters.
pub trait QueryMarshall {
    /// Encode the request.
    fn marshall(&self) -> QueryRequest;
}

/// How a list's members are keyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStyle {
    /// `Name.<member>.N`.
    Wrapped(&'static str),
    /// `Name.N`.
    Flattened,
}

impl ListStyle {
    /// The usual wrapped list with `member` elements.
    pub const MEMBER: Self = Self::Wrapped("member");
}

/// How a map's entries are keyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapStyle {
    /// Entry segment, or `None` for flattened maps.
    pub entry: Option<&'static str>,
    /// Name of the key member.
    pub key_name: &'static str,
    /// Name of the value member.
    pub value_name: &'static str,
}

impl MapStyle {
    /// `Name.entry.N.key` / `Name.entry.N.value`.
    pub const DEFAULT: Self = Self {
        entry: Some("entry"),
        key_name: "key",
        value_name: "value",
    };

    /// `Name.N.Name` / `Name.N.Value`, as SQS attribute maps are sent.
    pub const FLATTENED_NAME_VALUE: Self = Self {
        entry: None,
        key_name: "Name",
        value_name: "Value",
    };
}

/// Accumulates the parameters of one query-protocol request.
#[derive(Debug, Clone)]
pub struct QueryWriter {
    action: &'static str,
    params: Vec<(String, String)>,
}

impl QueryWriter {
    /// Start a request with the `Action` and `Version` pair.
    #[must_use]
    pub fn new(action: &'static str, version: &'static str) -> Self {
        Self {
            action,
            params: vec![
                ("Action".to_owned(), action.to_owned()),
                ("Version".to_owned(), version.to_owned()),
            ],
        }
    }

    /// Write a string parameter when present.
    pub fn string(&mut self, key: &str, value: Option<&str>) {
        if let Some(v) = value {
            self.params.push((key.to_owned(), v.to_owned()));
        }
    }

    /// Write a number or boolean parameter when present.
    pub fn display<T: Display>(&mut self, key: &str, value: Option<T>) {
        if let Some(v) = value {
            self.params.push((key.to_owned(), v.to_string()));
        }
    }

    /// Write an ISO-8601 timestamp parameter when present.
    pub fn timestamp(&mut self, key: &str, value: Option<&DateTime<Utc>>) {
        if let Some(v) = value {
            self.params.push((key.to_owned(), format_iso8601(v)));
        }
    }

    /// Write any [`QueryValue`] when present.
    pub fn value<T: QueryValue + ?Sized>(&mut self, key: &str, value: Option<&T>) {
        if let Some(v) = value {
            v.write_query(self, key);
        }
    }

    /// Write a list with 1-based member indices; an empty list writes nothing.
    pub fn list<T: QueryValue>(&mut self, key: &str, style: ListStyle, items: &[T]) {
        for (i, item) in items.iter().enumerate() {
            let item_key = match style {
                ListStyle::Wrapped(member) => format!("{key}.{member}.{}", i + 1),
                ListStyle::Flattened => format!("{key}.{}", i + 1),
            };
            item.write_query(self, &item_key);
        }
    }

    /// Write a map with 1-based entry indices, in key order.
    pub fn map<V: QueryValue>(&mut self, key: &str, style: MapStyle, map: &HashMap<String, V>) {
        let mut entries: Vec<_> = map.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        for (i, (k, v)) in entries.into_iter().enumerate() {
            let entry_key = match style.entry {
                Some(entry) => format!("{key}.{entry}.{}", i + 1),
                None => format!("{key}.{}", i + 1),
            };
            self.params
                .push((format!("{entry_key}.{}", style.key_name), k.clone()));
            v.write_query(self, &format!("{entry_key}.{}", style.value_name));
        }
    }

    /// Finish the request.
    #[must_use]
    pub fn finish(self) -> QueryRequest {
        debug!(
            action = self.action,
            params = self.params.len(),
            "marshalled query request"
        );
        QueryRequest {
            action: self.action,
            params: self.params,
        }
    }
}

impl QueryValue for str {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.string(key, Some(self));
    }
}

impl QueryValue for String {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.string(key, Some(self));
    }
}

impl QueryValue for i32 {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.display(key, Some(self));
    }
}

impl QueryValue for i64 {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.display(key, Some(self));
    }
}

impl QueryValue for bool {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.display(key, Some(self));
    }
}

impl QueryValue for DateTime<Utc> {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.timestamp(key, Some(self));
    }
}

impl QueryValue for Bytes {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.string(key, Some(&BASE64_STANDARD.encode(self)));
    }
}

/// An encoded query-protocol request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    /// The `Action` parameter.
    pub action: &'static str,
    /// Parameters in encoding order, `Action` and `Version` first.
    pub params: Vec<(String, String)>,
}

impl QueryRequest {
    /// Look up a parameter value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Render the parameters as a form-urlencoded body.
    #[must_use]
    pub fn body(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&self.params)
            .finish()
    }

    /// Build the `POST /` request for `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Http`] if the endpoint is not a valid URI.
    pub fn into_http(self, endpoint: &str) -> Result<http::Request<Bytes>, QueryError> {
        let uri: Uri = format!("{}/", endpoint.trim_end_matches('/'))
            .parse()
            .map_err(http::Error::from)?;
        let body = Bytes::from(self.body());
        Ok(http::Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE))
            .header(CONTENT_LENGTH, body.len())
            .body(body)?)
    }
}
