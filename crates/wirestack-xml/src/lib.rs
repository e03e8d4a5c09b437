//! XML layer of the S3 REST-XML protocol, client side.
//!
//! Requests are written with [`S3Serialize`] and [`to_xml`]; responses are read
//! with a pull parser wrapped in a [`StaxUnmarshallerContext`], which tracks the
//! element stack so that same-named elements at different depths can be told
//! apart. Every response shape implements [`StaxUnmarshall`].
//!
//! # S3 XML conventions
//!
//! - Namespace: `http://s3.amazonaws.com/doc/2006-03-01/`
//! - Booleans: lowercase `true`/`false`
//! - Timestamps: ISO 8601 format (`2006-02-03T16:45:09.000Z`)
//! - XML declaration: `<?xml version="1.0" encoding="UTF-8"?>`

pub mod error;
pub mod serialize;
pub mod stax;
pub mod time;
pub mod unmarshall;

pub use error::XmlError;
pub use serialize::{S3_NAMESPACE, S3Serialize, to_xml};
pub use stax::{StaxUnmarshallerContext, XmlEvent};
pub use unmarshall::{ErrorResponse, StaxUnmarshall, from_xml, from_xml_with_depth};
