//! Typed shapes of the S3 REST API: string enums, shared structures,
//! per-operation inputs and outputs, the operation catalogue and S3 service
//! errors.
//!
//! Field names mirror S3's member names in snake case. Required URI labels
//! are plain `String`s; every other member is optional or a (possibly empty)
//! collection.
#![allow(missing_docs)]
#![allow(clippy::struct_excessive_bools)]

pub mod enums;
pub mod error;
pub mod input;
pub mod operations;
pub mod output;
pub mod request;
pub mod types;

pub use error::{S3Error, S3ErrorCode};
pub use operations::S3Operation;
pub use request::StreamingBlob;
