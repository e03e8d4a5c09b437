//! Per-operation request shapes.
//!
//! Field docs name the wire location of each member: an HTTP label, header,
//! query parameter, or the XML payload.

mod bucket;
mod config;
mod list;
mod multipart;
mod object;

pub use bucket::*;
pub use config::*;
pub use list::*;
pub use multipart::*;
pub use object::*;
