//! Per-operation response shapes.
//!
//! Operations whose response carries no members use `()` as their output.

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
