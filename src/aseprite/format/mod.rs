//! Record parsers for the Aseprite container.
//!
//! Each submodule decodes exactly one kind of on-disk record at a given
//! offset and reports a [`StopReason`](crate::aseprite::types::models::StopReason)
//! when the bytes there cannot form that record. Sequencing records is left to
//! the walkers in [`iter`](crate::aseprite::iter).
//!
//! - [`header`]: the fixed 128-byte document header
//! - [`frame`]: 16-byte frame headers and the chunk-count fallback
//! - [`chunk`]: 6-byte chunk headers
//! - [`tags`]: the tag chunk payload

pub mod chunk;
pub mod frame;
pub mod header;
pub mod tags;
