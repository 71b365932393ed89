//! Core Aseprite container walker.

pub mod discovery;
pub mod format;
pub mod iter;
pub mod layout;
pub mod reader;
pub mod report;
pub mod types;
pub mod utils;

pub use reader::{extract, extract_file, extract_tags, Document};
pub use types::error::{AsepriteError, Result};
