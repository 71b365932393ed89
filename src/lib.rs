//! # aseprite-tags
//!
//! Reads animation tag metadata (named frame ranges, playback direction and
//! display color) straight out of Aseprite `.aseprite` documents, without
//! launching the editor.
//!
//! Decoding is best-effort: truncated or corrupt documents yield the tags
//! that could be read before the damage, never an error.
pub mod aseprite;

// Re-export the main types for convenience
pub use aseprite::{
    discovery::{discover, ScanOptions},
    extract, extract_file, extract_tags,
    iter::{ChunksIterator, DocumentChunksIterator, DocumentTagsIterator, FramesIterator, TagsIterator},
    report::{dedup_structured, dedup_summary, render_json, render_summary, ReportMode, TagReport},
    types::models::{
        ChunkRecord, Direction, DocumentHeader, Extraction, FrameRecord, Rgb, StopReason, TagEntry,
    },
    AsepriteError, Document, Result,
};
