use std::fs;
use std::path::Path;
use log::{debug, info};

use super::format;
use super::iter::{ChunksIterator, DocumentTagsIterator, FramesIterator};
use super::types::error::{AsepriteError, Result};
use super::types::models::*;

/// An Aseprite document whose header has been validated.
///
/// Borrows the caller's buffer; nothing is copied until tags are decoded.
#[derive(Debug, Clone, Copy)]
pub struct Document<'a> {
    data: &'a [u8],
    header: DocumentHeader,
}

impl<'a> Document<'a> {
    /// Validates the fixed header of `data`.
    ///
    /// # Errors
    /// Returns the [`StopReason`] if the buffer is shorter than the header
    /// or the magic does not match. This is advisory: a document that parses
    /// may still be truncated further in.
    pub fn parse(data: &'a [u8]) -> std::result::Result<Self, StopReason> {
        let header = format::header::parse(data)?;
        Ok(Self { data, header })
    }

    pub fn header(&self) -> &DocumentHeader {
        &self.header
    }

    /// Returns the raw bytes of the document.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    /// Returns the base iterator over frame records.
    ///
    /// Chain with `.with_chunks()` and `.with_tags()` to go deeper.
    pub fn frames(&self) -> FramesIterator<'a> {
        FramesIterator::new(self.data, self.header.frames_offset, self.header.frame_count)
    }

    /// Returns an iterator over the chunk records of one frame.
    pub fn chunks(&self, frame: &FrameRecord) -> ChunksIterator<'a> {
        ChunksIterator::new(self.data, frame)
    }

    /// Returns the payload bytes of a chunk yielded by this document.
    pub fn payload(&self, chunk: &ChunkRecord) -> &'a [u8] {
        self.data.get(chunk.payload_range()).unwrap_or_default()
    }

    /// A convenience method that returns an iterator over every decoded tag.
    ///
    /// This is a shortcut for `document.frames().with_chunks().with_tags()`.
    pub fn iter_tags(&self) -> DocumentTagsIterator<'a> {
        self.frames().with_chunks().with_tags()
    }
}

/// Decodes every tag in `buffer`, along with how far the walk got.
///
/// Never fails: malformed input yields whatever was decoded before the
/// first structural inconsistency, and the cause is recorded in
/// [`Extraction::stop`].
pub fn extract(buffer: &[u8]) -> Extraction {
    let document = match Document::parse(buffer) {
        Ok(document) => document,
        Err(reason) => {
            debug!("Not an Aseprite document: {}", reason);
            return Extraction {
                tags: Vec::new(),
                bytes_consumed: 0,
                total_bytes: buffer.len(),
                stop: Some(reason),
            };
        }
    };

    let mut walker = document.iter_tags();
    let tags: Vec<TagEntry> = walker.by_ref().collect();
    let extraction = Extraction {
        tags,
        bytes_consumed: walker.bytes_consumed(),
        total_bytes: buffer.len(),
        stop: walker.stop_reason(),
    };

    info!(
        "Decoded {} tags from {} frames ({} of {} bytes)",
        extraction.tags.len(),
        document.header.frame_count,
        extraction.bytes_consumed,
        extraction.total_bytes
    );
    extraction
}

/// Decodes every tag in `buffer`, in file order.
///
/// Shorthand for `extract(buffer).tags`.
pub fn extract_tags(buffer: &[u8]) -> Vec<TagEntry> {
    extract(buffer).tags
}

/// Reads the document at `path` and decodes its tags.
///
/// # Errors
/// Only reading the file can fail; decoding never does.
pub fn extract_file(path: impl AsRef<Path>) -> Result<Extraction> {
    let path = path.as_ref();
    info!("Reading Aseprite document: {}", path.display());
    let buffer = fs::read(path).map_err(|source| AsepriteError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(extract(&buffer))
}
