//! Lazy walkers over the records of an Aseprite document.
//!
//! The walkers are layered so callers can stop at the depth they need:
//!
//! 1. [`FramesIterator`] - frame records following the document header
//! 2. [`DocumentChunksIterator`] - every chunk of every frame, in file order
//! 3. [`DocumentTagsIterator`] - decoded tags from every tag chunk
//!
//! [`ChunksIterator`] and [`TagsIterator`] walk a single frame and a single
//! tag payload respectively.
//!
//! None of them fail. When the bytes stop making sense the walker ends early
//! and records why; [`stop_reason`](DocumentTagsIterator::stop_reason) reports
//! the first such cause once iteration is over.
//!
//! # Example
//! ```
//! # use aseprite_tags::Document;
//! # let bytes = vec![0u8; 16];
//! if let Ok(document) = Document::parse(&bytes) {
//!     for tag in document.iter_tags() {
//!         println!("{}: {}-{}", tag.name, tag.from, tag.to);
//!     }
//! }
//! ```

use log::debug;

use super::format::{chunk, frame, tags};
use super::layout::TAGS_HEADER_SIZE;
use super::types::models::{ChunkRecord, FrameRecord, StopReason, TagEntry};
use super::utils::ByteCursor;

fn note_stop(slot: &mut Option<StopReason>, reason: Option<StopReason>) {
    if slot.is_none() {
        *slot = reason;
    }
}

/// Iterator over the frame records of a document.
///
/// Yields at most the declared frame count. Each frame is trusted to span
/// exactly its declared length, whatever its chunks say.
///
/// Created by [`Document::frames()`](crate::Document::frames).
#[derive(Debug, Clone)]
pub struct FramesIterator<'a> {
    data: &'a [u8],
    offset: usize,
    remaining: u16,
    furthest: usize,
    stop: Option<StopReason>,
}

impl<'a> FramesIterator<'a> {
    pub(crate) fn new(data: &'a [u8], offset: usize, frame_count: u16) -> Self {
        Self {
            data,
            offset,
            remaining: frame_count,
            furthest: offset.min(data.len()),
            stop: None,
        }
    }

    /// Why the walk ended early, if it did.
    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stop
    }

    /// Furthest offset covered by a validated frame header.
    pub fn bytes_consumed(&self) -> usize {
        self.furthest
    }

    /// Transforms this iterator into one over the chunks of every frame.
    pub fn with_chunks(self) -> DocumentChunksIterator<'a> {
        DocumentChunksIterator {
            data: self.data,
            frames: self,
            current: None,
            furthest: 0,
            stop: None,
        }
    }

    fn halt(&mut self, reason: StopReason) {
        debug!("Frame walk stopped: {}", reason);
        self.stop = Some(reason);
        self.remaining = 0;
    }
}

impl<'a> Iterator for FramesIterator<'a> {
    type Item = FrameRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let record = match frame::parse(self.data, self.offset) {
            Ok(record) => record,
            Err(reason) => {
                self.halt(reason);
                return None;
            }
        };
        self.furthest = self.furthest.max(record.body_offset());

        match self.offset.checked_add(record.declared_len as usize) {
            Some(next) if next <= self.data.len() => self.offset = next,
            // Still yield this frame; its chunks are bounds-checked one by one.
            _ => self.halt(StopReason::FrameOverrun { offset: record.offset }),
        }
        Some(record)
    }
}

/// Iterator over the chunk records of a single frame.
///
/// Yields at most the frame's effective chunk count and always advances by
/// the declared chunk length, even past bytes nobody interpreted.
///
/// Created by [`Document::chunks()`](crate::Document::chunks).
#[derive(Debug, Clone)]
pub struct ChunksIterator<'a> {
    data: &'a [u8],
    offset: usize,
    remaining: u32,
    stop: Option<StopReason>,
}

impl<'a> ChunksIterator<'a> {
    pub(crate) fn new(data: &'a [u8], frame: &FrameRecord) -> Self {
        Self {
            data,
            offset: frame.body_offset(),
            remaining: frame.chunk_count,
            stop: None,
        }
    }

    /// Why the walk ended early, if it did.
    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stop
    }
}

impl<'a> Iterator for ChunksIterator<'a> {
    type Item = ChunkRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        match chunk::parse(self.data, self.offset) {
            Ok(record) => {
                self.offset = record.end();
                Some(record)
            }
            Err(reason) => {
                debug!("Chunk walk stopped: {}", reason);
                self.stop = Some(reason);
                self.remaining = 0;
                None
            }
        }
    }
}

/// Iterator over the tag entries of one tag chunk payload.
///
/// Stops at the first record that does not fit in the payload; entries
/// decoded before it are kept.
#[derive(Debug, Clone)]
pub struct TagsIterator<'a> {
    cursor: ByteCursor<'a>,
    remaining: u16,
    index: u16,
    stop: Option<StopReason>,
}

impl<'a> TagsIterator<'a> {
    pub fn new(payload: &'a [u8]) -> Self {
        let (cursor, remaining) = match tags::parse_count(payload) {
            Some(count) => (ByteCursor::new(&payload[TAGS_HEADER_SIZE..]), count),
            None => (ByteCursor::new(&[]), 0),
        };
        Self {
            cursor,
            remaining,
            index: 0,
            stop: None,
        }
    }

    /// Why decoding ended early, if it did.
    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stop
    }
}

impl<'a> Iterator for TagsIterator<'a> {
    type Item = TagEntry;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        match tags::parse_record(&mut self.cursor) {
            Some(tag) => {
                self.remaining -= 1;
                self.index += 1;
                Some(tag)
            }
            None => {
                let reason = StopReason::TagRecordTruncated { index: self.index };
                debug!("Tag decoding stopped: {}", reason);
                self.stop = Some(reason);
                self.remaining = 0;
                None
            }
        }
    }
}

/// Iterator over every chunk of every frame, in file order.
///
/// Created by [`FramesIterator::with_chunks()`].
#[derive(Debug, Clone)]
pub struct DocumentChunksIterator<'a> {
    data: &'a [u8],
    frames: FramesIterator<'a>,
    current: Option<ChunksIterator<'a>>,
    furthest: usize,
    stop: Option<StopReason>,
}

impl<'a> DocumentChunksIterator<'a> {
    /// Transforms this iterator into one over the decoded tags of every
    /// tag chunk. Other chunk types are skipped unread.
    pub fn with_tags(self) -> DocumentTagsIterator<'a> {
        DocumentTagsIterator {
            data: self.data,
            chunks: self,
            current: None,
            stop: None,
        }
    }

    /// First early-termination cause seen so far, in walk order.
    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stop
    }

    /// Furthest offset covered by a validated frame header or chunk.
    pub fn bytes_consumed(&self) -> usize {
        self.furthest.max(self.frames.bytes_consumed())
    }
}

impl<'a> Iterator for DocumentChunksIterator<'a> {
    type Item = ChunkRecord;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(chunks) = self.current.as_mut() {
                if let Some(record) = chunks.next() {
                    self.furthest = self.furthest.max(record.end());
                    return Some(record);
                }
                note_stop(&mut self.stop, chunks.stop_reason());
                self.current = None;
            }

            let frame = self.frames.next();
            note_stop(&mut self.stop, self.frames.stop_reason());
            self.current = Some(ChunksIterator::new(self.data, &frame?));
        }
    }
}

/// Iterator over decoded tags across the whole document.
///
/// Created by [`DocumentChunksIterator::with_tags()`] or
/// [`Document::iter_tags()`](crate::Document::iter_tags).
#[derive(Debug, Clone)]
pub struct DocumentTagsIterator<'a> {
    data: &'a [u8],
    chunks: DocumentChunksIterator<'a>,
    current: Option<TagsIterator<'a>>,
    stop: Option<StopReason>,
}

impl<'a> DocumentTagsIterator<'a> {
    /// First early-termination cause seen so far, in walk order.
    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stop
    }

    /// Furthest offset covered by a validated frame header or chunk.
    pub fn bytes_consumed(&self) -> usize {
        self.chunks.bytes_consumed()
    }

    fn next_tag_chunk(&mut self) -> Option<ChunkRecord> {
        loop {
            let record = self.chunks.next();
            note_stop(&mut self.stop, self.chunks.stop_reason());
            let record = record?;
            if record.is_tags() {
                return Some(record);
            }
        }
    }
}

impl<'a> Iterator for DocumentTagsIterator<'a> {
    type Item = TagEntry;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(tags) = self.current.as_mut() {
                if let Some(tag) = tags.next() {
                    return Some(tag);
                }
                note_stop(&mut self.stop, tags.stop_reason());
                self.current = None;
            }

            let record = self.next_tag_chunk()?;
            self.current = Some(TagsIterator::new(&self.data[record.payload_range()]));
        }
    }
}
