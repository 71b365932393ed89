//! Core data structures for Aseprite container components.
//!
//! This module defines the fundamental types used throughout the library:
//! - Document, frame and chunk record locations
//! - Decoded tag entries and their enumerations
//! - Diagnostics describing where a walk stopped

use std::fmt;
use serde::{Serialize, Serializer};

/// Playback direction of an animation tag.
///
/// Known codes map to named variants. Anything else is kept verbatim in
/// `Unknown` so that no information is lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Reverse,
    PingPong,
    Unknown(u8),
}

impl From<u8> for Direction {
    fn from(code: u8) -> Self {
        match code {
            0 => Self::Forward,
            1 => Self::Reverse,
            2 => Self::PingPong,
            other => Self::Unknown(other),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::Forward => write!(f, "forward"),
            Direction::Reverse => write!(f, "reverse"),
            Direction::PingPong => write!(f, "ping-pong"),
            Direction::Unknown(code) => write!(f, "{}", code),
        }
    }
}

impl Serialize for Direction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Display color of a tag. Serializes as a `[r, g, b]` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// One decoded animation tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TagEntry {
    /// First frame index covered by the tag.
    pub from: u16,
    /// Last frame index covered by the tag (inclusive).
    pub to: u16,
    pub direction: Direction,
    pub color: Rgb,
    /// Tag name; invalid UTF-8 is replaced with U+FFFD.
    pub name: String,
}

/// Fields of the fixed-size document header that the walkers need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentHeader {
    /// Declared number of frame records.
    pub frame_count: u16,
    /// Absolute offset of the first frame record.
    pub frames_offset: usize,
}

/// Location of one frame record inside a document.
///
/// The legacy 16-bit and modern 32-bit chunk counts are resolved into
/// `chunk_count` when the header is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRecord {
    /// Absolute offset of the frame header.
    pub offset: usize,
    /// Declared length of the frame, header and chunks included.
    pub declared_len: u32,
    /// Effective number of chunks in the frame.
    pub chunk_count: u32,
}

impl FrameRecord {
    /// Absolute offset of the first chunk header.
    pub fn body_offset(&self) -> usize {
        self.offset + crate::aseprite::layout::FRAME_HEADER_SIZE
    }
}

/// Location of one chunk record inside a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkRecord {
    /// Absolute offset of the chunk header.
    pub offset: usize,
    /// Declared length of the chunk, header included.
    pub declared_len: u32,
    pub chunk_type: u16,
}

impl ChunkRecord {
    /// Absolute offset one past the chunk's last byte.
    pub fn end(&self) -> usize {
        self.offset + self.declared_len as usize
    }

    /// Absolute range of the chunk payload (everything after the 6-byte header).
    ///
    /// Empty when the declared length does not even cover the header.
    pub fn payload_range(&self) -> std::ops::Range<usize> {
        let start = self.offset + crate::aseprite::layout::CHUNK_HEADER_SIZE;
        start..self.end().max(start)
    }

    pub fn is_tags(&self) -> bool {
        self.chunk_type == crate::aseprite::layout::TAGS_CHUNK_TYPE
    }
}

/// Why a walk ended before its declared count was exhausted.
///
/// Offsets are absolute byte positions in the document. None of these are
/// errors: the walk keeps every entry decoded before the stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The buffer is shorter than the fixed document header.
    HeaderTooShort,
    /// The document magic did not match.
    BadMagic { found: u16 },
    /// Fewer than a frame header's worth of bytes remained.
    FrameHeaderTruncated { offset: usize },
    /// The frame magic did not match.
    BadFrameMagic { offset: usize, found: u16 },
    /// A frame declared a length of zero.
    ZeroLengthFrame { offset: usize },
    /// A frame's declared span runs past the end of the buffer.
    FrameOverrun { offset: usize },
    /// Fewer than a chunk header's worth of bytes remained.
    ChunkHeaderTruncated { offset: usize },
    /// A chunk declared a length of zero.
    ZeroLengthChunk { offset: usize },
    /// A chunk's declared end lies past the end of the buffer.
    ChunkOverrun { offset: usize },
    /// A tag record ran out of payload bytes; `index` is its position in the chunk.
    TagRecordTruncated { index: u16 },
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StopReason::HeaderTooShort => write!(f, "document header truncated"),
            StopReason::BadMagic { found } => write!(f, "bad document magic {:#06x}", found),
            StopReason::FrameHeaderTruncated { offset } => {
                write!(f, "frame header truncated at {}", offset)
            }
            StopReason::BadFrameMagic { offset, found } => {
                write!(f, "bad frame magic {:#06x} at {}", found, offset)
            }
            StopReason::ZeroLengthFrame { offset } => write!(f, "zero-length frame at {}", offset),
            StopReason::FrameOverrun { offset } => {
                write!(f, "frame at {} runs past end of document", offset)
            }
            StopReason::ChunkHeaderTruncated { offset } => {
                write!(f, "chunk header truncated at {}", offset)
            }
            StopReason::ZeroLengthChunk { offset } => write!(f, "zero-length chunk at {}", offset),
            StopReason::ChunkOverrun { offset } => {
                write!(f, "chunk at {} runs past end of document", offset)
            }
            StopReason::TagRecordTruncated { index } => write!(f, "tag record {} truncated", index),
        }
    }
}

/// Result of decoding one document, with diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Extraction {
    /// Tags in file order, before any deduplication.
    pub tags: Vec<TagEntry>,
    /// Furthest offset covered by a structurally validated span.
    pub bytes_consumed: usize,
    /// Length of the input buffer.
    pub total_bytes: usize,
    /// First early-termination cause in walk order, if any.
    pub stop: Option<StopReason>,
}

impl Extraction {
    /// `true` when every walker ran to its declared count and the validated
    /// spans cover the whole buffer.
    pub fn is_complete(&self) -> bool {
        self.stop.is_none() && self.bytes_consumed == self.total_bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_codes_map_to_names() {
        assert_eq!(Direction::from(0).to_string(), "forward");
        assert_eq!(Direction::from(1).to_string(), "reverse");
        assert_eq!(Direction::from(2).to_string(), "ping-pong");
    }

    #[test]
    fn unknown_direction_keeps_literal_code() {
        assert_eq!(Direction::from(5), Direction::Unknown(5));
        assert_eq!(Direction::from(5).to_string(), "5");
    }

    #[test]
    fn tag_entry_serializes_to_wire_shape() {
        let tag = TagEntry {
            from: 1,
            to: 2,
            direction: Direction::PingPong,
            color: Rgb(10, 20, 30),
            name: "Run".to_string(),
        };
        let value = serde_json::to_value(&tag).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "from": 1,
                "to": 2,
                "direction": "ping-pong",
                "color": [10, 20, 30],
                "name": "Run",
            })
        );
    }
}
