//! Byte layout of the Aseprite container.
//!
//! ```text
//! Document:
//! ┌──────────────────────────┐ 0
//! │  Header (128 bytes)      │ magic 0xA5E0 @4, frame count @6
//! ├──────────────────────────┤ 128
//! │  Frame header (16 bytes) │ len u32, magic 0xF1FA, old count u16,
//! │                          │ 4 reserved, new count u32
//! │  ├─ Chunk (len u32, type u16, payload)
//! │  └─ ...                  │
//! ├──────────────────────────┤
//! │  Frame ...               │
//! └──────────────────────────┘
//! ```
//!
//! All multi-byte fields are little-endian.

/// Size of the fixed document header; frame records begin right after it.
pub const DOCUMENT_HEADER_SIZE: usize = 128;
pub const DOCUMENT_MAGIC_OFFSET: usize = 4;
pub const DOCUMENT_MAGIC: u16 = 0xA5E0;
pub const FRAME_COUNT_OFFSET: usize = 6;

pub const FRAME_HEADER_SIZE: usize = 16;
pub const FRAME_MAGIC: u16 = 0xF1FA;
pub const FRAME_MAGIC_OFFSET: usize = 4;
pub const FRAME_OLD_CHUNKS_OFFSET: usize = 6;
pub const FRAME_NEW_CHUNKS_OFFSET: usize = 12;

pub const CHUNK_HEADER_SIZE: usize = 6;
pub const CHUNK_TYPE_OFFSET: usize = 4;
pub const TAGS_CHUNK_TYPE: u16 = 0x2018;

/// Tag count (u16) followed by 8 reserved bytes.
pub const TAGS_HEADER_SIZE: usize = 10;
pub const TAG_RESERVED_SIZE: usize = 8;
/// Three color channels plus one reserved byte.
pub const TAG_COLOR_SIZE: usize = 4;
