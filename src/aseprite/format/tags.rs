//! Tag chunk (0x2018) payload decoding.
//!
//! # Payload Structure
//! ```text
//! [2 bytes] Number of tags (u16)
//! [8 bytes] Reserved
//! Per tag:
//!   [2 bytes] From frame (u16)
//!   [2 bytes] To frame (u16)
//!   [1 byte ] Loop direction
//!   [8 bytes] Reserved
//!   [3 bytes] RGB color
//!   [1 byte ] Reserved
//!   [2 bytes] Name length (u16)
//!   [N bytes] Name (UTF-8)
//! ```
//!
//! Every length here comes from the file, so each field is bounds-checked
//! before it is read. A record that cannot be read completely is dropped.

use crate::aseprite::layout::{TAGS_HEADER_SIZE, TAG_COLOR_SIZE, TAG_RESERVED_SIZE};
use crate::aseprite::types::models::{Direction, Rgb, TagEntry};
use crate::aseprite::utils::{self, ByteCursor};

/// Reads the declared tag count. Returns `None` if the payload is shorter
/// than the count header.
pub fn parse_count(payload: &[u8]) -> Option<u16> {
    if payload.len() < TAGS_HEADER_SIZE {
        return None;
    }
    utils::read_u16(payload, 0)
}

/// Decodes one tag record at the cursor.
///
/// On `None` the record was incomplete; the cursor position is then
/// unspecified and decoding of the chunk must stop.
pub fn parse_record(cursor: &mut ByteCursor<'_>) -> Option<TagEntry> {
    let from = cursor.take_u16()?;
    let to = cursor.take_u16()?;
    let direction = Direction::from(cursor.take_u8()?);
    cursor.skip(TAG_RESERVED_SIZE)?;

    let color = cursor.take(TAG_COLOR_SIZE)?;
    let color = Rgb(color[0], color[1], color[2]);

    let name_len = cursor.take_u16()?;
    let name = String::from_utf8_lossy(cursor.take(name_len as usize)?).into_owned();

    Some(TagEntry {
        from,
        to,
        direction,
        color,
        name,
    })
}
