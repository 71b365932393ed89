//! Chunk header decoding.

use log::trace;

use crate::aseprite::layout::{CHUNK_HEADER_SIZE, CHUNK_TYPE_OFFSET};
use crate::aseprite::types::models::{ChunkRecord, StopReason};
use crate::aseprite::utils;

/// Decodes the chunk header at `offset` and checks that the declared span
/// fits inside `data`.
///
/// # Header Structure
/// ```text
/// [4 bytes] Chunk length, header included (u32)
/// [2 bytes] Chunk type (u16)
/// [N bytes] Payload
/// ```
pub fn parse(data: &[u8], offset: usize) -> Result<ChunkRecord, StopReason> {
    let header = utils::slice_at(data, offset, CHUNK_HEADER_SIZE)
        .ok_or(StopReason::ChunkHeaderTruncated { offset })?;

    let declared_len = utils::read_u32(header, 0).unwrap_or_default();
    let chunk_type = utils::read_u16(header, CHUNK_TYPE_OFFSET).unwrap_or_default();

    // Zero is the only length that would not move the walk forward. Shorter
    // than the header is otherwise fine: the payload is empty.
    if declared_len == 0 {
        return Err(StopReason::ZeroLengthChunk { offset });
    }
    match offset.checked_add(declared_len as usize) {
        Some(end) if end <= data.len() => {}
        _ => return Err(StopReason::ChunkOverrun { offset }),
    }

    trace!("Chunk at {}: type {:#06x}, {} bytes", offset, chunk_type, declared_len);
    Ok(ChunkRecord {
        offset,
        declared_len,
        chunk_type,
    })
}
