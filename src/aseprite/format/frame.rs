//! Frame header decoding.

use log::trace;

use crate::aseprite::layout::{
    FRAME_HEADER_SIZE, FRAME_MAGIC, FRAME_MAGIC_OFFSET, FRAME_NEW_CHUNKS_OFFSET,
    FRAME_OLD_CHUNKS_OFFSET,
};
use crate::aseprite::types::models::{FrameRecord, StopReason};
use crate::aseprite::utils;

/// Resolves the chunk count: the 32-bit field wins unless it is zero, in
/// which case files written by older versions carry the count in the
/// 16-bit field.
pub fn effective_chunk_count(old_count: u16, new_count: u32) -> u32 {
    if new_count != 0 { new_count } else { u32::from(old_count) }
}

/// Decodes the frame header at `offset`.
///
/// # Header Structure
/// ```text
/// [4 bytes] Frame length, header included (u32)
/// [2 bytes] Magic 0xF1FA
/// [2 bytes] Chunk count, legacy (u16)
/// [4 bytes] Reserved
/// [4 bytes] Chunk count (u32, 0 means "use legacy")
/// ```
pub fn parse(data: &[u8], offset: usize) -> Result<FrameRecord, StopReason> {
    let header = utils::slice_at(data, offset, FRAME_HEADER_SIZE)
        .ok_or(StopReason::FrameHeaderTruncated { offset })?;

    // The slice is exactly FRAME_HEADER_SIZE long, so these reads cannot fail.
    let declared_len = utils::read_u32(header, 0).unwrap_or_default();
    let magic = utils::read_u16(header, FRAME_MAGIC_OFFSET).unwrap_or_default();
    if magic != FRAME_MAGIC {
        return Err(StopReason::BadFrameMagic { offset, found: magic });
    }
    if declared_len == 0 {
        return Err(StopReason::ZeroLengthFrame { offset });
    }

    let old_count = utils::read_u16(header, FRAME_OLD_CHUNKS_OFFSET).unwrap_or_default();
    let new_count = utils::read_u32(header, FRAME_NEW_CHUNKS_OFFSET).unwrap_or_default();
    let chunk_count = effective_chunk_count(old_count, new_count);
    trace!(
        "Frame at {}: {} bytes, chunks old={} new={} -> {}",
        offset, declared_len, old_count, new_count, chunk_count
    );

    Ok(FrameRecord {
        offset,
        declared_len,
        chunk_count,
    })
}
