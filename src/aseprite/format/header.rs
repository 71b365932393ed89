//! Document header validation.

use log::trace;

use crate::aseprite::layout::{
    DOCUMENT_HEADER_SIZE, DOCUMENT_MAGIC, DOCUMENT_MAGIC_OFFSET, FRAME_COUNT_OFFSET,
};
use crate::aseprite::types::models::{DocumentHeader, StopReason};
use crate::aseprite::utils;

/// Checks the fixed-size header at the start of `data`.
///
/// Passing this check only licenses walking the frames; it says nothing
/// about whether the rest of the document is well formed.
pub fn parse(data: &[u8]) -> Result<DocumentHeader, StopReason> {
    if data.len() < DOCUMENT_HEADER_SIZE {
        return Err(StopReason::HeaderTooShort);
    }

    let magic = utils::read_u16(data, DOCUMENT_MAGIC_OFFSET).ok_or(StopReason::HeaderTooShort)?;
    if magic != DOCUMENT_MAGIC {
        return Err(StopReason::BadMagic { found: magic });
    }

    let frame_count = utils::read_u16(data, FRAME_COUNT_OFFSET).ok_or(StopReason::HeaderTooShort)?;
    trace!("Document header: {} frames, {} bytes", frame_count, data.len());

    Ok(DocumentHeader {
        frame_count,
        frames_offset: DOCUMENT_HEADER_SIZE,
    })
}
