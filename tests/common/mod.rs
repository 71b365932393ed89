//! Synthetic document builder shared by the integration tests.
#![allow(dead_code)]

pub const TAGS: u16 = 0x2018;
pub const LAYER: u16 = 0x2004;

pub struct Tag<'a> {
    pub name: &'a [u8],
    pub from: u16,
    pub to: u16,
    pub dir: u8,
    pub rgb: [u8; 3],
}

pub fn tag<'a>(name: &'a str, from: u16, to: u16, dir: u8, rgb: [u8; 3]) -> Tag<'a> {
    Tag {
        name: name.as_bytes(),
        from,
        to,
        dir,
        rgb,
    }
}

/// Payload of a tag chunk holding `tags`.
pub fn tags_payload(tags: &[Tag]) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(&(tags.len() as u16).to_le_bytes());
    data.extend_from_slice(&[0u8; 8]);
    for t in tags {
        data.extend_from_slice(&t.from.to_le_bytes());
        data.extend_from_slice(&t.to.to_le_bytes());
        data.push(t.dir);
        data.extend_from_slice(&[0u8; 8]);
        data.extend_from_slice(&t.rgb);
        data.push(0);
        data.extend_from_slice(&(t.name.len() as u16).to_le_bytes());
        data.extend_from_slice(t.name);
    }
    data
}

/// A full chunk: 4-byte length, 2-byte type, payload.
pub fn chunk(chunk_type: u16, payload: &[u8]) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(&((payload.len() + 6) as u32).to_le_bytes());
    data.extend_from_slice(&chunk_type.to_le_bytes());
    data.extend_from_slice(payload);
    data
}

/// Which chunk-count field a frame carries its count in.
#[derive(Clone, Copy)]
pub enum Count {
    Legacy,
    Modern,
    /// Both set to different values; the modern one must win.
    Both { legacy: u16 },
}

/// A full frame wrapping already-encoded chunks.
pub fn frame(chunks: &[Vec<u8>], count: Count) -> Vec<u8> {
    let body: Vec<u8> = chunks.concat();
    let n = chunks.len();
    let (old, new) = match count {
        Count::Legacy => (n as u16, 0u32),
        Count::Modern => (0u16, n as u32),
        Count::Both { legacy } => (legacy, n as u32),
    };
    let mut data = Vec::new();
    data.extend_from_slice(&((body.len() + 16) as u32).to_le_bytes());
    data.extend_from_slice(&0xF1FAu16.to_le_bytes());
    data.extend_from_slice(&old.to_le_bytes());
    data.extend_from_slice(&[0u8; 4]);
    data.extend_from_slice(&new.to_le_bytes());
    data.extend_from_slice(&body);
    data
}

/// A document from already-encoded frames, declaring `frames.len()` frames.
pub fn document(frames: &[Vec<u8>]) -> Vec<u8> {
    document_declaring(frames, frames.len() as u16)
}

pub fn document_declaring(frames: &[Vec<u8>], frame_count: u16) -> Vec<u8> {
    let mut data = vec![0u8; 128];
    let body: Vec<u8> = frames.concat();
    data[0..4].copy_from_slice(&((body.len() + 128) as u32).to_le_bytes());
    data[4..6].copy_from_slice(&0xA5E0u16.to_le_bytes());
    data[6..8].copy_from_slice(&frame_count.to_le_bytes());
    data.extend_from_slice(&body);
    data
}

/// Single frame, single tag chunk with the two reference tags.
pub fn idle_walk_document() -> Vec<u8> {
    let payload = tags_payload(&[
        tag("Idle", 0, 3, 0, [255, 0, 0]),
        tag("Walk", 4, 9, 2, [0, 255, 0]),
    ]);
    document(&[frame(&[chunk(TAGS, &payload)], Count::Modern)])
}
