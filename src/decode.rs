//! File type sniffing and GIF decoding.
//!
//! The decoder turns raw file bytes into a [`DecodedImage`]: one fully
//! materialized RGBA buffer per animation frame, concatenated in frame
//! order. Only GIF produces frame buffers today; PNG and JPG are detected
//! but not decoded yet.

use std::io::Cursor;

use image::codecs::gif::GifDecoder;
use image::AnimationDecoder;
use tracing::debug;

use crate::{DecodedImage, Error};

/// Container formats recognized by signature sniffing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileType {
    Png,
    Jpg,
    Gif,
}

impl FileType {
    /// Uppercase format name for error messages.
    pub fn name(self) -> &'static str {
        match self {
            FileType::Png => "PNG",
            FileType::Jpg => "JPG",
            FileType::Gif => "GIF",
        }
    }
}

const PNG_SIGNATURES: [&[u8]; 1] = [&[
    0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44, 0x52,
]];

const JPG_SIGNATURES: [&[u8]; 4] = [
    &[0xff, 0xd8, 0xff, 0xdb],
    &[0xff, 0xd8, 0xff, 0xe0, 0x00, 0x10, 0x4a, 0x46, 0x49, 0x46, 0x00, 0x01],
    &[0xff, 0xd8, 0xff, 0xee],
    &[0xff, 0xd8, 0xff, 0xe1],
];

const GIF_SIGNATURES: [&[u8]; 2] = [b"GIF87a", b"GIF89a"];

/// Detect the container format from a file's magic bytes.
///
/// Fails with `InvalidFileSignature` when no known signature matches.
pub fn detect_file_type(raw: &[u8]) -> Result<FileType, Error> {
    let tables: [(FileType, &[&[u8]]); 3] = [
        (FileType::Png, &PNG_SIGNATURES),
        (FileType::Jpg, &JPG_SIGNATURES),
        (FileType::Gif, &GIF_SIGNATURES),
    ];

    for (file_type, signatures) in tables {
        if signatures.iter().any(|sig| raw.starts_with(sig)) {
            return Ok(file_type);
        }
    }

    Err(Error::InvalidFileSignature)
}

/// Decode raw file bytes into per-frame RGBA buffers.
///
/// The format is chosen by [`detect_file_type`]. PNG and JPG currently fail
/// with `UnsupportedFormat`.
// TODO: decode still PNG/JPG as single-frame images once a decode path exists.
pub fn decode(raw: &[u8]) -> Result<DecodedImage, Error> {
    match detect_file_type(raw)? {
        FileType::Gif => decode_gif(raw),
        other => Err(Error::UnsupportedFormat { format: other.name() }),
    }
}

/// Decode a GIF into a [`DecodedImage`].
///
/// Frames come out of the decoder composited to full canvas size; pixels not
/// covered by any frame region remain fully transparent and are dealt with
/// by [`crate::resolve_transparency`].
pub fn decode_gif(raw: &[u8]) -> Result<DecodedImage, Error> {
    let decoder = GifDecoder::new(Cursor::new(raw))
        .map_err(|_| Error::UnsupportedFormat { format: "GIF" })?;
    let frames = decoder
        .into_frames()
        .collect_frames()
        .map_err(|_| Error::UnsupportedFormat { format: "GIF" })?;

    let (width, height) = frames
        .first()
        .map(|f| f.buffer().dimensions())
        .unwrap_or((0, 0));
    let frame_size = width as usize * height as usize * 4;

    let mut buffer = Vec::with_capacity(frame_size * frames.len());
    let frame_count = frames.len();
    for frame in frames {
        let image = frame.into_buffer();
        if image.dimensions() != (width, height) {
            return Err(Error::CorruptBuffer {
                expected: frame_size,
                actual: image.len(),
            });
        }
        buffer.extend_from_slice(image.as_raw());
    }

    debug!(width, height, frames = frame_count, "decoded gif");

    DecodedImage::new(buffer, width, height, frame_count)
}
