//! Pixel buffer storage for decoded animation frames.
//!
//! Two types share one layout (concatenated row-major RGBA frame buffers)
//! but sit on opposite sides of transparency resolution:
//!
//! - [`DecodedImage`] comes straight out of the codec and may still contain
//!   alpha-0 pixels from frame-differential encoding.
//! - [`FrameStore`] is produced by [`crate::resolve_transparency`] and is the
//!   only type that exposes pixel reads, so unresolved buffers can never be
//!   sampled by mistake.

use crate::Error;

/// A single pixel with 8-bit RGBA channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Decoded animation frames as one contiguous buffer.
///
/// `buffer` holds `frame_count` frames back to back, each frame
/// `width * height * 4` bytes of row-major RGBA data.
#[derive(Clone, Debug, PartialEq)]
pub struct DecodedImage {
    /// Concatenation of all per-frame RGBA buffers, in frame order
    pub buffer: Vec<u8>,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Number of animation frames (1 for a still image)
    pub frame_count: usize,
}

impl DecodedImage {
    /// Create a DecodedImage, validating the buffer length against the
    /// declared dimensions.
    pub fn new(buffer: Vec<u8>, width: u32, height: u32, frame_count: usize) -> Result<Self, Error> {
        let image = Self {
            buffer,
            width,
            height,
            frame_count,
        };
        image.validate()?;
        Ok(image)
    }

    /// Byte size of a single frame (width × height × 4).
    #[inline]
    pub fn frame_byte_size(&self) -> usize {
        self.width as usize * self.height as usize * 4
    }

    fn validate(&self) -> Result<(), Error> {
        let expected = self.frame_byte_size() * self.frame_count;
        if self.buffer.len() != expected {
            return Err(Error::CorruptBuffer {
                expected,
                actual: self.buffer.len(),
            });
        }
        Ok(())
    }
}

/// Resolved frame buffers with random pixel access.
///
/// Obtained from [`crate::resolve_transparency`]; read-only from that point
/// on, so it can be shared freely across per-frame rendering tasks.
#[derive(Clone, Debug)]
pub struct FrameStore {
    buffer: Vec<u8>,
    width: u32,
    height: u32,
    frame_count: usize,
    frame_size: usize,
}

impl FrameStore {
    /// Wrap a resolved buffer. Only the resolver constructs this.
    pub(crate) fn new(buffer: Vec<u8>, width: u32, height: u32, frame_count: usize) -> Self {
        let frame_size = width as usize * height as usize * 4;
        Self {
            buffer,
            width,
            height,
            frame_count,
            frame_size,
        }
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of animation frames.
    #[inline]
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Get the pixel at the given position in the given frame.
    ///
    /// Alpha is always 255 in the returned value: transparency was resolved
    /// before this store was constructed, so it is never exposed to callers.
    /// Returns `OutOfBounds` if any index exceeds its bound; the sampler's
    /// stepping never produces such a coordinate.
    pub fn pixel(&self, x: u32, y: u32, frame: usize) -> Result<Rgba, Error> {
        if x >= self.width || y >= self.height || frame >= self.frame_count {
            return Err(Error::OutOfBounds { x, y, frame });
        }
        let offset = frame * self.frame_size + (x as usize + y as usize * self.width as usize) * 4;
        Ok(Rgba {
            r: self.buffer[offset],
            g: self.buffer[offset + 1],
            b: self.buffer[offset + 2],
            a: 255,
        })
    }
}
