//! Transparency resolution for frame-differential animations.
//!
//! GIF frames frequently encode only the pixels that changed since the
//! previous frame, leaving the rest fully transparent. This pass fills every
//! alpha-0 pixel with the corresponding pixel of the preceding frame so that
//! rendering can treat all frames as opaque.

use crate::{DecodedImage, Error, FrameStore};

/// Resolve transparent pixels against the previous frame and produce a
/// readable [`FrameStore`].
///
/// Frames are processed in increasing index order; by the time frame `i` is
/// visited, frame `i - 1` is already fully resolved, so transparency chains
/// spanning several frames collapse in a single pass.
///
/// Frame 0 has no predecessor and is left untouched: an alpha-0 pixel there
/// stays transparent black. That matches the behavior of existing viewers
/// and is kept deliberately rather than substituting a background color.
///
/// Fails with `CorruptBuffer` if the buffer length is inconsistent with the
/// declared dimensions.
pub fn resolve_transparency(image: DecodedImage) -> Result<FrameStore, Error> {
    let frame_size = image.frame_byte_size();
    let expected = frame_size * image.frame_count;
    if image.buffer.len() != expected {
        return Err(Error::CorruptBuffer {
            expected,
            actual: image.buffer.len(),
        });
    }

    let DecodedImage {
        mut buffer,
        width,
        height,
        frame_count,
    } = image;

    for frame in 1..frame_count {
        let base = frame * frame_size;
        // Walk the alpha channel of this frame
        for alpha in (3..frame_size).step_by(4) {
            if buffer[base + alpha] != 0 {
                continue;
            }
            let pixel = base + alpha - 3;
            let prev = pixel - frame_size;
            buffer.copy_within(prev..prev + 4, pixel);
        }
    }

    Ok(FrameStore::new(buffer, width, height, frame_count))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(buffer: Vec<u8>, width: u32, height: u32, frames: usize) -> DecodedImage {
        DecodedImage {
            buffer,
            width,
            height,
            frame_count: frames,
        }
    }

    #[test]
    fn test_transparent_pixel_takes_previous_frame_value() {
        // 1x1, two frames: opaque red, then fully transparent
        let img = image(vec![255, 0, 0, 255, 0, 0, 0, 0], 1, 1, 2);
        let store = resolve_transparency(img).unwrap();
        let p = store.pixel(0, 0, 1).unwrap();
        assert_eq!((p.r, p.g, p.b), (255, 0, 0));
    }

    #[test]
    fn test_opaque_pixels_untouched() {
        let img = image(vec![255, 0, 0, 255, 0, 255, 0, 255], 1, 1, 2);
        let store = resolve_transparency(img).unwrap();
        let p = store.pixel(0, 0, 1).unwrap();
        assert_eq!((p.r, p.g, p.b), (0, 255, 0));
    }

    #[test]
    fn test_fully_transparent_frame_copies_whole_predecessor() {
        // 2x1, frame 0 red+green, frame 1 all transparent
        let img = image(
            vec![
                255, 0, 0, 255, 0, 255, 0, 255, // frame 0
                0, 0, 0, 0, 0, 0, 0, 0, // frame 1
            ],
            2,
            1,
            2,
        );
        let store = resolve_transparency(img).unwrap();
        assert_eq!(store.pixel(0, 0, 1), store.pixel(0, 0, 0));
        assert_eq!(store.pixel(1, 0, 1), store.pixel(1, 0, 0));
    }

    #[test]
    fn test_transparency_chains_across_frames() {
        // 1x1, three frames: red, transparent, transparent.
        // Frame 2 must see frame 1 already resolved to red.
        let img = image(
            vec![255, 0, 0, 255, 0, 0, 0, 0, 0, 0, 0, 0],
            1,
            1,
            3,
        );
        let store = resolve_transparency(img).unwrap();
        let p = store.pixel(0, 0, 2).unwrap();
        assert_eq!((p.r, p.g, p.b), (255, 0, 0));
    }

    #[test]
    fn test_frame_zero_left_untouched() {
        // Single transparent frame stays transparent black internally;
        // the store still reports it as opaque black at read time.
        let img = image(vec![0, 0, 0, 0], 1, 1, 1);
        let store = resolve_transparency(img).unwrap();
        let p = store.pixel(0, 0, 0).unwrap();
        assert_eq!((p.r, p.g, p.b, p.a), (0, 0, 0, 255));
    }

    #[test]
    fn test_corrupt_buffer_rejected() {
        let img = image(vec![0; 5], 1, 1, 1);
        assert_eq!(
            resolve_transparency(img).unwrap_err(),
            Error::CorruptBuffer { expected: 4, actual: 5 }
        );
    }
}
