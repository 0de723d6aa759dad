//! Sample-point selection for mapping pixels to character cells.
//!
//! One output glyph represents a `stride × stride` pixel block horizontally.
//! Rows are spaced at twice the stride because terminal glyphs are roughly
//! twice as tall as they are wide. Columns advance by a variable step: a
//! glyph occupying two terminal cells consumes twice the horizontal pixel
//! span, keeping total coverage constant regardless of glyph width.

/// Derives sample coordinates covering a frame for a requested output width.
#[derive(Clone, Copy, Debug)]
pub struct Sampler {
    image_width: u32,
    image_height: u32,
    stride: u32,
}

impl Sampler {
    /// Create a sampler for an image and a target width in character columns.
    ///
    /// The stride is `ceil(image_width / target_width)` pixels per column.
    pub fn new(image_width: u32, image_height: u32, target_width: u32) -> Self {
        let target = target_width.max(1);
        let stride = image_width.div_ceil(target).max(1);
        Self {
            image_width,
            image_height,
            stride,
        }
    }

    /// Pixel stride between horizontally adjacent sample points.
    #[inline]
    pub fn stride(&self) -> u32 {
        self.stride
    }

    /// Row sample coordinates: `stride`, `stride + 2·stride`, … up to
    /// `image_height - stride` inclusive.
    ///
    /// An image shorter than `2 × stride` yields no rows at all; the caller
    /// renders an empty frame body rather than failing.
    pub fn rows(&self) -> impl Iterator<Item = u32> {
        let step = (self.stride as usize) * 2;
        (self.stride..=self.image_height.saturating_sub(self.stride)).step_by(step)
    }

    /// Start a column scan for one row.
    pub fn columns(&self) -> ColumnCursor {
        ColumnCursor {
            x: self.stride as f64 / 2.0,
            limit: self.image_width as f64 - self.stride as f64 / 2.0,
            stride: self.stride as f64,
        }
    }
}

/// Horizontal sample cursor with glyph-width-aware stepping.
///
/// The cursor holds fractional pixel positions; [`ColumnCursor::position`]
/// floors to the sampled pixel column. After emitting a glyph, call
/// [`ColumnCursor::advance`] with that glyph's display width.
#[derive(Clone, Copy, Debug)]
pub struct ColumnCursor {
    x: f64,
    limit: f64,
    stride: f64,
}

impl ColumnCursor {
    /// Current sample column, or `None` once the scan has passed the
    /// right edge of the coverage window.
    #[inline]
    pub fn position(&self) -> Option<u32> {
        if self.x <= self.limit {
            Some(self.x as u32)
        } else {
            None
        }
    }

    /// Step the cursor by `stride × display_width` pixels.
    ///
    /// A zero display width is treated as one cell; advancing by zero would
    /// stall the scan.
    #[inline]
    pub fn advance(&mut self, display_width: usize) {
        self.x += self.stride * display_width.max(1) as f64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stride_is_ceiling_ratio() {
        assert_eq!(Sampler::new(100, 100, 10).stride(), 10);
        assert_eq!(Sampler::new(101, 100, 10).stride(), 11);
        assert_eq!(Sampler::new(5, 5, 10).stride(), 1);
    }

    #[test]
    fn test_row_coordinates() {
        let rows: Vec<u32> = Sampler::new(100, 100, 10).rows().collect();
        assert_eq!(rows, vec![10, 30, 50, 70, 90]);
    }

    #[test]
    fn test_degenerate_strip_has_no_rows() {
        // height < 2 * stride: zero rows, not an error
        let rows: Vec<u32> = Sampler::new(100, 15, 10).rows().collect();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_column_scan_single_width() {
        let sampler = Sampler::new(100, 100, 10);
        let mut cursor = sampler.columns();
        let mut xs = Vec::new();
        while let Some(x) = cursor.position() {
            xs.push(x);
            cursor.advance(1);
        }
        // x: 5, 15, ..., 95; limit is 95 inclusive
        assert_eq!(xs, vec![5, 15, 25, 35, 45, 55, 65, 75, 85, 95]);
    }

    #[test]
    fn test_column_scan_double_width_glyphs() {
        let sampler = Sampler::new(100, 100, 10);
        let mut cursor = sampler.columns();
        let mut xs = Vec::new();
        while let Some(x) = cursor.position() {
            xs.push(x);
            cursor.advance(2);
        }
        // Wide glyphs cover twice the pixels, so half as many columns
        assert_eq!(xs, vec![5, 25, 45, 65, 85]);
    }

    #[test]
    fn test_fractional_cursor_floors_position() {
        // stride 7: x starts at 3.5, sampled at pixel 3
        let sampler = Sampler::new(70, 70, 10);
        let cursor = sampler.columns();
        assert_eq!(cursor.position(), Some(3));
    }

    #[test]
    fn test_zero_width_advance_still_moves() {
        let sampler = Sampler::new(100, 100, 10);
        let mut cursor = sampler.columns();
        let before = cursor.position();
        cursor.advance(0);
        assert_ne!(cursor.position(), before);
    }

    #[test]
    fn test_positions_stay_inside_image() {
        for (w, h, target) in [(100, 100, 10), (101, 53, 7), (33, 9, 40), (1, 1, 80)] {
            let sampler = Sampler::new(w, h, target);
            for y in sampler.rows() {
                assert!(y < h);
                let mut cursor = sampler.columns();
                while let Some(x) = cursor.position() {
                    assert!(x < w, "x={x} outside width {w}");
                    cursor.advance(1);
                }
            }
        }
    }
}
