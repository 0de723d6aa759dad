//! Luminance-to-glyph mapping.

use crossterm::style::{Color, ResetColor, SetForegroundColor};
use unicode_width::UnicodeWidthStr;

use crate::{Error, Rgba};

/// Terminal display width of a glyph in character cells.
///
/// Computed on the bare glyph, never on an escape-wrapped form.
#[inline]
pub fn display_width(glyph: &str) -> usize {
    glyph.width()
}

/// One rendered glyph: the printable text plus the number of terminal
/// cells the bare glyph occupies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MappedGlyph {
    /// Printable form, possibly wrapped in a true-color escape sequence
    pub text: String,
    /// Display width of the bare glyph in terminal cells
    pub display_width: usize,
}

/// Maps sampled pixels to palette glyphs by luminance bucket.
///
/// The palette is ordered dark to bright: the darkest pixels pick the first
/// entry, the brightest the last. Each entry may be more than one character
/// (or a wide character); the sampler compensates for the extra cells.
#[derive(Clone, Debug)]
pub struct GlyphMapper {
    glyphs: Vec<String>,
    color: bool,
}

impl GlyphMapper {
    /// Create a mapper over an ordered glyph palette.
    ///
    /// Fails with `EmptyPalette` if no glyphs are given.
    pub fn new(glyphs: &[String], color: bool) -> Result<Self, Error> {
        if glyphs.is_empty() {
            return Err(Error::EmptyPalette);
        }
        Ok(Self {
            glyphs: glyphs.to_vec(),
            color,
        })
    }

    /// Map a pixel to its palette glyph.
    pub fn map(&self, pixel: Rgba) -> MappedGlyph {
        let glyph = &self.glyphs[self.bucket(pixel)];
        let text = if self.color {
            let fg = Color::Rgb {
                r: pixel.r,
                g: pixel.g,
                b: pixel.b,
            };
            format!("{}{}{}", SetForegroundColor(fg), glyph, ResetColor)
        } else {
            glyph.clone()
        };
        MappedGlyph {
            display_width: display_width(glyph),
            text,
        }
    }

    /// Luminance bucket index for a pixel.
    ///
    /// `floor(grayscale / 255 × (len − 0.5))`, grayscale being the unweighted
    /// channel mean. The half-entry offset keeps grayscale 255 on the last
    /// valid index; it also biases small palettes slightly toward index 0,
    /// which is part of the observable palette selection and kept as is.
    fn bucket(&self, pixel: Rgba) -> usize {
        let grayscale = (pixel.r as f64 + pixel.g as f64 + pixel.b as f64) / 3.0;
        (grayscale / 255.0 * (self.glyphs.len() as f64 - 0.5)) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|s| s.to_string()).collect()
    }

    fn gray(v: u8) -> Rgba {
        Rgba { r: v, g: v, b: v, a: 255 }
    }

    #[test]
    fn test_darkest_maps_to_first_glyph() {
        let mapper = GlyphMapper::new(&palette(&[" ", ".", "#"]), false).unwrap();
        assert_eq!(mapper.map(gray(0)).text, " ");
    }

    #[test]
    fn test_brightest_maps_to_last_glyph() {
        let mapper = GlyphMapper::new(&palette(&[" ", ".", "#"]), false).unwrap();
        assert_eq!(mapper.map(gray(255)).text, "#");
    }

    #[test]
    fn test_bucket_monotonic_in_grayscale() {
        let mapper = GlyphMapper::new(&palette(&[" ", ".", ":", "+", "#"]), false).unwrap();
        let mut last = 0;
        for v in 0..=255u8 {
            let idx = mapper.bucket(gray(v));
            assert!(idx >= last, "bucket dropped at grayscale {v}");
            assert!(idx < 5);
            last = idx;
        }
    }

    #[test]
    fn test_single_glyph_palette_always_picks_it() {
        let mapper = GlyphMapper::new(&palette(&["#"]), false).unwrap();
        assert_eq!(mapper.map(gray(0)).text, "#");
        assert_eq!(mapper.map(gray(255)).text, "#");
    }

    #[test]
    fn test_grayscale_is_unweighted_mean() {
        // (255 + 0 + 0) / 3 = 85 -> first bucket of a 2-glyph palette
        let mapper = GlyphMapper::new(&palette(&[".", "#"]), false).unwrap();
        let red = Rgba { r: 255, g: 0, b: 0, a: 255 };
        assert_eq!(mapper.map(red).text, ".");
    }

    #[test]
    fn test_color_wraps_glyph_in_truecolor_escape() {
        let mapper = GlyphMapper::new(&palette(&["#"]), true).unwrap();
        let out = mapper.map(Rgba { r: 10, g: 20, b: 30, a: 255 });
        assert!(out.text.contains("38;2;10;20;30"));
        assert!(out.text.contains('#'));
        // Width reflects the bare glyph, not the escape-wrapped string
        assert_eq!(out.display_width, 1);
    }

    #[test]
    fn test_wide_glyph_display_width() {
        let mapper = GlyphMapper::new(&palette(&["██"]), false).unwrap();
        assert_eq!(mapper.map(gray(128)).display_width, 2);
        assert_eq!(display_width("あ"), 2);
        assert_eq!(display_width("#"), 1);
    }

    #[test]
    fn test_empty_palette_rejected() {
        assert_eq!(
            GlyphMapper::new(&[], false).unwrap_err(),
            Error::EmptyPalette
        );
    }
}
