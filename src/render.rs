//! Frame rendering: pixels to printable character grids.

use tracing::debug;

use crate::{Error, FrameStore, GlyphMapper, Sampler};

/// Row terminator between rendered rows.
const ROW_TERMINATOR: &str = "\r\n";

/// Default dark-to-bright glyph ramp used when no palette is given.
pub const DEFAULT_CHARACTERS: &[&str] = &[" ", ".", ":", "-", "=", "+", "*", "#", "%", "@"];

/// Options controlling how frames are rendered.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderOptions {
    /// Output width in character columns
    pub target_width: u32,
    /// Ordered glyph palette, darkest first; must be non-empty
    pub characters: Vec<String>,
    /// Wrap each glyph in a 24-bit color escape carrying the pixel color
    pub color: bool,
    /// Append one extra row terminator to the final frame
    pub padding: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            target_width: 80,
            characters: DEFAULT_CHARACTERS.iter().map(|s| s.to_string()).collect(),
            color: false,
            padding: false,
        }
    }
}

/// Render every frame of a [`FrameStore`] to a printable string.
///
/// Returns exactly `frame_count` strings, in source frame order; downstream
/// playback indexes frames by position. Rows within a frame are joined with
/// `\r\n`, with no terminator after the last row. A frame is either rendered
/// completely or the whole call fails; no partial frame is ever returned.
pub fn render(store: &FrameStore, options: &RenderOptions) -> Result<Vec<String>, Error> {
    // Palette is validated before any pixel is sampled.
    let mapper = GlyphMapper::new(&options.characters, options.color)?;
    let sampler = Sampler::new(store.width(), store.height(), options.target_width);

    debug!(
        frames = store.frame_count(),
        width = store.width(),
        height = store.height(),
        stride = sampler.stride(),
        "rendering frames"
    );

    let mut frames = Vec::with_capacity(store.frame_count());
    for frame in 0..store.frame_count() {
        frames.push(render_frame(store, frame, &sampler, &mapper)?);
    }

    if options.padding {
        if let Some(last) = frames.last_mut() {
            last.push_str(ROW_TERMINATOR);
        }
    }

    Ok(frames)
}

fn render_frame(
    store: &FrameStore,
    frame: usize,
    sampler: &Sampler,
    mapper: &GlyphMapper,
) -> Result<String, Error> {
    let mut out = String::new();
    let mut rows = sampler.rows().peekable();

    while let Some(y) = rows.next() {
        let mut cursor = sampler.columns();
        while let Some(x) = cursor.position() {
            let glyph = mapper.map(store.pixel(x, y, frame)?);
            out.push_str(&glyph.text);
            cursor.advance(glyph.display_width);
        }
        if rows.peek().is_some() {
            out.push_str(ROW_TERMINATOR);
        }
    }

    Ok(out)
}
