//! # asciimg
//!
//! Terminal image-to-ASCII renderer with animated GIF playback.
//!
//! This crate turns decoded RGBA pixel buffers into printable character
//! grids:
//! - Sniffing file signatures and decoding GIFs into per-frame buffers
//! - Resolving frame-differential transparency against the previous frame
//! - Sampling pixels at an aspect-corrected, glyph-width-aware grid
//! - Mapping luminance to a glyph palette, optionally with 24-bit color
//! - Driving playback timing for the resulting frame strings
//!
//! ## Features
//!
//! - `serde` - Enable serialization/deserialization for option structures
//!
//! ## Example
//!
//! ```rust,ignore
//! use asciimg::{decode, render, resolve_transparency, RenderOptions};
//!
//! let raw = std::fs::read("animation.gif")?;
//! let store = resolve_transparency(decode(&raw)?)?;
//! let frames = render(&store, &RenderOptions {
//!     target_width: 70,
//!     ..RenderOptions::default()
//! })?;
//! for frame in &frames {
//!     println!("{frame}");
//! }
//! ```

mod animation;
mod decode;
mod error;
mod frames;
mod glyph;
mod render;
mod resolve;
mod sample;

pub use animation::{AnimationController, AnimationState, LoopMode};
pub use decode::{decode, decode_gif, detect_file_type, FileType};
pub use error::Error;
pub use frames::{DecodedImage, FrameStore, Rgba};
pub use glyph::{display_width, GlyphMapper, MappedGlyph};
pub use render::{render, RenderOptions, DEFAULT_CHARACTERS};
pub use resolve::resolve_transparency;
pub use sample::{ColumnCursor, Sampler};
