//! Error type shared across the decode and render pipeline.

/// Error type for decoding and rendering operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A known container format was detected but cannot be decoded yet
    UnsupportedFormat { format: &'static str },
    /// No known magic bytes matched the start of the file
    InvalidFileSignature,
    /// Rendering was requested with an empty glyph palette
    EmptyPalette,
    /// A sample coordinate fell outside the image extent
    OutOfBounds { x: u32, y: u32, frame: usize },
    /// Declared dimensions are inconsistent with the buffer length
    CorruptBuffer { expected: usize, actual: usize },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::UnsupportedFormat { format } => {
                write!(f, "Format not supported yet: {format} (supported: GIF)")
            }
            Error::InvalidFileSignature => {
                write!(f, "Invalid file signature (supported: PNG, JPG, GIF)")
            }
            Error::EmptyPalette => {
                write!(f, "Glyph palette is empty: at least one character is required")
            }
            Error::OutOfBounds { x, y, frame } => {
                write!(f, "Pixel ({x}, {y}) in frame {frame} is out of bounds")
            }
            Error::CorruptBuffer { expected, actual } => {
                write!(
                    f,
                    "Corrupt pixel buffer: expected {} bytes, got {}",
                    expected, actual
                )
            }
        }
    }
}

impl std::error::Error for Error {}
