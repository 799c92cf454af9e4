//! Precondition failures raised by the per-frame pipeline.
//!
//! The pipeline performs no I/O, so every failure is a shape or parameter
//! violation detected before any pixel is touched. A failed frame is not
//! rendered; the caller decides whether to skip it or abort.

/// Reasons why a frame cannot be processed.
#[derive(Clone, Debug, PartialEq)]
pub enum FrameError {
    /// Width or height is zero.
    EmptyFrame { width: usize, height: usize },
    /// The frame is too short to be split into a top and a bottom part.
    TooShort { height: usize, minimum: usize },
    /// Pixel layout does not carry the expected number of channels.
    ChannelMismatch { expected: usize, found: usize },
    /// Backing buffer length disagrees with `width * height * channels`.
    BufferSize { expected: usize, found: usize },
    /// Two buffers that must line up have different shapes.
    ShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
    /// A configuration value is outside its valid range.
    InvalidParameter { name: &'static str, value: f64 },
}

impl std::fmt::Display for FrameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrameError::EmptyFrame { width, height } => {
                write!(f, "empty frame ({width}x{height})")
            }
            FrameError::TooShort { height, minimum } => {
                write!(f, "frame too short (height {height} < {minimum})")
            }
            FrameError::ChannelMismatch { expected, found } => {
                write!(f, "expected {expected} channels, found {found}")
            }
            FrameError::BufferSize { expected, found } => {
                write!(f, "buffer holds {found} bytes, expected {expected}")
            }
            FrameError::ShapeMismatch { expected, found } => write!(
                f,
                "shape mismatch (expected {}x{}, found {}x{})",
                expected.0, expected.1, found.0, found.1
            ),
            FrameError::InvalidParameter { name, value } => {
                write!(f, "invalid parameter {name}={value}")
            }
        }
    }
}

impl std::error::Error for FrameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_offending_values() {
        let err = FrameError::TooShort {
            height: 1,
            minimum: 2,
        };
        assert_eq!(err.to_string(), "frame too short (height 1 < 2)");

        let err = FrameError::InvalidParameter {
            name: "scale",
            value: -1.0,
        };
        assert!(err.to_string().contains("scale"));
    }
}
