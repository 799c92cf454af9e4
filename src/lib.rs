#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod image;

// Stage primitives – public so tools and tests can run stages in isolation.
pub mod composite;
pub mod edges;
pub mod filters;
pub mod hough;
pub mod overlay;
pub mod roi;

// --- High-level re-exports -------------------------------------------------

pub use crate::detector::{detect_lanes, process_frame, FrameOutput, LaneDetection, LaneParams};
pub use crate::diagnostics::FrameTrace;
pub use crate::error::FrameError;
pub use crate::hough::LineSegment;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use lane_detector::prelude::*;
///
/// # fn main() -> Result<(), FrameError> {
/// let mut frame = ColorFrame::black(640, 480);
/// let out = process_frame(&mut frame, &LaneParams::default())?;
/// println!("segments={} median={:.1}", out.trace.segments.len(), out.trace.median);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::detector::{FrameTransform, LaneOverlay, Passthrough};
    pub use crate::image::{ColorFrame, GrayImageU8};
    pub use crate::{detect_lanes, process_frame, FrameError, LaneParams, LineSegment};
}
