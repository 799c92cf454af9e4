//! Lane detector orchestrating the per-frame pipeline.
//!
//! Overview
//! - Keeps the lower part of the frame, where the road is.
//! - Converts it to grayscale and smooths it with a separable Gaussian.
//! - Runs Canny with thresholds placed around the median intensity of the
//!   smoothed region, so exposure changes do not require retuning.
//! - Extracts straight segments with the progressive probabilistic Hough
//!   transform and draws them back onto the full frame.
//! - Builds a scaled side-by-side view of the annotated frame and the edge map.
//!
//! Modules
//! - [`params`] – configuration types used by the pipeline and the frame tool.
//! - `pipeline` – [`detect_lanes`] and [`process_frame`].
//! - `transform` – the [`FrameTransform`] seam used by playback loops.

pub mod params;
mod pipeline;
mod transform;

pub use params::LaneParams;
pub use pipeline::{detect_lanes, process_frame, FrameOutput, LaneDetection};
pub use transform::{FrameTransform, LaneOverlay, Passthrough, Rendered};
