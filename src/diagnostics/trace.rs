use super::timing::TimingBreakdown;
use crate::edges::ThresholdPair;
use crate::hough::LineSegment;
use serde::{Deserialize, Serialize};

/// Shape of the frame a trace belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
}

/// What the pipeline saw and decided for one frame.
///
/// Replaces printing threshold values to stdout: callers log or serialise it.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameTrace {
    pub input: InputDescriptor,
    pub row_offset: usize,
    pub median: f32,
    pub thresholds: ThresholdPair,
    pub edge_pixels: usize,
    /// Segments in ROI coordinates.
    pub segments: Vec<LineSegment>,
    pub timings: TimingBreakdown,
}

impl FrameTrace {
    /// One-line summary for logs.
    pub fn summary(&self) -> String {
        format!(
            "{}x{} roi@{} median={:.1} thresholds=({}, {}) edges={} segments={} total={:.2}ms",
            self.input.width,
            self.input.height,
            self.row_offset,
            self.median,
            self.thresholds.low,
            self.thresholds.high,
            self.edge_pixels,
            self.segments.len(),
            self.timings.total_ms
        )
    }
}
