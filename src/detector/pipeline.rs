//! Per-frame lane pipeline.
//!
//! ```text
//! frame ─► ROI ─► gray + blur ─► adaptive Canny ─► Hough ─► overlay ─► composite
//! ```
//!
//! Detection only reads the frame. The overlay then draws onto the caller's
//! frame in place and the composite is built from the annotated frame and the
//! edge map. No state survives between calls.
//!
//! Typical usage:
//! ```no_run
//! use lane_detector::detector::{process_frame, LaneParams};
//! use lane_detector::image::io::load_color_frame;
//!
//! # fn example() -> Result<(), String> {
//! let mut frame = load_color_frame("frame.png".as_ref())?;
//! let out = process_frame(&mut frame, &LaneParams::default()).map_err(|e| e.to_string())?;
//! println!("{}", out.trace.summary());
//! # Ok(())
//! # }
//! ```
use super::params::LaneParams;
use crate::composite::{compose, composite_size};
use crate::diagnostics::{elapsed_ms, FrameTrace, InputDescriptor, TimingBreakdown};
use crate::edges::{detect_edges_adaptive, ThresholdPair};
use crate::error::FrameError;
use crate::filters::suppress_noise;
use crate::hough::{extract_segments, LineSegment};
use crate::image::{ColorFrame, GrayImageU8};
use crate::overlay::draw_segments;
use crate::roi::select_roi;
use log::debug;
use std::time::Instant;

/// Detection result for one frame, in ROI coordinates.
#[derive(Clone, Debug)]
pub struct LaneDetection {
    /// First frame row covered by the ROI.
    pub row_offset: usize,
    /// Median intensity of the smoothed ROI.
    pub median: f32,
    pub thresholds: ThresholdPair,
    /// Binary edge map of the ROI (0 / 255).
    pub edges: GrayImageU8,
    pub segments: Vec<LineSegment>,
}

/// Composite view and diagnostics of one processed frame.
#[derive(Clone, Debug)]
pub struct FrameOutput {
    pub composite: ColorFrame,
    pub trace: FrameTrace,
}

/// Run ROI selection, smoothing, edge detection and line extraction.
pub fn detect_lanes(frame: &ColorFrame, params: &LaneParams) -> Result<LaneDetection, FrameError> {
    let mut timings = TimingBreakdown::default();
    detect_timed(frame, params, &mut timings)
}

fn detect_timed(
    frame: &ColorFrame,
    params: &LaneParams,
    timings: &mut TimingBreakdown,
) -> Result<LaneDetection, FrameError> {
    let roi = timings.measure("roi", || select_roi(frame, &params.roi))?;
    debug!(
        "roi: {}x{} at row {}",
        roi.width(),
        roi.height(),
        roi.row_offset
    );
    let smoothed = timings.measure("smooth", || suppress_noise(&roi.view, &params.noise))?;
    let adaptive = timings.measure("edges", || detect_edges_adaptive(&smoothed, &params.canny));
    let segments = timings.measure("hough", || extract_segments(&adaptive.edges, &params.hough))?;
    Ok(LaneDetection {
        row_offset: roi.row_offset,
        median: adaptive.median,
        thresholds: adaptive.thresholds,
        edges: adaptive.edges,
        segments,
    })
}

/// Detect lanes, draw them onto `frame` and build the composite view.
///
/// On error `frame` is left untouched: every precondition is checked before
/// the overlay runs.
pub fn process_frame(frame: &mut ColorFrame, params: &LaneParams) -> Result<FrameOutput, FrameError> {
    let start = Instant::now();
    let mut timings = TimingBreakdown::default();
    let (width, height) = (frame.width(), frame.height());
    composite_size(width, height, &params.composite)?;

    let detection = detect_timed(frame, params, &mut timings)?;
    timings.measure("overlay", || {
        draw_segments(
            frame,
            &detection.segments,
            detection.row_offset,
            &params.overlay,
        )
    });
    let composite = timings.measure("composite", || {
        compose(
            frame,
            &detection.edges,
            detection.row_offset,
            &params.composite,
        )
    })?;
    timings.total_ms = elapsed_ms(start);

    let trace = FrameTrace {
        input: InputDescriptor { width, height },
        row_offset: detection.row_offset,
        median: detection.median,
        thresholds: detection.thresholds,
        edge_pixels: detection.edges.count_nonzero(),
        segments: detection.segments,
        timings,
    };
    debug!("frame: {}", trace.summary());
    Ok(FrameOutput { composite, trace })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_frame_has_zero_thresholds_and_no_segments() {
        let frame = ColorFrame::black(32, 24);
        let det = detect_lanes(&frame, &LaneParams::default()).unwrap();
        assert_eq!(det.row_offset, 12);
        assert_eq!(det.median, 0.0);
        assert_eq!(det.thresholds, ThresholdPair { low: 0, high: 0 });
        assert_eq!((det.edges.width(), det.edges.height()), (32, 12));
        assert_eq!(det.edges.count_nonzero(), 0);
        assert!(det.segments.is_empty());
    }

    #[test]
    fn invalid_scale_leaves_frame_untouched() {
        let mut frame = ColorFrame::filled(16, 16, [40, 40, 40]);
        let before = frame.clone();
        let mut params = LaneParams::default();
        params.composite.scale = -1.0;
        assert!(matches!(
            process_frame(&mut frame, &params),
            Err(FrameError::InvalidParameter { .. })
        ));
        assert_eq!(frame, before);
    }

    #[test]
    fn trace_records_every_stage() {
        let mut frame = ColorFrame::filled(20, 10, [90, 90, 90]);
        let out = process_frame(&mut frame, &LaneParams::default()).unwrap();
        let labels: Vec<&str> = out
            .trace
            .timings
            .stages
            .iter()
            .map(|s| s.label.as_str())
            .collect();
        assert_eq!(
            labels,
            ["roi", "smooth", "edges", "hough", "overlay", "composite"]
        );
        assert_eq!(out.trace.input, InputDescriptor { width: 20, height: 10 });
        assert_eq!(out.trace.edge_pixels, 0);
        assert_eq!((out.composite.width(), out.composite.height()), (28, 7));
    }

    #[test]
    fn one_row_frame_is_rejected() {
        let frame = ColorFrame::black(8, 1);
        assert!(matches!(
            detect_lanes(&frame, &LaneParams::default()),
            Err(FrameError::TooShort { .. })
        ));
    }
}
