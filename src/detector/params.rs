//! Parameter types configuring the lane pipeline stages.
//!
//! Every stage owns its own parameter struct; `LaneParams` aggregates them so a
//! single JSON object can override any subset. Missing fields keep their
//! defaults.

use crate::composite::CompositeParams;
use crate::edges::CannyParams;
use crate::filters::NoiseParams;
use crate::hough::HoughParams;
use crate::overlay::OverlayParams;
use crate::roi::RoiParams;
use serde::{Deserialize, Serialize};

/// Pipeline-wide parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LaneParams {
    /// Region of interest selection.
    pub roi: RoiParams,
    /// Grayscale conversion and Gaussian smoothing.
    pub noise: NoiseParams,
    /// Median-adaptive Canny thresholds.
    pub canny: CannyParams,
    /// Probabilistic Hough line extraction.
    pub hough: HoughParams,
    /// Segment rendering on the full frame.
    pub overlay: OverlayParams,
    /// Side-by-side diagnostic view.
    pub composite: CompositeParams,
}
