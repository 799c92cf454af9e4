//! Edge processing: Sobel gradients, non-maximum suppression, Canny
//! hysteresis and the median-adaptive threshold front end.
//!
//! Design goals
//! - Favor clarity and cache-friendly row access over micro-optimizations.
//! - Handle borders by clamping indices (replicate) in the gradient pass.
//! - Pure functions: identical input yields an identical edge mask.

pub mod adaptive;
pub mod canny;
pub mod grad;
pub mod nms;

pub use adaptive::{detect_edges_adaptive, median_intensity, AdaptiveEdges, CannyParams};
pub use canny::{canny, hysteresis, ThresholdPair, EDGE};
pub use grad::{sobel_gradients, Grad, GradientNorm};
pub use nms::{run_nms, NmsClass, NmsMap};
