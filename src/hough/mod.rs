//! Straight line segments from a binary edge mask.

pub mod options;
pub mod probabilistic;
pub mod segment;

pub use options::HoughParams;
pub use probabilistic::{extract_segments, ProbabilisticHough};
pub use segment::LineSegment;
