//! Per-frame diagnostics returned next to the composite.
//!
//! `FrameTrace` records the ROI offset, the adaptive thresholds, the edge and
//! segment counts and a stage timing breakdown. It is the observability hook
//! of the pipeline: nothing is printed, callers decide what to log or store.

pub mod timing;
pub mod trace;

pub use timing::{elapsed_ms, StageTiming, TimingBreakdown};
pub use trace::{FrameTrace, InputDescriptor};
