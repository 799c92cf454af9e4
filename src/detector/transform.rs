//! Pluggable per-frame transforms for a playback loop.
use super::params::LaneParams;
use super::pipeline::process_frame;
use crate::diagnostics::FrameTrace;
use crate::error::FrameError;
use crate::image::ColorFrame;

/// Image to display for one frame, plus diagnostics when the transform has any.
#[derive(Clone, Debug)]
pub struct Rendered {
    pub image: ColorFrame,
    pub trace: Option<FrameTrace>,
}

/// Turns one decoded frame into the image that gets displayed.
pub trait FrameTransform {
    fn name(&self) -> &'static str;

    fn apply(&self, frame: ColorFrame) -> Result<Rendered, FrameError>;
}

/// Lane detection with the side-by-side composite as output.
#[derive(Clone, Debug, Default)]
pub struct LaneOverlay {
    pub params: LaneParams,
}

impl LaneOverlay {
    pub fn new(params: LaneParams) -> Self {
        Self { params }
    }
}

impl FrameTransform for LaneOverlay {
    fn name(&self) -> &'static str {
        "lanes"
    }

    fn apply(&self, mut frame: ColorFrame) -> Result<Rendered, FrameError> {
        let out = process_frame(&mut frame, &self.params)?;
        Ok(Rendered {
            image: out.composite,
            trace: Some(out.trace),
        })
    }
}

/// Shows frames unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct Passthrough;

impl FrameTransform for Passthrough {
    fn name(&self) -> &'static str {
        "passthrough"
    }

    fn apply(&self, frame: ColorFrame) -> Result<Rendered, FrameError> {
        if frame.width() == 0 || frame.height() == 0 {
            return Err(FrameError::EmptyFrame {
                width: frame.width(),
                height: frame.height(),
            });
        }
        Ok(Rendered {
            image: frame,
            trace: None,
        })
    }
}
