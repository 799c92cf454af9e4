//! Noise suppression ahead of edge detection.
//!
//! The region of interest is reduced to one intensity channel and smoothed
//! with a separable Gaussian so that sensor noise and road texture do not
//! produce spurious gradients.

pub mod blur;
pub mod kernel;
pub mod luma;

pub use blur::separable_blur_u8;
pub use kernel::{reflect101, GaussianKernel, SeparableFilter};
pub use luma::{luma, rgb_to_gray};

use crate::error::FrameError;
use crate::image::{ColorView, GrayImageU8};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NoiseParams {
    /// Side of the square Gaussian kernel (odd).
    pub kernel_size: usize,
    /// Standard deviation of the Gaussian in pixels.
    pub sigma: f32,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            kernel_size: 5,
            sigma: 2.0,
        }
    }
}

impl NoiseParams {
    pub fn kernel(&self) -> Result<GaussianKernel, FrameError> {
        if self.kernel_size == 0 || self.kernel_size % 2 == 0 {
            return Err(FrameError::InvalidParameter {
                name: "noise.kernel_size",
                value: self.kernel_size as f64,
            });
        }
        GaussianKernel::new(self.kernel_size, self.sigma).ok_or(FrameError::InvalidParameter {
            name: "noise.sigma",
            value: f64::from(self.sigma),
        })
    }
}

/// Grayscale conversion followed by Gaussian smoothing.
///
/// The output has the dimensions of `view`.
pub fn suppress_noise(view: &ColorView<'_>, params: &NoiseParams) -> Result<GrayImageU8, FrameError> {
    let kernel = params.kernel()?;
    let gray = rgb_to_gray(view);
    Ok(separable_blur_u8(&gray, &kernel))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ColorFrame;

    #[test]
    fn output_matches_view_dimensions() {
        let frame = ColorFrame::filled(12, 9, [30, 60, 90]);
        let smoothed = suppress_noise(&frame.rows_from(4), &NoiseParams::default()).unwrap();
        assert_eq!((smoothed.width(), smoothed.height()), (12, 5));
        let expected = luma([30, 60, 90]);
        assert!(smoothed.data().iter().all(|&v| v == expected));
    }

    #[test]
    fn even_kernel_is_a_typed_failure() {
        let frame = ColorFrame::black(4, 4);
        let params = NoiseParams {
            kernel_size: 4,
            ..NoiseParams::default()
        };
        assert_eq!(
            suppress_noise(&frame.as_view(), &params).unwrap_err(),
            FrameError::InvalidParameter {
                name: "noise.kernel_size",
                value: 4.0
            }
        );
    }
}
