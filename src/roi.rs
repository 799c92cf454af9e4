//! Region selection: the band of rows below the horizon where lane markings
//! appear.
//!
//! The region keeps the full frame width and starts at row
//! `floor(height · split_fraction)`. The start row is returned with the view
//! because every ROI-space coordinate must be shifted by it before it is drawn
//! back onto the frame.
use crate::error::FrameError;
use crate::image::{ColorFrame, ColorView};
use serde::{Deserialize, Serialize};

/// Smallest frame height that can be split into a top and a bottom part.
pub const MIN_FRAME_HEIGHT: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RoiParams {
    /// Fraction of the frame height discarded from the top, in `[0, 1)`.
    pub split_fraction: f32,
}

impl Default for RoiParams {
    fn default() -> Self {
        Self {
            split_fraction: 0.5,
        }
    }
}

/// Lower band of a frame plus the row offset mapping it back to frame space.
#[derive(Clone, Copy, Debug)]
pub struct Roi<'a> {
    pub view: ColorView<'a>,
    pub row_offset: usize,
}

impl<'a> Roi<'a> {
    pub fn width(&self) -> usize {
        self.view.w
    }

    pub fn height(&self) -> usize {
        self.view.h
    }
}

/// Row at which the region starts for a frame of `height` rows.
pub fn row_offset(height: usize, params: &RoiParams) -> Result<usize, FrameError> {
    let fraction = params.split_fraction;
    if !fraction.is_finite() || !(0.0..1.0).contains(&fraction) {
        return Err(FrameError::InvalidParameter {
            name: "roi.split_fraction",
            value: f64::from(fraction),
        });
    }
    Ok((height as f64 * f64::from(fraction)).floor() as usize)
}

/// Select the region of interest of `frame`.
pub fn select_roi<'a>(frame: &'a ColorFrame, params: &RoiParams) -> Result<Roi<'a>, FrameError> {
    let (width, height) = (frame.width(), frame.height());
    if width == 0 || height == 0 {
        return Err(FrameError::EmptyFrame { width, height });
    }
    if height < MIN_FRAME_HEIGHT {
        return Err(FrameError::TooShort {
            height,
            minimum: MIN_FRAME_HEIGHT,
        });
    }
    let offset = row_offset(height, params)?;
    Ok(Roi {
        view: frame.rows_from(offset),
        row_offset: offset,
    })
}

/// Rows `[H/2, H)` of `frame`.
pub fn lower_half(frame: &ColorFrame) -> Result<Roi<'_>, FrameError> {
    select_roi(frame, &RoiParams::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_half_splits_at_floor_of_half_height() {
        for height in [2usize, 3, 4, 7, 480, 481] {
            let frame = ColorFrame::black(5, height);
            let roi = lower_half(&frame).unwrap();
            assert_eq!(roi.row_offset, height / 2, "height={height}");
            assert_eq!(roi.height(), height - height / 2, "height={height}");
            assert_eq!(roi.width(), 5);
        }
    }

    #[test]
    fn roi_borrows_the_bottom_rows() {
        let mut frame = ColorFrame::black(3, 6);
        frame.set_pixel(2, 3, [0, 200, 0]);
        let roi = lower_half(&frame).unwrap();
        assert_eq!(roi.view.pixel(2, 0), [0, 200, 0]);
    }

    #[test]
    fn single_row_frame_is_rejected() {
        let frame = ColorFrame::black(8, 1);
        assert_eq!(
            lower_half(&frame).unwrap_err(),
            FrameError::TooShort {
                height: 1,
                minimum: 2
            }
        );
    }

    #[test]
    fn split_fraction_must_stay_below_one() {
        let frame = ColorFrame::black(4, 4);
        let params = RoiParams {
            split_fraction: 1.0,
        };
        assert!(matches!(
            select_roi(&frame, &params),
            Err(FrameError::InvalidParameter { .. })
        ));

        let whole = select_roi(
            &frame,
            &RoiParams {
                split_fraction: 0.0,
            },
        )
        .unwrap();
        assert_eq!((whole.row_offset, whole.height()), (0, 4));
    }
}
