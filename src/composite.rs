//! Side-by-side diagnostic view.
//!
//! Layout before scaling (W × H input, ROI starting at row `r`):
//!
//! ```text
//! +-----------------+-----------------+
//! |                 | black  (W × r)  |
//! | annotated frame +-----------------+
//! |     (W × H)     | edges (W × H−r) |
//! +-----------------+-----------------+
//! ```
//!
//! The 2W × H mosaic is then resized to `(round(2·W·s), round(H·s))`.
use crate::error::FrameError;
use crate::image::io::{from_rgb_image, to_rgb_image};
use crate::image::{ColorFrame, GrayImageU8};
use image::imageops::{self, FilterType};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompositeParams {
    /// Uniform scale applied to the mosaic.
    pub scale: f32,
}

impl Default for CompositeParams {
    fn default() -> Self {
        Self { scale: 0.7 }
    }
}

/// Output size of the composite for a `width × height` frame.
pub fn composite_size(
    width: usize,
    height: usize,
    params: &CompositeParams,
) -> Result<(usize, usize), FrameError> {
    let scale = f64::from(params.scale);
    let invalid = FrameError::InvalidParameter {
        name: "composite.scale",
        value: scale,
    };
    if !(scale.is_finite() && scale > 0.0) {
        return Err(invalid);
    }
    let out_w = (width as f64 * scale * 2.0).round() as usize;
    let out_h = (height as f64 * scale).round() as usize;
    if out_w == 0 || out_h == 0 {
        return Err(invalid);
    }
    Ok((out_w, out_h))
}

/// Full-height edge column: `row_offset` black rows above the 3-channel mask.
pub fn edge_column(
    edges: &GrayImageU8,
    row_offset: usize,
) -> Result<ColorFrame, FrameError> {
    let filler = ColorFrame::black(edges.width(), row_offset);
    ColorFrame::vstack(&filler, &ColorFrame::from_gray(edges))
}

/// Build the scaled side-by-side view of `annotated` and `edges`.
pub fn compose(
    annotated: &ColorFrame,
    edges: &GrayImageU8,
    row_offset: usize,
    params: &CompositeParams,
) -> Result<ColorFrame, FrameError> {
    let (w, h) = (annotated.width(), annotated.height());
    if w == 0 || h == 0 {
        return Err(FrameError::EmptyFrame {
            width: w,
            height: h,
        });
    }
    if edges.width() != w || row_offset + edges.height() != h {
        return Err(FrameError::ShapeMismatch {
            expected: (w, h.saturating_sub(row_offset)),
            found: (edges.width(), edges.height()),
        });
    }
    let (out_w, out_h) = composite_size(w, h, params)?;

    let column = edge_column(edges, row_offset)?;
    let mosaic = ColorFrame::hconcat(annotated, &column)?;
    if (out_w, out_h) == (mosaic.width(), mosaic.height()) {
        return Ok(mosaic);
    }

    let buffer = to_rgb_image(&mosaic).ok_or(FrameError::BufferSize {
        expected: mosaic.width() * mosaic.height() * 3,
        found: mosaic.data().len(),
    })?;
    let resized = imageops::resize(&buffer, out_w as u32, out_h as u32, FilterType::Triangle);
    from_rgb_image(resized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_follows_scale() {
        let p = CompositeParams::default();
        assert_eq!(composite_size(640, 480, &p).unwrap(), (896, 336));
        assert_eq!(composite_size(1280, 720, &p).unwrap(), (1792, 504));
        assert_eq!(composite_size(5, 3, &p).unwrap(), (7, 2));
        assert!(composite_size(
            640,
            480,
            &CompositeParams { scale: 0.0 }
        )
        .is_err());
    }

    #[test]
    fn unscaled_mosaic_places_panels() {
        let annotated = ColorFrame::filled(4, 6, [10, 20, 30]);
        let mut edges = GrayImageU8::new(4, 3);
        edges.set(2, 1, 255);
        let out = compose(&annotated, &edges, 3, &CompositeParams { scale: 0.5 }).unwrap();
        assert_eq!((out.width(), out.height()), (4, 3));

        let full = compose(&annotated, &edges, 3, &CompositeParams { scale: 1.0 }).unwrap();
        assert_eq!((full.width(), full.height()), (8, 6));
        assert_eq!(full.pixel(0, 0), [10, 20, 30]);
        assert_eq!(full.pixel(3, 5), [10, 20, 30]);
        assert_eq!(full.pixel(6, 1), [0, 0, 0], "filler above edge map");
        assert_eq!(full.pixel(6, 4), [255, 255, 255]);
        assert_eq!(full.pixel(5, 4), [0, 0, 0]);
    }

    #[test]
    fn odd_height_column_matches_frame() {
        let edges = GrayImageU8::new(5, 4);
        let column = edge_column(&edges, 3).unwrap();
        assert_eq!((column.width(), column.height()), (5, 7));
    }

    #[test]
    fn mismatched_edge_map_is_rejected() {
        let annotated = ColorFrame::black(4, 6);
        let edges = GrayImageU8::new(4, 2);
        assert!(matches!(
            compose(&annotated, &edges, 3, &CompositeParams::default()),
            Err(FrameError::ShapeMismatch { .. })
        ));
    }
}
