//! Canny edge detector on an 8-bit intensity image.
//!
//! Sobel gradients (L1 norm by default) → direction-aligned NMS → double-threshold
//! hysteresis. Strong pixels (`mag > high`) seed the edge set, which then
//! grows through 8-connected candidate pixels (`mag > low` and locally
//! maximal). The result is a binary mask: 255 on edges, 0 elsewhere.
use super::grad::{sobel_gradients, GradientNorm};
use super::nms::{run_nms, NmsClass, NmsMap};
use crate::image::{GrayImageU8, ImageF32, ImageView};
use serde::{Deserialize, Serialize};

/// Value written to edge pixels of the output mask.
pub const EDGE: u8 = 255;

/// Hysteresis thresholds on the gradient magnitude.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdPair {
    pub low: u8,
    pub high: u8,
}

/// Run Canny with fixed thresholds.
pub fn canny<I: ImageView<Pixel = u8>>(
    src: &I,
    thresholds: ThresholdPair,
    norm: GradientNorm,
) -> GrayImageU8 {
    let (w, h) = (src.width(), src.height());
    if w == 0 || h == 0 {
        return GrayImageU8::new(w, h);
    }
    // Inverted thresholds are swapped.
    let (low, high) = if thresholds.low <= thresholds.high {
        (thresholds.low, thresholds.high)
    } else {
        (thresholds.high, thresholds.low)
    };

    let l0 = ImageF32::from_u8(src);
    let grad = sobel_gradients(&l0, norm);
    let map = run_nms(&grad, f32::from(low), f32::from(high));
    hysteresis(&map)
}

/// Grow strong seeds through connected candidates.
pub fn hysteresis(map: &NmsMap) -> GrayImageU8 {
    let (w, h) = (map.w, map.h);
    let mut out = GrayImageU8::new(w, h);
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for y in 0..h {
        for x in 0..w {
            if map.get(x, y) == NmsClass::Strong && out.get(x, y) == 0 {
                out.set(x, y, EDGE);
                stack.push((x, y));
            }
            while let Some((cx, cy)) = stack.pop() {
                let y0 = cy.saturating_sub(1);
                let y1 = (cy + 1).min(h - 1);
                let x0 = cx.saturating_sub(1);
                let x1 = (cx + 1).min(w - 1);
                for ny in y0..=y1 {
                    for nx in x0..=x1 {
                        if out.get(nx, ny) == 0 && map.get(nx, ny) != NmsClass::Suppressed {
                            out.set(nx, ny, EDGE);
                            stack.push((nx, ny));
                        }
                    }
                }
            }
        }
    }
    out
}
