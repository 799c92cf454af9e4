//! Non-maximum suppression on gradient magnitude with direction alignment.
//!
//! For each pixel the gradient direction is quantised to one of four axes
//! (0°, 45°, 90°, 135°) and the magnitude is compared with its two neighbours
//! along that axis. Survivors above the low threshold become hysteresis
//! candidates; survivors above the high threshold are strong seeds.
//!
//! Ties on the horizontal and vertical axes are broken towards the first
//! neighbour (`m > n1 && m >= n2`) so that a symmetric ridge spread over two
//! pixels keeps exactly one of them. Pixels outside the image count as zero
//! magnitude.
use crate::edges::grad::Grad;
use crate::image::ImageView;

const TAN_22_5_DEG: f32 = 0.414_213_57;
const TAN_67_5_DEG: f32 = 2.414_213_6;

/// Per-pixel classification after suppression.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum NmsClass {
    Suppressed = 0,
    Candidate = 1,
    Strong = 2,
}

/// Dense classification map, row-major, `w × h`.
#[derive(Clone, Debug)]
pub struct NmsMap {
    pub w: usize,
    pub h: usize,
    pub classes: Vec<NmsClass>,
}

impl NmsMap {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> NmsClass {
        self.classes[y * self.w + x]
    }
}

#[inline]
fn mag_at(grad: &Grad, x: isize, y: isize) -> f32 {
    if x < 0 || y < 0 || x >= grad.mag.w as isize || y >= grad.mag.h as isize {
        0.0
    } else {
        grad.mag.get(x as usize, y as usize)
    }
}

/// Classify every pixel of `grad` against the `low`/`high` thresholds.
pub fn run_nms(grad: &Grad, low: f32, high: f32) -> NmsMap {
    let w = grad.mag.w;
    let h = grad.mag.h;
    let mut classes = vec![NmsClass::Suppressed; w * h];

    for y in 0..h {
        let mag_row = grad.mag.row(y);
        let gx_row = grad.gx.row(y);
        let gy_row = grad.gy.row(y);
        let yi = y as isize;

        for x in 0..w {
            let m = mag_row[x];
            if m <= low {
                continue;
            }
            let xi = x as isize;
            let gx = gx_row[x];
            let gy = gy_row[x];
            let abs_gx = gx.abs();
            let abs_gy = gy.abs();

            let is_max = if abs_gy < abs_gx * TAN_22_5_DEG {
                m > mag_at(grad, xi - 1, yi) && m >= mag_at(grad, xi + 1, yi)
            } else if abs_gy > abs_gx * TAN_67_5_DEG {
                m > mag_at(grad, xi, yi - 1) && m >= mag_at(grad, xi, yi + 1)
            } else {
                // y grows downwards, so equal signs point along the main diagonal.
                let s = if (gx < 0.0) != (gy < 0.0) { -1 } else { 1 };
                m > mag_at(grad, xi - s, yi - 1) && m > mag_at(grad, xi + s, yi + 1)
            };
            if !is_max {
                continue;
            }

            classes[y * w + x] = if m > high {
                NmsClass::Strong
            } else {
                NmsClass::Candidate
            };
        }
    }

    NmsMap { w, h, classes }
}
