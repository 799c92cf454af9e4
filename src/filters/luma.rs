//! Colour to intensity conversion.
//!
//! BT.601 weights `0.299 R + 0.587 G + 0.114 B` in 14-bit fixed point with
//! round-half-up, which keeps the result bit-exact across platforms.
use crate::image::{ColorView, GrayImageU8, ImageViewMut};

const SHIFT: u32 = 14;
const R_WEIGHT: u32 = 4899;
const G_WEIGHT: u32 = 9617;
const B_WEIGHT: u32 = 1868;
const HALF: u32 = 1 << (SHIFT - 1);

#[inline]
pub fn luma(rgb: [u8; 3]) -> u8 {
    let [r, g, b] = rgb;
    ((u32::from(r) * R_WEIGHT + u32::from(g) * G_WEIGHT + u32::from(b) * B_WEIGHT + HALF)
        >> SHIFT) as u8
}

/// Convert an RGB view to a single-channel intensity image.
pub fn rgb_to_gray(view: &ColorView<'_>) -> GrayImageU8 {
    let mut out = GrayImageU8::new(view.w, view.h);
    for y in 0..view.h {
        let src = view.row(y);
        for (dst, px) in out.row_mut(y).iter_mut().zip(src.chunks_exact(3)) {
            *dst = luma([px[0], px[1], px[2]]);
        }
    }
    out
}
