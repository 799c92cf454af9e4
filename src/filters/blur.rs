use super::kernel::{reflect101, SeparableFilter};
use crate::image::{GrayImageU8, ImageF32, ImageView, ImageViewMut};

/// Convolve an 8-bit image with a separable kernel (rows, then columns).
///
/// Borders are mirrored with `reflect101`. Accumulation happens in f32 and the
/// result is rounded back to u8.
pub fn separable_blur_u8<F: SeparableFilter>(src: &GrayImageU8, filter: &F) -> GrayImageU8 {
    let (w, h) = (src.width(), src.height());
    let mut out = GrayImageU8::new(w, h);
    if w == 0 || h == 0 {
        return out;
    }
    let taps = filter.taps();
    assert!(!taps.is_empty(), "filter must provide at least one tap");
    let radius = filter.radius() as isize;

    let mut horiz = ImageF32::new(w, h);
    for y in 0..h {
        filter_row(src.row(y), horiz.row_mut(y), taps, radius);
    }

    for y in 0..h {
        let rows: Vec<&[f32]> = (0..taps.len())
            .map(|k| horiz.row(reflect101(y as isize + k as isize - radius, h)))
            .collect();
        let dst = out.row_mut(y);
        for (x, px) in dst.iter_mut().enumerate() {
            let acc: f32 = taps.iter().zip(&rows).map(|(&t, row)| t * row[x]).sum();
            *px = acc.round().clamp(0.0, 255.0) as u8;
        }
    }
    out
}

fn filter_row(row: &[u8], out: &mut [f32], taps: &[f32], radius: isize) {
    let n = row.len();
    for (x, dst) in out.iter_mut().enumerate() {
        let mut acc = 0.0f32;
        for (k, &tap) in taps.iter().enumerate() {
            let sx = reflect101(x as isize + k as isize - radius, n);
            acc += tap * f32::from(row[sx]);
        }
        *dst = acc;
    }
}
