//! Owned single-channel f32 image in row-major layout.
//!
//! Working buffer for the filters and gradient stages, which accumulate in
//! floating point before results are quantised back to 8 bits.
use super::traits::{ImageView, ImageViewMut};

#[derive(Clone, Debug)]
pub struct ImageF32 {
    pub w: usize,
    pub h: usize,
    /// Row-major samples, `w * h` long.
    pub data: Vec<f32>,
}

impl ImageF32 {
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0.0; w * h],
        }
    }

    /// Promote an 8-bit image, keeping intensities on the 0..=255 scale.
    pub fn from_u8<I: ImageView<Pixel = u8>>(src: &I) -> Self {
        let mut out = Self::new(src.width(), src.height());
        for (y, row) in src.rows().enumerate() {
            for (dst, &px) in out.row_mut(y).iter_mut().zip(row) {
                *dst = f32::from(px);
            }
        }
        out
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[y * self.w + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: f32) {
        self.data[y * self.w + x] = v;
    }
}

impl ImageView for ImageF32 {
    type Pixel = f32;

    fn width(&self) -> usize {
        self.w
    }

    fn height(&self) -> usize {
        self.h
    }

    #[inline]
    fn row(&self, y: usize) -> &[f32] {
        &self.data[y * self.w..(y + 1) * self.w]
    }
}

impl ImageViewMut for ImageF32 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [f32] {
        &mut self.data[y * self.w..(y + 1) * self.w]
    }
}
