//! Owned single-channel 8-bit image.
//!
//! Grayscale intensities and binary edge masks (0 / 255) both use this type.
use super::traits::{ImageView, ImageViewMut};
use crate::error::FrameError;

/// Owned, tightly packed 8-bit grayscale buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayImageU8 {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl GrayImageU8 {
    /// Zero-filled (black) buffer of size `width × height`.
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, 0)
    }

    /// Buffer filled with a constant intensity.
    pub fn filled(width: usize, height: usize, value: u8) -> Self {
        Self {
            width,
            height,
            data: vec![value; width * height],
        }
    }

    /// Wrap raw row-major bytes, checking the length against the shape.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self, FrameError> {
        let expected = width * height;
        if data.len() != expected {
            return Err(FrameError::BufferSize {
                expected,
                found: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: u8) {
        self.data[y * self.width + x] = v;
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Number of non-zero pixels.
    pub fn count_nonzero(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }
}

impl ImageView for GrayImageU8 {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }
}

impl ImageViewMut for GrayImageU8 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.width;
        &mut self.data[start..start + self.width]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_rejects_wrong_length() {
        let err = GrayImageU8::from_raw(4, 4, vec![0; 15]).unwrap_err();
        assert_eq!(
            err,
            FrameError::BufferSize {
                expected: 16,
                found: 15
            }
        );
    }

    #[test]
    fn rows_walk_row_major_data() {
        let img = GrayImageU8::from_raw(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let rows: Vec<&[u8]> = img.rows().collect();
        assert_eq!(rows, [&[1, 2, 3][..], &[4, 5, 6][..]]);
        assert_eq!(img.get(1, 1), 5);
        assert_eq!(img.count_nonzero(), 6);
    }
}
