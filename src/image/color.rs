//! Three-channel 8-bit colour frames (interleaved RGB, row-major, packed).
//!
//! `ColorFrame` owns a decoded video frame; `ColorView` borrows a band of
//! consecutive rows from one, which is how the region of interest is handed
//! to the filters without copying.
use super::u8::GrayImageU8;
use crate::error::FrameError;

/// Channels per colour pixel.
pub const CHANNELS: usize = 3;

/// Owned RGB frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorFrame {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl ColorFrame {
    /// Black frame of size `width × height`.
    pub fn black(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height * CHANNELS],
        }
    }

    /// Frame filled with a single colour.
    pub fn filled(width: usize, height: usize, rgb: [u8; 3]) -> Self {
        let mut data = Vec::with_capacity(width * height * CHANNELS);
        for _ in 0..width * height {
            data.extend_from_slice(&rgb);
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Wrap a decoded buffer with an explicit channel count.
    ///
    /// Fails fast on empty shapes, on any channel count other than three and
    /// on a buffer whose length disagrees with the shape.
    pub fn from_raw(
        width: usize,
        height: usize,
        channels: usize,
        data: Vec<u8>,
    ) -> Result<Self, FrameError> {
        if width == 0 || height == 0 {
            return Err(FrameError::EmptyFrame { width, height });
        }
        if channels != CHANNELS {
            return Err(FrameError::ChannelMismatch {
                expected: CHANNELS,
                found: channels,
            });
        }
        let expected = width * height * CHANNELS;
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

    /// Replicate a single-channel image across the three channels.
    pub fn from_gray(gray: &GrayImageU8) -> Self {
        let mut data = Vec::with_capacity(gray.width() * gray.height() * CHANNELS);
        for &v in gray.data() {
            data.extend_from_slice(&[v, v, v]);
        }
        Self {
            width: gray.width(),
            height: gray.height(),
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Interleaved bytes of row `y` (`width * 3` long).
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let len = self.width * CHANNELS;
        &self.data[y * len..(y + 1) * len]
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let i = (y * self.width + x) * CHANNELS;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, rgb: [u8; 3]) {
        let i = (y * self.width + x) * CHANNELS;
        self.data[i..i + CHANNELS].copy_from_slice(&rgb);
    }

    /// Borrow rows `[y0, height)` as a view.
    pub fn rows_from(&self, y0: usize) -> ColorView<'_> {
        let y0 = y0.min(self.height);
        let start = y0 * self.width * CHANNELS;
        ColorView {
            w: self.width,
            h: self.height - y0,
            data: &self.data[start..],
        }
    }

    /// Borrow the whole frame as a view.
    pub fn as_view(&self) -> ColorView<'_> {
        self.rows_from(0)
    }

    /// Stack `top` above `bottom`. Both must share the same width.
    pub fn vstack(top: &ColorFrame, bottom: &ColorFrame) -> Result<Self, FrameError> {
        if top.width != bottom.width {
            return Err(FrameError::ShapeMismatch {
                expected: (top.width, bottom.height),
                found: (bottom.width, bottom.height),
            });
        }
        let mut data = Vec::with_capacity(top.data.len() + bottom.data.len());
        data.extend_from_slice(&top.data);
        data.extend_from_slice(&bottom.data);
        Ok(Self {
            width: top.width,
            height: top.height + bottom.height,
            data,
        })
    }

    /// Place `left` and `right` side by side. Both must share the same height.
    pub fn hconcat(left: &ColorFrame, right: &ColorFrame) -> Result<Self, FrameError> {
        if left.height != right.height {
            return Err(FrameError::ShapeMismatch {
                expected: (right.width, left.height),
                found: (right.width, right.height),
            });
        }
        let width = left.width + right.width;
        let mut data = Vec::with_capacity(width * left.height * CHANNELS);
        for y in 0..left.height {
            data.extend_from_slice(left.row(y));
            data.extend_from_slice(right.row(y));
        }
        Ok(Self {
            width,
            height: left.height,
            data,
        })
    }
}

/// Borrowed band of rows from a `ColorFrame`.
#[derive(Clone, Copy, Debug)]
pub struct ColorView<'a> {
    pub w: usize,
    pub h: usize,
    pub data: &'a [u8],
}

impl<'a> ColorView<'a> {
    #[inline]
    pub fn row(&self, y: usize) -> &'a [u8] {
        let len = self.w * CHANNELS;
        &self.data[y * len..(y + 1) * len]
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let i = (y * self.w + x) * CHANNELS;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }
}
