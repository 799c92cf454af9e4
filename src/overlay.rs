//! Drawing detected segments back onto the full frame.
//!
//! Segments arrive in ROI coordinates and are shifted down by the ROI row
//! offset before rasterisation. `ColorFrame` implements the `imageproc`
//! canvas, so strokes are drawn straight into the frame bytes and clipped to
//! its bounds.
use crate::hough::LineSegment;
use crate::image::ColorFrame;
use image::Rgb;
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut, draw_polygon_mut, Canvas};
use imageproc::point::Point;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OverlayParams {
    /// Stroke colour (RGB).
    pub color: [u8; 3],
    /// Stroke width in pixels.
    pub thickness: u32,
}

impl Default for OverlayParams {
    fn default() -> Self {
        Self {
            color: [0, 255, 0],
            thickness: 2,
        }
    }
}

/// Draw every ROI-space segment onto `frame`, shifted down by `row_offset`.
pub fn draw_segments(
    frame: &mut ColorFrame,
    segments: &[LineSegment],
    row_offset: usize,
    params: &OverlayParams,
) {
    for seg in segments {
        draw_segment(frame, &seg.shifted_down(row_offset), params);
    }
}

/// Draw one frame-space segment.
///
/// A width of 1 draws a Bresenham line. Wider strokes fill the quad offset
/// `thickness / 2` to either side of the segment and add round caps, so width
/// 2 paints a 3-pixel band on horizontal and vertical lines.
pub fn draw_segment(frame: &mut ColorFrame, seg: &LineSegment, params: &OverlayParams) {
    if frame.width() == 0 || frame.height() == 0 {
        return;
    }
    let color = Rgb(params.color);
    let start = (seg.x1 as f32, seg.y1 as f32);
    let end = (seg.x2 as f32, seg.y2 as f32);
    if params.thickness <= 1 {
        draw_line_segment_mut(frame, start, end, color);
        return;
    }

    let radius = params.thickness as f32 / 2.0;
    let cap = radius as i32;
    draw_filled_circle_mut(frame, (seg.x1, seg.y1), cap, color);
    let len = seg.length();
    if len == 0.0 {
        return;
    }
    draw_filled_circle_mut(frame, (seg.x2, seg.y2), cap, color);

    // Normal scaled to the half-width; rounding keeps the long sides apart.
    let nx = -(end.1 - start.1) / len * radius;
    let ny = (end.0 - start.0) / len * radius;
    let offset = |(x, y): (f32, f32), side: f32| {
        Point::new((x + side * nx).round() as i32, (y + side * ny).round() as i32)
    };
    let quad = [
        offset(start, 1.0),
        offset(end, 1.0),
        offset(end, -1.0),
        offset(start, -1.0),
    ];
    draw_polygon_mut(frame, &quad, color);
}

impl Canvas for ColorFrame {
    type Pixel = Rgb<u8>;

    fn dimensions(&self) -> (u32, u32) {
        (self.width() as u32, self.height() as u32)
    }

    fn get_pixel(&self, x: u32, y: u32) -> Rgb<u8> {
        Rgb(self.pixel(x as usize, y as usize))
    }

    fn draw_pixel(&mut self, x: u32, y: u32, color: Rgb<u8>) {
        self.set_pixel(x as usize, y as usize, color.0);
    }
}
