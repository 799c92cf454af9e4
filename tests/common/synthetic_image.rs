use lane_detector::image::ColorFrame;
use lane_detector::LineSegment;

pub const DARK: [u8; 3] = [30, 30, 30];
pub const BRIGHT: [u8; 3] = [220, 220, 220];
pub const GREEN: [u8; 3] = [0, 255, 0];

/// Vertical bright band `[x0, x0 + width)` over frame rows `rows`.
#[derive(Clone, Copy, Debug)]
pub struct Stripe {
    pub x0: usize,
    pub width: usize,
    pub rows: (usize, usize),
}

impl Stripe {
    pub fn center(&self) -> i32 {
        (self.x0 + self.width / 2) as i32
    }
}

/// Two parallel 200 px lane markings on a dark road, both in the lower half.
pub fn two_lane_stripes() -> [Stripe; 2] {
    [
        Stripe {
            x0: 198,
            width: 5,
            rows: (260, 460),
        },
        Stripe {
            x0: 438,
            width: 5,
            rows: (260, 460),
        },
    ]
}

/// Generates a dark frame with the given bright stripes painted on top.
pub fn road_frame(width: usize, height: usize, stripes: &[Stripe]) -> ColorFrame {
    assert!(width > 0 && height > 0, "frame dimensions must be positive");
    let mut frame = ColorFrame::filled(width, height, DARK);
    for stripe in stripes {
        for y in stripe.rows.0..stripe.rows.1.min(height) {
            for x in stripe.x0..(stripe.x0 + stripe.width).min(width) {
                frame.set_pixel(x, y, BRIGHT);
            }
        }
    }
    frame
}

/// Bright band `width` px wide centred on the frame-space line `from → to`.
#[derive(Clone, Copy, Debug)]
pub struct SlantedStripe {
    pub from: (i32, i32),
    pub to: (i32, i32),
    pub width: f32,
}

impl SlantedStripe {
    /// Centre line in the coordinates of an ROI starting at `row_offset`.
    pub fn center_line(&self, row_offset: usize) -> LineSegment {
        LineSegment::new(self.from.0, self.from.1, self.to.0, self.to.1)
            .translated(0, -(row_offset as i32))
    }
}

/// Two markings converging towards the horizon, as seen from the car.
pub fn converging_stripes() -> [SlantedStripe; 2] {
    [
        SlantedStripe {
            from: (100, 470),
            to: (280, 260),
            width: 5.0,
        },
        SlantedStripe {
            from: (560, 470),
            to: (380, 260),
            width: 5.0,
        },
    ]
}

/// Generates a dark frame with the given slanted stripes painted on top.
pub fn slanted_road_frame(width: usize, height: usize, stripes: &[SlantedStripe]) -> ColorFrame {
    let mut frame = road_frame(width, height, &[]);
    for stripe in stripes {
        let line = stripe.center_line(0);
        let half = stripe.width / 2.0;
        for y in 0..height {
            for x in 0..width {
                if line.distance_to(x as f32, y as f32) <= half {
                    frame.set_pixel(x, y, BRIGHT);
                }
            }
        }
    }
    frame
}
