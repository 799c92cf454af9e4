//! Progressive probabilistic Hough transform (Matas, Galambos & Kittler).
//!
//! Edge pixels are visited in a seeded pseudo-random order. Each visited
//! pixel votes into a (theta, rho) accumulator; as soon as one of its cells
//! reaches the vote threshold, a corridor is traced from the pixel in both
//! directions along that line, bridging runs of at most `max_line_gap`
//! missing pixels. Pixels on the traced corridor are removed from the mask
//! so they cannot start or join another segment. When the corridor is long
//! enough, the pixels on it that already voted withdraw their votes and the
//! segment is emitted.
use super::options::HoughParams;
use super::segment::LineSegment;
use crate::error::FrameError;
use crate::image::{GrayImageU8, ImageView};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

const SHIFT: u32 = 16;

/// Stepping rule along a traced line, in 16.16 fixed point on the minor axis.
#[derive(Clone, Copy, Debug)]
struct Walk {
    /// Major axis is x (one pixel per step) rather than y.
    x_major: bool,
    x0: i64,
    y0: i64,
    dx: i64,
    dy: i64,
}

impl Walk {
    fn new(x: usize, y: usize, a: f32, b: f32) -> Self {
        let (x, y) = (x as i64, y as i64);
        let half = 1i64 << (SHIFT - 1);
        if a.abs() > b.abs() {
            Self {
                x_major: true,
                x0: x,
                y0: (y << SHIFT) + half,
                dx: if a > 0.0 { 1 } else { -1 },
                dy: (f64::from(b) * f64::from(1u32 << SHIFT) / f64::from(a.abs())).round() as i64,
            }
        } else {
            Self {
                x_major: false,
                x0: (x << SHIFT) + half,
                y0: y,
                dx: (f64::from(a) * f64::from(1u32 << SHIFT) / f64::from(b.abs())).round() as i64,
                dy: if b > 0.0 { 1 } else { -1 },
            }
        }
    }

    /// Pixel reached after `step` steps in direction `sign` (±1).
    #[inline]
    fn pixel(&self, sign: i64, step: i64) -> (i64, i64) {
        let x = self.x0 + sign * step * self.dx;
        let y = self.y0 + sign * step * self.dy;
        if self.x_major {
            (x, y >> SHIFT)
        } else {
            (x >> SHIFT, y)
        }
    }
}

/// Accumulator state for one edge mask.
pub struct ProbabilisticHough<'a> {
    edges: &'a GrayImageU8,
    params: HoughParams,
    trig: Vec<(f32, f32)>,
    num_rho: usize,
    accum: Vec<u32>,
    mask: Vec<bool>,
    voted: Vec<bool>,
}

impl<'a> ProbabilisticHough<'a> {
    /// Prepare the accumulator; fails on non-positive resolutions.
    pub fn new(edges: &'a GrayImageU8, params: HoughParams) -> Result<Self, FrameError> {
        if !(params.rho.is_finite() && params.rho > 0.0) {
            return Err(FrameError::InvalidParameter {
                name: "hough.rho",
                value: f64::from(params.rho),
            });
        }
        if !(params.theta_deg.is_finite() && params.theta_deg > 0.0 && params.theta_deg <= 180.0) {
            return Err(FrameError::InvalidParameter {
                name: "hough.theta_deg",
                value: f64::from(params.theta_deg),
            });
        }

        let (w, h) = (edges.width(), edges.height());
        let theta = params.theta_deg.to_radians();
        let irho = 1.0 / params.rho;
        let num_angle = ((std::f32::consts::PI / theta).round() as usize).max(1);
        let num_rho = (((w + h) * 2 + 1) as f32 / params.rho).round() as usize;
        let trig = (0..num_angle)
            .map(|n| {
                let angle = n as f32 * theta;
                (angle.cos() * irho, angle.sin() * irho)
            })
            .collect();

        let mut mask = vec![false; w * h];
        for (y, row) in edges.rows().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                mask[y * w + x] = v != 0;
            }
        }

        Ok(Self {
            edges,
            params,
            trig,
            num_rho,
            accum: vec![0; num_angle * num_rho],
            voted: vec![false; mask.len()],
            mask,
        })
    }

    #[inline]
    fn cell(&self, n: usize, x: i64, y: i64) -> Option<usize> {
        let (cos, sin) = self.trig[n];
        let r = (x as f32 * cos + y as f32 * sin).round() as i64 + (self.num_rho as i64 - 1) / 2;
        (0..self.num_rho as i64)
            .contains(&r)
            .then(|| n * self.num_rho + r as usize)
    }

    /// Vote for `(x, y)` and return the strongest touched cell.
    fn vote(&mut self, x: usize, y: usize) -> (u32, usize) {
        self.voted[y * self.edges.width() + x] = true;
        let mut best = (0u32, 0usize);
        for n in 0..self.trig.len() {
            if let Some(idx) = self.cell(n, x as i64, y as i64) {
                self.accum[idx] += 1;
                if self.accum[idx] > best.0 {
                    best = (self.accum[idx], n);
                }
            }
        }
        best
    }

    fn unvote(&mut self, x: i64, y: i64) {
        for n in 0..self.trig.len() {
            if let Some(idx) = self.cell(n, x, y) {
                self.accum[idx] -= 1;
            }
        }
    }

    #[inline]
    fn inside(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.edges.width() && (y as usize) < self.edges.height()
    }

    #[inline]
    fn mask_index(&self, x: i64, y: i64) -> usize {
        y as usize * self.edges.width() + x as usize
    }

    /// Furthest mask pixel reachable in each direction without exceeding the gap.
    fn trace_ends(&self, walk: &Walk) -> [(i64, i64); 2] {
        let mut ends = [walk.pixel(1, 0); 2];
        for (k, sign) in [1i64, -1].into_iter().enumerate() {
            let mut gap = 0u32;
            for step in 0.. {
                let (x, y) = walk.pixel(sign, step);
                if !self.inside(x, y) {
                    break;
                }
                if self.mask[self.mask_index(x, y)] {
                    gap = 0;
                    ends[k] = (x, y);
                } else {
                    gap += 1;
                    if gap > self.params.max_line_gap {
                        break;
                    }
                }
            }
        }
        ends
    }

    /// Clear the corridor up to each end, withdrawing cast votes when `accepted`.
    fn clear_corridor(&mut self, walk: &Walk, ends: &[(i64, i64); 2], accepted: bool) {
        for (k, sign) in [1i64, -1].into_iter().enumerate() {
            for step in 0.. {
                let (x, y) = walk.pixel(sign, step);
                if !self.inside(x, y) {
                    break;
                }
                let idx = self.mask_index(x, y);
                if self.mask[idx] {
                    if accepted && self.voted[idx] {
                        self.unvote(x, y);
                    }
                    self.mask[idx] = false;
                }
                if (x, y) == ends[k] {
                    break;
                }
            }
        }
    }

    /// Run the transform over every edge pixel.
    pub fn extract(mut self) -> Vec<LineSegment> {
        let w = self.edges.width();
        let mut points: Vec<(usize, usize)> = self
            .mask
            .iter()
            .enumerate()
            .filter_map(|(i, &on)| on.then_some((i % w, i / w)))
            .collect();
        let mut rng = StdRng::seed_from_u64(self.params.seed);
        points.shuffle(&mut rng);

        let min_len = i64::from(self.params.min_line_length);
        let mut segments = Vec::new();
        for (x, y) in points {
            if !self.mask[y * w + x] {
                continue;
            }
            let (votes, n) = self.vote(x, y);
            if votes < self.params.threshold {
                continue;
            }

            let (cos, sin) = self.trig[n];
            let walk = Walk::new(x, y, -sin, cos);
            let ends = self.trace_ends(&walk);
            let accepted = (ends[1].0 - ends[0].0).abs() >= min_len
                || (ends[1].1 - ends[0].1).abs() >= min_len;
            self.clear_corridor(&walk, &ends, accepted);

            if accepted {
                segments.push(LineSegment::new(
                    ends[0].0 as i32,
                    ends[0].1 as i32,
                    ends[1].0 as i32,
                    ends[1].1 as i32,
                ));
                if self.params.max_lines.is_some_and(|max| segments.len() >= max) {
                    break;
                }
            }
        }
        segments
    }
}

/// Extract line segments from a binary edge mask (non-zero = edge).
///
/// An empty result is the normal outcome for frames without lines.
pub fn extract_segments(
    edges: &GrayImageU8,
    params: &HoughParams,
) -> Result<Vec<LineSegment>, FrameError> {
    let segments = ProbabilisticHough::new(edges, *params)?.extract();
    log::debug!(
        "hough: {} edge px -> {} segments",
        edges.count_nonzero(),
        segments.len()
    );
    Ok(segments)
}
