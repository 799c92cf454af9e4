use nalgebra::{Vector2, Vector3};
use serde::{Deserialize, Serialize};

/// Straight segment with integer pixel endpoints.
///
/// Segments leave the extractor in ROI coordinates; `shifted_down` moves them
/// into frame coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl LineSegment {
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn p0(&self) -> [i32; 2] {
        [self.x1, self.y1]
    }

    pub fn p1(&self) -> [i32; 2] {
        [self.x2, self.y2]
    }

    /// Euclidean length in pixels.
    pub fn length(&self) -> f32 {
        let dx = (self.x2 - self.x1) as f32;
        let dy = (self.y2 - self.y1) as f32;
        (dx * dx + dy * dy).sqrt()
    }

    /// Larger of the horizontal and vertical extents.
    pub fn span(&self) -> i32 {
        (self.x2 - self.x1).abs().max((self.y2 - self.y1).abs())
    }

    /// Same segment moved by `(dx, dy)`.
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x1 + dx, self.y1 + dy, self.x2 + dx, self.y2 + dy)
    }

    /// ROI → frame mapping for a region starting at `row_offset`.
    pub fn shifted_down(&self, row_offset: usize) -> Self {
        self.translated(0, row_offset as i32)
    }

    /// Line representation: ax + by + c = 0, with sqrt(a^2+b^2)=1.
    ///
    /// Degenerate (single point) segments return `None`.
    pub fn line(&self) -> Option<Vector3<f32>> {
        let a = (self.y2 - self.y1) as f32;
        let b = (self.x1 - self.x2) as f32;
        let c = (self.x2 * self.y1 - self.x1 * self.y2) as f32;
        let norm = (a * a + b * b).sqrt();
        (norm > 0.0).then(|| Vector3::new(a / norm, b / norm, c / norm))
    }

    /// Distance from `(x, y)` to the closest point of the segment.
    pub fn distance_to(&self, x: f32, y: f32) -> f32 {
        let p0 = Vector2::new(self.x1 as f32, self.y1 as f32);
        let p = Vector2::new(x, y);
        let Some(line) = self.line() else {
            return (p - p0).norm();
        };
        let d = Vector2::new(-line.y, line.x);
        let t = (p - p0).dot(&d).clamp(0.0, self.length());
        if t <= 0.0 || t >= self.length() {
            let p1 = Vector2::new(self.x2 as f32, self.y2 as f32);
            return (p - p0).norm().min((p - p1).norm());
        }
        (line.x * x + line.y * y + line.z).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_of_axis_aligned_segment() {
        let seg = LineSegment::new(2, 3, 2, 13);
        assert_eq!(seg.length(), 10.0);
        assert_eq!(seg.span(), 10);
        let line = seg.line().unwrap();
        assert!((line.x.abs() - 1.0).abs() < 1e-6);
        assert!(line.y.abs() < 1e-6);
        assert!((seg.distance_to(4.0, 8.0) - 2.0).abs() < 1e-6);
        assert!((seg.distance_to(2.0, 16.0) - 3.0).abs() < 1e-6);
    }

    #[test]
    fn shifting_moves_only_rows() {
        let seg = LineSegment::new(10, 0, 40, 25);
        assert_eq!(seg.shifted_down(240), LineSegment::new(10, 240, 40, 265));
    }

    #[test]
    fn degenerate_segment_measures_point_distance() {
        let seg = LineSegment::new(5, 5, 5, 5);
        assert!(seg.line().is_none());
        assert!((seg.distance_to(8.0, 9.0) - 5.0).abs() < 1e-6);
    }
}
