//! Edge detection with thresholds derived from the live frame.
//!
//! Static Canny thresholds break when illumination changes between frames.
//! Here both thresholds are placed around the median intensity `M` of the
//! smoothed region: `low = round((1 − σ)·M)`, `high = round((1 + σ)·M)`,
//! clamped to `[0, 255]`. Nothing is cached between calls.
use super::canny::{canny, ThresholdPair};
use super::grad::GradientNorm;
use crate::image::{GrayImageU8, ImageView};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CannyParams {
    /// Relative width of the threshold band around the median.
    pub sigma: f32,
    /// Gradient magnitude the thresholds are compared against.
    pub norm: GradientNorm,
}

impl Default for CannyParams {
    fn default() -> Self {
        Self {
            sigma: 0.33,
            norm: GradientNorm::L1,
        }
    }
}

/// Edge map together with the statistics that produced it.
#[derive(Clone, Debug)]
pub struct AdaptiveEdges {
    pub median: f32,
    pub thresholds: ThresholdPair,
    pub edges: GrayImageU8,
}

/// Median intensity over every pixel of `src`.
///
/// For an even pixel count this is the mean of the two middle values, so the
/// result may end in `.5`. An empty image has median 0.
pub fn median_intensity<I: ImageView<Pixel = u8>>(src: &I) -> f32 {
    let mut hist = [0usize; 256];
    for row in src.rows() {
        for &v in row {
            hist[v as usize] += 1;
        }
    }
    let n: usize = hist.iter().sum();
    if n == 0 {
        return 0.0;
    }
    let lower = value_at_rank(&hist, (n - 1) / 2);
    let upper = value_at_rank(&hist, n / 2);
    (f32::from(lower) + f32::from(upper)) * 0.5
}

fn value_at_rank(hist: &[usize; 256], rank: usize) -> u8 {
    let mut seen = 0usize;
    for (value, &count) in hist.iter().enumerate() {
        seen += count;
        if seen > rank {
            return value as u8;
        }
    }
    u8::MAX
}

impl ThresholdPair {
    /// Place the hysteresis band around `median`.
    pub fn from_median(median: f32, sigma: f32) -> Self {
        let scale = |factor: f32| -> u8 {
            let v = (f64::from(factor) * f64::from(median)).round();
            v.clamp(0.0, 255.0) as u8
        };
        Self {
            low: scale(1.0 - sigma),
            high: scale(1.0 + sigma),
        }
    }
}

/// Median → thresholds → Canny.
pub fn detect_edges_adaptive(src: &GrayImageU8, params: &CannyParams) -> AdaptiveEdges {
    let median = median_intensity(src);
    let thresholds = ThresholdPair::from_median(median, params.sigma);
    log::debug!(
        "adaptive canny: median={median:.1} low={} high={}",
        thresholds.low,
        thresholds.high
    );
    let edges = canny(src, thresholds, params.norm);
    AdaptiveEdges {
        median,
        thresholds,
        edges,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_of_odd_and_even_counts() {
        let odd = GrayImageU8::from_raw(3, 1, vec![9, 1, 5]).unwrap();
        assert_eq!(median_intensity(&odd), 5.0);
        let even = GrayImageU8::from_raw(2, 2, vec![10, 0, 255, 11]).unwrap();
        assert_eq!(median_intensity(&even), 10.5);
    }

    #[test]
    fn thresholds_surround_the_median() {
        let pair = ThresholdPair::from_median(100.0, 0.33);
        assert_eq!(pair, ThresholdPair { low: 67, high: 133 });
        let pair = ThresholdPair::from_median(250.0, 0.33);
        assert_eq!(pair.high, 255);
        assert_eq!(ThresholdPair::from_median(0.0, 0.33), ThresholdPair { low: 0, high: 0 });
    }

    #[test]
    fn black_region_collapses_thresholds() {
        let black = GrayImageU8::new(32, 16);
        let out = detect_edges_adaptive(&black, &CannyParams::default());
        assert_eq!(out.median, 0.0);
        assert_eq!(out.thresholds, ThresholdPair { low: 0, high: 0 });
        assert_eq!(out.edges.count_nonzero(), 0);
    }

    #[test]
    fn uniform_region_has_no_edges() {
        let flat = GrayImageU8::filled(32, 16, 180);
        let out = detect_edges_adaptive(&flat, &CannyParams::default());
        assert_eq!(out.thresholds, ThresholdPair { low: 121, high: 239 });
        assert_eq!(out.edges.count_nonzero(), 0);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let mut img = GrayImageU8::filled(40, 20, 40);
        for y in 0..20 {
            for x in 18..22 {
                img.set(x, y, 210);
            }
        }
        let a = detect_edges_adaptive(&img, &CannyParams::default());
        let b = detect_edges_adaptive(&img, &CannyParams::default());
        assert_eq!(a.thresholds, b.thresholds);
        assert_eq!(a.edges, b.edges);
        assert!(a.edges.count_nonzero() > 0);
    }
}
