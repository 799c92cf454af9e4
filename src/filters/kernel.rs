/// Trait implemented by separable 1D filters used for smoothing.
pub trait SeparableFilter {
    /// Return the 1D taps (in left-to-right order). The kernel is assumed to be
    /// symmetric around its centre, but the implementation does not rely on it.
    fn taps(&self) -> &[f32];

    fn radius(&self) -> usize {
        self.taps().len() / 2
    }
}

/// Sampled, normalised Gaussian kernel.
#[derive(Clone, Debug, PartialEq)]
pub struct GaussianKernel {
    taps: Vec<f32>,
}

impl GaussianKernel {
    /// Sample `exp(-x² / 2σ²)` at integer offsets around the centre and
    /// normalise the taps to sum to one.
    ///
    /// Returns `None` for an even or zero `size` or a non-positive `sigma`.
    pub fn new(size: usize, sigma: f32) -> Option<Self> {
        if size == 0 || size % 2 == 0 || !(sigma.is_finite() && sigma > 0.0) {
            return None;
        }
        let radius = (size / 2) as f32;
        let denom = 2.0 * f64::from(sigma) * f64::from(sigma);
        let raw: Vec<f64> = (0..size)
            .map(|i| {
                let x = f64::from(i as f32 - radius);
                (-x * x / denom).exp()
            })
            .collect();
        let sum: f64 = raw.iter().sum();
        let taps = raw.iter().map(|&v| (v / sum) as f32).collect();
        Some(Self { taps })
    }
}

impl SeparableFilter for GaussianKernel {
    #[inline]
    fn taps(&self) -> &[f32] {
        &self.taps
    }
}

/// Mirror `idx` into `[0, upper)` without repeating the border sample
/// (`-1 → 1`, `upper → upper - 2`).
pub fn reflect101(idx: isize, upper: usize) -> usize {
    if upper <= 1 {
        return 0;
    }
    let last = upper as isize - 1;
    let mut i = idx;
    while i < 0 || i > last {
        if i < 0 {
            i = -i;
        }
        if i > last {
            i = 2 * last - i;
        }
    }
    i as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gaussian_5x5_sigma_2_taps() {
        let kernel = GaussianKernel::new(5, 2.0).unwrap();
        let taps = kernel.taps();
        let sum: f32 = taps.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
        assert!((taps[2] - 0.2514).abs() < 1e-3, "centre tap {}", taps[2]);
        assert!((taps[0] - taps[4]).abs() < 1e-7);
        assert!((taps[1] - taps[3]).abs() < 1e-7);
        assert!(taps[0] < taps[1] && taps[1] < taps[2]);
        assert_eq!(kernel.radius(), 2);
    }

    #[test]
    fn invalid_kernels_are_rejected() {
        assert!(GaussianKernel::new(4, 2.0).is_none());
        assert!(GaussianKernel::new(0, 2.0).is_none());
        assert!(GaussianKernel::new(5, 0.0).is_none());
    }

    #[test]
    fn reflect101_mirrors_without_border_repeat() {
        assert_eq!(reflect101(-1, 5), 1);
        assert_eq!(reflect101(-2, 5), 2);
        assert_eq!(reflect101(5, 5), 3);
        assert_eq!(reflect101(6, 5), 2);
        assert_eq!(reflect101(3, 5), 3);
        assert_eq!(reflect101(-3, 2), 1);
        assert_eq!(reflect101(7, 1), 0);
    }
}
