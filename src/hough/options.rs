use serde::{Deserialize, Serialize};

/// Parameters of the progressive probabilistic Hough transform.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HoughParams {
    /// Distance resolution of the accumulator in pixels.
    pub rho: f32,
    /// Angular resolution of the accumulator in degrees.
    pub theta_deg: f32,
    /// Votes a (rho, theta) cell needs before a segment is traced from it.
    pub threshold: u32,
    /// Minimum horizontal or vertical extent of an accepted segment (px).
    pub min_line_length: u32,
    /// Largest run of missing edge pixels bridged while tracing (px).
    pub max_line_gap: u32,
    /// Seed of the point visiting order.
    pub seed: u64,
    /// Stop after this many segments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_lines: Option<usize>,
}

impl Default for HoughParams {
    fn default() -> Self {
        Self {
            rho: 1.0,
            theta_deg: 1.0,
            threshold: 127,
            min_line_length: 10,
            max_line_gap: 250,
            seed: u64::MAX,
            max_lines: None,
        }
    }
}
