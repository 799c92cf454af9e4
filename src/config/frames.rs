use crate::detector::LaneParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const FRAME_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

#[derive(Debug, Deserialize)]
pub struct FrameToolConfig {
    /// Explicit frame list, processed in the given order.
    #[serde(default)]
    pub frames: Vec<PathBuf>,
    /// Directory whose image files are appended in file-name order.
    #[serde(default, rename = "input_dir")]
    pub input_dir: Option<PathBuf>,
    /// `false` shows frames unchanged instead of running lane detection.
    #[serde(default = "default_detect")]
    pub detect: bool,
    #[serde(default)]
    pub params: LaneParams,
    pub output: FrameOutputConfig,
}

fn default_detect() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct FrameOutputConfig {
    /// Rendered frames are written here as `<index>_<frame stem>.png`.
    #[serde(rename = "dir")]
    pub dir: PathBuf,
    #[serde(default, rename = "summary_json")]
    pub summary_json: Option<PathBuf>,
}

impl FrameToolConfig {
    /// Ordered list of frames to process.
    pub fn resolve_frames(&self) -> Result<Vec<PathBuf>, String> {
        let mut frames = self.frames.clone();
        if let Some(dir) = &self.input_dir {
            frames.extend(list_frames(dir)?);
        }
        if frames.is_empty() {
            return Err("No input frames: set \"frames\" or \"input_dir\"".to_string());
        }
        Ok(frames)
    }
}

/// Image files directly inside `dir`, sorted by file name.
pub fn list_frames(dir: &Path) -> Result<Vec<PathBuf>, String> {
    let entries = fs::read_dir(dir)
        .map_err(|e| format!("Failed to read frame directory {}: {e}", dir.display()))?;
    let mut frames = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| format!("Failed to list {}: {e}", dir.display()))?
            .path();
        if path.is_file() && is_frame_file(&path) {
            frames.push(path);
        }
    }
    frames.sort();
    Ok(frames)
}

fn is_frame_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| FRAME_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

pub fn load_config(path: &Path) -> Result<FrameToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_uses_defaults() {
        let json = r#"{ "frames": ["a.png", "b.png"], "output": { "dir": "out" } }"#;
        let cfg: FrameToolConfig = serde_json::from_str(json).unwrap();
        assert!(cfg.detect);
        assert_eq!(cfg.params, LaneParams::default());
        assert!(cfg.output.summary_json.is_none());
        assert_eq!(
            cfg.resolve_frames().unwrap(),
            vec![PathBuf::from("a.png"), PathBuf::from("b.png")]
        );
    }

    #[test]
    fn passthrough_and_overrides_parse() {
        let json = r#"{
            "frames": ["f.jpg"],
            "detect": false,
            "params": { "overlay": { "thickness": 1 } },
            "output": { "dir": "out", "summary_json": "out/summary.json" }
        }"#;
        let cfg: FrameToolConfig = serde_json::from_str(json).unwrap();
        assert!(!cfg.detect);
        assert_eq!(cfg.params.overlay.thickness, 1);
        assert_eq!(cfg.params.overlay.color, [0, 255, 0]);
        assert_eq!(
            cfg.output.summary_json,
            Some(PathBuf::from("out/summary.json"))
        );
    }

    #[test]
    fn empty_frame_list_is_an_error() {
        let cfg: FrameToolConfig = serde_json::from_str(r#"{ "output": { "dir": "o" } }"#).unwrap();
        assert!(cfg.resolve_frames().is_err());
    }

    #[test]
    fn directory_listing_filters_and_sorts() {
        let dir = std::env::temp_dir().join(format!("lane_frames_list_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        for name in ["b.png", "a.JPG", "notes.txt"] {
            fs::write(dir.join(name), b"x").unwrap();
        }
        let frames = list_frames(&dir).unwrap();
        let names: Vec<String> = frames
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a.JPG", "b.png"]);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_config_reports_path() {
        let err = load_config(Path::new("/nonexistent/lanes.json")).unwrap_err();
        assert!(err.starts_with("Failed to read config /nonexistent/lanes.json"));
    }
}
