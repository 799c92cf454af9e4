//! I/O helpers for frames and JSON.
//!
//! - `load_color_frame`: read a PNG/JPEG/etc. into an owned RGB frame.
//! - `save_color_frame`: write a `ColorFrame` to disk (format from extension).
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::color::ColorFrame;
use image::{DynamicImage, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to 8-bit RGB.
pub fn load_color_frame(path: &Path) -> Result<ColorFrame, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8();
    from_rgb_image(img).map_err(|e| format!("Failed to decode {}: {e}", path.display()))
}

/// Save a colour frame; the file extension selects the encoder.
pub fn save_color_frame(frame: &ColorFrame, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let image = to_rgb_image(frame).ok_or_else(|| "Failed to create image buffer".to_string())?;
    DynamicImage::ImageRgb8(image)
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

/// Copy a frame into an `image` crate buffer.
pub fn to_rgb_image(frame: &ColorFrame) -> Option<RgbImage> {
    RgbImage::from_raw(
        frame.width() as u32,
        frame.height() as u32,
        frame.data().to_vec(),
    )
}

/// Take ownership of an `image` crate buffer as a frame.
pub fn from_rgb_image(img: RgbImage) -> Result<ColorFrame, crate::error::FrameError> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    ColorFrame::from_raw(width, height, 3, img.into_raw())
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_image_conversion_keeps_pixels() {
        let mut frame = ColorFrame::black(3, 2);
        frame.set_pixel(2, 1, [10, 20, 30]);
        let img = to_rgb_image(&frame).expect("buffer matches shape");
        assert_eq!(img.get_pixel(2, 1).0, [10, 20, 30]);
        let back = from_rgb_image(img).expect("valid frame");
        assert_eq!(back, frame);
    }
}
