//! JSON configuration of the command-line tools.

pub mod frames;

pub use frames::{load_config, FrameToolConfig};
