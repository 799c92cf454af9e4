use lane_detector::config::{load_config, FrameToolConfig};
use lane_detector::detector::{FrameTransform, LaneOverlay, Passthrough};
use lane_detector::diagnostics::FrameTrace;
use lane_detector::image::io::{load_color_frame, save_color_frame, write_json_file};
use serde::Serialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FrameRecord {
    input: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace: Option<FrameTrace>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RunSummary {
    transform: &'static str,
    processed: usize,
    skipped: usize,
    frames: Vec<FrameRecord>,
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;
    let frames = config.resolve_frames()?;
    fs::create_dir_all(&config.output.dir).map_err(|e| {
        format!(
            "Failed to create output dir {}: {e}",
            config.output.dir.display()
        )
    })?;

    let transform: Box<dyn FrameTransform> = if config.detect {
        Box::new(LaneOverlay::new(config.params))
    } else {
        Box::new(Passthrough)
    };
    log::info!(
        "processing {} frames with the {} transform",
        frames.len(),
        transform.name()
    );

    let mut records = Vec::with_capacity(frames.len());
    for (index, input) in frames.iter().enumerate() {
        let record = match render_frame(transform.as_ref(), &config, index, input) {
            Ok((output, trace)) => {
                if let Some(trace) = &trace {
                    log::info!("{}: {}", input.display(), trace.summary());
                }
                FrameRecord {
                    input: input.clone(),
                    output: Some(output),
                    trace,
                    error: None,
                }
            }
            Err(err) => {
                log::warn!("skipping {}: {err}", input.display());
                FrameRecord {
                    input: input.clone(),
                    output: None,
                    trace: None,
                    error: Some(err),
                }
            }
        };
        records.push(record);
    }

    let processed = records.iter().filter(|r| r.error.is_none()).count();
    let summary = RunSummary {
        transform: transform.name(),
        processed,
        skipped: records.len() - processed,
        frames: records,
    };
    println!(
        "Rendered {} of {} frames into {}",
        summary.processed,
        frames.len(),
        config.output.dir.display()
    );
    if let Some(path) = &config.output.summary_json {
        write_json_file(path, &summary)?;
        println!("Summary written to {}", path.display());
    }
    Ok(())
}

fn render_frame(
    transform: &dyn FrameTransform,
    config: &FrameToolConfig,
    index: usize,
    input: &Path,
) -> Result<(PathBuf, Option<FrameTrace>), String> {
    let frame = load_color_frame(input)?;
    let rendered = transform.apply(frame).map_err(|e| e.to_string())?;
    let output = config.output.dir.join(output_name(index, input));
    save_color_frame(&rendered.image, &output)?;
    Ok((output, rendered.trace))
}

fn output_name(index: usize, input: &Path) -> String {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "frame".to_string());
    format!("{index:05}_{stem}.png")
}

fn usage() -> String {
    "Usage: lane_frames <config.json>".to_string()
}
