use std::fs;
use std::process::ExitCode;

use serde::Deserialize;

use fatigue_monitor::config::Config;
use fatigue_monitor::logging::init_tracing;
use fatigue_monitor::monitor::{FaceObservation, FatigueMonitor};
use fatigue_monitor::MonitorError;

/// One recorded video frame: the landmark sets the external detector
/// produced, tagged with stable face identities.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReplayFrame {
    #[serde(default)]
    faces: Vec<FaceObservation>,
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let config = Config::from_env();
    init_tracing(&config);

    // The frame threshold is frame-count based; log the cadence it was
    // tuned against so operators can interpret the debounce window.
    tracing::info!(
        ear_threshold = config.ear_threshold,
        frame_threshold = config.frame_threshold,
        assumed_fps = config.assumed_fps,
        replay = %config.replay_path,
        "Starting fatigue-monitor replay"
    );

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "replay failed");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<(), MonitorError> {
    let mut monitor = FatigueMonitor::new(config.tracker_config())?;

    let raw = fs::read_to_string(&config.replay_path)?;
    let frames: Vec<ReplayFrame> = serde_json::from_str(&raw)?;

    for frame in &frames {
        monitor.process_frame(&frame.faces);
    }

    let summary = monitor.summary();
    tracing::info!(
        frames = summary.frames_processed,
        faces = summary.faces_tracked,
        fatigued = summary.fatigued_faces,
        "replay finished"
    );
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
