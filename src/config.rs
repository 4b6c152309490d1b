use std::env;
use std::str::FromStr;

use crate::constants::{DEFAULT_ASSUMED_FPS, DEFAULT_EAR_THRESHOLD, DEFAULT_FRAME_THRESHOLD};
use crate::tracker::TrackerConfig;

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub enable_file_logs: bool,
    pub log_dir: String,
    /// EAR value below which a frame counts as eyes-closed
    pub ear_threshold: f64,
    /// Consecutive closed frames before the fatigue alarm fires
    pub frame_threshold: u32,
    /// Camera cadence the frame_threshold was tuned against. The counter
    /// is frame-based, not time-based, so deployments changing the FPS
    /// should retune frame_threshold; this value only documents the
    /// assumption in logs.
    pub assumed_fps: f64,
    /// Path to a recorded landmark session for the replay binary
    pub replay_path: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            log_level: env_or("RUST_LOG", "info"),
            enable_file_logs: env_or_bool("ENABLE_FILE_LOGS", false),
            log_dir: env_or("LOG_DIR", "./logs"),
            ear_threshold: env_or_parse("EAR_THRESHOLD", DEFAULT_EAR_THRESHOLD),
            frame_threshold: env_or_parse("FRAME_THRESHOLD", DEFAULT_FRAME_THRESHOLD),
            assumed_fps: env_or_parse("ASSUMED_FPS", DEFAULT_ASSUMED_FPS),
            replay_path: env_or("REPLAY_PATH", "./data/session.json"),
        }
    }

    pub fn tracker_config(&self) -> TrackerConfig {
        TrackerConfig {
            ear_threshold: self.ear_threshold,
            frame_threshold: self.frame_threshold,
        }
    }
}

pub fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

pub fn env_or_parse<T>(key: &str, default: T) -> T
where
    T: FromStr + Copy,
{
    match env::var(key) {
        Ok(value) => value.parse().unwrap_or(default),
        Err(_) => default,
    }
}

pub fn env_or_bool(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(value) => matches!(value.to_lowercase().as_str(), "1" | "true" | "yes" | "on"),
        Err(_) => default,
    }
}
