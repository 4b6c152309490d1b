use thiserror::Error;

#[derive(Debug, Error)]
pub enum MonitorError {
    /// Threshold parameters outside their valid domain. Rejected at
    /// construction time, never per frame.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A landmark pair has zero separation, so the ratio is undefined.
    /// The affected face must be skipped for this frame; this is distinct
    /// from "eyes fully closed" (EAR 0).
    #[error("degenerate geometry: {context} horizontal span {span} below {min}")]
    DegenerateGeometry {
        context: &'static str,
        span: f64,
        min: f64,
    },

    /// A landmark set does not match the expected point layout.
    #[error("malformed landmark set: expected {expected} points, got {actual}")]
    MalformedLandmarks { expected: usize, actual: usize },

    /// Replay recording could not be read (binary only).
    #[error("failed to read replay file: {0}")]
    ReplayIo(#[from] std::io::Error),

    /// Replay recording could not be parsed (binary only).
    #[error("failed to parse replay file: {0}")]
    ReplayFormat(#[from] serde_json::Error),
}
