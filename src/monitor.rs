//! 会话级疲劳监测管线
//!
//! 取帧循环每帧调用一次 `process_frame`：对每张检测到的人脸计算
//! EAR/MAR，并驱动该人脸身份对应的状态机。人脸身份由外部检测器
//! 分配并保持稳定，各身份的疲劳状态互不干扰。
//!
//! 边界行为：
//! - 本帧无人脸：不触碰任何跟踪器状态（"无更新"而非 EAR=0）
//! - 某张脸几何退化：跳过该脸本帧，其跟踪器保持原状
//!
//! 管线为单线程同步设计，由调用方独占驱动；跨线程共享需外部加锁。

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::MonitorError;
use crate::geometry::{frame_ratios, FrameRatios};
use crate::landmarks::LandmarkSet;
use crate::tracker::{FatigueState, FatigueStateTracker, TrackerConfig};

/// 检测器分配的稳定人脸身份
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FaceId(pub u32);

/// 一帧内单张人脸的观测输入
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceObservation {
    pub id: FaceId,
    pub landmarks: LandmarkSet,
}

/// 单张人脸的单帧输出
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceReport {
    pub face_id: FaceId,
    pub ratios: FrameRatios,
    pub state: FatigueState,
}

/// 单帧处理结果，供渲染/上报方消费
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameReport {
    pub frame_index: u64,
    pub faces: Vec<FaceReport>,
    /// 本帧因几何退化被跳过的人脸数
    pub skipped_degenerate: u32,
}

/// 会话汇总
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub started_at: DateTime<Utc>,
    pub frames_processed: u64,
    pub faces_tracked: usize,
    pub degenerate_skips: u64,
    pub fatigued_faces: usize,
}

/// 会话级监测器，按人脸身份持有各自的状态机
pub struct FatigueMonitor {
    config: TrackerConfig,
    trackers: HashMap<FaceId, FatigueStateTracker>,
    frames_processed: u64,
    degenerate_skips: u64,
    started_at: DateTime<Utc>,
}

impl FatigueMonitor {
    /// 每个监测会话构造一次；阈值在此校验
    pub fn new(config: TrackerConfig) -> Result<Self, MonitorError> {
        config.validate()?;
        Ok(Self {
            config,
            trackers: HashMap::new(),
            frames_processed: 0,
            degenerate_skips: 0,
            started_at: Utc::now(),
        })
    }

    /// 处理一帧的全部人脸观测
    ///
    /// 首次见到的身份按会话配置新建跟踪器；已知身份继续其时间线。
    pub fn process_frame(&mut self, faces: &[FaceObservation]) -> FrameReport {
        let frame_index = self.frames_processed;
        self.frames_processed += 1;

        let mut reports = Vec::with_capacity(faces.len());
        let mut skipped: u32 = 0;
        let config = self.config;

        if faces.is_empty() {
            tracing::debug!(frame_index, "no face detected, state unchanged");
        }

        for face in faces {
            let ratios = match frame_ratios(&face.landmarks) {
                Ok(ratios) => ratios,
                Err(err) => {
                    skipped += 1;
                    self.degenerate_skips += 1;
                    tracing::warn!(
                        frame_index,
                        face_id = face.id.0,
                        %err,
                        "skipping face with unusable geometry"
                    );
                    continue;
                }
            };

            let tracker = self
                .trackers
                .entry(face.id)
                .or_insert_with(|| FatigueStateTracker::from_validated(config));

            let was_fatigued = tracker.state().is_fatigued;
            let state = tracker.update(ratios.ear);

            if state.is_fatigued != was_fatigued {
                tracing::info!(
                    frame_index,
                    face_id = face.id.0,
                    ear = ratios.ear,
                    fatigued = state.is_fatigued,
                    "fatigue state transition"
                );
            }

            reports.push(FaceReport {
                face_id: face.id,
                ratios,
                state,
            });
        }

        FrameReport {
            frame_index,
            faces: reports,
            skipped_degenerate: skipped,
        }
    }

    /// 某一身份的当前状态；从未见过则为 `None`
    pub fn face_state(&self, id: FaceId) -> Option<FatigueState> {
        self.trackers.get(&id).map(|t| t.state())
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            started_at: self.started_at,
            frames_processed: self.frames_processed,
            faces_tracked: self.trackers.len(),
            degenerate_skips: self.degenerate_skips,
            fatigued_faces: self
                .trackers
                .values()
                .filter(|t| t.state().is_fatigued)
                .count(),
        }
    }
}
