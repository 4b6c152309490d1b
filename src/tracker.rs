//! 疲劳状态机
//!
//! 将含噪的逐帧 EAR 信号去抖为二值疲劳报警：EAR 连续低于阈值的帧数
//! 达到 `frame_threshold` 才置位 `is_fatigued`，单帧抖动不会触发。
//!
//! 复位策略为严格复位：任何一帧 `ear >= ear_threshold` 立即将计数器
//! 清零并解除报警（Drowsy → Alert）。状态机只有 Alert / Drowsy 两个
//! 状态，无终止状态，随监测会话存续。
//!
//! 阈值在构造时校验，非法配置直接拒绝，逐帧更新永不失败。

use serde::Serialize;

use crate::constants::{DEFAULT_EAR_THRESHOLD, DEFAULT_FRAME_THRESHOLD};
use crate::error::MonitorError;

/// 跟踪器阈值配置
#[derive(Debug, Clone, Copy)]
pub struct TrackerConfig {
    /// EAR 闭眼阈值，低于此值视为闭眼帧
    pub ear_threshold: f64,
    /// 连续闭眼帧数阈值，达到后报警
    pub frame_threshold: u32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            ear_threshold: DEFAULT_EAR_THRESHOLD,
            frame_threshold: DEFAULT_FRAME_THRESHOLD,
        }
    }
}

impl TrackerConfig {
    pub fn validate(&self) -> Result<(), MonitorError> {
        if !self.ear_threshold.is_finite() || self.ear_threshold <= 0.0 {
            return Err(MonitorError::InvalidConfiguration(format!(
                "ear_threshold must be a finite value > 0, got {}",
                self.ear_threshold
            )));
        }
        if self.frame_threshold == 0 {
            return Err(MonitorError::InvalidConfiguration(
                "frame_threshold must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// 单一时间线上的疲劳状态
///
/// 由 `FatigueStateTracker` 独占持有，仅经 `update` 变更；
/// 会话开始时初始化为 `{0, false}`。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FatigueState {
    /// 连续闭眼帧计数，EAR 持续低于阈值期间单调不减
    pub closed_frame_counter: u32,
    /// 去抖后的疲劳标记
    pub is_fatigued: bool,
}

/// 疲劳状态跟踪器
///
/// 每个被跟踪对象一个实例，由调用方的取帧循环独占驱动，
/// 每帧按序调用一次 `update`。内部无并发。
#[derive(Debug, Clone)]
pub struct FatigueStateTracker {
    config: TrackerConfig,
    state: FatigueState,
}

impl FatigueStateTracker {
    /// 构造跟踪器；阈值非法时返回 `InvalidConfiguration`
    pub fn new(config: TrackerConfig) -> Result<Self, MonitorError> {
        config.validate()?;
        Ok(Self {
            config,
            state: FatigueState::default(),
        })
    }

    /// 配置已由持有方校验过时的内部构造路径
    pub(crate) fn from_validated(config: TrackerConfig) -> Self {
        Self {
            config,
            state: FatigueState::default(),
        }
    }

    /// 消费一帧的 EAR 值，返回更新后的状态
    ///
    /// `ear` 为本帧双眼平均 EAR；0.0 是合法输入（视为闭眼帧）。
    /// 退化几何导致的"EAR 不可用"不应调用本方法——跳帧即可，
    /// 状态保持不变。
    pub fn update(&mut self, ear: f64) -> FatigueState {
        if ear < self.config.ear_threshold {
            self.state.closed_frame_counter += 1;
            if self.state.closed_frame_counter >= self.config.frame_threshold {
                self.state.is_fatigued = true;
            }
        } else {
            // 严格复位：开眼帧立即清零并解除报警
            self.state.closed_frame_counter = 0;
            self.state.is_fatigued = false;
        }

        self.state
    }

    /// 当前状态（不推进时间线）
    pub fn state(&self) -> FatigueState {
        self.state
    }

    pub fn config(&self) -> TrackerConfig {
        self.config
    }

    /// 重新初始化为会话起始状态 `{0, false}`
    pub fn reset(&mut self) {
        self.state = FatigueState::default();
    }
}
