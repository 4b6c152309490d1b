//! 疲劳监测核心库
//!
//! 基于面部关键点几何的驾驶疲劳信号管线：外部关键点检测器每帧提供
//! 68 点人脸关键点，本库计算眼部纵横比 (EAR) 与嘴部纵横比 (MAR)，
//! 并通过连续帧计数器将含噪的逐帧信号去抖为稳定的疲劳状态。
//!
//! ## 模块
//! - `landmarks`: 68 点关键点布局与眼部/嘴部子区间
//! - `geometry`: EAR / MAR 纯函数计算
//! - `tracker`: 疲劳状态机（连续闭眼帧计数 + 严格复位策略）
//! - `monitor`: 会话级管线，按人脸身份分别跟踪
//! - `config` / `logging`: 环境变量配置与 tracing 初始化

pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod landmarks;
pub mod logging;
pub mod monitor;
pub mod tracker;

pub use error::MonitorError;
pub use geometry::{frame_ratios, FrameRatios};
pub use landmarks::{LandmarkSet, Point};
pub use monitor::{FaceId, FaceObservation, FatigueMonitor, FrameReport};
pub use tracker::{FatigueState, FatigueStateTracker, TrackerConfig};
