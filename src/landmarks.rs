//! 人脸关键点数据模型
//!
//! 外部关键点检测器按标准 68 点方案输出每张人脸的有序关键点序列。
//! 本模块只消费该输出，不做任何检测；点一经接收即视为不可变。
//!
//! 子区间约定（0 起始下标，左闭右开）：
//! - 左眼 `[36, 42)`，右眼 `[42, 48)`：各 6 点，角点-上睑-角点-下睑顺序
//! - 嘴部 `[48, 68)`：外轮廓 12 点 + 内轮廓 8 点

use serde::{Deserialize, Serialize};

use crate::constants::{LANDMARK_COUNT, LEFT_EYE, MOUTH, RIGHT_EYE};
use crate::error::MonitorError;

/// 二维关键点坐标
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// 欧氏距离
    pub fn distance(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// 一张人脸的完整 68 点关键点集合
///
/// 顺序即语义：下标决定哪些点在比值公式中配对，因此构造时校验长度，
/// 构造后不可修改。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point>", into = "Vec<Point>")]
pub struct LandmarkSet {
    points: Vec<Point>,
}

impl LandmarkSet {
    /// 由检测器输出构造；长度不是 68 则拒绝
    pub fn from_points(points: Vec<Point>) -> Result<Self, MonitorError> {
        if points.len() != LANDMARK_COUNT {
            return Err(MonitorError::MalformedLandmarks {
                expected: LANDMARK_COUNT,
                actual: points.len(),
            });
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// 左眼 6 点轮廓
    pub fn left_eye(&self) -> &[Point] {
        &self.points[LEFT_EYE]
    }

    /// 右眼 6 点轮廓
    pub fn right_eye(&self) -> &[Point] {
        &self.points[RIGHT_EYE]
    }

    /// 嘴部 20 点轮廓
    pub fn mouth(&self) -> &[Point] {
        &self.points[MOUTH]
    }
}

impl TryFrom<Vec<Point>> for LandmarkSet {
    type Error = MonitorError;

    fn try_from(points: Vec<Point>) -> Result<Self, Self::Error> {
        Self::from_points(points)
    }
}

impl From<LandmarkSet> for Vec<Point> {
    fn from(set: LandmarkSet) -> Self {
        set.points
    }
}
