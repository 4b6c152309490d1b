//! EAR / MAR 几何比值计算
//!
//! 将原始关键点坐标转换为与眼睛闭合、嘴部张开相关的无量纲形状比值。
//! - 标准 6 点 EAR 公式: `EAR = (|p2-p6| + |p3-p5|) / (2 * |p1-p4|)`
//! - MAR 公式: `MAR = (|q3-q11| + |q5-q9|) / (2 * |q1-q7|)`
//!
//! 两个函数均为纯函数：相同输入产生比特级相同的输出，无任何状态。
//! 水平跨距退化（角点重合）时比值不可用，返回错误而非 0——
//! "不可用"与"完全闭眼"是两种不同的事实。

use serde::Serialize;

use crate::constants::{DEGENERATE_SPAN, EYE_POINT_COUNT, MIN_MOUTH_POINT_COUNT};
use crate::error::MonitorError;
use crate::landmarks::{LandmarkSet, Point};

/// 单帧比值结果：双眼平均 EAR + 可选 MAR
///
/// 逐帧重新计算，不保留历史。嘴部退化只丢弃 MAR，不影响 EAR。
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameRatios {
    pub ear: f64,
    pub mar: Option<f64>,
}

/// 标准 6 点 EAR
///
/// 输入为单眼 6 点轮廓，顺序为 p1..p6（0 起始下标配对 1/5、2/4、0/3）：
/// - p1, p4: 眼角点（水平方向）
/// - p2, p3: 上眼睑点
/// - p5, p6: 下眼睑点
///
/// 眼睛闭合时垂直跨距相对水平跨距收缩，EAR 趋向 0。
pub fn eye_aspect_ratio(eye: &[Point]) -> Result<f64, MonitorError> {
    if eye.len() != EYE_POINT_COUNT {
        return Err(MonitorError::MalformedLandmarks {
            expected: EYE_POINT_COUNT,
            actual: eye.len(),
        });
    }

    let horizontal = eye[0].distance(&eye[3]);
    if horizontal < DEGENERATE_SPAN {
        return Err(MonitorError::DegenerateGeometry {
            context: "eye",
            span: horizontal,
            min: DEGENERATE_SPAN,
        });
    }

    let vertical1 = eye[1].distance(&eye[5]);
    let vertical2 = eye[2].distance(&eye[4]);

    Ok((vertical1 + vertical2) / (2.0 * horizontal))
}

/// MAR（嘴部纵横比）
///
/// 输入为嘴部轮廓点（至少 11 点），0 起始下标配对 2/10、4/8，
/// 水平方向取 0/6（即嘴角点）。值越大表示嘴张得越开，是哈欠的代理信号。
pub fn mouth_aspect_ratio(mouth: &[Point]) -> Result<f64, MonitorError> {
    if mouth.len() < MIN_MOUTH_POINT_COUNT {
        return Err(MonitorError::MalformedLandmarks {
            expected: MIN_MOUTH_POINT_COUNT,
            actual: mouth.len(),
        });
    }

    let horizontal = mouth[0].distance(&mouth[6]);
    if horizontal < DEGENERATE_SPAN {
        return Err(MonitorError::DegenerateGeometry {
            context: "mouth",
            span: horizontal,
            min: DEGENERATE_SPAN,
        });
    }

    let vertical1 = mouth[2].distance(&mouth[10]);
    let vertical2 = mouth[4].distance(&mouth[8]);

    Ok((vertical1 + vertical2) / (2.0 * horizontal))
}

/// 计算一张人脸的单帧比值
///
/// EAR 取左右眼平均；任一眼退化则整张脸失败（由调用方跳过本帧）。
/// MAR 尽力而为：嘴部退化时置 `None`，不阻断 EAR 信号。
pub fn frame_ratios(set: &LandmarkSet) -> Result<FrameRatios, MonitorError> {
    let left = eye_aspect_ratio(set.left_eye())?;
    let right = eye_aspect_ratio(set.right_eye())?;
    let ear = (left + right) / 2.0;

    let mar = mouth_aspect_ratio(set.mouth()).ok();

    Ok(FrameRatios { ear, mar })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 上下睑与角点构成的开眼轮廓，垂直跨距 v、水平跨距 h
    fn eye_shape(h: f64, v: f64) -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(h / 3.0, v / 2.0),
            Point::new(2.0 * h / 3.0, v / 2.0),
            Point::new(h, 0.0),
            Point::new(2.0 * h / 3.0, -v / 2.0),
            Point::new(h / 3.0, -v / 2.0),
        ]
    }

    #[test]
    fn closed_eye_gives_zero() {
        // 上下睑点重合：垂直跨距为 0
        let eye = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(1.0, 0.0),
        ];
        assert_eq!(eye_aspect_ratio(&eye).unwrap(), 0.0);
    }

    #[test]
    fn square_aspect_gives_one() {
        let eye = eye_shape(2.0, 2.0);
        let ear = eye_aspect_ratio(&eye).unwrap();
        assert!((ear - 1.0).abs() < 1e-12);
    }

    #[test]
    fn coincident_corners_rejected() {
        let mut eye = eye_shape(2.0, 1.0);
        eye[3] = eye[0];
        let err = eye_aspect_ratio(&eye).unwrap_err();
        assert!(matches!(err, MonitorError::DegenerateGeometry { .. }));
    }

    #[test]
    fn wrong_point_count_rejected() {
        let eye = eye_shape(2.0, 1.0);
        assert!(eye_aspect_ratio(&eye[..5]).is_err());
    }

    #[test]
    fn mar_uses_corner_and_lip_pairs() {
        // 12 点外轮廓：嘴角在 0/6，垂直配对 2/10、4/8
        let mut mouth = vec![Point::new(0.0, 0.0); 12];
        mouth[0] = Point::new(0.0, 0.0);
        mouth[6] = Point::new(4.0, 0.0);
        mouth[2] = Point::new(1.5, 1.0);
        mouth[10] = Point::new(1.5, -1.0);
        mouth[4] = Point::new(2.5, 1.0);
        mouth[8] = Point::new(2.5, -1.0);
        let mar = mouth_aspect_ratio(&mouth).unwrap();
        assert!((mar - 0.5).abs() < 1e-12);
    }

    #[test]
    fn determinism_bitwise() {
        let eye = eye_shape(3.1, 1.7);
        let a = eye_aspect_ratio(&eye).unwrap();
        let b = eye_aspect_ratio(&eye).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }
}
