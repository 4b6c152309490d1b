use std::ops::Range;

/// 默认 EAR 闭眼阈值
pub const DEFAULT_EAR_THRESHOLD: f64 = 0.2;

/// 默认连续闭眼帧数阈值（达到后报警）
pub const DEFAULT_FRAME_THRESHOLD: u32 = 10;

/// 默认假定相机帧率（帧阈值按帧计数；此值仅用于文档化换算，不参与状态机）
pub const DEFAULT_ASSUMED_FPS: f64 = 30.0;

/// 标准 68 点人脸关键点总数
pub const LANDMARK_COUNT: usize = 68;

/// 左眼关键点区间（6 点轮廓）
pub const LEFT_EYE: Range<usize> = 36..42;

/// 右眼关键点区间（6 点轮廓）
pub const RIGHT_EYE: Range<usize> = 42..48;

/// 嘴部关键点区间（外轮廓 12 点 + 内轮廓 8 点）
pub const MOUTH: Range<usize> = 48..68;

/// 单眼轮廓点数
pub const EYE_POINT_COUNT: usize = 6;

/// MAR 计算所需的最少嘴部点数
pub const MIN_MOUTH_POINT_COUNT: usize = 11;

/// 水平跨距低于此值视为退化几何（关键点重合，比值不可用）
pub const DEGENERATE_SPAN: f64 = 1e-6;
