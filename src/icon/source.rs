//! # 中间数据模型
//!
//! ## 设计思路
//!
//! 将“已读取但未解码的字节”和“已归一化的像素数据”解耦：
//! - `RawIconData` 表示已加载但未解码的字节
//! - `NormalizedIcon` 表示已转换为 RGBA8 的像素缓冲

use image::RgbaImage;

/// 加载阶段输出：原始字节与来源路径。
pub(crate) struct RawIconData {
    /// 原始图片字节。
    pub(crate) bytes: Vec<u8>,
    /// 来源路径（用于日志与诊断）。
    pub(crate) source: String,
}

/// 归一化阶段输出：RGBA8 像素缓冲。
///
/// 不变式：`image.as_raw().len() == width * height * 4`。
pub struct NormalizedIcon {
    /// 图像宽度（像素）。
    pub width: u32,
    /// 图像高度（像素）。
    pub height: u32,
    /// RGBA8 像素数据。
    pub image: RgbaImage,
}
