//! # 配置模块
//!
//! ## 设计思路
//!
//! 将所有“可调策略”集中到 `IconConfig`，保证流程行为可观测、可测试。
//! 工具本身不接收命令行参数，`Default` 即打包脚本使用的固定配置。
//!
//! ## 实现思路
//!
//! - `Default` 固定输入为 `icon.png`，变体为 32 / 128 / 256（@2x）。
//! - 缩放滤镜固定为 Lanczos3，降低缩放时的锯齿。
//! - 保留文件体积与解码像素上限，在完整解码前尽早拒绝异常输入。

use std::path::PathBuf;

use image::imageops::FilterType;

/// 单个尺寸变体：目标边长与输出文件名。
#[derive(Debug, Clone)]
pub struct IconVariant {
    /// 目标边长（像素，输出为正方形）。
    pub size: u32,
    /// 输出文件名（相对于源图标所在目录）。
    pub file_name: String,
}

impl IconVariant {
    pub fn new(size: u32, file_name: &str) -> Self {
        Self {
            size,
            file_name: file_name.to_string(),
        }
    }
}

/// 图标转换配置。
///
/// 字段覆盖了输入路径、变体列表、缩放策略与资源上限。
#[derive(Debug, Clone)]
pub struct IconConfig {
    /// 源图标路径，同时也是就地归一化的输出路径。
    pub source_path: PathBuf,
    /// 固定尺寸变体列表，按顺序依次生成。
    pub variants: Vec<IconVariant>,
    /// 缩放滤镜策略。
    pub resize_filter: FilterType,
    /// 读取原始字节时允许的最大文件体积（字节）。
    pub max_file_size: u64,
    /// 解码后的像素上限（`width * height`）。
    pub max_decoded_pixels: u64,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from("icon.png"),
            variants: vec![
                IconVariant::new(32, "32x32.png"),
                IconVariant::new(128, "128x128.png"),
                // @2x 约定：256 像素的高密度变体沿用 128x128 命名
                IconVariant::new(256, "128x128@2x.png"),
            ],
            resize_filter: FilterType::Lanczos3,
            max_file_size: 50 * 1024 * 1024,
            max_decoded_pixels: 40_000_000,
        }
    }
}
