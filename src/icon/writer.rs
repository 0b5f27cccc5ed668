//! # PNG 落盘模块
//!
//! ## 实现思路
//!
//! - 统一以 PNG 编码写出 RGBA8 像素缓冲，目标文件存在时直接覆盖。
//! - I/O 错误与编码错误分开映射，便于上层与调用环境区分失败原因。

use std::path::Path;

use image::{ImageFormat, error::ImageError as EncoderError};

use super::{IconConverter, IconError, NormalizedIcon};

impl IconConverter {
    /// 将归一化图标编码为 PNG 并写入磁盘。
    ///
    /// 目标路径已存在时覆盖写入。
    pub(super) fn save_png(&self, icon: &NormalizedIcon, path: &Path) -> Result<(), IconError> {
        icon.image
            .save_with_format(path, ImageFormat::Png)
            .map_err(|e| match e {
                EncoderError::IoError(io_err) => IconError::FileSystem(format!(
                    "无法写入输出文件 {}：{}",
                    path.display(),
                    io_err
                )),
                other => IconError::Encode(format!("PNG 编码失败：{}", other)),
            })?;

        log::debug!(
            "💾 已写入 {}（{}x{}）",
            path.display(),
            icon.width,
            icon.height
        );

        Ok(())
    }
}
