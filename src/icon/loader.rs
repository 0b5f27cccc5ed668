//! # 加载与校验模块
//!
//! ## 设计思路
//!
//! 统一处理源图标的原始字节加载，并在“尽可能早”的阶段执行输入校验。
//! 目标是尽快失败，减少不必要内存与 CPU 消耗。
//!
//! ## 实现思路
//!
//! - 文件：存在性 + metadata 体积限制 + 读取。
//! - 读取后先做文件签名（magic bytes）校验，再进入解码流水线。

use std::path::Path;

use super::{IconConverter, IconError, RawIconData};

impl IconConverter {
    /// 从本地路径加载图标原始字节。
    pub(super) fn load_raw(&self, path: &Path) -> Result<RawIconData, IconError> {
        log::info!("📁 开始读取图标 - 路径: {}", path.display());

        if !path.exists() {
            return Err(IconError::FileSystem(format!(
                "文件不存在：{}",
                path.display()
            )));
        }

        let metadata = std::fs::metadata(path)
            .map_err(|e| IconError::FileSystem(format!("无法读取文件信息：{}", e)))?;

        if metadata.len() > self.config.max_file_size {
            return Err(IconError::ResourceLimit(format!(
                "文件过大：{:.2} MB（限制：{:.2} MB）",
                metadata.len() as f64 / 1024.0 / 1024.0,
                self.config.max_file_size as f64 / 1024.0 / 1024.0
            )));
        }

        let bytes = std::fs::read(path)
            .map_err(|e| IconError::FileSystem(format!("无法读取图标文件：{}", e)))?;
        Self::validate_image_signature(&bytes)?;

        Ok(RawIconData {
            bytes,
            source: path.display().to_string(),
        })
    }

    /// 通过文件签名（magic bytes）校验输入是否为图片。
    fn validate_image_signature(bytes: &[u8]) -> Result<(), IconError> {
        if bytes.is_empty() {
            return Err(IconError::InvalidFormat("图标内容为空".to_string()));
        }

        let kind = infer::get(bytes)
            .ok_or_else(|| IconError::InvalidFormat("无法识别图标类型".to_string()))?;

        if kind.matcher_type() != infer::MatcherType::Image {
            return Err(IconError::InvalidFormat(format!(
                "文件签名不是图片类型：{}",
                kind.mime_type()
            )));
        }

        Ok(())
    }
}
