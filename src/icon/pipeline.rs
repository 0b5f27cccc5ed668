//! # 解码与缩放流水线模块
//!
//! ## 设计思路
//!
//! 将“字节 → 图像 → RGBA → 缩放”的过程集中管理，并在关键节点增加资源上限控制。
//! 优先做尺寸检查，再进行完整解码，降低异常输入触发高内存开销的风险。
//!
//! ## 实现思路
//!
//! 1. 猜测格式并读取 header 尺寸
//! 2. 按像素上限快速拒绝
//! 3. 完整解码并归一化为 RGBA8（已是 RGBA8 时不改动像素）
//! 4. 缩放走 `fast_image_resize`，失败时回退 `image::imageops::resize`

use std::io::Cursor;

use fast_image_resize as fr;
use image::{DynamicImage, GenericImageView, ImageBuffer, ImageFormat, Rgba, RgbaImage};

use super::{IconConverter, IconError, NormalizedIcon, RawIconData};

impl IconConverter {
    /// 将原始字节解码并归一化为 RGBA8 像素缓冲。
    ///
    /// 源已经是 RGBA8 时直接复用解码结果，保证像素值逐字节不变。
    pub(super) fn decode_rgba(&self, raw: RawIconData) -> Result<NormalizedIcon, IconError> {
        let _format: ImageFormat = image::guess_format(&raw.bytes)
            .map_err(|e| IconError::InvalidFormat(format!("不支持的图片格式：{}", e)))?;

        let (header_width, header_height) = Self::inspect_dimensions_from_memory(&raw.bytes)?;
        self.validate_pixel_limits(header_width, header_height)?;

        let decoded = image::load_from_memory(&raw.bytes)
            .map_err(|e| IconError::Decode(format!("图片解码失败：{}", e)))?;

        let (width, height) = decoded.dimensions();
        self.validate_pixel_limits(width, height)?;

        let source_color = decoded.color();
        let rgba = match decoded {
            DynamicImage::ImageRgba8(buffer) => buffer,
            other => other.to_rgba8(),
        };

        let expected_len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(4))
            .ok_or_else(|| IconError::ResourceLimit("图片尺寸导致内存溢出风险".to_string()))?;

        if rgba.as_raw().len() != expected_len {
            return Err(IconError::Decode("解码后像素数据长度异常".to_string()));
        }

        log::info!(
            "✅ 图标解码成功 - 来源: {} 尺寸: {}x{} 原始色彩: {:?}",
            raw.source,
            width,
            height,
            source_color
        );

        Ok(NormalizedIcon {
            width,
            height,
            image: rgba,
        })
    }

    /// 将归一化图标缩放到 `target_size x target_size`。
    pub(super) fn resize_rgba(
        &self,
        icon: &NormalizedIcon,
        target_size: u32,
    ) -> Result<NormalizedIcon, IconError> {
        if target_size == 0 {
            return Err(IconError::InvalidParameter(
                "目标尺寸必须为正整数".to_string(),
            ));
        }

        let resized = match Self::resize_with_fast_image_resize(
            &icon.image,
            target_size,
            self.config.resize_filter,
        ) {
            Ok(resized) => resized,
            Err(err) => {
                log::warn!("⚠️ fast_image_resize 缩放失败，回退 image::imageops::resize：{}", err);
                image::imageops::resize(
                    &icon.image,
                    target_size,
                    target_size,
                    self.config.resize_filter,
                )
            }
        };

        log::debug!(
            "🧩 缩放完成：{}x{} -> {}x{}（filter={:?}）",
            icon.width,
            icon.height,
            target_size,
            target_size,
            self.config.resize_filter
        );

        Ok(NormalizedIcon {
            width: target_size,
            height: target_size,
            image: resized,
        })
    }

    /// 仅通过内存中的图片头信息读取宽高。
    ///
    /// 用于在完整解码前做像素限制检查。
    fn inspect_dimensions_from_memory(bytes: &[u8]) -> Result<(u32, u32), IconError> {
        let cursor = Cursor::new(bytes);
        let reader = image::ImageReader::new(cursor)
            .with_guessed_format()
            .map_err(|e| IconError::InvalidFormat(format!("无法识别图片格式：{}", e)))?;

        reader
            .into_dimensions()
            .map_err(|e| IconError::InvalidFormat(format!("无法读取图片尺寸：{}", e)))
    }

    /// 校验像素数量是否超过配置上限。
    fn validate_pixel_limits(&self, width: u32, height: u32) -> Result<(), IconError> {
        let pixels = (width as u64)
            .checked_mul(height as u64)
            .ok_or_else(|| IconError::ResourceLimit("图片像素数溢出".to_string()))?;

        if pixels > self.config.max_decoded_pixels {
            return Err(IconError::ResourceLimit(format!(
                "图片像素过大：{} 像素（限制：{} 像素）",
                pixels, self.config.max_decoded_pixels
            )));
        }

        Ok(())
    }

    fn resize_with_fast_image_resize(
        image: &RgbaImage,
        target_size: u32,
        filter: image::imageops::FilterType,
    ) -> Result<RgbaImage, IconError> {
        let (src_width, src_height) = image.dimensions();

        let src_image = fr::images::Image::from_vec_u8(
            src_width,
            src_height,
            image.as_raw().clone(),
            fr::PixelType::U8x4,
        )
        .map_err(|e| IconError::Decode(format!("构建源图像缓冲失败：{}", e)))?;

        let mut dst_image = fr::images::Image::new(target_size, target_size, fr::PixelType::U8x4);

        let mut resizer = fr::Resizer::new();
        let options = fr::ResizeOptions::new().resize_alg(fr::ResizeAlg::Convolution(
            Self::to_fast_filter(filter),
        ));

        resizer
            .resize(&src_image, &mut dst_image, Some(&options))
            .map_err(|e| IconError::Decode(format!("fast_image_resize 执行失败：{}", e)))?;

        ImageBuffer::<Rgba<u8>, Vec<u8>>::from_raw(target_size, target_size, dst_image.into_vec())
            .ok_or_else(|| IconError::Decode("fast_image_resize 输出缓冲长度异常".to_string()))
    }

    fn to_fast_filter(filter: image::imageops::FilterType) -> fr::FilterType {
        match filter {
            image::imageops::FilterType::Nearest => fr::FilterType::Box,
            image::imageops::FilterType::Triangle => fr::FilterType::Bilinear,
            image::imageops::FilterType::CatmullRom => fr::FilterType::CatmullRom,
            image::imageops::FilterType::Gaussian => fr::FilterType::Mitchell,
            image::imageops::FilterType::Lanczos3 => fr::FilterType::Lanczos3,
        }
    }
}
