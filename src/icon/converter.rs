//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `IconConverter` 只负责流程编排与配置持有，不关心各阶段细节。
//! 固定流程为：
//! 1. 就地归一化源图标（`icon.png` → RGBA PNG 覆盖写回）
//! 2. 基于同一份内存中的归一化结果，依次生成全部尺寸变体
//!
//! ## 实现思路
//!
//! - 归一化只执行一次，变体统一从内存中的归一化图像派生，
//!   不依赖“覆盖文件后再重新读取”的时序。
//! - 任一步骤失败立即中止，已写出的文件保留在磁盘上。
//! - 记录 `load/decode/save` 阶段耗时与总耗时，便于打包脚本诊断。
//! - 操作完成的确认信息走标准输出，诊断日志走 `log`。

use std::path::Path;
use std::time::Instant;

use super::{IconConfig, IconError, NormalizedIcon};

/// 图标转换器。
///
/// 持有配置并编排各子模块实现完整流程。
pub struct IconConverter {
    pub(super) config: IconConfig,
}

impl IconConverter {
    /// 根据配置创建转换器。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use icon_converter::icon::{IconConfig, IconConverter};
    ///
    /// let converter = IconConverter::new(IconConfig::default());
    /// converter.run()?;
    /// # Ok::<(), icon_converter::icon::IconError>(())
    /// ```
    pub fn new(config: IconConfig) -> Self {
        Self { config }
    }

    /// 读取 `input`，归一化为 RGBA 后以 PNG 写到 `output`。
    ///
    /// 输出尺寸与源一致；`output` 已存在时覆盖。
    /// 返回归一化结果，供后续尺寸变体复用。
    pub fn normalize_and_save(
        &self,
        input: &Path,
        output: &Path,
    ) -> Result<NormalizedIcon, IconError> {
        let load_start = Instant::now();
        let raw = self.load_raw(input)?;
        let load_elapsed = load_start.elapsed();

        let decode_start = Instant::now();
        let normalized = self.decode_rgba(raw)?;
        let decode_elapsed = decode_start.elapsed();

        let save_start = Instant::now();
        self.save_png(&normalized, output)?;
        let save_elapsed = save_start.elapsed();

        log::info!(
            "✅ 归一化完成 - load={}ms decode={}ms save={}ms",
            load_elapsed.as_millis(),
            decode_elapsed.as_millis(),
            save_elapsed.as_millis()
        );
        println!(
            "已转换 {} 为 RGBA 格式 -> {}",
            input.display(),
            output.display()
        );

        Ok(normalized)
    }

    /// 读取 `source`，归一化后缩放到 `size x size` 并以 PNG 写到 `output`。
    pub fn resize_and_save(
        &self,
        source: &Path,
        size: u32,
        output: &Path,
    ) -> Result<(), IconError> {
        let raw = self.load_raw(source)?;
        let normalized = self.decode_rgba(raw)?;
        self.resize_normalized_and_save(&normalized, size, output)
    }

    /// 执行固定转换流程：就地归一化 + 全部尺寸变体。
    pub fn run(&self) -> Result<(), IconError> {
        let total_start = Instant::now();

        let normalized = self.normalize_and_save(&self.config.source_path, &self.config.source_path)?;

        let output_dir = self
            .config
            .source_path
            .parent()
            .unwrap_or_else(|| Path::new(""));

        for variant in &self.config.variants {
            let output = output_dir.join(&variant.file_name);
            self.resize_normalized_and_save(&normalized, variant.size, &output)?;
        }

        log::info!(
            "✅ 图标转换完成 - outputs={} total={}ms",
            1 + self.config.variants.len(),
            total_start.elapsed().as_millis()
        );

        Ok(())
    }

    fn resize_normalized_and_save(
        &self,
        normalized: &NormalizedIcon,
        size: u32,
        output: &Path,
    ) -> Result<(), IconError> {
        let resized = self.resize_rgba(normalized, size)?;
        self.save_png(&resized, output)?;

        println!("已生成 {}（{}x{}）", output.display(), size, size);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use image::{ColorType, DynamicImage, ImageBuffer, ImageFormat, ImageReader};

    use super::*;
    use crate::icon::IconVariant;

    fn unique_temp_dir() -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock error")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("icon-converter-run-test-{nanos}"));
        std::fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    fn write_rgb_icon(path: &Path, width: u32, height: u32) {
        let img = ImageBuffer::from_fn(width, height, |x, y| {
            image::Rgb([(x % 255) as u8, (y % 255) as u8, ((x + y) % 255) as u8])
        });
        let mut cursor = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(img)
            .write_to(&mut cursor, ImageFormat::Png)
            .expect("encode test icon");
        std::fs::write(path, cursor.into_inner()).expect("write test icon");
    }

    fn config_for(dir: &Path) -> IconConfig {
        let mut config = IconConfig::default();
        config.source_path = dir.join("icon.png");
        config
    }

    fn assert_rgba_png(path: &Path, width: u32, height: u32) {
        let decoded = ImageReader::open(path)
            .expect("open output")
            .decode()
            .expect("decode output");
        assert_eq!(decoded.color(), ColorType::Rgba8, "{} 应为 RGBA8", path.display());
        assert_eq!(decoded.width(), width);
        assert_eq!(decoded.height(), height);
    }

    #[test]
    fn run_produces_all_four_rgba_outputs_from_rgb_source() {
        let dir = unique_temp_dir();
        write_rgb_icon(&dir.join("icon.png"), 512, 512);

        let converter = IconConverter::new(config_for(&dir));
        converter.run().expect("run should succeed");

        assert_rgba_png(&dir.join("icon.png"), 512, 512);
        assert_rgba_png(&dir.join("32x32.png"), 32, 32);
        assert_rgba_png(&dir.join("128x128.png"), 128, 128);
        assert_rgba_png(&dir.join("128x128@2x.png"), 256, 256);

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn run_is_idempotent_over_its_own_outputs() {
        let dir = unique_temp_dir();
        write_rgb_icon(&dir.join("icon.png"), 200, 200);

        let converter = IconConverter::new(config_for(&dir));
        converter.run().expect("first run should succeed");
        let first_icon = std::fs::read(dir.join("icon.png")).expect("read first icon");

        converter.run().expect("second run should succeed");

        assert_rgba_png(&dir.join("icon.png"), 200, 200);
        assert_rgba_png(&dir.join("32x32.png"), 32, 32);
        assert_rgba_png(&dir.join("128x128.png"), 128, 128);
        assert_rgba_png(&dir.join("128x128@2x.png"), 256, 256);

        // 第二次归一化是对已 RGBA 源的无损直通，字节应完全一致
        let second_icon = std::fs::read(dir.join("icon.png")).expect("read second icon");
        assert_eq!(first_icon, second_icon);

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn run_with_missing_source_fails_and_writes_nothing() {
        let dir = unique_temp_dir();

        let converter = IconConverter::new(config_for(&dir));
        let result = converter.run();

        assert!(matches!(result, Err(IconError::FileSystem(_))));
        assert!(!dir.join("icon.png").exists());
        assert!(!dir.join("32x32.png").exists());
        assert!(!dir.join("128x128.png").exists());
        assert!(!dir.join("128x128@2x.png").exists());

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn run_aborts_on_first_invalid_variant_but_keeps_earlier_outputs() {
        let dir = unique_temp_dir();
        write_rgb_icon(&dir.join("icon.png"), 64, 64);

        let mut config = config_for(&dir);
        config.variants = vec![
            IconVariant::new(32, "32x32.png"),
            IconVariant::new(0, "broken.png"),
            IconVariant::new(128, "128x128.png"),
        ];

        let converter = IconConverter::new(config);
        let result = converter.run();

        assert!(matches!(result, Err(IconError::InvalidParameter(_))));
        // 失败前的输出保留，失败后的步骤不再执行
        assert!(dir.join("32x32.png").exists());
        assert!(!dir.join("broken.png").exists());
        assert!(!dir.join("128x128.png").exists());

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn normalize_and_save_keeps_source_dimensions() {
        let dir = unique_temp_dir();
        let input = dir.join("icon.png");
        let output = dir.join("normalized.png");
        write_rgb_icon(&input, 33, 21);

        let converter = IconConverter::new(config_for(&dir));
        let normalized = converter
            .normalize_and_save(&input, &output)
            .expect("normalize should succeed");

        assert_eq!(normalized.width, 33);
        assert_eq!(normalized.height, 21);
        assert_rgba_png(&output, 33, 21);

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn resize_and_save_loads_from_path_and_writes_square_output() {
        let dir = unique_temp_dir();
        let input = dir.join("icon.png");
        let output = dir.join("96x96.png");
        write_rgb_icon(&input, 300, 180);

        let converter = IconConverter::new(config_for(&dir));
        converter
            .resize_and_save(&input, 96, &output)
            .expect("resize should succeed");

        assert_rgba_png(&output, 96, 96);

        let _ = std::fs::remove_dir_all(dir);
    }
}
