//! # 应用图标转换工具 — 程序入口
//!
//! 本文件仅负责日志初始化与退出码处理。
//! 固定转换流程见 `icon` 模块文档。

use icon_converter::icon::{IconConfig, IconConverter};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let converter = IconConverter::new(IconConfig::default());

    if let Err(err) = converter.run() {
        log::error!("图标转换失败: {err}");
        eprintln!("图标转换失败: {err}");
        std::process::exit(1);
    }
}
