//! # 应用图标转换工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! main.rs（日志初始化 + 退出码）
//!    ↓
//! icon::IconConverter（固定流程编排）
//!    ├─ loader.rs    文件读取 + 签名/体积校验
//!    ├─ pipeline.rs  解码 + RGBA 归一化 + Lanczos 缩放
//!    └─ writer.rs    PNG 编码落盘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`icon`] | 图标 RGBA 归一化与固定尺寸变体生成的完整流水线 |

pub mod icon;
