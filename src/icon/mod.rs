//! # 图标处理模块（icon）
//!
//! ## 设计思路
//!
//! 该模块将“文件读取 → 解码归一化 → 缩放 → PNG 落盘”按职责拆分为多个子模块，
//! 避免单文件膨胀与耦合。
//!
//! - `converter`：编排固定转换流程（归一化 + 三个尺寸变体）
//! - `loader`：负责文件读取与签名/体积安全校验
//! - `pipeline`：负责解码、像素限制、RGBA 归一化与缩放
//! - `writer`：负责 PNG 编码并写入磁盘
//! - `config/error/source`：配置、错误、中间数据模型
//!
//! ## 实现思路
//!
//! 对外仅暴露必要类型，内部细节保持 `mod` 私有。
//! 流程固定且同步执行：先把 `icon.png` 就地归一化为 RGBA，
//! 然后基于同一份内存中的归一化结果生成全部尺寸变体，
//! 避免依赖“先覆盖文件、再重新读取”的时序。
//!
//! ## 调用链
//!
//! ```text
//! main.rs
//!    ↓
//! converter.rs（流程编排 + 阶段耗时日志）
//!    ├─ loader.rs（文件读取 + 签名/体积校验）
//!    ├─ pipeline.rs（解码 + RGBA 归一化 + 缩放）
//!    └─ writer.rs（PNG 编码落盘）
//! ```

mod config;
mod converter;
mod error;
mod loader;
mod pipeline;
mod source;
mod writer;

pub use config::{IconConfig, IconVariant};
pub use converter::IconConverter;
pub use error::IconError;
pub use source::NormalizedIcon;

pub(crate) use source::RawIconData;
