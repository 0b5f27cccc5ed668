//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 使用单一错误枚举承载图标链路中的所有错误来源，避免字符串拼接式错误处理。
//! 通过 `thiserror` 保持人类可读错误，同时让调用侧可按分支匹配。

/// 图标处理统一错误类型。
///
/// 任一环节出错即中止整个转换流程，错误最终由 `main` 转换为非零退出码。
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("解码错误：{0}")]
    Decode(String),

    #[error("格式错误：{0}")]
    InvalidFormat(String),

    #[error("编码错误：{0}")]
    Encode(String),

    #[error("文件错误：{0}")]
    FileSystem(String),

    #[error("参数错误：{0}")]
    InvalidParameter(String),

    #[error("资源限制：{0}")]
    ResourceLimit(String),
}

impl From<IconError> for String {
    /// 兼容部分仍使用字符串错误的调用点。
    fn from(error: IconError) -> Self {
        error.to_string()
    }
}
