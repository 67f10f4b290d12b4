//! 样本文件读取错误类型定义

use std::path::PathBuf;
use thiserror::Error;

/// 样本文件读取相关错误
#[derive(Debug, Error)]
pub enum DataError {
    /// 文件未找到
    #[error("文件未找到: {0}")]
    FileNotFound(PathBuf),

    /// IO 错误
    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    /// 行内容无法解析为两个浮点数
    #[error("第 {line} 行无法解析为 (x, y): {content:?}")]
    ParseLine { line: usize, content: String },
}
