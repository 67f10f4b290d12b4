//! 样本数据源模块
//!
//! 提供两列文本格式的训练样本读取：每行一对以空白分隔的 (x, y)。
//!
//! 训练与评估需要对同一数据源各自独立地遍历一遍，因此
//! [`SampleFile::iter`] 每次调用都会重新打开文件（可重开，不可续读）。
//!
//! # 使用示例
//!
//! ```ignore
//! use adaline_stream::data::SampleFile;
//!
//! let samples = SampleFile::new("train.txt");
//! for pair in samples.iter()? {
//!     let (x, y) = pair?;
//!     trainer.submit(x, y)?;
//! }
//! ```

pub mod error;

#[cfg(test)]
mod tests;

pub use error::DataError;

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

/// 两列文本样本文件
///
/// 只持有路径；真正的文件句柄在每次 [`iter`](Self::iter) 时新开，
/// 因此多轮遍历互不干扰。
pub struct SampleFile {
    path: PathBuf,
}

impl SampleFile {
    /// 创建指向给定路径的样本文件（不立即打开）
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// 样本文件路径
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 开启一轮新的遍历
    ///
    /// # 返回
    /// 逐行产出 (x, y) 的迭代器；文件无法打开时返回
    /// [`DataError::FileNotFound`]。
    pub fn iter(&self) -> Result<SampleIter, DataError> {
        let file =
            File::open(&self.path).map_err(|_| DataError::FileNotFound(self.path.clone()))?;
        Ok(SampleIter {
            lines: BufReader::new(file).lines(),
            line_no: 0,
        })
    }
}

/// 逐行产出 (x, y) 样本的迭代器
///
/// 空行会被跳过；无法解析为两个浮点数的行产出 [`DataError::ParseLine`]
/// （带行号），每行两个数之后的多余内容被忽略。
pub struct SampleIter {
    lines: Lines<BufReader<File>>,
    line_no: usize,
}

impl SampleIter {
    fn parse_line(&self, line: &str) -> Result<(f32, f32), DataError> {
        let mut tokens = line.split_whitespace();
        let x = tokens.next().and_then(|t| t.parse::<f32>().ok());
        let y = tokens.next().and_then(|t| t.parse::<f32>().ok());
        match (x, y) {
            (Some(x), Some(y)) => Ok((x, y)),
            _ => Err(DataError::ParseLine {
                line: self.line_no,
                content: line.to_string(),
            }),
        }
    }
}

impl Iterator for SampleIter {
    type Item = Result<(f32, f32), DataError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(DataError::IoError(e))),
            };
            self.line_no += 1;

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            return Some(self.parse_line(trimmed));
        }
    }
}
