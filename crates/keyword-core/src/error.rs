// keyword-core/src/error.rs
//! 错误类型

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, KeywordError>;

#[derive(Debug, thiserror::Error)]
pub enum KeywordError {
    /// 读取文档、词典或停用词文件失败
    #[error("无法读取文件 {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 领域词典格式错误
    #[error("词典 {path:?} 第 {line} 行格式错误: {reason}")]
    Dictionary {
        path: PathBuf,
        line: usize,
        reason: String,
    },
}

impl KeywordError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        KeywordError::Io {
            path: path.into(),
            source,
        }
    }

    /// 底层 I/O 错误类型（非 I/O 错误返回 `None`）
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            KeywordError::Io { source, .. } => Some(source.kind()),
            KeywordError::Dictionary { .. } => None,
        }
    }
}
