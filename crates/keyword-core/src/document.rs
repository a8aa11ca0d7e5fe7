// keyword-core/src/document.rs
//! 文档读取

use std::fs;
use std::path::{Path, PathBuf};

use chardetng::EncodingDetector;

use crate::error::{KeywordError, Result};

/// 从文件读取的原始文本行
#[derive(Debug, Clone)]
pub struct Document {
    pub path: PathBuf,
    pub lines: Vec<String>,
}

impl Document {
    /// 读取文件：去掉首尾空白后按行切分
    pub fn read(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|e| KeywordError::io(path, e))?;
        let text = decode_text(&bytes, path);
        Ok(Self::from_text(path, &text))
    }

    pub fn from_text(path: impl Into<PathBuf>, text: &str) -> Self {
        Self {
            path: path.into(),
            lines: text.trim().lines().map(String::from).collect(),
        }
    }
}

/// 智能解码文本（UTF-8 优先，否则自动检测编码）
fn decode_text(bytes: &[u8], path: &Path) -> String {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return text.to_string();
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let detected_encoding = detector.guess(None, true);

    tracing::debug!("检测到文件编码 {:?}: {:?}", detected_encoding.name(), path);

    let (decoded, encoding_used, had_errors) = detected_encoding.decode(bytes);

    if had_errors {
        tracing::warn!(
            "文件 {:?} 使用 {} 解码时有部分错误，可能影响关键词提取",
            path,
            encoding_used.name()
        );
    }

    decoded.into_owned()
}
