// keyword-core/src/dictionary.rs
//! 领域词典
//!
//! 格式与 jieba 用户词典一致，每行一个词条：
//!
//! ```text
//! 词语 [词频] [词性]
//! ```
//!
//! 词频和词性均可省略，省略词频时由 jieba 自动计算能让该词被切分出来的词频。
//! 只有词性时（`词语 词性`）同样合法。

use std::fs;
use std::path::{Path, PathBuf};

use jieba_rs::Jieba;

use crate::error::{KeywordError, Result};

/// 随程序分发的默认金融专有名词词典
const BUILTIN_DICTIONARY: &str = include_str!("../resources/userdict.txt");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictEntry {
    pub word: String,
    pub freq: Option<usize>,
    pub tag: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct DomainDictionary {
    entries: Vec<DictEntry>,
}

impl DomainDictionary {
    pub fn builtin() -> Self {
        // 内置词典随代码一起测试，不会出现格式错误
        Self::parse(BUILTIN_DICTIONARY, Path::new("<builtin>")).unwrap_or_default()
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| KeywordError::io(path, e))?;
        let dict = Self::parse(&content, path)?;
        tracing::info!("已加载领域词典 {} 条: {:?}", dict.len(), path);
        Ok(dict)
    }

    /// 解析词典文本，`origin` 仅用于错误信息
    pub fn parse(content: &str, origin: &Path) -> Result<Self> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let mut entries = Vec::new();

        for (index, line) in content.lines().enumerate() {
            let mut parts = line.split_whitespace();
            let Some(word) = parts.next() else {
                continue;
            };

            let mut freq = None;
            let mut tag = None;
            for field in parts {
                if freq.is_none() && tag.is_none() && field.chars().all(|c| c.is_ascii_digit()) {
                    let value = field.parse::<usize>().map_err(|_| {
                        dictionary_error(origin, index + 1, format!("无效的词频 '{}'", field))
                    })?;
                    freq = Some(value);
                } else if tag.is_none() && field.chars().all(|c| c.is_ascii_alphabetic()) {
                    tag = Some(field.to_string());
                } else {
                    return Err(dictionary_error(
                        origin,
                        index + 1,
                        format!("无法识别的字段 '{}'", field),
                    ));
                }
            }

            entries.push(DictEntry {
                word: word.to_string(),
                freq,
                tag,
            });
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[DictEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 将词条加入分词器词表
    pub fn apply(&self, jieba: &mut Jieba) {
        for entry in &self.entries {
            jieba.add_word(&entry.word, entry.freq, entry.tag.as_deref());
        }
        tracing::debug!("领域词典已合并到分词词表: {} 条", self.entries.len());
    }
}

fn dictionary_error(origin: &Path, line: usize, reason: String) -> KeywordError {
    KeywordError::Dictionary {
        path: PathBuf::from(origin),
        line,
        reason,
    }
}
