// keyword-core/src/stopwords.rs
//! 停用词表

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{KeywordError, Result};
use crate::segment::Token;

/// 随程序分发的默认中文停用词表
const BUILTIN_STOPWORDS: &str = include_str!("../resources/stopwords.txt");

/// 停用词集合，启动时加载一次，此后只读
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// 空停用词表（不过滤任何词）
    pub fn empty() -> Self {
        Self::default()
    }

    /// 内置停用词表
    pub fn builtin() -> Self {
        Self::parse(BUILTIN_STOPWORDS)
    }

    /// 从文件加载，每行一个停用词，UTF-8 编码
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| KeywordError::io(path, e))?;
        let set = Self::parse(&content);
        tracing::info!("已加载停用词 {} 个: {:?}", set.len(), path);
        Ok(set)
    }

    /// 解析停用词文本：逐行去掉行尾空白，忽略空行
    pub fn parse(content: &str) -> Self {
        let words = content
            .lines()
            .map(str::trim_end)
            .filter(|word| !word.is_empty())
            .map(String::from)
            .collect();
        Self { words }
    }

    /// 大小写敏感的精确匹配
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// 过滤掉停用词，保持原有顺序
    pub fn filter(&self, tokens: Vec<Token>) -> Vec<Token> {
        tokens
            .into_iter()
            .filter(|token| !self.contains(&token.word))
            .collect()
    }
}

impl<S: Into<String>> FromIterator<S> for StopwordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}
