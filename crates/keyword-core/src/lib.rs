// keyword-core/src/lib.rs
//! 中文关键词提取核心库
//!
//! 处理流程：
//! - 文本规范化（去空白、逗号，只保留中文）
//! - jieba 分词 + 词性标注（合并领域词典）
//! - 停用词过滤
//! - TF-IDF 关键词排序，取前 K 个

use std::path::Path;
use std::sync::Arc;

use jieba_rs::Jieba;

pub mod config;
pub mod dictionary;
pub mod document;
pub mod error;
pub mod extract;
pub mod normalize;
pub mod segment;
pub mod stopwords;

// 重导出核心类型
pub use config::{ExtractConfig, ResourceConfig};
pub use dictionary::{DictEntry, DomainDictionary};
pub use document::Document;
pub use error::{KeywordError, Result};
pub use extract::{Keyword, KeywordExtractor, TfIdfExtractor};
pub use normalize::normalize_lines;
pub use segment::{JiebaSegmenter, Segmenter, Token};
pub use stopwords::StopwordSet;

/// 进程级只读资源：合并了领域词典的分词器与停用词表
pub struct Resources {
    pub jieba: Arc<Jieba>,
    pub stopwords: StopwordSet,
}

impl Resources {
    pub fn load(config: &ResourceConfig) -> Result<Self> {
        let dictionary = match &config.dict_path {
            Some(path) => DomainDictionary::load(path)?,
            None => {
                tracing::info!("未配置领域词典，使用内置金融词典");
                DomainDictionary::builtin()
            }
        };

        let stopwords = match &config.stopwords_path {
            Some(path) => StopwordSet::load(path)?,
            None => {
                tracing::info!("未配置停用词表，使用内置停用词表");
                StopwordSet::builtin()
            }
        };

        Ok(Self::new(&dictionary, stopwords))
    }

    pub fn new(dictionary: &DomainDictionary, stopwords: StopwordSet) -> Self {
        let mut jieba = Jieba::new();
        dictionary.apply(&mut jieba);
        Self {
            jieba: Arc::new(jieba),
            stopwords,
        }
    }
}

/// 关键词提取统一入口
pub struct KeywordEngine {
    segmenter: Box<dyn Segmenter>,
    extractor: Box<dyn KeywordExtractor>,
    stopwords: StopwordSet,
    config: ExtractConfig,
}

impl KeywordEngine {
    /// 使用 jieba 分词和 TF-IDF 创建引擎
    pub fn new(resources: Resources, config: ExtractConfig) -> Self {
        let segmenter = JiebaSegmenter::new(resources.jieba.clone(), config.hmm);
        let extractor = TfIdfExtractor::new(resources.jieba, config.hmm);
        Self::with_components(
            Box::new(segmenter),
            Box::new(extractor),
            resources.stopwords,
            config,
        )
    }

    pub fn with_components(
        segmenter: Box<dyn Segmenter>,
        extractor: Box<dyn KeywordExtractor>,
        stopwords: StopwordSet,
        config: ExtractConfig,
    ) -> Self {
        Self {
            segmenter,
            extractor,
            stopwords,
            config,
        }
    }

    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// 对原始文本行执行完整流程，使用配置中的 `top_k`
    pub fn extract_from_lines<I, S>(&self, lines: I) -> Vec<Keyword>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extract_top_k(lines, self.config.top_k)
    }

    pub fn extract_top_k<I, S>(&self, lines: I, top_k: usize) -> Vec<Keyword>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let normalized = normalize_lines(lines);
        tracing::debug!("规范化后 {} 个字符", normalized.chars().count());

        let tokens = self.segmenter.segment(&normalized);
        let total = tokens.len();
        let tokens = self.stopwords.filter(tokens);
        tracing::debug!("分词 {} 个，去停用词后 {} 个", total, tokens.len());

        let content = tokens
            .iter()
            .map(|token| token.word.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        let keywords = self
            .extractor
            .extract_keywords(&content, top_k, &self.config.allowed_pos);
        tracing::debug!("提取关键词: {:?}", keywords);
        keywords
    }

    /// 读取文件并提取关键词
    pub fn extract_from_file(&self, path: &Path) -> Result<Vec<Keyword>> {
        let document = Document::read(path)?;
        Ok(self.extract_from_lines(&document.lines))
    }

    pub fn extract_file_top_k(&self, path: &Path, top_k: usize) -> Result<Vec<Keyword>> {
        let document = Document::read(path)?;
        Ok(self.extract_top_k(&document.lines, top_k))
    }
}
