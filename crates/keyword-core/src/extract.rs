// keyword-core/src/extract.rs
//! 关键词提取（TF-IDF）

use std::sync::Arc;

use jieba_rs::{Jieba, KeywordExtract, KeywordExtractConfig, TfIdf};
use serde::{Deserialize, Serialize};

/// 带权重的关键词
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub keyword: String,
    pub weight: f64,
}

impl From<jieba_rs::Keyword> for Keyword {
    fn from(k: jieba_rs::Keyword) -> Self {
        Self {
            keyword: k.keyword,
            weight: k.weight,
        }
    }
}

/// 关键词提取接口，便于替换底层打分算法
pub trait KeywordExtractor: Send + Sync {
    /// 返回至多 `top_k` 个关键词，按重要程度降序排列
    ///
    /// `allowed_pos` 为空表示不限制词性。
    fn extract_keywords(&self, text: &str, top_k: usize, allowed_pos: &[String]) -> Vec<Keyword>;
}

/// 基于 jieba 内置 IDF 词典的 TF-IDF 提取器
pub struct TfIdfExtractor {
    jieba: Arc<Jieba>,
    tfidf: TfIdf,
}

impl TfIdfExtractor {
    /// `hmm` 需与分词阶段一致，否则提取时重新切分会丢掉 HMM 识别出的新词
    pub fn new(jieba: Arc<Jieba>, hmm: bool) -> Self {
        let mut tfidf = TfIdf::default();
        match KeywordExtractConfig::builder().use_hmm(hmm).build() {
            Ok(config) => *tfidf.config_mut() = config,
            Err(e) => tracing::warn!("TF-IDF 配置构建失败，使用默认配置: {}", e),
        }
        Self { jieba, tfidf }
    }
}

impl KeywordExtractor for TfIdfExtractor {
    fn extract_keywords(&self, text: &str, top_k: usize, allowed_pos: &[String]) -> Vec<Keyword> {
        if text.trim().is_empty() || top_k == 0 {
            return Vec::new();
        }

        // 同分词语按字典序排列，结果可复现
        self.tfidf
            .extract_keywords(&self.jieba, text, top_k, allowed_pos.to_vec())
            .into_iter()
            .map(Keyword::from)
            .collect()
    }
}
