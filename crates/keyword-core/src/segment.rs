// keyword-core/src/segment.rs
//! 分词与词性标注

use std::sync::Arc;

use jieba_rs::Jieba;
use serde::{Deserialize, Serialize};

/// 分词结果：(词, 词性)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub word: String,
    pub pos: String,
}

impl Token {
    pub fn new(word: impl Into<String>, pos: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            pos: pos.into(),
        }
    }
}

/// 分词器接口，便于替换底层分词库
pub trait Segmenter: Send + Sync {
    /// 将中文文本切分为带词性的词序列，保持原文顺序
    fn segment(&self, text: &str) -> Vec<Token>;
}

/// 基于 jieba 的分词器
pub struct JiebaSegmenter {
    jieba: Arc<Jieba>,
    hmm: bool,
}

impl JiebaSegmenter {
    pub fn new(jieba: Arc<Jieba>, hmm: bool) -> Self {
        Self { jieba, hmm }
    }
}

impl Segmenter for JiebaSegmenter {
    fn segment(&self, text: &str) -> Vec<Token> {
        self.jieba
            .tag(text, self.hmm)
            .into_iter()
            .map(|tag| Token::new(tag.word, tag.tag))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use once_cell::sync::Lazy;

    static JIEBA: Lazy<Arc<Jieba>> = Lazy::new(|| Arc::new(Jieba::new()));

    #[test]
    fn tokens_cover_the_input_in_order() {
        let segmenter = JiebaSegmenter::new(JIEBA.clone(), true);
        let text = "我们中出了一个叛徒今天天气不错";
        let tokens = segmenter.segment(text);

        let joined: String = tokens.iter().map(|t| t.word.as_str()).collect();
        assert_eq!(joined, text);
        assert!(tokens.iter().all(|t| !t.pos.is_empty()));
    }

    #[test]
    fn empty_text_has_no_tokens() {
        let segmenter = JiebaSegmenter::new(JIEBA.clone(), true);
        assert!(segmenter.segment("").is_empty());
    }

    #[test]
    fn segmentation_is_deterministic() {
        let segmenter = JiebaSegmenter::new(JIEBA.clone(), false);
        let text = "关键词提取是自然语言处理的常见任务";
        assert_eq!(segmenter.segment(text), segmenter.segment(text));
    }
}
