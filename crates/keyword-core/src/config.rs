// keyword-core/src/config.rs
//! 配置模块

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 关键词提取参数
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExtractConfig {
    /// 返回的关键词数量上限
    pub top_k: usize,
    /// 允许的词性，空表示不限制
    pub allowed_pos: Vec<String>,
    /// 分词时是否启用 HMM 识别未登录词
    pub hmm: bool,
}

/// 启动时加载的资源文件
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ResourceConfig {
    /// 领域词典路径，未设置时使用内置金融词典
    pub dict_path: Option<PathBuf>,
    /// 停用词表路径，未设置时使用内置停用词表
    pub stopwords_path: Option<PathBuf>,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            top_k: 10,
            allowed_pos: vec![],
            hmm: true,
        }
    }
}
