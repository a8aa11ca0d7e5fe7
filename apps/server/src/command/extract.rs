use super::{Command, build_engine};
use crate::config::Config;
use crate::error::{Result, WrapErr};
use keyword_core::Keyword;
use serde_json::json;
use std::path::PathBuf;

/// 对单个文件提取关键词，输出格式与 HTTP 接口一致
pub struct ExtractCommand {
    config: Config,
    file: PathBuf,
    top_k: Option<usize>,
    with_weight: bool,
}

impl ExtractCommand {
    pub fn new(cfg: Config, file: PathBuf, top_k: Option<usize>, with_weight: bool) -> Self {
        Self {
            config: cfg,
            file,
            top_k,
            with_weight,
        }
    }
}

fn render(keywords: Vec<Keyword>, with_weight: bool) -> serde_json::Value {
    if with_weight {
        json!({ "data": keywords })
    } else {
        let words: Vec<String> = keywords.into_iter().map(|k| k.keyword).collect();
        json!({ "data": words })
    }
}

#[async_trait::async_trait]
impl Command for ExtractCommand {
    async fn execute(&self) -> Result<()> {
        let engine = build_engine(&self.config)?;
        let top_k = self.top_k.unwrap_or(engine.config().top_k);

        let keywords = engine
            .extract_file_top_k(&self.file, top_k)
            .with_context(|| format!("关键词提取失败: {:?}", self.file))?;

        println!("{}", render(keywords, self.with_weight));
        Ok(())
    }
}
