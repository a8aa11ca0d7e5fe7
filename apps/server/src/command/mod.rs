pub mod extract;
pub mod serve;

use crate::config::Config;
use crate::error::{Result, WrapErr};
use keyword_core::{KeywordEngine, Resources};

pub use extract::ExtractCommand;
pub use serve::ServeCommand;

#[async_trait::async_trait]
pub trait Command {
    async fn execute(&self) -> Result<()>;
}

/// 加载词典和停用词表，构建关键词引擎
fn build_engine(config: &Config) -> Result<KeywordEngine> {
    let resources = Resources::load(&config.resource_config()).context("加载词典资源失败")?;
    Ok(KeywordEngine::new(resources, config.extract_config()))
}
