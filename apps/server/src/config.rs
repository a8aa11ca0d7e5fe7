use crate::error::Result;
use config::constants;
use config::create_strategy;
use keyword_core::{ExtractConfig, ResourceConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default = "default_config", deny_unknown_fields)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// 领域词典（jieba 用户词典格式），未设置时使用内置金融词典
    pub dict_path: Option<PathBuf>,
    /// 停用词表，每行一个，未设置时使用内置停用词表
    pub stopwords_path: Option<PathBuf>,
    pub top_k: usize,
    pub hmm: bool,
    /// 允许的词性，空表示不限制
    pub allow_pos: Vec<String>,
}

fn default_config() -> Config {
    let extract = ExtractConfig::default();

    Config {
        host: constants::DEFAULT_HOST.to_string(),
        port: constants::DEFAULT_PORT,
        dict_path: None,
        stopwords_path: None,
        top_k: constants::DEFAULT_TOP_K,
        hmm: extract.hmm,
        allow_pos: extract.allowed_pos,
    }
}

impl Config {
    fn load_str(user_config_str: &str) -> Result<Config> {
        let user_config: Config = toml::from_str(user_config_str)?;
        Ok(user_config)
    }

    pub fn load(explicit: Option<&Path>) -> Result<Config> {
        let strategy = create_strategy()?;
        let config_path = config::server_config_path(explicit, &strategy);

        match std::fs::read_to_string(&config_path) {
            Ok(user_config_str) => {
                tracing::info!("加载配置文件: {:?}", config_path);
                Self::load_str(&user_config_str)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // 配置文件不存在，创建示例配置文件
                Self::create_example_config(&config_path)?;
                Self::load_str("")
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn resource_config(&self) -> ResourceConfig {
        ResourceConfig {
            dict_path: self.dict_path.clone(),
            stopwords_path: self.stopwords_path.clone(),
        }
    }

    pub fn extract_config(&self) -> ExtractConfig {
        ExtractConfig {
            top_k: self.top_k,
            allowed_pos: self.allow_pos.clone(),
            hmm: self.hmm,
        }
    }

    fn create_example_config(config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let example_config = r#"# keyword-server 配置文件
#
# 此文件在首次运行时自动创建
# 配置修改后重启服务生效

# 监听地址和端口
# host = "0.0.0.0"
# port = 6887

# 领域词典（jieba 用户词典格式：词语 [词频] [词性]）
# 不设置则使用内置金融专有名词词典
# dict-path = "/path/to/userdict.txt"

# 停用词表（每行一个停用词，UTF-8）
# 不设置则使用内置停用词表
# stopwords-path = "/path/to/stopwords.txt"

# 返回的关键词数量
# top-k = 10

# 分词时是否启用 HMM 识别未登录词
# hmm = true

# 只保留指定词性的关键词，空表示不限制
# allow-pos = ["n", "nr", "ns", "vn"]
"#;

        std::fs::write(config_path, example_config)?;

        tracing::info!("已创建配置文件: {:?}", config_path);
        Ok(())
    }
}
