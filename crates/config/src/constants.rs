//! 全局常量

pub const TOP_LEVEL_DOMAIN: &str = "org";
pub const AUTHOR: &str = "keyword-server";
pub const APP_NAME: &str = "keyword-server";

/// 服务端配置文件名（位于配置目录下）
pub const SERVER_CONFIG_FILE_NAME: &str = "server.toml";

/// 默认监听地址，与旧版 Flask 服务保持一致
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 6887;

/// 默认提取的关键词数量
pub const DEFAULT_TOP_K: usize = 10;
