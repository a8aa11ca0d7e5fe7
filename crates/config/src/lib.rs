pub mod constants;

pub use etcetera::AppStrategy;
use etcetera::{AppStrategyArgs, choose_app_strategy};

use std::path::{Path, PathBuf};
use std::env;


pub fn create_strategy() -> std::result::Result<impl AppStrategy, etcetera::HomeDirError> {
    choose_app_strategy(AppStrategyArgs {
        top_level_domain: constants::TOP_LEVEL_DOMAIN.to_string(),
        author: constants::AUTHOR.to_string(),
        app_name: constants::APP_NAME.to_string(),
    })
}

pub fn resolve_dir<S, F>(env_key: &str, strategy: &S, strategy_fn: F) -> PathBuf
where
    S: AppStrategy,
    F: FnOnce(&S) -> Option<PathBuf>,
{
    env::var_os(env_key)
        .map(PathBuf::from)
        .or_else(|| strategy_fn(strategy))
        .unwrap_or_else(|| env::temp_dir().join(constants::APP_NAME))
}

/// 确定服务端配置文件路径
///
/// 命令行显式指定的路径优先，否则使用 `CONFIGURATION_DIRECTORY` 或应用配置目录下的
/// [`constants::SERVER_CONFIG_FILE_NAME`]。
pub fn server_config_path<S: AppStrategy>(explicit: Option<&Path>, strategy: &S) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => resolve_dir("CONFIGURATION_DIRECTORY", strategy, |s| Some(s.config_dir()))
            .join(constants::SERVER_CONFIG_FILE_NAME),
    }
}
