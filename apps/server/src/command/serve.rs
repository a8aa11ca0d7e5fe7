use super::{Command, build_engine};
use crate::config::Config;
use crate::error::{Result, WrapErr};
use crate::http;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

pub struct ServeCommand {
    config: Config,
    host: Option<String>,
    port: Option<u16>,
}

impl ServeCommand {
    pub fn new(cfg: Config, host: Option<String>, port: Option<u16>) -> Self {
        Self {
            config: cfg,
            host,
            port,
        }
    }

    fn bind_addr(&self) -> String {
        let host = self.host.as_deref().unwrap_or(&self.config.host);
        let port = self.port.unwrap_or(self.config.port);
        format!("{}:{}", host, port)
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("无法监听退出信号: {}", e);
        std::future::pending::<()>().await;
    }
    info!("收到退出信号，正在关闭服务");
}

#[async_trait::async_trait]
impl Command for ServeCommand {
    async fn execute(&self) -> Result<()> {
        info!("正在加载词典和停用词表...");

        let engine = Arc::new(build_engine(&self.config)?);
        info!("关键词引擎初始化完成，top-k = {}", engine.config().top_k);

        let addr = self.bind_addr();
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("无法监听 {}", addr))?;
        info!("监听 {}", addr);

        axum::serve(listener, http::routes(engine))
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        toml::from_str("host = \"127.0.0.1\"\nport = 7000").unwrap()
    }

    #[test]
    fn bind_addr_uses_config() {
        let cmd = ServeCommand::new(config(), None, None);
        assert_eq!(cmd.bind_addr(), "127.0.0.1:7000");
    }

    #[test]
    fn bind_addr_prefers_command_line() {
        let cmd = ServeCommand::new(config(), Some("0.0.0.0".to_string()), Some(8080));
        assert_eq!(cmd.bind_addr(), "0.0.0.0:8080");
    }
}
