use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase verbosity. Can be used multiple times (e.g., -v, -vv).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// 配置文件路径（默认使用配置目录下的 server.toml）
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the keyword extraction HTTP endpoint
    Serve {
        /// 覆盖配置文件中的监听地址
        #[arg(long)]
        host: Option<String>,
        /// 覆盖配置文件中的监听端口
        #[arg(long)]
        port: Option<u16>,
    },
    /// Extract keywords from a single file and print them as JSON
    Extract {
        /// UTF-8 文本文件
        file: PathBuf,
        /// 关键词数量（默认使用配置中的 top-k）
        #[arg(short = 'k', long)]
        top_k: Option<usize>,
        /// 同时输出每个关键词的权重
        #[arg(long)]
        with_weight: bool,
    },
}
