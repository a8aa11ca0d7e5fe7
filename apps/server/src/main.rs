mod cli;
mod command;
mod config;
mod error;
mod http;

use error::WrapErr;

use clap::CommandFactory;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    // RUST_LOG 优先于 -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> error::Result<()> {
    color_eyre::install()?;

    let command_line = cli::Cli::parse();
    init_tracing(command_line.verbose);

    if let Some(command) = command_line.command {
        let cfg = config::Config::load(command_line.config.as_deref())
            .context("Load configuration error")?;

        let cmd: Box<dyn command::Command> = match command {
            cli::Commands::Serve { host, port } => {
                Box::new(command::ServeCommand::new(cfg, host, port))
            }
            cli::Commands::Extract { file, top_k, with_weight } => {
                Box::new(command::ExtractCommand::new(cfg, file, top_k, with_weight))
            }
        };
        cmd.execute().await?;
    } else {
        cli::Cli::command().print_help()?;
    }

    Ok(())
}
