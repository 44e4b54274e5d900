//! Chess relay server binary.

use std::env;
use std::process::ExitCode;

use anyhow::Context;
use chess_server::{Server, ServerConfig};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Networked chess relay");
    println!();
    println!("Usage:");
    println!("  chess_server [--config <file>] [--bind <addr>]");
    println!();
    println!("Options:");
    println!("  --config, -c   TOML settings (default: chess_server.toml if present)");
    println!("  --bind, -b     listen address, overrides the config file");
    println!();
    println!("Log level comes from RUST_LOG (default: info).");
}

#[derive(Debug, Default)]
struct Options {
    config: Option<String>,
    bind: Option<String>,
    help: bool,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options::default();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                options.config = Some(args.get(i + 1).ok_or("--config needs a path")?.clone());
                i += 1;
            }
            "--bind" | "-b" => {
                options.bind = Some(args.get(i + 1).ok_or("--bind needs an address")?.clone());
                i += 1;
            }
            "--help" | "-h" => options.help = true,
            other => return Err(format!("unknown argument '{other}'")),
        }
        i += 1;
    }
    Ok(options)
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("Error: {message}");
            print_usage();
            return Ok(ExitCode::from(2));
        }
    };
    if options.help {
        print_usage();
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = match &options.config {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::load_default()?,
    };
    if let Some(bind) = options.bind {
        config.bind = bind;
    }
    let table = config.difficulty_table()?;

    let listener = TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    info!(bind = %config.bind, "starting chess server");

    Server::new(table).run(listener).await?;
    Ok(ExitCode::SUCCESS)
}
