//! Offline chess binary. Reads commands from stdin, one per line.

use std::env;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::Context;
use minimax_engine::Difficulty;
use offline_chess::{board_diagram, Mode, OfflineConfig, OfflineGame, Reply};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Offline chess");
    println!();
    println!("Usage:");
    println!("  offline_chess [--mode ai|local] [--difficulty <level>] [--config <file>]");
    println!();
    println!("Levels: easy, medium, hard, expert. Type 'help' once running.");
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let mut config_path: Option<String> = None;
    let mut mode: Option<Mode> = None;
    let mut difficulty: Option<Difficulty> = None;

    let mut i = 0;
    while i < args.len() {
        let value = args.get(i + 1);
        match args[i].as_str() {
            "--config" | "-c" => {
                config_path = Some(value.context("--config needs a path")?.clone());
                i += 1;
            }
            "--mode" | "-m" => {
                mode = Some(value.context("--mode needs a value")?.parse()?);
                i += 1;
            }
            "--difficulty" | "-d" => {
                difficulty = Some(value.context("--difficulty needs a level")?.parse()?);
                i += 1;
            }
            "--help" | "-h" => {
                print_usage();
                return Ok(ExitCode::SUCCESS);
            }
            other => {
                eprintln!("Error: unknown argument '{other}'");
                print_usage();
                return Ok(ExitCode::from(2));
            }
        }
        i += 1;
    }

    let config = match &config_path {
        Some(path) => OfflineConfig::load(path)?,
        None => OfflineConfig::default(),
    };
    let mode = match mode {
        Some(mode) => mode,
        None => config.starting_mode()?,
    };
    let difficulty = match difficulty {
        Some(level) => level,
        None => config.starting_difficulty()?,
    };

    let mut app = OfflineGame::new(config.table()?, mode, difficulty);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "Mode: {mode}, difficulty: {difficulty}. Type 'help' for commands.")?;
    writeln!(stdout, "{}", board_diagram(app.game().position()))?;
    write!(stdout, "> ")?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        match app.handle(&line) {
            Reply::Quit => break,
            Reply::Say(lines) => {
                for text in lines {
                    writeln!(stdout, "{text}")?;
                }
            }
        }
        write!(stdout, "> ")?;
        stdout.flush()?;
    }
    Ok(ExitCode::SUCCESS)
}
