//! Gomoku terminal front end
//!
//! Two players share the terminal and enter moves as `ROW COL` (zero-based).
//! `new` starts over, `quit` leaves.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use gomoku::{GameConfig, GameSession, Pos, SessionError};

/// Play Gomoku with double-three and double-four restrictions.
#[derive(Parser)]
#[command(name = "gomoku", about = "Two-player Gomoku in the terminal")]
struct Cli {
    /// Path to a TOML game configuration (replaces the positional arguments)
    #[arg(long)]
    config: Option<PathBuf>,

    /// TO_WIN, ROWS COLUMNS, or TO_WIN ROWS COLUMNS
    #[arg(allow_negative_numbers = true, conflicts_with = "config")]
    args: Vec<String>,
}

/// A line of player input
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Place(Pos),
    NewGame,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "new" => return Some(Command::NewGame),
        "quit" | "q" | "exit" => return Some(Command::Quit),
        _ => {}
    }

    let mut parts = line.split(|c: char| c.is_whitespace() || c == ',').filter(|p| !p.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Command::Place(Pos::new(row, col)))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => {
            let (config, warnings) = GameConfig::from_args(cli.args.as_slice());
            for warning in warnings {
                eprintln!("Warning: {}", warning);
            }
            config
        }
    };

    println!("===========================================");
    println!("  Gomoku: {} in a row on {}x{}", config.to_win, config.rows, config.columns);
    println!("===========================================");
    println!("Enter moves as ROW COL, 'new' to restart, 'quit' to leave.\n");

    let mut session = GameSession::new(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print!("{}", session.board());
    println!("{}", session.status_line());

    for line in stdin.lock().lines() {
        let line = line.context("reading move from stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Some(Command::Quit) => break,
            Some(Command::NewGame) => {
                session.reset();
                println!("\n--- New Game ---");
            }
            Some(Command::Place(pos)) => match session.place(pos) {
                Ok(report) if !report.accepted() => {
                    println!("{}", report.message());
                    stdout.flush()?;
                    continue;
                }
                Ok(_) => {}
                Err(SessionError::GameOver) => {
                    eprintln!("The game is over. Type 'new' to play again.");
                    continue;
                }
                Err(e) => {
                    eprintln!("Rejected: {}", e);
                    continue;
                }
            },
            None => {
                eprintln!("Could not read '{}'. Expected ROW COL.", line.trim());
                continue;
            }
        }

        print!("{}", session.board());
        println!("{}", session.status_line());
        stdout.flush()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_place() {
        assert_eq!(parse_command("3 4"), Some(Command::Place(Pos::new(3, 4))));
        assert_eq!(parse_command(" 10,12 "), Some(Command::Place(Pos::new(10, 12))));
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(parse_command("new"), Some(Command::NewGame));
        assert_eq!(parse_command("QUIT"), Some(Command::Quit));
        assert_eq!(parse_command("q"), Some(Command::Quit));
    }

    #[test]
    fn test_cli_config_conflicts_with_positional() {
        let err = Cli::try_parse_from(["gomoku", "--config", "game.toml", "6"]).err();
        assert_eq!(
            err.map(|e| e.kind()),
            Some(clap::error::ErrorKind::ArgumentConflict)
        );

        let cli = Cli::try_parse_from(["gomoku", "--config", "game.toml"]).unwrap();
        assert!(cli.args.is_empty());
        let cli = Cli::try_parse_from(["gomoku", "6", "9", "9"]).unwrap();
        assert_eq!(cli.args, vec!["6", "9", "9"]);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_command("3"), None);
        assert_eq!(parse_command("a b"), None);
        assert_eq!(parse_command("1 2 3"), None);
        assert_eq!(parse_command("-1 2"), None);
    }
}
