//! The terminal game: one `Game`, an optional computer opponent and the
//! commands a player can type.

use std::fmt;
use std::str::FromStr;

use chess_core::{
    command_to_move, coord_to_sq, legal_moves_from, parse_uci_move, Color, Game, GameStatus,
    Move, MoveError,
};
use minimax_engine::{AiPlayer, Difficulty, DifficultyTable, MoveSource};
use rand::rngs::StdRng;
use rand::Rng;
use thiserror::Error;
use tracing::debug;

use crate::render::board_diagram;

pub const HELP: &str = "\
Commands:
  <move>              e2e4, e7e8q, or a phrase like \"knight to f3\"
  new                 start over
  undo                take back your last move (and the reply in ai mode)
  mode ai|local       play the computer or a friend
  difficulty <level>  easy, medium, hard or expert
  board               show the board
  moves [square]      list legal moves
  fen                 show the position as FEN
  help                this text
  quit                leave";

/// The human side in ai mode.
const HUMAN: Color = Color::White;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Human plays White against the computer.
    Ai,
    /// Two humans share the keyboard.
    Local,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown mode '{0}' (expected ai or local)")]
pub struct ModeError(String);

impl FromStr for Mode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ai" | "computer" => Ok(Mode::Ai),
            "local" | "human" => Ok(Mode::Local),
            _ => Err(ModeError(s.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Ai => write!(f, "ai"),
            Mode::Local => write!(f, "local"),
        }
    }
}

/// What the loop should do after a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// Lines to print.
    Say(Vec<String>),
    Quit,
}

impl Reply {
    fn line(text: impl Into<String>) -> Self {
        Reply::Say(vec![text.into()])
    }
}

pub struct OfflineGame<R = StdRng> {
    game: Game,
    mode: Mode,
    difficulty: Difficulty,
    ai: AiPlayer<R>,
}

impl OfflineGame<StdRng> {
    pub fn new(table: DifficultyTable, mode: Mode, difficulty: Difficulty) -> Self {
        Self::with_ai(AiPlayer::new(table), mode, difficulty)
    }
}

impl<R: Rng> OfflineGame<R> {
    pub fn with_ai(ai: AiPlayer<R>, mode: Mode, difficulty: Difficulty) -> Self {
        Self {
            game: Game::new(),
            mode,
            difficulty,
            ai,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn handle(&mut self, line: &str) -> Reply {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "" => Reply::Say(Vec::new()),
            "quit" | "exit" => Reply::Quit,
            "help" => Reply::line(HELP),
            "board" => Reply::line(board_diagram(self.game.position())),
            "fen" => Reply::line(self.game.fen()),
            "new" => {
                self.game.reset();
                Reply::Say(vec!["New game.".to_string(), board_diagram(self.game.position())])
            }
            "undo" => self.undo(),
            "mode" => match rest.parse::<Mode>() {
                Ok(mode) => {
                    self.mode = mode;
                    let mut lines = vec![format!("Mode: {mode}")];
                    lines.extend(self.ai_turn());
                    Reply::Say(lines)
                }
                Err(err) => Reply::line(err.to_string()),
            },
            "difficulty" | "level" => match rest.parse::<Difficulty>() {
                Ok(level) => {
                    self.difficulty = level;
                    Reply::line(format!("Difficulty: {level}"))
                }
                Err(err) => Reply::line(err.to_string()),
            },
            "moves" => self.list_moves(rest),
            _ => self.human_move(line),
        }
    }

    fn human_move(&mut self, text: &str) -> Reply {
        let status = self.game.status();
        if status.is_over() {
            return Reply::line(format!(
                "The game is over ({}). Type 'new' to play again.",
                status.describe()
            ));
        }

        let mv = match self.interpret(text) {
            Ok(mv) => mv,
            Err(err) => return Reply::line(explain(&err)),
        };
        if let Err(err) = self.game.play(mv) {
            return Reply::line(explain(&err));
        }

        let mut lines = vec![format!("{} played {mv}", self.mover_name())];
        lines.extend(self.ai_turn());
        lines.push(board_diagram(self.game.position()));
        lines.extend(status_line(self.game.status()));
        Reply::Say(lines)
    }

    /// Coordinate notation first, then free text.
    fn interpret(&self, text: &str) -> Result<Move, MoveError> {
        let pos = self.game.position();
        match parse_uci_move(pos, text) {
            Ok(mv) => Ok(mv),
            Err(MoveError::Illegal(txt)) => Err(MoveError::Illegal(txt)),
            Err(_) => command_to_move(pos, text),
        }
    }

    /// Who made the last move, as seen by the players.
    fn mover_name(&self) -> String {
        let color = self.game.side_to_move().other();
        match self.mode {
            Mode::Ai if color == HUMAN => "You".to_string(),
            Mode::Ai => "Computer".to_string(),
            Mode::Local => capitalise(&color.to_string()),
        }
    }

    /// Let the computer move if it is its turn.
    fn ai_turn(&mut self) -> Option<String> {
        if self.mode != Mode::Ai || self.game.side_to_move() == HUMAN {
            return None;
        }
        if self.game.status().is_over() {
            return None;
        }
        let choice = self.ai.choose(&self.game, self.difficulty)?;
        if let Err(err) = self.game.play(choice.mv) {
            debug!(%err, "ai produced an unplayable move");
            return None;
        }
        let detail = match choice.source {
            MoveSource::Forced => "only move".to_string(),
            MoveSource::Random => "on a whim".to_string(),
            MoveSource::Search { score, nodes } => format!("score {score}, {nodes} nodes"),
        };
        Some(format!("Computer played {} ({detail})", choice.mv))
    }

    fn undo(&mut self) -> Reply {
        if let Err(err) = self.game.undo() {
            return Reply::line(explain(&err));
        }
        // In ai mode go back to the human's turn, taking the reply too.
        if self.mode == Mode::Ai && self.game.side_to_move() != HUMAN {
            self.game.undo().ok();
        }
        Reply::Say(vec![
            "Move taken back.".to_string(),
            board_diagram(self.game.position()),
        ])
    }

    fn list_moves(&self, square: &str) -> Reply {
        let moves = if square.is_empty() {
            self.game.legal_moves()
        } else {
            match coord_to_sq(square) {
                Some(from) => legal_moves_from(self.game.position(), from),
                None => return Reply::line(format!("'{square}' is not a square")),
            }
        };
        if moves.is_empty() {
            return Reply::line("No legal moves.");
        }
        let list: Vec<String> = moves.iter().map(ToString::to_string).collect();
        Reply::line(list.join(" "))
    }
}

fn explain(err: &MoveError) -> String {
    match err {
        MoveError::Unparseable(_) => format!("{err}. Try \"e2e4\" or \"pawn to e4\"; 'help' lists commands."),
        _ => format!("{}.", capitalise(&err.to_string())),
    }
}

fn status_line(status: GameStatus) -> Option<String> {
    match status {
        GameStatus::Ongoing => None,
        _ => Some(format!("Game over: {}.", status.describe())),
    }
}

fn capitalise(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod app_tests;
