use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 8;
pub const BOARD_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// Contents of one board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
    /// Destination marker shown to the player. Never stored on the board.
    AvailableMove,
    /// Blocked cell. Reserved; no rule places one yet.
    BlackHole,
}

impl Cell {
    /// Wire code: 0=empty, 1=black, 2=white, 3=available move, 4=black hole.
    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Black => 1,
            Cell::White => 2,
            Cell::AvailableMove => 3,
            Cell::BlackHole => 4,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Owner of the chip in this cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Black => Some(Player::Black),
            Cell::White => Some(Player::White),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Player {
    Black,
    White,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    pub fn chip(self) -> Cell {
        match self {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }

    pub fn code(self) -> u8 {
        self.chip().code()
    }
}

/// A board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    #[serde(alias = "column")]
    pub col: u8,
}

impl Position {
    /// Caller guarantees `row < 8 && col < 8`.
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Returns the cell `(dr, dc)` away, or `None` when it falls off the board.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = self.row as i16 + dr as i16;
        let col = self.col as i16 + dc as i16;
        if in_bounds(row, col) {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }

    pub fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }
}

pub fn in_bounds(row: i16, col: i16) -> bool {
    (0..BOARD_SIZE as i16).contains(&row) && (0..BOARD_SIZE as i16).contains(&col)
}

/// A legal destination for a chip, plus the opponent cells it removes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub from: Position,
    pub to: Position,
    /// At most one entry: only single-hop captures exist.
    pub flips: Vec<Position>,
}

impl Candidate {
    pub fn simple(from: Position, to: Position) -> Self {
        Self {
            from,
            to,
            flips: Vec::new(),
        }
    }

    pub fn capture(from: Position, over: Position, to: Position) -> Self {
        Self {
            from,
            to,
            flips: vec![over],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    #[default]
    HumanVsHuman,
    HumanVsComputer,
}

/// Per-color scores kept by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scores {
    pub black: i32,
    pub white: i32,
}

impl Scores {
    pub fn differential(self) -> i32 {
        self.black - self.white
    }
}

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub board: Vec<u8>,
    pub current_player: u8,
    pub black_count: u8,
    pub white_count: u8,
    pub total_placed: u8,
    pub empty_count: u8,
    pub is_game_over: bool,
    /// `true` when the previous mover forfeited for lack of moves.
    pub is_stuck: bool,
    pub mode: GameMode,
    pub selected: Option<Position>,
    pub available: Vec<Position>,
}

/// Final result after game over. The side left with fewer chips wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    /// 0 on a draw, otherwise the winner's code.
    pub winner: u8,
    pub black_count: u8,
    pub white_count: u8,
}
