use crate::layout::StartingPosition;
use crate::types::{BOARD_CELLS, Cell, Player, Position};

/// Giveaway board: 64 cells stored row-major.
///
/// Coordinates handed to `get`, `set` and `relocate` must already be on the
/// board; bounds are checked by whoever computes them (see `Position::offset`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_CELLS],
        }
    }

    /// Clears every cell, then places the starting chips.
    /// Calling it again fully overwrites the previous contents.
    pub fn initialize(&mut self, layout: &StartingPosition) {
        self.cells = [Cell::Empty; BOARD_CELLS];
        for &pos in &layout.black {
            self.set(pos, Cell::Black);
        }
        for &pos in &layout.white {
            self.set(pos, Cell::White);
        }
    }

    pub fn with_layout(layout: &StartingPosition) -> Self {
        let mut board = Self::new();
        board.initialize(layout);
        board
    }

    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.index()] = cell;
    }

    /// Moves whatever sits on `from` to `to`, leaving `from` empty.
    pub fn relocate(&mut self, from: Position, to: Position) {
        let cell = self.get(from);
        self.set(from, Cell::Empty);
        self.set(to, cell);
    }

    /// Returns `(black_count, white_count)`.
    pub fn count(&self) -> (u8, u8) {
        self.cells.iter().fold((0, 0), |(black, white), cell| match cell {
            Cell::Black => (black + 1, white),
            Cell::White => (black, white + 1),
            _ => (black, white),
        })
    }

    /// Returns the number of empty squares.
    pub fn empty_count(&self) -> u8 {
        self.cells.iter().filter(|cell| cell.is_empty()).count() as u8
    }

    /// Positions holding `player`'s chips, row-major.
    pub fn chips_of(&self, player: Player) -> impl Iterator<Item = Position> + '_ {
        let chip = player.chip();
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, cell)| **cell == chip)
            .map(|(idx, _)| pos_from_index(idx))
    }

    /// Converts board to `[u8; 64]` using `Cell::code`.
    pub fn to_array(&self) -> [u8; BOARD_CELLS] {
        let mut board = [0u8; BOARD_CELLS];
        for (out, cell) in board.iter_mut().zip(self.cells.iter()) {
            *out = cell.code();
        }
        board
    }

    /// Every cell with its position, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, cell)| (pos_from_index(idx), *cell))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

fn pos_from_index(idx: usize) -> Position {
    Position::new((idx / 8) as u8, (idx % 8) as u8)
}
