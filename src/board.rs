//! Board state and the Reversi placement rules.

use crate::common::{Cell, Player};
use crate::config::{BOARD_SIZE, DIRECTIONS};

const N: usize = BOARD_SIZE as usize;

/// The 8x8 board, the mover identities, and the derived piece counts.
///
/// Cells are indexed `cells[y][x]` with x = column and y = row, both in
/// [0, 7]. `current` and `next` always name different players.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; N]; N],
    current: Player,
    next: Player,
    count_a: u8,
    count_b: u8,
}

impl Board {
    /// Create a board in the standard starting position: a 2x2 block in the
    /// center with (3,3) and (4,4) owned by player A, (4,3) and (3,4) by
    /// player B. Player A moves first.
    pub fn new() -> Self {
        let mut cells = [[Cell::Empty; N]; N];
        let mid = N / 2;
        cells[mid - 1][mid - 1] = Cell::Piece(Player::A);
        cells[mid][mid] = Cell::Piece(Player::A);
        cells[mid - 1][mid] = Cell::Piece(Player::B);
        cells[mid][mid - 1] = Cell::Piece(Player::B);
        Board {
            cells,
            current: Player::A,
            next: Player::B,
            count_a: 2,
            count_b: 2,
        }
    }

    /// Build a board from an arbitrary position with `mover` to play.
    /// Counts are recomputed from the grid.
    pub fn from_cells(cells: [[Cell; N]; N], mover: Player) -> Self {
        let mut board = Board {
            cells,
            current: mover,
            next: mover.opponent(),
            count_a: 0,
            count_b: 0,
        };
        board.recompute_counts();
        board
    }

    /// The cell at (x, y), or `None` when the coordinate is off the grid.
    pub fn cell(&self, x: i8, y: i8) -> Option<Cell> {
        if Self::in_bounds(x, y) {
            Some(self.cells[y as usize][x as usize])
        } else {
            None
        }
    }

    /// The player whose turn it is.
    pub fn current_mover(&self) -> Player {
        self.current
    }

    /// The player who moves after the current one.
    pub fn next_mover(&self) -> Player {
        self.next
    }

    /// Exchange the current and next mover.
    pub fn swap_movers(&mut self) {
        core::mem::swap(&mut self.current, &mut self.next);
    }

    /// Piece counts as (player A, player B). Only meaningful after
    /// [`Board::recompute_counts`].
    pub fn counts(&self) -> (u8, u8) {
        (self.count_a, self.count_b)
    }

    /// Refresh the piece counts by scanning every cell. Idempotent.
    pub fn recompute_counts(&mut self) {
        self.count_a = 0;
        self.count_b = 0;
        for row in &self.cells {
            for cell in row {
                match cell {
                    Cell::Piece(Player::A) => self.count_a += 1,
                    Cell::Piece(Player::B) => self.count_b += 1,
                    Cell::Empty => {}
                }
            }
        }
    }

    /// Attempt to place a piece for `mover` at (x, y).
    ///
    /// Returns `true` and flips every captured run when at least one of the
    /// eight directions captures. Returns `false` with the board untouched
    /// when the target is off the grid, already occupied, or captures in no
    /// direction.
    pub fn attempt_place(&mut self, x: i8, y: i8, mover: Player) -> bool {
        if !Self::in_bounds(x, y) {
            return false;
        }
        if self.cells[y as usize][x as usize] != Cell::Empty {
            return false;
        }

        let mut captured = false;
        for &(dx, dy) in &DIRECTIONS {
            let run = self.scan_run(x, y, dx, dy, mover);
            if run > 0 {
                self.cells[y as usize][x as usize] = Cell::Piece(mover);
                self.flip_run(x, y, dx, dy, run, mover);
                captured = true;
            }
        }
        captured
    }

    /// Attempt a placement for the current mover and, on success, hand the
    /// turn to the other player. A rejected placement leaves the mover
    /// unchanged so the caller can re-prompt.
    pub fn play(&mut self, x: i8, y: i8) -> bool {
        let ok = self.attempt_place(x, y, self.current);
        if ok {
            self.swap_movers();
        }
        ok
    }

    fn in_bounds(x: i8, y: i8) -> bool {
        (0..N as i8).contains(&x) && (0..N as i8).contains(&y)
    }

    /// Length of the opponent run captured by walking (dx, dy) from (x, y),
    /// or 0 when the walk leaves the grid, hits an empty cell, or reaches a
    /// `mover` piece with nothing in between.
    fn scan_run(&self, x: i8, y: i8, dx: i8, dy: i8, mover: Player) -> u8 {
        let mut cx = x;
        let mut cy = y;
        let mut run = 0;
        loop {
            cx += dx;
            cy += dy;
            if !Self::in_bounds(cx, cy) {
                return 0;
            }
            match self.cells[cy as usize][cx as usize] {
                Cell::Piece(p) if p == mover => return run,
                Cell::Piece(_) => run += 1,
                Cell::Empty => return 0,
            }
        }
    }

    /// Flip `run` cells along (dx, dy) from (x, y) to `mover`. Only called
    /// after `scan_run` confirmed the run is anchored.
    fn flip_run(&mut self, x: i8, y: i8, dx: i8, dy: i8, run: u8, mover: Player) {
        let mut cx = x;
        let mut cy = y;
        for _ in 0..run {
            cx += dx;
            cy += dy;
            self.cells[cy as usize][cx as usize] = Cell::Piece(mover);
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
