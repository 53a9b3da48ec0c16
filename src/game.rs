// =============================================================================
// Game state
//
// The game keeps every board it has passed through: snapshot 0 is the empty
// grid and snapshot k the position after the k-th move. A cursor selects the
// snapshot on display and also decides whose turn it is: turn order is the
// cursor's parity, never stored separately. Jumping back in history only
// moves the cursor; the abandoned future is discarded when the next move is
// played from the earlier position.
// =============================================================================

use crate::board::{Board, Mark};

#[derive(Debug, Clone)]
pub struct Game {
    history: Vec<Board>,
    current_move: usize,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Game {
            history: vec![Board::new()],
            current_move: 0,
        }
    }

    /// Board currently on display.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// Mark that plays next: X on even snapshots, O on odd. Jumping back in
    /// history therefore also rewinds whose turn it is.
    pub fn next_mark(&self) -> Mark {
        if self.current_move % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        }
    }

    pub fn winner(&self) -> Option<Mark> {
        self.current_board().winner()
    }

    /// Plays the next mark into `cell`.
    ///
    /// Ignored without signal when the displayed board already has a winner,
    /// the cell is occupied, or `cell` is not a board index. The front ends
    /// offer no way to report a rejected click; the display simply does not
    /// change.
    pub fn play(&mut self, cell: usize) {
        if cell >= 9 || self.winner().is_some() || !self.current_board().is_cell_empty(cell) {
            return;
        }
        let next = self.current_board().with_mark(cell, self.next_mark());
        self.history.truncate(self.current_move + 1);
        self.history.push(next);
        self.current_move = self.history.len() - 1;
    }

    /// Moves the cursor to snapshot `mv`, keeping history intact so a later
    /// move can branch off from there.
    ///
    /// `mv` must be below `history_len()`; the front ends only offer indices
    /// of snapshots that exist.
    pub fn jump_to(&mut self, mv: usize) {
        self.current_move = mv;
    }

    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Number of snapshots, the initial empty board included.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Moves played on the line the history currently records.
    pub fn move_count(&self) -> usize {
        self.history.len() - 1
    }

    /// Status line shown above the board.
    pub fn status(&self) -> String {
        match self.winner() {
            Some(mark) => format!("Winner: {mark}"),
            None => format!("Next player: {}", self.next_mark()),
        }
    }
}

/// Label for the history entry that jumps to snapshot `mv`.
pub fn move_label(mv: usize) -> String {
    if mv == 0 {
        "Go to game start".to_string()
    } else {
        format!("Go to move #{mv}")
    }
}
