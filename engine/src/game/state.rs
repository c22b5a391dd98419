use super::board::Board;
use super::types::{GameStatus, Position, Symbol};

/// Full state of one game. Mutated only through `apply`; once the status
/// leaves `InProgress` the state is frozen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub win_count: usize,
    pub current: Symbol,
    pub moves: usize,
    pub status: GameStatus,
    pub last_move: Option<Position>,
}

impl GameState {
    pub fn new(board_size: usize, win_count: usize, starting_symbol: Symbol) -> Self {
        Self {
            board: Board::new(board_size),
            win_count,
            current: starting_symbol,
            moves: 0,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    pub fn winner(&self) -> Option<Symbol> {
        match self.status {
            GameStatus::Won(symbol) => Some(symbol),
            _ => None,
        }
    }

    /// Applies a move for the symbol whose turn it is. On error the state is
    /// left untouched.
    pub fn apply(&mut self, pos: Position) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if !self.board.in_bounds(pos) {
            return Err("Position out of bounds".to_string());
        }

        if self.board.get(pos).is_some() {
            return Err("Cell is already marked".to_string());
        }

        self.board.place(pos, self.current);
        self.moves += 1;
        self.last_move = Some(pos);

        if self.board.is_won(self.current, self.win_count) {
            self.status = GameStatus::Won(self.current);
        } else if self.moves == self.board.size() * self.board.size() {
            self.status = GameStatus::Draw;
        } else {
            self.current = self.current.other();
        }

        Ok(())
    }
}
