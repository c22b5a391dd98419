use super::types::{Position, Symbol};

const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Square gomoku board. The size is fixed at construction; cells are only
/// ever written through `place` and `clear`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Symbol>>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        if size == 0 {
            panic!("Board size must be positive");
        }
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Build a board from row strings of `X`, `O` and `.`, e.g. `"X.O.."`.
    #[cfg(test)]
    pub fn from_rows(rows: &[&str]) -> Self {
        let size = rows.len();
        let mut board = Self::new(size);
        for (row, line) in rows.iter().enumerate() {
            assert_eq!(line.len(), size, "board rows must form a square");
            for (col, ch) in line.chars().enumerate() {
                let cell = match ch {
                    'X' => Some(Symbol::X),
                    'O' => Some(Symbol::O),
                    '.' => None,
                    _ => panic!("unexpected cell char: {}", ch),
                };
                board.cells[row * size + col] = cell;
            }
        }
        board
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    pub fn get(&self, pos: Position) -> Option<Symbol> {
        self.cells[pos.row * self.size + pos.col]
    }

    pub fn place(&mut self, pos: Position, symbol: Symbol) {
        let index = pos.row * self.size + pos.col;
        debug_assert!(self.cells[index].is_none(), "cell is already marked");
        self.cells[index] = Some(symbol);
    }

    /// Reverts a speculative `place`. Every search probe must pair each
    /// `place` with a `clear` before returning.
    pub fn clear(&mut self, pos: Position) {
        self.cells[pos.row * self.size + pos.col] = None;
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// All empty cells in row-major order. Enumeration order is part of the
    /// contract: the heuristic and the search tie-break on first-encountered.
    pub fn valid_moves(&self) -> Vec<Position> {
        let mut moves = Vec::new();
        for (index, cell) in self.cells.iter().enumerate() {
            if cell.is_none() {
                moves.push(Position::new(index / self.size, index % self.size));
            }
        }
        moves
    }

    /// True iff `symbol` has a run of `win_count` consecutive cells along a
    /// row, column or either diagonal. Every cell is tried as a run start;
    /// starts whose run would leave the board are skipped, so a board
    /// smaller than `win_count` simply scans to false.
    pub fn is_won(&self, symbol: Symbol, win_count: usize) -> bool {
        let span = (win_count - 1) as isize;
        for row in 0..self.size {
            for col in 0..self.size {
                if self.cells[row * self.size + col] != Some(symbol) {
                    continue;
                }

                for (dr, dc) in DIRECTIONS {
                    let end_row = row as isize + span * dr;
                    let end_col = col as isize + span * dc;
                    if end_row < 0
                        || end_col < 0
                        || end_row >= self.size as isize
                        || end_col >= self.size as isize
                    {
                        continue;
                    }

                    let run = (0..win_count as isize).all(|i| {
                        let r = (row as isize + i * dr) as usize;
                        let c = (col as isize + i * dc) as usize;
                        self.cells[r * self.size + c] == Some(symbol)
                    });
                    if run {
                        return true;
                    }
                }
            }
        }
        false
    }
}
