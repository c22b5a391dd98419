use super::board::Board;
use super::types::{Position, Symbol};

/// Exhaustive minimax with alpha-beta pruning, bound to the symbol it plays
/// for. There is no depth limit: recursion only stops at a win, a loss or a
/// full board, so the search is exponential in the number of open cells.
pub struct Minimax {
    bot: Symbol,
    win_count: usize,
}

impl Minimax {
    const WIN: i32 = 1;
    const DRAW: i32 = 0;
    const LOSS: i32 = -1;

    pub fn new(bot: Symbol, win_count: usize) -> Self {
        Self { bot, win_count }
    }

    pub fn symbol(&self) -> Symbol {
        self.bot
    }

    /// Returns the optimal move for the bound symbol. Ties break on the
    /// first move in enumeration order, so repeated calls on the same board
    /// return the same move.
    ///
    /// Panics on a full board: the controller must detect a draw before
    /// asking for a move, so reaching this is a bug, not a game state.
    pub fn get_best_move(&self, board: &mut Board) -> Position {
        let mut best_score = i32::MIN;
        let mut best_move = None;
        let mut alpha = i32::MIN;
        let beta = i32::MAX;

        for pos in board.valid_moves() {
            board.place(pos, self.bot);
            let score = self.minimax(board, self.bot.other(), alpha, beta);
            board.clear(pos);

            if score > best_score {
                best_score = score;
                best_move = Some(pos);
            }

            alpha = alpha.max(best_score);
            if beta <= alpha {
                break;
            }
        }

        match best_move {
            Some(pos) => pos,
            None => panic!("get_best_move called on a full board"),
        }
    }

    /// Score of the position with `to_move` next, from the bot's
    /// perspective. The board is checked for a finished game before turn
    /// order is consulted: only the caller's just-applied move can have
    /// ended it. The bot's line is checked first; a (normally impossible)
    /// position holding completed lines for both symbols counts as a win.
    fn minimax(&self, board: &mut Board, to_move: Symbol, mut alpha: i32, mut beta: i32) -> i32 {
        if board.is_won(self.bot, self.win_count) {
            return Self::WIN;
        }
        if board.is_won(self.bot.other(), self.win_count) {
            return Self::LOSS;
        }

        let moves = board.valid_moves();
        if moves.is_empty() {
            return Self::DRAW;
        }

        if to_move == self.bot {
            let mut best_score = i32::MIN;
            for pos in moves {
                board.place(pos, self.bot);
                let score = self.minimax(board, self.bot.other(), alpha, beta);
                board.clear(pos);

                best_score = best_score.max(score);
                alpha = alpha.max(best_score);
                if beta <= alpha {
                    break;
                }
            }
            best_score
        } else {
            let mut best_score = i32::MAX;
            for pos in moves {
                board.place(pos, self.bot.other());
                let score = self.minimax(board, self.bot, alpha, beta);
                board.clear(pos);

                best_score = best_score.min(score);
                beta = beta.min(best_score);
                if beta <= alpha {
                    break;
                }
            }
            best_score
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Plain minimax without pruning, used as the reference the pruned
    /// search must agree with.
    fn full_minimax(engine: &Minimax, board: &mut Board, to_move: Symbol) -> i32 {
        if board.is_won(engine.bot, engine.win_count) {
            return Minimax::WIN;
        }
        if board.is_won(engine.bot.other(), engine.win_count) {
            return Minimax::LOSS;
        }

        let moves = board.valid_moves();
        if moves.is_empty() {
            return Minimax::DRAW;
        }

        let mut scores = Vec::new();
        for pos in moves {
            board.place(pos, to_move);
            scores.push(full_minimax(engine, board, to_move.other()));
            board.clear(pos);
        }

        if to_move == engine.bot {
            scores.into_iter().max().unwrap()
        } else {
            scores.into_iter().min().unwrap()
        }
    }

    fn full_best_move(engine: &Minimax, board: &mut Board) -> (Position, i32) {
        let mut best = None;
        for pos in board.valid_moves() {
            board.place(pos, engine.bot);
            let score = full_minimax(engine, board, engine.bot.other());
            board.clear(pos);
            if best.is_none_or(|(_, s)| score > s) {
                best = Some((pos, score));
            }
        }
        best.unwrap()
    }

    #[test]
    fn test_completes_four_in_a_row() {
        // Near-full board keeps the open-cell count small: X completes at
        // (0, 4) instead of anything else.
        let mut board = Board::from_rows(&[
            "XXXX.", //
            "OOXO.", //
            "OXOX.", //
            "XOXOO", //
            "OXOXX",
        ]);
        let engine = Minimax::new(Symbol::X, 5);
        assert_eq!(engine.get_best_move(&mut board), Position::new(0, 4));
    }

    #[test]
    fn test_blocks_when_it_cannot_win() {
        // Tic-tac-toe sized game: O must take (2, 0) or X wins the column.
        let mut board = Board::from_rows(&["XO.", "X.O", "..."]);
        let engine = Minimax::new(Symbol::O, 3);
        assert_eq!(engine.get_best_move(&mut board), Position::new(2, 0));
    }

    #[test]
    fn test_deterministic_across_calls() {
        let mut board = Board::from_rows(&["X.O", "...", "..X"]);
        let engine = Minimax::new(Symbol::O, 3);
        let first = engine.get_best_move(&mut board);
        for _ in 0..5 {
            assert_eq!(engine.get_best_move(&mut board), first);
        }
    }

    #[test]
    fn test_board_restored_after_search() {
        let mut board = Board::from_rows(&["XO.", "X.O", "..."]);
        let snapshot = board.clone();
        let engine = Minimax::new(Symbol::O, 3);
        engine.get_best_move(&mut board);
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_empty_tic_tac_toe_is_not_lost() {
        // A perfect game of 3-in-a-row on 3x3 is a draw; the first move must
        // never evaluate as forced loss.
        let mut board = Board::new(3);
        let engine = Minimax::new(Symbol::X, 3);
        let score = engine.minimax(&mut board, Symbol::X, i32::MIN, i32::MAX);
        assert_eq!(score, Minimax::DRAW);
    }

    #[test]
    fn test_pruning_matches_full_minimax() {
        let boards = [
            Board::from_rows(&["X.O", "...", "..X"]),
            Board::from_rows(&["XO.", "X.O", "..."]),
            Board::from_rows(&["O.X", ".X.", "O.."]),
            Board::from_rows(&["...", ".X.", "..O"]),
        ];

        for board in boards {
            for symbol in [Symbol::X, Symbol::O] {
                let engine = Minimax::new(symbol, 3);
                let mut pruned_board = board.clone();
                let mut full_board = board.clone();

                let pruned_move = engine.get_best_move(&mut pruned_board);
                let pruned_score =
                    engine.minimax(&mut pruned_board, symbol, i32::MIN, i32::MAX);
                let (full_move, full_score) = full_best_move(&engine, &mut full_board);

                assert_eq!(pruned_move, full_move);
                assert_eq!(pruned_score, full_score);
            }
        }
    }

    #[test]
    fn test_double_line_resolves_in_bots_favour() {
        // Both symbols hold completed lines; the bot's check runs first.
        let board = Board::from_rows(&["XXX", "OOO", "..."]);
        for symbol in [Symbol::X, Symbol::O] {
            let engine = Minimax::new(symbol, 3);
            let score = engine.minimax(&mut board.clone(), symbol, i32::MIN, i32::MAX);
            assert_eq!(score, Minimax::WIN);
        }
    }

    #[test]
    #[should_panic(expected = "get_best_move called on a full board")]
    fn test_full_board_is_a_contract_violation() {
        let mut board = Board::from_rows(&["XOX", "OXO", "OXO"]);
        let engine = Minimax::new(Symbol::X, 3);
        engine.get_best_move(&mut board);
    }
}
