use super::board::Board;
use super::heuristic::medium_move;
use super::search::Minimax;
use super::session_rng::SessionRng;
use super::types::{Difficulty, Position, Symbol};

/// A source of moves. Bots may probe the board with place/clear pairs during
/// their own turn but must hand it back unchanged, and must not keep a
/// reference across calls.
pub trait Player {
    fn get_move(&mut self, board: &mut Board) -> Position;
}

/// Uniform random choice among the valid moves.
pub struct EasyBot {
    rng: SessionRng,
}

impl EasyBot {
    pub fn new(rng: SessionRng) -> Self {
        Self { rng }
    }
}

impl Player for EasyBot {
    fn get_move(&mut self, board: &mut Board) -> Position {
        let moves = board.valid_moves();
        match self.rng.pick(&moves) {
            Some(&pos) => pos,
            None => panic!("Move requested on a full board"),
        }
    }
}

/// Win/block/centre/corner priority rules.
pub struct MediumBot {
    symbol: Symbol,
    win_count: usize,
    rng: SessionRng,
}

impl MediumBot {
    pub fn new(symbol: Symbol, win_count: usize, rng: SessionRng) -> Self {
        Self {
            symbol,
            win_count,
            rng,
        }
    }
}

impl Player for MediumBot {
    fn get_move(&mut self, board: &mut Board) -> Position {
        medium_move(board, self.symbol, self.win_count, &mut self.rng)
    }
}

/// Exhaustive search; the engine stays bound to one symbol for the
/// player's lifetime.
pub struct HardBot {
    engine: Minimax,
}

impl HardBot {
    pub fn new(symbol: Symbol, win_count: usize) -> Self {
        Self {
            engine: Minimax::new(symbol, win_count),
        }
    }

    pub fn symbol(&self) -> Symbol {
        self.engine.symbol()
    }
}

impl Player for HardBot {
    fn get_move(&mut self, board: &mut Board) -> Position {
        self.engine.get_best_move(board)
    }
}

/// Builds the bot for a difficulty tier.
pub fn bot_player(
    difficulty: Difficulty,
    symbol: Symbol,
    win_count: usize,
    rng: SessionRng,
) -> Box<dyn Player> {
    match difficulty {
        Difficulty::Easy => Box::new(EasyBot::new(rng)),
        Difficulty::Medium => Box::new(MediumBot::new(symbol, win_count, rng)),
        Difficulty::Hard => Box::new(HardBot::new(symbol, win_count)),
    }
}
