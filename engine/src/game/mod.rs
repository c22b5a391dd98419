mod board;
mod heuristic;
mod player;
mod search;
mod session_rng;
mod state;
mod types;

pub use board::Board;
pub use heuristic::{find_winning_move, medium_move};
pub use player::{EasyBot, HardBot, MediumBot, Player, bot_player};
pub use search::Minimax;
pub use session_rng::SessionRng;
pub use state::GameState;
pub use types::{Difficulty, GameStatus, Position, Symbol};

/// Run length required to win a standard gomoku game.
pub const GOMOKU_WIN_COUNT: usize = 5;
