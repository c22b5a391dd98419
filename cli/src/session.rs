use gomoku_engine::game::{GameState, GameStatus, Player, Symbol};
use gomoku_engine::log;

use crate::render::render_board;

/// One game from first move to terminal state. Owns the state and both
/// players; the players only see the board during their own turn.
pub struct GameSession {
    state: GameState,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
}

impl GameSession {
    pub fn new(
        board_size: usize,
        win_count: usize,
        starting_symbol: Symbol,
        player_x: Box<dyn Player>,
        player_o: Box<dyn Player>,
    ) -> Self {
        Self {
            state: GameState::new(board_size, win_count, starting_symbol),
            player_x,
            player_o,
        }
    }

    pub fn run(&mut self) -> GameStatus {
        while !self.state.is_over() {
            println!("\nPlayer {}'s turn", self.state.current);
            print!("{}", render_board(&self.state.board));

            let player = match self.state.current {
                Symbol::X => &mut self.player_x,
                Symbol::O => &mut self.player_o,
            };
            let pos = player.get_move(&mut self.state.board);

            if self.state.apply(pos).is_err() {
                // Humans validate before returning and bots only pick from
                // enumerated moves, so this is unreachable in practice.
                println!("Invalid move. Try again");
            }
        }

        print!("{}", render_board(&self.state.board));
        match self.state.winner() {
            Some(symbol) => println!("Player {} wins!", symbol),
            None => println!("Game is a draw"),
        }
        log!(
            "Game over after {} moves: {}",
            self.state.moves,
            match self.state.status {
                GameStatus::Won(symbol) => format!("{} won", symbol),
                _ => "draw".to_string(),
            }
        );

        self.state.status
    }
}
