use gomoku_engine::game::{Board, Player, Position, Symbol};

use crate::input;

/// Reads moves from stdin, re-prompting until the coordinates name an empty
/// in-range cell. Malformed input is reported and retried, never fatal.
pub struct HumanPlayer {
    symbol: Symbol,
}

impl HumanPlayer {
    pub fn new(symbol: Symbol) -> Self {
        Self { symbol }
    }
}

impl Player for HumanPlayer {
    fn get_move(&mut self, board: &mut Board) -> Position {
        let limit = board.size() as u32 - 1;
        loop {
            let row = read_coordinate(&format!("[{}] Enter a row (0-{}): ", self.symbol, limit), limit);
            let col = read_coordinate(&format!("[{}] Enter a col (0-{}): ", self.symbol, limit), limit);

            let pos = Position::new(row as usize, col as usize);
            if board.get(pos).is_none() {
                return pos;
            }
            println!("Invalid move. Try again");
        }
    }
}

fn read_coordinate(prompt: &str, limit: u32) -> u32 {
    loop {
        match input::read_line(prompt) {
            Some(line) => match input::parse_number(&line, 0, limit) {
                Ok(value) => return value,
                Err(err) => println!("{}", err),
            },
            None => {
                // Stdin is gone; there is no way to continue the game.
                println!("Input closed, exiting");
                std::process::exit(0);
            }
        }
    }
}
