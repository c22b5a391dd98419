use super::board::Board;
use super::session_rng::SessionRng;
use super::types::{Position, Symbol};

/// Finds a move that completes a winning run for `symbol`, if one exists.
/// Probes each candidate with a place/clear pair, so the board is returned
/// exactly as it was handed in.
pub fn find_winning_move(
    board: &mut Board,
    symbol: Symbol,
    win_count: usize,
    moves: &[Position],
) -> Option<Position> {
    for &pos in moves {
        board.place(pos, symbol);
        let wins = board.is_won(symbol, win_count);
        board.clear(pos);

        if wins {
            return Some(pos);
        }
    }
    None
}

/// Medium-difficulty move selection. Rules in priority order: win now,
/// block the opponent's win, take the centre, take a random open corner,
/// fall back to a random valid move.
///
/// Panics if the board is full; the controller never asks a finished game
/// for a move.
pub fn medium_move(
    board: &mut Board,
    symbol: Symbol,
    win_count: usize,
    rng: &mut SessionRng,
) -> Position {
    let moves = board.valid_moves();
    if moves.is_empty() {
        panic!("Move requested on a full board");
    }

    if let Some(pos) = find_winning_move(board, symbol, win_count, &moves) {
        return pos;
    }

    if let Some(pos) = find_winning_move(board, symbol.other(), win_count, &moves) {
        return pos;
    }

    let centre = Position::new(board.size() / 2, board.size() / 2);
    if board.get(centre).is_none() {
        return centre;
    }

    let edge = board.size() - 1;
    let corners = [
        Position::new(0, 0),
        Position::new(0, edge),
        Position::new(edge, 0),
        Position::new(edge, edge),
    ];
    let open_corners: Vec<Position> = corners
        .iter()
        .copied()
        .filter(|&pos| board.get(pos).is_none())
        .collect();
    if let Some(&pos) = rng.pick(&open_corners) {
        return pos;
    }

    *rng.pick(&moves).unwrap()
}
