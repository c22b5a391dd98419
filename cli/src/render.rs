use gomoku_engine::game::{Board, Position, Symbol};

/// Renders the board as rows of `X`, `O` and `.` separated by grid lines.
pub fn render_board(board: &Board) -> String {
    let size = board.size();
    let mut output = String::new();

    for row in 0..size {
        let cells: Vec<String> = (0..size)
            .map(|col| match board.get(Position::new(row, col)) {
                Some(Symbol::X) => "X".to_string(),
                Some(Symbol::O) => "O".to_string(),
                None => ".".to_string(),
            })
            .collect();
        output.push_str(&cells.join(" | "));
        output.push('\n');

        if row < size - 1 {
            output.push_str(&"---+".repeat(size - 1));
            output.push_str("---\n");
        }
    }

    output
}
