use std::time::Duration;

use criterion::{Criterion, SamplingMode, criterion_group, criterion_main};
use gomoku_engine::game::{Board, Minimax, Position, SessionRng, Symbol, medium_move};

fn bench_search_tic_tac_toe_opening() {
    // Full-depth search of 3-in-a-row on 3x3, the largest empty board an
    // exhaustive search can open.
    let mut board = Board::new(3);
    let engine = Minimax::new(Symbol::X, 3);
    engine.get_best_move(&mut board);
}

fn bench_search_gomoku_endgame() {
    // 5x5 gomoku position with six open cells.
    let mut board = Board::new(5);
    let marks = [
        (0, 0, Symbol::X),
        (0, 1, Symbol::O),
        (0, 2, Symbol::X),
        (0, 3, Symbol::O),
        (1, 0, Symbol::O),
        (1, 1, Symbol::X),
        (1, 2, Symbol::O),
        (1, 3, Symbol::X),
        (2, 0, Symbol::X),
        (2, 1, Symbol::O),
        (2, 2, Symbol::X),
        (2, 3, Symbol::O),
        (3, 0, Symbol::O),
        (3, 1, Symbol::X),
        (3, 2, Symbol::O),
        (3, 3, Symbol::X),
        (4, 0, Symbol::X),
        (4, 1, Symbol::O),
        (4, 4, Symbol::O),
    ];
    for (row, col, symbol) in marks {
        board.place(Position::new(row, col), symbol);
    }

    let engine = Minimax::new(Symbol::X, 5);
    engine.get_best_move(&mut board);
}

fn bench_medium_strategy_mid_game() {
    let mut board = Board::new(15);
    let mut rng = SessionRng::new(42);
    let mut current = Symbol::X;

    for _ in 0..30 {
        let pos = medium_move(&mut board, current, 5, &mut rng);
        board.place(pos, current);
        current = current.other();
    }
}

fn search_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("move_selection");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(10)
        .measurement_time(Duration::from_secs(60));

    group.bench_function("search_tic_tac_toe_opening", |b| {
        b.iter(bench_search_tic_tac_toe_opening)
    });

    group.bench_function("search_gomoku_endgame", |b| {
        b.iter(bench_search_gomoku_endgame)
    });

    group.bench_function("medium_strategy_mid_game", |b| {
        b.iter(bench_medium_strategy_mid_game)
    });

    group.finish();
}

criterion_group!(benches, search_bench);
criterion_main!(benches);
