use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fairy_engine::{Board, Position};

fn all_moves(board: &Board) -> usize {
    let mut total = 0;
    for row in 0..8 {
        for col in 0..8 {
            total += board.get_valid_moves((row, col)).len();
        }
    }
    total
}

fn move_undo_cycle(mut board: Board, moves: &[(Position, Position)]) -> Board {
    for &(start, end) in moves {
        board.move_piece(start, end);
    }
    while board.undo_move() {}
    board
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("fantasy all moves", |b| {
        let board = Board::fantasy();
        b.iter(|| all_moves(black_box(&board)))
    });
    c.bench_function("draughts all moves", |b| {
        let board = Board::draughts();
        b.iter(|| all_moves(black_box(&board)))
    });
    c.bench_function("fantasy move-undo cycle", |b| {
        let opening: &[(Position, Position)] = &[
            ((6, 4), (4, 4)),
            ((1, 4), (3, 4)),
            ((7, 6), (5, 5)),
            ((0, 1), (2, 2)),
        ];
        b.iter(|| move_undo_cycle(black_box(Board::fantasy()), black_box(opening)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
