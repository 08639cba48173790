use criterion::{black_box, criterion_group, criterion_main, Criterion};
use classic_tetris::core::{collides, rotate, ActivePiece, Board, GameState};
use classic_tetris::term::{FrameBuffer, GameView, Viewport};
use classic_tetris::types::{Cell, PieceKind, RotateDir};

fn bench_tick(c: &mut Criterion) {
    c.bench_function("game_tick", |b| {
        let mut state = GameState::new(12345);
        state.start();
        b.iter(|| {
            if state.game_over() {
                state.start();
            }
            black_box(state.tick());
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Cell::merged(None));
                }
            }
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let shape = ActivePiece::spawn(PieceKind::I).shape;
    c.bench_function("rotate_i", |b| {
        b.iter(|| black_box(rotate(black_box(&shape), RotateDir::Clockwise)))
    });
}

fn bench_collides(c: &mut Criterion) {
    let board = Board::new();
    let piece = ActivePiece::spawn(PieceKind::T);
    c.bench_function("collides", |b| {
        b.iter(|| black_box(collides(black_box(&piece), &board, 0, 1)))
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    c.bench_function("hard_drop_and_settle", |b| {
        let mut state = GameState::new(12345);
        state.start();
        b.iter(|| {
            if state.game_over() {
                state.start();
            }
            black_box(state.hard_drop());
            state.tick();
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();
    let snap = state.snapshot();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("render_80x24", |b| {
        b.iter(|| view.render_into(black_box(&snap), Viewport::new(80, 24), &mut fb))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_rotate,
    bench_collides,
    bench_hard_drop,
    bench_render
);
criterion_main!(benches);
