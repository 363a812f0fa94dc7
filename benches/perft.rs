//! Throughput benchmarks for move generation and the perft driver.

use cinder::board::Board;
use cinder::movegen::{self, get_all_moves, perft};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_legal_movegen(c: &mut Criterion) {
    movegen::init();
    let mut board =
        Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
            .expect("valid FEN");
    c.bench_function("legal_moves_kiwipete", |b| {
        b.iter(|| black_box(get_all_moves(&mut board).len()))
    });
}

fn bench_perft(c: &mut Criterion) {
    movegen::init();
    let mut board = Board::start_position();
    c.bench_function("perft_3_startpos", |b| {
        b.iter(|| black_box(perft(&mut board, 3)))
    });
}

criterion_group!(benches, bench_legal_movegen, bench_perft);
criterion_main!(benches);
