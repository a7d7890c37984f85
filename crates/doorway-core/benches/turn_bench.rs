use criterion::{black_box, criterion_group, criterion_main, Criterion};
use doorway_core::{GameConfig, GameState, Intent, Session, TurnEngine};

fn bench_single_advance(c: &mut Criterion) {
    let engine = TurnEngine::new();
    let state = GameState::canonical();

    c.bench_function("single_advance", |b| {
        b.iter(|| engine.transition(black_box(&state), black_box(Intent::Advance)))
    });
}

fn bench_replay_patrol(c: &mut Criterion) {
    // Spin in place on a large grid so the game never ends
    let state = GameConfig::with_grid_size(64).build().unwrap();
    let engine = TurnEngine::new();
    let intents: Vec<Intent> = (0..1000).map(|i| Intent::Rotate { clockwise: i % 3 == 0 }).collect();

    c.bench_function("replay_1000_rotations", |b| {
        b.iter(|| engine.replay(black_box(&state), intents.iter().copied()))
    });
}

fn bench_session_walk(c: &mut Criterion) {
    // Walk north along the west wall of a large grid, away from the mob
    let config = GameConfig::with_grid_size(256);

    c.bench_function("session_walk_200", |b| {
        b.iter(|| {
            let mut session = Session::new(&config).unwrap();
            for _ in 0..200 {
                let _ = session.advance();
            }
            black_box(session.state().turn())
        })
    });
}

fn bench_board(c: &mut Criterion) {
    let state = GameConfig::with_grid_size(32).build().unwrap();

    c.bench_function("board_32x32", |b| b.iter(|| black_box(&state).board()));
}

criterion_group!(benches, bench_single_advance, bench_replay_patrol, bench_session_walk, bench_board);
criterion_main!(benches);
