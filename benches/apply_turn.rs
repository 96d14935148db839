use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use regicide_engine::{Game, GameConfig, WireState};

fn table(players: usize) -> Game {
    let ids: Vec<String> = (0..players).map(|i| format!("p{i}")).collect();
    Game::start(ids.as_slice(), GameConfig::default().with_seed(players as u64)).unwrap()
}

fn apply_turn(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_turn");
    for players in [1usize, 2, 4] {
        let game = table(players);
        let id = game.active_player().id.to_string();
        let single = game.active_player().hand()[0];

        group.bench_function(BenchmarkId::new("single", players), |b| {
            b.iter(|| black_box(game.apply_combo(&id, &[single])))
        });

        group.bench_function(BenchmarkId::new("legal_combos", players), |b| {
            b.iter(|| black_box(game.legal_combos()))
        });
    }
    group.finish();
}

fn wire(c: &mut Criterion) {
    let mut group = c.benchmark_group("wire");
    let game = table(4);
    let state = game.to_wire();
    let json = state.to_json().unwrap();

    group.bench_function("to_wire", |b| b.iter(|| black_box(game.to_wire())));
    group.bench_function("from_wire", |b| b.iter(|| black_box(Game::from_wire(&state))));
    group.bench_function("from_json", |b| b.iter(|| black_box(WireState::from_json(&json))));
    group.bench_function("player_view", |b| {
        b.iter(|| black_box(game.to_player_view(Some("p0"))))
    });
    group.finish();
}

criterion_group!(benches, apply_turn, wire);
criterion_main!(benches);
