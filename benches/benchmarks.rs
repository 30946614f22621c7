criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        classifying_gapped_flush,
        classifying_full_flush,
        shuffling_deck,
        searching_opening_hand,
        searching_midgame,
        searching_exhaustive,
}

fn classifying_gapped_flush(c: &mut criterion::Criterion) {
    let cards = Card::parse("2h 3h 5h 9h Jh Kh").unwrap();
    c.bench_function("classify a gapped 6-card flush", |b| {
        b.iter(|| classifier::classify(&cards))
    });
}

fn classifying_full_flush(c: &mut criterion::Criterion) {
    let cards = Card::parse("2s 3s 4s 5s 6s 7s 8s 9s Ts Js Qs Ks As").unwrap();
    c.bench_function("classify a 13-card flush", |b| {
        b.iter(|| classifier::classify(&cards))
    });
}

fn shuffling_deck(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(0);
    c.bench_function("shuffle a 104-card Deck", |b| {
        b.iter(|| Deck::shuffled(rng))
    });
}

fn searching_opening_hand(c: &mut criterion::Criterion) {
    let game = Game::new(&Config {
        seed: Some(0),
        ..Config::default()
    });
    c.bench_function("greedy search from an opening hand", |b| {
        b.iter(|| generate_moves(game.hand(), game.board()))
    });
}

fn searching_midgame(c: &mut criterion::Criterion) {
    let mut game = Game::new(&Config {
        seed: Some(1),
        ..Config::default()
    });
    for _ in 0..16 {
        let plan = game.strategy().plan(&game.snapshot());
        plan.moves.iter().for_each(|mv| game.apply(mv));
        game.end_turn();
    }
    c.bench_function("greedy search on a 16-turn board", |b| {
        b.iter(|| generate_moves(game.hand(), game.board()))
    });
}

fn searching_exhaustive(c: &mut criterion::Criterion) {
    let game = Game::new(&Config {
        seed: Some(0),
        ..Config::default()
    });
    let strategy = Strategy::Exhaustive {
        depth: vatikan::EXHAUSTIVE_DEPTH,
    };
    c.bench_function("exhaustive search from an opening hand", |b| {
        b.iter(|| strategy.plan(&game.snapshot()))
    });
}

use rand::SeedableRng;
use rand::rngs::SmallRng;
use vatikan::cards::*;
use vatikan::gameplay::*;
use vatikan::groups::*;
use vatikan::search::*;
