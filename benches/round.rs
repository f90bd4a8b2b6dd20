use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ninety_nine::core::{GameConfig, GameRng};
use ninety_nine::rules::{NinetyNineRules, RulesEngine};

fn rules(player_count: usize) -> NinetyNineRules {
    NinetyNineRules::new(GameConfig {
        player_count,
        ..GameConfig::default()
    })
    .unwrap()
}

fn bench_legal_actions(c: &mut Criterion) {
    let rules = rules(6);
    let state = rules.initial_state(42);

    c.bench_function("legal_actions_6p", |b| {
        b.iter(|| rules.legal_actions(black_box(&state)))
    });
}

fn bench_state_clone(c: &mut Criterion) {
    let rules = rules(4);
    let state = rules.initial_state(42);

    c.bench_function("state_clone", |b| b.iter(|| black_box(&state).clone()));
}

fn bench_playout(c: &mut Criterion) {
    let rules = rules(4);

    c.bench_function("random_playout_4p", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed += 1;
            let mut state = rules.initial_state(seed);
            let mut policy = GameRng::new(seed);
            for _ in 0..1_000 {
                if rules.is_over(&state) {
                    break;
                }
                let legal = rules.legal_actions(&state);
                let Some(&action) = policy.choose(&legal) else { break };
                rules.apply_action(&mut state, &action).unwrap();
            }
            state
        })
    });
}

criterion_group!(benches, bench_legal_actions, bench_state_clone, bench_playout);
criterion_main!(benches);
