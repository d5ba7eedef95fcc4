use criterion::{criterion_group, criterion_main, Criterion};
use std::sync::Arc;

use service::console::{domain::CreateConsoleInput, repository::mock::MockConsoleRepository, ConsoleService};
use service::game::{domain::CreateGameInput, repository::mock::MockGameRepository, GameService};

fn bench_services(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    let consoles = ConsoleService::new(Arc::new(MockConsoleRepository::default()));
    let seeded = rt.block_on(consoles.create(CreateConsoleInput { name: Some("Bench Console".into()) })).unwrap();

    c.bench_function("console_get", |b| {
        b.iter(|| {
            let _ = rt.block_on(consoles.get(seeded.id)).unwrap();
        });
    });

    c.bench_function("console_create_duplicate", |b| {
        b.iter(|| {
            let res = rt.block_on(consoles.create(CreateConsoleInput { name: Some("Bench Console".into()) }));
            assert!(res.is_err());
        });
    });

    let games = GameService::new(Arc::new(MockGameRepository::with_consoles([seeded.id])));
    c.bench_function("game_create_unknown_console", |b| {
        b.iter(|| {
            let res = rt.block_on(games.create(CreateGameInput { title: Some("Bench Game".into()), console_id: Some(0) }));
            assert!(res.is_err());
        });
    });
}

criterion_group!(benches, bench_services);
criterion_main!(benches);
