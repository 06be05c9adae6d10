use criterion::{criterion_group, criterion_main, Criterion};
use shadow_acquire::{derandomized_plan, ladder_observables, random_observables, SchedulerConfig};
use shadow_core::RngHandle;

fn bench_derandomize(c: &mut Criterion) {
    let ladder = ladder_observables(8).expect("ladder");
    c.bench_function("derandomize_ladder_8", |b| {
        b.iter(|| {
            let _ = derandomized_plan(&ladder, 5, SchedulerConfig::default()).expect("plan");
        });
    });

    let mut rng = RngHandle::from_seed(4242);
    let random = random_observables(20, 200, 3, &mut rng).expect("observables");
    c.bench_function("derandomize_random_20x200", |b| {
        b.iter(|| {
            let _ = derandomized_plan(&random, 10, SchedulerConfig::default()).expect("plan");
        });
    });
}

criterion_group!(benches, bench_derandomize);
criterion_main!(benches);
