use criterion::{black_box, criterion_group, criterion_main, Criterion};

use mathdrill_core::engine::{NextProblem, SessionEngine};
use mathdrill_core::generator::generate;
use mathdrill_core::model::{Operation, SelectionOrder, SessionConfig};
use mathdrill_core::record::ProblemRecord;
use mathdrill_core::report::rank_entries;
use mathdrill_core::scheduler::SessionScheduler;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    group.bench_function("0..=12", |b| {
        b.iter(|| generate(black_box(Operation::Multiplication), 0, 12))
    });

    group.bench_function("0..=100", |b| {
        b.iter(|| generate(black_box(Operation::Addition), 0, 100))
    });

    group.finish();
}

fn bench_scheduler(c: &mut Criterion) {
    let records: Vec<ProblemRecord> = generate(Operation::Addition, 0, 50)
        .unwrap()
        .into_iter()
        .map(|spec| ProblemRecord::new(spec, 5.0))
        .collect();

    let mut group = c.benchmark_group("next_problem");
    for order in [
        SelectionOrder::Random,
        SelectionOrder::Shuffled,
        SelectionOrder::Sequential,
    ] {
        let mut scheduler = SessionScheduler::for_order(order, Some(1));
        group.bench_function(order.to_string(), |b| {
            b.iter(|| scheduler.next_problem(black_box(&records), None))
        });
    }
    group.finish();
}

fn bench_full_session(c: &mut Criterion) {
    c.bench_function("session 0..=12 all correct", |b| {
        b.iter(|| {
            let mut engine = SessionEngine::new();
            let config = SessionConfig::new(Operation::Addition, 0, 12, 5.0).with_seed(3);
            engine.start_session(config).unwrap();
            loop {
                match engine.request_next_problem().unwrap() {
                    NextProblem::Present(spec) => {
                        engine.submit_answer(&spec, spec.answer(), 1.0).unwrap();
                    }
                    NextProblem::Completed(report) => break black_box(report),
                }
            }
        })
    });
}

fn bench_rank(c: &mut Criterion) {
    let records: Vec<ProblemRecord> = generate(Operation::Multiplication, 0, 25)
        .unwrap()
        .into_iter()
        .enumerate()
        .map(|(i, spec)| {
            let mut r = ProblemRecord::new(spec, 5.0);
            r.record_attempt(i % 3 != 0, (i % 17) as f64 * 0.3);
            r
        })
        .collect();

    c.bench_function("rank_entries 26x26", |b| {
        b.iter(|| rank_entries(black_box(&records)))
    });
}

criterion_group!(
    benches,
    bench_generate,
    bench_scheduler,
    bench_full_session,
    bench_rank
);
criterion_main!(benches);
