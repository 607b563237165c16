//! Criterion micro-benchmarks for the broker request round-trip.
//!
//! Measures the serialization overhead the broker adds on top of plan
//! construction: channel crossing, reply delivery, caller wakeup.

use std::sync::Arc;
use std::thread;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use spindle_bench::{bench_signal, bench_spectrum};
use spindle_broker::{cancel_pair, PlanBroker};
use spindle_core::Direction;

fn bench_request_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("broker_request");
    for &n in &[256usize, 1024] {
        group.bench_function(format!("single_caller_{n}"), |b| {
            let (_token, signal) = cancel_pair();
            let broker = PlanBroker::new(signal);
            b.iter(|| {
                let plan = broker
                    .request(bench_signal(n), bench_spectrum(n), Direction::Forward)
                    .unwrap();
                black_box(plan)
            });
        });
    }
    group.finish();
}

fn bench_contended_requests(c: &mut Criterion) {
    c.bench_function("broker_request/four_callers_256", |b| {
        let (_token, signal) = cancel_pair();
        let broker = Arc::new(PlanBroker::new(signal));
        b.iter(|| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let broker = Arc::clone(&broker);
                    thread::spawn(move || {
                        broker
                            .request(bench_signal(256), bench_spectrum(256), Direction::Forward)
                            .unwrap()
                    })
                })
                .collect();
            for h in handles {
                black_box(h.join().unwrap());
            }
        });
    });
}

criterion_group!(benches, bench_request_roundtrip, bench_contended_requests);
criterion_main!(benches);
