/*!
 * Engine Benchmarks
 *
 * Cost of each engine as workloads grow
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use os_resource_sim::deadlock::{
    check_safety, DeadlockAlgorithm, ResourceRequest, ResourceState, ResourceVector,
};
use os_resource_sim::memory::{replay, ReplacementPolicy};
use os_resource_sim::scheduler::{schedule, Process, SchedulingAlgorithm, TimeQuantum};

fn workload(size: u32) -> Vec<Process> {
    (1..=size)
        .map(|id| {
            let arrival = u64::from(id) * 2;
            let burst = u64::from(id * 7 % 13) + 1;
            Process::new(id, arrival, burst).with_priority((id % 5) as i32)
        })
        .collect()
}

fn reference_string(len: usize) -> Vec<i64> {
    (0..len as i64).map(|i| (i * 31 + i / 3) % 64).collect()
}

fn bench_schedulers(c: &mut Criterion) {
    let quantum = TimeQuantum::new(4).ok();

    for size in [16u32, 256, 2048] {
        let mut group = c.benchmark_group(format!("schedule_{}", size));
        let processes = workload(size);

        for algorithm in SchedulingAlgorithm::ALL {
            group.bench_with_input(
                BenchmarkId::from_parameter(algorithm),
                &processes,
                |b, processes| {
                    b.iter(|| schedule(black_box(processes), algorithm, quantum).unwrap());
                },
            );
        }

        group.finish();
    }
}

fn bench_page_replacement(c: &mut Criterion) {
    let mut group = c.benchmark_group("page_replacement");
    let pages = reference_string(10_000);

    for frames in [4usize, 32] {
        for policy in ReplacementPolicy::ALL {
            group.bench_with_input(
                BenchmarkId::new(policy.as_str(), frames),
                &frames,
                |b, &frames| {
                    b.iter(|| replay(black_box(&pages), frames, policy).unwrap());
                },
            );
        }
    }

    group.finish();
}

fn bench_safety_checks(c: &mut Criterion) {
    let mut group = c.benchmark_group("safety_check");
    let state = ResourceState::idle(ResourceVector::new(4096, 4096, 4096));
    let pending: Vec<_> = (1..=1024)
        .map(|id| ResourceRequest::new(id, ResourceVector::new(u64::from(id % 4), 1, 2)))
        .collect();

    for algorithm in DeadlockAlgorithm::ALL {
        group.bench_function(algorithm.as_str(), |b| {
            b.iter(|| check_safety(black_box(&pending), &state, algorithm));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_schedulers,
    bench_page_replacement,
    bench_safety_checks
);
criterion_main!(benches);
