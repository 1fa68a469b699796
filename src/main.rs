/*!
 * OS Resource Simulator - Command Line Entry Point
 *
 * - No arguments: run the demonstration workloads through every engine
 * - `ossim <requests.json>`: answer a JSON array of requests through the
 *   engine pool and print the JSON array of responses
 */

use anyhow::{Context, Result};
use os_resource_sim::deadlock::ResourceVector;
use os_resource_sim::{
    check_safety, init_tracing, replay, schedule, DeadlockAlgorithm, EnginePool, Job,
    ReplacementPolicy, Request, ResourceState, SchedulingAlgorithm, SimConfig, TimeQuantum,
};
use tracing::info;

const DEMO_PAGES: [i64; 12] = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5];
const DEMO_FRAMES: usize = 3;

fn main() -> Result<()> {
    let config = SimConfig::from_env().context("invalid environment configuration")?;
    init_tracing(config.trace_json);

    match std::env::args().nth(1) {
        Some(path) => run_batch(&path, &config),
        None => run_demo(&config),
    }
}

fn run_batch(path: &str, config: &SimConfig) -> Result<()> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("reading {}", path))?;
    let mut requests: Vec<Request> =
        serde_json::from_str(&raw).with_context(|| format!("parsing requests in {}", path))?;
    info!(path, requests = requests.len(), "loaded request batch");

    // The engine never defaults the quantum; the CLI does
    for request in &mut requests {
        if let Request::Schedule {
            algorithm: SchedulingAlgorithm::RoundRobin,
            quantum,
            ..
        } = request
        {
            quantum.get_or_insert(config.default_quantum);
        }
    }

    let pool = EnginePool::from_config(config)?;
    let responses = pool.submit_batch(requests)?;
    println!("{}", serde_json::to_string_pretty(&responses)?);

    let stats = pool.stats();
    info!(handled = stats.handled, rejected = stats.rejected, "batch complete");
    Ok(())
}

fn demo_jobs() -> Vec<Job> {
    vec![
        Job::new(1, 0, 5).with_priority(3).with_demand(ResourceVector::new(1, 1, 2)),
        Job::new(2, 1, 3).with_priority(1).with_demand(ResourceVector::new(1, 0, 1)),
        Job::new(3, 2, 8).with_priority(4).with_demand(ResourceVector::new(2, 1, 3)),
        Job::new(4, 4, 6).with_priority(2).with_demand(ResourceVector::new(1, 1, 2)),
    ]
}

fn run_demo(config: &SimConfig) -> Result<()> {
    let jobs = demo_jobs();
    let processes: Vec<_> = jobs.iter().map(Job::process).collect();
    let quantum = TimeQuantum::new(config.default_quantum)?;

    for algorithm in SchedulingAlgorithm::ALL {
        let result = schedule(&processes, algorithm, Some(quantum))?;

        println!("\n{} scheduling", algorithm.as_str().to_uppercase());
        println!("PID\tArrival\tBurst\tCompletion\tTurnaround\tWaiting");
        for e in &result.entries {
            println!(
                "{}\t{}\t{}\t{}\t\t{}\t\t{}",
                e.id, e.arrival_time, e.burst_time, e.completion_time, e.turnaround_time,
                e.waiting_time
            );
        }
        println!(
            "avg turnaround {:.2}, avg waiting {:.2}, throughput {:.3}",
            result.metrics.avg_turnaround_time,
            result.metrics.avg_waiting_time,
            result.metrics.throughput
        );
    }

    for policy in ReplacementPolicy::ALL {
        let stats = replay(&DEMO_PAGES, DEMO_FRAMES, policy)?;
        println!(
            "\n{} page replacement ({} frames): hits {}, faults {}",
            policy.as_str().to_uppercase(),
            DEMO_FRAMES,
            stats.hits,
            stats.faults
        );
    }

    let state = ResourceState::new(ResourceVector::new(4, 2, 8), ResourceVector::new(2, 1, 4))?;
    let pending: Vec<_> = jobs.iter().map(Job::request).collect();
    for algorithm in DeadlockAlgorithm::ALL {
        let verdict = check_safety(&pending, &state, algorithm);
        println!(
            "\n{} check: {} ({})",
            algorithm,
            if verdict.safe { "safe" } else { "unsafe" },
            verdict.reason
        );
    }

    info!("demo complete");
    Ok(())
}
