use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use worker_pool_core::{DelayRange, Job, PoolConfig};
use worker_pool_task_channels::WorkerPool;

/// Runs a batch of jobs through a bounded worker pool with a timeout
#[derive(Debug, Parser)]
#[command(name = "worker-pool-demo")]
struct Args {
    /// JSON configuration file
    #[arg(long, default_value = "config.json")]
    config: PathBuf,

    /// Number of jobs, with ids 1..=jobs
    #[arg(long, default_value_t = 10)]
    jobs: i64,

    /// Overrides num_workers from the config
    #[arg(long)]
    workers: Option<usize>,

    /// Overrides timeout_ms from the config; 0 cancels immediately
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Disables the simulated work delay
    #[arg(long)]
    no_delay: bool,
}

fn demo_config() -> PoolConfig {
    PoolConfig {
        timeout_ms: Some(2_000),
        work_delay_ms: Some(DelayRange::new(100, 600)),
        ..PoolConfig::default()
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let start_time = Instant::now();

    let mut config = match PoolConfig::load(&args.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!("{}; using default configuration", e);
            demo_config()
        }
    };
    if let Some(workers) = args.workers {
        config.num_workers = workers;
    }
    if let Some(timeout_ms) = args.timeout_ms {
        config.timeout_ms = Some(timeout_ms);
    }
    if args.no_delay {
        config.work_delay_ms = None;
    }

    let pool = WorkerPool::from_config(config)?;

    let config = pool.config();
    println!("=== WORKER POOL ===");
    println!("Configuration:");
    println!("  - Workers: {}", config.num_workers);
    println!("  - Jobs: {}", args.jobs);
    println!("  - Queue capacity: {}", config.queue_capacity);
    match config.timeout_ms {
        Some(ms) => println!("  - Timeout: {}ms", ms),
        None => println!("  - Timeout: none"),
    }
    match config.work_delay_ms {
        Some(delay) => println!("  - Work delay: {}..={}ms", delay.min_ms, delay.max_ms),
        None => println!("  - Work delay: none"),
    }

    let handle = pool.handle();

    // Ctrl+C cancels the run; the listener is aborted once the pool returns
    let ctrl_c = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!("\n=== Ctrl+C received, cancelling ===");
            handle.cancel();
        }
    });

    let result = pool.submit(Job::batch(1..=args.jobs)).await;
    ctrl_c.abort();
    let _ = ctrl_c.await;
    let report = result?;

    println!("\n=== RESULTS ===");
    let mut results = report.results.clone();
    results.sort_by_key(|r| r.job_id);
    for result in &results {
        match &result.outcome {
            Ok(value) => println!(
                "job {} -> {} (worker {})",
                result.job_id, value, result.worker_id
            ),
            Err(e) => println!("job {} failed: {}", result.job_id, e),
        }
    }

    let abandoned = report.abandoned();
    if !abandoned.is_empty() {
        println!("Abandoned jobs: {:?}", abandoned);
    }

    println!("\n=== WORKERS ===");
    for (worker_id, tally) in &report.tallies {
        println!(
            "worker {}: {} succeeded, {} failed",
            worker_id, tally.succeeded, tally.failed
        );
    }

    println!("\nPool {}", report);
    println!("Total time: {:.2}s", start_time.elapsed().as_secs_f64());
    Ok(())
}
