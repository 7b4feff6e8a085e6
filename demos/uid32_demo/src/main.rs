use std::thread;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn main() {
    // Default to debug so the registry's update event is visible; override
    // with RUST_LOG.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into()))
        .init();

    uid32::set_machine_id(0x00C0_FFEE);

    tracing::info!("generating a few ids from four threads");
    let handles: Vec<_> = (0..4)
        .map(|n| {
            thread::spawn(move || {
                for _ in 0..4 {
                    let id = uid32::generate();
                    tracing::info!(thread = n, uid = %id, "generated");
                }
            })
        })
        .collect();
    for h in handles {
        let _ = h.join();
    }

    // Single-thread throughput loop.
    const ROUNDS: u32 = 1_000_000;
    let start = Instant::now();
    let mut last = uid32::generate();
    for _ in 1..ROUNDS {
        last = uid32::generate();
    }
    let elapsed = start.elapsed();
    tracing::info!(
        rounds = ROUNDS,
        elapsed_ms = elapsed.as_millis() as u64,
        per_sec = (f64::from(ROUNDS) / elapsed.as_secs_f64()) as u64,
        last = %last,
        "throughput"
    );
}
