/// Install the tracing subscriber used by demo programs and tooling built on
/// `siftflow_core`.
///
/// Reads the filter from `RUST_LOG` (default level `info`). The traversal
/// engine itself never logs; builder assembly and config loading emit debug
/// events that this subscriber surfaces. Safe to call more than once: repeat
/// installations are quietly ignored via `try_init`.
pub fn init() {
    let env = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(env))
        .try_init();
}
