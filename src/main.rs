use std::process;

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    if let Err(e) = fiprofile::cli::run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
