use algobench_core::{BenchError, TrackingAllocator};
use std::process::ExitCode;

#[global_allocator]
static GLOBAL: TrackingAllocator = TrackingAllocator;

fn main() -> ExitCode {
    match algobench_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            // Contract violations exit with 1, everything else with 2
            if err.chain().any(|cause| cause.is::<BenchError>()) {
                ExitCode::from(1)
            } else {
                ExitCode::from(2)
            }
        }
    }
}
