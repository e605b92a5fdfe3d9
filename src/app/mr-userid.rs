use anyhow::*;
use clap::Parser;
use mrstream::standalone::{engine::run_job, fetch::HdfsCat, Args, Job};
use mrstream::telemetry;

fn parse_args() -> Job {
    Args::parse().into()
}

fn main() -> Result<()> {
    let job = parse_args();
    telemetry::init_logger();
    tracing::debug!(args = ?std::env::args().collect::<Vec<_>>(), "starting");

    let results = run_job(&job, &HdfsCat::default())
        .with_context(|| format!("job `{}` -> `{}` failed", job.input, job.output.display()))?;
    tracing::info!(courses = results.len(), "done");
    Ok(())
}
