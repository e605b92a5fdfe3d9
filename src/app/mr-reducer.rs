use std::io::{self, BufWriter};

use anyhow::*;
use clap::Parser;
use mrstream::cmd::reducer::Args;
use mrstream::{streaming, telemetry};

fn main() -> Result<()> {
    let _ = Args::parse();
    telemetry::init_logger();

    let stdout = BufWriter::new(io::stdout().lock());
    streaming::run_reducer(io::stdin().lock(), stdout).context("reduce stage failed")
}
