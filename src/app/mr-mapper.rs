use std::io::{self, BufWriter};

use anyhow::*;
use clap::Parser;
use mrstream::cmd::mapper::Args;
use mrstream::{streaming, telemetry};

fn main() -> Result<()> {
    let _ = Args::parse();
    telemetry::init_logger();

    let stdout = BufWriter::new(io::stdout().lock());
    streaming::run_mapper(io::stdin().lock(), stdout).context("map stage failed")
}
