use clap::Parser;

/// Reads raw comma-separated rows from stdin and writes `user<TAB>score`
/// lines to stdout. Rows whose user id is not numeric are dropped.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {}
