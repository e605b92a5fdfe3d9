use clap::Parser;

/// Reads `user<TAB>score` lines from stdin and writes each user's mean
/// score to stdout, smallest mean first.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {}
