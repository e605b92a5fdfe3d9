use std::path::PathBuf;

use clap::Parser;

pub mod engine;
pub mod fetch;

/// Groups the users of every course in one file and writes the distinct
/// users per course.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path of the input file, handed to the content fetcher
    pub input: String,

    /// Local file the results are written to (overwritten)
    pub output: PathBuf,
}

#[derive(Debug, Clone)]
pub struct Job {
    pub input: String,
    pub output: PathBuf,
}

impl From<Args> for Job {
    fn from(args: Args) -> Self {
        Job {
            input: args.input,
            output: args.output,
        }
    }
}
