//! Hadoop streaming stages for the activity job.
//!
//! The mapper turns raw comma-separated rows into `user<TAB>score` lines,
//! one row at a time. The reducer reads all of those lines, groups them by
//! user and prints each user's mean score, smallest mean first.

use std::io::{BufRead, Write};

pub mod mapper;
pub mod reducer;

pub use mapper::{map, run_mapper};
pub use reducer::{read_pairs, reduce, run_reducer};

use crate::Result;

/// Runs mapper and reducer back to back in memory, the local equivalent of
/// `mr-mapper < input | sort | mr-reducer`.
pub fn run_pipeline<R: BufRead, W: Write>(input: R, output: W) -> Result<()> {
    let mut intermediate = Vec::new();
    run_mapper(input, &mut intermediate)?;
    run_reducer(intermediate.as_slice(), output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_averages_mapped_scores() {
        let input = "course,user,a,score\nc1,5,x,2\nc2,5,x,4\nc1,6,x,1\n";
        let mut out = Vec::new();
        run_pipeline(input.as_bytes(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "6\t1.0\n5\t3.0\n");
    }
}
