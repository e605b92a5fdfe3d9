use std::io::{BufRead, Write};

use crate::workload::{self, activity};
use crate::{MapOutput, Result};

/// Lazily maps every line of `input`, skipping filtered rows.
///
/// Lines are read one at a time as the iterator is consumed.
pub fn map<'a, R: BufRead + 'a>(input: R) -> MapOutput<'a> {
    let iter = input
        .lines()
        .enumerate()
        .filter_map(|(i, line)| match line {
            Ok(line) => activity::map_line(i + 1, &line).transpose(),
            Err(e) => Some(Err(e.into())),
        });
    Box::new(iter)
}

/// Runs the mapper stage, writing one `key<TAB>value` line per accepted row
/// in input order.
pub fn run_mapper<R: BufRead, W: Write>(input: R, mut output: W) -> Result<()> {
    tracing::debug!(job = workload::ACTIVITY.name, "map stage started");
    let mut emitted = 0usize;
    for item in map(input) {
        item?.write_line(&mut output)?;
        emitted += 1;
    }
    output.flush()?;
    tracing::debug!(emitted, "map stage finished");
    Ok(())
}
