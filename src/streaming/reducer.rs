use std::io::{BufRead, Write};

use bytes::Bytes;
use itertools::Itertools;

use crate::utils::{display, format_mean};
use crate::workload::{self, activity};
use crate::{Error, KeyValue, Result};

const DELIMITER: char = '\t';

/// Parses one intermediate line into its key and value.
///
/// Only the first tab separates; anything after it belongs to the value.
pub fn parse_pair(line_no: usize, line: &str) -> Result<KeyValue> {
    let line = line.trim();
    match line.split_once(DELIMITER) {
        Some((key, value)) => Ok(KeyValue::new(
            Bytes::copy_from_slice(key.as_bytes()),
            Bytes::copy_from_slice(value.as_bytes()),
        )),
        None => Err(Error::MalformedPair {
            line: line_no,
            record: line.to_string(),
        }),
    }
}

/// Reads the whole intermediate input before anything is reduced.
///
/// Every line must be a pair; a blank line is [`Error::MalformedPair`] too.
pub fn read_pairs<R: BufRead>(input: R) -> Result<Vec<KeyValue>> {
    let mut pairs = Vec::new();
    for (i, line) in input.lines().enumerate() {
        pairs.push(parse_pair(i + 1, &line?)?);
    }
    Ok(pairs)
}

/// Groups `pairs` by key and averages each group.
///
/// Pairs are stable-sorted by key and split into runs of equal keys. The
/// result is ordered by ascending mean; keys with equal means keep their key
/// order.
pub fn reduce(mut pairs: Vec<KeyValue>) -> Result<Vec<(Bytes, f64)>> {
    pairs.sort_by_key(KeyValue::key);

    let mut means = Vec::new();
    for (key, group) in &pairs.into_iter().chunk_by(KeyValue::key) {
        let mean = activity::reduce(&key, group.map(KeyValue::into_value))?;
        means.push((key, mean));
    }

    means.sort_by(|a, b| a.1.total_cmp(&b.1));
    Ok(means)
}

/// Runs the reducer stage.
///
/// Output is only written once every group has been reduced, so a failing
/// run leaves `output` untouched.
pub fn run_reducer<R: BufRead, W: Write>(input: R, mut output: W) -> Result<()> {
    tracing::debug!(job = workload::ACTIVITY.name, "reduce stage started");
    let pairs = read_pairs(input)?;
    let records = pairs.len();
    let means = reduce(pairs)?;

    for (key, mean) in &means {
        writeln!(output, "{}\t{}", display(key), format_mean(*mean))?;
    }
    output.flush()?;
    tracing::debug!(records, keys = means.len(), "reduce stage finished");
    Ok(())
}
