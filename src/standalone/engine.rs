use std::collections::HashSet;
use std::fs;

use bytes::Bytes;
use indexmap::IndexMap;
use itertools::Itertools;

use crate::standalone::{fetch::ContentFetcher, Job};
use crate::utils::{decode_text, display, split_lines};
use crate::workload::{self, course_users};
use crate::{KeyValue, Result};

// types related to this engine
pub type Intermediate = IndexMap<Bytes, Vec<Bytes>>;
pub type Results = IndexMap<Bytes, HashSet<Bytes>>;

/// Maps every data row of `content` and collects the values of each key.
///
/// The first line is a header and is dropped without being checked. Keys
/// keep the order in which they were first seen.
pub fn perform_map(content: Bytes) -> Result<Intermediate> {
    let text = decode_text(&content);
    let mut lines = split_lines(&text).into_iter();
    if let Some(header) = lines.next() {
        tracing::info!(header, "skipping header");
    }

    let mut intermediate = Intermediate::new();
    // line numbers are 1-based and the header is line 1
    for (i, line) in lines.enumerate() {
        let KeyValue { key, value } = course_users::map_line(i + 2, line)?;

        #[allow(clippy::unwrap_or_default)]
        intermediate.entry(key).or_insert(Vec::new()).push(value);
    }
    Ok(intermediate)
}

/// Deduplicates the values of every key.
pub fn perform_reduce(intermediate: Intermediate) -> Results {
    intermediate
        .into_iter()
        .map(|(key, values)| (key, course_users::reduce(values)))
        .collect()
}

/// Renders `key: [v1, v2, ...]`, one line per key, in key order of `results`.
pub fn render(results: &Results) -> String {
    let mut out = String::new();
    for (key, values) in results {
        let values = values.iter().map(|v| display(v)).join(", ");
        out.push_str(&format!("{}: [{}]\n", display(key), values));
    }
    out
}

/// Fetches the job input, runs it through map and reduce, and overwrites
/// the output file.
///
/// The output is written in one go after everything else succeeded; a run
/// that fails earlier leaves it as it was.
pub fn run_job(job: &Job, fetcher: &dyn ContentFetcher) -> Result<Results> {
    tracing::debug!(
        job = workload::COURSE_USERS.name,
        input = %job.input,
        output = %job.output.display(),
        "standalone run started"
    );
    let content = fetcher.fetch(&job.input)?;
    let intermediate = perform_map(content)?;
    let results = perform_reduce(intermediate);

    fs::write(&job.output, render(&results))?;
    tracing::debug!(keys = results.len(), "standalone run finished");
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn users(results: &Results, key: &str) -> Vec<String> {
        results[&Bytes::copy_from_slice(key.as_bytes())]
            .iter()
            .map(|v| display(v).into_owned())
            .sorted()
            .collect()
    }

    #[test]
    fn groups_in_first_seen_order() {
        let content = Bytes::from("course,user\nB,1\nA,1\nB,2\nA,1\n");
        let intermediate = perform_map(content).unwrap();
        let keys = intermediate.keys().map(|k| display(k).into_owned()).collect_vec();
        assert_eq!(keys, vec!["B", "A"]);
        assert_eq!(intermediate[&Bytes::from("A")], vec!["1", "1"]);

        let results = perform_reduce(intermediate);
        assert_eq!(users(&results, "A"), vec!["1"]);
        assert_eq!(users(&results, "B"), vec!["1", "2"]);
    }

    #[test]
    fn header_only_and_empty_content_yield_nothing() {
        assert!(perform_map(Bytes::from("course,user")).unwrap().is_empty());
        assert!(perform_map(Bytes::from("course,user\n")).unwrap().is_empty());
        assert!(perform_map(Bytes::new()).unwrap().is_empty());
    }

    #[test]
    fn short_row_aborts_the_map() {
        let err = perform_map(Bytes::from("h\nA,1\nA\n")).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingField {
                line: 3,
                index: 1,
                ..
            }
        ));
    }

    #[test]
    fn render_lists_each_key() {
        let results = perform_reduce(perform_map(Bytes::from("h\nX,7\nY,8\nY,8\n")).unwrap());
        assert_eq!(render(&results), "X: [7]\nY: [8]\n");
    }

    #[test]
    fn bare_carriage_returns_separate_rows() {
        let intermediate = perform_map(Bytes::from("course,user\rA,1\rB,2\rA,3")).unwrap();
        assert_eq!(intermediate.len(), 2);
        assert_eq!(intermediate[&Bytes::from("A")], vec!["1", "3"]);
    }

    #[test]
    fn non_utf8_content_is_decoded_leniently() {
        let intermediate =
            perform_map(Bytes::from_static(&[b'h', b'\n', 0xff, b',', b'1'])).unwrap();
        assert_eq!(intermediate[&Bytes::from("\u{ff}")], vec!["1"]);
    }
}
