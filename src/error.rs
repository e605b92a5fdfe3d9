//! Failure kinds shared by every stage.
//!
//! Nothing here is recovered locally: each variant aborts the run it occurs
//! in. Rows the streaming mapper filters out are not errors at all and never
//! show up here.

use std::num::ParseFloatError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The content-fetch collaborator could not deliver the input.
    #[error("failed to fetch `{path}`")]
    Fetch {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("value `{value}` for key `{key}` is not a number")]
    Conversion {
        key: String,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    /// A row was accepted by its guard but lacks a field read later on.
    #[error("line {line}: no field at index {index} in `{record}`")]
    MissingField {
        line: usize,
        index: usize,
        record: String,
    },

    #[error("line {line}: expected `key<TAB>value`, got `{record}`")]
    MalformedPair { line: usize, record: String },

    #[error("no values to average for key `{0}`")]
    EmptyGroup(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn fetch(path: &str, source: std::io::Error) -> Self {
        Error::Fetch {
            path: path.to_string(),
            source,
        }
    }
}
