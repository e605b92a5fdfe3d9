//! Hadoop-streaming style batch jobs, plus a small in-memory MapReduce
//! simulator.
//!
//! The streaming stages (`mr-mapper`, `mr-reducer`) talk to each other only
//! through tab-separated text lines, so they can be dropped into a Hadoop
//! streaming job or chained locally with a shell pipe. The standalone runner
//! (`mr-userid`) loads a whole file through a [`ContentFetcher`], groups
//! records by key and deduplicates the values of every key.
//!
//! [`ContentFetcher`]: standalone::fetch::ContentFetcher

use bytes::Bytes;

pub mod cmd;
pub mod error;
pub mod standalone;
pub mod streaming;
pub mod telemetry;
pub mod utils;
pub mod workload;

pub use error::{Error, Result};

/////////////////////////////////////////////////////////////////////////////
// MapReduce application types
/////////////////////////////////////////////////////////////////////////////

/// The output of a streaming map stage.
///
/// Items are produced lazily, one input line at a time, so a mapper never
/// holds its whole input in memory. Each item is fallible since reading the
/// input or parsing a line can fail midway.
pub type MapOutput<'a> = Box<dyn Iterator<Item = Result<KeyValue>> + 'a>;

/////////////////////////////////////////////////////////////////////////////
// Key-value pairs
/////////////////////////////////////////////////////////////////////////////

/// A single key-value pair.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct KeyValue {
    /// The key.
    pub key: Bytes,
    /// The value.
    pub value: Bytes,
}

impl KeyValue {
    /// Construct a new key-value pair from the given key and value.
    pub fn new(key: Bytes, value: Bytes) -> Self {
        Self { key, value }
    }

    /// Get the key of this key-value pair.
    ///
    /// This method is cheap, since [`Bytes`] are cheaply cloneable.
    #[inline]
    pub fn key(&self) -> Bytes {
        self.key.clone()
    }

    /// Consumes the key-value pair and returns the value.
    #[inline]
    pub fn into_value(self) -> Bytes {
        self.value
    }

    /// Writes the pair as one intermediate line: `key<TAB>value<LF>`.
    pub fn write_line<W: std::io::Write>(&self, out: &mut W) -> std::io::Result<()> {
        out.write_all(&self.key)?;
        out.write_all(b"\t")?;
        out.write_all(&self.value)?;
        out.write_all(b"\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_line_is_tab_separated() {
        let kv = KeyValue::new(Bytes::from("42"), Bytes::from("7.5"));
        let mut out = Vec::new();
        kv.write_line(&mut out).unwrap();
        assert_eq!(out, b"42\t7.5\n");
    }

    #[test]
    fn accessors_share_the_buffer() {
        let kv = KeyValue::new(Bytes::from("k"), Bytes::from("v"));
        assert_eq!(kv.key(), "k");
        assert_eq!(kv.into_value(), "v");
    }
}
