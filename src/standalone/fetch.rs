//! Where the standalone runner gets its input from.
//!

use std::io;
use std::process::Command;

use bytes::Bytes;

use crate::{Error, Result};

/// Loads the whole content behind a path.
///
/// Fetching happens once per run and any failure aborts the run. There is
/// no retry or timeout; wrap the fetcher if you need either.
pub trait ContentFetcher {
    fn fetch(&self, path: &str) -> Result<Bytes>;
}

impl<F> ContentFetcher for F
where
    F: Fn(&str) -> Result<Bytes>,
{
    fn fetch(&self, path: &str) -> Result<Bytes> {
        self(path)
    }
}

/// Reads a file through an external `cat`-like command, by default
/// `hdfs dfs -cat <path>`.
#[derive(Debug, Clone)]
pub struct HdfsCat {
    program: String,
    args: Vec<String>,
}

impl Default for HdfsCat {
    fn default() -> Self {
        Self::with_command("hdfs", ["dfs", "-cat"])
    }
}

impl HdfsCat {
    /// Uses `program args.. <path>` instead of the hdfs client.
    pub fn with_command<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl ContentFetcher for HdfsCat {
    fn fetch(&self, path: &str) -> Result<Bytes> {
        tracing::debug!(program = %self.program, path, "fetching input");
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .output()
            .map_err(|e| Error::fetch(path, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::fetch(
                path,
                io::Error::other(format!("{}: {}", output.status, stderr.trim())),
            ));
        }
        Ok(Bytes::from(output.stdout))
    }
}

/// Reads a file from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl ContentFetcher for LocalFs {
    fn fetch(&self, path: &str) -> Result<Bytes> {
        std::fs::read(path)
            .map(Bytes::from)
            .map_err(|e| Error::fetch(path, e))
    }
}
