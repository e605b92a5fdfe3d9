//! Command-line arguments of the streaming binaries.
//!
//! Both stages read stdin and write stdout, as Hadoop streaming expects, so
//! they take no arguments beyond `--help` and `--version`. The standalone
//! runner's arguments live in [`crate::standalone::Args`].

pub mod mapper;
pub mod reducer;
