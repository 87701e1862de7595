//! # bpfembed-cli
//!
//! Argument surface and run orchestration for the `bpfembed` binary,
//! exposed as a library so integration tests can drive a full run without
//! spawning the executable.

pub mod cli;
pub mod run;
