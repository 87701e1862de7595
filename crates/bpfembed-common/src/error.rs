//! Unified error types for the bpfembed workspace.
//!
//! Toolchain invocation failures are deliberately not represented here: the
//! invoker reports them as a soft-failure status value rather than an error,
//! so only filesystem, ELF-structure, and configuration problems can abort a
//! run.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum BpfembedError {
    /// An I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path where the I/O error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// An object file could not be parsed as ELF.
    #[error("invalid ELF object {path}: {message}")]
    Elf {
        /// Path of the malformed object file.
        path: PathBuf,
        /// Description from the ELF reader.
        message: String,
    },

    /// A named section is absent from an otherwise valid ELF object.
    #[error("section `{section}` not found in {path}")]
    MissingSection {
        /// Path of the object file.
        path: PathBuf,
        /// Name of the missing section.
        section: &'static str,
    },

    /// A configuration value is invalid.
    #[error("invalid configuration: {message}")]
    Config {
        /// Description of the invalid configuration.
        message: String,
    },
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, BpfembedError>;
