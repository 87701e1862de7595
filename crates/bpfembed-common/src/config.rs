//! Run configuration model for a single bpfembed invocation.

use std::path::PathBuf;

/// The input that drives a run. Exactly one mode is selected per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// An eBPF C source file compiled through the clang/llc pipeline.
    Source(PathBuf),
    /// A textual assembly file translated by the legacy external assembler.
    Assembly(PathBuf),
}

/// Immutable per-run configuration, constructed once from command-line
/// arguments and passed to every component that needs it.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Selected input mode.
    pub mode: InputMode,
    /// Path for the raw byte-code output.
    pub binary_path: PathBuf,
    /// Path for the generated C header.
    pub header_path: PathBuf,
    /// Path of the intermediate object file produced by the toolchain.
    pub object_path: PathBuf,
}

impl RunConfig {
    /// Builds a configuration for the given mode, applying output overrides
    /// over the defaults.
    #[must_use]
    pub fn new(mode: InputMode, binary_path: PathBuf, header_path: PathBuf) -> Self {
        Self {
            mode,
            binary_path,
            header_path,
            object_path: PathBuf::from(crate::constants::INTERMEDIATE_OBJECT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_uses_default_intermediate_object() {
        let config = RunConfig::new(
            InputMode::Source(PathBuf::from("filter.c")),
            PathBuf::from("prog.bin"),
            PathBuf::from("ebpf_code.h"),
        );
        assert_eq!(config.object_path, PathBuf::from("code.o"));
    }
}
