//! CLI argument definitions.

use std::path::PathBuf;

use clap::Parser;

use bpfembed_common::config::{InputMode, RunConfig};
use bpfembed_common::constants;

/// bpfembed — compile or assemble eBPF programs into embeddable byte-code.
///
/// The byte-code is written both as a raw binary blob and as a C header
/// embedding it as a byte-string literal, then disassembled to stdout for
/// inspection.
#[derive(Parser, Debug)]
#[command(
    name = constants::BIN_NAME,
    version,
    about,
    after_help = "e.g. bpfembed -s code.c"
)]
pub struct Cli {
    /// eBPF C source file to run through the clang/llc compile pipeline.
    #[arg(short = 's', long = "src", value_name = "SRC")]
    pub src: Option<PathBuf>,

    /// eBPF assembly file to translate with the legacy external assembler.
    #[arg(short = 'a', long = "asm", value_name = "ASM")]
    pub asm: Option<PathBuf>,

    /// Output path for the raw byte-code blob.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "OUTPUT",
        default_value = constants::DEFAULT_BINARY_OUTPUT
    )]
    pub output: PathBuf,

    /// Output path for the generated C header.
    #[arg(
        short = 'f',
        long = "c_file",
        value_name = "C_FILE",
        default_value = constants::DEFAULT_HEADER_OUTPUT
    )]
    pub c_file: PathBuf,
}

impl Cli {
    /// Builds the immutable run configuration from the parsed arguments.
    ///
    /// Returns `None` when neither input mode is given, which the caller
    /// turns into the usage message and exit code 1 without touching the
    /// filesystem. When both modes are given, the source path drives the
    /// run.
    #[must_use]
    pub fn into_config(self) -> Option<RunConfig> {
        let mode = match (self.src, self.asm) {
            (Some(src), _) => InputMode::Source(src),
            (None, Some(asm)) => InputMode::Assembly(asm),
            (None, None) => return None,
        };
        Some(RunConfig::new(mode, self.output, self.c_file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_mode_yields_no_config() {
        let cli = Cli::parse_from(["bpfembed"]);
        assert!(cli.into_config().is_none());
    }

    #[test]
    fn output_flag_alone_yields_no_config() {
        let cli = Cli::parse_from(["bpfembed", "-o", "custom.bin"]);
        assert!(cli.into_config().is_none());
    }

    #[test]
    fn defaults_apply_to_output_paths() {
        let cli = Cli::parse_from(["bpfembed", "-s", "filter.c"]);
        let config = cli.into_config().expect("config");
        assert_eq!(config.mode, InputMode::Source(PathBuf::from("filter.c")));
        assert_eq!(config.binary_path, PathBuf::from("prog.bin"));
        assert_eq!(config.header_path, PathBuf::from("ebpf_code.h"));
    }

    #[test]
    fn overrides_replace_defaults() {
        let cli = Cli::parse_from([
            "bpfembed", "-a", "prog.s", "-o", "fw.bin", "-f", "fw.h",
        ]);
        let config = cli.into_config().expect("config");
        assert_eq!(config.mode, InputMode::Assembly(PathBuf::from("prog.s")));
        assert_eq!(config.binary_path, PathBuf::from("fw.bin"));
        assert_eq!(config.header_path, PathBuf::from("fw.h"));
    }

    #[test]
    fn source_takes_precedence_over_assembly() {
        let cli = Cli::parse_from(["bpfembed", "-s", "filter.c", "-a", "prog.s"]);
        let config = cli.into_config().expect("config");
        assert_eq!(config.mode, InputMode::Source(PathBuf::from("filter.c")));
    }

    #[test]
    fn long_flags_match_the_legacy_surface() {
        let cli = Cli::parse_from([
            "bpfembed",
            "--src", "filter.c",
            "--output", "fw.bin",
            "--c_file", "fw.h",
        ]);
        assert!(cli.into_config().is_some());
    }
}
