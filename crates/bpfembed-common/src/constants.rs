//! System-wide constants and default file names.

/// Default path for the raw byte-code output.
pub const DEFAULT_BINARY_OUTPUT: &str = "prog.bin";

/// Default path for the generated C header.
pub const DEFAULT_HEADER_OUTPUT: &str = "ebpf_code.h";

/// Intermediate object file produced by the external toolchain and deleted
/// at the end of every run.
pub const INTERMEDIATE_OBJECT: &str = "code.o";

/// ELF section holding the compiled eBPF instruction bytes.
pub const TEXT_SECTION: &str = ".text";

/// Maximum number of escaped characters per quoted header line.
///
/// Each byte expands to 4 characters (`\xHH`), so a full line carries 25
/// bytes. Chunking is by character position of the escaped text, not by
/// byte count, so a line boundary may fall inside one byte's escape.
pub const HEADER_LINE_WIDTH: usize = 100;

/// Size of a single eBPF instruction in bytes.
pub const EBPF_INSN_SIZE: usize = 8;

/// Fallback array/guard token when the header path yields no usable name.
pub const DEFAULT_HEADER_TOKEN: &str = "ebpf_code";

/// Compiler front-end for the compile pipeline.
pub const CLANG_BIN: &str = "clang";

/// BPF back-end code generator for the compile pipeline.
pub const LLC_BIN: &str = "llc";

/// Legacy external assembler invocation prefix. The assembler runs under a
/// separately versioned runtime and is treated as a black box.
pub const UBPF_ASSEMBLER: &str = "python2 ubpf-assembler.py";

/// Binary name for the CLI.
pub const BIN_NAME: &str = "bpfembed";
