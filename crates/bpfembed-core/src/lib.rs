//! # bpfembed-core
//!
//! Core pipeline pieces for turning eBPF sources into embeddable byte-code:
//! - **ELF extraction**: pull the raw `.text` payload out of a compiled
//!   object file.
//! - **Formatting**: render byte-code as a C byte-string literal and a
//!   complete include-guarded header.
//! - **Toolchain invocation**: run the external clang/llc pipeline or the
//!   legacy assembler and report soft success/failure.
//! - **Disassembly**: human-readable instruction listing for inspection.
//!
//! The external compilers, the assembler, and the disassembler are black
//! boxes; nothing here interprets instruction semantics.

pub mod disasm;
pub mod elf;
pub mod format;
pub mod toolchain;
