//! End-to-end tests for the run orchestrator.
//!
//! These drive full runs through [`bpfembed_cli::run::execute`] with
//! absolute paths inside a temp directory, so no state leaks into the
//! checkout and no external eBPF toolchain is required:
//! 1. Failing legacy assembler leaves no outputs and no stray object file
//! 2. Pre-existing outputs survive a failed run untouched
//! 3. A synthetic ELF object drives the extract/save sequence, twice,
//!    producing byte-identical artifacts

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::path::Path;

use bpfembed_common::config::{InputMode, RunConfig};

/// Builds a run configuration with all paths rooted in `dir`.
fn config_in(dir: &Path, mode: InputMode) -> RunConfig {
    RunConfig {
        mode,
        binary_path: dir.join("prog.bin"),
        header_path: dir.join("ebpf_code.h"),
        object_path: dir.join("code.o"),
    }
}

#[test]
fn failing_assembler_leaves_no_outputs_and_cleans_up() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = config_in(
        dir.path(),
        InputMode::Assembly(dir.path().join("missing_file.s")),
    );

    // The legacy assembler cannot run here (no python2 runtime, no
    // assembler script), so the invocation fails. The shell redirect still
    // creates an empty object file; cleanup must remove it.
    bpfembed_cli::run::execute(&config).expect("run must not raise");

    assert!(!config.binary_path.exists(), "no binary output on failure");
    assert!(!config.header_path.exists(), "no header output on failure");
    assert!(!config.object_path.exists(), "stray object file deleted");
}

#[test]
fn failing_assembler_leaves_previous_outputs_untouched() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = config_in(
        dir.path(),
        InputMode::Assembly(dir.path().join("missing_file.s")),
    );
    std::fs::write(&config.binary_path, b"previous binary").expect("seed binary");
    std::fs::write(&config.header_path, "previous header").expect("seed header");

    bpfembed_cli::run::execute(&config).expect("run must not raise");

    assert_eq!(
        std::fs::read(&config.binary_path).expect("read binary"),
        b"previous binary"
    );
    assert_eq!(
        std::fs::read_to_string(&config.header_path).expect("read header"),
        "previous header"
    );
    assert!(!config.object_path.exists());
}

#[test]
fn compile_path_formats_a_synthetic_object() {
    use object::write::Object as WriteObject;
    use object::{Architecture, BinaryFormat, Endianness, SectionKind};

    let dir = tempfile::tempdir().expect("tempdir");

    // mov64 r0, 0; exit — what clang/llc would leave in `.text`.
    let payload = [
        0xb7, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
        0x95, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ];
    let mut obj = WriteObject::new(BinaryFormat::Elf, Architecture::Bpf, Endianness::Little);
    let section = obj.add_section(Vec::new(), b".text".to_vec(), SectionKind::Text);
    obj.append_section_data(section, &payload, 8);
    let object_path = dir.path().join("code.o");
    std::fs::write(&object_path, obj.write().expect("elf")).expect("write object");

    let code = bpfembed_core::elf::extract_text_section(&object_path).expect("extract");
    assert_eq!(code.as_slice(), &payload);

    let binary_path = dir.path().join("prog.bin");
    let header_path = dir.path().join("fw.h");
    bpfembed_core::format::save_binary(&binary_path, &code).expect("binary");
    bpfembed_core::format::save_header(&header_path, &code).expect("header");

    // Byte-identical outputs on a second run over the same input.
    let first_bin = std::fs::read(&binary_path).expect("read binary");
    let first_header = std::fs::read_to_string(&header_path).expect("read header");
    bpfembed_core::format::save_binary(&binary_path, &code).expect("binary again");
    bpfembed_core::format::save_header(&header_path, &code).expect("header again");
    assert_eq!(std::fs::read(&binary_path).expect("reread"), first_bin);
    assert_eq!(
        std::fs::read_to_string(&header_path).expect("reread"),
        first_header
    );

    assert!(first_header.starts_with("#ifndef fw_H_\n#define fw_H_\n"));
    assert_eq!(first_bin, payload);
}
