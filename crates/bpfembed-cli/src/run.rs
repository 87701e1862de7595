//! Run orchestration: dispatch to the compile or assemble path, emit the
//! output artifacts, and clean up the intermediate object file.

use std::path::{Path, PathBuf};

use bpfembed_common::config::{InputMode, RunConfig};
use bpfembed_common::error::{BpfembedError, Result};
use bpfembed_common::types::ByteCode;
use bpfembed_core::toolchain::{self, CommandStatus};
use bpfembed_core::{disasm, elf, format};

/// Executes a full run for the given configuration.
///
/// The intermediate object file is deleted at the end of the run on every
/// path, including error paths.
///
/// # Errors
///
/// Returns an error for ELF-structure problems (including a missing `.text`
/// section) and for output write failures. Toolchain failures are logged and
/// absorbed: they end the run early with `Ok(())` once the intermediate
/// object turns out to be unusable.
pub fn execute(config: &RunConfig) -> anyhow::Result<()> {
    let result = match &config.mode {
        InputMode::Source(src) => compile_source(config, src),
        InputMode::Assembly(asm) => assemble_source(config, asm),
    };
    cleanup_intermediate(&config.object_path);
    result.map_err(Into::into)
}

/// Compile path: clang/llc pipeline, then `.text` extraction.
///
/// The pipeline's exit status is advisory; whether extraction runs depends
/// only on the intermediate object existing afterwards. When it does not,
/// the run skips extraction with a visible warning instead of failing.
fn compile_source(config: &RunConfig, src: &Path) -> Result<()> {
    let missing = toolchain::missing_compile_tools();
    if !missing.is_empty() {
        eprintln!(
            "warning: {} not found in PATH; the compile pipeline will likely fail",
            missing.join(", ")
        );
    }

    let command = toolchain::compile_pipeline(src, &config.object_path);
    let status = toolchain::run_shell(&command, &working_dir());
    if let CommandStatus::Failed { detail } = &status {
        tracing::warn!(%detail, "compile pipeline failed");
    }

    if !config.object_path.exists() {
        skip_missing_object(config);
        return Ok(());
    }

    let code = elf::extract_text_section(&config.object_path)?;
    emit_artifacts(config, &code)
}

/// Assembly path: legacy external assembler, whose object output is read
/// back directly as byte-code with no ELF parsing.
///
/// The shell redirect creates the object file even when the assembler
/// fails, so this path gates on the invocation status as well as on the
/// file's existence; a failed assembly leaves no outputs behind.
fn assemble_source(config: &RunConfig, asm: &Path) -> Result<()> {
    let command = toolchain::assembler_command(asm, &config.object_path);
    let status = toolchain::run_shell(&command, &working_dir());

    if !status.is_success() || !config.object_path.exists() {
        skip_missing_object(config);
        return Ok(());
    }

    let bytes = std::fs::read(&config.object_path).map_err(|e| BpfembedError::Io {
        path: config.object_path.clone(),
        source: e,
    })?;
    emit_artifacts(config, &ByteCode::new(bytes))
}

/// Writes the binary blob, then the header, then prints the disassembly.
fn emit_artifacts(config: &RunConfig, code: &ByteCode) -> Result<()> {
    format::save_binary(&config.binary_path, code)?;
    format::save_header(&config.header_path, code)?;
    print_disassembly(code);
    Ok(())
}

/// Prints the instruction listing, downgrading disassembly problems to a
/// warning since the listing is display-only.
fn print_disassembly(code: &ByteCode) {
    println!("disassemble:");
    match disasm::disassemble(code) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
        Err(e) => {
            eprintln!("warning: cannot disassemble byte-code: {e}");
            tracing::warn!(error = %e, "disassembly skipped");
        }
    }
}

/// Surfaces the skip-on-missing-input branch: the toolchain step did not
/// leave a usable intermediate object, so no outputs are produced.
fn skip_missing_object(config: &RunConfig) {
    eprintln!(
        "warning: intermediate object {} was not produced; skipping extraction, no outputs written",
        config.object_path.display()
    );
    tracing::warn!(
        object = %config.object_path.display(),
        "intermediate object missing, extraction skipped"
    );
}

/// Deletes the intermediate object file if it is still present. Never fails:
/// an already-absent file is the normal case on skipped runs.
fn cleanup_intermediate(object_path: &Path) {
    if object_path.exists() {
        if let Err(e) = std::fs::remove_file(object_path) {
            tracing::warn!(
                path = %object_path.display(),
                error = %e,
                "could not delete intermediate object"
            );
        }
    }
}

/// Working directory for external commands: the process's current directory,
/// matching where relative output paths resolve.
fn working_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleanup_removes_present_object() {
        let dir = tempfile::tempdir().expect("tempdir");
        let object = dir.path().join("code.o");
        std::fs::write(&object, b"stray").expect("seed");

        cleanup_intermediate(&object);
        assert!(!object.exists());
    }

    #[test]
    fn cleanup_tolerates_absent_object() {
        let dir = tempfile::tempdir().expect("tempdir");
        cleanup_intermediate(&dir.path().join("code.o"));
    }
}
