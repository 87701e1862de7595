//! External toolchain invocation.
//!
//! Runs the clang/llc compile pipeline or the legacy assembler as shell
//! commands. Failures are soft: a non-zero exit or a spawn error is logged
//! and reported as a status value, and the caller decides whether downstream
//! steps can still proceed.

use std::path::Path;
use std::process::{Command, Stdio};

use bpfembed_common::constants::{CLANG_BIN, LLC_BIN, UBPF_ASSEMBLER};

/// Typed outcome of an external command invocation.
///
/// Both arms must be handled explicitly; the invoker never panics and never
/// propagates a launch error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandStatus {
    /// The command ran to completion and exited zero.
    Success,
    /// The command exited non-zero or could not be launched.
    Failed {
        /// Return code and captured stderr, or the spawn error.
        detail: String,
    },
}

impl CommandStatus {
    /// Returns `true` for a successful invocation.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Executes a shell command string in the given working directory, waiting
/// for the process to exit.
///
/// A non-zero exit code is logged with the return code, the command, and the
/// captured stderr, then reported as `Failed`. A spawn error (missing shell,
/// bad working directory) is likewise logged and reported as `Failed`. On a
/// zero exit, anything the command wrote to stderr is relayed unchanged.
pub fn run_shell(command: &str, cwd: &Path) -> CommandStatus {
    println!("Run cmd '{command}' in '{}'", cwd.display());
    tracing::info!(command, cwd = %cwd.display(), "running external command");

    let output = Command::new("sh")
        .arg("-c")
        .arg(command)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .stderr(Stdio::piped())
        .output();

    match output {
        Ok(output) if output.status.success() => {
            // Diagnostics from a successful run (e.g. compiler warnings)
            // still belong to the user.
            let stderr = String::from_utf8_lossy(&output.stderr);
            if !stderr.trim().is_empty() {
                eprint!("{stderr}");
            }
            CommandStatus::Success
        }
        Ok(output) => {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr);
            let detail = format!("returncode: {code} cmd: '{command}' err: {}", stderr.trim());
            eprintln!("ERROR {detail}");
            tracing::warn!(code, command, "external command failed");
            CommandStatus::Failed { detail }
        }
        Err(e) => {
            let detail = format!("failed to launch '{command}': {e}");
            eprintln!("ERROR {detail}");
            tracing::warn!(error = %e, command, "external command could not be launched");
            CommandStatus::Failed { detail }
        }
    }
}

/// Builds the two-stage compile pipeline: source through the compiler
/// front-end into LLVM IR on stdout, piped into the BPF back-end emitting
/// the intermediate object file.
#[must_use]
pub fn compile_pipeline(src: &Path, object: &Path) -> String {
    format!(
        "{CLANG_BIN} -O2 -emit-llvm -c {} -o - | {LLC_BIN} -march=bpf -filetype=obj -o {}",
        src.display(),
        object.display()
    )
}

/// Builds the legacy assembler invocation: an external, separately versioned
/// assembler process whose stdout is redirected into the object file.
#[must_use]
pub fn assembler_command(asm: &Path, object: &Path) -> String {
    format!(
        "{UBPF_ASSEMBLER} {} > {}",
        asm.display(),
        object.display()
    )
}

/// Returns the compile-pipeline tools that cannot be found on `PATH`.
///
/// Purely advisory: the pipeline is attempted regardless, and its own
/// failure is reported through [`run_shell`].
#[must_use]
pub fn missing_compile_tools() -> Vec<&'static str> {
    [CLANG_BIN, LLC_BIN]
        .into_iter()
        .filter(|tool| which::which(tool).is_err())
        .collect()
}
