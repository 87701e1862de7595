//! Human-readable disassembly of extracted byte-code.
//!
//! Display only: the listing is printed for inspection and never feeds back
//! into the pipeline.

use std::any::Any;
use std::panic;

use bpfembed_common::constants::EBPF_INSN_SIZE;
use bpfembed_common::error::{BpfembedError, Result};
use bpfembed_common::types::ByteCode;

/// Renders the byte-code as one human-readable line per instruction.
///
/// # Errors
///
/// Returns `BpfembedError::Config` when the byte length is not a multiple of
/// the 8-byte instruction size or when the disassembler rejects an opcode,
/// so an arbitrary blob (the assembly path feeds raw assembler output here)
/// surfaces as a warning instead of aborting the process.
pub fn disassemble(code: &ByteCode) -> Result<Vec<String>> {
    if code.len() % EBPF_INSN_SIZE != 0 {
        return Err(BpfembedError::Config {
            message: format!(
                "byte-code length {} is not a multiple of the {EBPF_INSN_SIZE}-byte instruction size",
                code.len()
            ),
        });
    }

    // The rbpf disassembler panics on opcodes it does not know; contain the
    // panic so it stays inside the display-only step.
    let bytes = code.as_slice();
    let insns = panic::catch_unwind(|| rbpf::disassembler::to_insn_vec(bytes))
        .map_err(|payload| BpfembedError::Config {
            message: panic_message(payload.as_ref()),
        })?;

    Ok(insns.into_iter().map(|insn| insn.desc).collect())
}

/// Extracts the message a panic payload carries, if any.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "disassembler rejected the byte-code".to_owned()
    }
}
