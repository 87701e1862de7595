//! Domain primitive types used across the bpfembed workspace.

use std::fmt;

/// Raw eBPF byte-code: an ordered sequence of 8-bit values.
///
/// Produced by the ELF text extractor or read directly from the legacy
/// assembler's output file. Immutable once obtained; it is written verbatim
/// to the binary output and transformed, never mutated in place, into the
/// header text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteCode(Vec<u8>);

impl ByteCode {
    /// Wraps a raw byte sequence.
    #[must_use]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Returns the raw bytes.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Returns the number of bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when the sequence holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for ByteCode {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for ByteCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bytes of eBPF byte-code", self.0.len())
    }
}
