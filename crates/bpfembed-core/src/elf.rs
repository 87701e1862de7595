//! ELF `.text` section extraction.
//!
//! The extractor performs no interpretation of the payload: byte order and
//! target architecture are irrelevant, it only locates the named section and
//! copies its raw bytes.

use std::path::Path;

use object::{Object, ObjectSection};

use bpfembed_common::constants::TEXT_SECTION;
use bpfembed_common::error::{BpfembedError, Result};
use bpfembed_common::types::ByteCode;

/// Returns the raw content of the `.text` section of a compiled object file.
///
/// # Errors
///
/// Returns `BpfembedError::Io` if the file cannot be read,
/// `BpfembedError::Elf` if it is not a well-formed ELF object, and
/// `BpfembedError::MissingSection` if no `.text` section is present. A
/// missing section is never treated as empty bytes.
pub fn extract_text_section(path: &Path) -> Result<ByteCode> {
    tracing::debug!(path = %path.display(), "extracting .text section");

    let data = std::fs::read(path).map_err(|e| BpfembedError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let file = object::File::parse(&*data).map_err(|e| BpfembedError::Elf {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let section =
        file.section_by_name(TEXT_SECTION)
            .ok_or_else(|| BpfembedError::MissingSection {
                path: path.to_path_buf(),
                section: TEXT_SECTION,
            })?;

    let bytes = section.data().map_err(|e| BpfembedError::Elf {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(ByteCode::new(bytes.to_vec()))
}
