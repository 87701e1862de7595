//! Byte-code to C-literal formatting and artifact writing.
//!
//! Renders raw byte-code as a `\xHH`-escaped byte-string literal, wraps it
//! into fixed-width quoted lines, and substitutes it into an include-guarded
//! header skeleton. Chunking is positional over the escaped text, not over
//! the byte sequence, so existing consumers see identical line boundaries
//! for identical input lengths.

use std::fmt::Write as _;
use std::io::Write as _;
use std::path::Path;

use bpfembed_common::constants::{DEFAULT_HEADER_TOKEN, HEADER_LINE_WIDTH};
use bpfembed_common::error::{BpfembedError, Result};
use bpfembed_common::types::ByteCode;

/// Renders every byte as a two-hex-digit `\xHH` escape, lowercase and
/// zero-padded, concatenated with no separators.
///
/// The output length is exactly `4 * len(bytes)`.
#[must_use]
pub fn escape_bytes(code: &ByteCode) -> String {
    let mut escaped = String::with_capacity(code.len() * 4);
    for byte in code.as_slice() {
        let _ = write!(escaped, "\\x{byte:02x}");
    }
    escaped
}

/// Splits the escaped text into positional chunks of at most `width`
/// characters: `[0, width)`, `[width, 2 * width)`, and so on.
///
/// A chunk boundary may fall inside one byte's 4-character escape when the
/// cut point lands there; that is part of the output contract. A `width` of
/// zero is treated as 1, and a cut that would land inside a multi-byte
/// character widens to the next character boundary (escaped byte-code is
/// always ASCII, so neither case arises from the formatter itself).
#[must_use]
pub fn chunk_lines(escaped: &str, width: usize) -> Vec<&str> {
    let step = width.max(1);
    let mut chunks = Vec::with_capacity(escaped.len().div_ceil(step));
    let mut rest = escaped;
    while !rest.is_empty() {
        let mut end = usize::min(step, rest.len());
        while !rest.is_char_boundary(end) {
            end += 1;
        }
        let (chunk, tail) = rest.split_at(end);
        chunks.push(chunk);
        rest = tail;
    }
    chunks
}

/// Quotes each chunk of the escaped text and joins the lines with newlines,
/// producing the literal body placed inside the header skeleton.
#[must_use]
pub fn quoted_body(escaped: &str) -> String {
    chunk_lines(escaped, HEADER_LINE_WIDTH)
        .into_iter()
        .map(|chunk| format!("\"{chunk}\""))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Derives the include-guard and array token from the header output path:
/// the base file name with everything from the first `.` stripped
/// (`foo.bar.h` becomes `foo`).
#[must_use]
pub fn header_token(header_path: &Path) -> String {
    header_path
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.split('.').next())
        .filter(|token| !token.is_empty())
        .map_or_else(|| DEFAULT_HEADER_TOKEN.to_owned(), ToOwned::to_owned)
}

/// Renders the complete header text from named fields.
///
/// Takes the guard/array token and the quoted literal body explicitly, so
/// byte content that happens to contain a placeholder-like string can never
/// collide with the substitution.
#[must_use]
pub fn render_header(name: &str, body: &str) -> String {
    format!(
        "#ifndef {name}_H_\n\
         #define {name}_H_\n\
         \n\
         const unsigned char {name}[] = \"\"\n\
         {body}\n\
         \"\";\n\
         \n\
         #endif\n"
    )
}

/// Writes the raw byte-code verbatim to `path` and prints the destination.
///
/// # Errors
///
/// Returns `BpfembedError::Io` if the file cannot be written.
pub fn save_binary(path: &Path, code: &ByteCode) -> Result<()> {
    println!("write binary to: {}", path.display());
    tracing::info!(path = %path.display(), bytes = code.len(), "writing binary output");
    write_atomic(path, code.as_slice())
}

/// Renders the header for `code` and writes it to `path`, printing the
/// destination and the full quoted line content for inspection.
///
/// # Errors
///
/// Returns `BpfembedError::Io` if the file cannot be written.
pub fn save_header(path: &Path, code: &ByteCode) -> Result<()> {
    let out_path = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let token = header_token(path);
    let body = quoted_body(&escape_bytes(code));
    let header = render_header(&token, &body);

    println!("save byte code to {}", out_path.display());
    println!("{body}");
    tracing::info!(path = %out_path.display(), token, "writing header output");

    write_atomic(path, header.as_bytes())
}

/// Writes `contents` through a named temp file in the destination directory
/// followed by a rename, so the target is never left partially written.
fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let io_err = |source: std::io::Error| BpfembedError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(contents).map_err(io_err)?;
    let _file = tmp.persist(path).map_err(|e| io_err(e.error))?;
    Ok(())
}
