//! Script and map file loading.
//!
//! Robot scripts are saved by the IDE as UTF-16, maps as seven-bit ASCII.
//! The loader decodes a file with the encoding its kind prescribes and hands
//! the text to the matching grammar. Decoding failures are reported before
//! any parsing happens, so a mis-encoded file never produces a syntax error.

use std::fs;
use std::path::Path;

use irobo_foundation::{Error, Result};
use irobo_map::MapAst;
use irobo_script::Script;
use irobo_translations::Locale;

/// Character encodings the loader understands.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Encoding {
    /// UTF-16, honoring a byte-order mark when present and assuming
    /// little-endian without one.
    #[default]
    Utf16,
    /// Seven-bit ASCII, rejecting any byte with the high bit set.
    Ascii,
    /// UTF-8.
    Utf8,
}

impl Encoding {
    /// Decodes raw file bytes to text.
    ///
    /// # Errors
    /// Returns a decode error when the bytes are not valid in this encoding.
    pub fn decode(self, bytes: &[u8]) -> Result<String> {
        match self {
            Self::Utf16 => decode_utf16(bytes),
            Self::Ascii => decode_ascii(bytes),
            Self::Utf8 => String::from_utf8(bytes.to_vec())
                .map_err(|e| Error::decode(format!("invalid UTF-8: {e}"))),
        }
    }
}

fn decode_utf16(bytes: &[u8]) -> Result<String> {
    let (body, big_endian) = match bytes {
        [0xFF, 0xFE, rest @ ..] => (rest, false),
        [0xFE, 0xFF, rest @ ..] => (rest, true),
        _ => (bytes, false),
    };
    if body.len() % 2 != 0 {
        return Err(Error::decode(format!(
            "UTF-16 input has an odd length of {} bytes",
            bytes.len()
        )));
    }
    let units: Vec<u16> = body
        .chunks_exact(2)
        .map(|pair| {
            if big_endian {
                u16::from_be_bytes([pair[0], pair[1]])
            } else {
                u16::from_le_bytes([pair[0], pair[1]])
            }
        })
        .collect();
    String::from_utf16(&units)
        .map_err(|_| Error::decode("UTF-16 input contains an unpaired surrogate"))
}

fn decode_ascii(bytes: &[u8]) -> Result<String> {
    if let Some(index) = bytes.iter().position(|b| !b.is_ascii()) {
        return Err(Error::decode(format!(
            "non-ASCII byte 0x{:02X} at offset {index}",
            bytes[index]
        )));
    }
    Ok(bytes.iter().copied().map(char::from).collect())
}

/// Reads a file and decodes it with the given encoding.
///
/// # Errors
/// Returns an I/O error if the file cannot be read, or a decode error if its
/// bytes are not valid in `encoding`.
pub fn read_file<P: AsRef<Path>>(path: P, encoding: Encoding) -> Result<String> {
    let path = path.as_ref();
    let bytes =
        fs::read(path).map_err(|e| Error::io(format!("failed to read {}: {e}", path.display())))?;
    log::debug!(
        "read {} bytes from {} as {encoding:?}",
        bytes.len(),
        path.display()
    );
    encoding.decode(&bytes)
}

/// Loads and parses a UTF-16 script file with the given keyword locale.
///
/// # Errors
/// Returns an I/O, decode, or syntax error.
pub fn parse_script_file<P: AsRef<Path>>(path: P, locale: Locale) -> Result<Script> {
    let source = read_file(path, Encoding::Utf16)?;
    irobo_script::parse_with_locale(&source, locale)
}

/// Loads and parses an ASCII map file.
///
/// # Errors
/// Returns an I/O, decode, or syntax error.
pub fn parse_map_file<P: AsRef<Path>>(path: P) -> Result<MapAst> {
    let source = read_file(path, Encoding::Ascii)?;
    irobo_map::parse(&source)
}
