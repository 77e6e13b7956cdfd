// crates/ethercat-esi/src/document.rs

//! Turns the raw uploaded bytes into text and maps byte offsets back to
//! line/column positions for error reporting.

use crate::error::EsiError;
use std::borrow::Cow;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Decodes an ESI document according to its XML declaration.
///
/// UTF-8 (with or without BOM) is borrowed as-is. ISO-8859-1, which many
/// vendors still declare, maps every byte to the code point of the same value.
pub(crate) fn decode_document(bytes: &[u8]) -> Result<Cow<'_, str>, EsiError> {
    if bytes.starts_with(&[0xFF, 0xFE]) || bytes.starts_with(&[0xFE, 0xFF]) {
        return Err(EsiError::XmlSyntax {
            line: 1,
            column: 1,
            message: "UTF-16 encoded documents are not supported".into(),
        });
    }
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    match declared_encoding(bytes).as_deref() {
        None | Some("utf-8") | Some("utf8") | Some("us-ascii") | Some("ascii") => {
            std::str::from_utf8(bytes).map(Cow::Borrowed).map_err(|e| {
                let (line, column) = line_column(bytes, e.valid_up_to());
                EsiError::XmlSyntax {
                    line,
                    column,
                    message: "invalid UTF-8 byte sequence".into(),
                }
            })
        }
        Some(name) if is_latin1(name) => {
            Ok(Cow::Owned(bytes.iter().map(|&b| char::from(b)).collect()))
        }
        Some(other) => Err(EsiError::XmlSyntax {
            line: 1,
            column: 1,
            message: format!("unsupported document encoding '{}'", other),
        }),
    }
}

/// Registered names and aliases of ISO-8859-1 (lower case).
fn is_latin1(name: &str) -> bool {
    matches!(
        name,
        "iso-8859-1"
            | "iso8859-1"
            | "iso_8859-1"
            | "iso_8859-1:1987"
            | "iso-ir-100"
            | "latin1"
            | "latin-1"
            | "l1"
            | "csisolatin1"
            | "ibm819"
            | "cp819"
    )
}

/// Extracts the lower-cased `encoding` pseudo-attribute of the XML declaration.
fn declared_encoding(bytes: &[u8]) -> Option<String> {
    if !bytes.starts_with(b"<?xml") {
        return None;
    }
    let end = bytes.windows(2).position(|w| w == b"?>")?;
    let declaration = &bytes[..end];
    let key = declaration.windows(8).position(|w| w == b"encoding")?;

    let rest = &declaration[key + 8..];
    let rest = trim_ascii_start(rest).strip_prefix(b"=")?;
    let rest = trim_ascii_start(rest);
    let quote = *rest.first()?;
    if quote != b'"' && quote != b'\'' {
        return None;
    }
    let value = &rest[1..];
    let close = value.iter().position(|&b| b == quote)?;
    Some(String::from_utf8_lossy(&value[..close]).to_ascii_lowercase())
}

fn trim_ascii_start(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    &bytes[start..]
}

/// Converts a byte offset into a 1-based (line, column) pair. Columns count
/// characters, not bytes.
pub(crate) fn line_column(bytes: &[u8], offset: usize) -> (usize, usize) {
    let offset = offset.min(bytes.len());
    let prefix = &bytes[..offset];
    let line_start = prefix
        .iter()
        .rposition(|&b| b == b'\n')
        .map_or(0, |pos| pos + 1);
    let line = prefix.iter().filter(|&&b| b == b'\n').count() + 1;
    let column = String::from_utf8_lossy(&prefix[line_start..]).chars().count() + 1;
    (line, column)
}
