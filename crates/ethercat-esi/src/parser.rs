// crates/ethercat-esi/src/parser.rs

use crate::document::decode_document;
use crate::error::EsiError;
use crate::expander::expand_arrays;
use crate::model::{self, NameType};
use crate::options::EsiOptions;
use crate::resolver::resolve_devices;
use crate::schema;
use crate::types::EtherCatDevice;
use log::debug;
use std::io::{Read, Seek, SeekFrom};

/// Prefix marking the hexadecimal form of an xs:HexDecValue.
pub const HEX_PREFIX: &str = "#x";

/// Parses an ESI document from a string slice into the per-device object trees.
///
/// The document is validated against the compiled-in schema set before it is
/// deserialized, then CoE ARRAY data types are expanded and the dictionary,
/// RxPDO and TxPDO objects of every device are merged.
///
/// # Errors
/// Returns an `EsiError` for malformed or schema-invalid input, unsupported
/// shapes (multiple profiles or `ArrayInfo`s), unparsable literals, or a
/// document without devices. No partial result is ever returned.
pub fn load_esi_from_str(
    xml_content: &str,
    options: &EsiOptions,
) -> Result<Vec<EtherCatDevice>, EsiError> {
    debug!("Validating ESI document ({} bytes)", xml_content.len());
    let root = schema::validate(xml_content)?;
    if root != "EtherCATInfo" {
        // An EtherCATModule document is schema-valid but describes no devices.
        return Err(EsiError::MissingElement {
            element: "EtherCATInfo",
        });
    }

    // 1. Deserialize the validated XML into the raw model.
    let info: model::EtherCatInfo = quick_xml::de::from_str(xml_content)?;
    debug!(
        "Deserialized {} device(s)",
        info.descriptions.devices.device.len()
    );

    // 2. Rewrite ARRAY-shaped data types into concrete sub-items.
    let info = expand_arrays(info)?;

    // 3. Build the object tree of every device.
    resolve_devices(&info, options)
}

/// Parses an ESI document from raw bytes, honouring the encoding named in its
/// XML declaration (UTF-8 or ISO-8859-1).
///
/// # Errors
/// Returns `EsiError::XmlSyntax` if the bytes cannot be decoded, otherwise
/// the same errors as [`load_esi_from_str`].
pub fn load_esi_from_slice(
    bytes: &[u8],
    options: &EsiOptions,
) -> Result<Vec<EtherCatDevice>, EsiError> {
    let text = decode_document(bytes)?;
    load_esi_from_str(&text, options)
}

/// Reads an ESI document from a seekable stream and parses it.
///
/// The stream is read from its current position to the end and then rewound
/// to that position, whether or not the read succeeded. It is never closed.
///
/// # Errors
/// Returns `EsiError::Io` if reading or rewinding fails, otherwise the same
/// errors as [`load_esi_from_slice`].
pub fn load_esi_from_reader<R: Read + Seek>(
    reader: &mut R,
    options: &EsiOptions,
) -> Result<Vec<EtherCatDevice>, EsiError> {
    let start = reader.stream_position()?;
    let mut bytes = Vec::new();
    let read = reader.read_to_end(&mut bytes);
    reader.seek(SeekFrom::Start(start))?;
    read?;

    load_esi_from_slice(&bytes, options)
}

// --- Value Parsers ---

/// Parses an xs:HexDecValue literal: `#x` followed by hexadecimal digits
/// (either case), or a plain decimal number. Surrounding whitespace is ignored.
///
/// Negative values are accepted here; narrowing happens at the call site.
///
/// # Errors
/// Returns `EsiError::MalformedLiteral` on an empty or non-numeric remainder,
/// or when the value does not fit into an `i64`.
pub fn parse_hex_dec(literal: &str) -> Result<i64, EsiError> {
    let trimmed = literal.trim();
    let malformed = || EsiError::MalformedLiteral {
        literal: literal.to_string(),
    };

    match trimmed.strip_prefix(HEX_PREFIX) {
        Some(digits) => {
            // from_str_radix would also accept a leading sign
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(malformed());
            }
            i64::from_str_radix(digits, 16).map_err(|_| malformed())
        }
        None => trimmed.parse::<i64>().map_err(|_| malformed()),
    }
}

/// Parses a literal and narrows it to a `u8` (sub-indices).
pub fn parse_hex_dec_u8(literal: &str) -> Result<u8, EsiError> {
    narrow(literal, "u8")
}

/// Parses a literal and narrows it to a `u16` (object and PDO indices).
pub fn parse_hex_dec_u16(literal: &str) -> Result<u16, EsiError> {
    narrow(literal, "u16")
}

/// Parses a literal and narrows it to a `u32` (product code, revision number).
pub fn parse_hex_dec_u32(literal: &str) -> Result<u32, EsiError> {
    narrow(literal, "u32")
}

fn narrow<T: TryFrom<i64>>(literal: &str, target: &'static str) -> Result<T, EsiError> {
    let value = parse_hex_dec(literal)?;
    T::try_from(value).map_err(|_| EsiError::ValueOutOfRange {
        literal: literal.to_string(),
        target,
    })
}

/// Selects the text of the first entry whose language id equals `language_id`.
///
/// Returns `None` if no entry matches; there is no fallback language.
pub fn select_localized<'a, I>(names: I, language_id: u32) -> Option<&'a str>
where
    I: IntoIterator<Item = (u32, &'a str)>,
{
    names
        .into_iter()
        .find(|(lc_id, _)| *lc_id == language_id)
        .map(|(_, text)| text)
}

/// Selects a localized `<Name>`/`<Comment>` from the raw model.
pub(crate) fn select_name(names: &[NameType], language_id: u32) -> Option<String> {
    select_localized(
        names.iter().map(|n| (n.lc_id, n.value.as_str())),
        language_id,
    )
    .map(str::to_string)
}
