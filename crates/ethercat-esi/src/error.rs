// crates/ethercat-esi/src/error.rs

use hex::FromHexError;
use quick_xml::errors::serialize::DeError;
use std::error::Error;
use std::fmt;
use std::io;

/// Broad classification of an [`EsiError`], used by the upload boundary to
/// decide how a failure is reported back to the uploader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The uploaded bytes are malformed, schema-invalid, or use an input shape
    /// this parser explicitly does not support.
    ClientInput,
    /// The document is valid but describes nothing usable.
    Content,
    /// A failure that is not attributable to the uploaded content.
    Internal,
}

/// Errors that can occur while validating or parsing an ESI file.
#[derive(Debug)]
pub enum EsiError {
    /// The input is not well-formed XML, or its bytes cannot be decoded.
    XmlSyntax {
        line: usize,
        column: usize,
        message: String,
    },

    /// The document is well-formed but violates the ESI schema set.
    SchemaViolation {
        line: usize,
        column: usize,
        message: String,
    },

    /// An error from the underlying `quick-xml` deserializer, typically a
    /// mandatory element that is absent.
    XmlStructure(DeError),

    /// A required XML element or attribute was missing.
    MissingElement { element: &'static str },

    /// A `HexDecValue` literal could not be parsed into an `i64`.
    MalformedLiteral { literal: String },

    /// A literal parsed fine but does not fit into its target integer width.
    ValueOutOfRange {
        literal: String,
        target: &'static str,
    },

    /// An `<Access>` or `<PdoMapping>` flag has a value outside the known spellings.
    InvalidFlag { flag: &'static str, value: String },

    /// A `<DefaultData>` element contained invalid hex.
    HexParsing(FromHexError),

    /// A device declares more than one `<Profile>`.
    UnsupportedProfileCount { device: String, count: usize },

    /// A data type declares more than one `<ArrayInfo>`.
    UnsupportedArrayInfoCount { data_type: String, count: usize },

    /// The document is valid but contains no `<Device>` elements.
    NoDevicesFound,

    /// Reading or rewinding the input stream failed.
    Io(io::Error),

    /// Defensive catch-all for conditions that indicate a bug rather than bad input.
    Internal(String),
}

impl EsiError {
    /// Returns how the upload boundary should report this error.
    pub fn class(&self) -> ErrorClass {
        match self {
            EsiError::XmlSyntax { .. }
            | EsiError::SchemaViolation { .. }
            | EsiError::XmlStructure(_)
            | EsiError::MissingElement { .. }
            | EsiError::MalformedLiteral { .. }
            | EsiError::ValueOutOfRange { .. }
            | EsiError::InvalidFlag { .. }
            | EsiError::HexParsing(_)
            | EsiError::UnsupportedProfileCount { .. }
            | EsiError::UnsupportedArrayInfoCount { .. } => ErrorClass::ClientInput,
            EsiError::NoDevicesFound => ErrorClass::Content,
            EsiError::Io(_) | EsiError::Internal(_) => ErrorClass::Internal,
        }
    }
}

impl From<DeError> for EsiError {
    fn from(e: DeError) -> Self {
        EsiError::XmlStructure(e)
    }
}

impl From<FromHexError> for EsiError {
    fn from(e: FromHexError) -> Self {
        EsiError::HexParsing(e)
    }
}

impl From<io::Error> for EsiError {
    fn from(e: io::Error) -> Self {
        EsiError::Io(e)
    }
}

impl fmt::Display for EsiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EsiError::XmlSyntax {
                line,
                column,
                message,
            } => write!(f, "XML syntax error at {}:{}: {}", line, column, message),
            EsiError::SchemaViolation {
                line,
                column,
                message,
            } => write!(f, "XML schema error at {}:{}: {}", line, column, message),
            EsiError::XmlStructure(e) => write!(f, "XML structure error: {}", e),
            EsiError::MissingElement { element } => {
                write!(f, "XML structure error: missing required element {}", element)
            }
            EsiError::MalformedLiteral { literal } => {
                write!(f, "Malformed HexDecValue literal '{}'", literal)
            }
            EsiError::ValueOutOfRange { literal, target } => {
                write!(f, "Value '{}' does not fit into {}", literal, target)
            }
            EsiError::InvalidFlag { flag, value } => {
                write!(f, "Invalid value '{}' for {} flag", value, flag)
            }
            EsiError::HexParsing(e) => write!(f, "Hex parsing error: {}", e),
            EsiError::UnsupportedProfileCount { device, count } => write!(
                f,
                "Device {} declares {} profiles, only a single profile is supported",
                device, count
            ),
            EsiError::UnsupportedArrayInfoCount { data_type, count } => write!(
                f,
                "DataType {} declares {} ArrayInfo elements, only a single ArrayInfo is supported",
                data_type, count
            ),
            EsiError::NoDevicesFound => {
                write!(f, "XML content error: File contains no EtherCAT devices.")
            }
            EsiError::Io(e) => write!(f, "I/O error: {}", e),
            EsiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl Error for EsiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            EsiError::XmlStructure(e) => Some(e),
            EsiError::HexParsing(e) => Some(e),
            EsiError::Io(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ErrorClass, EsiError};
    use serde::Deserialize;
    use std::error::Error;
    use std::io;

    #[derive(Debug, Deserialize)]
    struct Required {
        #[serde(rename = "Name")]
        _name: String,
    }

    #[test]
    fn test_from_de_error() {
        // A missing mandatory element is reported by the deserializer
        let de_err = quick_xml::de::from_str::<Required>("<Root/>").unwrap_err();
        let esi_err: EsiError = de_err.into();
        assert!(matches!(esi_err, EsiError::XmlStructure(_)));
        assert!(esi_err.source().is_some());
    }

    #[test]
    fn test_from_hex_error() {
        let hex_err = hex::decode("Z").unwrap_err();
        let esi_err: EsiError = hex_err.into();
        assert!(matches!(esi_err, EsiError::HexParsing(_)));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::UnexpectedEof, "stream closed");
        let esi_err: EsiError = io_err.into();
        assert!(matches!(esi_err, EsiError::Io(_)));
        assert_eq!(esi_err.class(), ErrorClass::Internal);
    }

    #[test]
    fn test_error_classes() {
        let schema = EsiError::SchemaViolation {
            line: 3,
            column: 7,
            message: "element 'Foo' is not expected in 'Device'".into(),
        };
        assert_eq!(schema.class(), ErrorClass::ClientInput);

        let profiles = EsiError::UnsupportedProfileCount {
            device: "EL1008".into(),
            count: 2,
        };
        assert_eq!(profiles.class(), ErrorClass::ClientInput);

        assert_eq!(EsiError::NoDevicesFound.class(), ErrorClass::Content);
        assert_eq!(
            EsiError::Internal("unresolved schema type".into()).class(),
            ErrorClass::Internal
        );
    }

    #[test]
    fn test_display_carries_location() {
        let err = EsiError::XmlSyntax {
            line: 12,
            column: 4,
            message: "unexpected end of document".into(),
        };
        assert_eq!(
            err.to_string(),
            "XML syntax error at 12:4: unexpected end of document"
        );

        let err = EsiError::ValueOutOfRange {
            literal: "#x10000".into(),
            target: "u16",
        };
        assert_eq!(err.to_string(), "Value '#x10000' does not fit into u16");
    }
}
