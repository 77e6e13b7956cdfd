// crates/ethercat-esi/src/resolver/utils.rs

//! Utility functions for the resolver.

use crate::error::EsiError;
use crate::model::dictionary::Flags;
use crate::types::{ObjectAccess, ObjectPdoMapping};

/// Maps an `<Access>` value to the public enum.
pub(super) fn map_access(value: &str) -> Result<ObjectAccess, EsiError> {
    match value.trim() {
        "ro" => Ok(ObjectAccess::ReadOnly),
        "wo" => Ok(ObjectAccess::WriteOnly),
        "rw" => Ok(ObjectAccess::ReadWrite),
        other => Err(EsiError::InvalidFlag {
            flag: "Access",
            value: other.to_string(),
        }),
    }
}

/// Maps a `<PdoMapping>` value to the public enum. Both letter cases and both
/// orders of the combined form are accepted.
pub(super) fn map_pdo_mapping(value: &str) -> Result<ObjectPdoMapping, EsiError> {
    match value.trim() {
        "R" | "r" => Ok(ObjectPdoMapping::RxPdo),
        "T" | "t" => Ok(ObjectPdoMapping::TxPdo),
        "RT" | "TR" | "rt" | "tr" | "Rt" | "Tr" | "rT" | "tR" => Ok(ObjectPdoMapping::TxAndRxPdo),
        other => Err(EsiError::InvalidFlag {
            flag: "PdoMapping",
            value: other.to_string(),
        }),
    }
}

/// Normalizes the optional `<Flags>` block of an object or sub-item.
pub(super) fn map_flags(
    flags: Option<&Flags>,
) -> Result<(Option<ObjectAccess>, Option<ObjectPdoMapping>), EsiError> {
    let Some(flags) = flags else {
        return Ok((None, None));
    };
    let access = flags
        .access
        .as_ref()
        .map(|a| map_access(&a.value))
        .transpose()?;
    let pdo_mapping = flags
        .pdo_mapping
        .as_deref()
        .map(map_pdo_mapping)
        .transpose()?;
    Ok((access, pdo_mapping))
}

/// Decodes an xs:hexBinary `<DefaultData>` payload.
pub(super) fn decode_default_data(value: &str) -> Result<Vec<u8>, EsiError> {
    Ok(hex::decode(value.trim())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::dictionary::AccessType;

    #[test]
    fn test_map_access() {
        assert_eq!(map_access("ro").unwrap(), ObjectAccess::ReadOnly);
        assert_eq!(map_access("wo").unwrap(), ObjectAccess::WriteOnly);
        assert_eq!(map_access(" rw ").unwrap(), ObjectAccess::ReadWrite);
        let err = map_access("rx").unwrap_err();
        assert!(matches!(err, EsiError::InvalidFlag { flag: "Access", .. }));
        assert!(map_access("").is_err());
    }

    #[test]
    fn test_map_pdo_mapping() {
        for value in ["R", "r"] {
            assert_eq!(map_pdo_mapping(value).unwrap(), ObjectPdoMapping::RxPdo);
        }
        for value in ["T", "t"] {
            assert_eq!(map_pdo_mapping(value).unwrap(), ObjectPdoMapping::TxPdo);
        }
        for value in ["RT", "TR", "rt", "tr", "Rt", "Tr", "rT", "tR"] {
            assert_eq!(map_pdo_mapping(value).unwrap(), ObjectPdoMapping::TxAndRxPdo);
        }
        let err = map_pdo_mapping("RTR").unwrap_err();
        assert!(matches!(err, EsiError::InvalidFlag { flag: "PdoMapping", .. }));
    }

    #[test]
    fn test_map_flags() {
        assert_eq!(map_flags(None).unwrap(), (None, None));
        let flags = Flags {
            access: Some(AccessType { value: "ro".into() }),
            pdo_mapping: Some("T".into()),
        };
        assert_eq!(
            map_flags(Some(&flags)).unwrap(),
            (Some(ObjectAccess::ReadOnly), Some(ObjectPdoMapping::TxPdo))
        );
    }

    #[test]
    fn test_decode_default_data() {
        assert_eq!(decode_default_data("0a0B").unwrap(), vec![0x0A, 0x0B]);
        assert_eq!(decode_default_data("").unwrap(), Vec::<u8>::new());
        assert!(matches!(
            decode_default_data("abc"),
            Err(EsiError::HexParsing(hex::FromHexError::OddLength))
        ));
    }
}
