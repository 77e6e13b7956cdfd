// crates/ethercat-esi/src/model/common.rs

//! Contains common helper structs from EtherCATBase.xsd.

use crate::options::DEFAULT_LANGUAGE_ID;
use serde::Deserialize;

/// Helper function for `#[serde(default)]` on `@LcId`.
fn default_lc_id() -> u32 {
    DEFAULT_LANGUAGE_ID
}

/// Represents `<Name LcId="1033">Value</Name>` (xs:complexType `NameType`).
/// Also used for localized `<Comment>` and `<DisplayName>` elements.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct NameType {
    #[serde(rename = "@LcId", default = "default_lc_id")]
    pub lc_id: u32,
    #[serde(rename = "$text", default)]
    pub value: String,
}

/// Represents `<Index DependOnSlot="1">#x1600</Index>` (xs:complexType `IndexType`).
/// The value is a `HexDecValue` literal.
#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct IndexType {
    #[serde(rename = "$text")]
    pub value: String,
}
