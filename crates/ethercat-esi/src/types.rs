// crates/ethercat-esi/src/types.rs

//! Public, ergonomic data structures for the object tree built from an ESI file.

use serde::{Serialize, Serializer};
use std::fmt;

// --- Device ---

/// One `<Device>` of an ESI file with every CoE object it exposes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EtherCatDevice {
    /// The device type name, e.g. `EL2008`.
    #[serde(rename = "type")]
    pub device_type: String,

    /// The `<Name>` in the configured language, empty if there is none.
    pub name: String,

    pub product_code: u32,
    pub revision_no: u32,

    /// Dictionary objects first, then RxPDO entries, then TxPDO entries,
    /// each in document order.
    pub objects: Vec<EtherCatObject>,
}

impl fmt::Display for EtherCatDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Device {}, 0x{:08X}, 0x{:08X}: {}",
            self.device_type, self.product_code, self.revision_no, self.name
        )
    }
}

// --- Objects ---

/// A dictionary object, one of its sub-items, or a PDO entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EtherCatObject {
    pub index: Option<u16>,
    /// `None` for dictionary objects and for sub-items without `<SubIdx>`.
    pub sub_index: Option<u8>,

    /// Data type name, either a base type (`UINT`) or a dictionary type (`DT1018`).
    #[serde(rename = "type")]
    pub data_type: String,

    pub bit_size: u32,
    pub access: Option<ObjectAccess>,
    pub pdo_mapping: Option<ObjectPdoMapping>,
    pub name: String,
    pub comment: Option<String>,

    /// Decoded `<Info><DefaultData>`, serialized as upper-case hex.
    #[serde(serialize_with = "serialize_hex")]
    pub default_data: Option<Vec<u8>>,

    /// Sub-items of a dictionary object. Always empty for PDO entries.
    pub objects: Vec<EtherCatObject>,

    pub source: Option<EtherCatObjectSource>,
}

fn serialize_hex<S: Serializer>(data: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error> {
    match data {
        Some(bytes) => serializer.serialize_some(&hex::encode_upper(bytes)),
        None => serializer.serialize_none(),
    }
}

/// Where an object was declared.
///
/// Ordered by kind (`Dictionary` < `RxPdo` < `TxPdo`), then by PDO index,
/// then by PDO name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(tag = "type")]
pub enum EtherCatObjectSource {
    /// The CoE object dictionary of the device profile.
    Dictionary,
    /// An entry of the `<RxPdo>` with the given index and name.
    #[serde(rename = "RxPDO")]
    RxPdo { index: u16, name: String },
    /// An entry of the `<TxPdo>` with the given index and name.
    #[serde(rename = "TxPDO")]
    TxPdo { index: u16, name: String },
}

impl fmt::Display for EtherCatObjectSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EtherCatObjectSource::Dictionary => write!(f, "Dictionary"),
            EtherCatObjectSource::RxPdo { index, name } => {
                write!(f, "RxPDO 0x{:04X}: {}", index, name)
            }
            EtherCatObjectSource::TxPdo { index, name } => {
                write!(f, "TxPDO 0x{:04X}: {}", index, name)
            }
        }
    }
}

// --- Flags ---

/// Normalized `<Access>` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ObjectAccess {
    /// `ro`
    ReadOnly,
    /// `wo`
    WriteOnly,
    /// `rw`
    ReadWrite,
}

/// Normalized `<PdoMapping>` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ObjectPdoMapping {
    /// `R`
    RxPdo,
    /// `T`
    TxPdo,
    /// `RT` or `TR`
    TxAndRxPdo,
}
