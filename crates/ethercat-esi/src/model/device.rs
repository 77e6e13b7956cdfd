// crates/ethercat-esi/src/model/device.rs

//! Contains model structs related to `<Device>` and its PDO mappings.
//! (Schema: `EtherCATInfo.xsd`)

use super::common::{IndexType, NameType};
use super::dictionary::Profile;
use serde::Deserialize;

/// Represents one `<Device>` inside `<Devices>`.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct Device {
    #[serde(rename = "Type")]
    pub device_type: DeviceType,

    #[serde(rename = "Name", default)]
    pub name: Vec<NameType>,

    /// The schema allows any number of profiles; only zero or one is supported.
    #[serde(rename = "Profile", default)]
    pub profile: Vec<Profile>,

    #[serde(rename = "RxPdo", default)]
    pub rx_pdo: Vec<Pdo>,

    #[serde(rename = "TxPdo", default)]
    pub tx_pdo: Vec<Pdo>,
}

/// Represents `<Type ProductCode="#x..." RevisionNo="#x...">EL1008</Type>`.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct DeviceType {
    /// `HexDecValue` literal.
    #[serde(rename = "@ProductCode", default)]
    pub product_code: Option<String>,

    /// `HexDecValue` literal.
    #[serde(rename = "@RevisionNo", default)]
    pub revision_no: Option<String>,

    #[serde(rename = "$text", default)]
    pub value: String,
}

/// Represents an `<RxPdo>` or `<TxPdo>` element (xs:complexType `PdoType`).
#[derive(Debug, Deserialize, Default, Clone)]
pub struct Pdo {
    #[serde(rename = "Index")]
    pub index: IndexType,

    #[serde(rename = "Name", default)]
    pub name: Vec<NameType>,

    #[serde(rename = "Entry", default)]
    pub entry: Vec<PdoEntry>,
}

/// Represents one `<Entry>` of a PDO.
///
/// Entries without a `<DataType>` are gaps (padding) in the process image.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct PdoEntry {
    #[serde(rename = "Index")]
    pub index: IndexType,

    /// `HexDecValue` literal, absent for most gap entries.
    #[serde(rename = "SubIndex", default)]
    pub sub_index: Option<String>,

    #[serde(rename = "BitLen")]
    pub bit_len: u32,

    #[serde(rename = "Name", default)]
    pub name: Vec<NameType>,

    /// Unlike most ESI comments this one is a plain string.
    #[serde(rename = "Comment", default)]
    pub comment: Option<String>,

    #[serde(rename = "DataType", default)]
    pub data_type: Option<EntryDataType>,
}

/// Represents `<DataType DScale="...">UINT</DataType>` inside an `<Entry>`.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct EntryDataType {
    #[serde(rename = "$text", default)]
    pub value: String,
}
