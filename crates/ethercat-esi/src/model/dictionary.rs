// crates/ethercat-esi/src/model/dictionary.rs

//! Contains model structs related to `<Profile>` and the CoE `<Dictionary>`.
//! (Schema: `EtherCATDict.xsd`)

use super::common::{IndexType, NameType};
use serde::Deserialize;

/// Represents a `<Profile>` of a device.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct Profile {
    /// Absent when the profile references a `<DictionaryFile>` instead.
    #[serde(rename = "Dictionary", default)]
    pub dictionary: Option<Dictionary>,
}

/// Contains the DataTypes and Objects of the object dictionary.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct Dictionary {
    #[serde(rename = "DataTypes", default)]
    pub data_types: DataTypes,

    #[serde(rename = "Objects")]
    pub objects: Objects,
}

/// A list of all data type definitions.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct DataTypes {
    #[serde(rename = "DataType", default)]
    pub data_type: Vec<DataType>,
}

/// A list of all Object Dictionary entries.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct Objects {
    #[serde(rename = "Object", default)]
    pub object: Vec<Object>,
}

/// Represents a `<DataType>` definition (e.g. `DT1018` or an ARRAY type).
#[derive(Debug, Deserialize, Default, Clone)]
pub struct DataType {
    #[serde(rename = "Name")]
    pub name: String,

    /// Element type of an ARRAY data type (e.g. "USINT").
    #[serde(rename = "BaseType", default)]
    pub base_type: Option<String>,

    /// Total size in bits. For ARRAY types this covers all elements.
    #[serde(rename = "BitSize")]
    pub bit_size: u32,

    /// The schema allows one `ArrayInfo` per array dimension.
    #[serde(rename = "ArrayInfo", default)]
    pub array_info: Vec<ArrayInfo>,

    #[serde(rename = "SubItem", default)]
    pub sub_item: Vec<SubItem>,
}

/// Represents `<ArrayInfo>` (one array dimension).
#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ArrayInfo {
    #[serde(rename = "LBound")]
    pub l_bound: i64,

    #[serde(rename = "Elements")]
    pub elements: u32,
}

/// Represents a `<SubItem>` of a `<DataType>`.
#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct SubItem {
    /// `HexDecValue` literal. Absent on the element reference of an ARRAY.
    #[serde(rename = "SubIdx", default)]
    pub sub_idx: Option<String>,

    #[serde(rename = "Name", default)]
    pub name: Option<String>,

    #[serde(rename = "Type")]
    pub data_type: String,

    #[serde(rename = "Comment", default)]
    pub comment: Vec<NameType>,

    #[serde(rename = "BitSize")]
    pub bit_size: u32,

    #[serde(rename = "BitOffs")]
    pub bit_offs: u32,

    #[serde(rename = "Flags", default)]
    pub flags: Option<Flags>,
}

/// Represents an Object Dictionary entry (e.g., `<Object><Index>#x1018</Index>...`).
#[derive(Debug, Deserialize, Default, Clone)]
pub struct Object {
    #[serde(rename = "Index")]
    pub index: IndexType,

    #[serde(rename = "Name", default)]
    pub name: Vec<NameType>,

    #[serde(rename = "Comment", default)]
    pub comment: Vec<NameType>,

    /// References a `<DataType>` by name, or names a base type directly.
    #[serde(rename = "Type")]
    pub data_type: String,

    #[serde(rename = "BitSize")]
    pub bit_size: u32,

    #[serde(rename = "Info", default)]
    pub info: Option<ObjectInfo>,

    #[serde(rename = "Flags", default)]
    pub flags: Option<Flags>,
}

/// Represents the `<Info>` block of an object or of one of its sub-items.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct ObjectInfo {
    /// xs:hexBinary payload.
    #[serde(rename = "DefaultData", default)]
    pub default_data: Option<String>,

    /// Per sub-item info, matched to data type sub-items by name.
    #[serde(rename = "SubItem", default)]
    pub sub_item: Vec<ObjectSubItemInfo>,
}

/// Represents `<Info><SubItem><Name>...</Name><Info>...</Info></SubItem></Info>`.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct ObjectSubItemInfo {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Info", default)]
    pub info: Option<Box<ObjectInfo>>,
}

/// Represents the `<Flags>` block of an object or sub-item.
/// Values stay as schema strings until the resolver normalizes them.
#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Flags {
    #[serde(rename = "Access", default)]
    pub access: Option<AccessType>,

    #[serde(rename = "PdoMapping", default)]
    pub pdo_mapping: Option<String>,
}

/// Represents `<Access ReadRestrictions="PreOp">rw</Access>`.
#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct AccessType {
    #[serde(rename = "$text", default)]
    pub value: String,
}
