//! Internal `serde` data structures that map directly to the ESI XML schema.
//!
//! This module defines the raw structure of an ESI file as defined by the ETG.2000
//! XSD schemas. Optionality follows the schema: elements with `minOccurs="0"` are
//! `Option`s or `Vec`s, mandatory elements are plain fields so that `quick-xml`
//! reports their absence. Only the parts of the schema the object tree needs are
//! mapped; everything else is skipped by the deserializer.

#![allow(clippy::pedantic)] // XML schema naming conventions differ from Rust

use serde::Deserialize;

pub mod common;
pub mod device;
pub mod dictionary;

// Re-export key components for internal use
pub use common::NameType;
pub use device::{Device, Pdo};
pub use dictionary::{DataType, Dictionary, SubItem};

/// The root element of an ESI file.
///
/// Represents the `<EtherCATInfo>` element defined in `EtherCATInfo.xsd`.
#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename = "EtherCATInfo")]
pub struct EtherCatInfo {
    #[serde(rename = "Descriptions")]
    pub descriptions: Descriptions,
}

/// Represents `<Descriptions>`. Groups and Modules are not mapped.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct Descriptions {
    #[serde(rename = "Devices")]
    pub devices: Devices,
}

/// Represents `<Devices>`; the schema allows an empty list.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct Devices {
    #[serde(rename = "Device", default)]
    pub device: Vec<Device>,
}
