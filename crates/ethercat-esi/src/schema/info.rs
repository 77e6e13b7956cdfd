// crates/ethercat-esi/src/schema/info.rs

//! Types from `EtherCATInfo.xsd`: devices, profiles and PDOs.

use super::Content::{Any, Complex, Simple};
use super::SimpleType::*;
use super::{many, one, opt, optional, ComplexType};

pub(crate) static ROOTS: &[(&str, &str)] = &[("EtherCATInfo", "EtherCATInfoType")];

pub(crate) static TYPES: &[ComplexType] = &[
    ComplexType {
        name: "EtherCATInfoType",
        attributes: &[optional("Version", String)],
        children: &[
            many("InfoReference", Simple(String)),
            one("Vendor", Complex("VendorType")),
            one("Descriptions", Complex("DescriptionsType")),
        ],
        text: None,
        open: false,
    },
    ComplexType {
        name: "DescriptionsType",
        attributes: &[],
        children: &[
            opt("Groups", Complex("GroupsType")),
            one("Devices", Complex("DevicesType")),
            opt("Modules", Complex("ModulesType")),
        ],
        text: None,
        open: false,
    },
    ComplexType {
        name: "GroupsType",
        attributes: &[],
        children: &[many("Group", Any)],
        text: None,
        open: false,
    },
    ComplexType {
        name: "DevicesType",
        attributes: &[],
        children: &[many("Device", Complex("DeviceType"))],
        text: None,
        open: false,
    },
    ComplexType {
        name: "DeviceType",
        attributes: &[
            optional("Physics", String),
            optional("Invisible", Boolean),
            optional("Crc32", String),
        ],
        children: &[
            one("Type", Complex("DeviceTypeType")),
            many("HideType", Any),
            many("Name", Complex("NameType")),
            many("Comment", Complex("NameType")),
            many("URL", Complex("NameType")),
            opt("Info", Any),
            opt("GroupType", Simple(String)),
            many("Profile", Complex("ProfileType")),
            many("Fmmu", Any),
            many("Sm", Any),
            many("Su", Any),
            many("RxPdo", Complex("PdoType")),
            many("TxPdo", Complex("PdoType")),
            opt("Mailbox", Any),
            opt("Dc", Any),
            opt("Slots", Any),
            opt("Eeprom", Any),
        ],
        text: None,
        open: true,
    },
    // <Type ProductCode="#x..." RevisionNo="#x...">EL2008</Type>
    ComplexType {
        name: "DeviceTypeType",
        attributes: &[
            optional("ProductCode", HexDecValue),
            optional("RevisionNo", HexDecValue),
            optional("SerialNo", HexDecValue),
            optional("ModuleId", String),
        ],
        children: &[],
        text: Some(String),
        open: true,
    },
    ComplexType {
        name: "ProfileType",
        attributes: &[],
        children: &[
            opt("ProfileNo", Simple(Integer)),
            opt("AddInfo", Simple(Integer)),
            opt("ChannelCount", Simple(Integer)),
            many("ChannelInfo", Any),
            opt("DictionaryFile", Simple(String)),
            opt("Dictionary", Complex("DictionaryType")),
            opt("DiagMessages", Complex("DiagnosticsType")),
        ],
        text: None,
        open: true,
    },
    // Shared by <RxPdo> and <TxPdo>
    ComplexType {
        name: "PdoType",
        attributes: &[
            optional("Fixed", Boolean),
            optional("Mandatory", Boolean),
            optional("Virtual", Boolean),
            optional("Sm", Integer),
            optional("Su", Integer),
        ],
        children: &[
            one("Index", Complex("IndexType")),
            many("Name", Complex("NameType")),
            many("Exclude", Simple(HexDecValue)),
            many("Entry", Complex("EntryType")),
        ],
        text: None,
        open: true,
    },
    ComplexType {
        name: "EntryType",
        attributes: &[optional("Fixed", Boolean)],
        children: &[
            one("Index", Complex("IndexType")),
            opt("SubIndex", Simple(HexDecValue)),
            one("BitLen", Simple(UnsignedInt)),
            many("Name", Complex("NameType")),
            opt("Comment", Simple(String)),
            opt("DataType", Complex("EntryDataTypeType")),
        ],
        text: None,
        open: true,
    },
    ComplexType {
        name: "EntryDataTypeType",
        attributes: &[
            optional("DScale", String),
            optional("SwapData", Integer),
        ],
        children: &[],
        text: Some(String),
        open: true,
    },
];
