// crates/ethercat-esi/src/schema/dict.rs

//! Types from `EtherCATDict.xsd`: the CoE object dictionary.

use super::Content::{Any, Complex, Simple};
use super::SimpleType::*;
use super::{many, one, opt, some, ComplexType};

pub(crate) static TYPES: &[ComplexType] = &[
    ComplexType {
        name: "DictionaryType",
        attributes: &[],
        children: &[
            opt("DataTypes", Complex("DataTypesType")),
            one("Objects", Complex("ObjectsType")),
            opt("DiagMessages", Complex("DiagnosticsType")),
        ],
        text: None,
        open: true,
    },
    ComplexType {
        name: "DataTypesType",
        attributes: &[],
        children: &[many("DataType", Complex("DataTypeType"))],
        text: None,
        open: false,
    },
    ComplexType {
        name: "DataTypeType",
        attributes: &[],
        children: &[
            opt("Index", Simple(HexDecValue)),
            one("Name", Simple(String)),
            opt("BaseType", Simple(String)),
            many("Comment", Complex("NameType")),
            one("BitSize", Simple(UnsignedInt)),
            many("ArrayInfo", Complex("ArrayInfoType")),
            many("SubItem", Complex("SubItemType")),
            many("EnumInfo", Any),
            many("Property", Any),
        ],
        text: None,
        open: true,
    },
    ComplexType {
        name: "ArrayInfoType",
        attributes: &[],
        children: &[
            one("LBound", Simple(Integer)),
            one("Elements", Simple(UnsignedInt)),
        ],
        text: None,
        open: false,
    },
    ComplexType {
        name: "SubItemType",
        attributes: &[],
        children: &[
            opt("SubIdx", Simple(HexDecValue)),
            opt("Name", Simple(String)),
            many("DisplayName", Complex("NameType")),
            one("Type", Simple(String)),
            many("Comment", Complex("NameType")),
            one("BitSize", Simple(UnsignedInt)),
            one("BitOffs", Simple(UnsignedInt)),
            opt("Flags", Complex("FlagsType")),
        ],
        text: None,
        open: true,
    },
    ComplexType {
        name: "ObjectsType",
        attributes: &[],
        children: &[many("Object", Complex("ObjectType"))],
        text: None,
        open: false,
    },
    ComplexType {
        name: "ObjectType",
        attributes: &[],
        children: &[
            one("Index", Complex("IndexType")),
            some("Name", Complex("NameType")),
            many("Comment", Complex("NameType")),
            one("Type", Simple(String)),
            one("BitSize", Simple(UnsignedInt)),
            opt("Info", Complex("ObjectInfoType")),
            opt("Flags", Complex("FlagsType")),
            many("Property", Any),
        ],
        text: None,
        open: true,
    },
    // Shared by objects and by <Info><SubItem><Info>
    ComplexType {
        name: "ObjectInfoType",
        attributes: &[],
        children: &[
            opt("DefaultData", Simple(HexBinary)),
            opt("MinData", Simple(HexBinary)),
            opt("MaxData", Simple(HexBinary)),
            opt("DefaultValue", Simple(String)),
            opt("MinValue", Simple(String)),
            opt("MaxValue", Simple(String)),
            opt("DefaultString", Simple(String)),
            many("SubItem", Complex("ObjectSubItemInfoType")),
        ],
        text: None,
        open: true,
    },
    ComplexType {
        name: "ObjectSubItemInfoType",
        attributes: &[],
        children: &[
            one("Name", Simple(String)),
            opt("Info", Complex("ObjectInfoType")),
        ],
        text: None,
        open: true,
    },
    ComplexType {
        name: "FlagsType",
        attributes: &[],
        children: &[
            opt("Access", Complex("AccessType")),
            opt("Category", Simple(String)),
            opt("PdoMapping", Simple(PdoMapping)),
            opt("SafetyMapping", Simple(String)),
            opt("Attribute", Any),
            opt("Backup", Simple(Integer)),
            opt("Setting", Simple(Integer)),
            opt("Transition", Simple(String)),
            opt("SdoAccess", Simple(String)),
        ],
        text: None,
        open: true,
    },
];
