// crates/ethercat-esi/src/schema/base.rs

//! Types from `EtherCATBase.xsd`.

use super::Content::{Complex, Simple};
use super::SimpleType::*;
use super::{many, one, optional, ComplexType};

pub(crate) static TYPES: &[ComplexType] = &[
    // <Name LcId="1033">...</Name>, also used for Comment and DisplayName
    ComplexType {
        name: "NameType",
        attributes: &[optional("LcId", Integer)],
        children: &[],
        text: Some(String),
        open: false,
    },
    ComplexType {
        name: "IndexType",
        attributes: &[
            optional("DependOnSlot", Boolean),
            optional("DependOnSlotGroup", Boolean),
            optional("OverwrittenByModule", Boolean),
        ],
        children: &[],
        text: Some(HexDecValue),
        open: false,
    },
    ComplexType {
        name: "AccessType",
        attributes: &[
            optional("ReadRestrictions", String),
            optional("WriteRestrictions", String),
        ],
        children: &[],
        text: Some(Access),
        open: false,
    },
    ComplexType {
        name: "VendorType",
        attributes: &[optional("FileVersion", Integer)],
        children: &[
            one("Id", Simple(HexDecValue)),
            many("Name", Complex("NameType")),
            many("Comment", Complex("NameType")),
            many("URL", Complex("NameType")),
        ],
        text: None,
        open: true,
    },
];
