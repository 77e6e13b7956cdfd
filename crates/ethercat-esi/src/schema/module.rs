// crates/ethercat-esi/src/schema/module.rs

//! Types from `EtherCATModule.xsd`. Module descriptions may be a document of
//! their own or part of `<Descriptions>`.

use super::Content::Complex;
use super::SimpleType::*;
use super::{many, one, optional, required, ComplexType};

pub(crate) static ROOTS: &[(&str, &str)] = &[("EtherCATModule", "EtherCATModuleType")];

pub(crate) static TYPES: &[ComplexType] = &[
    ComplexType {
        name: "EtherCATModuleType",
        attributes: &[optional("Version", String)],
        children: &[
            one("Vendor", Complex("VendorType")),
            one("Modules", Complex("ModulesType")),
        ],
        text: None,
        open: false,
    },
    ComplexType {
        name: "ModulesType",
        attributes: &[],
        children: &[many("Module", Complex("ModuleType"))],
        text: None,
        open: false,
    },
    ComplexType {
        name: "ModuleType",
        attributes: &[],
        children: &[
            one("Type", Complex("ModuleTypeType")),
            many("Name", Complex("NameType")),
            many("RxPdo", Complex("PdoType")),
            many("TxPdo", Complex("PdoType")),
            many("Profile", Complex("ProfileType")),
        ],
        text: None,
        open: true,
    },
    ComplexType {
        name: "ModuleTypeType",
        attributes: &[
            required("ModuleIdent", HexDecValue),
            optional("ModuleClass", String),
        ],
        children: &[],
        text: Some(String),
        open: true,
    },
];
