// crates/ethercat-esi/src/schema/diag.rs

//! Types from `EtherCATDiag.xsd`. Only the outline is checked.

use super::Content::{Any, Complex, Simple};
use super::SimpleType::*;
use super::{many, one, ComplexType};

pub(crate) static TYPES: &[ComplexType] = &[
    ComplexType {
        name: "DiagnosticsType",
        attributes: &[],
        children: &[many("DiagMessage", Complex("DiagMessageType"))],
        text: None,
        open: true,
    },
    ComplexType {
        name: "DiagMessageType",
        attributes: &[],
        children: &[
            one("TextId", Simple(HexDecValue)),
            many("MessageText", Complex("NameType")),
            many("Flags", Any),
        ],
        text: None,
        open: true,
    },
];
