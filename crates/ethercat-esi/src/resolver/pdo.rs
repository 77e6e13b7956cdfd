// crates/ethercat-esi/src/resolver/pdo.rs

use crate::error::EsiError;
use crate::model::Pdo;
use crate::parser::{parse_hex_dec_u16, parse_hex_dec_u8, select_name};
use crate::types::{EtherCatObject, EtherCatObjectSource, ObjectAccess, ObjectPdoMapping};

/// Direction of a process data object, seen from the slave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum PdoDirection {
    /// `<RxPdo>`: outputs written by the master.
    Rx,
    /// `<TxPdo>`: inputs read by the master.
    Tx,
}

impl PdoDirection {
    fn access(self) -> ObjectAccess {
        match self {
            PdoDirection::Rx => ObjectAccess::WriteOnly,
            PdoDirection::Tx => ObjectAccess::ReadOnly,
        }
    }

    fn pdo_mapping(self) -> ObjectPdoMapping {
        match self {
            PdoDirection::Rx => ObjectPdoMapping::RxPdo,
            PdoDirection::Tx => ObjectPdoMapping::TxPdo,
        }
    }

    fn source(self, index: u16, name: String) -> EtherCatObjectSource {
        match self {
            PdoDirection::Rx => EtherCatObjectSource::RxPdo { index, name },
            PdoDirection::Tx => EtherCatObjectSource::TxPdo { index, name },
        }
    }
}

/// Builds one object per mapped `<Entry>` of the given PDOs, in document order.
/// Entries without a `<DataType>` are padding and produce no object.
pub(super) fn resolve_pdos(
    pdos: &[Pdo],
    direction: PdoDirection,
    language_id: u32,
) -> Result<Vec<EtherCatObject>, EsiError> {
    let mut objects = Vec::new();

    for pdo in pdos {
        let pdo_index = parse_hex_dec_u16(&pdo.index.value)?;
        let pdo_name = select_name(&pdo.name, language_id).unwrap_or_default();

        for entry in &pdo.entry {
            let Some(data_type) = entry.data_type.as_ref() else {
                continue;
            };

            objects.push(EtherCatObject {
                index: Some(parse_hex_dec_u16(&entry.index.value)?),
                sub_index: entry.sub_index.as_deref().map(parse_hex_dec_u8).transpose()?,
                data_type: data_type.value.clone(),
                bit_size: entry.bit_len,
                access: Some(direction.access()),
                pdo_mapping: Some(direction.pdo_mapping()),
                name: select_name(&entry.name, language_id).unwrap_or_default(),
                comment: entry.comment.clone(),
                default_data: None,
                objects: Vec::new(),
                source: Some(direction.source(pdo_index, pdo_name.clone())),
            });
        }
    }
    Ok(objects)
}
