// crates/ethercat-esi/src/resolver/dictionary.rs

use crate::error::EsiError;
use crate::model::dictionary::ObjectInfo;
use crate::model::{self, DataType};
use crate::parser::{parse_hex_dec_u16, parse_hex_dec_u8, select_name};
use crate::resolver::utils;
use crate::types::{EtherCatObject, EtherCatObjectSource};
use log::warn;
use std::collections::BTreeMap;

/// Builds one object per dictionary `<Object>`, with its sub-items taken from
/// the data type the object references (after array expansion).
pub(super) fn resolve_dictionary(
    dictionary: &model::Dictionary,
    language_id: u32,
) -> Result<Vec<EtherCatObject>, EsiError> {
    // --- Pass 1: Build Data Type Map ---
    let mut type_map: BTreeMap<&str, &DataType> = BTreeMap::new();
    for data_type in &dictionary.data_types.data_type {
        if type_map.contains_key(data_type.name.as_str()) {
            warn!("Duplicate DataType {}, keeping the first", data_type.name);
            continue;
        }
        type_map.insert(&data_type.name, data_type);
    }

    // --- Pass 2: Resolve Objects ---
    let mut objects = Vec::with_capacity(dictionary.objects.object.len());
    for model_obj in &dictionary.objects.object {
        let index = parse_hex_dec_u16(&model_obj.index.value)?;
        let (access, pdo_mapping) = utils::map_flags(model_obj.flags.as_ref())?;
        let info = model_obj.info.as_ref();

        let sub_objects = match type_map.get(model_obj.data_type.as_str()) {
            Some(data_type) => resolve_sub_items(index, data_type, info, language_id)?,
            None => Vec::new(),
        };

        objects.push(EtherCatObject {
            index: Some(index),
            sub_index: None,
            data_type: model_obj.data_type.clone(),
            bit_size: model_obj.bit_size,
            access,
            pdo_mapping,
            name: select_name(&model_obj.name, language_id).unwrap_or_default(),
            comment: select_name(&model_obj.comment, language_id),
            default_data: default_data(info)?,
            objects: sub_objects,
            source: Some(EtherCatObjectSource::Dictionary),
        });
    }
    Ok(objects)
}

fn resolve_sub_items(
    index: u16,
    data_type: &DataType,
    info: Option<&ObjectInfo>,
    language_id: u32,
) -> Result<Vec<EtherCatObject>, EsiError> {
    data_type
        .sub_item
        .iter()
        .map(|sub_item| -> Result<EtherCatObject, EsiError> {
            let sub_index = sub_item.sub_idx.as_deref().map(parse_hex_dec_u8).transpose()?;
            let (access, pdo_mapping) = utils::map_flags(sub_item.flags.as_ref())?;
            let name = sub_item.name.clone().unwrap_or_default();

            // <Info><SubItem> entries are matched by name
            let sub_info = info.and_then(|info| {
                info.sub_item
                    .iter()
                    .find(|s| s.name == name)
                    .and_then(|s| s.info.as_deref())
            });

            Ok(EtherCatObject {
                index: Some(index),
                sub_index,
                data_type: sub_item.data_type.clone(),
                bit_size: sub_item.bit_size,
                access,
                pdo_mapping,
                comment: select_name(&sub_item.comment, language_id),
                default_data: default_data(sub_info)?,
                name,
                objects: Vec::new(),
                source: Some(EtherCatObjectSource::Dictionary),
            })
        })
        .collect()
}

fn default_data(info: Option<&ObjectInfo>) -> Result<Option<Vec<u8>>, EsiError> {
    info.and_then(|info| info.default_data.as_deref())
        .map(utils::decode_default_data)
        .transpose()
}
