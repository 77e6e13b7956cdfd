// crates/ethercat-esi/src/expander.rs

//! Rewrites CoE ARRAY data types into one concrete sub-item per element.
//!
//! An ESI file describes an array object compactly: the object's data type has
//! a `USINT` sub-item 0 (the element count) followed by a single sub-item whose
//! type is an ARRAY data type with an `<ArrayInfo>`. The object tree needs the
//! elements as individual sub-items, so they are synthesized here before the
//! tree is built.

use crate::error::EsiError;
use crate::model::dictionary::ArrayInfo;
use crate::model::{DataType, EtherCatInfo, SubItem};
use crate::parser::parse_hex_dec;
use log::{trace, warn};
use std::collections::BTreeMap;

/// The element layout of an ARRAY data type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ArrayShape {
    pub base_type: String,
    /// The ARRAY type's `BitSize` divided by `Elements`, so each element gets
    /// its own width rather than the size of the whole array. `0` for an
    /// empty array.
    pub element_bit_size: u32,
    pub lower_bound: i64,
    pub elements: u32,
}

/// Expands the ARRAY sub-items of every device's dictionary data types.
///
/// Devices without a profile are left untouched.
///
/// # Errors
/// `EsiError::UnsupportedProfileCount` for a device with more than one
/// profile, `EsiError::UnsupportedArrayInfoCount` for a multi-dimensional
/// array type, or a literal error from a sub-index.
pub(crate) fn expand_arrays(mut info: EtherCatInfo) -> Result<EtherCatInfo, EsiError> {
    for device in &mut info.descriptions.devices.device {
        let dictionary = match device.profile.as_mut_slice() {
            [] => continue,
            [profile] => match profile.dictionary.as_mut() {
                Some(dictionary) => dictionary,
                None => continue,
            },
            profiles => {
                return Err(EsiError::UnsupportedProfileCount {
                    device: device.device_type.value.clone(),
                    count: profiles.len(),
                });
            }
        };

        let data_types = &mut dictionary.data_types.data_type;
        let lookup = build_array_lookup(data_types)?;
        if lookup.is_empty() {
            continue;
        }

        for data_type in data_types.iter_mut() {
            if let Some(expanded) = expand_sub_items(&data_type.sub_item, &lookup)? {
                trace!(
                    "Expanded {} into {} sub-items",
                    data_type.name,
                    expanded.len()
                );
                data_type.sub_item = expanded;
            }
        }
    }
    Ok(info)
}

/// Maps the name of every data type with exactly one `<ArrayInfo>` to its shape.
pub(crate) fn build_array_lookup(
    data_types: &[DataType],
) -> Result<BTreeMap<String, ArrayShape>, EsiError> {
    let mut lookup = BTreeMap::new();

    for data_type in data_types {
        let ArrayInfo { l_bound, elements } = match data_type.array_info.as_slice() {
            [] => continue,
            [array_info] => array_info.clone(),
            array_infos => {
                return Err(EsiError::UnsupportedArrayInfoCount {
                    data_type: data_type.name.clone(),
                    count: array_infos.len(),
                });
            }
        };

        if lookup.contains_key(&data_type.name) {
            warn!("Duplicate ARRAY data type {}, keeping the first", data_type.name);
            continue;
        }

        let shape = ArrayShape {
            base_type: data_type.base_type.clone().unwrap_or_default(),
            element_bit_size: data_type.bit_size.checked_div(elements).unwrap_or(0),
            lower_bound: l_bound,
            elements,
        };
        lookup.insert(data_type.name.clone(), shape);
    }
    Ok(lookup)
}

/// Returns the expanded sub-item list if `sub_items` has the CoE ARRAY shape,
/// `None` if it does not.
///
/// The element count sub-item is kept first; the array reference is replaced
/// by one sub-item per element, named `Element[k-1]` for sub-index `k`.
pub(crate) fn expand_sub_items(
    sub_items: &[SubItem],
    lookup: &BTreeMap<String, ArrayShape>,
) -> Result<Option<Vec<SubItem>>, EsiError> {
    let [count, reference] = sub_items else {
        return Ok(None);
    };

    let count_is_zero = match count.sub_idx.as_deref() {
        Some(literal) => parse_hex_dec(literal)? == 0,
        None => false,
    };
    if !count_is_zero || count.data_type != "USINT" || reference.sub_idx.is_some() {
        return Ok(None);
    }
    let Some(shape) = lookup.get(&reference.data_type) else {
        return Ok(None);
    };

    let out_of_range = || EsiError::ValueOutOfRange {
        literal: format!("{}+{}", shape.lower_bound, shape.elements),
        target: "u8",
    };
    let last = shape
        .lower_bound
        .checked_add(i64::from(shape.elements))
        .ok_or_else(out_of_range)?;
    if shape.lower_bound < 0 || (shape.elements > 0 && last - 1 > i64::from(u8::MAX)) {
        return Err(out_of_range());
    }

    let mut expanded = Vec::with_capacity(shape.elements as usize + 1);
    expanded.push(count.clone());

    let mut bit_offs = reference.bit_offs;
    for sub_index in shape.lower_bound..last {
        expanded.push(SubItem {
            sub_idx: Some(sub_index.to_string()),
            name: Some(format!("Element[{}]", sub_index - 1)),
            data_type: shape.base_type.clone(),
            comment: Vec::new(),
            bit_size: shape.element_bit_size,
            bit_offs,
            flags: reference.flags.clone(),
        });
        bit_offs = bit_offs
            .checked_add(shape.element_bit_size)
            .ok_or_else(out_of_range)?;
    }
    Ok(Some(expanded))
}
