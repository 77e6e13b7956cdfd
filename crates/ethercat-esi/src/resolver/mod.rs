// crates/ethercat-esi/src/resolver/mod.rs

//! Handles the business logic of building the object tree from the
//! deserialized (and array-expanded) ESI model.
//!
//! This module contains the `resolve_devices` orchestrator and sub-modules
//! for the dictionary and PDO passes.

use crate::error::EsiError;
use crate::model::{self, EtherCatInfo};
use crate::options::EsiOptions;
use crate::parser::{parse_hex_dec_u32, select_name};
use crate::types::EtherCatDevice;
use log::{debug, trace, warn};

// --- Sub-modules ---

mod dictionary;
mod pdo;
mod utils;

use pdo::PdoDirection;

/// Resolves every `<Device>` of the document into an `EtherCatDevice`.
///
/// # Errors
/// `EsiError::NoDevicesFound` if the document declares no devices, otherwise
/// the first error raised while resolving a device.
pub(crate) fn resolve_devices(
    info: &EtherCatInfo,
    options: &EsiOptions,
) -> Result<Vec<EtherCatDevice>, EsiError> {
    let devices = info
        .descriptions
        .devices
        .device
        .iter()
        .map(|device| resolve_device(device, options))
        .collect::<Result<Vec<_>, _>>()?;

    if devices.is_empty() {
        return Err(EsiError::NoDevicesFound);
    }
    debug!("Resolved {} device(s)", devices.len());
    Ok(devices)
}

fn resolve_device(device: &model::Device, options: &EsiOptions) -> Result<EtherCatDevice, EsiError> {
    let device_type = &device.device_type;
    let product_code = device_type
        .product_code
        .as_deref()
        .ok_or(EsiError::MissingElement {
            element: "ProductCode",
        })
        .and_then(parse_hex_dec_u32)?;
    let revision_no = device_type
        .revision_no
        .as_deref()
        .ok_or(EsiError::MissingElement {
            element: "RevisionNo",
        })
        .and_then(parse_hex_dec_u32)?;

    let name = select_name(&device.name, options.language_id).unwrap_or_else(|| {
        warn!(
            "Device {} has no name with LcId {}",
            device_type.value, options.language_id
        );
        String::new()
    });

    // The expander rejects multiple profiles before this point.
    let profile_dictionary = match device.profile.as_slice() {
        [] => None,
        [profile] => profile.dictionary.as_ref(),
        profiles => {
            return Err(EsiError::UnsupportedProfileCount {
                device: device_type.value.clone(),
                count: profiles.len(),
            });
        }
    };

    // --- Pass 1: Dictionary ---
    let mut objects = match profile_dictionary {
        Some(d) => dictionary::resolve_dictionary(d, options.language_id)?,
        None => Vec::new(),
    };

    // --- Pass 2: RxPDO / TxPDO ---
    objects.extend(pdo::resolve_pdos(
        &device.rx_pdo,
        PdoDirection::Rx,
        options.language_id,
    )?);
    objects.extend(pdo::resolve_pdos(
        &device.tx_pdo,
        PdoDirection::Tx,
        options.language_id,
    )?);

    let device = EtherCatDevice {
        device_type: device_type.value.trim().to_string(),
        name,
        product_code,
        revision_no,
        objects,
    };
    trace!("{} with {} objects", device, device.objects.len());
    Ok(device)
}
