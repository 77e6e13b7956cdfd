// crates/ethercat-esi/src/upload.rs

use crate::error::EsiError;
use crate::options::EsiOptions;
use crate::parser::load_esi_from_reader;
use crate::types::EtherCatDevice;
use log::debug;
use serde::Serialize;
use std::io::{Read, Seek};

/// The success payload returned to whoever uploaded an ESI file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadEsiResponse {
    /// The file name as supplied by the uploader.
    pub name: String,
    /// The file length as supplied by the uploader.
    pub size: i64,
    pub devices: Vec<EtherCatDevice>,
}

/// Parses an uploaded ESI file and wraps the devices with the file metadata.
///
/// `name` and `size` are passed through untouched. On failure, use
/// [`EsiError::class`] to decide how to answer the uploader.
pub fn parse_upload<R: Read + Seek>(
    name: &str,
    size: i64,
    reader: &mut R,
    options: &EsiOptions,
) -> Result<UploadEsiResponse, EsiError> {
    debug!("Parsing uploaded ESI file {} ({} bytes)", name, size);
    let devices = load_esi_from_reader(reader, options)?;
    Ok(UploadEsiResponse {
        name: name.to_string(),
        size,
        devices,
    })
}
