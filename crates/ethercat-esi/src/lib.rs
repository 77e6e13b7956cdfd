// src/lib.rs

#![doc = "Validates and parses EtherCAT Slave Information (ESI, ETG.2000) files."]
#![doc = ""]
#![doc = "The document is checked against a compiled-in subset of the ESI schema set,"]
#![doc = "deserialized, and turned into one object tree per device: the CoE object"]
#![doc = "dictionary (with ARRAY types expanded into their elements), followed by the"]
#![doc = "RxPDO and TxPDO entries."]
#![doc = ""]
#![doc = "It supports:"]
#![doc = "- `load_esi_from_str` / `load_esi_from_slice` / `load_esi_from_reader`: Parsing an ESI document."]
#![doc = "- `parse_upload`: Parsing an uploaded file into an `UploadEsiResponse`."]

// --- Crate Modules ---

mod document;
mod error;
mod expander;
mod model;
mod options;
mod parser;
mod resolver;
mod schema;
mod types;
mod upload;

// --- Public API Re-exports ---

pub use error::{ErrorClass, EsiError};
pub use options::{EsiOptions, DEFAULT_LANGUAGE_ID};
pub use parser::{
    load_esi_from_reader, load_esi_from_slice, load_esi_from_str, parse_hex_dec, parse_hex_dec_u16,
    parse_hex_dec_u32, parse_hex_dec_u8, select_localized, HEX_PREFIX,
};
pub use types::{
    EtherCatDevice, EtherCatObject, EtherCatObjectSource, ObjectAccess, ObjectPdoMapping,
};
pub use upload::{parse_upload, UploadEsiResponse};
