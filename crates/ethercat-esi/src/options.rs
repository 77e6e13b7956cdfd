// crates/ethercat-esi/src/options.rs

/// Windows LCID of U.S. English, the language ESI files are guaranteed to carry.
pub const DEFAULT_LANGUAGE_ID: u32 = 1033;

/// Settings that influence how an ESI file is turned into the object tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EsiOptions {
    /// The `LcId` selected from localized `<Name>`/`<Comment>` lists.
    pub language_id: u32,
}

impl Default for EsiOptions {
    fn default() -> Self {
        Self {
            language_id: DEFAULT_LANGUAGE_ID,
        }
    }
}

impl EsiOptions {
    /// Returns a copy of these options selecting names in `language_id`
    /// (e.g. 1031 for German).
    pub fn with_language_id(mut self, language_id: u32) -> Self {
        self.language_id = language_id;
        self
    }
}
