//! Preference persistence in `localStorage`.

use crate::dom::{js_error_message, local_storage};
use psclient_core::{ClientError, Preferences};

pub const PREFS_KEY: &str = "showdown_prefs";

/// Saved preferences, or defaults when none are stored or they are unreadable.
#[must_use]
pub fn load_prefs() -> Preferences {
    let stored = local_storage()
        .and_then(|storage| storage.get_item(PREFS_KEY))
        .map_err(|err| log::warn!("reading preferences: {}", js_error_message(&err)))
        .ok()
        .flatten();
    stored.map_or_else(Preferences::default, |json| {
        Preferences::from_json(&json).unwrap_or_else(|err| {
            log::warn!("discarding unreadable preferences: {err}");
            Preferences::default()
        })
    })
}

/// # Errors
/// Returns an error when storage is unavailable or rejects the write.
pub fn save_prefs(prefs: &Preferences) -> Result<(), ClientError> {
    let json = prefs.to_json()?;
    local_storage()
        .and_then(|storage| storage.set_item(PREFS_KEY, &json))
        .map_err(|err| ClientError::Storage(js_error_message(&err)))
}
