//! Preference save/load.
//!
//! ## Versioning policy
//!
//! - `PREFS_VERSION`: current save format version. Increment when adding
//!   fields.
//! - `MIN_COMPATIBLE_VERSION`: oldest version that can still be loaded.
//!   Adding fields alone does not change it (missing fields are filled with
//!   defaults); increment only on breaking changes to existing fields.
//!
//! Only user preferences are persisted. Navigation state is never written:
//! where the user is survives a reload exactly as far as the URL encodes it.

#[cfg(any(target_arch = "wasm32", test))]
use serde::{Deserialize, Serialize};

/// Per-user toggles edited on the settings screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preferences {
    pub notify_course_updates: bool,
    pub notify_live_reminders: bool,
    pub notify_marketing: bool,
    pub reduce_motion: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            notify_course_updates: true,
            notify_live_reminders: true,
            notify_marketing: false,
            reduce_motion: false,
        }
    }
}

/// Current save format version. Increment when adding fields.
#[cfg(any(target_arch = "wasm32", test))]
const PREFS_VERSION: u32 = 1;

/// Oldest loadable version. Saves at or above this are loaded with missing
/// fields defaulted.
#[cfg(any(target_arch = "wasm32", test))]
const MIN_COMPATIBLE_VERSION: u32 = 1;

/// localStorage key.
#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "akademi_prefs";

#[cfg(any(target_arch = "wasm32", test))]
#[derive(Serialize, Deserialize)]
struct PrefsFile {
    version: u32,
    prefs: PrefsSave,
}

#[cfg(any(target_arch = "wasm32", test))]
#[derive(Serialize, Deserialize, Default)]
#[serde(default)]
struct PrefsSave {
    notify_course_updates: bool,
    notify_live_reminders: bool,
    notify_marketing: bool,
    reduce_motion: bool,
}

#[cfg(any(target_arch = "wasm32", test))]
fn extract(prefs: &Preferences) -> PrefsFile {
    PrefsFile {
        version: PREFS_VERSION,
        prefs: PrefsSave {
            notify_course_updates: prefs.notify_course_updates,
            notify_live_reminders: prefs.notify_live_reminders,
            notify_marketing: prefs.notify_marketing,
            reduce_motion: prefs.reduce_motion,
        },
    }
}

#[cfg(any(target_arch = "wasm32", test))]
fn apply(save: &PrefsSave) -> Preferences {
    Preferences {
        notify_course_updates: save.notify_course_updates,
        notify_live_reminders: save.notify_live_reminders,
        notify_marketing: save.notify_marketing,
        reduce_motion: save.reduce_motion,
    }
}

#[cfg(target_arch = "wasm32")]
fn get_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Persist preferences to localStorage. Failures are logged and swallowed.
#[cfg(target_arch = "wasm32")]
pub fn store_prefs(prefs: &Preferences) {
    let file = extract(prefs);
    let json = match serde_json::to_string(&file) {
        Ok(j) => j,
        Err(e) => {
            web_sys::console::warn_1(&format!("akademi: tercih kaydı serileştirilemedi: {e}").into());
            return;
        }
    };

    if let Some(storage) = get_storage() {
        if let Err(e) = storage.set_item(STORAGE_KEY, &json) {
            web_sys::console::warn_1(
                &format!("akademi: localStorage kaydı başarısız: {e:?}").into(),
            );
        }
    }
}

/// Load preferences from localStorage. Incompatible or corrupt data is
/// discarded and defaults are returned.
#[cfg(target_arch = "wasm32")]
pub fn load_prefs() -> Preferences {
    let Some(storage) = get_storage() else {
        return Preferences::default();
    };

    let json = match storage.get_item(STORAGE_KEY) {
        Ok(Some(j)) => j,
        _ => return Preferences::default(),
    };

    let file: PrefsFile = match serde_json::from_str(&json) {
        Ok(f) => f,
        Err(e) => {
            web_sys::console::warn_1(
                &format!("akademi: tercih kaydı okunamadı (siliniyor): {e}").into(),
            );
            let _ = storage.remove_item(STORAGE_KEY);
            return Preferences::default();
        }
    };

    if file.version < MIN_COMPATIBLE_VERSION {
        web_sys::console::log_1(
            &format!(
                "akademi: tercih kaydı çok eski (saved={}, min={}); varsayılanlar kullanılacak.",
                file.version, MIN_COMPATIBLE_VERSION
            )
            .into(),
        );
        let _ = storage.remove_item(STORAGE_KEY);
        return Preferences::default();
    }

    apply(&file.prefs)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_prefs() -> Preferences {
    Preferences::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_and_apply_roundtrip() {
        let original = Preferences {
            notify_course_updates: false,
            notify_live_reminders: true,
            notify_marketing: true,
            reduce_motion: true,
        };

        let file = extract(&original);
        let json = serde_json::to_string(&file).unwrap();
        let loaded: PrefsFile = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.version, PREFS_VERSION);

        assert_eq!(apply(&loaded.prefs), original);
    }

    #[test]
    fn missing_fields_fall_back_to_serde_defaults() {
        let old_json = r#"{ "version": 1, "prefs": { "notify_marketing": true } }"#;
        let loaded: PrefsFile = serde_json::from_str(old_json).unwrap();
        let prefs = apply(&loaded.prefs);
        assert!(prefs.notify_marketing);
        assert!(!prefs.notify_course_updates); // serde default, not Preferences::default
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let json = r#"{
            "version": 1,
            "prefs": {
                "notify_course_updates": true,
                "notify_live_reminders": false,
                "notify_marketing": false,
                "reduce_motion": false,
                "future_field": "ignored"
            }
        }"#;
        let loaded: PrefsFile = serde_json::from_str(json).unwrap();
        assert!(loaded.prefs.notify_course_updates);
        assert!(!loaded.prefs.notify_live_reminders);
    }

    #[test]
    fn version_below_min_compatible_is_detected() {
        let file = PrefsFile {
            version: 0,
            prefs: PrefsSave::default(),
        };
        assert!(file.version < MIN_COMPATIBLE_VERSION);
    }
}
