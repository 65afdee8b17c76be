//! Process-wide settings registry.
//!
//! Settings live under the `wordbreak.` namespace. Sessions take a
//! [`snapshot`] when they start, so changing a setting never affects a
//! session that is already running.

use lazy_static::lazy_static;
use log::warn;
use parking_lot::RwLock;

use crate::config::ParserConfig;
use crate::encoding::HostCodec;
use crate::error::{ParserError, Result};

/// Namespace shared by all settings.
pub const SETTINGS_PREFIX: &str = "wordbreak.";
/// Name of the locale setting.
pub const LOCALE_SETTING: &str = "wordbreak.locale";
/// Name of the host encoding setting.
pub const ENCODING_SETTING: &str = "wordbreak.encoding";

/// Description of one setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingDefinition {
    /// Fully qualified name.
    pub name: &'static str,
    /// One-line description.
    pub short_desc: &'static str,
    /// Value after [`reset`].
    pub boot_value: &'static str,
}

const DEFINITIONS: [SettingDefinition; 2] = [
    SettingDefinition {
        name: LOCALE_SETTING,
        short_desc: "Locale name to use in boundary analysis.",
        boot_value: "",
    },
    SettingDefinition {
        name: ENCODING_SETTING,
        short_desc: "Encoding of text handed to and returned by the parser.",
        boot_value: "UTF-8",
    },
];

lazy_static! {
    static ref SETTINGS: RwLock<ParserConfig> = RwLock::new(ParserConfig::default());
}

/// All known settings.
pub fn definitions() -> &'static [SettingDefinition] {
    &DEFINITIONS
}

/// Copy of the current settings.
pub fn snapshot() -> ParserConfig {
    SETTINGS.read().clone()
}

/// Current locale setting (may be empty).
pub fn locale() -> String {
    SETTINGS.read().locale.clone()
}

/// Set the locale. Validity is checked when a session starts.
pub fn set_locale<S: Into<String>>(locale: S) {
    SETTINGS.write().locale = locale.into();
}

/// Replace every setting at once.
pub fn apply(config: ParserConfig) {
    *SETTINGS.write() = config;
}

/// Restore boot values.
pub fn reset() {
    apply(ParserConfig::default());
}

/// Assign a setting by name.
pub fn set(name: &str, value: &str) -> Result<()> {
    match name {
        LOCALE_SETTING => {
            set_locale(value);
            Ok(())
        }
        ENCODING_SETTING => {
            HostCodec::for_label(value)?;
            SETTINGS.write().encoding = value.to_string();
            Ok(())
        }
        _ => Err(unrecognized(name)),
    }
}

/// Read a setting by name.
pub fn get(name: &str) -> Result<String> {
    let settings = SETTINGS.read();
    match name {
        LOCALE_SETTING => Ok(settings.locale.clone()),
        ENCODING_SETTING => Ok(settings.encoding.clone()),
        _ => Err(unrecognized(name)),
    }
}

fn unrecognized(name: &str) -> ParserError {
    if name.starts_with(SETTINGS_PREFIX) {
        warn!("unrecognized configuration parameter \"{name}\" in namespace \"wordbreak\"");
    }
    ParserError::config(format!("unrecognized configuration parameter \"{name}\""))
}
