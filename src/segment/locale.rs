//! Locale resolution for boundary analysis.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{EngineErrorCode, ParserError, Result};

/// Locale used when the setting is empty.
pub const DEFAULT_LOCALE: &str = "en";

lazy_static! {
    static ref LOCALE_ID: Regex = Regex::new(
        r"(?i)^(?:root|[a-z]{2,3})(?:[_-][a-z0-9]{1,8})*(?:@[a-z0-9]+=[a-z0-9_-]+(?:;[a-z0-9]+=[a-z0-9_-]+)*)?$"
    )
    .expect("locale pattern is valid");
}

/// A syntactically valid locale identifier such as `en`, `ja_JP` or `zh-Hant-TW`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Locale {
    name: String,
}

impl Locale {
    /// Resolve a locale setting.
    ///
    /// An empty setting falls back to [`DEFAULT_LOCALE`]. Malformed
    /// identifiers, including padded or whitespace-only ones, fail with
    /// [`EngineErrorCode::IllegalArgument`].
    pub fn resolve(setting: &str) -> Result<Self> {
        let name = match setting {
            "" => DEFAULT_LOCALE,
            name => name,
        };

        if !LOCALE_ID.is_match(name) {
            return Err(ParserError::engine_init(
                name,
                EngineErrorCode::IllegalArgument,
            ));
        }

        Ok(Locale {
            name: name.to_string(),
        })
    }

    /// The identifier as given.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The lowercased language subtag.
    pub fn language(&self) -> String {
        self.name
            .split(['_', '-', '@'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase()
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale {
            name: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_setting_uses_default() {
        assert_eq!(Locale::resolve("").unwrap().name(), "en");
    }

    #[test]
    fn test_whitespace_is_not_trimmed() {
        for name in ["   ", " ja ", "ja\n"] {
            match Locale::resolve(name) {
                Err(ParserError::EngineInit { locale, code }) => {
                    assert_eq!(locale, name);
                    assert_eq!(code, EngineErrorCode::IllegalArgument);
                }
                other => panic!("expected engine init error for {name:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_accepts_common_identifiers() {
        for name in ["ja", "ja_JP", "zh-Hant-TW", "root", "de_DE@collation=phonebook", "es_419"] {
            assert_eq!(Locale::resolve(name).unwrap().name(), name);
        }
    }

    #[test]
    fn test_language_subtag() {
        assert_eq!(Locale::resolve("ZH_Hans").unwrap().language(), "zh");
        assert_eq!(Locale::resolve("fr@calendar=gregorian").unwrap().language(), "fr");
    }

    #[test]
    fn test_rejects_malformed_identifiers() {
        for name in ["e", "english!", "en__US", "12", "en_toolongsubtag", "en@"] {
            match Locale::resolve(name) {
                Err(ParserError::EngineInit { locale, code }) => {
                    assert_eq!(locale, name);
                    assert_eq!(code, EngineErrorCode::IllegalArgument);
                }
                other => panic!("expected engine init error for {name}, got {other:?}"),
            }
        }
    }
}
