use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

static TRANSLATIONS_EN: Lazy<Value> = Lazy::new(|| {
    let json_str = include_str!("i18n/locales/en-US.json");
    serde_json::from_str(json_str).expect("Failed to parse en-US.json")
});

static TRANSLATIONS_VI: Lazy<Value> = Lazy::new(|| {
    let json_str = include_str!("i18n/locales/vi-VN.json");
    serde_json::from_str(json_str).expect("Failed to parse vi-VN.json")
});

/// Language used for user-facing streak text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    #[serde(alias = "vn")]
    Vi,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Vi => "vi",
        }
    }

    fn translations(&self) -> &'static Value {
        match self {
            Locale::En => &TRANSLATIONS_EN,
            Locale::Vi => &TRANSLATIONS_VI,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = String;

    /// Prefix match: "vi"/"vn" => Vietnamese, "en" => English
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        if lower.starts_with("vi") || lower.starts_with("vn") {
            Ok(Locale::Vi)
        } else if lower.starts_with("en") {
            Ok(Locale::En)
        } else {
            Err(format!("Unsupported locale: {}", s))
        }
    }
}

/// Get translation by key path (e.g., "streak.status.inactive")
/// Falls back to the key itself when the path is missing.
pub fn t(locale: Locale, key: &str) -> String {
    let mut current = locale.translations();

    for part in key.split('.') {
        match current.get(part) {
            Some(value) => current = value,
            None => return key.to_string(),
        }
    }

    current.as_str().unwrap_or(key).to_string()
}

/// Translate and substitute `{name}` placeholders
pub fn t_with(locale: Locale, key: &str, args: &[(&str, &str)]) -> String {
    args.iter().fold(t(locale, key), |text, (name, value)| {
        text.replace(&format!("{{{}}}", name), value)
    })
}
