use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Locales the book provider can generate data for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Language {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "en_US"))]
    EnUs,
    #[cfg_attr(feature = "serde", serde(rename = "de_DE"))]
    DeDe,
    #[cfg_attr(feature = "serde", serde(rename = "fr_FR"))]
    FrFr,
}

impl Language {
    pub const ALL: [Self; 3] = [Self::EnUs, Self::DeDe, Self::FrFr];

    /// Locale code as sent to the provider, e.g. `en_US`.
    pub fn code(self) -> &'static str {
        match self {
            Self::EnUs => "en_US",
            Self::DeDe => "de_DE",
            Self::FrFr => "fr_FR",
        }
    }

    /// Human readable label for selectors.
    pub fn label(self) -> &'static str {
        match self {
            Self::EnUs => "English (US)",
            Self::DeDe => "German (DE)",
            Self::FrFr => "French (FR)",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ModelError::UnknownLanguage(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!("de_DE".parse::<Language>(), Ok(Language::DeDe));
        assert_eq!(" fr_fr ".parse::<Language>(), Ok(Language::FrFr));
    }

    #[test]
    fn rejects_unknown_code() {
        let err = "pt_BR".parse::<Language>().unwrap_err();
        assert_eq!(err, ModelError::UnknownLanguage("pt_BR".into()));
        assert_eq!(err.to_string(), "unknown language code: pt_BR");
    }

    #[test]
    fn display_round_trips_through_code() {
        for lang in Language::ALL {
            assert_eq!(lang.to_string().parse::<Language>(), Ok(lang));
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_locale_code() {
        let json = serde_json::to_string(&Language::EnUs).unwrap();
        assert_eq!(json, "\"en_US\"");
    }
}
