//! Locale management and utilities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Supported locales
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Locale {
    /// Vietnamese, the site's default language
    Vietnamese,
    /// English
    English,
    /// Simplified Chinese
    Chinese,
}

impl Default for Locale {
    fn default() -> Self {
        Self::Vietnamese
    }
}

impl Locale {
    /// Get the language code for this locale
    pub fn code(&self) -> &'static str {
        match self {
            Self::Vietnamese => "vi",
            Self::English => "en",
            Self::Chinese => "zh",
        }
    }

    /// Get the full locale tag for this locale
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Vietnamese => "vi-VN",
            Self::English => "en-US",
            Self::Chinese => "zh-CN",
        }
    }

    /// Parse a locale from a language code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "vi" | "vi-VN" => Some(Self::Vietnamese),
            "en" | "en-US" => Some(Self::English),
            "zh" | "zh-CN" => Some(Self::Chinese),
            _ => None,
        }
    }

    /// Get all supported locales
    pub fn all() -> Vec<Self> {
        vec![Self::Vietnamese, Self::English, Self::Chinese]
    }

    /// Get the display name for the language-switcher indicator
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Vietnamese => "VI",
            Self::English => "EN",
            Self::Chinese => "中文",
        }
    }

    /// Get the dictionary document file name for this locale
    pub fn dictionary_file(&self) -> String {
        format!("{}.json", self.code())
    }

    /// Date format following this locale's conventions
    /// (day-first for Vietnamese, month-first for English, year-first for Chinese)
    pub fn date_format(&self) -> &'static str {
        match self {
            Self::Vietnamese => "%d/%m/%Y",
            Self::English => "%m/%d/%Y",
            Self::Chinese => "%Y/%m/%d",
        }
    }

    /// Format a timestamp for display under this locale's conventions
    pub fn format_date(&self, date: &DateTime<Utc>) -> String {
        date.format(self.date_format()).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_from_code() {
        assert_eq!(Locale::from_code("vi"), Some(Locale::Vietnamese));
        assert_eq!(Locale::from_code("en-US"), Some(Locale::English));
        assert_eq!(Locale::from_code("zh"), Some(Locale::Chinese));
        assert_eq!(Locale::from_code("xx"), None);
        assert_eq!(Locale::from_code(""), None);
    }

    #[test]
    fn test_default_is_vietnamese() {
        assert_eq!(Locale::default(), Locale::Vietnamese);
    }

    #[test]
    fn test_format_date_per_locale() {
        let date = Utc.with_ymd_and_hms(2025, 10, 15, 9, 30, 0).unwrap();
        assert_eq!(Locale::Vietnamese.format_date(&date), "15/10/2025");
        assert_eq!(Locale::English.format_date(&date), "10/15/2025");
        assert_eq!(Locale::Chinese.format_date(&date), "2025/10/15");
    }

    #[test]
    fn test_dictionary_file() {
        assert_eq!(Locale::English.dictionary_file(), "en.json");
    }
}
