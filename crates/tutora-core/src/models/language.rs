use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Languages a lesson can be generated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Language {
    English,
    Hindi,
    Bengali,
    Telugu,
    Marathi,
    Tamil,
    Urdu,
    Gujarati,
    Kannada,
    Malayalam,
    Spanish,
    French,
    German,
    Chinese,
    Japanese,
    Arabic,
}

impl Language {
    pub const ALL: [Language; 16] = [
        Language::English,
        Language::Hindi,
        Language::Bengali,
        Language::Telugu,
        Language::Marathi,
        Language::Tamil,
        Language::Urdu,
        Language::Gujarati,
        Language::Kannada,
        Language::Malayalam,
        Language::Spanish,
        Language::French,
        Language::German,
        Language::Chinese,
        Language::Japanese,
        Language::Arabic,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Bengali => "Bengali",
            Language::Telugu => "Telugu",
            Language::Marathi => "Marathi",
            Language::Tamil => "Tamil",
            Language::Urdu => "Urdu",
            Language::Gujarati => "Gujarati",
            Language::Kannada => "Kannada",
            Language::Malayalam => "Malayalam",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
            Language::Chinese => "Chinese",
            Language::Japanese => "Japanese",
            Language::Arabic => "Arabic",
        }
    }

    /// The language's own name for itself, as shown in the UI picker.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिन्दी",
            Language::Bengali => "বাংলা",
            Language::Telugu => "తెలుగు",
            Language::Marathi => "मराठी",
            Language::Tamil => "தமிழ்",
            Language::Urdu => "اردو",
            Language::Gujarati => "ગુજરાતી",
            Language::Kannada => "ಕನ್ನಡ",
            Language::Malayalam => "മലയാളം",
            Language::Spanish => "Español",
            Language::French => "Français",
            Language::German => "Deutsch",
            Language::Chinese => "中文",
            Language::Japanese => "日本語",
            Language::Arabic => "العربية",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|language| language.name() == s)
            .ok_or_else(|| CoreError::UnknownLanguage(s.to_string()))
    }
}
