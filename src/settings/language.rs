//! Display languages and the strings the report renderer needs

use serde::{Deserialize, Serialize};

use crate::error::{Result, WealthError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
    Kn,
    Ta,
}

/// Localized labels used around calculator output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Translations {
    pub calculators_title: &'static str,
    pub settings_title: &'static str,
    pub language: &'static str,
    pub theme: &'static str,
    pub warning: &'static str,
}

const EN: Translations = Translations {
    calculators_title: "Financial Calculators",
    settings_title: "Settings",
    language: "Language",
    theme: "Theme",
    warning: "Warning",
};

const HI: Translations = Translations {
    calculators_title: "वित्तीय कैलकुलेटर",
    settings_title: "सेटिंग्स",
    language: "भाषा",
    theme: "थीम",
    warning: "चेतावनी",
};

const KN: Translations = Translations {
    calculators_title: "ಆರ್ಥಿಕ ಕ್ಯಾಲ್ಕುಲೇಟರ್‌ಗಳು",
    settings_title: "ಸೆಟ್ಟಿಂಗ್‌ಗಳು",
    language: "ಭಾಷೆ",
    theme: "ಥೀಮ್",
    warning: "ಎಚ್ಚರಿಕೆ",
};

const TA: Translations = Translations {
    calculators_title: "நிதி கணிப்பான்கள்",
    settings_title: "அமைப்புகள்",
    language: "மொழி",
    theme: "தீம்",
    warning: "எச்சரிக்கை",
};

impl Language {
    pub const ALL: [Language; 4] = [Language::En, Language::Hi, Language::Kn, Language::Ta];

    /// Language code stored in the settings store
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Kn => "kn",
            Language::Ta => "ta",
        }
    }

    pub fn from_code(code: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|l| l.code() == code)
            .ok_or_else(|| WealthError::UnknownLanguage(code.to_string()))
    }

    pub fn translations(&self) -> &'static Translations {
        match self {
            Language::En => &EN,
            Language::Hi => &HI,
            Language::Kn => &KN,
            Language::Ta => &TA,
        }
    }
}
