//! Colour themes

use serde::{Deserialize, Serialize};

use crate::error::{Result, WealthError};

/// The eleven named colours of a theme, as `#RRGGBB` strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub border: &'static str,
    pub success: &'static str,
    pub error: &'static str,
    pub warning: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Default,
    Dark,
    Green,
    Premium,
}

impl ThemeName {
    pub const ALL: [ThemeName; 4] = [ThemeName::Default, ThemeName::Dark, ThemeName::Green, ThemeName::Premium];

    /// Key stored in the settings store
    pub fn key(&self) -> &'static str {
        match self {
            ThemeName::Default => "default",
            ThemeName::Dark => "dark",
            ThemeName::Green => "green",
            ThemeName::Premium => "premium",
        }
    }

    pub fn from_key(key: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.key() == key)
            .ok_or_else(|| WealthError::UnknownTheme(key.to_string()))
    }

    /// Human-readable theme name
    pub fn display_name(&self) -> &'static str {
        match self {
            ThemeName::Default => "Professional Blue",
            ThemeName::Dark => "Dark Professional",
            ThemeName::Green => "Wealth Green",
            ThemeName::Premium => "Premium Gold",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            ThemeName::Default => Palette {
                primary: "#0066CC",
                secondary: "#00A86B",
                accent: "#FF6B35",
                background: "#FFFFFF",
                surface: "#F8FAFC",
                text: "#1E293B",
                text_secondary: "#64748B",
                border: "#E2E8F0",
                success: "#10B981",
                error: "#EF4444",
                warning: "#F59E0B",
            },
            ThemeName::Dark => Palette {
                primary: "#3B82F6",
                secondary: "#10B981",
                accent: "#F97316",
                background: "#0F172A",
                surface: "#1E293B",
                text: "#F1F5F9",
                text_secondary: "#94A3B8",
                border: "#334155",
                success: "#22C55E",
                error: "#EF4444",
                warning: "#F59E0B",
            },
            ThemeName::Green => Palette {
                primary: "#059669",
                secondary: "#0D9488",
                accent: "#DC2626",
                background: "#FFFFFF",
                surface: "#F0FDF4",
                text: "#064E3B",
                text_secondary: "#6B7280",
                border: "#BBF7D0",
                success: "#10B981",
                error: "#DC2626",
                warning: "#D97706",
            },
            ThemeName::Premium => Palette {
                primary: "#B45309",
                secondary: "#7C2D12",
                accent: "#DC2626",
                background: "#FFFBEB",
                surface: "#FEF3C7",
                text: "#92400E",
                text_secondary: "#A16207",
                border: "#FDE68A",
                success: "#059669",
                error: "#DC2626",
                warning: "#D97706",
            },
        }
    }
}
