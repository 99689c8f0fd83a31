//! Plain-text rendering of calculation outcomes
//!
//! The caller passes the active [`Settings`]; labels that have translations follow
//! the chosen language.

use crate::calculator::CalculationOutcome;
use crate::catalog::CalculatorKind;
use crate::format::format_inr;
use crate::settings::Settings;

/// Heading line: localized section title and the calculator name
pub fn heading(kind: CalculatorKind, settings: &Settings) -> String {
    format!("{} / {}", settings.translations().calculators_title, kind.title())
}

/// Render a result as an aligned block of labelled amounts
pub fn render_outcome(outcome: &CalculationOutcome, settings: &Settings) -> String {
    let kind = outcome.kind();
    let lines = outcome.lines();
    let width = lines.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

    let mut out = heading(kind, settings);
    out.push('\n');
    out.push_str(&"-".repeat(40));
    out.push('\n');
    for (label, value) in lines {
        out.push_str(&format!("{:<width$}  {:>16}\n", label, format_inr(value), width = width));
    }

    if let CalculationOutcome::Swp(r) = outcome {
        if r.depleted {
            out.push_str(&format!(
                "{}: corpus exhausted after {} months\n",
                settings.translations().warning,
                r.months_simulated
            ));
        }
    }
    if let CalculationOutcome::SipSwp(r) = outcome {
        if r.depleted {
            out.push_str(&format!("{}: corpus exhausted\n", settings.translations().warning));
        }
    }
    out
}

/// Notice shown instead of a result when the input is incomplete
pub fn render_incomplete(kind: CalculatorKind, settings: &Settings) -> String {
    format!(
        "{}\n{}: fill in every field with a positive number\n",
        heading(kind, settings),
        settings.translations().warning
    )
}

/// Calculator menu, one line per calculator
pub fn render_catalog(settings: &Settings) -> String {
    let mut out = format!("{}\n", settings.translations().calculators_title);
    for kind in CalculatorKind::ALL {
        out.push_str(&format!("  {:<14} {:<26} {}\n", kind.id(), kind.title(), kind.subtitle()));
    }
    out
}

/// Current preferences with the theme palette
pub fn render_settings(settings: &Settings) -> String {
    let t = settings.translations();
    let palette = settings.palette();
    format!(
        "{}\n  {}: {} ({})\n  {}: {}\n  primary {}  background {}  text {}\n",
        t.settings_title,
        t.theme,
        settings.theme.display_name(),
        settings.theme.key(),
        t.language,
        settings.language.code(),
        palette.primary,
        palette.background,
        palette.text,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{calculate, RawFields};
    use crate::settings::{Language, ThemeName};

    fn sip_outcome() -> CalculationOutcome {
        let fields = RawFields {
            amount: "5000".into(),
            rate: "12".into(),
            years: "10".into(),
            ..Default::default()
        };
        calculate(CalculatorKind::Sip, &fields).unwrap()
    }

    #[test]
    fn test_render_sip_block() {
        let text = render_outcome(&sip_outcome(), &Settings::default());
        assert!(text.starts_with("Financial Calculators / SIP Calculator"));
        assert!(text.contains("Maturity Amount"));
        assert!(text.contains("\u{20b9}6,00,000"));
    }

    #[test]
    fn test_heading_follows_language() {
        let settings = Settings {
            theme: ThemeName::Dark,
            language: Language::Ta,
        };
        assert!(heading(CalculatorKind::Fd, &settings).starts_with("நிதி கணிப்பான்கள்"));
        assert!(render_incomplete(CalculatorKind::Fd, &settings).contains("எச்சரிக்கை"));
    }

    #[test]
    fn test_catalog_lists_every_calculator() {
        let text = render_catalog(&Settings::default());
        assert_eq!(text.lines().count(), 1 + CalculatorKind::ALL.len());
        assert!(text.contains("Plan your Retirement"));
    }

    #[test]
    fn test_settings_show_palette() {
        let settings = Settings {
            theme: ThemeName::Premium,
            language: Language::En,
        };
        let text = render_settings(&settings);
        assert!(text.contains("Premium Gold"));
        assert!(text.contains("#B45309"));
    }
}
