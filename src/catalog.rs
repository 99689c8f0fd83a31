//! Catalog of the available calculators

use serde::{Deserialize, Serialize};

use crate::error::{Result, WealthError};

/// Every calculator the app offers, in menu order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalculatorKind {
    /// Mutual fund lumpsum growth
    Mf,
    Sip,
    /// SIP with an annual step-up
    SipTopup,
    Swp,
    /// SIP accumulation followed by SWP drawdown
    SipSwp,
    Fd,
    /// Alternative investment fund, net of management fees
    Aif,
    Lumpsum,
    Education,
    Marriage,
    Retirement,
    FutureValue,
}

impl CalculatorKind {
    pub const ALL: [CalculatorKind; 12] = [
        CalculatorKind::Mf,
        CalculatorKind::Sip,
        CalculatorKind::SipTopup,
        CalculatorKind::Swp,
        CalculatorKind::SipSwp,
        CalculatorKind::Fd,
        CalculatorKind::Aif,
        CalculatorKind::Lumpsum,
        CalculatorKind::Education,
        CalculatorKind::Marriage,
        CalculatorKind::Retirement,
        CalculatorKind::FutureValue,
    ];

    /// Short identifier used on the command line and in batch files
    pub fn id(&self) -> &'static str {
        match self {
            CalculatorKind::Mf => "mf",
            CalculatorKind::Sip => "sip",
            CalculatorKind::SipTopup => "sip-topup",
            CalculatorKind::Swp => "swp",
            CalculatorKind::SipSwp => "sip-swp",
            CalculatorKind::Fd => "fd",
            CalculatorKind::Aif => "aif",
            CalculatorKind::Lumpsum => "lumpsum",
            CalculatorKind::Education => "education",
            CalculatorKind::Marriage => "marriage",
            CalculatorKind::Retirement => "retirement",
            CalculatorKind::FutureValue => "future-value",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            CalculatorKind::Mf => "MF Calculator",
            CalculatorKind::Sip => "SIP Calculator",
            CalculatorKind::SipTopup => "SIP Topup Calculator",
            CalculatorKind::Swp => "SWP Calculator",
            CalculatorKind::SipSwp => "SIP SWP Calculator",
            CalculatorKind::Fd => "FD Calculator",
            CalculatorKind::Aif => "AIF Calculator",
            CalculatorKind::Lumpsum => "Lumpsum Calculator",
            CalculatorKind::Education => "Education Calculator",
            CalculatorKind::Marriage => "Marriage Calculator",
            CalculatorKind::Retirement => "Retirement Calculator",
            CalculatorKind::FutureValue => "Future Value Calculator",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            CalculatorKind::Mf => "Mutual Fund Calculator",
            CalculatorKind::Sip => "Systematic Investment Plan",
            CalculatorKind::SipTopup => "SIP with Annual Increase",
            CalculatorKind::Swp => "Systematic Withdrawal Plan",
            CalculatorKind::SipSwp => "Combined SIP & SWP",
            CalculatorKind::Fd => "Fixed Deposit Calculator",
            CalculatorKind::Aif => "Alternative Investment Fund",
            CalculatorKind::Lumpsum => "One-time Investment",
            CalculatorKind::Education => "Plan for Education",
            CalculatorKind::Marriage => "Plan for Marriage",
            CalculatorKind::Retirement => "Plan your Retirement",
            CalculatorKind::FutureValue => "Calculate Future Value",
        }
    }

    /// Look up a calculator by id; the `-calculator` suffix is optional
    pub fn from_id(id: &str) -> Result<Self> {
        let normalized = id.trim().to_ascii_lowercase();
        let short = normalized.strip_suffix("-calculator").unwrap_or(normalized.as_str());
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.id() == short)
            .ok_or_else(|| WealthError::UnknownCalculator(id.to_string()))
    }
}

impl std::fmt::Display for CalculatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for kind in CalculatorKind::ALL {
            assert_eq!(CalculatorKind::from_id(kind.id()).unwrap(), kind);
        }
    }

    #[test]
    fn test_route_style_ids() {
        assert_eq!(CalculatorKind::from_id("sip-topup-calculator").unwrap(), CalculatorKind::SipTopup);
        assert_eq!(CalculatorKind::from_id("FD").unwrap(), CalculatorKind::Fd);
        assert!(matches!(
            CalculatorKind::from_id("emi"),
            Err(WealthError::UnknownCalculator(_))
        ));
    }

    #[test]
    fn test_serde_id_matches_display() {
        let json = serde_json::to_string(&CalculatorKind::FutureValue).unwrap();
        assert_eq!(json, "\"future-value\"");
    }
}
