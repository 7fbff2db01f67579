//! V tab.

use super::{percent, ratio, score_line, section};
use kaidoki::Analysis;
use std::fmt;

pub(super) fn render(f: &mut fmt::Formatter<'_>, a: &Analysis) -> fmt::Result {
    section(f, "💰 V (valuation)")?;
    score_line(f, "V score", a.scores.v)?;
    writeln!(f)?;
    writeln!(f, "  PER:            {}", ratio(a.ratios.per))?;
    writeln!(f, "  Forward PER:    {}", ratio(a.ratios.per_forward))?;
    writeln!(f, "  PBR:            {}", ratio(a.ratios.pbr))?;
    writeln!(f, "  Dividend yield: {}", percent(a.dividend_yield))?;
    writeln!(f, "  (Missing PER / PBR / yield data is shown as \"—\".)")
}

#[cfg(test)]
mod tests {
    use crate::render::{Report, Tab, fixtures};

    #[test]
    fn test_v_tab() {
        let out = Report::new(&fixtures::rising(), &[Tab::V]).to_string();
        assert!(out.contains("💰 V (valuation)"));
        // (20 + 10) / 75
        assert!(out.contains("40.0 / 100"));
        assert!(out.contains("PER:            15.95x"));
        assert!(out.contains("Forward PER:    —"));
        assert!(out.contains("Dividend yield: —"));
    }
}
