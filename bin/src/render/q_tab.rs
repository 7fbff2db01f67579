//! Q tab: profitability figures and the sector correction.

use super::{score_line, section};
use kaidoki::Analysis;
use std::fmt;

fn relative(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    sector: Option<f64>,
    score: Option<f64>,
) -> fmt::Result {
    let Some(sector) = sector else {
        return Ok(());
    };
    match score {
        Some(score) => writeln!(f, "    Sector {label}: {sector:.1}% -> relative {score:.1}"),
        None => writeln!(f, "    Sector {label}: {sector:.1}% -> no relative score"),
    }
}

pub(super) fn render(f: &mut fmt::Formatter<'_>, a: &Analysis) -> fmt::Result {
    let inputs = a.quality_inputs();

    section(f, "🏢 Q (business quality)")?;
    score_line(f, "Q score", a.scores.q)?;
    writeln!(f)?;

    if let Some(roe) = inputs.roe {
        writeln!(f, "  ROE:          {roe:.1}%")?;
    }
    if let Some(roa) = inputs.roa {
        writeln!(f, "  ROA:          {roa:.1}%")?;
    }
    if let Some(equity) = inputs.equity_ratio {
        writeln!(f, "  Equity ratio: {equity:.1}%")?;
    }
    if inputs.is_empty() {
        writeln!(f, "  ROE / ROA / equity ratio are not available.")?;
    }

    let Some(c) = a.correction else {
        return Ok(());
    };
    writeln!(f)?;
    writeln!(f, "  Sector correction")?;
    relative(f, "ROE", c.sector.roe, c.roe_relative)?;
    relative(f, "ROA", c.sector.roa, c.roa_relative)?;
    if c.is_neutral() {
        writeln!(f, "    No relative score available; Q is unchanged.")
    } else {
        writeln!(
            f,
            "    Q: {:.1} -> {:.1} ({:+.1})",
            c.base_q,
            c.corrected_q,
            c.q_delta()
        )?;
        writeln!(f, "    QVT: {:.1} -> {:.1}", a.scores.qvt, c.corrected_qvt)
    }
}

#[cfg(test)]
mod tests {
    use crate::render::{Report, Tab, fixtures};

    #[test]
    fn test_q_tab_figures() {
        let out = Report::new(&fixtures::rising(), &[Tab::Q]).to_string();
        assert!(out.contains("🏢 Q (business quality)"));
        assert!(out.contains("57.9 / 100"));
        assert!(out.contains("ROE:          12.0%"));
        assert!(out.contains("ROA:          5.0%"));
        assert!(out.contains("Equity ratio: 45.0%"));
        assert!(!out.contains("Sector correction"));
    }

    #[test]
    fn test_q_tab_without_fundamentals() {
        let out = Report::new(&fixtures::falling_bare(), &[Tab::Q]).to_string();
        assert!(out.contains("are not available"));
        assert!(!out.contains("ROE:"));
    }

    #[test]
    fn test_q_tab_correction() {
        let a = fixtures::corrected();
        let out = Report::new(&a, &[Tab::Q]).to_string();
        let c = a.correction.unwrap();

        assert!(out.contains("Sector ROE: 8.0% -> relative 100.0"));
        assert!(out.contains("Sector ROA: 10.0% -> relative 33.3"));
        assert!(out.contains(&format!("Q: 57.9 -> {:.1}", c.corrected_q)));
    }
}
