//! T tab: timing score, mode checklist and buy range.

use super::{MISSING, mark, score_line, section};
use kaidoki::Analysis;
use kaidoki::signals::timing::TimingMode;
use std::fmt;

/// QVT needed for the "overall" checklist row.
const QVT_PASS: f64 = 60.0;

pub(super) fn render(f: &mut fmt::Formatter<'_>, a: &Analysis) -> fmt::Result {
    let timing = &a.timing;
    let windows = &a.indicators.ma_windows;

    section(f, "⏰ T (timing)")?;
    score_line(f, "T score", timing.score)?;
    writeln!(f, "  {:<16} {} {}", "Timing", timing.label.icon(), timing.label)?;
    writeln!(f, "  {:<16} {} {}", "Dip signal", timing.dip.icon(), timing.dip)?;
    writeln!(f, "  {:<16} {} {}", "Mode", timing.mode.icon(), timing.mode)?;
    writeln!(f)?;

    let (structure, slope) = match timing.mode {
        TimingMode::Trend => (
            format!("{}MA > {}MA > {}MA", windows.short, windows.mid, windows.long),
            format!("{}MA flat to gently rising", windows.short),
        ),
        TimingMode::Contrarian => (
            "falling or flat (MAs converging)".to_string(),
            format!("{}MA falling", windows.short),
        ),
    };
    let checks = timing.active_checklist();

    writeln!(f, "  {:<18} {:<30} {}", "Check", "Condition", "Result")?;
    writeln!(f, "  {:<18} {:<30} {}", "Medium-term trend", structure, mark(checks.structure))?;
    writeln!(f, "  {:<18} {:<30} {}", "Short-term slope", slope, mark(checks.slope))?;
    writeln!(
        f,
        "  {:<18} {:<30} {}",
        "Overall",
        "QVT score ≥ 60",
        mark(a.scores.qvt >= QVT_PASS)
    )?;
    writeln!(f)?;
    writeln!(f, "  Comment: {}", timing.stance())?;
    writeln!(f)?;
    writeln!(f, "  {:<16} {:.2}", "Centre price", a.buy_range.center)?;
    if a.buy_range.is_inverted() {
        writeln!(
            f,
            "  {:<16} {MISSING} (−1σ {:.2} is above the top {:.2})",
            "Buy range",
            a.buy_range.lower,
            a.buy_range.upper
        )?;
    } else {
        writeln!(
            f,
            "  {:<16} {:.2} – {:.2}",
            "Buy range",
            a.buy_range.lower,
            a.buy_range.upper
        )?;
        if a.buy_range.lower > a.buy_range.center {
            writeln!(f, "  (−1σ is above the centre price, so the range starts at −1σ.)")?;
        }
    }
    writeln!(
        f,
        "  (A reference range combining trend, timing and the QVT score.)"
    )
}

#[cfg(test)]
mod tests {
    use crate::render::{Report, Tab, fixtures};
    use kaidoki::signals::timing::BuyRange;

    #[test]
    fn test_t_tab_trend_mode() {
        let a = fixtures::rising();
        let out = Report::new(&a, &[Tab::T]).to_string();

        assert!(out.contains("⏰ T (timing)"));
        assert!(out.contains(&format!("{:.1} / 100", a.timing.score)));
        assert!(out.contains("📈 trend following"));
        assert!(out.contains("25MA > 50MA > 75MA"));
        assert!(out.contains("○"));
        assert!(out.contains(&format!("Comment: {}", a.timing.stance())));
        assert!(out.contains(&format!("{:.2} – {:.2}", a.buy_range.lower, a.buy_range.upper)));
    }

    #[test]
    fn test_t_tab_floor_above_centre() {
        // A steady climb pulls −1σ above the MA centre.
        let a = fixtures::rising();
        assert!(a.buy_range.lower > a.buy_range.center);
        assert!(!a.buy_range.is_inverted());

        let out = Report::new(&a, &[Tab::T]).to_string();
        assert!(out.contains("range starts at −1σ"));
        assert!(!out.contains("is above the top"));
    }

    #[test]
    fn test_t_tab_inverted_range() {
        let mut a = fixtures::rising();
        a.buy_range = BuyRange {
            center: 100.0,
            lower: 105.0,
            upper: 103.0,
        };
        let out = Report::new(&a, &[Tab::T]).to_string();
        let line = out.lines().find(|l| l.contains("Buy range")).unwrap();
        assert!(line.contains("— (−1σ 105.00 is above the top 103.00)"));
        assert!(!out.contains("105.00 – 103.00"));
    }

    #[test]
    fn test_t_tab_plain_range() {
        let a = fixtures::falling_bare();
        let out = Report::new(&a, &[Tab::T]).to_string();
        assert!(out.contains(&format!("{:.2} – {:.2}", a.buy_range.lower, a.buy_range.upper)));
        assert!(!out.contains("range starts at −1σ"));
    }

    #[test]
    fn test_t_tab_contrarian_mode() {
        let a = fixtures::falling_bare();
        let out = Report::new(&a, &[Tab::T]).to_string();

        assert!(out.contains("🧮 contrarian"));
        assert!(out.contains("25MA falling"));
        // Without fundamentals Q and V are 0, so QVT cannot reach 60.
        let overall = out.lines().find(|l| l.contains("QVT score ≥ 60")).unwrap();
        assert!(overall.ends_with("×"));
    }
}
