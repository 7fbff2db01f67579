//! Terminal rendering of an [`Analysis`], one section per tab.

mod header;
mod q_tab;
mod qvt_tab;
mod t_tab;
mod v_tab;

use clap::ValueEnum;
use kaidoki::Analysis;
use std::fmt;

/// Shown in place of a value that is not known.
pub(crate) const MISSING: &str = "—";

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// A section of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Tab {
    /// Every tab.
    All,
    /// Timing.
    T,
    /// Quality.
    Q,
    /// Valuation.
    V,
    /// Combined score.
    Qvt,
}

impl Tab {
    const ORDER: [Self; 4] = [Self::T, Self::Q, Self::V, Self::Qvt];

    /// Tabs to print, in report order and without repeats.
    pub(crate) fn expand(selected: &[Self]) -> Vec<Self> {
        if selected.is_empty() || selected.contains(&Self::All) {
            return Self::ORDER.to_vec();
        }
        Self::ORDER
            .into_iter()
            .filter(|tab| selected.contains(tab))
            .collect()
    }
}

/// Header plus the selected tabs for one analysis.
pub(crate) struct Report<'a> {
    analysis: &'a Analysis,
    tabs: Vec<Tab>,
}

impl<'a> Report<'a> {
    pub(crate) fn new(analysis: &'a Analysis, tabs: &[Tab]) -> Self {
        Self {
            analysis,
            tabs: Tab::expand(tabs),
        }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        header::render(f, self.analysis)?;
        for tab in &self.tabs {
            writeln!(f)?;
            match tab {
                Tab::T => t_tab::render(f, self.analysis)?,
                Tab::Q => q_tab::render(f, self.analysis)?,
                Tab::V => v_tab::render(f, self.analysis)?,
                Tab::Qvt => qvt_tab::render(f, self.analysis)?,
                Tab::All => {}
            }
        }
        Ok(())
    }
}

fn section(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f, "{title}")?;
    writeln!(f, "{}", "─".repeat(40))
}

fn score_line(f: &mut fmt::Formatter<'_>, label: &str, score: f64) -> fmt::Result {
    writeln!(f, "  {label:<16} {score:.1} / 100")
}

/// `12.34x`, or the missing marker.
pub(crate) fn ratio(value: Option<f64>) -> String {
    value.map_or_else(|| MISSING.to_string(), |v| format!("{v:.2}x"))
}

/// `2.50%`, or the missing marker.
pub(crate) fn percent(value: Option<f64>) -> String {
    value.map_or_else(|| MISSING.to_string(), |v| format!("{v:.2}%"))
}

/// Checklist mark.
pub(crate) const fn mark(held: bool) -> &'static str {
    if held { "○" } else { "×" }
}
