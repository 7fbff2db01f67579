//! QVT tab: the combined score and verdict.

use super::section;
use kaidoki::Analysis;
use std::fmt;

pub(super) fn render(f: &mut fmt::Formatter<'_>, a: &Analysis) -> fmt::Result {
    let scores = &a.scores;

    section(f, "🧮 QVT (overall)")?;
    match a.correction {
        Some(c) => {
            writeln!(f, "  Q quality    {:>6.1} ({:+.1})", c.corrected_q, c.q_delta())?;
            writeln!(f, "  V value      {:>6.1}", scores.v)?;
            writeln!(f, "  T timing     {:>6.1}", scores.t)?;
            writeln!(
                f,
                "  QVT          {:>6.1} ({:+.1})",
                c.corrected_qvt,
                c.corrected_qvt - scores.qvt
            )?;
        }
        None => {
            writeln!(f, "  Q quality    {:>6.1}", scores.q)?;
            writeln!(f, "  V value      {:>6.1}", scores.v)?;
            writeln!(f, "  T timing     {:>6.1}", scores.t)?;
            writeln!(f, "  QVT          {:>6.1}", scores.qvt)?;
        }
    }
    writeln!(f)?;
    writeln!(f, "  {}", a.verdict)?;
    if a.correction.is_some() {
        writeln!(f, "  (Verdict based on the sector-corrected QVT.)")?;
    }
    Ok(())
}
