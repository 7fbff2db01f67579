//! Common header: price, multiples, moving averages and band position.

use super::{MISSING, RULE, percent, ratio};
use kaidoki::Analysis;
use std::fmt;

const fn direction(change: f64) -> &'static str {
    if change > 0.0 {
        "▲"
    } else if change < 0.0 {
        "▼"
    } else {
        "="
    }
}

pub(super) fn render(f: &mut fmt::Formatter<'_>, a: &Analysis) -> fmt::Result {
    let ind = &a.indicators;
    let price = &a.price;

    writeln!(f, "{RULE}")?;
    writeln!(f, "📌 {} ({})", a.symbol, a.company_name)?;
    writeln!(f, "{RULE}")?;

    let change_pct = price
        .change_percent
        .map_or_else(|| MISSING.to_string(), |p| format!("{p:+.2}%"));
    let currency = a.currency.as_deref().unwrap_or_default();
    writeln!(
        f,
        "Price:  {:.2} {} {} {:+.2} ({})",
        price.close,
        currency,
        direction(price.change),
        price.change,
        change_pct
    )?;
    writeln!(f, "        (previous close {:.2})", price.previous_close)?;
    writeln!(
        f,
        "PER: {} | Fwd PER: {} | PBR: {}",
        ratio(a.ratios.per),
        ratio(a.ratios.per_forward),
        ratio(a.ratios.pbr)
    )?;
    writeln!(
        f,
        "{}MA: {:.2} {} | {}MA: {:.2} {} | {}MA: {:.2} {}",
        ind.ma_windows.short,
        ind.ma.short,
        ind.arrows.short,
        ind.ma_windows.mid,
        ind.ma.mid,
        ind.arrows.mid,
        ind.ma_windows.long,
        ind.ma.long,
        ind.arrows.long
    )?;
    writeln!(
        f,
        "RSI: {:.1} | BB: {} {}",
        ind.rsi,
        a.timing.band.icon(),
        a.timing.band
    )?;
    if a.timing.high_price_alert {
        writeln!(f, "⚠️  High-price risk: trading close to the top of its range")?;
    }
    if a.dividend_yield.is_some() {
        writeln!(f, "Dividend yield: {}", percent(a.dividend_yield))?;
    }
    Ok(())
}
