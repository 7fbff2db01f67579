//! The analysis pipeline: market snapshot in, every score and judgement out.

use crate::config::KaidokiConfig;
use kaidoki_fetch::{Fundamentals, MarketSnapshot};
use kaidoki_indicators::IndicatorSnapshot;
use kaidoki_signals::{
    composite::{QvtVerdict, qvt_score},
    quality::{CorrectionResult, QualityInputs, SectorCorrection, SectorInputs},
    timing::{BuyRange, TimingInputs, TimingMetrics},
    value::ValuationRatios,
};
use kaidoki_traits::{Result, Scorer, Symbol};
use serde::Serialize;
use tracing::debug;

/// Latest price and its move against the previous session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceBlock {
    /// Latest close.
    pub close: f64,
    /// Previous close.
    pub previous_close: f64,
    /// Close minus previous close.
    pub change: f64,
    /// Change in percent of the previous close.
    pub change_percent: Option<f64>,
}

/// The four headline scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scores {
    /// Quality, 0–100.
    pub q: f64,
    /// Valuation, 0–100.
    pub v: f64,
    /// Timing, 0–100.
    pub t: f64,
    /// Mean of Q, V and T.
    pub qvt: f64,
}

/// Full result for one symbol.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    /// Symbol analysed.
    pub symbol: Symbol,
    /// Company name.
    pub company_name: String,
    /// Trading currency.
    pub currency: Option<String>,
    /// Price block.
    pub price: PriceBlock,
    /// Indicator values at the latest complete session.
    pub indicators: IndicatorSnapshot,
    /// Highest close in the fetched window.
    pub high_52w: Option<f64>,
    /// Lowest close in the fetched window.
    pub low_52w: Option<f64>,
    /// Trailing dividend yield in percent.
    pub dividend_yield: Option<f64>,
    /// Fundamentals as fetched.
    pub fundamentals: Fundamentals,
    /// PER, forward PER and PBR.
    pub ratios: ValuationRatios,
    /// Timing judgement.
    pub timing: TimingMetrics,
    /// Buy range for the current timing mode.
    pub buy_range: BuyRange,
    /// Headline scores before any sector correction.
    pub scores: Scores,
    /// Sector correction, when sector values were supplied.
    pub correction: Option<CorrectionResult>,
    /// Verdict on the final QVT.
    pub verdict: QvtVerdict,
}

impl Analysis {
    /// Q after sector correction, or the base Q.
    #[must_use]
    pub fn final_q(&self) -> f64 {
        self.correction.map_or(self.scores.q, |c| c.corrected_q)
    }

    /// QVT after sector correction, or the base QVT.
    #[must_use]
    pub fn final_qvt(&self) -> f64 {
        self.correction.map_or(self.scores.qvt, |c| c.corrected_qvt)
    }

    /// Profitability inputs the Q score was computed from.
    #[must_use]
    pub const fn quality_inputs(&self) -> QualityInputs {
        QualityInputs::new(
            self.fundamentals.roe,
            self.fundamentals.roa,
            self.fundamentals.equity_ratio,
        )
    }
}

/// Run the scoring pipeline over `snapshot`.
///
/// Indicators, then valuation ratios, timing metrics, the Q / V / T scores, QVT,
/// and finally the sector correction when `sector` is given.
///
/// # Errors
///
/// Returns an error for an invalid configuration or when the history is too
/// short for the indicators.
pub fn analyze(
    snapshot: &MarketSnapshot,
    config: &KaidokiConfig,
    sector: Option<SectorInputs>,
) -> Result<Analysis> {
    config.validate()?;

    let indicators = IndicatorSnapshot::compute(&snapshot.history, &config.indicators)?;
    let fundamentals = snapshot.fundamentals;

    let ratios = ValuationRatios::compute(
        snapshot.close,
        fundamentals.eps,
        fundamentals.bps,
        fundamentals.per_forward,
        fundamentals.eps_forward,
    );

    let timing_inputs = TimingInputs::from_snapshot(&indicators, snapshot.high_52w, snapshot.low_52w)
        .with_ratios(ratios.per, ratios.pbr);
    let timing = TimingMetrics::compute(&timing_inputs);
    let buy_range = BuyRange::for_mode(timing.mode, &timing_inputs);

    let quality_inputs = QualityInputs::new(
        fundamentals.roe,
        fundamentals.roa,
        fundamentals.equity_ratio,
    );
    let q = config.scoring.quality.scorer().score(&quality_inputs);
    let v = config
        .scoring
        .valuation
        .scorer()
        .score(&ratios.inputs(snapshot.dividend_yield));
    let t = timing.score;
    let qvt = qvt_score(q, v, t);

    let correction = sector.map(|sector| {
        SectorCorrection::new(config.correction).apply(
            q,
            v,
            t,
            fundamentals.roe,
            fundamentals.roa,
            sector,
        )
    });

    let final_qvt = correction.map_or(qvt, |c| c.corrected_qvt);
    debug!(symbol = %snapshot.symbol, q, v, t, qvt, final_qvt, "scored");

    Ok(Analysis {
        symbol: snapshot.symbol.clone(),
        company_name: snapshot.company_name.clone(),
        currency: snapshot.currency.clone(),
        price: PriceBlock {
            close: snapshot.close,
            previous_close: snapshot.previous_close,
            change: snapshot.change(),
            change_percent: snapshot.change_percent(),
        },
        indicators,
        high_52w: snapshot.high_52w,
        low_52w: snapshot.low_52w,
        dividend_yield: snapshot.dividend_yield,
        fundamentals,
        ratios,
        timing,
        buy_range,
        scores: Scores { q, v, t, qvt },
        correction,
        verdict: QvtVerdict::from_score(final_qvt),
    })
}
