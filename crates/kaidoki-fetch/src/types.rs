//! Data types for FMP API responses and the fundamentals derived from them.

use serde::{Deserialize, Serialize};

/// Reporting period for financial statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    /// Annual reports.
    #[default]
    Annual,
    /// Quarterly reports.
    Quarter,
}

impl Period {
    /// Get the API parameter value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Annual => "annual",
            Self::Quarter => "quarter",
        }
    }
}

/// Income statement row from FMP.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeStatement {
    /// Filing date.
    #[serde(default)]
    pub date: String,
    /// Ticker symbol.
    #[serde(default)]
    pub symbol: String,
    /// Net income.
    #[serde(default)]
    pub net_income: Option<f64>,
    /// Earnings per share (basic).
    #[serde(default)]
    pub eps: Option<f64>,
    /// Earnings per share (diluted).
    #[serde(default, alias = "epsdiluted")]
    pub eps_diluted: Option<f64>,
    /// Weighted average shares outstanding.
    #[serde(default)]
    pub weighted_average_shs_out: Option<f64>,
}

impl IncomeStatement {
    /// Basic EPS when non-zero, else diluted EPS when non-zero.
    #[must_use]
    pub fn effective_eps(&self) -> Option<f64> {
        nonzero(self.eps).or_else(|| nonzero(self.eps_diluted))
    }
}

/// Balance sheet row from FMP.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSheet {
    /// Filing date.
    #[serde(default)]
    pub date: String,
    /// Ticker symbol.
    #[serde(default)]
    pub symbol: String,
    /// Total assets.
    #[serde(default)]
    pub total_assets: Option<f64>,
    /// Shareholders' equity attributable to the parent.
    #[serde(default)]
    pub total_stockholders_equity: Option<f64>,
    /// Total equity including minority interests.
    #[serde(default)]
    pub total_equity: Option<f64>,
    /// Common shares outstanding, when reported.
    #[serde(default, alias = "commonSharesOutstanding")]
    pub common_stock_shares_outstanding: Option<f64>,
}

impl BalanceSheet {
    /// Stockholders' equity when non-zero, else total equity.
    #[must_use]
    pub fn equity(&self) -> Option<f64> {
        nonzero(self.total_stockholders_equity).or_else(|| nonzero(self.total_equity))
    }
}

/// Analyst estimate row from FMP.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalystEstimate {
    /// Fiscal period the estimate is for.
    #[serde(default)]
    pub date: String,
    /// Ticker symbol.
    #[serde(default)]
    pub symbol: String,
    /// Average EPS estimate.
    #[serde(default, alias = "estimatedEpsAvg")]
    pub eps_avg: Option<f64>,
    /// Highest EPS estimate.
    #[serde(default, alias = "estimatedEpsHigh")]
    pub eps_high: Option<f64>,
}

impl AnalystEstimate {
    /// Average estimate when non-zero, else the high estimate.
    #[must_use]
    pub fn forward_eps(&self) -> Option<f64> {
        nonzero(self.eps_avg).or_else(|| nonzero(self.eps_high))
    }
}

/// Per-share figures and profitability ratios for one company.
///
/// Ratios are in percent. Every field is optional: a missing statement or a
/// zero denominator leaves the dependent values unset.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Fundamentals {
    /// Trailing earnings per share.
    pub eps: Option<f64>,
    /// Book value per share.
    pub bps: Option<f64>,
    /// Forward (estimated) earnings per share.
    pub eps_forward: Option<f64>,
    /// Forward PER, when a source supplies one directly.
    pub per_forward: Option<f64>,
    /// Return on equity.
    pub roe: Option<f64>,
    /// Return on assets.
    pub roa: Option<f64>,
    /// Equity / total assets.
    pub equity_ratio: Option<f64>,
}

impl Fundamentals {
    /// Derive fundamentals from the latest statement rows.
    #[must_use]
    pub fn from_statements(
        income: Option<&IncomeStatement>,
        balance: Option<&BalanceSheet>,
        estimate: Option<&AnalystEstimate>,
    ) -> Self {
        let net_income = income.and_then(|i| i.net_income);
        let equity = balance.and_then(BalanceSheet::equity);
        let assets = balance.and_then(|b| b.total_assets).filter(|a| *a > 0.0);

        let shares = balance
            .and_then(|b| b.common_stock_shares_outstanding)
            .filter(|s| *s > 0.0)
            .or_else(|| income.and_then(|i| i.weighted_average_shs_out).filter(|s| *s > 0.0));

        let bps = equity.zip(shares).map(|(e, s)| e / s);
        let positive_equity = equity.filter(|e| *e > 0.0);

        Self {
            eps: income.and_then(IncomeStatement::effective_eps),
            bps,
            eps_forward: estimate.and_then(AnalystEstimate::forward_eps),
            per_forward: None,
            roe: net_income
                .zip(positive_equity)
                .map(|(n, e)| n / e * 100.0),
            roa: net_income.zip(assets).map(|(n, a)| n / a * 100.0),
            equity_ratio: equity.zip(assets).map(|(e, a)| e / a * 100.0),
        }
    }

    /// True when no figure is known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn nonzero(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const INCOME_JSON: &str = r#"[{
        "date": "2024-03-31",
        "symbol": "7203.T",
        "period": "FY",
        "revenue": 45095325000000,
        "netIncome": 4944933000000,
        "eps": 365.94,
        "epsDiluted": 365.94,
        "weightedAverageShsOut": 13513000000
    }]"#;

    const BALANCE_JSON: &str = r#"[{
        "date": "2024-03-31",
        "symbol": "7203.T",
        "totalAssets": 90114296000000,
        "totalStockholdersEquity": 34220991000000,
        "totalEquity": 35239338000000
    }]"#;

    const ESTIMATE_JSON: &str = r#"[{
        "symbol": "7203.T",
        "date": "2026-03-31",
        "epsAvg": 0,
        "epsHigh": 410.5
    }]"#;

    #[test]
    fn test_parse_rows() {
        let income: Vec<IncomeStatement> = serde_json::from_str(INCOME_JSON).unwrap();
        assert_eq!(income.len(), 1);
        assert_eq!(income[0].date, "2024-03-31");
        assert_relative_eq!(income[0].effective_eps().unwrap(), 365.94);

        let estimates: Vec<AnalystEstimate> = serde_json::from_str(ESTIMATE_JSON).unwrap();
        assert_relative_eq!(estimates[0].forward_eps().unwrap(), 410.5);
    }

    #[test]
    fn test_legacy_field_names() {
        let income: IncomeStatement =
            serde_json::from_str(r#"{"eps": 0, "epsdiluted": 2.5}"#).unwrap();
        assert_relative_eq!(income.effective_eps().unwrap(), 2.5);

        let estimate: AnalystEstimate =
            serde_json::from_str(r#"{"estimatedEpsAvg": 3.1, "estimatedEpsHigh": 3.5}"#).unwrap();
        assert_relative_eq!(estimate.forward_eps().unwrap(), 3.1);
    }

    #[test]
    fn test_null_fields() {
        let balance: BalanceSheet = serde_json::from_str(
            r#"{"totalAssets": null, "totalStockholdersEquity": 0, "totalEquity": 50}"#,
        )
        .unwrap();
        assert_eq!(balance.total_assets, None);
        assert_relative_eq!(balance.equity().unwrap(), 50.0);
    }

    #[test]
    fn test_fundamentals_from_statements() {
        let income: Vec<IncomeStatement> = serde_json::from_str(INCOME_JSON).unwrap();
        let balance: Vec<BalanceSheet> = serde_json::from_str(BALANCE_JSON).unwrap();
        let estimates: Vec<AnalystEstimate> = serde_json::from_str(ESTIMATE_JSON).unwrap();

        let f = Fundamentals::from_statements(income.first(), balance.first(), estimates.first());

        assert_relative_eq!(f.eps.unwrap(), 365.94);
        // No share count on the balance sheet: falls back to weighted average shares.
        assert_relative_eq!(f.bps.unwrap(), 34_220_991_000_000.0 / 13_513_000_000.0);
        assert_relative_eq!(f.eps_forward.unwrap(), 410.5);
        assert_relative_eq!(
            f.roe.unwrap(),
            4_944_933_000_000.0 / 34_220_991_000_000.0 * 100.0
        );
        assert_relative_eq!(
            f.roa.unwrap(),
            4_944_933_000_000.0 / 90_114_296_000_000.0 * 100.0
        );
        assert_relative_eq!(
            f.equity_ratio.unwrap(),
            34_220_991_000_000.0 / 90_114_296_000_000.0 * 100.0
        );
        assert_eq!(f.per_forward, None);
    }

    #[test]
    fn test_fundamentals_missing_statements() {
        let f = Fundamentals::from_statements(None, None, None);
        assert!(f.is_empty());

        let income = IncomeStatement {
            net_income: Some(10.0),
            eps: Some(1.0),
            ..Default::default()
        };
        let f = Fundamentals::from_statements(Some(&income), None, None);
        assert_eq!(f.eps, Some(1.0));
        assert_eq!(f.roe, None);
        assert_eq!(f.bps, None);
    }

    #[test]
    fn test_negative_equity_skips_roe() {
        let income = IncomeStatement {
            net_income: Some(-5.0),
            ..Default::default()
        };
        let balance = BalanceSheet {
            total_assets: Some(100.0),
            total_stockholders_equity: Some(-20.0),
            ..Default::default()
        };
        let f = Fundamentals::from_statements(Some(&income), Some(&balance), None);
        assert_eq!(f.roe, None);
        assert_relative_eq!(f.roa.unwrap(), -5.0);
        assert_relative_eq!(f.equity_ratio.unwrap(), -20.0);
    }
}
