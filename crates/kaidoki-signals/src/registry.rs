//! Score registry for discovering and categorizing scoring components.
//!
//! This module provides metadata about every score kaidoki reports, used by
//! the `scores` command.

use derive_more::Display;
use kaidoki_traits::{KaidokiError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Score category classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreCategory {
    /// Entry timing from technical indicators
    #[display("timing")]
    Timing,
    /// Profitability and balance-sheet strength
    #[display("quality")]
    Quality,
    /// Price multiples and dividend yield
    #[display("valuation")]
    Valuation,
    /// Combined views across categories
    #[display("composite")]
    Composite,
}

impl ScoreCategory {
    /// Get a human-readable description of the category.
    #[must_use]
    pub const fn description(&self) -> &str {
        match self {
            Self::Timing => "Entry timing from Bollinger Bands, RSI, moving averages and 52-week range",
            Self::Quality => "Business quality from ROE, ROA and equity ratio",
            Self::Valuation => "Cheapness from PER, PBR and dividend yield",
            Self::Composite => "Mean of Q, V and T, optionally sector-corrected",
        }
    }
}

impl FromStr for ScoreCategory {
    type Err = KaidokiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "t" | "timing" => Ok(Self::Timing),
            "q" | "quality" => Ok(Self::Quality),
            "v" | "valuation" | "value" => Ok(Self::Valuation),
            "qvt" | "composite" => Ok(Self::Composite),
            other => Err(KaidokiError::InvalidData(format!(
                "unknown score category '{other}'"
            ))),
        }
    }
}

/// Metadata about a score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreInfo {
    /// Unique identifier for the score
    pub name: &'static str,

    /// Category classification
    pub category: ScoreCategory,

    /// Human-readable description
    pub description: &'static str,

    /// Sessions of price history needed, 0 for fundamentals-only scores
    pub typical_lookback: usize,

    /// Whether the score requires fundamental data
    pub requires_fundamentals: bool,
}

/// Get information about all available scores.
#[must_use]
pub fn available_scores() -> Vec<ScoreInfo> {
    vec![
        // Timing
        ScoreInfo {
            name: "timing_score",
            category: ScoreCategory::Timing,
            description: "T score: RSI, Bollinger position, 52-week position, MA structure and 25MA slope",
            typical_lookback: 79,
            requires_fundamentals: false,
        },
        ScoreInfo {
            name: "high_price_zone",
            category: ScoreCategory::Timing,
            description: "Checklist for distance from a price top (0-70)",
            typical_lookback: 50,
            requires_fundamentals: false,
        },
        ScoreInfo {
            name: "low_price_zone",
            category: ScoreCategory::Timing,
            description: "Checklist for a contrarian entry near the lows (0-85)",
            typical_lookback: 50,
            requires_fundamentals: false,
        },
        ScoreInfo {
            name: "dip_signal",
            category: ScoreCategory::Timing,
            description: "Pullback depth from the 25MA, 75MA, -1σ band and RSI",
            typical_lookback: 75,
            requires_fundamentals: false,
        },
        // Quality
        ScoreInfo {
            name: "tiered_quality",
            category: ScoreCategory::Quality,
            description: "Q score from ROE / ROA / equity ratio threshold tables (default)",
            typical_lookback: 0,
            requires_fundamentals: true,
        },
        ScoreInfo {
            name: "linear_quality",
            category: ScoreCategory::Quality,
            description: "Q score from ROE / ROA / equity ratio mapped linearly",
            typical_lookback: 0,
            requires_fundamentals: true,
        },
        ScoreInfo {
            name: "sector_correction",
            category: ScoreCategory::Quality,
            description: "Q shifted by ROE / ROA relative to sector reference values",
            typical_lookback: 0,
            requires_fundamentals: true,
        },
        // Valuation
        ScoreInfo {
            name: "tiered_valuation",
            category: ScoreCategory::Valuation,
            description: "V score from PER / PBR / dividend yield threshold tables (default)",
            typical_lookback: 0,
            requires_fundamentals: true,
        },
        ScoreInfo {
            name: "linear_valuation",
            category: ScoreCategory::Valuation,
            description: "V score from PER / PBR / dividend yield mapped linearly",
            typical_lookback: 0,
            requires_fundamentals: true,
        },
        // Composite
        ScoreInfo {
            name: "qvt",
            category: ScoreCategory::Composite,
            description: "Mean of Q, V and T with a verdict",
            typical_lookback: 79,
            requires_fundamentals: true,
        },
    ]
}

/// Get all scores in a specific category.
#[must_use]
pub fn scores_by_category(category: &ScoreCategory) -> Vec<ScoreInfo> {
    available_scores()
        .into_iter()
        .filter(|info| &info.category == category)
        .collect()
}

/// Get information about a specific score by name.
///
/// # Errors
///
/// Returns [`KaidokiError::ScoreNotFound`] when no score has that name.
pub fn get_score_info(name: &str) -> Result<ScoreInfo> {
    available_scores()
        .into_iter()
        .find(|info| info.name == name)
        .ok_or_else(|| KaidokiError::ScoreNotFound(name.to_string()))
}

/// Get all score categories, in report order.
#[must_use]
pub fn available_categories() -> Vec<ScoreCategory> {
    let mut categories: Vec<_> = Vec::new();
    for info in available_scores() {
        if !categories.contains(&info.category) {
            categories.push(info.category);
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_scores() {
        let scores = available_scores();
        assert!(!scores.is_empty());

        let categories: Vec<_> = scores.iter().map(|s| s.category).collect();
        assert!(categories.contains(&ScoreCategory::Timing));
        assert!(categories.contains(&ScoreCategory::Quality));
        assert!(categories.contains(&ScoreCategory::Valuation));
        assert!(categories.contains(&ScoreCategory::Composite));
    }

    #[test]
    fn test_scores_by_category() {
        assert_eq!(scores_by_category(&ScoreCategory::Timing).len(), 4);
        assert_eq!(scores_by_category(&ScoreCategory::Quality).len(), 3);
        assert_eq!(scores_by_category(&ScoreCategory::Valuation).len(), 2);
        assert_eq!(scores_by_category(&ScoreCategory::Composite).len(), 1);
    }

    #[test]
    fn test_get_score_info() {
        let info = get_score_info("timing_score").unwrap();
        assert_eq!(info.category, ScoreCategory::Timing);
        assert_eq!(info.typical_lookback, 79);
        assert!(!info.requires_fundamentals);

        let missing = get_score_info("nonexistent_score");
        assert!(matches!(missing, Err(KaidokiError::ScoreNotFound(_))));
    }

    #[test]
    fn test_available_categories_in_order() {
        assert_eq!(
            available_categories(),
            vec![
                ScoreCategory::Timing,
                ScoreCategory::Quality,
                ScoreCategory::Valuation,
                ScoreCategory::Composite
            ]
        );
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("t".parse::<ScoreCategory>().unwrap(), ScoreCategory::Timing);
        assert_eq!("Quality".parse::<ScoreCategory>().unwrap(), ScoreCategory::Quality);
        assert_eq!("qvt".parse::<ScoreCategory>().unwrap(), ScoreCategory::Composite);
        assert!("momentum".parse::<ScoreCategory>().is_err());
    }

    #[test]
    fn test_category_descriptions() {
        for category in available_categories() {
            assert!(!category.description().is_empty());
        }
    }
}
