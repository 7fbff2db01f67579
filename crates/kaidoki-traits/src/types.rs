//! Common types used throughout the kaidoki workspace.
//!
//! This module defines the symbol and date aliases and [`PriceHistory`], the
//! daily close series every indicator is computed from.

use crate::{KaidokiError, Result};
use polars::prelude::*;

// Re-export date type from chrono
pub use chrono::NaiveDate as Date;

/// A ticker symbol such as `"AAPL"` or `"7203.T"`.
pub type Symbol = String;

/// Days between 0001-01-01 (CE) and the Unix epoch, the offset Polars dates use.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Column names a price history must carry.
pub const REQUIRED_COLUMNS: [&str; 2] = ["date", "close"];

/// Daily closing prices for one symbol.
///
/// `PriceHistory` wraps a Polars DataFrame with a `date` column (Date) and a
/// `close` column (f64), sorted ascending by date. Rows with a null close are
/// removed on construction, so [`PriceHistory::closes`] and
/// [`PriceHistory::dates`] always line up.
///
/// # Example
///
/// ```no_run
/// use kaidoki_traits::{Date, PriceHistory};
///
/// let dates = [
///     Date::from_ymd_opt(2024, 1, 4).unwrap(),
///     Date::from_ymd_opt(2024, 1, 5).unwrap(),
/// ];
/// let history = PriceHistory::from_points(&dates, &[101.5, 102.0]).unwrap();
/// assert_eq!(history.last_close(), Some(102.0));
/// ```
#[derive(Debug, Clone)]
pub struct PriceHistory {
    /// The underlying DataFrame with `date` and `close` columns.
    data: DataFrame,
    /// Close values cached out of the frame.
    closes: Vec<f64>,
}

impl PriceHistory {
    /// Creates a price history from a DataFrame.
    ///
    /// # Errors
    ///
    /// Returns [`KaidokiError::MissingColumn`] when `date` or `close` is
    /// absent, or a Polars error when the columns have the wrong type.
    pub fn new(data: DataFrame) -> Result<Self> {
        for col in REQUIRED_COLUMNS {
            if data.column(col).is_err() {
                return Err(KaidokiError::MissingColumn(col.to_string()));
            }
        }

        let sorted = data.sort(["date"], SortMultipleOptions::default())?;
        let mask = sorted.column("close")?.as_materialized_series().is_not_null();
        let data = sorted.filter(&mask)?;

        let closes: Vec<f64> = data
            .column("close")?
            .as_materialized_series()
            .f64()?
            .into_iter()
            .flatten()
            .collect();

        Ok(Self { data, closes })
    }

    /// Creates a price history from parallel date and close slices.
    ///
    /// # Errors
    ///
    /// Returns [`KaidokiError::InvalidData`] if the slices differ in length.
    pub fn from_points(dates: &[Date], closes: &[f64]) -> Result<Self> {
        if dates.len() != closes.len() {
            return Err(KaidokiError::InvalidData(format!(
                "{} dates but {} closes",
                dates.len(),
                closes.len()
            )));
        }

        let df = df! {
            "date" => dates,
            "close" => closes,
        }?;

        Self::new(df)
    }

    /// Returns a reference to the underlying DataFrame.
    pub const fn data(&self) -> &DataFrame {
        &self.data
    }

    /// Consumes self and returns the underlying DataFrame.
    pub fn into_inner(self) -> DataFrame {
        self.data
    }

    /// Returns the number of sessions.
    pub fn len(&self) -> usize {
        self.closes.len()
    }

    /// Returns whether the history holds no sessions.
    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }

    /// Closing prices in date order.
    pub fn closes(&self) -> &[f64] {
        &self.closes
    }

    /// Session dates in ascending order.
    ///
    /// # Errors
    ///
    /// Returns [`KaidokiError::InvalidDate`] if a stored day number does not
    /// map onto a calendar date.
    pub fn dates(&self) -> Result<Vec<Date>> {
        self.data
            .column("date")?
            .as_materialized_series()
            .date()?
            .into_iter()
            .flatten()
            .map(|d: i32| {
                Date::from_num_days_from_ce_opt(d + UNIX_EPOCH_DAYS_FROM_CE)
                    .ok_or_else(|| KaidokiError::InvalidDate(format!("day number {d}")))
            })
            .collect()
    }

    /// The most recent close.
    pub fn last_close(&self) -> Option<f64> {
        self.closes.last().copied()
    }

    /// The close one session before the most recent one.
    pub fn previous_close(&self) -> Option<f64> {
        self.closes.len().checked_sub(2).map(|i| self.closes[i])
    }

    /// Highest close in the history.
    pub fn max_close(&self) -> Option<f64> {
        self.closes.iter().copied().reduce(f64::max)
    }

    /// Lowest close in the history.
    pub fn min_close(&self) -> Option<f64> {
        self.closes.iter().copied().reduce(f64::min)
    }
}

impl TryFrom<DataFrame> for PriceHistory {
    type Error = KaidokiError;

    fn try_from(data: DataFrame) -> Result<Self> {
        Self::new(data)
    }
}

impl AsRef<DataFrame> for PriceHistory {
    fn as_ref(&self) -> &DataFrame {
        &self.data
    }
}
