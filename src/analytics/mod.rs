//! Overview Analytics
//!
//! Distribution statistics over the whole deal table:
//!
//! - **histogram**: equal-width binning
//! - **summary**: count / mean / min / max / median
//!
//! `Overview` bundles both for the price and churn columns; it is what the
//! overview tab renders.

pub mod histogram;
pub mod summary;

pub use histogram::{Bin, Histogram, MAX_BINS};
pub use summary::Summary;

use serde::Serialize;

use crate::deals::DealTable;

/// Bar colour shared by the overview charts
pub const CHART_COLOR: &str = "#de5571";

/// One column's distribution, ready for charting
#[derive(Debug, Clone, Serialize)]
pub struct Distribution {
    pub title: String,
    pub column: String,
    pub color: String,
    pub summary: Summary,
    pub histogram: Histogram,
}

impl Distribution {
    pub fn compute(
        title: impl Into<String>,
        column: impl Into<String>,
        values: &[f64],
        bins: Option<usize>,
    ) -> Self {
        Self {
            title: title.into(),
            column: column.into(),
            color: CHART_COLOR.to_string(),
            summary: Summary::compute(values),
            histogram: Histogram::compute(values, bins),
        }
    }
}

/// The overview view model
#[derive(Debug, Clone, Serialize)]
pub struct Overview {
    pub rows: usize,
    pub price: Distribution,
    pub churn: Distribution,
}

impl Overview {
    /// Compute price and churn distributions over the full table
    pub fn compute(table: &DealTable, bins: Option<usize>) -> Self {
        Self {
            rows: table.len(),
            price: Distribution::compute(
                "Property price distribution",
                "price",
                &table.prices(),
                bins,
            ),
            churn: Distribution::compute(
                "Mortgage churn probability distribution",
                "churn",
                &table.churns(),
                bins,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_counts_every_row() {
        let table = DealTable::from_rows(vec![
            (10.0, 0.1, 1.0),
            (12.0, 0.4, 2.0),
            (30.0, 0.9, 3.0),
        ]);
        let overview = Overview::compute(&table, Some(4));

        assert_eq!(overview.rows, 3);
        assert_eq!(overview.price.histogram.total(), 3);
        assert_eq!(overview.churn.histogram.total(), 3);
        assert_eq!(overview.price.histogram.bins.len(), 4);
        assert_eq!(overview.price.color, CHART_COLOR);
        assert_eq!(overview.churn.summary.max, Some(0.9));
    }

    #[test]
    fn test_overview_empty_table() {
        let table = DealTable::from_rows(Vec::new());
        let overview = Overview::compute(&table, None);
        assert_eq!(overview.rows, 0);
        assert!(overview.price.histogram.bins.is_empty());
        assert_eq!(overview.price.summary.count, 0);
    }
}
