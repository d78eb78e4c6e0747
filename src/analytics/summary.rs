//! Summary statistics for a numeric column

use serde::{Deserialize, Serialize};

/// Count, mean, min, max and median of the finite values of a column
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Summary {
    pub count: usize,
    pub mean: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub median: Option<f64>,
}

impl Summary {
    pub fn compute(values: &[f64]) -> Self {
        let mut finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if finite.is_empty() {
            return Self::default();
        }

        finite.sort_by(f64::total_cmp);
        let count = finite.len();
        let mean = finite.iter().sum::<f64>() / count as f64;
        let median = if count % 2 == 1 {
            finite[count / 2]
        } else {
            (finite[count / 2 - 1] + finite[count / 2]) / 2.0
        };

        Self {
            count,
            mean: Some(mean),
            min: finite.first().copied(),
            max: finite.last().copied(),
            median: Some(median),
        }
    }
}
