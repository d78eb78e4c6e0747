//! Equal-width histogram binning

use serde::Serialize;

/// Upper bound on requested bin counts
pub const MAX_BINS: usize = 200;

/// A single histogram bucket covering `[start, end)`; the last bucket is closed
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Bin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// Histogram over the finite values of a column
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct Histogram {
    pub bins: Vec<Bin>,
    /// Values left out because they were NaN or infinite
    pub skipped: usize,
}

impl Histogram {
    /// Bin `values` into `bins` equal-width buckets (Sturges rule when `None`)
    pub fn compute(values: &[f64], bins: Option<usize>) -> Self {
        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        let skipped = values.len() - finite.len();

        if finite.is_empty() {
            return Self {
                bins: Vec::new(),
                skipped,
            };
        }

        let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
        let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        if min == max {
            return Self {
                bins: vec![Bin {
                    start: min,
                    end: max,
                    count: finite.len(),
                }],
                skipped,
            };
        }

        let n = bins
            .unwrap_or_else(|| sturges(finite.len()))
            .clamp(1, MAX_BINS);
        let width = (max - min) / n as f64;

        let mut result: Vec<Bin> = (0..n)
            .map(|i| Bin {
                start: min + width * i as f64,
                end: if i + 1 == n {
                    max
                } else {
                    min + width * (i + 1) as f64
                },
                count: 0,
            })
            .collect();

        for value in finite {
            let idx = (((value - min) / width) as usize).min(n - 1);
            result[idx].count += 1;
        }

        Self {
            bins: result,
            skipped,
        }
    }

    /// Number of values counted across all bins
    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }

    /// Largest bin count, used to scale bar heights
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }
}

/// Sturges' rule: ceil(log2 n) + 1
fn sturges(n: usize) -> usize {
    if n <= 1 {
        return 1;
    }
    (n as f64).log2().ceil() as usize + 1
}
