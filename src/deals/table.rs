//! Deal Table
//!
//! Immutable in-memory table of deals loaded from the model-output CSV.
//!
//! The descending-priority ordering is computed once at load time together
//! with its inverse permutation, so rank lookups are O(1).

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::cmp::Ordering;
use std::io::Read;
use std::path::Path;

use super::error::{DealError, DealResult};
use super::types::{ColumnMapping, Deal, DealId};

/// Metadata about where and when the table was loaded
#[derive(Debug, Clone, Serialize)]
pub struct TableInfo {
    pub source: String,
    pub rows: usize,
    pub loaded_at: DateTime<Utc>,
}

/// Read-only table of deals
#[derive(Debug)]
pub struct DealTable {
    deals: Vec<Deal>,
    /// Deal ids sorted by descending priority (ties by ascending id)
    priority_order: Vec<DealId>,
    /// `rank_of[id]` is the position of `id` within `priority_order`
    rank_of: Vec<usize>,
    info: TableInfo,
}

impl DealTable {
    /// Load a table from a CSV file with a header row
    pub fn load(path: impl AsRef<Path>, columns: &ColumnMapping) -> DealResult<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let table = Self::from_reader(file, columns, path.display().to_string())?;

        tracing::info!(
            source = %table.info.source,
            rows = table.len(),
            "Loaded deal table"
        );

        Ok(table)
    }

    /// Load a table from any CSV source
    pub fn from_reader<R: Read>(
        reader: R,
        columns: &ColumnMapping,
        source: impl Into<String>,
    ) -> DealResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let mut indices = [0usize; 3];
        for (slot, name) in indices.iter_mut().zip(columns.names()) {
            *slot = headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| DealError::MissingColumn(name.to_string()))?;
        }

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);

            let mut values = [0.0f64; 3];
            for ((value, &idx), name) in values.iter_mut().zip(&indices).zip(columns.names()) {
                let cell = record.get(idx).unwrap_or("");
                *value = parse_cell(cell).ok_or_else(|| DealError::InvalidValue {
                    line,
                    column: name.to_string(),
                    value: cell.to_string(),
                })?;
            }

            rows.push((values[0], values[1], values[2]));
        }

        Ok(Self::build(rows, source.into()))
    }

    /// Build a table from `(price, churn, priority)` rows, ids assigned by position
    pub fn from_rows(rows: impl IntoIterator<Item = (f64, f64, f64)>) -> Self {
        Self::build(rows.into_iter().collect(), "memory".to_string())
    }

    fn build(rows: Vec<(f64, f64, f64)>, source: String) -> Self {
        let deals: Vec<Deal> = rows
            .into_iter()
            .enumerate()
            .map(|(id, (price, churn, priority))| Deal::new(id, price, churn, priority))
            .collect();

        let mut priority_order: Vec<DealId> = (0..deals.len()).collect();
        priority_order.sort_by(|&a, &b| descending(deals[a].priority, deals[b].priority));

        let mut rank_of = vec![0; deals.len()];
        for (rank, &id) in priority_order.iter().enumerate() {
            rank_of[id] = rank;
        }

        let info = TableInfo {
            source,
            rows: deals.len(),
            loaded_at: Utc::now(),
        };

        Self {
            deals,
            priority_order,
            rank_of,
            info,
        }
    }

    pub fn len(&self) -> usize {
        self.deals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deals.is_empty()
    }

    pub fn info(&self) -> &TableInfo {
        &self.info
    }

    /// Get a deal by id
    pub fn get(&self, id: DealId) -> Option<&Deal> {
        self.deals.get(id)
    }

    /// Get a deal by an untrusted identifier (negative ids match nothing)
    pub fn find(&self, id: i64) -> Option<&Deal> {
        usize::try_from(id).ok().and_then(|id| self.get(id))
    }

    /// Position of a deal in the descending-priority ordering, 0-based
    pub fn rank_of(&self, id: DealId) -> Option<usize> {
        self.rank_of.get(id).copied()
    }

    /// All deals in processing order (highest priority first)
    pub fn by_priority(&self) -> impl Iterator<Item = &Deal> + '_ {
        self.priority_order.iter().map(move |&id| &self.deals[id])
    }

    /// A window of the processing order as `(rank, deal)` pairs
    pub fn page(&self, offset: usize, limit: usize) -> Vec<(usize, &Deal)> {
        self.by_priority()
            .enumerate()
            .skip(offset)
            .take(limit)
            .collect()
    }

    pub fn deals(&self) -> &[Deal] {
        &self.deals
    }

    pub fn prices(&self) -> Vec<f64> {
        self.deals.iter().map(|d| d.price).collect()
    }

    pub fn churns(&self) -> Vec<f64> {
        self.deals.iter().map(|d| d.churn).collect()
    }
}

/// Parse a numeric cell; an empty cell is a missing value (NaN)
fn parse_cell(cell: &str) -> Option<f64> {
    if cell.is_empty() {
        return Some(f64::NAN);
    }
    cell.parse::<f64>().ok()
}

/// Descending order with NaN sorted last
fn descending(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.total_cmp(&a),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = "__price_predict,__churn_prob,__priority,extra
12.5,0.10,3.0,a
8.25,0.55,7.5,b
20.0,0.02,3.0,c
5.0,0.90,-1.0,d";

    fn sample_table() -> DealTable {
        DealTable::from_reader(SAMPLE.as_bytes(), &ColumnMapping::default(), "sample").unwrap()
    }

    #[test]
    fn test_load_assigns_dense_ids() {
        let table = sample_table();
        assert_eq!(table.len(), 4);
        for (idx, deal) in table.deals().iter().enumerate() {
            assert_eq!(deal.id, idx);
        }
        assert_eq!(table.info().rows, 4);
        assert_eq!(table.info().source, "sample");
    }

    #[test]
    fn test_lookup_returns_stored_fields() {
        let table = sample_table();
        let deal = table.get(1).unwrap();
        assert_eq!(deal.price, 8.25);
        assert_eq!(deal.churn, 0.55);
        assert_eq!(deal.priority, 7.5);
    }

    #[test]
    fn test_find_out_of_range() {
        let table = sample_table();
        assert!(table.find(4).is_none());
        assert!(table.find(-1).is_none());
        assert!(table.find(0).is_some());
    }

    #[test]
    fn test_rank_is_descending_priority_with_stable_ties() {
        let table = sample_table();
        // priorities: [3.0, 7.5, 3.0, -1.0]
        assert_eq!(table.rank_of(1), Some(0));
        assert_eq!(table.rank_of(0), Some(1));
        assert_eq!(table.rank_of(2), Some(2));
        assert_eq!(table.rank_of(3), Some(3));
        assert_eq!(table.rank_of(4), None);

        let order: Vec<DealId> = table.by_priority().map(|d| d.id).collect();
        assert_eq!(order, vec![1, 0, 2, 3]);
    }

    #[test]
    fn test_rank_uses_row_not_id_as_index() {
        // If the id were used as an index into the sorted array, deal 0 would
        // get the rank of whatever sits at position 0.
        let table = DealTable::from_rows(vec![(1.0, 0.1, 1.0), (1.0, 0.1, 5.0), (1.0, 0.1, 3.0)]);
        assert_eq!(table.rank_of(0), Some(2));
        assert_eq!(table.rank_of(1), Some(0));
        assert_eq!(table.rank_of(2), Some(1));
    }

    #[test]
    fn test_nan_priority_sorts_last() {
        let table = DealTable::from_rows(vec![(1.0, 0.1, f64::NAN), (1.0, 0.1, -5.0)]);
        assert_eq!(table.rank_of(0), Some(1));
        assert_eq!(table.rank_of(1), Some(0));
    }

    #[test]
    fn test_page() {
        let table = sample_table();
        let page = table.page(1, 2);
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].0, 1);
        assert_eq!(page[0].1.id, 0);
        assert_eq!(page[1].1.id, 2);
        assert!(table.page(10, 5).is_empty());
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let csv = "__price_predict,__churn_prob\n1.0,0.5\n";
        let err = DealTable::from_reader(csv.as_bytes(), &ColumnMapping::default(), "t").unwrap_err();
        assert!(matches!(err, DealError::MissingColumn(ref c) if c == "__priority"));
    }

    #[test]
    fn test_invalid_value() {
        let csv = "__price_predict,__churn_prob,__priority\n1.0,oops,2\n";
        let err = DealTable::from_reader(csv.as_bytes(), &ColumnMapping::default(), "t").unwrap_err();
        match err {
            DealError::InvalidValue { line, column, value } => {
                assert_eq!(line, 2);
                assert_eq!(column, "__churn_prob");
                assert_eq!(value, "oops");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_cell_is_nan() {
        let csv = "__price_predict,__churn_prob,__priority\n,0.5,2\n";
        let table = DealTable::from_reader(csv.as_bytes(), &ColumnMapping::default(), "t").unwrap();
        assert!(table.get(0).unwrap().price.is_nan());
    }

    #[test]
    fn test_custom_columns() {
        let csv = "p,c,prio\n3.0,0.2,1.0\n";
        let columns = ColumnMapping {
            price: "p".to_string(),
            churn: "c".to_string(),
            priority: "prio".to_string(),
        };
        let table = DealTable::from_reader(csv.as_bytes(), &columns, "t").unwrap();
        assert_eq!(table.get(0).unwrap().price, 3.0);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let table = DealTable::load(file.path(), &ColumnMapping::default()).unwrap();
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_load_missing_file() {
        let err = DealTable::load("/nonexistent/deals.csv", &ColumnMapping::default()).unwrap_err();
        assert!(matches!(err, DealError::Io(_)));
    }
}
