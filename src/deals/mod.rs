//! Deal Table
//!
//! This module owns the single dataset the dashboard serves:
//!
//! - **types**: `Deal` row and the column mapping used to read it
//! - **table**: `DealTable`, the immutable in-memory table with its
//!   precomputed priority ordering
//! - **error**: Error types
//!
//! # Lifecycle
//!
//! ```text
//! CSV file → DealTable::load (once, at startup) → Arc<DealTable> → read-only queries
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use mortgage_desk::deals::{ColumnMapping, DealTable};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let table = DealTable::load("deals.csv", &ColumnMapping::default())?;
//!
//!     if let Some(deal) = table.get(0) {
//!         println!("deal 0: price={:.4} rank={:?}", deal.price, table.rank_of(0));
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod table;
pub mod types;

pub use error::{DealError, DealResult};
pub use table::{DealTable, TableInfo};
pub use types::{nullable_f64, ColumnMapping, Deal, DealId};
