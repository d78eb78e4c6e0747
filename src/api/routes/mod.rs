//! API Routes
//!
//! Route handlers organized by dashboard tab.

pub mod deals;
pub mod health;
pub mod overview;
pub mod simulate;
