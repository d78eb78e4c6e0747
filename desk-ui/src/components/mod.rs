//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod histogram;
pub mod loading;
pub mod nav;
pub mod result_block;
pub mod summary_card;
pub mod toast;

pub use histogram::HistogramChart;
pub use loading::{ChartSkeleton, InlineLoading};
pub use nav::Nav;
pub use result_block::ResultBlock;
pub use summary_card::SummaryCard;
pub use toast::Toast;
