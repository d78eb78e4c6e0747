//! Pages
//!
//! One page component per dashboard tab.

pub mod deal_details;
pub mod overview;
pub mod simulator;

pub use deal_details::DealDetailsPage;
pub use overview::OverviewPage;
pub use simulator::SimulatorPage;

use std::cell::Cell;
use std::rc::Rc;

/// Parse a numeric input; blank or unparsable text counts as missing
pub fn parse_number<T: std::str::FromStr>(text: &str) -> Option<T> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.parse().ok()
}

/// Format a value that may be missing from the table
pub fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.4}", v),
        None => "-".to_string(),
    }
}

/// Tags the requests one view fires so only the newest reply is rendered
#[derive(Clone, Default)]
pub struct LatestRequest(Rc<Cell<u64>>);

impl LatestRequest {
    /// Start a request and return its tag
    pub fn begin(&self) -> u64 {
        let tag = self.0.get() + 1;
        self.0.set(tag);
        tag
    }

    /// Whether no newer request started since `tag`
    pub fn is_current(&self, tag: u64) -> bool {
        self.0.get() == tag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number::<i64>(" 12 "), Some(12));
        assert_eq!(parse_number::<i64>(""), None);
        assert_eq!(parse_number::<f64>("1.5"), Some(1.5));
        assert_eq!(parse_number::<f64>("abc"), None);
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(Some(8.25)), "8.2500");
        assert_eq!(format_value(None), "-");
    }

    #[test]
    fn test_only_newest_request_is_current() {
        let latest = LatestRequest::default();
        let first = latest.begin();
        let handle = latest.clone();
        let second = handle.begin();

        assert!(!latest.is_current(first));
        assert!(latest.is_current(second));
    }
}
