//! Order status model
//!
//! The status domain is the ordered sequence `Pending → Preparing →
//! Completed`. The canonical labels are part of the external contract and
//! are stored verbatim. Administrative updates are direct sets validated
//! for membership only; there is no forward-only edge set, so callers that
//! want step-at-a-time progress use [`OrderStatus::next`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Preparation lifecycle status
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    Completed,
}

impl OrderStatus {
    /// All statuses in lifecycle order
    pub const ALL: [OrderStatus; 3] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::Completed,
    ];

    /// Canonical label, exactly as stored
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::Completed => "Completed",
        }
    }

    /// Normalize an arbitrary input string
    ///
    /// Trims whitespace and matches case-insensitively against the three
    /// canonical labels. Anything else is rejected.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(trimmed))
    }

    /// Zero-based position in the lifecycle, for step progress rendering
    pub fn position(&self) -> usize {
        *self as usize
    }

    /// The following status, or `None` at the end of the lifecycle
    pub fn next(&self) -> Option<Self> {
        Self::ALL.get(self.position() + 1).copied()
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_labels() {
        assert_eq!(OrderStatus::parse("Pending"), Some(OrderStatus::Pending));
        assert_eq!(OrderStatus::parse("Preparing"), Some(OrderStatus::Preparing));
        assert_eq!(OrderStatus::parse("Completed"), Some(OrderStatus::Completed));
    }

    #[test]
    fn test_parse_is_case_and_whitespace_insensitive() {
        assert_eq!(OrderStatus::parse("preparing"), Some(OrderStatus::Preparing));
        assert_eq!(OrderStatus::parse("  COMPLETED "), Some(OrderStatus::Completed));
        assert_eq!(OrderStatus::parse("pEnDiNg"), Some(OrderStatus::Pending));
    }

    #[test]
    fn test_parse_rejects_unknown_values() {
        assert_eq!(OrderStatus::parse("bogus"), None);
        assert_eq!(OrderStatus::parse(""), None);
        assert_eq!(OrderStatus::parse("Pending Completed"), None);
        assert_eq!(OrderStatus::parse("Done"), None);
    }

    #[test]
    fn test_lifecycle_ordering() {
        assert!(OrderStatus::Pending < OrderStatus::Preparing);
        assert!(OrderStatus::Preparing < OrderStatus::Completed);
        assert_eq!(OrderStatus::Pending.position(), 0);
        assert_eq!(OrderStatus::Completed.position(), 2);
    }

    #[test]
    fn test_next_walks_the_sequence() {
        assert_eq!(OrderStatus::Pending.next(), Some(OrderStatus::Preparing));
        assert_eq!(OrderStatus::Preparing.next(), Some(OrderStatus::Completed));
        assert_eq!(OrderStatus::Completed.next(), None);
    }

    #[test]
    fn test_serialized_labels_are_canonical() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Preparing).unwrap(),
            r#""Preparing""#
        );
        let parsed: OrderStatus = serde_json::from_str(r#""Completed""#).unwrap();
        assert_eq!(parsed, OrderStatus::Completed);
    }

    #[test]
    fn test_default_is_pending() {
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
    }
}
