use serde::{Deserialize, Serialize};

use crate::digits::DigitSet;
use crate::entry::CrossSum;

/// Conjunction of optional predicates over cross sums.
///
/// `None` means the predicate was not requested; `Some(0)` is a real query
/// for a zero total or zero addends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Filter {
    /// Exact total to match.
    #[serde(default)]
    pub total: Option<u64>,
    /// Exact number of addends to match.
    #[serde(default)]
    pub cardinality: Option<usize>,
    /// Digits every match must contain.
    #[serde(default)]
    pub required: Option<DigitSet>,
}

impl Filter {
    /// A filter that accepts every entry.
    pub fn any() -> Self {
        Self::default()
    }

    /// Restricts matches to the given total.
    pub fn total(mut self, total: u64) -> Self {
        self.total = Some(total);
        self
    }

    /// Restricts matches to the given number of addends.
    pub fn cardinality(mut self, count: usize) -> Self {
        self.cardinality = Some(count);
        self
    }

    /// Restricts matches to supersets of `digits`.
    pub fn requiring(mut self, digits: DigitSet) -> Self {
        self.required = Some(digits);
        self
    }

    /// Whether no predicate is set.
    pub fn is_unrestricted(&self) -> bool {
        self.total.is_none() && self.cardinality.is_none() && self.required.is_none()
    }

    /// Whether `entry` satisfies every requested predicate.
    pub fn matches(&self, entry: &CrossSum) -> bool {
        self.total.map_or(true, |total| entry.total() == total)
            && self
                .cardinality
                .map_or(true, |count| entry.cardinality() == count)
            && self
                .required
                .map_or(true, |digits| entry.digits().is_superset(&digits))
    }
}
