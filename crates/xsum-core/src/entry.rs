use serde::{Deserialize, Serialize};

use crate::digits::DigitSet;

/// A cross sum: a set of distinct addends paired with their total.
///
/// Fields are private so `total == digits.sum()` holds for every value.
/// Ordering is by total, then by the addend set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CrossSum {
    total: u64,
    digits: DigitSet,
}

impl CrossSum {
    /// The empty cross sum `(0, {})`, the seed of the enumeration.
    pub const fn empty() -> Self {
        Self {
            total: 0,
            digits: DigitSet::empty(),
        }
    }

    /// Builds the cross sum of `digits`.
    pub fn from_digits(digits: DigitSet) -> Self {
        Self {
            total: digits.sum(),
            digits,
        }
    }

    /// Returns `(total + digit, digits ∪ {digit})`, or `None` when `digit`
    /// is already a member or cannot be stored.
    pub fn extend(&self, digit: u8) -> Option<Self> {
        if self.digits.contains(digit) {
            return None;
        }
        let digits = self.digits.try_with(digit).ok()?;
        Some(Self {
            total: self.total + u64::from(digit),
            digits,
        })
    }

    /// Sum of the addends.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// The addend set.
    pub fn digits(&self) -> DigitSet {
        self.digits
    }

    /// Number of addends.
    pub fn cardinality(&self) -> usize {
        self.digits.len()
    }
}

/// Display form of a [`CrossSum`] in a given alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedCrossSum {
    /// Total as a numeral in the alphabet's base.
    pub total: String,
    /// Addend characters in ascending digit order.
    pub addends: Vec<String>,
}

impl std::fmt::Display for RenderedCrossSum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.total, self.addends.join(" + "))
    }
}
