use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, XsumError};

/// Largest digit value a [`DigitSet`] can hold.
pub const MAX_DIGIT: u8 = 63;

/// Immutable set of digit values stored as a 64-bit mask.
///
/// Bit `d` is set when digit `d` is a member. Ordering is lexicographic over
/// the ascending member list, so `{1, 2, 9}` sorts before `{1, 3}`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DigitSet(u64);

impl DigitSet {
    /// The set with no members.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// The set containing only `digit`.
    pub fn singleton(digit: u8) -> Self {
        Self::empty().with(digit)
    }

    /// Creates a set from its raw mask.
    pub const fn from_mask(mask: u64) -> Self {
        Self(mask)
    }

    /// Returns the raw mask.
    pub const fn mask(&self) -> u64 {
        self.0
    }

    /// Returns a copy of the set with `digit` added.
    ///
    /// Digits above [`MAX_DIGIT`] cannot be stored and leave the set unchanged;
    /// use [`DigitSet::try_with`] to have them reported.
    pub fn with(self, digit: u8) -> Self {
        self.try_with(digit).unwrap_or(self)
    }

    /// Returns a copy of the set with `digit` added, failing for digits above
    /// [`MAX_DIGIT`].
    pub fn try_with(self, digit: u8) -> Result<Self, XsumError> {
        if digit > MAX_DIGIT {
            return Err(XsumError::UnknownDigit(
                ErrorInfo::new("digit-unrepresentable", "digit does not fit in a digit set")
                    .with_context("digit", digit.to_string())
                    .with_context("max", MAX_DIGIT.to_string()),
            ));
        }
        Ok(Self(self.0 | (1u64 << digit)))
    }

    /// Collects `digits`, failing on the first digit above [`MAX_DIGIT`].
    pub fn try_from_digits<I>(digits: I) -> Result<Self, XsumError>
    where
        I: IntoIterator<Item = u8>,
    {
        digits
            .into_iter()
            .try_fold(Self::empty(), |set, digit| set.try_with(digit))
    }

    /// Whether `digit` is a member.
    pub fn contains(&self, digit: u8) -> bool {
        digit <= MAX_DIGIT && self.0 & (1u64 << digit) != 0
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether the set has no members.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Whether every member of `other` is also a member of `self`.
    pub fn is_superset(&self, other: &DigitSet) -> bool {
        self.0 & other.0 == other.0
    }

    /// Sum of the member values.
    pub fn sum(&self) -> u64 {
        self.iter().map(u64::from).sum()
    }

    /// Largest member, if any.
    pub fn largest(&self) -> Option<u8> {
        if self.is_empty() {
            None
        } else {
            Some((63 - self.0.leading_zeros()) as u8)
        }
    }

    /// Iterates the members in ascending order.
    pub fn iter(&self) -> DigitIter {
        DigitIter(self.0)
    }
}

impl Ord for DigitSet {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl PartialOrd for DigitSet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Digits above [`MAX_DIGIT`] are skipped, as with [`DigitSet::with`].
impl FromIterator<u8> for DigitSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), DigitSet::with)
    }
}

impl IntoIterator for DigitSet {
    type Item = u8;
    type IntoIter = DigitIter;

    fn into_iter(self) -> DigitIter {
        self.iter()
    }
}

/// Ascending iterator over the members of a [`DigitSet`].
#[derive(Debug, Clone)]
pub struct DigitIter(u64);

impl Iterator for DigitIter {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.0 == 0 {
            return None;
        }
        let digit = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Some(digit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.0.count_ones() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DigitIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn members_iterate_ascending() {
        let set: DigitSet = [9u8, 2, 5, 2].into_iter().collect();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![2, 5, 9]);
        assert_eq!(set.len(), 3);
        assert_eq!(set.sum(), 16);
        assert_eq!(set.largest(), Some(9));
        assert_eq!(DigitSet::empty().largest(), None);
    }

    #[test]
    fn ordering_is_lexicographic_over_members() {
        let a: DigitSet = [1u8, 2, 9].into_iter().collect();
        let b: DigitSet = [1u8, 3].into_iter().collect();
        let c: DigitSet = [1u8].into_iter().collect();
        assert!(a < b);
        assert!(c < a);
        // mask order would put {1,3} (0b1010) before {1,2,9}
        assert!(a.mask() > b.mask());
    }

    #[test]
    fn superset_checks() {
        let set: DigitSet = [2u8, 3, 7].into_iter().collect();
        assert!(set.is_superset(&[2u8, 3].into_iter().collect()));
        assert!(set.is_superset(&DigitSet::empty()));
        assert!(!set.is_superset(&DigitSet::singleton(4)));
        assert!(!set.contains(64));
    }

    #[test]
    fn oversized_digits_never_alias_other_members() {
        let set: DigitSet = [3u8, 70].into_iter().collect();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![3]);
        assert_eq!(DigitSet::singleton(64), DigitSet::empty());
        assert_eq!(DigitSet::singleton(MAX_DIGIT).largest(), Some(MAX_DIGIT));

        let err = DigitSet::singleton(3).try_with(70).unwrap_err();
        assert_eq!(err.code(), "digit-unrepresentable");
        assert!(DigitSet::try_from_digits([3u8, 70]).is_err());
        assert_eq!(
            DigitSet::try_from_digits([3u8, 63]).unwrap().iter().collect::<Vec<_>>(),
            vec![3, 63]
        );
    }
}
