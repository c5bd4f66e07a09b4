use tracing::debug;

use crate::alphabet::Alphabet;
use crate::config::IndexConfig;
use crate::digits::DigitSet;
use crate::entry::{CrossSum, RenderedCrossSum};
use crate::errors::{ErrorInfo, XsumError};
use crate::filter::Filter;

/// Catalog of cross sums over the non-zero digits of an alphabet.
///
/// The entries are kept sorted by `(total, digits)` and never change after
/// construction; every query returns a new, narrower index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubsetSumIndex {
    alphabet: Alphabet,
    entries: Vec<CrossSum>,
}

impl SubsetSumIndex {
    /// Enumerates every cross sum of at least two addends for `alphabet`,
    /// using the default [`IndexConfig`] limits.
    pub fn generate(alphabet: Alphabet) -> Result<Self, XsumError> {
        Self::generate_with(alphabet, IndexConfig::default().max_base)
    }

    /// Enumerates every cross sum of at least two addends for `alphabet`,
    /// refusing bases above `max_base`.
    pub fn generate_with(alphabet: Alphabet, max_base: usize) -> Result<Self, XsumError> {
        let base = alphabet.base();
        if base > max_base {
            return Err(XsumError::InvalidBase(
                ErrorInfo::new("base-too-large", "base exceeds the enumeration limit")
                    .with_context("base", base.to_string())
                    .with_context("max_base", max_base.to_string())
                    .with_hint("raise max_base in the index configuration"),
            ));
        }
        let entries = enumerate(alphabet.max_digit());
        debug!(base, entries = entries.len(), "enumerated cross sums");
        Ok(Self { alphabet, entries })
    }

    /// Wraps an existing catalog, or generates a fresh one when `catalog` is `None`.
    ///
    /// Supplied entries are re-sorted and exact duplicates collapse. Entries
    /// with fewer than two addends, a zero addend, or digits outside the
    /// alphabet are rejected.
    pub fn from_catalog(
        alphabet: Alphabet,
        catalog: Option<Vec<CrossSum>>,
    ) -> Result<Self, XsumError> {
        let Some(mut entries) = catalog else {
            return Self::generate(alphabet);
        };
        for entry in &entries {
            if entry.cardinality() < 2 {
                return Err(XsumError::InvalidEntry(
                    ErrorInfo::new("entry-cardinality", "entries need at least two addends")
                        .with_context("total", entry.total().to_string())
                        .with_context("cardinality", entry.cardinality().to_string()),
                ));
            }
            if entry.digits().contains(0) {
                return Err(XsumError::InvalidEntry(
                    ErrorInfo::new("entry-digit", "zero is never an addend")
                        .with_context("total", entry.total().to_string()),
                ));
            }
            if let Some(largest) = entry.digits().largest() {
                alphabet.check_digit(largest)?;
            }
            if entry.total() != entry.digits().sum() {
                return Err(XsumError::InvalidEntry(
                    ErrorInfo::new("entry-total", "total does not match its addends")
                        .with_context("total", entry.total().to_string())
                        .with_context("sum", entry.digits().sum().to_string()),
                ));
            }
        }
        entries.sort();
        entries.dedup();
        Ok(Self { alphabet, entries })
    }

    /// The alphabet the catalog was built for.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Numeral base of the catalog.
    pub fn base(&self) -> usize {
        self.alphabet.base()
    }

    /// Entries in canonical order.
    pub fn entries(&self) -> &[CrossSum] {
        &self.entries
    }

    /// Iterates the entries in canonical order.
    pub fn iter(&self) -> std::slice::Iter<'_, CrossSum> {
        self.entries.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entries matching every predicate of `filter`.
    pub fn filter(&self, filter: &Filter) -> Self {
        let entries: Vec<CrossSum> = self
            .entries
            .iter()
            .filter(|entry| filter.matches(entry))
            .copied()
            .collect();
        debug!(
            before = self.entries.len(),
            after = entries.len(),
            total = ?filter.total,
            cardinality = ?filter.cardinality,
            required = ?filter.required,
            "filtered cross sums"
        );
        Self {
            alphabet: self.alphabet.clone(),
            entries,
        }
    }

    /// Entries whose total equals `total`.
    pub fn with_total(&self, total: u64) -> Self {
        self.filter(&Filter::any().total(total))
    }

    /// Entries whose total equals the numeral `total` in this alphabet.
    pub fn with_total_numeral(&self, total: &str) -> Result<Self, XsumError> {
        let total = self.alphabet.parse_numeral(total)?;
        Ok(self.with_total(total))
    }

    /// Entries with exactly `count` addends.
    pub fn with_cardinality(&self, count: usize) -> Self {
        self.filter(&Filter::any().cardinality(count))
    }

    /// Entries containing every digit value in `digits`.
    pub fn with_digits<I>(&self, digits: I) -> Result<Self, XsumError>
    where
        I: IntoIterator<Item = u8>,
    {
        let required = digits
            .into_iter()
            .map(|digit| self.alphabet.check_digit(digit))
            .collect::<Result<DigitSet, _>>()?;
        Ok(self.filter(&Filter::any().requiring(required)))
    }

    /// Entries containing every digit named by the characters of `symbols`.
    pub fn with_digit_chars(&self, symbols: &str) -> Result<Self, XsumError> {
        let required = self.alphabet.parse_digits(symbols)?;
        Ok(self.filter(&Filter::any().requiring(required)))
    }

    /// Largest total in the catalog.
    pub fn max_total(&self) -> Result<u64, XsumError> {
        self.entries
            .last()
            .map(CrossSum::total)
            .ok_or_else(|| {
                XsumError::EmptyCatalog(
                    ErrorInfo::new("max-total", "catalog has no entries")
                        .with_context("base", self.base().to_string()),
                )
            })
    }

    /// Renders `entry` with this catalog's alphabet.
    pub fn render(&self, entry: &CrossSum) -> Result<RenderedCrossSum, XsumError> {
        let addends = entry
            .digits()
            .iter()
            .map(|digit| self.alphabet.symbol(digit).map(String::from))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(RenderedCrossSum {
            total: self.alphabet.format_numeral(entry.total()),
            addends,
        })
    }
}

impl<'a> IntoIterator for &'a SubsetSumIndex {
    type Item = &'a CrossSum;
    type IntoIter = std::slice::Iter<'a, CrossSum>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Power set of `1..=max_digit` by doubling, keeping sets of two or more.
fn enumerate(max_digit: u8) -> Vec<CrossSum> {
    let mut sums = vec![CrossSum::empty()];
    for digit in 1..=max_digit {
        let existing = sums.len();
        sums.reserve(existing);
        for idx in 0..existing {
            // digit is new to every set built so far
            if let Some(extended) = sums[idx].extend(digit) {
                sums.push(extended);
            }
        }
    }
    let mut kept: Vec<CrossSum> = sums
        .into_iter()
        .filter(|entry| entry.cardinality() >= 2)
        .collect();
    kept.sort();
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enumerate_base_three() {
        let entries = enumerate(2);
        assert_eq!(entries, vec![CrossSum::from_digits([1u8, 2].into_iter().collect())]);
    }

    #[test]
    fn enumerate_base_two_is_empty() {
        assert!(enumerate(1).is_empty());
    }

    #[test]
    fn enumerate_base_four_order() {
        let rendered: Vec<(u64, Vec<u8>)> = enumerate(3)
            .iter()
            .map(|e| (e.total(), e.digits().iter().collect()))
            .collect();
        assert_eq!(
            rendered,
            vec![
                (3, vec![1, 2]),
                (4, vec![1, 3]),
                (5, vec![2, 3]),
                (6, vec![1, 2, 3]),
            ]
        );
    }
}
