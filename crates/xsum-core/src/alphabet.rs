//! Numeral alphabets: digit characters, parsing and formatting of totals.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::digits::{DigitSet, MAX_DIGIT};
use crate::errors::{ErrorInfo, XsumError};

/// Characters used by [`Alphabet::with_base`], in digit order.
pub const STANDARD_SYMBOLS: &str =
    "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz+/";

/// Alphabet used when the caller does not supply one.
pub const DECIMAL: &str = "0123456789";

/// Upper bound on the base an alphabet may describe.
pub const MAX_BASE: usize = MAX_DIGIT as usize + 1;

/// Ordered set of distinct digit characters. Its length is the numeral base.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Builds an alphabet from its characters, validating length and uniqueness.
    pub fn new(symbols: &str) -> Result<Self, XsumError> {
        let chars: Vec<char> = symbols.chars().collect();
        if chars.len() < 2 {
            return Err(XsumError::InvalidBase(
                ErrorInfo::new("alphabet-too-short", "alphabet needs at least two characters")
                    .with_context("alphabet", symbols)
                    .with_context("base", chars.len().to_string()),
            ));
        }
        if chars.len() > MAX_BASE {
            return Err(XsumError::InvalidBase(
                ErrorInfo::new("alphabet-too-long", "alphabet exceeds the supported base")
                    .with_context("base", chars.len().to_string())
                    .with_context("max", MAX_BASE.to_string()),
            ));
        }
        let mut seen = BTreeSet::new();
        for ch in &chars {
            if !seen.insert(*ch) {
                return Err(XsumError::InvalidBase(
                    ErrorInfo::new("duplicate-symbol", "alphabet repeats a character")
                        .with_context("alphabet", symbols)
                        .with_context("symbol", ch.to_string()),
                ));
            }
        }
        Ok(Self { symbols: chars })
    }

    /// Builds the alphabet made of the first `base` [`STANDARD_SYMBOLS`].
    pub fn with_base(base: usize) -> Result<Self, XsumError> {
        if !(2..=MAX_BASE).contains(&base) {
            return Err(XsumError::InvalidBase(
                ErrorInfo::new("base-out-of-range", "base must lie between 2 and 64")
                    .with_context("base", base.to_string()),
            ));
        }
        Ok(Self {
            symbols: STANDARD_SYMBOLS.chars().take(base).collect(),
        })
    }

    /// Numeral base (number of characters).
    pub fn base(&self) -> usize {
        self.symbols.len()
    }

    /// Largest digit value that may appear as an addend.
    pub fn max_digit(&self) -> u8 {
        (self.symbols.len() - 1) as u8
    }

    /// Character representing zero.
    pub fn zero(&self) -> char {
        self.symbols[0]
    }

    /// Positional value of `symbol`.
    pub fn value_of(&self, symbol: char) -> Result<u8, XsumError> {
        self.symbols
            .iter()
            .position(|ch| *ch == symbol)
            .map(|idx| idx as u8)
            .ok_or_else(|| {
                XsumError::UnknownDigit(
                    ErrorInfo::new("unknown-symbol", "character is not part of the alphabet")
                        .with_context("symbol", symbol.to_string())
                        .with_context("alphabet", self.to_string()),
                )
            })
    }

    /// Character for digit value `digit`.
    pub fn symbol(&self, digit: u8) -> Result<char, XsumError> {
        self.symbols
            .get(usize::from(digit))
            .copied()
            .ok_or_else(|| self.out_of_range(digit))
    }

    /// Checks that `digit` is a value of this alphabet.
    pub fn check_digit(&self, digit: u8) -> Result<u8, XsumError> {
        if usize::from(digit) < self.base() {
            Ok(digit)
        } else {
            Err(self.out_of_range(digit))
        }
    }

    /// Parses a numeral, most significant character first.
    pub fn parse_numeral(&self, numeral: &str) -> Result<u64, XsumError> {
        if numeral.is_empty() {
            return Err(XsumError::UnknownDigit(ErrorInfo::new(
                "empty-numeral",
                "numeral has no characters",
            )));
        }
        let base = self.base() as u64;
        let mut total: u64 = 0;
        for ch in numeral.chars() {
            let value = u64::from(self.value_of(ch)?);
            total = total
                .checked_mul(base)
                .and_then(|t| t.checked_add(value))
                .ok_or_else(|| {
                    XsumError::UnknownDigit(
                        ErrorInfo::new("numeral-overflow", "numeral does not fit in 64 bits")
                            .with_context("numeral", numeral),
                    )
                })?;
        }
        Ok(total)
    }

    /// Renders `value` as a numeral, most significant character first.
    pub fn format_numeral(&self, mut value: u64) -> String {
        if value == 0 {
            return self.zero().to_string();
        }
        let base = self.base() as u64;
        let mut reversed = Vec::new();
        while value > 0 {
            reversed.push(self.symbols[(value % base) as usize]);
            value /= base;
        }
        reversed.into_iter().rev().collect()
    }

    /// Maps each character to its value. Repeated characters are ignored.
    pub fn parse_digits(&self, symbols: &str) -> Result<DigitSet, XsumError> {
        symbols.chars().map(|ch| self.value_of(ch)).collect()
    }

    fn out_of_range(&self, digit: u8) -> XsumError {
        XsumError::UnknownDigit(
            ErrorInfo::new("digit-out-of-range", "digit value exceeds the base")
                .with_context("digit", digit.to_string())
                .with_context("base", self.base().to_string()),
        )
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            symbols: DECIMAL.chars().collect(),
        }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in &self.symbols {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

impl TryFrom<String> for Alphabet {
    type Error = XsumError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Alphabet::new(&value)
    }
}

impl From<Alphabet> for String {
    fn from(value: Alphabet) -> Self {
        value.to_string()
    }
}
