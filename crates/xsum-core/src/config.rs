//! Serde-configurable catalog settings and query plans.

use serde::{Deserialize, Serialize};

use crate::alphabet::{Alphabet, DECIMAL};
use crate::errors::{ErrorInfo, XsumError};
use crate::filter::Filter;
use crate::index::SubsetSumIndex;

/// Settings governing catalog enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Digit characters of the numeral base, zero first.
    #[serde(default = "default_alphabet")]
    pub alphabet: String,
    /// Largest base for which full enumeration is attempted.
    #[serde(default = "default_max_base")]
    pub max_base: usize,
}

fn default_alphabet() -> String {
    DECIMAL.to_string()
}

fn default_max_base() -> usize {
    20
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            alphabet: default_alphabet(),
            max_base: default_max_base(),
        }
    }
}

impl IndexConfig {
    /// Validates and returns the configured alphabet.
    pub fn alphabet(&self) -> Result<Alphabet, XsumError> {
        Alphabet::new(&self.alphabet)
    }

    /// Builds the full catalog described by this configuration.
    pub fn build(&self) -> Result<SubsetSumIndex, XsumError> {
        SubsetSumIndex::generate_with(self.alphabet()?, self.max_base)
    }
}

/// One filtered view of a catalog, written in the catalog's own alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuerySpec {
    /// Heading printed above the view.
    #[serde(default)]
    pub label: String,
    /// Total as a numeral in the catalog's base.
    #[serde(default)]
    pub total: Option<String>,
    /// Exact number of addends.
    #[serde(default)]
    pub cardinality: Option<usize>,
    /// Characters of the digits every match must contain.
    #[serde(default)]
    pub digits: Option<String>,
}

impl QuerySpec {
    /// Resolves the textual query against `alphabet`.
    pub fn to_filter(&self, alphabet: &Alphabet) -> Result<Filter, XsumError> {
        let mut filter = Filter::any();
        if let Some(total) = &self.total {
            filter = filter.total(alphabet.parse_numeral(total)?);
        }
        if let Some(count) = self.cardinality {
            filter = filter.cardinality(count);
        }
        if let Some(digits) = &self.digits {
            filter = filter.requiring(alphabet.parse_digits(digits)?);
        }
        Ok(filter)
    }
}

/// A catalog configuration plus the views to print from it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QueryPlan {
    /// Catalog settings.
    #[serde(default)]
    pub index: IndexConfig,
    /// Views evaluated against the catalog, in order.
    #[serde(default)]
    pub queries: Vec<QuerySpec>,
}

impl QueryPlan {
    /// The built-in dozenal walkthrough.
    pub fn dozenal_demo() -> Self {
        Self {
            index: IndexConfig {
                alphabet: "0123456789XE".into(),
                ..IndexConfig::default()
            },
            queries: vec![
                QuerySpec {
                    label: "Sums totalling 15".into(),
                    total: Some("15".into()),
                    ..QuerySpec::default()
                },
                QuerySpec {
                    label: "Sums containing digits 3-X inclusive".into(),
                    digits: Some("3456789X".into()),
                    ..QuerySpec::default()
                },
                QuerySpec {
                    label: "Sums containing ten addends".into(),
                    cardinality: Some(10),
                    ..QuerySpec::default()
                },
                QuerySpec {
                    label: "Sums totalling 1X with five addends including 2 and 3".into(),
                    total: Some("1X".into()),
                    cardinality: Some(5),
                    digits: Some("23".into()),
                },
            ],
        }
    }

    /// Builds the catalog and evaluates every query, in order.
    pub fn evaluate(&self) -> Result<Vec<(String, SubsetSumIndex)>, XsumError> {
        if self.queries.is_empty() {
            return Err(XsumError::Config(
                ErrorInfo::new("empty-plan", "query plan lists no queries")
                    .with_hint("add at least one entry under `queries`"),
            ));
        }
        let index = self.index.build()?;
        self.queries
            .iter()
            .map(|query| {
                let filter = query.to_filter(index.alphabet())?;
                Ok((query.label.clone(), index.filter(&filter)))
            })
            .collect()
    }
}
