#![deny(missing_docs)]

//! Cross-sum catalogs: every set of two or more distinct non-zero digits of a
//! numeral base, paired with its total, plus composable queries over them.
//!
//! ```
//! use xsum_core::{Alphabet, SubsetSumIndex};
//!
//! let alphabet = Alphabet::new("0123456789XE").unwrap();
//! let index = SubsetSumIndex::generate(alphabet).unwrap();
//! assert_eq!(index.len(), 2036);
//!
//! let view = index
//!     .with_digit_chars("23")
//!     .unwrap()
//!     .with_cardinality(5)
//!     .with_total_numeral("19")
//!     .unwrap();
//! assert!(view.iter().all(|entry| entry.total() == 21));
//! ```

pub mod alphabet;
pub mod config;
mod digits;
mod entry;
pub mod errors;
mod filter;
mod hash;
mod index;
pub mod provenance;
mod serialization;

pub use alphabet::Alphabet;
pub use config::{IndexConfig, QueryPlan, QuerySpec};
pub use digits::{DigitIter, DigitSet, MAX_DIGIT};
pub use entry::{CrossSum, RenderedCrossSum};
pub use errors::{ErrorInfo, XsumError};
pub use filter::Filter;
pub use hash::canonical_hash;
pub use index::SubsetSumIndex;
pub use provenance::SchemaVersion;
pub use serialization::{catalog_from_bytes, catalog_from_json, catalog_to_bytes, catalog_to_json};
