use serde::{Deserialize, Serialize};

use crate::alphabet::Alphabet;
use crate::digits::DigitSet;
use crate::entry::CrossSum;
use crate::errors::{ErrorInfo, XsumError};
use crate::index::SubsetSumIndex;
use crate::provenance::{SchemaVersion, CATALOG_SCHEMA};

/// Serializes the catalog to a compact binary representation using `bincode`.
pub fn catalog_to_bytes(index: &SubsetSumIndex) -> Result<Vec<u8>, XsumError> {
    let serializable = SerializableCatalog::from_index(index);
    bincode::serialize(&serializable)
        .map_err(|err| XsumError::Serde(ErrorInfo::new("serialize-bytes", err.to_string())))
}

/// Restores a catalog from its binary representation.
pub fn catalog_from_bytes(bytes: &[u8]) -> Result<SubsetSumIndex, XsumError> {
    let serializable: SerializableCatalog = bincode::deserialize(bytes)
        .map_err(|err| XsumError::Serde(ErrorInfo::new("deserialize-bytes", err.to_string())))?;
    serializable.into_index()
}

/// Serializes the catalog to a JSON string.
pub fn catalog_to_json(index: &SubsetSumIndex) -> Result<String, XsumError> {
    let serializable = SerializableCatalog::from_index(index);
    serde_json::to_string_pretty(&serializable)
        .map_err(|err| XsumError::Serde(ErrorInfo::new("serialize-json", err.to_string())))
}

/// Restores a catalog from a JSON string.
pub fn catalog_from_json(json: &str) -> Result<SubsetSumIndex, XsumError> {
    let serializable: SerializableCatalog = serde_json::from_str(json)
        .map_err(|err| XsumError::Serde(ErrorInfo::new("deserialize-json", err.to_string())))?;
    serializable.into_index()
}

#[derive(Debug, Serialize, Deserialize)]
struct SerializableCatalog {
    schema_version: SchemaVersion,
    alphabet: String,
    entries: Vec<SerializableEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SerializableEntry {
    total: u64,
    digits: Vec<u8>,
}

impl SerializableCatalog {
    fn from_index(index: &SubsetSumIndex) -> Self {
        Self {
            schema_version: CATALOG_SCHEMA,
            alphabet: index.alphabet().to_string(),
            entries: index
                .iter()
                .map(|entry| SerializableEntry {
                    total: entry.total(),
                    digits: entry.digits().iter().collect(),
                })
                .collect(),
        }
    }

    fn into_index(self) -> Result<SubsetSumIndex, XsumError> {
        if !CATALOG_SCHEMA.accepts(&self.schema_version) {
            return Err(XsumError::Serde(
                ErrorInfo::new("schema-version", "unsupported catalog schema")
                    .with_context(
                        "found",
                        format!(
                            "{}.{}.{}",
                            self.schema_version.major,
                            self.schema_version.minor,
                            self.schema_version.patch
                        ),
                    )
                    .with_context(
                        "supported",
                        format!("{}.{}.x", CATALOG_SCHEMA.major, CATALOG_SCHEMA.minor),
                    ),
            ));
        }
        let alphabet = Alphabet::new(&self.alphabet)?;
        let mut entries = Vec::with_capacity(self.entries.len());
        for raw in self.entries {
            let mut digits = DigitSet::empty();
            for digit in raw.digits {
                let digit = alphabet.check_digit(digit)?;
                if digit == 0 || digits.contains(digit) {
                    return Err(XsumError::InvalidEntry(
                        ErrorInfo::new("entry-digit", "addends must be distinct and non-zero")
                            .with_context("digit", digit.to_string()),
                    ));
                }
                digits = digits.with(digit);
            }
            let entry = CrossSum::from_digits(digits);
            if entry.total() != raw.total {
                return Err(XsumError::InvalidEntry(
                    ErrorInfo::new("entry-total", "stored total does not match its addends")
                        .with_context("stored", raw.total.to_string())
                        .with_context("computed", entry.total().to_string()),
                ));
            }
            entries.push(entry);
        }
        SubsetSumIndex::from_catalog(alphabet, Some(entries))
    }
}
