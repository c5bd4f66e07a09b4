//! Structured error types for catalog construction and queries.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`XsumError`] variant.
///
/// `code` is a kebab-case identifier such as `base-too-large` or
/// `unknown-symbol`; tests and the CLI match on it rather than on `message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Offending inputs keyed by name, e.g. `base`, `symbol`, `total`.
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Suggested remedy, such as raising `max_base`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the cross-sum engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum XsumError {
    /// The numeral base or alphabet cannot support a catalog.
    #[error("invalid base: {0}")]
    InvalidBase(ErrorInfo),
    /// A character or digit value lies outside the configured alphabet.
    #[error("unknown digit: {0}")]
    UnknownDigit(ErrorInfo),
    /// An accessor required at least one entry but the catalog had none.
    #[error("empty catalog: {0}")]
    EmptyCatalog(ErrorInfo),
    /// A supplied entry violates the catalog invariants.
    #[error("invalid entry: {0}")]
    InvalidEntry(ErrorInfo),
    /// Configuration and query plan errors.
    #[error("config error: {0}")]
    Config(ErrorInfo),
    /// Serialization and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        let mut context = self.context.iter();
        if let Some((key, value)) = context.next() {
            write!(f, " ({key}={value}")?;
            for (key, value) in context {
                write!(f, ", {key}={value}")?;
            }
            write!(f, ")")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, "; try: {hint}")?;
        }
        Ok(())
    }
}

impl XsumError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            XsumError::InvalidBase(info)
            | XsumError::UnknownDigit(info)
            | XsumError::EmptyCatalog(info)
            | XsumError::InvalidEntry(info)
            | XsumError::Config(info)
            | XsumError::Serde(info) => info,
        }
    }

    /// Returns the stable code of the underlying payload.
    pub fn code(&self) -> &str {
        &self.info().code
    }

    /// Short name of the error family, matching the serialized `family` tag.
    pub fn family(&self) -> &'static str {
        match self {
            XsumError::InvalidBase(_) => "InvalidBase",
            XsumError::UnknownDigit(_) => "UnknownDigit",
            XsumError::EmptyCatalog(_) => "EmptyCatalog",
            XsumError::InvalidEntry(_) => "InvalidEntry",
            XsumError::Config(_) => "Config",
            XsumError::Serde(_) => "Serde",
        }
    }

    /// Whether the error came from the caller's query input rather than from
    /// the catalog or its configuration.
    pub fn is_query_error(&self) -> bool {
        matches!(self, XsumError::UnknownDigit(_) | XsumError::EmptyCatalog(_))
    }
}
