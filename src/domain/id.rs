//! Domain identifier types with proper encapsulation.

use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};

/// Patent identifier - the canonical patent number used as cache and query key.
///
/// The inner String is private to ensure all construction goes through
/// [`PatentId::parse`], which trims surrounding whitespace and rejects
/// empty input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PatentId(String);

impl PatentId {
    /// Parse a user-supplied patent number.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the input is empty after trimming.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidInput("patent number must not be empty".into()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the patent number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PatentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for PatentId {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
