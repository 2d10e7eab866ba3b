//! Typed wrapper for post identifiers.
//!
//! The corpus keys posts by a stable numeric identifier. Wrapping the
//! raw integer keeps post IDs from being confused with page numbers
//! or offsets at call sites.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a post in the corpus.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct PostId(pub i64);

impl PostId {
    /// Returns the raw numeric identifier.
    #[inline]
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for PostId {
    fn from(raw: i64) -> Self {
        PostId(raw)
    }
}

impl FromStr for PostId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PostId(s.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_as_bare_number() {
        assert_eq!(PostId(42).to_string(), "42");
    }

    #[test]
    fn parses_from_string() {
        assert_eq!("7".parse::<PostId>().unwrap(), PostId(7));
        assert!("seven".parse::<PostId>().is_err());
    }

    #[test]
    fn serializes_transparently() {
        let json = serde_json::to_string(&PostId(42)).unwrap();
        assert_eq!(json, "42");
    }
}
