//! Typed identifier for main types.
//!
//! Identifiers are numeric and assigned by the data source, so unlike
//! generated ids there is no `new()`; values come from parsing or `From<i32>`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Unique identifier for a [`MainType`](crate::main_type::MainType).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MainTypeId(i32);

impl MainTypeId {
    /// Access the inner integer.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self.0
    }
}

impl From<i32> for MainTypeId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for MainTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for MainTypeId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i32>()
            .map(Self)
            .map_err(|_| ValidationError::InvalidId(s.to_string()))
    }
}
