//! Strongly-typed identifiers used across the domain.
//!
//! Warehouse/location/variant ids are short string codes from the reference
//! dataset (e.g. `wh-1`), not UUIDs; the newtypes keep them from being mixed
//! up at call sites.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a warehouse (e.g. `wh-1`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WarehouseId(String);

/// Identifier of a product variant (e.g. `var-1`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantId(String);

/// Identifier of a storage location within a warehouse (e.g. `loc-1`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(String);

macro_rules! impl_code_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Wrap a raw code verbatim. Use `FromStr` when the input comes
            /// from an untrusted source and needs trimming/validation.
            pub fn new(code: impl Into<String>) -> Self {
                Self(code.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let code = s.trim();
                if code.is_empty() {
                    return Err(DomainError::invalid_id(concat!($name, ": empty code")));
                }
                Ok(Self(code.to_string()))
            }
        }
    };
}

impl_code_newtype!(WarehouseId, "WarehouseId");
impl_code_newtype!(VariantId, "VariantId");
impl_code_newtype!(LocationId, "LocationId");

/// Ledger entry identifier: 1-based, strictly increasing within a session.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LedgerId(u64);

impl LedgerId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> u64 {
        self.0
    }

    /// The id that follows this one in the sequence.
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl core::fmt::Display for LedgerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
