//! Money amounts
//!
//! The store keeps every price as integer cents. Search thresholds arrive in
//! whole dollars and are converted with [`Cents::from_dollars`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// An amount of money in cents
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Cents(i64);

impl Cents {
    /// Cents in one dollar
    pub const PER_DOLLAR: i64 = 100;

    #[inline]
    pub const fn new(cents: i64) -> Self {
        Self(cents)
    }

    /// Convert a whole-dollar amount, saturating on overflow
    #[inline]
    pub const fn from_dollars(dollars: i64) -> Self {
        Self(dollars.saturating_mul(Self::PER_DOLLAR))
    }

    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}${}.{:02}", abs / 100, abs % 100)
    }
}

impl From<i64> for Cents {
    fn from(cents: i64) -> Self {
        Self(cents)
    }
}

impl From<Cents> for i64 {
    fn from(cents: Cents) -> Self {
        cents.0
    }
}
