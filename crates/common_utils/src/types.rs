//! Common types shared across the portal crates.

use std::{
    fmt,
    ops::{Add, Sub},
};

use serde::{Deserialize, Serialize};

/// A monetary amount in the currency's minor denomination (cents).
///
/// All fee arithmetic in the portal happens on minor units; amounts never
/// leave integer space.
#[derive(
    Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MinorUnit(i64);

impl MinorUnit {
    /// Forms a new minor unit from an amount in cents.
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// A zero amount.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Gets the amount as an i64 value.
    pub const fn get_amount_as_i64(&self) -> i64 {
        self.0
    }

    /// Absolute difference between two amounts, in cents.
    pub const fn abs_diff(&self, other: Self) -> i64 {
        self.0.abs_diff(other.0) as i64
    }
}

impl Add for MinorUnit {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sub for MinorUnit {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl fmt::Display for MinorUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
