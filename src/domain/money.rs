use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Absolute tolerance below which a balance or a transfer is treated as settled.
///
/// This is a fixed amount, never scaled to the magnitude of the values compared.
pub const EPSILON: Decimal = dec!(0.01);

/// A signed net position in a group.
///
/// Positive means the participant is owed money, negative means they owe.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Balance(pub Decimal);

impl Balance {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_creditor(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_debtor(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// True when the magnitude is strictly below [`EPSILON`].
    pub fn is_settled(&self) -> bool {
        self.0.abs() < EPSILON
    }
}

impl From<Decimal> for Balance {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl Add for Balance {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Balance {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Balance {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl AddAssign for Balance {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Balance {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl AddAssign<Decimal> for Balance {
    fn add_assign(&mut self, rhs: Decimal) {
        self.0 += rhs;
    }
}

impl SubAssign<Decimal> for Balance {
    fn sub_assign(&mut self, rhs: Decimal) {
        self.0 -= rhs;
    }
}
