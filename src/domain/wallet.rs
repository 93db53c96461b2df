use crate::error::WalletError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use uuid::Uuid;

/// A wallet's monetary balance.
///
/// This is a wrapper around `rust_decimal::Decimal` to keep balance math
/// exact and type-safe. Binary floating point is never used for money.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Balance(pub Decimal);

/// A positive monetary amount carried by a single operation.
///
/// Construction fails for zero or negative values, so an operation with a
/// non-positive magnitude cannot exist past the boundary.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, WalletError> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(WalletError::NonPositiveAmount)
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = WalletError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl From<Amount> for Balance {
    fn from(amount: Amount) -> Self {
        Self(amount.0)
    }
}

impl Balance {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
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

/// A wallet: an identity plus a non-negative balance.
///
/// Wallets are provisioned externally, mutated only by the balance engine
/// under the wallet's exclusive lock, and never deleted.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Wallet {
    /// The unique identifier for the wallet.
    #[serde(rename = "walletId")]
    pub id: Uuid,
    /// Current balance. Invariant: never negative.
    pub balance: Balance,
}

impl Wallet {
    pub fn new(id: Uuid, balance: Balance) -> Self {
        Self { id, balance }
    }

    /// Adds funds to the balance.
    pub fn deposit(&mut self, amount: Amount) {
        self.balance += amount.into();
    }

    /// Removes funds from the balance if sufficient.
    pub fn withdraw(&mut self, amount: Amount) -> Result<(), WalletError> {
        if self.balance >= amount.into() {
            self.balance -= amount.into();
            Ok(())
        } else {
            Err(WalletError::InsufficientBalance)
        }
    }
}
