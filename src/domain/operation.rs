use super::wallet::Amount;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// The two balance mutations a wallet supports.
///
/// Parses from and displays as the wire strings used by the gateway.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum OperationKind {
    Deposit,
    Withdraw,
}

impl FromStr for OperationKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DEPOSIT" => Ok(Self::Deposit),
            "WITHDRAW" => Ok(Self::Withdraw),
            _ => Err(()),
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deposit => f.write_str("DEPOSIT"),
            Self::Withdraw => f.write_str("WITHDRAW"),
        }
    }
}

/// A single requested balance mutation. Lives only for the duration of the
/// request; never persisted.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Operation {
    pub wallet_id: Uuid,
    pub kind: OperationKind,
    pub amount: Amount,
}
