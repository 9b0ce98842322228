mod account;
mod transaction;

use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use account::{BankAccount, NestedBankAccount};
pub use transaction::{ExtendedTransaction, Transaction, TransactionCreate};

/// The three operations a user can ask the bank to perform.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    Deposit,
    Withdraw,
    Transfer
}

impl TransactionType {
    /// Whether money leaves a source account for this type.
    pub fn requires_source(&self) -> bool {
        matches!(self, TransactionType::Withdraw | TransactionType::Transfer)
    }

    /// Whether money lands in a target account for this type.
    pub fn requires_target(&self) -> bool {
        matches!(self, TransactionType::Deposit | TransactionType::Transfer)
    }
}

impl Display for TransactionType {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransactionType::Deposit => "DEPOSIT",
            TransactionType::Withdraw => "WITHDRAW",
            TransactionType::Transfer => "TRANSFER"
        };

        formatter.write_str(name)
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "deposit" => Ok(TransactionType::Deposit),
            "withdraw" | "withdrawal" => Ok(TransactionType::Withdraw),
            "transfer" => Ok(TransactionType::Transfer),
            other => Err(format!("Unknown transaction type '{other}'"))
        }
    }
}
