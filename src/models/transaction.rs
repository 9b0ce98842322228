use serde::{Deserialize, Serialize};

use crate::models::{NestedBankAccount, TransactionType};
use crate::types::{Amount, BankAccountId, TransactionId};

/// A transaction as stored by the bank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub transaction_type: TransactionType,
    #[serde(default)]
    pub source_bank_account_id: Option<BankAccountId>,
    #[serde(default)]
    pub target_bank_account_id: Option<BankAccountId>,
    pub amount: Amount,
    #[serde(default)]
    pub description: Option<String>
}

/// The payload posted to create a transaction.
///
/// Account ids are serialized as `null` rather than omitted when a side of the
/// transaction does not apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionCreate {
    pub transaction_type: TransactionType,
    pub source_bank_account_id: Option<BankAccountId>,
    pub target_bank_account_id: Option<BankAccountId>,
    pub amount: Amount,
    pub description: Option<String>
}

/// A [`Transaction`] with its account ids resolved for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtendedTransaction {
    #[serde(flatten)]
    pub transaction: Transaction,
    pub source: Option<NestedBankAccount>,
    pub target: Option<NestedBankAccount>
}
