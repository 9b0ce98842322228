use thiserror::Error;

use crate::models::{TransactionCreate, TransactionType};
use crate::types::BankAccountId;

#[derive(Debug, Error)]
pub enum BankError {
    #[error("Bank account [{account_id}] was not found")]
    AccountNotFound {
        account_id: BankAccountId
    },
    #[error("A {side} account is required for [{transaction_type}]")]
    AccountRequired {
        side: &'static str,
        transaction_type: TransactionType
    },
    #[error("Amount must be positive for [{transaction_type}]")]
    NonPositiveAmount {
        transaction_type: TransactionType
    },
    #[error("Insufficient funds in account [{account_id}] for [{transaction_type}]")]
    InsufficientFunds {
        account_id: BankAccountId,
        transaction_type: TransactionType
    },
    #[error("Cannot transfer from account [{account_id}] to itself")]
    SameAccount {
        account_id: BankAccountId
    },
    #[error("Accounts [{source_account_id}] and [{target_account_id}] belong to different clients")]
    DifferentClients {
        source_account_id: BankAccountId,
        target_account_id: BankAccountId
    },
    #[error("Numeric overflow occurred for [{transaction_type}] on account [{account_id}]")]
    Overflow {
        account_id: BankAccountId,
        transaction_type: TransactionType
    }
}

impl BankError {
    pub fn account_not_found(account_id: BankAccountId) -> Self {
        Self::AccountNotFound { account_id }
    }

    pub fn source_required(request: &TransactionCreate) -> Self {
        Self::AccountRequired { side: "source", transaction_type: request.transaction_type }
    }

    pub fn target_required(request: &TransactionCreate) -> Self {
        Self::AccountRequired { side: "target", transaction_type: request.transaction_type }
    }

    pub fn non_positive_amount(request: &TransactionCreate) -> Self {
        Self::NonPositiveAmount { transaction_type: request.transaction_type }
    }

    pub fn insufficient_funds(request: &TransactionCreate, account_id: BankAccountId) -> Self {
        Self::InsufficientFunds { account_id, transaction_type: request.transaction_type }
    }

    pub fn overflow(request: &TransactionCreate, account_id: BankAccountId) -> Self {
        Self::Overflow { account_id, transaction_type: request.transaction_type }
    }
}
