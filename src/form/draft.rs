use tracing::debug;

use crate::models::{BankAccount, TransactionCreate, TransactionType};
use crate::types::Amount;

/// The in-progress, not yet submitted transaction.
///
/// A draft only ever changes through [`FormState::reduce`](super::FormState::reduce);
/// every change of transaction type replaces it with a fresh one.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub transaction_type: TransactionType,
    pub source_account: Option<BankAccount>,
    pub target_account: Option<BankAccount>,
    /// Withdraw the whole balance of the source account.
    pub full_amount: bool,
    pub amount: Option<Amount>,
    pub description: Option<String>
}

impl TransactionDraft {
    /// Creates an empty draft for the given transaction type.
    pub fn new(transaction_type: TransactionType) -> Self {
        Self {
            transaction_type,
            source_account: None,
            target_account: None,
            full_amount: false,
            amount: None,
            description: None
        }
    }

    /// Builds the creation payload.
    ///
    /// With the full-amount flag the amount is the source account balance,
    /// otherwise the entered amount. Returns `None` when no amount can be derived.
    ///
    /// Account ids are taken from the draft even when the transaction type does
    /// not use that account.
    pub fn to_request(&self) -> Option<TransactionCreate> {
        let amount = if self.full_amount {
            self.source_account.as_ref()?.current_value
        } else {
            self.amount?
        };

        if self.source_account.is_some() && !self.transaction_type.requires_source() {
            debug!("Sending source account of a [{}] transaction", self.transaction_type);
        }

        if self.target_account.is_some() && !self.transaction_type.requires_target() {
            debug!("Sending target account of a [{}] transaction", self.transaction_type);
        }

        Some(TransactionCreate {
            transaction_type: self.transaction_type,
            source_bank_account_id: self.source_account.as_ref().map(|account| account.id),
            target_bank_account_id: self.target_account.as_ref().map(|account| account.id),
            amount,
            description: self.description.clone()
        })
    }
}

impl Default for TransactionDraft {
    fn default() -> Self {
        Self::new(TransactionType::Deposit)
    }
}
