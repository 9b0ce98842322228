use serde::{Deserialize, Serialize};

use crate::types::{Amount, BankAccountId, ClientId};

/// A bank account as served by the account directory.
///
/// The form never mutates these; they are snapshots used to populate the
/// source/target selectors and to bound withdrawal amounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankAccount {
    pub id: BankAccountId,
    /// The owner of the account. Transfers may only move money between accounts of one client.
    pub client_id: ClientId,
    pub bank_name: String,
    pub account_holder_name: String,
    pub sort_code: String,
    pub account_number: String,
    /// The current balance.
    pub current_value: Amount
}

impl BankAccount {
    /// Strips the account down to the fields shown in the transaction list.
    pub fn nested(&self) -> NestedBankAccount {
        NestedBankAccount {
            bank_name: self.bank_name.clone(),
            account_holder_name: self.account_holder_name.clone(),
            sort_code: self.sort_code.clone(),
            account_number: self.account_number.clone()
        }
    }
}

/// Display subset of a [`BankAccount`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NestedBankAccount {
    pub bank_name: String,
    pub account_holder_name: String,
    pub sort_code: String,
    pub account_number: String
}

impl NestedBankAccount {
    pub fn label(&self) -> String {
        format!("{} {} {} ({})", self.bank_name, self.sort_code, self.account_number, self.account_holder_name)
    }
}
