#[cfg(test)]
mod tests;

use std::collections::HashMap;
use std::io::Write;

use tokio::try_join;

use crate::client::{AccountDirectory, ClientError, TransactionDirectory};
use crate::models::{BankAccount, ExtendedTransaction, NestedBankAccount};
use crate::types::BankAccountId;

/// Fetches transactions and accounts together and resolves each transaction's
/// account ids for display. Ids that match no account stay unresolved.
pub async fn enhanced_transactions(
    transactions: &dyn TransactionDirectory,
    accounts: &dyn AccountDirectory
) -> Result<Vec<ExtendedTransaction>, ClientError> {
    let (transactions, accounts) = try_join!(transactions.list_transactions(), accounts.list_accounts())?;

    let nested: HashMap<_, _> = accounts.iter()
        .map(|account| (account.id, account.nested()))
        .collect();

    let resolve = |account_id: Option<BankAccountId>| account_id.and_then(|id| nested.get(&id).cloned());

    Ok(transactions.into_iter()
        .map(|transaction| ExtendedTransaction {
            source: resolve(transaction.source_bank_account_id),
            target: resolve(transaction.target_bank_account_id),
            transaction
        })
        .collect())
}

pub fn write_transactions_csv<W: Write>(writer: W, transactions: &[ExtendedTransaction]) -> anyhow::Result<()> {
    let mut output = csv::Writer::from_writer(writer);

    output.write_record(["id", "transaction_type", "amount", "source", "target", "description"])?;

    for row in transactions {
        output.write_record([
            row.transaction.id.to_string(),
            row.transaction.transaction_type.to_string(),
            row.transaction.amount.to_string(),
            label(row.source.as_ref()),
            label(row.target.as_ref()),
            row.transaction.description.clone().unwrap_or_default()
        ])?;
    }

    output.flush()?;

    Ok(())
}

pub fn write_accounts_csv<W: Write>(writer: W, accounts: &[BankAccount]) -> anyhow::Result<()> {
    let mut output = csv::Writer::from_writer(writer);

    output.write_record(["id", "client_id", "bank_name", "account_holder_name", "sort_code", "account_number", "current_value"])?;

    for account in accounts {
        output.write_record([
            account.id.to_string(),
            account.client_id.to_string(),
            account.bank_name.clone(),
            account.account_holder_name.clone(),
            account.sort_code.clone(),
            account.account_number.clone(),
            account.current_value.to_string()
        ])?;
    }

    output.flush()?;

    Ok(())
}

fn label(account: Option<&NestedBankAccount>) -> String {
    account.map(NestedBankAccount::label).unwrap_or_default()
}
