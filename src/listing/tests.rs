use super::{enhanced_transactions, write_accounts_csv, write_transactions_csv};
use crate::models::{BankAccount, Transaction, TransactionType};
use crate::storage::{InMemoryBank, Seed};

use anyhow::Result;
use rust_decimal::dec;

fn create_seed() -> Seed {
    Seed {
        accounts: vec![
            BankAccount {
                id: 1,
                client_id: 1,
                bank_name: "Bank A".to_string(),
                account_holder_name: "Miss Jane A Smith".to_string(),
                sort_code: "111111".to_string(),
                account_number: "11111111".to_string(),
                current_value: dec!(10)
            },
            BankAccount {
                id: 2,
                client_id: 1,
                bank_name: "Bank B".to_string(),
                account_holder_name: "Miss Jane A Smith".to_string(),
                sort_code: "222222".to_string(),
                account_number: "22222222".to_string(),
                current_value: dec!(0)
            },
        ],
        transactions: vec![
            Transaction {
                id: 1,
                transaction_type: TransactionType::Transfer,
                source_bank_account_id: Some(1),
                target_bank_account_id: Some(2),
                amount: dec!(2.5),
                description: Some("savings".to_string())
            },
            Transaction {
                id: 2,
                transaction_type: TransactionType::Deposit,
                source_bank_account_id: None,
                target_bank_account_id: Some(99),
                amount: dec!(1),
                description: None
            },
        ]
    }
}

#[tokio::test]
async fn test_transactions_resolve_known_accounts() -> Result<()> {
    let bank = InMemoryBank::from_seed(create_seed());

    let rows = enhanced_transactions(&bank, &bank).await?;

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].source.as_ref().map(|account| account.bank_name.as_str()), Some("Bank A"));
    assert_eq!(rows[0].target.as_ref().map(|account| account.sort_code.as_str()), Some("222222"));
    assert_eq!(rows[1].source, None);
    assert_eq!(rows[1].target, None);

    Ok(())
}

#[tokio::test]
async fn test_transactions_render_as_csv() -> Result<()> {
    let bank = InMemoryBank::from_seed(create_seed());
    let rows = enhanced_transactions(&bank, &bank).await?;

    let mut output = Vec::new();
    write_transactions_csv(&mut output, &rows)?;
    let output = String::from_utf8(output)?;
    let mut lines = output.lines();

    assert_eq!(lines.next(), Some("id,transaction_type,amount,source,target,description"));
    assert_eq!(lines.next(), Some("1,TRANSFER,2.5,Bank A 111111 11111111 (Miss Jane A Smith),Bank B 222222 22222222 (Miss Jane A Smith),savings"));
    assert_eq!(lines.next(), Some("2,DEPOSIT,1,,,"));

    Ok(())
}

#[test]
fn test_accounts_render_as_csv() -> Result<()> {
    let seed = create_seed();

    let mut output = Vec::new();
    write_accounts_csv(&mut output, &seed.accounts)?;
    let output = String::from_utf8(output)?;

    assert_eq!(output.lines().count(), 3);
    assert!(output.starts_with("id,client_id,bank_name,account_holder_name,sort_code,account_number,current_value\n"));
    assert!(output.contains("1,1,Bank A,Miss Jane A Smith,111111,11111111,10\n"));

    Ok(())
}
