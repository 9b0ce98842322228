use std::path::Path;
use std::process::{Command, Output, Stdio};

use anyhow::Result;

fn run_offline(arguments: &[&str]) -> Result<Output> {
    let binary_path = env!("CARGO_BIN_EXE_bank-transactions");
    let seed_path = Path::new("samples").join("bank.json");

    let output = Command::new(binary_path)
        .arg("--offline")
        .arg(seed_path)
        .args(arguments)
        .stdin(Stdio::null())
        .env_remove("BANK_API_URL")
        .env_remove("BANK_LOG_LEVEL")
        .env_remove("BANK_REQUEST_TIMEOUT_SECS")
        .output()?;

    Ok(output)
}

#[test]
fn test_cli_lists_seeded_accounts() -> Result<()> {
    let output = run_offline(&["accounts"])?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let mut lines = stdout.lines();

    assert_eq!(lines.next(), Some("id,client_id,bank_name,account_holder_name,sort_code,account_number,current_value"));

    for line in lines {
        let fields: Vec<&str> = line.split(',').collect();

        assert_eq!(fields.len(), 7);

        let _: u32 = fields[0].parse()?;
        let _: u32 = fields[1].parse()?;
        let _: f64 = fields[6].parse()?;
    }

    Ok(())
}

#[test]
fn test_cli_lists_transactions_with_resolved_accounts() -> Result<()> {
    let output = run_offline(&["transactions"])?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines[0], "id,transaction_type,amount,source,target,description");
    assert_eq!(lines[1], "1,DEPOSIT,10,,Bank A 111111 11111111 (Miss Jane A Smith),opening balance");
    assert_eq!(lines[2], "2,TRANSFER,4.5,Bank B 222222 22222222 (Miss Jane A Smith),Bank A 111111 11111111 (Miss Jane A Smith),");

    Ok(())
}

#[test]
fn test_cli_creates_full_balance_withdrawal() -> Result<()> {
    let output = run_offline(&["create", "--type", "withdraw", "--source", "1", "--full-amount"])?;

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8(output.stderr)?.contains("Transaction saved successfully."));

    Ok(())
}

#[test]
fn test_cli_rejects_transfer_to_same_account_before_sending() -> Result<()> {
    let output = run_offline(&["create", "--type", "transfer", "--source", "1", "--target", "1", "--amount", "1"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8(output.stderr)?.contains("transferAccountSame"));

    Ok(())
}

#[test]
fn test_cli_rejects_withdrawal_above_balance() -> Result<()> {
    let output = run_offline(&["create", "--type", "withdraw", "--source", "1", "--amount", "10.01"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8(output.stderr)?.contains("[max]"));

    Ok(())
}

#[test]
fn test_cli_reports_unknown_account() -> Result<()> {
    let output = run_offline(&["create", "--type", "deposit", "--target", "99", "--amount", "1"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8(output.stderr)?.contains("[99]"));

    Ok(())
}

#[test]
fn test_cli_shell_ends_cleanly_on_empty_input() -> Result<()> {
    let output = run_offline(&["shell"])?;

    assert!(output.status.success());

    Ok(())
}

#[test]
fn test_cli_counts_surrounding_spaces_of_description() -> Result<()> {
    let description = format!(" {} ", "a".repeat(20));
    let output = run_offline(&["create", "--type", "deposit", "--target", "1", "--amount", "1", "--description", &description])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8(output.stderr)?.contains("[maxlength]"));

    Ok(())
}
