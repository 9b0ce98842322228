use std::io::{stderr, stdin, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tokio::task::spawn_blocking;

use crate::config::Settings;
use crate::form::{FormError, FormErrors, FormField, FormState, TransactionFormController};
use crate::models::TransactionType;
use crate::types::{Amount, BankAccountId};

#[derive(Debug, Parser)]
#[command(name = "bank-transactions", about = "View bank transactions and create deposits, withdrawals and transfers")]
pub struct Cli {
    /// Settings file (defaults to ./bank.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Base url of the bank API
    #[arg(long, global = true)]
    pub api_url: Option<String>,
    /// Seconds to wait for the bank API
    #[arg(long, global = true)]
    pub request_timeout_secs: Option<u64>,
    /// error, warn, info, debug or trace
    #[arg(long, global = true)]
    pub log_level: Option<String>,
    /// Serve everything from an in-memory bank seeded from this JSON file
    #[arg(long, global = true, value_name = "SEED_JSON")]
    pub offline: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List bank accounts as CSV
    Accounts,
    /// List transactions with resolved accounts as CSV
    Transactions,
    /// Create one transaction from flags
    Create(CreateArgs),
    /// Create transactions interactively
    Shell
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    /// deposit, withdraw or transfer
    #[arg(long = "type")]
    pub transaction_type: TransactionType,
    #[arg(long)]
    pub source: Option<BankAccountId>,
    #[arg(long)]
    pub target: Option<BankAccountId>,
    #[arg(long)]
    pub amount: Option<Amount>,
    /// Withdraw the whole balance of the source account
    #[arg(long)]
    pub full_amount: bool,
    #[arg(long)]
    pub description: Option<String>
}

impl Cli {
    /// Flags win over every other settings layer.
    pub fn apply_to(&self, settings: &mut Settings) {
        if let Some(api_url) = &self.api_url {
            settings.api_url = api_url.clone();
        }

        if let Some(request_timeout_secs) = self.request_timeout_secs {
            settings.request_timeout_secs = request_timeout_secs;
        }

        if let Some(log_level) = &self.log_level {
            settings.log_level = log_level.clone();
        }
    }
}

impl CreateArgs {
    pub fn fill(&self, controller: &mut TransactionFormController) -> Result<(), FormError> {
        controller.set_transaction_type(self.transaction_type);
        controller.select_source(self.source)?;
        controller.select_target(self.target)?;
        controller.set_amount(self.amount);
        controller.set_full_amount(self.full_amount);
        controller.set_description(self.description.as_deref().unwrap_or_default());

        Ok(())
    }
}

/// Prints the errors of every field the form currently shows errors for.
pub fn report_errors(state: &FormState, errors: &FormErrors) {
    for (field, error) in errors.iter().filter(|(field, _)| state.shows_error(*field)) {
        eprintln!("{}: {error} [{}]", field.name(), error.key());
    }
}

/// Asks for every visible field of the form. Returns `false` once stdin is exhausted.
pub async fn fill_interactively(controller: &mut TransactionFormController) -> Result<bool> {
    let Some(answer) = prompt("Transaction type (deposit, withdraw, transfer)").await? else {
        return Ok(false);
    };

    let transaction_type = match TransactionType::from_str(answer.trim()) {
        Ok(transaction_type) => transaction_type,
        Err(error) => {
            eprintln!("{error}");
            return Ok(true);
        }
    };

    controller.set_transaction_type(transaction_type);

    if controller.state().visibility().show_source_account {
        let Some(answer) = prompt("Source account id").await? else { return Ok(false) };
        if let Err(error) = controller.select_source(parse_optional(&answer)) {
            eprintln!("{error}");
        }
        controller.touch(FormField::SourceAccount);
    }

    if controller.state().visibility().show_target_account {
        let Some(answer) = prompt("Target account id").await? else { return Ok(false) };
        if let Err(error) = controller.select_target(parse_optional(&answer)) {
            eprintln!("{error}");
        }
        controller.touch(FormField::TargetAccount);
    }

    if controller.state().visibility().show_full_amount {
        let Some(answer) = prompt("Withdraw the full balance? (y/N)").await? else { return Ok(false) };
        controller.set_full_amount(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"));
        controller.touch(FormField::FullAmount);
    }

    if controller.state().visibility().show_amount {
        let label = match controller.state().max_amount() {
            Some(max) => format!("Amount (at most {max})"),
            None => "Amount".to_string()
        };
        let Some(answer) = prompt(&label).await? else { return Ok(false) };
        controller.set_amount(parse_optional(&answer));
        controller.touch(FormField::Amount);
    }

    let Some(answer) = prompt("Description (optional)").await? else { return Ok(false) };
    controller.set_description(&answer);
    controller.touch(FormField::Description);

    Ok(true)
}

fn parse_optional<T: FromStr>(answer: &str) -> Option<T> {
    answer.trim().parse().ok()
}

async fn prompt(label: &str) -> Result<Option<String>> {
    let label = label.to_string();

    let line = spawn_blocking(move || -> std::io::Result<Option<String>> {
        eprint!("{label}: ");
        stderr().flush()?;

        let mut line = String::new();
        if stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }).await??;

    Ok(line)
}
