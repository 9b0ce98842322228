mod cli;
mod client;
mod config;
mod dialog;
mod form;
mod listing;
mod models;
mod storage;
mod types;

use std::io::{stderr, stdout};
use std::process::exit;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tokio::{select, signal};
use tracing::{info, warn};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::cli::{Cli, Command, CreateArgs};
use crate::client::{BankBackend, HttpBankClient};
use crate::config::Settings;
use crate::dialog::{ConsoleModal, ConsoleNavigator};
use crate::form::{AfterDialog, DisposeHandle, SubmitOutcome, TransactionFormController};
use crate::listing::{enhanced_transactions, write_accounts_csv, write_transactions_csv};
use crate::storage::{InMemoryBank, Seed};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref())?;
    cli.apply_to(&mut settings);

    setup_logging(parse_log_level(&settings.log_level));

    let backend = connect(&cli, &settings)?;

    match &cli.command {
        Command::Accounts => {
            let accounts = backend.accounts.list_accounts().await?;
            write_accounts_csv(stdout().lock(), &accounts)?;
        },
        Command::Transactions => {
            let rows = enhanced_transactions(backend.transactions.as_ref(), backend.accounts.as_ref()).await?;
            write_transactions_csv(stdout().lock(), &rows)?;
        },
        Command::Create(args) => {
            let code = run_create(&backend, args).await?;
            exit(code);
        },
        Command::Shell => {
            //NOTE: exit rather than return, an interrupted prompt may still be blocked on stdin
            let code = run_shell(&backend).await?;
            exit(code);
        }
    }

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the CSV listings, so logs go to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn connect(cli: &Cli, settings: &Settings) -> Result<BankBackend> {
    if let Some(seed_path) = &cli.offline {
        info!("Serving from an in-memory bank seeded by {}", seed_path.display());
        let bank = InMemoryBank::from_seed(Seed::from_file(seed_path)?);
        return Ok(BankBackend::new(Arc::new(bank)));
    }

    let client = HttpBankClient::new(settings.api_url.clone(), settings.request_timeout())?;
    info!("Using bank API at {}", client.base_url());

    Ok(BankBackend::new(Arc::new(client)))
}

/// Exit code of a command interrupted with ctrl-c.
const INTERRUPTED: i32 = 130;

fn create_controller(backend: &BankBackend, interactive: bool, navigator: Arc<ConsoleNavigator>) -> TransactionFormController {
    TransactionFormController::new(
        backend.accounts.clone(),
        backend.creator.clone(),
        Arc::new(ConsoleModal::new(interactive)),
        navigator
    )
}

/// Disposes the form when the user presses ctrl-c.
fn dispose_on_interrupt(controller: &TransactionFormController) -> DisposeHandle {
    let handle = controller.dispose_handle();
    let disposer = handle.clone();

    tokio::spawn(async move {
        if signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, discarding the transaction form");
            disposer.dispose();
        }
    });

    handle
}

/// Exit code 0 when the transaction was saved, 1 when the bank failed it, 2 when the input was invalid.
async fn run_create(backend: &BankBackend, args: &CreateArgs) -> Result<i32> {
    let mut controller = create_controller(backend, false, Arc::new(ConsoleNavigator::new()));
    let _interrupt = dispose_on_interrupt(&controller);

    controller.load_accounts().await?;

    if let Err(error) = args.fill(&mut controller) {
        eprintln!("{error}");
        return Ok(2);
    }

    let code = match controller.submit().await {
        SubmitOutcome::Completed { success: true, .. } => 0,
        SubmitOutcome::Completed { success: false, .. } => 1,
        SubmitOutcome::Disposed => INTERRUPTED,
        SubmitOutcome::Invalid(errors) => {
            cli::report_errors(controller.state(), &errors);
            2
        }
    };

    Ok(code)
}

/// Runs the form until the user leaves it, stdin ends or ctrl-c is pressed.
async fn run_shell(backend: &BankBackend) -> Result<i32> {
    let navigator = Arc::new(ConsoleNavigator::new());
    let mut controller = create_controller(backend, true, navigator.clone());
    let interrupt = dispose_on_interrupt(&controller);

    controller.load_accounts().await?;

    for account in controller.bank_accounts() {
        eprintln!("[{}] {} (client {}, balance {})", account.id, account.nested().label(), account.client_id, account.current_value);
    }

    while navigator.departures() == 0 && !interrupt.is_disposed() {
        let filled = select! {
            biased;
            _ = interrupt.disposed() => break,
            filled = cli::fill_interactively(&mut controller) => filled?
        };

        if !filled {
            controller.cancel();
            break;
        }

        match controller.submit().await {
            SubmitOutcome::Invalid(errors) => cli::report_errors(controller.state(), &errors),
            SubmitOutcome::Completed { next: AfterDialog::CreateAnother, .. } => eprintln!("New transaction:"),
            SubmitOutcome::Completed { next: AfterDialog::NavigatedAway, .. } | SubmitOutcome::Disposed => {}
        }
    }

    let code = if interrupt.is_disposed() { INTERRUPTED } else { 0 };

    controller.dispose();

    Ok(code)
}
