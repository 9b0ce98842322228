use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::{debug, warn};

use crate::client::{AccountDirectory, ClientError, TransactionCreator, TransactionDirectory};
use crate::models::{BankAccount, Transaction, TransactionCreate, TransactionType};
use crate::storage::{BankError, Seed};
use crate::types::{Amount, BankAccountId, TransactionId};

/// A bank held entirely in memory.
///
/// Serves the same collaborators as the HTTP API and applies created
/// transactions to account balances, so the form can be driven offline.
pub struct InMemoryBank {
    accounts: DashMap<BankAccountId, BankAccount>,
    transactions: DashMap<TransactionId, Transaction>,
    next_transaction_id: AtomicU32,
    /// Serializes balance updates; a transfer touches two accounts.
    ledger: Mutex<()>
}

impl InMemoryBank {
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new(),
            transactions: DashMap::new(),
            next_transaction_id: AtomicU32::new(1),
            ledger: Mutex::new(())
        }
    }

    pub fn with_accounts(accounts: impl IntoIterator<Item = BankAccount>) -> Self {
        let bank = Self::new();

        for account in accounts {
            bank.accounts.insert(account.id, account);
        }

        bank
    }

    pub fn from_seed(seed: Seed) -> Self {
        let bank = Self::with_accounts(seed.accounts);

        for transaction in seed.transactions {
            let next = transaction.id.saturating_add(1);
            bank.next_transaction_id.fetch_max(next, Ordering::SeqCst);
            bank.transactions.insert(transaction.id, transaction);
        }

        bank
    }

    pub fn account(&self, account_id: BankAccountId) -> Option<BankAccount> {
        self.accounts.get(&account_id).map(|account| account.value().clone())
    }

    /// Validates `request` against current balances and records it.
    pub fn apply(&self, request: &TransactionCreate) -> Result<Transaction, BankError> {
        let _ledger = self.ledger.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        if request.amount <= Amount::ZERO {
            return Err(BankError::non_positive_amount(request));
        }

        match request.transaction_type {
            TransactionType::Deposit => {
                let target = self.target(request)?;
                self.credit(request, target)?;
            },
            TransactionType::Withdraw => {
                let source = self.source(request)?;
                self.debit(request, source)?;
            },
            TransactionType::Transfer => {
                let source = self.source(request)?;
                let target = self.target(request)?;

                if source.id == target.id {
                    return Err(BankError::SameAccount { account_id: source.id });
                }

                if source.client_id != target.client_id {
                    return Err(BankError::DifferentClients {
                        source_account_id: source.id,
                        target_account_id: target.id
                    });
                }

                let debited = self.debited(request, &source)?;
                let credited = self.credited(request, &target)?;
                self.accounts.insert(debited.id, debited);
                self.accounts.insert(credited.id, credited);
            }
        }

        let transaction = Transaction {
            id: self.next_transaction_id.fetch_add(1, Ordering::SeqCst),
            transaction_type: request.transaction_type,
            source_bank_account_id: request.source_bank_account_id,
            target_bank_account_id: request.target_bank_account_id,
            amount: request.amount,
            description: request.description.clone()
        };

        self.transactions.insert(transaction.id, transaction.clone());

        debug!("Transaction [{}]:[{}] recorded", transaction.id, transaction.transaction_type);

        Ok(transaction)
    }

    fn source(&self, request: &TransactionCreate) -> Result<BankAccount, BankError> {
        let account_id = request.source_bank_account_id
            .ok_or_else(|| BankError::source_required(request))?;

        self.account(account_id).ok_or_else(|| BankError::account_not_found(account_id))
    }

    fn target(&self, request: &TransactionCreate) -> Result<BankAccount, BankError> {
        let account_id = request.target_bank_account_id
            .ok_or_else(|| BankError::target_required(request))?;

        self.account(account_id).ok_or_else(|| BankError::account_not_found(account_id))
    }

    fn credit(&self, request: &TransactionCreate, account: BankAccount) -> Result<(), BankError> {
        let credited = self.credited(request, &account)?;
        self.accounts.insert(credited.id, credited);
        Ok(())
    }

    fn debit(&self, request: &TransactionCreate, account: BankAccount) -> Result<(), BankError> {
        let debited = self.debited(request, &account)?;
        self.accounts.insert(debited.id, debited);
        Ok(())
    }

    fn credited(&self, request: &TransactionCreate, account: &BankAccount) -> Result<BankAccount, BankError> {
        let current_value = account.current_value.checked_add(request.amount)
            .ok_or_else(|| BankError::overflow(request, account.id))?;

        Ok(BankAccount { current_value, ..account.clone() })
    }

    fn debited(&self, request: &TransactionCreate, account: &BankAccount) -> Result<BankAccount, BankError> {
        if account.current_value < request.amount {
            return Err(BankError::insufficient_funds(request, account.id));
        }

        let current_value = account.current_value.checked_sub(request.amount)
            .ok_or_else(|| BankError::overflow(request, account.id))?;

        Ok(BankAccount { current_value, ..account.clone() })
    }
}

impl Default for InMemoryBank {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountDirectory for InMemoryBank {
    async fn list_accounts(&self) -> Result<Vec<BankAccount>, ClientError> {
        let mut accounts: Vec<BankAccount> = self.accounts.iter()
            .map(|item| item.value().clone())
            .collect();

        accounts.sort_by_key(|account| account.id);

        Ok(accounts)
    }
}

#[async_trait]
impl TransactionDirectory for InMemoryBank {
    async fn list_transactions(&self) -> Result<Vec<Transaction>, ClientError> {
        let mut transactions: Vec<Transaction> = self.transactions.iter()
            .map(|item| item.value().clone())
            .collect();

        transactions.sort_by_key(|transaction| transaction.id);

        Ok(transactions)
    }
}

#[async_trait]
impl TransactionCreator for InMemoryBank {
    async fn create(&self, request: TransactionCreate) -> Result<Transaction, ClientError> {
        self.apply(&request).map_err(|error| {
            warn!("{error}");
            ClientError::from(error)
        })
    }
}
