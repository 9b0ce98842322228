mod errors;
mod http;

use std::sync::Arc;

use async_trait::async_trait;

use crate::models::{BankAccount, Transaction, TransactionCreate};

pub use errors::ClientError;
pub use http::HttpBankClient;

/// Source of the accounts offered in the source/target selectors.
#[async_trait]
pub trait AccountDirectory: Send + Sync {
    async fn list_accounts(&self) -> Result<Vec<BankAccount>, ClientError>;
}

#[async_trait]
pub trait TransactionDirectory: Send + Sync {
    async fn list_transactions(&self) -> Result<Vec<Transaction>, ClientError>;
}

/// Creates a transaction with a single request. Callers must not retry.
#[async_trait]
pub trait TransactionCreator: Send + Sync {
    async fn create(&self, request: TransactionCreate) -> Result<Transaction, ClientError>;
}

/// The collaborators of the application, all served by one backend.
#[derive(Clone)]
pub struct BankBackend {
    pub accounts: Arc<dyn AccountDirectory>,
    pub transactions: Arc<dyn TransactionDirectory>,
    pub creator: Arc<dyn TransactionCreator>
}

impl BankBackend {
    pub fn new<B>(backend: Arc<B>) -> Self
    where
        B: AccountDirectory + TransactionDirectory + TransactionCreator + 'static
    {
        Self {
            accounts: backend.clone(),
            transactions: backend.clone(),
            creator: backend
        }
    }
}
