use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::client::{AccountDirectory, ClientError, TransactionCreator, TransactionDirectory};
use crate::models::{BankAccount, Transaction, TransactionCreate};

const BANK_ACCOUNTS_PATH: &str = "/api/bank_accounts";
const TRANSACTIONS_PATH: &str = "/api/transactions";

/// JSON-over-HTTP client for the bank API.
pub struct HttpBankClient {
    http: Client,
    base_url: String
}

impl HttpBankClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()?;

        Self::with_client(base_url, http)
    }

    /// Uses a preconfigured `reqwest` client, e.g. one with custom proxy rules.
    pub fn with_client(base_url: impl Into<String>, http: Client) -> Result<Self, ClientError> {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();

        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ClientError::InvalidUrl { url: base_url });
        }

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl AccountDirectory for HttpBankClient {
    async fn list_accounts(&self) -> Result<Vec<BankAccount>, ClientError> {
        let accounts: Vec<BankAccount> = self
            .http
            .get(self.endpoint(BANK_ACCOUNTS_PATH))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!("Fetched [{}] bank accounts", accounts.len());

        Ok(accounts)
    }
}

#[async_trait]
impl TransactionDirectory for HttpBankClient {
    async fn list_transactions(&self) -> Result<Vec<Transaction>, ClientError> {
        let transactions: Vec<Transaction> = self
            .http
            .get(self.endpoint(TRANSACTIONS_PATH))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!("Fetched [{}] transactions", transactions.len());

        Ok(transactions)
    }
}

#[async_trait]
impl TransactionCreator for HttpBankClient {
    async fn create(&self, request: TransactionCreate) -> Result<Transaction, ClientError> {
        let transaction = self
            .http
            .post(self.endpoint(TRANSACTIONS_PATH))
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(transaction)
    }
}
