use thiserror::Error;

use crate::storage::BankError;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid API url [{url}]")]
    InvalidUrl {
        url: String
    },
    #[error("Request to the bank API failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Bank rejected the transaction: {0}")]
    Rejected(#[from] BankError)
}
