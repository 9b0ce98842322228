mod bank_storage;
mod errors;

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::models::{BankAccount, Transaction};

pub use bank_storage::InMemoryBank;
pub use errors::BankError;

/// Initial content of an [`InMemoryBank`], read from a JSON file.
#[derive(Debug, Default, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub accounts: Vec<BankAccount>,
    #[serde(default)]
    pub transactions: Vec<Transaction>
}

impl Seed {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Error opening seed file at path: {}", path.display()))?;

        serde_json::from_str(&raw)
            .with_context(|| format!("Error parsing seed file at path: {}", path.display()))
    }
}
