use std::collections::BTreeMap;

use thiserror::Error;

use crate::form::FormField;
use crate::types::{Amount, BankAccountId};

/// A field-level validation failure.
///
/// These never leave the client; they only block submission.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("A value is required")]
    Required,
    #[error("Amount [{actual}] is below the minimum of [{min}]")]
    Min {
        min: Amount,
        actual: Amount
    },
    #[error("Amount [{actual}] exceeds the available balance of [{max}]")]
    Max {
        max: Amount,
        actual: Amount
    },
    #[error("Text of length [{actual_length}] exceeds the maximum length of [{max_length}]")]
    MaxLength {
        max_length: usize,
        actual_length: usize
    },
    #[error("Transfers are only allowed between accounts of the same client")]
    TransferAccountNotSameClient,
    #[error("Transfers need two different accounts")]
    TransferAccountSame
}

impl ValidationError {
    /// Stable key of the error, as exposed to templates and callers.
    pub fn key(&self) -> &'static str {
        match self {
            ValidationError::Required => "required",
            ValidationError::Min { .. } => "min",
            ValidationError::Max { .. } => "max",
            ValidationError::MaxLength { .. } => "maxlength",
            ValidationError::TransferAccountNotSameClient => "transferAccountNotSameClient",
            ValidationError::TransferAccountSame => "transferAccountSame"
        }
    }
}

/// Errors raised by the form controller itself rather than by validation.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("Bank account [{account_id}] is not one of the loaded accounts")]
    UnknownAccount {
        account_id: BankAccountId
    },
    #[error("The transaction form has been disposed")]
    Disposed,
    #[error(transparent)]
    Client(#[from] crate::client::ClientError)
}

/// Validation errors of a whole form, grouped per field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors {
    fields: BTreeMap<FormField, Vec<ValidationError>>
}

impl FormErrors {
    pub fn insert(&mut self, field: FormField, error: ValidationError) {
        self.fields.entry(field).or_default().push(error);
    }

    /// Replaces every error of `field` with `error`.
    pub fn replace(&mut self, field: FormField, error: ValidationError) {
        self.fields.insert(field, vec![error]);
    }

    pub fn field(&self, field: FormField) -> &[ValidationError] {
        self.fields.get(&field).map(Vec::as_slice).unwrap_or_default()
    }

    #[cfg(test)]
    pub fn has_error(&self, field: FormField, key: &str) -> bool {
        self.field(field).iter().any(|error| error.key() == key)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.values().all(Vec::is_empty)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &ValidationError)> {
        self.fields.iter()
            .flat_map(|(field, errors)| errors.iter().map(move |error| (*field, error)))
    }
}
