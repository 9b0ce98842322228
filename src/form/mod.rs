mod controller;
mod draft;
mod errors;
mod lifetime;
mod state;
mod validators;
mod visibility;

use rust_decimal::Decimal;

pub use controller::{AfterDialog, SubmitOutcome, TransactionFormController};
pub use draft::TransactionDraft;
pub use errors::{FormError, FormErrors, ValidationError};
pub use lifetime::{DisposeHandle, Lifetime};
pub use state::{FormEvent, FormState};
pub use visibility::FormVisibility;

/// Smallest amount the form accepts.
pub const MIN_AMOUNT: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

pub const MAX_DESCRIPTION_LENGTH: usize = 20;

/// The inputs of the transaction form.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum FormField {
    TransactionType,
    SourceAccount,
    TargetAccount,
    FullAmount,
    Amount,
    Description
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::TransactionType,
        FormField::SourceAccount,
        FormField::TargetAccount,
        FormField::FullAmount,
        FormField::Amount,
        FormField::Description
    ];

    /// The field name used on the wire and in messages.
    pub fn name(&self) -> &'static str {
        match self {
            FormField::TransactionType => "transaction_type",
            FormField::SourceAccount => "source_bank_account",
            FormField::TargetAccount => "target_bank_account",
            FormField::FullAmount => "full_amount",
            FormField::Amount => "amount",
            FormField::Description => "description"
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}
