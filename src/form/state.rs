use tracing::debug;

use crate::form::validators;
use crate::form::{FormErrors, FormField, FormVisibility, TransactionDraft};
use crate::models::{BankAccount, TransactionType};
use crate::types::Amount;

/// Interaction flags of a single input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct FieldStatus {
    pub enabled: bool,
    /// The user has visited the input.
    pub touched: bool,
    /// The user has changed the value.
    pub dirty: bool
}

impl Default for FieldStatus {
    fn default() -> Self {
        Self {
            enabled: true,
            touched: false,
            dirty: false
        }
    }
}

/// Everything that can happen to the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    TransactionTypeChanged(TransactionType),
    SourceAccountChanged(Option<BankAccount>),
    TargetAccountChanged(Option<BankAccount>),
    FullAmountChanged(bool),
    AmountChanged(Option<Amount>),
    DescriptionChanged(Option<String>),
    Touched(FormField),
    AllTouched
}

/// Complete state of the transaction form: the draft, what is shown, what is
/// enabled and how the user has interacted with each input.
///
/// The state is a plain value. [`FormState::reduce`] maps a state and an event
/// to the next state and validation is derived on demand by [`FormState::errors`].
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    draft: TransactionDraft,
    visibility: FormVisibility,
    /// Upper bound of the amount, set while a source account governs it.
    max_amount: Option<Amount>,
    fields: [FieldStatus; FormField::ALL.len()]
}

impl FormState {
    /// Creates a form in its initial DEPOSIT state.
    pub fn new() -> Self {
        let blank = Self {
            draft: TransactionDraft::default(),
            visibility: FormVisibility::default(),
            max_amount: None,
            fields: [FieldStatus::default(); FormField::ALL.len()]
        };

        blank.reduce(FormEvent::TransactionTypeChanged(TransactionType::Deposit))
    }

    pub fn draft(&self) -> &TransactionDraft {
        &self.draft
    }

    pub fn visibility(&self) -> FormVisibility {
        self.visibility
    }

    pub fn max_amount(&self) -> Option<Amount> {
        self.max_amount
    }

    pub fn status(&self, field: FormField) -> FieldStatus {
        self.fields[field.index()]
    }

    pub fn is_enabled(&self, field: FormField) -> bool {
        self.status(field).enabled
    }

    /// Whether no input has been touched or changed since the last reset.
    pub fn is_pristine(&self) -> bool {
        self.fields.iter().all(|status| !status.touched && !status.dirty)
    }

    /// Applies one event and returns the resulting state.
    pub fn reduce(&self, event: FormEvent) -> FormState {
        let mut next = self.clone();

        match event {
            FormEvent::TransactionTypeChanged(transaction_type) => {
                next.change_transaction_type(transaction_type);
            },
            FormEvent::SourceAccountChanged(account) => {
                next.draft.source_account = account;
                next.mark_dirty(FormField::SourceAccount);
                next.refresh_max_amount();
            },
            FormEvent::TargetAccountChanged(account) => {
                next.draft.target_account = account;
                next.mark_dirty(FormField::TargetAccount);
            },
            FormEvent::FullAmountChanged(full_amount) => {
                if !next.visibility.show_full_amount {
                    debug!("Full amount ignored for [{}]", next.draft.transaction_type);
                    return next;
                }

                next.draft.full_amount = full_amount;
                next.mark_dirty(FormField::FullAmount);
                next.apply_full_amount();
            },
            FormEvent::AmountChanged(amount) => {
                next.draft.amount = amount;
                next.mark_dirty(FormField::Amount);
            },
            FormEvent::DescriptionChanged(description) => {
                next.draft.description = description;
                next.mark_dirty(FormField::Description);
            },
            FormEvent::Touched(field) => {
                next.fields[field.index()].touched = true;
            },
            FormEvent::AllTouched => {
                next.fields.iter_mut().for_each(|status| status.touched = true);
            }
        }

        next
    }

    /// Validation errors of every enabled input, plus the transfer checks.
    pub fn errors(&self) -> FormErrors {
        let mut errors = FormErrors::default();

        if self.is_enabled(FormField::SourceAccount) {
            if let Some(error) = validators::required(self.draft.source_account.as_ref()) {
                errors.insert(FormField::SourceAccount, error);
            }
        }

        if self.is_enabled(FormField::TargetAccount) {
            if let Some(error) = validators::required(self.draft.target_account.as_ref()) {
                errors.insert(FormField::TargetAccount, error);
            }
        }

        if self.is_enabled(FormField::Amount) {
            for error in validators::amount(self.draft.amount, self.max_amount) {
                errors.insert(FormField::Amount, error);
            }
        }

        if let Some(error) = validators::description(self.draft.description.as_deref()) {
            errors.insert(FormField::Description, error);
        }

        validators::transfer_account_validator(&self.draft, &mut errors);

        errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    /// Whether an input should display its errors: it is invalid and the user
    /// has either touched or changed it.
    pub fn shows_error(&self, field: FormField) -> bool {
        let status = self.status(field);

        !self.errors().field(field).is_empty() && (status.touched || status.dirty)
    }

    fn change_transaction_type(&mut self, transaction_type: TransactionType) {
        self.visibility = FormVisibility::for_type(transaction_type);
        self.draft = TransactionDraft::new(transaction_type);

        self.fields[FormField::SourceAccount.index()].enabled = transaction_type.requires_source();
        self.fields[FormField::TargetAccount.index()].enabled = transaction_type.requires_target();
        self.apply_full_amount();

        for status in self.fields.iter_mut() {
            status.touched = false;
            status.dirty = false;
        }

        self.refresh_max_amount();

        debug!("Transaction form switched to [{transaction_type}]");
    }

    fn apply_full_amount(&mut self) {
        let amount = &mut self.fields[FormField::Amount.index()];

        if self.draft.full_amount {
            self.draft.amount = None;
            amount.enabled = false;
            self.visibility.show_amount = false;
        } else {
            amount.enabled = true;
            self.visibility.show_amount = true;
        }
    }

    fn refresh_max_amount(&mut self) {
        self.max_amount = if self.visibility.show_source_account {
            self.draft.source_account.as_ref().map(|account| account.current_value)
        } else {
            None
        };
    }

    fn mark_dirty(&mut self, field: FormField) {
        self.fields[field.index()].dirty = true;
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
