use std::sync::Arc;

use tracing::{debug, error, info};

use crate::client::{AccountDirectory, TransactionCreator};
use crate::dialog::{ConfirmationModal, ModalResult, Navigator};
use crate::form::{DisposeHandle, FormError, FormErrors, FormEvent, FormField, FormState, Lifetime};
use crate::models::{BankAccount, TransactionType};
use crate::types::{Amount, BankAccountId};

/// What happened after the confirmation modal closed.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum AfterDialog {
    /// The form was reset to a fresh DEPOSIT.
    CreateAnother,
    NavigatedAway
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Nothing was sent; every field is now marked touched.
    Invalid(FormErrors),
    Completed {
        success: bool,
        next: AfterDialog
    },
    /// The form was torn down before the submission finished.
    Disposed
}

/// Drives the transaction form: applies user input, validates, submits and
/// reacts to the confirmation modal.
///
/// `submit` borrows the controller mutably for its whole duration, so a second
/// submission cannot start while one is in flight.
pub struct TransactionFormController {
    state: FormState,
    bank_accounts: Vec<BankAccount>,
    accounts: Arc<dyn AccountDirectory>,
    creator: Arc<dyn TransactionCreator>,
    modal: Arc<dyn ConfirmationModal>,
    navigator: Arc<dyn Navigator>,
    lifetime: Lifetime
}

impl TransactionFormController {
    pub fn new(
        accounts: Arc<dyn AccountDirectory>,
        creator: Arc<dyn TransactionCreator>,
        modal: Arc<dyn ConfirmationModal>,
        navigator: Arc<dyn Navigator>
    ) -> Self {
        Self {
            state: FormState::new(),
            bank_accounts: Vec::new(),
            accounts,
            creator,
            modal,
            navigator,
            lifetime: Lifetime::new()
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn bank_accounts(&self) -> &[BankAccount] {
        &self.bank_accounts
    }

    /// Handle that tears the form down from outside, e.g. when the user leaves.
    pub fn dispose_handle(&self) -> DisposeHandle {
        self.lifetime.handle()
    }

    pub fn dispose(self) {
        self.lifetime.dispose();
    }

    /// Fetches the accounts offered by the source and target selectors.
    pub async fn load_accounts(&mut self) -> Result<&[BankAccount], FormError> {
        let accounts = self.lifetime.scoped(self.accounts.list_accounts()).await
            .ok_or(FormError::Disposed)??;

        debug!("Loaded [{}] bank accounts into the transaction form", accounts.len());

        self.bank_accounts = accounts;

        Ok(&self.bank_accounts)
    }

    /// Applies one event unless the form has been disposed.
    pub fn dispatch(&mut self, event: FormEvent) {
        if self.lifetime.is_disposed() {
            debug!("Ignoring {event:?} on a disposed transaction form");
            return;
        }

        self.state = self.state.reduce(event);
    }

    pub fn set_transaction_type(&mut self, transaction_type: TransactionType) {
        self.dispatch(FormEvent::TransactionTypeChanged(transaction_type));
    }

    pub fn select_source(&mut self, account_id: Option<BankAccountId>) -> Result<(), FormError> {
        let account = self.resolve(account_id)?;
        self.dispatch(FormEvent::SourceAccountChanged(account));
        Ok(())
    }

    pub fn select_target(&mut self, account_id: Option<BankAccountId>) -> Result<(), FormError> {
        let account = self.resolve(account_id)?;
        self.dispatch(FormEvent::TargetAccountChanged(account));
        Ok(())
    }

    pub fn set_full_amount(&mut self, full_amount: bool) {
        self.dispatch(FormEvent::FullAmountChanged(full_amount));
    }

    pub fn set_amount(&mut self, amount: Option<Amount>) {
        self.dispatch(FormEvent::AmountChanged(amount));
    }

    /// Blank descriptions are stored as absent, anything else as entered.
    pub fn set_description(&mut self, description: &str) {
        let description = Some(description)
            .filter(|text| !text.trim().is_empty())
            .map(str::to_string);

        self.dispatch(FormEvent::DescriptionChanged(description));
    }

    /// Marks an input as visited by the user.
    pub fn touch(&mut self, field: FormField) {
        self.dispatch(FormEvent::Touched(field));
    }

    /// Submits the draft and shows the outcome.
    ///
    /// An invalid draft is never sent. A failed request is logged and reported
    /// to the modal as `success = false`; it is not retried.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.lifetime.is_disposed() {
            return SubmitOutcome::Disposed;
        }

        self.dispatch(FormEvent::AllTouched);

        let request = match self.state.draft().to_request() {
            Some(request) if self.state.is_valid() => request,
            _ => {
                debug!("Transaction form is invalid, submission aborted");
                return SubmitOutcome::Invalid(self.state.errors());
            }
        };

        let Some(created) = self.lifetime.scoped(self.creator.create(request)).await else {
            return SubmitOutcome::Disposed;
        };

        let success = match created {
            Ok(transaction) => {
                info!("Transaction [{}]:[{}] created for [{}]", transaction.id, transaction.transaction_type, transaction.amount);
                true
            },
            Err(error) => {
                error!("Transaction creation failed: {error}");
                false
            }
        };

        let Some(result) = self.lifetime.scoped(self.modal.open(success)).await else {
            return SubmitOutcome::Disposed;
        };

        SubmitOutcome::Completed {
            success,
            next: self.close_dialog(result)
        }
    }

    /// Leaves the form without submitting.
    pub fn cancel(&self) {
        if !self.state.is_pristine() {
            debug!("Discarding unsaved [{}] transaction", self.state.draft().transaction_type);
        }

        self.navigator.navigate_back();
    }

    fn close_dialog(&mut self, result: ModalResult) -> AfterDialog {
        if result.creates_another() {
            self.set_transaction_type(TransactionType::Deposit);
            AfterDialog::CreateAnother
        } else {
            self.navigator.navigate_back();
            AfterDialog::NavigatedAway
        }
    }

    fn resolve(&self, account_id: Option<BankAccountId>) -> Result<Option<BankAccount>, FormError> {
        let Some(account_id) = account_id else {
            return Ok(None);
        };

        self.bank_accounts.iter()
            .find(|account| account.id == account_id)
            .cloned()
            .map(Some)
            .ok_or(FormError::UnknownAccount { account_id })
    }
}
