mod console;
#[cfg(test)]
mod tests;

use async_trait::async_trait;

pub use console::{ConsoleModal, ConsoleNavigator};

/// Value a confirmation modal closes with.
///
/// `0` asks for another transaction; every other value means the user is done.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ModalResult(pub i32);

impl ModalResult {
    pub const CREATE_ANOTHER: ModalResult = ModalResult(0);
    pub const DONE: ModalResult = ModalResult(1);

    pub fn creates_another(&self) -> bool {
        *self == Self::CREATE_ANOTHER
    }
}

/// Tells the user whether a transaction was saved and asks what to do next.
#[async_trait]
pub trait ConfirmationModal: Send + Sync {
    async fn open(&self, success: bool) -> ModalResult;
}

/// Leaves the transaction form.
pub trait Navigator: Send + Sync {
    fn navigate_back(&self);
}
