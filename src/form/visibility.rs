use crate::models::TransactionType;

/// Which inputs the form currently shows.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct FormVisibility {
    pub show_source_account: bool,
    pub show_target_account: bool,
    pub show_full_amount: bool,
    pub show_amount: bool
}

impl FormVisibility {
    pub fn for_type(transaction_type: TransactionType) -> Self {
        match transaction_type {
            TransactionType::Deposit => Self {
                show_source_account: false,
                ..Self::default()
            },
            TransactionType::Withdraw => Self {
                show_target_account: false,
                show_full_amount: true,
                ..Self::default()
            },
            TransactionType::Transfer => Self::default()
        }
    }
}

impl Default for FormVisibility {
    fn default() -> Self {
        Self {
            show_source_account: true,
            show_target_account: true,
            show_full_amount: false,
            show_amount: true
        }
    }
}
