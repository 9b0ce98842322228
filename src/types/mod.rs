use rust_decimal::Decimal;

pub type BankAccountId = u32;
pub type ClientId = u32;
pub type TransactionId = u32;

/// Monetary values travel as plain JSON numbers and are held as decimals.
pub type Amount = Decimal;
