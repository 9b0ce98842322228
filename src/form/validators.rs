use crate::form::{FormErrors, FormField, TransactionDraft, ValidationError, MAX_DESCRIPTION_LENGTH, MIN_AMOUNT};
use crate::models::TransactionType;
use crate::types::Amount;

pub fn required<T>(value: Option<&T>) -> Option<ValidationError> {
    match value {
        Some(_) => None,
        None => Some(ValidationError::Required)
    }
}

/// Required, lower bound and, when a source account governs the amount, upper bound.
pub fn amount(value: Option<Amount>, max: Option<Amount>) -> Vec<ValidationError> {
    let Some(actual) = value else {
        return vec![ValidationError::Required];
    };

    let mut errors = Vec::new();

    if actual < MIN_AMOUNT {
        errors.push(ValidationError::Min { min: MIN_AMOUNT, actual });
    }

    if let Some(max) = max {
        if actual > max {
            errors.push(ValidationError::Max { max, actual });
        }
    }

    errors
}

pub fn description(value: Option<&str>) -> Option<ValidationError> {
    let actual_length = value?.chars().count();

    if actual_length > MAX_DESCRIPTION_LENGTH {
        return Some(ValidationError::MaxLength { max_length: MAX_DESCRIPTION_LENGTH, actual_length });
    }

    None
}

/// Checks that a transfer moves money between two distinct accounts of one client.
///
/// Failures replace the errors of the target account field. There is no
/// form-level error. When both checks fail the last one wins.
pub fn transfer_account_validator(draft: &TransactionDraft, errors: &mut FormErrors) {
    if draft.transaction_type != TransactionType::Transfer {
        return;
    }

    let (Some(source), Some(target)) = (&draft.source_account, &draft.target_account) else {
        return;
    };

    if source.client_id != target.client_id {
        errors.replace(FormField::TargetAccount, ValidationError::TransferAccountNotSameClient);
    }

    if source.id == target.id {
        errors.replace(FormField::TargetAccount, ValidationError::TransferAccountSame);
    }
}
