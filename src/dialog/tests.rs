use super::{ConfirmationModal, ConsoleModal, ConsoleNavigator, ModalResult, Navigator};

#[test]
fn test_only_zero_creates_another_transaction() {
    assert!(ModalResult(0).creates_another());
    assert!(!ModalResult(1).creates_another());
    assert!(!ModalResult(-1).creates_another());
    assert!(!ModalResult::DONE.creates_another());
}

#[test]
fn test_console_choice_parsing_defaults_to_done() {
    assert_eq!(ConsoleModal::parse_choice("0\n"), ModalResult::CREATE_ANOTHER);
    assert_eq!(ConsoleModal::parse_choice(" 0 "), ModalResult::CREATE_ANOTHER);
    assert_eq!(ConsoleModal::parse_choice("2"), ModalResult(2));
    assert_eq!(ConsoleModal::parse_choice("yes"), ModalResult::DONE);
    assert_eq!(ConsoleModal::parse_choice(""), ModalResult::DONE);
}

#[tokio::test]
async fn test_non_interactive_console_modal_closes_as_done() {
    let modal = ConsoleModal::new(false);

    assert_eq!(modal.open(true).await, ModalResult::DONE);
    assert_eq!(modal.open(false).await, ModalResult::DONE);
}

#[test]
fn test_console_navigator_counts_departures() {
    let navigator = ConsoleNavigator::new();
    navigator.navigate_back();
    navigator.navigate_back();

    assert_eq!(navigator.departures(), 2);
}
