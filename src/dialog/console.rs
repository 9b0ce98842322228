use std::io::{stderr, stdin, BufRead, Write};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::task::spawn_blocking;
use tracing::{info, warn};

use crate::dialog::{ConfirmationModal, ModalResult, Navigator};

/// Confirmation modal rendered on the terminal.
///
/// Messages go to stderr so stdout stays free for CSV output. In interactive mode
/// the user is asked whether to create another transaction; otherwise the modal
/// closes as done.
pub struct ConsoleModal {
    interactive: bool
}

impl ConsoleModal {
    pub fn new(interactive: bool) -> Self {
        Self { interactive }
    }

    pub fn message(success: bool) -> &'static str {
        if success {
            "Transaction saved successfully."
        } else {
            "Transaction could not be saved. Please try again later."
        }
    }

    /// Reads the user's choice: `0` creates another transaction, anything else is done.
    pub fn parse_choice(line: &str) -> ModalResult {
        line.trim().parse::<i32>()
            .map(ModalResult)
            .unwrap_or(ModalResult::DONE)
    }
}

#[async_trait]
impl ConfirmationModal for ConsoleModal {
    async fn open(&self, success: bool) -> ModalResult {
        eprintln!("{}", Self::message(success));

        if !self.interactive {
            return ModalResult::DONE;
        }

        let answer = spawn_blocking(|| -> std::io::Result<String> {
            eprint!("Enter 0 to create another transaction, anything else to finish: ");
            stderr().flush()?;

            let mut line = String::new();
            stdin().lock().read_line(&mut line)?;
            Ok(line)
        }).await;

        match answer {
            Ok(Ok(line)) => Self::parse_choice(&line),
            Ok(Err(error)) => {
                warn!("Could not read modal answer: {error}");
                ModalResult::DONE
            },
            Err(error) => {
                warn!("Modal prompt did not complete: {error}");
                ModalResult::DONE
            }
        }
    }
}

/// Navigator for the terminal: leaving the form simply ends the session.
#[derive(Default)]
pub struct ConsoleNavigator {
    departures: AtomicUsize
}

impl ConsoleNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times the form was left.
    pub fn departures(&self) -> usize {
        self.departures.load(Ordering::SeqCst)
    }
}

impl Navigator for ConsoleNavigator {
    fn navigate_back(&self) {
        self.departures.fetch_add(1, Ordering::SeqCst);
        info!("Leaving the transaction form");
    }
}
