use std::future::Future;
use std::sync::Arc;

use tokio::select;
use tokio::sync::watch;

/// Scope tied to the life of a form.
///
/// Work started through [`Lifetime::scoped`] is abandoned as soon as the scope is
/// disposed, so no result of it is observed after teardown. Dropping the
/// lifetime disposes it.
pub struct Lifetime {
    disposed: Arc<watch::Sender<bool>>
}

/// Remote control that disposes a [`Lifetime`] from elsewhere.
#[derive(Clone)]
pub struct DisposeHandle {
    disposed: Arc<watch::Sender<bool>>
}

impl Lifetime {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(false);

        Self {
            disposed: Arc::new(sender)
        }
    }

    pub fn handle(&self) -> DisposeHandle {
        DisposeHandle {
            disposed: self.disposed.clone()
        }
    }

    pub fn is_disposed(&self) -> bool {
        *self.disposed.borrow()
    }

    pub fn dispose(&self) {
        self.disposed.send_replace(true);
    }

    /// Runs `future` until it completes or the scope is disposed, whichever comes first.
    ///
    /// Returns `None` when disposal won.
    pub async fn scoped<F: Future>(&self, future: F) -> Option<F::Output> {
        let mut receiver = self.disposed.subscribe();

        if *receiver.borrow_and_update() {
            return None;
        }

        select! {
            biased;
            _ = receiver.wait_for(|disposed| *disposed) => None,
            output = future => Some(output)
        }
    }
}

impl Default for Lifetime {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Lifetime {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl DisposeHandle {
    pub fn dispose(&self) {
        self.disposed.send_replace(true);
    }

    pub fn is_disposed(&self) -> bool {
        *self.disposed.borrow()
    }

    /// Resolves once the lifetime has been disposed.
    pub async fn disposed(&self) {
        let mut receiver = self.disposed.subscribe();

        // The handle keeps the sender alive, so waiting cannot fail.
        receiver.wait_for(|disposed| *disposed).await.ok();
    }
}
