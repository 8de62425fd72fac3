//! Background observer for the shared auth flag.
//!
//! One task holds a `watch::Receiver`, wakes on every write, and logs actual
//! transitions. Equal-value writes wake it without producing output.

use tokio::task::JoinHandle;
use tracing::info;

use crate::state::AuthState;

/// Spawn the watcher task. It ends once every holder of the flag is dropped.
pub fn spawn_status_watcher(auth: &AuthState) -> JoinHandle<()> {
    let mut rx = auth.subscribe();
    let mut last = auth.get();
    tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            let current = *rx.borrow_and_update();
            if current != last {
                info!(authenticated = current, "auth state changed");
                last = current;
            }
        }
    })
}

#[cfg(test)]
#[path = "watcher_test.rs"]
mod tests;
