//! Best-effort snapshot persistence.
//!
//! Mutating handlers signal this task after every change; writes are
//! debounced over a short idle window and any failure is logged and
//! swallowed. The in-memory mutation never waits on, or learns about,
//! the outcome of a write.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use stacks_ledger::Ledger;
use tokio::sync::{mpsc, RwLock};

/// Signal sender handed to the application state.
pub type PersistHandle = mpsc::UnboundedSender<()>;

/// Idle window before a flush; further signals inside it coalesce.
const DEBOUNCE: Duration = Duration::from_millis(300);

/// Spawn the persister task, returning its signal handle.
pub fn spawn(ledger: Arc<RwLock<Ledger>>, path: PathBuf) -> PersistHandle {
    let (tx, mut rx) = mpsc::unbounded_channel::<()>();

    tokio::spawn(async move {
        while rx.recv().await.is_some() {
            // Coalesce signals arriving within the idle window.
            loop {
                match tokio::time::timeout(DEBOUNCE, rx.recv()).await {
                    Ok(Some(())) => continue,
                    _ => break,
                }
            }

            flush(&ledger, &path).await;
        }

        // Channel closed; one final flush so shutdown loses nothing.
        flush(&ledger, &path).await;
    });

    tx
}

/// Export and write one snapshot, swallowing every failure.
async fn flush(ledger: &Arc<RwLock<Ledger>>, path: &PathBuf) {
    let json = {
        let ledger = ledger.read().await;
        ledger.export_state().to_json()
    };

    match json {
        Ok(json) => match tokio::fs::write(path, json).await {
            Ok(()) => tracing::debug!(path = %path.display(), "Snapshot persisted"),
            Err(e) => tracing::warn!(path = %path.display(), "Failed to persist snapshot: {}", e),
        },
        Err(e) => tracing::warn!("Failed to serialize snapshot: {}", e),
    }
}

/// Load a snapshot from disk, tolerating a missing or unreadable file.
///
/// Returns None (and logs) on any failure; the caller starts fresh.
pub async fn load(path: &PathBuf) -> Option<stacks_ledger::LedgerSnapshot> {
    match tokio::fs::read_to_string(path).await {
        Ok(json) => match stacks_ledger::LedgerSnapshot::from_json(&json) {
            Ok(snapshot) => {
                tracing::info!(
                    path = %path.display(),
                    records = snapshot.record_count(),
                    "Loaded snapshot"
                );
                Some(snapshot)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), "Ignoring invalid snapshot: {}", e);
                None
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => {
            tracing::warn!(path = %path.display(), "Failed to read snapshot: {}", e);
            None
        }
    }
}
