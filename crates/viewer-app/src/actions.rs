//! Action handlers: background work requested by `update()`
//!
//! The only asynchronous operation is the full text read. There is no
//! cancellation: a stale completion is recognised by its ticket and ignored.

use tokio::sync::{mpsc, watch};
use viewer_core::prelude::*;
use viewer_core::FileCandidate;

use crate::handler::UpdateAction;
use crate::message::Message;

/// Execute an action. Host-facing actions are handled by the caller.
pub fn handle_action(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    shutdown_rx: watch::Receiver<bool>,
) {
    match action {
        UpdateAction::ReadText { ticket, candidate } => {
            spawn_read_text(ticket, candidate, msg_tx, shutdown_rx);
        }
        UpdateAction::OpenFilePicker => {
            debug!("OpenFilePicker reached the action runner; nothing to spawn");
        }
    }
}

/// Read the candidate in the background and answer with
/// `TextReadCompleted`/`TextReadFailed`
pub fn spawn_read_text(
    ticket: u64,
    candidate: FileCandidate,
    msg_tx: mpsc::Sender<Message>,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    tokio::spawn(async move {
        let result = tokio::select! {
            result = read_text(&candidate) => result,
            _ = shutdown_rx.changed() => {
                debug!("Shutdown during text read #{}", ticket);
                return;
            }
        };

        let msg = match result {
            Ok(content) => {
                debug!("Read {} bytes from {}", content.len(), candidate.name);
                Message::TextReadCompleted { ticket, content }
            }
            Err(e) => {
                warn!("Text read of {} failed: {}", candidate.name, e);
                Message::TextReadFailed {
                    ticket,
                    error: e.to_string(),
                }
            }
        };

        if msg_tx.send(msg).await.is_err() {
            debug!("Engine gone, dropping text read #{}", ticket);
        }
    });
}

/// Read a candidate's full content as text. Invalid UTF-8 is replaced.
pub async fn read_text(candidate: &FileCandidate) -> std::io::Result<String> {
    let path = candidate.path().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::Unsupported, "not a local file")
    })?;
    let bytes = tokio::fs::read(path).await?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_read_text_lossy() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("notes.txt");
        std::fs::write(&path, b"caf\xc3\xa9 \xff").unwrap();

        let candidate = FileCandidate::from_path(&path).unwrap();
        let text = read_text(&candidate).await.unwrap();

        assert_eq!(text, "café \u{FFFD}");
    }

    #[tokio::test]
    async fn test_read_text_rejects_url() {
        let candidate = FileCandidate::from_url("https://example.com/");
        let err = read_text(&candidate).await.unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::Unsupported);
    }

    #[tokio::test]
    async fn test_spawn_read_text_answers_with_ticket() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("a.txt");
        std::fs::write(&path, "hello").unwrap();
        let candidate = FileCandidate::from_path(&path).unwrap();

        let (tx, mut rx) = mpsc::channel(4);
        let (_shutdown_tx, shutdown_rx) = watch::channel(false);
        handle_action(UpdateAction::ReadText { ticket: 7, candidate }, tx, shutdown_rx);

        let msg = tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .unwrap()
            .unwrap();
        match msg {
            Message::TextReadCompleted { ticket, content } => {
                assert_eq!(ticket, 7);
                assert_eq!(content, "hello");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_spawn_read_text_reports_failure() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("gone.txt");
        std::fs::write(&path, "x").unwrap();
        let candidate = FileCandidate::from_path(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        let (tx, mut rx) = mpsc::channel(4);
        let (_shutdown_tx, shutdown_rx) = watch::channel(false);
        spawn_read_text(3, candidate, tx, shutdown_rx);

        let msg = tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .unwrap()
            .unwrap();
        assert!(matches!(msg, Message::TextReadFailed { ticket: 3, .. }));
    }
}
