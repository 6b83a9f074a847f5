//! Clipboard Worker
//!
//! Clipboard writes run on a dedicated thread so the UI never waits on the
//! system clipboard. Requests go out over one channel and outcomes come back
//! over another; the app drains outcomes on every tick.

use anyhow::{Context, Result};
use flume::{Receiver, Sender};
use std::thread;

/// Anything that can take a text payload
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The system clipboard through arboard. On X11 the contents live as long as
/// this handle, so the worker keeps it for the life of the app.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        let inner = arboard::Clipboard::new().context("Failed to open the system clipboard")?;
        Ok(Self { inner })
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.inner
            .set_text(text.to_owned())
            .context("Clipboard rejected the write")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyRequest {
    pub page: &'static str,
    /// Token of the page view that asked, echoed back in the outcome
    pub view: u64,
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied {
        page: &'static str,
        view: u64,
        id: String,
    },
    Failed {
        page: &'static str,
        view: u64,
        id: String,
        error: String,
    },
}

type ClipboardFactory = Box<dyn FnOnce() -> Result<Box<dyn Clipboard>> + Send>;

#[derive(Debug)]
pub struct ClipboardWorker {
    requests: Sender<CopyRequest>,
    outcomes: Receiver<CopyOutcome>,
}

impl ClipboardWorker {
    /// Worker backed by the system clipboard
    pub fn system() -> Self {
        Self::spawn(Box::new(|| {
            SystemClipboard::new().map(|c| Box::new(c) as Box<dyn Clipboard>)
        }))
    }

    /// Starts the worker thread. The clipboard is built on that thread; if it
    /// cannot be opened every request fails with the open error.
    pub fn spawn(factory: ClipboardFactory) -> Self {
        let (request_tx, request_rx) = flume::unbounded::<CopyRequest>();
        let (outcome_tx, outcome_rx) = flume::unbounded();

        thread::spawn(move || {
            let mut clipboard = factory().map_err(|e| format!("{:#}", e));
            if let Err(e) = &clipboard {
                log::warn!("Clipboard unavailable: {}", e);
            }

            // Ends when the app drops its sender
            for request in request_rx.iter() {
                let result = match clipboard.as_mut() {
                    Ok(clipboard) => clipboard
                        .set_text(&request.text)
                        .map_err(|e| format!("{:#}", e)),
                    Err(e) => Err(e.clone()),
                };

                let outcome = match result {
                    Ok(()) => CopyOutcome::Copied {
                        page: request.page,
                        view: request.view,
                        id: request.id,
                    },
                    Err(error) => CopyOutcome::Failed {
                        page: request.page,
                        view: request.view,
                        id: request.id,
                        error,
                    },
                };

                if outcome_tx.send(outcome).is_err() {
                    break;
                }
            }
        });

        Self {
            requests: request_tx,
            outcomes: outcome_rx,
        }
    }

    /// Queues a write and returns at once
    pub fn copy(&self, request: CopyRequest) {
        let id = request.id.clone();
        if self.requests.send(request).is_err() {
            log::error!("Clipboard worker is gone, dropping copy of {}", id);
        }
    }

    /// Outcomes that arrived since the last call
    pub fn drain(&self) -> Vec<CopyOutcome> {
        self.outcomes.try_iter().collect()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use anyhow::anyhow;
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    /// Records every payload it receives
    pub(crate) struct RecordingClipboard(pub Arc<Mutex<Vec<String>>>);

    impl Clipboard for RecordingClipboard {
        fn set_text(&mut self, text: &str) -> Result<()> {
            self.0
                .lock()
                .map_err(|_| anyhow!("poisoned"))?
                .push(text.to_owned());
            Ok(())
        }
    }

    /// Refuses every write, like a clipboard the user denied access to
    pub(crate) struct DeniedClipboard;

    impl Clipboard for DeniedClipboard {
        fn set_text(&mut self, _text: &str) -> Result<()> {
            Err(anyhow!("permission denied"))
        }
    }

    pub(crate) fn recording_worker() -> (ClipboardWorker, Arc<Mutex<Vec<String>>>) {
        let store = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&store);
        let worker = ClipboardWorker::spawn(Box::new(move || {
            Ok(Box::new(RecordingClipboard(sink)) as Box<dyn Clipboard>)
        }));
        (worker, store)
    }

    pub(crate) fn denied_worker() -> ClipboardWorker {
        ClipboardWorker::spawn(Box::new(|| Ok(Box::new(DeniedClipboard) as Box<dyn Clipboard>)))
    }

    pub(crate) fn next_outcome(worker: &ClipboardWorker) -> CopyOutcome {
        worker
            .outcomes
            .recv_timeout(Duration::from_secs(5))
            .expect("worker answered")
    }

    fn request(id: &str, text: &str) -> CopyRequest {
        CopyRequest {
            page: "express",
            view: 7,
            id: id.to_owned(),
            text: text.to_owned(),
        }
    }

    #[test]
    fn successful_copy_reaches_the_clipboard() {
        let (worker, store) = recording_worker();
        worker.copy(request("id1", "npm install"));

        assert_eq!(
            next_outcome(&worker),
            CopyOutcome::Copied {
                page: "express",
                view: 7,
                id: "id1".to_owned()
            }
        );
        assert_eq!(*store.lock().expect("lock"), vec!["npm install".to_owned()]);
    }

    #[test]
    fn rejected_copy_reports_failure() {
        let worker = denied_worker();
        worker.copy(request("id1", "npm install"));

        match next_outcome(&worker) {
            CopyOutcome::Failed { id, error, .. } => {
                assert_eq!(id, "id1");
                assert!(error.contains("permission denied"));
            }
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn unavailable_clipboard_fails_every_request() {
        let worker = ClipboardWorker::spawn(Box::new(|| Err(anyhow!("no display"))));
        worker.copy(request("a", "x"));
        worker.copy(request("b", "y"));

        for expected in ["a", "b"] {
            match next_outcome(&worker) {
                CopyOutcome::Failed { id, error, .. } => {
                    assert_eq!(id, expected);
                    assert!(error.contains("no display"));
                }
                other => panic!("unexpected outcome {other:?}"),
            }
        }
    }

    #[test]
    fn drain_is_empty_when_nothing_was_sent() {
        let (worker, _store) = recording_worker();
        assert!(worker.drain().is_empty());
    }
}
