//! Background worker for asynchronous tag creation.
//!
//! Creation handlers run off the event thread so that a slow backend never
//! blocks collapse or further input. Requests carry generation ids: the
//! worker skips requests that were superseded before it picked them up, and
//! the state machine drops results whose id no longer matches the pending
//! creation (search text changed, dropdown collapsed, newer request issued).

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread;

use anyhow::Result;
use log::debug;

use crate::options::SelectOption;

/// Handler invoked on a background thread to create a new option, e.g. by
/// registering the tag with a backend that assigns the canonical value.
pub trait CreateOptionHandler: Send + 'static {
    fn create(&mut self, name: &str) -> Result<SelectOption>;
}

impl<F> CreateOptionHandler for F
where
    F: FnMut(&str) -> Result<SelectOption> + Send + 'static,
{
    fn create(&mut self, name: &str) -> Result<SelectOption> {
        self(name)
    }
}

pub(crate) enum CreationCommand {
    Create {
        id: u64,
        name: String,
        group: Option<usize>,
    },
    Shutdown,
}

pub(crate) struct CreationOutcome {
    pub id: u64,
    pub group: Option<usize>,
    pub result: Result<SelectOption>,
}

pub(crate) struct CreationChannel {
    pub tx: Sender<CreationCommand>,
    pub rx: Receiver<CreationOutcome>,
    /// Generation token shared with the worker; stale ids are skipped before
    /// the handler is ever invoked.
    pub latest_id: Arc<AtomicU64>,
}

/// Spawn the creation worker around the supplied handler.
pub(crate) fn spawn(mut handler: Box<dyn CreateOptionHandler>) -> CreationChannel {
    let (command_tx, command_rx) = channel::<CreationCommand>();
    let (outcome_tx, outcome_rx) = channel::<CreationOutcome>();
    let latest_id = Arc::new(AtomicU64::new(0));
    let worker_latest = Arc::clone(&latest_id);

    thread::spawn(move || {
        while let Ok(command) = command_rx.recv() {
            match command {
                CreationCommand::Create { id, name, group } => {
                    if worker_latest.load(AtomicOrdering::Acquire) != id {
                        debug!("skipping superseded creation request {id}");
                        continue;
                    }
                    let result = handler.create(&name);
                    if outcome_tx.send(CreationOutcome { id, group, result }).is_err() {
                        break;
                    }
                }
                CreationCommand::Shutdown => break,
            }
        }
    });

    CreationChannel {
        tx: command_tx,
        rx: outcome_rx,
        latest_id,
    }
}

/// One creation request awaiting its outcome.
#[derive(Clone, Debug)]
pub(crate) struct PendingCreation {
    pub id: u64,
    pub prompt: String,
    pub group: Option<usize>,
}
