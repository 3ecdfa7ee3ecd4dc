//! Event dispatch loop.
//!
//! The core exposes one async entry point per host event; this module owns
//! the runtime loop that feeds them. Host adapters translate native browser
//! callbacks into [`TabEvent`]s and push them over a channel; a single tokio
//! task drains the channel and drives the core, so handlers never run
//! concurrently with each other.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::core::EnforcementCore;
use crate::error::{TabWardenError, TabWardenResult};
use crate::host::{Host, TabRecord};

/// A host event routed to the enforcement core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabEvent {
    /// A tab was created.
    Created(TabRecord),

    /// A tab was removed. The host does not say which.
    Removed,

    /// Settings-store keys changed.
    SettingsChanged(Vec<String>),

    /// Browser startup or extension install.
    Startup,

    /// Stop the dispatcher after draining in-flight events.
    Shutdown,
}

/// Owns the dispatcher task and the channel feeding it.
pub struct EventDispatcher {
    tx: mpsc::Sender<TabEvent>,
    task_handle: Option<JoinHandle<()>>,
}

impl EventDispatcher {
    /// Spawn the dispatch loop over a fresh enforcement core.
    pub fn new(host: Arc<Host>) -> Self {
        let (tx, rx) = mpsc::channel(64);
        let core = EnforcementCore::new(host);
        let task_handle = tokio::spawn(event_loop(rx, core));

        Self {
            tx,
            task_handle: Some(task_handle),
        }
    }

    /// Queue an event for the core.
    pub async fn dispatch(&self, event: TabEvent) -> TabWardenResult<()> {
        self.tx
            .send(event)
            .await
            .map_err(|e| TabWardenError::Dispatch(format!("Failed to send event: {}", e)))
    }

    /// Stop the loop and wait for already-queued events to finish.
    pub async fn shutdown(&mut self) -> TabWardenResult<()> {
        let _ = self.tx.send(TabEvent::Shutdown).await;

        if let Some(handle) = self.task_handle.take() {
            handle.await.map_err(|e| {
                TabWardenError::Dispatch(format!("Dispatcher task panicked: {}", e))
            })?;
        }

        Ok(())
    }
}

async fn event_loop(mut rx: mpsc::Receiver<TabEvent>, mut core: EnforcementCore) {
    while let Some(event) = rx.recv().await {
        match event {
            TabEvent::Created(tab) => core.on_tab_created(tab).await,
            TabEvent::Removed => core.on_tab_removed().await,
            TabEvent::SettingsChanged(keys) => core.on_settings_changed(&keys).await,
            TabEvent::Startup => core.on_startup().await,
            TabEvent::Shutdown => break,
        }
    }
}
