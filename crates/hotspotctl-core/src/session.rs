// ── Session controller ──
//
// Owns the single start/stop lifecycle state machine and composes the
// form, poller, extractor, and rate tracker. All state transitions are
// guarded here; there is no ambient mutable session flag anywhere else.

use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::{Mutex as AsyncMutex, broadcast, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use hotspotctl_api::{DaemonClient, HotspotConfig, StartReceipt};

use crate::error::CoreError;
use crate::form::{self, ConfigForm};
use crate::model::{LifecycleEvent, StatusSnapshot};
use crate::poller::{PollerSettings, StatusView, poll_loop};

const EVENT_CHANNEL_SIZE: usize = 256;

/// Session lifecycle state observable by consumers.
///
/// Inactive -> Starting -> Active -> Stopping -> Inactive, with failed
/// transitions falling back to the state they left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Inactive,
    Starting,
    Active,
    Stopping,
}

/// Events broadcast while a session is live.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// A station transition extracted from the daemon's log stream.
    Lifecycle(LifecycleEvent),
    /// The daemon reported `isRunning=false` while the session was
    /// believed active. Emitted exactly once; the state machine is
    /// forced to Inactive.
    UnexpectedTermination,
    /// One polling cycle failed; the next cycle retries.
    PollDegraded { message: String },
}

/// The main entry point for consumers.
///
/// Cheaply cloneable via `Arc`. Owns the lifecycle state machine, the
/// configuration form, and the background polling task.
#[derive(Clone)]
pub struct SessionController {
    inner: Arc<Inner>,
}

struct Inner {
    client: DaemonClient,
    settings: PollerSettings,
    state: watch::Sender<SessionState>,
    status: watch::Sender<Option<StatusView>>,
    events: broadcast::Sender<SessionEvent>,
    form: Mutex<ConfigForm>,
    receipt: Mutex<Option<StartReceipt>>,
    poller: AsyncMutex<Option<PollerHandle>>,
}

struct PollerHandle {
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl SessionController {
    pub fn new(client: DaemonClient, settings: PollerSettings) -> Self {
        let (state, _) = watch::channel(SessionState::Inactive);
        let (status, _) = watch::channel(None);
        let (events, _) = broadcast::channel(EVENT_CHANNEL_SIZE);

        Self {
            inner: Arc::new(Inner {
                client,
                settings,
                state,
                status,
                events,
                form: Mutex::new(ConfigForm::new()),
                receipt: Mutex::new(None),
                poller: AsyncMutex::new(None),
            }),
        }
    }

    /// The daemon client this controller talks through.
    pub fn client(&self) -> &DaemonClient {
        &self.inner.client
    }

    // ── State observation ────────────────────────────────────────

    /// Subscribe to lifecycle state changes.
    pub fn state(&self) -> watch::Receiver<SessionState> {
        self.inner.state.subscribe()
    }

    pub fn current_state(&self) -> SessionState {
        *self.inner.state.borrow()
    }

    /// Subscribe to the reconciled per-cycle view.
    pub fn status(&self) -> watch::Receiver<Option<StatusView>> {
        self.inner.status.subscribe()
    }

    /// Subscribe to the session event stream.
    pub fn events(&self) -> broadcast::Receiver<SessionEvent> {
        self.inner.events.subscribe()
    }

    /// Process identifiers from the most recent successful start.
    pub fn receipt(&self) -> Option<StartReceipt> {
        lock(&self.inner.receipt).clone()
    }

    /// Run a closure against the configuration form.
    pub fn with_form<R>(&self, f: impl FnOnce(&mut ConfigForm) -> R) -> R {
        f(&mut lock(&self.inner.form))
    }

    // ── Lifecycle transitions ────────────────────────────────────

    /// Start a session with the given configuration.
    ///
    /// Validation runs first and a rejected configuration never reaches
    /// the wire. On success the state machine moves to Active and the
    /// poller begins; on any failure it falls back to Inactive with the
    /// daemon's error surfaced verbatim.
    pub async fn start(&self, config: HotspotConfig) -> Result<StartReceipt, CoreError> {
        if self.current_state() != SessionState::Inactive {
            return Err(CoreError::AlreadyActive);
        }
        if let Err(errors) = form::validate(&config) {
            return Err(CoreError::ValidationFailed { errors });
        }

        let _ = self.inner.state.send(SessionState::Starting);

        match self.inner.client.start(&config).await {
            Ok(receipt) => {
                *lock(&self.inner.receipt) = Some(receipt.clone());
                let _ = self.inner.state.send(SessionState::Active);
                self.spawn_poller().await;
                info!(ssid = %config.ssid, "hotspot session started");
                Ok(receipt)
            }
            Err(e) => {
                let _ = self.inner.state.send(SessionState::Inactive);
                Err(e.into())
            }
        }
    }

    /// Stop the active session.
    ///
    /// Operator confirmation is the caller's responsibility; stopping is
    /// irreversible. On success the poller is halted (discarding its
    /// rate baseline) and the state machine returns to Inactive. On
    /// failure the session remains Active.
    pub async fn stop(&self) -> Result<(), CoreError> {
        if self.current_state() != SessionState::Active {
            return Err(CoreError::NotActive);
        }

        let _ = self.inner.state.send(SessionState::Stopping);

        match self.inner.client.stop().await {
            Ok(()) => {
                self.halt_poller().await;
                *lock(&self.inner.receipt) = None;
                let _ = self.inner.state.send(SessionState::Inactive);
                let _ = self.inner.status.send(None);
                info!("hotspot session stopped");
                Ok(())
            }
            Err(e) => {
                // The daemon still runs; keep the session live.
                let _ = self.inner.state.send(SessionState::Active);
                Err(e.into())
            }
        }
    }

    /// Adopt an already-running daemon session, if there is one.
    ///
    /// Queries status once; when the daemon reports running, the
    /// reported configuration is restored into the form, the state
    /// machine moves straight to Active and polling begins -- no fresh
    /// start request is issued. Returns whether a session was adopted.
    pub async fn attach(&self) -> Result<bool, CoreError> {
        if self.current_state() != SessionState::Inactive {
            return Ok(true);
        }

        let snapshot = StatusSnapshot::from(self.inner.client.status().await?);
        if !snapshot.is_running {
            return Ok(false);
        }

        if let Some(ref config) = snapshot.config {
            self.with_form(|f| f.restore(config));
        }
        let _ = self.inner.state.send(SessionState::Active);
        self.spawn_poller().await;
        info!("reattached to running hotspot session");
        Ok(true)
    }

    /// Cancel polling and reset local state without touching the
    /// daemon. The remote session, if any, keeps running.
    pub async fn shutdown(&self) {
        self.halt_poller().await;
        let _ = self.inner.state.send(SessionState::Inactive);
        let _ = self.inner.status.send(None);
        debug!("detached from session");
    }

    // ── Poller ownership ─────────────────────────────────────────

    async fn spawn_poller(&self) {
        let mut slot = self.inner.poller.lock().await;

        // Reap a finished poller from a previous session.
        if let Some(old) = slot.take() {
            old.cancel.cancel();
            let _ = old.task.await;
        }

        let cancel = CancellationToken::new();
        let task = tokio::spawn(poll_loop(
            self.inner.client.clone(),
            self.inner.settings.clone(),
            self.inner.state.clone(),
            self.inner.status.clone(),
            self.inner.events.clone(),
            cancel.clone(),
        ));
        *slot = Some(PollerHandle { cancel, task });
    }

    /// Cancel the polling task and wait for it to wind down. Repeated
    /// calls are a no-op; an in-flight fetch completes and its result
    /// is discarded.
    async fn halt_poller(&self) {
        let mut slot = self.inner.poller.lock().await;
        if let Some(handle) = slot.take() {
            handle.cancel.cancel();
            let _ = handle.task.await;
        }
    }
}

/// Lock a std mutex, tolerating poisoning (the protected data has no
/// invariants a panicked writer could break mid-update).
fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
