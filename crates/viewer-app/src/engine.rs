//! Engine - orchestration state shared by every host
//!
//! The Engine owns the TEA state, the message channel, the shutdown signal
//! and the event broadcaster. Hosts feed it messages and redraw from the
//! events it emits.

use tokio::sync::{broadcast, mpsc, watch};
use tokio::task::JoinHandle;
use viewer_core::prelude::*;
use viewer_core::OutputKey;

use crate::config::{Settings, StartupSettings};
use crate::engine_event::EngineEvent;
use crate::handler::UpdateAction;
use crate::message::Message;
use crate::process;
use crate::state::AppState;
use crate::view::ResourceEvent;

/// Lightweight snapshot of state for change detection.
///
/// Captured before message processing, compared after to detect
/// what changed and emit appropriate EngineEvents.
#[derive(Debug, Clone)]
struct StateSnapshot {
    view: OutputKey,
    title: String,
    source_enabled: bool,
    modified: bool,
    notice_count: u64,
    confirm_count: u64,
    export_count: u64,
    text_rendered: u64,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            view: state.view.current(),
            title: state.view.title().to_string(),
            source_enabled: state.source_enabled(),
            modified: state.guard.is_modified(),
            notice_count: state.notice_count,
            confirm_count: state.confirm_count,
            export_count: state.export_count,
            text_rendered: state.text_rendered,
        }
    }
}

/// Orchestration engine for the viewer.
pub struct Engine {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, host input).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Sender for the shutdown signal. Send `true` to initiate shutdown.
    pub shutdown_tx: watch::Sender<bool>,

    /// Receiver for the shutdown signal. Clone for background tasks.
    pub shutdown_rx: watch::Receiver<bool>,

    /// Event broadcaster for hosts
    event_tx: broadcast::Sender<EngineEvent>,
}

impl Engine {
    /// Create a new Engine.
    ///
    /// Must be called inside a tokio runtime (spawns the signal handler).
    pub fn new(settings: Settings) -> Self {
        let state = AppState::with_settings(settings);

        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        spawn_quit_on_signal(msg_tx.clone(), shutdown_rx.clone());

        let (event_tx, _) = broadcast::channel(256);

        Self {
            state,
            msg_tx,
            msg_rx,
            shutdown_tx,
            shutdown_rx,
            event_tx,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.state.settings
    }

    /// Subscribe to engine events.
    ///
    /// If the subscriber falls behind (buffer full), older events are
    /// dropped. Use `broadcast::error::RecvError::Lagged` to detect this.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Suppressed boot pass. Startup flags from config are merged with `cli`.
    pub fn startup(&mut self, cli: StartupSettings) {
        let startup = self.state.settings.startup.merge(cli);
        self.process_message(Message::Boot(startup));
    }

    /// Process a single message through the TEA update cycle and emit
    /// events for what changed.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);

        let host_actions =
            process::process_message(&mut self.state, msg, &self.msg_tx, &self.shutdown_rx);

        let post = StateSnapshot::capture(&self.state);
        let resource_events = self.state.view.take_resource_events();
        self.emit_events(&resource_events, &pre, &post);

        for action in host_actions {
            if let UpdateAction::OpenFilePicker = action {
                self.emit(EngineEvent::FilePickerRequested);
            }
        }
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Initiate shutdown: signal background tasks and notify subscribers.
    pub fn shutdown(&mut self) {
        self.emit(EngineEvent::Shutdown);
        let _ = self.shutdown_tx.send(true);
        info!("Engine shut down");
    }

    /// Emit EngineEvents based on state changes after processing.
    fn emit_events(
        &self,
        resource_events: &[ResourceEvent],
        pre: &StateSnapshot,
        post: &StateSnapshot,
    ) {
        // Handle lifecycle, in the order it happened
        for event in resource_events {
            self.emit(match *event {
                ResourceEvent::Revoked { key, handle } => EngineEvent::ResourceRevoked { key, handle },
                ResourceEvent::Created { key, handle } => EngineEvent::ResourceCreated { key, handle },
            });
        }

        if pre.view != post.view {
            self.emit(EngineEvent::ViewChanged {
                from: pre.view,
                to: post.view,
            });
        }

        if pre.title != post.title {
            self.emit(EngineEvent::TitleChanged {
                title: post.title.clone(),
            });
        }

        if post.text_rendered > pre.text_rendered {
            self.emit(EngineEvent::TextRendered {
                bytes: self.state.last_text_bytes,
            });
        }

        if pre.source_enabled != post.source_enabled {
            self.emit(EngineEvent::SourceEnabled {
                enabled: post.source_enabled,
            });
        }

        if pre.modified != post.modified {
            self.emit(EngineEvent::ModifiedChanged {
                modified: post.modified,
            });
        }

        if post.confirm_count > pre.confirm_count {
            if let Some(dialog) = &self.state.confirm_dialog_state {
                self.emit(EngineEvent::ConfirmRequested {
                    title: dialog.title.clone(),
                    message: dialog.message.clone(),
                });
            }
        }

        if post.notice_count > pre.notice_count {
            if let Some(message) = &self.state.notice {
                self.emit(EngineEvent::Notice {
                    message: message.clone(),
                });
            }
        }

        if post.export_count > pre.export_count {
            if let Some(values) = &self.state.last_export {
                self.emit(EngineEvent::ControlsSnapshot {
                    values: values.clone(),
                });
            }
        }
    }

    /// Emit a single EngineEvent to all subscribers.
    ///
    /// send() returns Err only if there are no receivers -- that's fine,
    /// we don't want to panic or log errors for having no subscribers.
    fn emit(&self, event: EngineEvent) {
        trace!("Engine event: {}", event.event_type());
        let _ = self.event_tx.send(event);
    }
}

// ─────────────────────────────────────────────────────────
// OS signals
// ─────────────────────────────────────────────────────────

/// Turn SIGINT/SIGTERM (Ctrl+C on Windows) into `Message::Quit`.
///
/// The listener ends on its own once the engine shuts down.
fn spawn_quit_on_signal(
    tx: mpsc::Sender<Message>,
    mut shutdown_rx: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::select! {
            result = wait_for_termination() => {
                if result.is_err() {
                    // logged by `context`
                    return;
                }
                info!("Termination signal received, quitting");
                if tx.send(Message::Quit).await.is_err() {
                    debug!("Engine gone before quit could be delivered");
                }
            }
            _ = shutdown_rx.changed() => {
                debug!("Signal listener stopped by shutdown");
            }
        }
    })
}

#[cfg(unix)]
async fn wait_for_termination() -> Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigint = signal(SignalKind::interrupt()).context("Failed to listen for SIGINT")?;
    let mut sigterm = signal(SignalKind::terminate()).context("Failed to listen for SIGTERM")?;

    tokio::select! {
        _ = sigint.recv() => debug!("SIGINT"),
        _ = sigterm.recv() => debug!("SIGTERM"),
    }
    Ok(())
}

#[cfg(windows)]
async fn wait_for_termination() -> Result<()> {
    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for Ctrl+C")?;
    debug!("Ctrl+C");
    Ok(())
}
