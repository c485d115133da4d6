//! Headless mode runner - main event loop without a renderer
//!
//! Reads commands from stdin, runs them through the engine, and forwards
//! every engine event to stdout as NDJSON.

use std::path::PathBuf;

use tokio::sync::broadcast::{self, error::TryRecvError};
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use viewer_app::config::{Settings, StartupSettings};
use viewer_app::{Engine, EngineEvent, Message};
use viewer_core::prelude::*;

use super::command::Command;
use super::HeadlessEvent;

/// What to do once the boot pass is done
#[derive(Debug, Clone, Default)]
pub struct HeadlessOptions {
    pub startup: StartupSettings,
    /// Files offered on the command line
    pub files: Vec<PathBuf>,
    pub index: usize,
    /// Takes precedence over `files`
    pub url: Option<String>,
    /// Answer large-file prompts with "load"
    pub assume_yes: bool,
}

/// Run in headless mode - output JSON events instead of rendering
pub async fn run_headless(settings: Settings, options: HeadlessOptions) -> Result<()> {
    info!("═══════════════════════════════════════════════════════");
    info!("Media viewer starting in HEADLESS mode");
    info!("═══════════════════════════════════════════════════════");

    let mut engine = Engine::new(settings);
    let mut events = engine.subscribe();

    // Spawn headless-specific stdin reader
    let stdin_tx = engine.msg_sender();
    std::thread::spawn(move || {
        spawn_stdin_reader_blocking(stdin_tx);
    });

    engine.startup(options.startup);
    forward_events(&engine, &mut events, options.assume_yes);
    HeadlessEvent::ready(engine.state.view.title()).emit();

    match initial_message(&options) {
        Ok(Some(msg)) => {
            engine.process_message(msg);
            forward_events(&engine, &mut events, options.assume_yes);
        }
        Ok(None) => {}
        Err(e) => {
            error!("Initial load failed: {}", e);
            HeadlessEvent::error(e.to_string(), false).emit();
        }
    }

    let result = headless_event_loop(&mut engine, &mut events, options.assume_yes).await;

    engine.shutdown();
    forward_events(&engine, &mut events, options.assume_yes);

    info!("Media viewer headless mode exiting");
    result
}

/// Main headless event loop
async fn headless_event_loop(
    engine: &mut Engine,
    events: &mut broadcast::Receiver<EngineEvent>,
    assume_yes: bool,
) -> Result<()> {
    loop {
        if engine.should_quit() {
            info!("Quit requested");
            break;
        }

        match engine.msg_rx.recv().await {
            Some(msg) => {
                engine.process_message(msg);
                forward_events(engine, events, assume_yes);
            }
            None => {
                info!("Message channel closed");
                break;
            }
        }
    }

    Ok(())
}

/// The load requested on the command line, if any
fn initial_message(options: &HeadlessOptions) -> Result<Option<Message>> {
    if let Some(url) = &options.url {
        return Ok(Some(Message::LoadUrl { url: url.clone() }));
    }
    if options.files.is_empty() {
        return Ok(None);
    }
    Command::Load {
        paths: options.files.clone(),
        index: options.index,
    }
    .into_message()
    .map(Some)
}

/// Write every queued engine event to stdout and answer the ones the host
/// is responsible for.
fn forward_events(
    engine: &Engine,
    events: &mut broadcast::Receiver<EngineEvent>,
    assume_yes: bool,
) {
    loop {
        let event = match events.try_recv() {
            Ok(event) => event,
            Err(TryRecvError::Lagged(skipped)) => {
                warn!("Headless output lagged, {} events dropped", skipped);
                continue;
            }
            Err(_) => break,
        };

        if let Some(reply) = host_reply(&event, assume_yes) {
            if let Err(e) = engine
                .msg_tx
                .try_send(reply)
                .map_err(|e| Error::channel_send(e.to_string()))
            {
                warn!("Failed to queue host reply: {}", e);
            }
        }

        HeadlessEvent::from_engine(event, &engine.state).emit();
    }
}

/// Feedback a real host would produce on its own: a media element reports
/// metadata once its source is set, and `--assume-yes` accepts prompts.
fn host_reply(event: &EngineEvent, assume_yes: bool) -> Option<Message> {
    match event {
        EngineEvent::ResourceCreated { key, handle } if key.is_playable() => {
            Some(Message::MediaMetadataLoaded {
                key: *key,
                handle: *handle,
            })
        }
        EngineEvent::ConfirmRequested { .. } if assume_yes => Some(Message::ConfirmLargeFile),
        _ => None,
    }
}

/// Spawn stdin reader task that sends commands to message channel (blocking version)
fn spawn_stdin_reader_blocking(msg_tx: mpsc::Sender<Message>) {
    use std::io::BufRead;

    let stdin = std::io::stdin();
    let reader = stdin.lock();

    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                break;
            }
        };

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                warn!("Bad stdin command {:?}: {}", line.trim(), e);
                HeadlessEvent::error(e.to_string(), false).emit();
                continue;
            }
        };

        let quit = command == Command::Quit;
        match command.into_message() {
            Ok(msg) => {
                if msg_tx.blocking_send(msg).is_err() {
                    info!("Engine gone, stdin reader stopping");
                    break;
                }
            }
            Err(e) => {
                warn!("Stdin command failed: {}", e);
                HeadlessEvent::error(e.to_string(), false).emit();
            }
        }

        if quit {
            info!("Stdin: quit requested");
            break;
        }
    }

    info!("Stdin reader exiting");
}
