//! The UI loop and the store worker.
//!
//! The loop itself is synchronous; store requests are handed to a worker
//! task on a tokio runtime and come back as tagged events. The worker
//! serves one command at a time, so responses arrive in issue order.

use std::io;
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::warn;

use crate::config::Config;
use crate::store::{PersonStore, StoreError};
use crate::ui::app::{App, StoreCommand};
use crate::ui::events::{AppEvent, EventHandler, StoreOp, StoreResponse};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

pub fn run(config: Config, store: Arc<dyn PersonStore>) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let mut app = App::new();
    let events = EventHandler::new(tick_rate);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let (store_tx, store_rx) = mpsc::channel(32);
    runtime.spawn(store_worker(store, store_rx, events.sender()));
    app.set_store_sender(store_tx);
    app.open_list();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::Store {
                generation,
                response,
            }) => app.on_store_event(generation, response),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    runtime.shutdown_background();
    Ok(())
}

async fn store_worker(
    store: Arc<dyn PersonStore>,
    mut rx: mpsc::Receiver<StoreCommand>,
    tx: Sender<AppEvent>,
) {
    while let Some(command) = rx.recv().await {
        let (generation, response) = execute(store.as_ref(), command).await;
        if tx
            .send(AppEvent::Store {
                generation,
                response,
            })
            .is_err()
        {
            break;
        }
    }
}

/// Run one store command to completion and fold the outcome into a
/// response event.
pub async fn execute(store: &dyn PersonStore, command: StoreCommand) -> (u64, StoreResponse) {
    match command {
        StoreCommand::List { generation } => {
            let response = match store.list().await {
                Ok(people) => StoreResponse::Listed { people },
                Err(err) => failed(StoreOp::List, err),
            };
            (generation, response)
        }
        StoreCommand::Get { generation, id } => {
            let response = match store.get(&id).await {
                Ok(person) => StoreResponse::Fetched { person },
                Err(err) => failed(StoreOp::Get, err),
            };
            (generation, response)
        }
        StoreCommand::Create { generation, person } => {
            let response = match store.create(&person).await {
                Ok(person) => StoreResponse::Created { person },
                Err(err) => failed(StoreOp::Create, err),
            };
            (generation, response)
        }
        StoreCommand::Update {
            generation,
            id,
            person,
        } => {
            let response = match store.update(&id, &person).await {
                Ok(()) => StoreResponse::Updated,
                Err(err) => failed(StoreOp::Update, err),
            };
            (generation, response)
        }
        StoreCommand::Delete { generation, id } => {
            let response = match store.delete(&id).await {
                Ok(()) => StoreResponse::Deleted,
                Err(err) => failed(StoreOp::Delete, err),
            };
            (generation, response)
        }
    }
}

fn failed(op: StoreOp, err: StoreError) -> StoreResponse {
    warn!(?op, error = %err, "store request failed");
    StoreResponse::Failed {
        op,
        message: err.to_string(),
    }
}
