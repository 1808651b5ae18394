//! Shared test utilities and mock infrastructure.

#![allow(dead_code)]

pub mod mock_server;

use roster::person::Person;
use roster::ui::app::{App, StoreCommand};
use tokio::sync::mpsc;

/// Build a person record with an assigned id.
pub fn person(id: &str, name: &str, age: u32, gender: &str, mobile: &str) -> Person {
    Person {
        id: Some(id.to_string()),
        name: name.to_string(),
        age,
        gender: gender.to_string(),
        mobile_number: mobile.to_string(),
    }
}

/// Build a person record the backend has not seen yet.
pub fn unsaved_person(name: &str, age: u32, gender: &str, mobile: &str) -> Person {
    Person {
        id: None,
        name: name.to_string(),
        age,
        gender: gender.to_string(),
        mobile_number: mobile.to_string(),
    }
}

/// An `App` wired to a capturing store-command channel.
///
/// Commands the app issues land in the receiver; store responses are fed
/// back through `App::on_store_event`. The channel is the collaborator
/// boundary, so asserting on it is asserting on store traffic.
pub fn make_app() -> (App, mpsc::Receiver<StoreCommand>) {
    let (tx, rx) = mpsc::channel(16);
    let mut app = App::new();
    app.set_store_sender(tx);
    (app, rx)
}

/// Drain every command currently sitting in the channel.
pub fn drain(rx: &mut mpsc::Receiver<StoreCommand>) -> Vec<StoreCommand> {
    let mut commands = Vec::new();
    while let Ok(command) = rx.try_recv() {
        commands.push(command);
    }
    commands
}
