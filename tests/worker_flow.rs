//! The store worker's command execution, run against the in-memory store.

mod common;

use common::unsaved_person;
use roster::store::MemoryPersonStore;
use roster::ui::app::StoreCommand;
use roster::ui::events::{StoreOp, StoreResponse};
use roster::ui::runtime::execute;

#[tokio::test]
async fn full_lifecycle_through_commands() {
    let store = MemoryPersonStore::new();

    // Create.
    let (generation, response) = execute(
        &store,
        StoreCommand::Create {
            generation: 1,
            person: unsaved_person("Ann", 30, "female", "555"),
        },
    )
    .await;
    assert_eq!(generation, 1);
    let StoreResponse::Created { person } = response else {
        panic!("expected Created, got {:?}", response);
    };
    let id = person.id.clone().unwrap();

    // List shows it.
    let (_, response) = execute(&store, StoreCommand::List { generation: 1 }).await;
    let StoreResponse::Listed { people } = response else {
        panic!("expected Listed");
    };
    assert_eq!(people.len(), 1);

    // Update.
    let mut changed = person.clone();
    changed.age = 31;
    let (_, response) = execute(
        &store,
        StoreCommand::Update {
            generation: 2,
            id: id.clone(),
            person: changed,
        },
    )
    .await;
    assert_eq!(response, StoreResponse::Updated);

    // Get reflects the update.
    let (_, response) = execute(
        &store,
        StoreCommand::Get {
            generation: 2,
            id: id.clone(),
        },
    )
    .await;
    let StoreResponse::Fetched { person } = response else {
        panic!("expected Fetched");
    };
    assert_eq!(person.age, 31);

    // Delete, then the list is empty again.
    let (_, response) = execute(
        &store,
        StoreCommand::Delete {
            generation: 3,
            id: id.clone(),
        },
    )
    .await;
    assert_eq!(response, StoreResponse::Deleted);

    let (_, response) = execute(&store, StoreCommand::List { generation: 3 }).await;
    assert_eq!(response, StoreResponse::Listed { people: vec![] });
}

#[tokio::test]
async fn failures_carry_the_operation_and_message() {
    let store = MemoryPersonStore::new();

    let (generation, response) = execute(
        &store,
        StoreCommand::Get {
            generation: 7,
            id: "missing".to_string(),
        },
    )
    .await;
    assert_eq!(generation, 7);
    let StoreResponse::Failed { op, message } = response else {
        panic!("expected Failed, got {:?}", response);
    };
    assert_eq!(op, StoreOp::Get);
    assert!(message.contains("missing"));

    let (_, response) = execute(
        &store,
        StoreCommand::Delete {
            generation: 8,
            id: "missing".to_string(),
        },
    )
    .await;
    assert!(matches!(
        response,
        StoreResponse::Failed {
            op: StoreOp::Delete,
            ..
        }
    ));
}
