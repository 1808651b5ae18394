//! In-process implementation of the person store.
//!
//! Used for offline mode and as the store double in tests. Records live in
//! a vector behind a lock; ids are fresh UUIDs assigned on create.

use async_trait::async_trait;
use parking_lot::Mutex;
use uuid::Uuid;

use crate::person::Person;
use crate::store::{PersonStore, StoreError};

#[derive(Default)]
pub struct MemoryPersonStore {
    people: Mutex<Vec<Person>>,
}

impl MemoryPersonStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an existing set of records. Entries without ids get one.
    pub fn seeded(people: Vec<Person>) -> Self {
        let people = people
            .into_iter()
            .map(|mut p| {
                if p.id.is_none() {
                    p.id = Some(Uuid::new_v4().to_string());
                }
                p
            })
            .collect();
        Self {
            people: Mutex::new(people),
        }
    }
}

#[async_trait]
impl PersonStore for MemoryPersonStore {
    async fn list(&self) -> Result<Vec<Person>, StoreError> {
        Ok(self.people.lock().clone())
    }

    async fn get(&self, id: &str) -> Result<Person, StoreError> {
        self.people
            .lock()
            .iter()
            .find(|p| p.id.as_deref() == Some(id))
            .cloned()
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })
    }

    async fn create(&self, person: &Person) -> Result<Person, StoreError> {
        let mut persisted = person.clone();
        persisted.id = Some(Uuid::new_v4().to_string());
        self.people.lock().push(persisted.clone());
        Ok(persisted)
    }

    async fn update(&self, id: &str, person: &Person) -> Result<(), StoreError> {
        let mut people = self.people.lock();
        let Some(slot) = people.iter_mut().find(|p| p.id.as_deref() == Some(id)) else {
            return Err(StoreError::NotFound { id: id.to_string() });
        };
        let mut replacement = person.clone();
        replacement.id = Some(id.to_string());
        *slot = replacement;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut people = self.people.lock();
        let before = people.len();
        people.retain(|p| p.id.as_deref() != Some(id));
        if people.len() == before {
            return Err(StoreError::NotFound { id: id.to_string() });
        }
        Ok(())
    }
}
