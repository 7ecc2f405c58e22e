use std::sync::RwLock;

use crate::domain::errors::DomainError;
use crate::domain::ports::{Entity, Store};

/// In-memory adapter for the store port: an ordered `Vec` behind an
/// `RwLock`. Insertion order is what the list endpoints expose. One store is
/// created per resource at startup and injected into its manager.
pub struct MemoryStore<T> {
    entities: RwLock<Vec<T>>,
}

impl<T> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            entities: RwLock::new(Vec::new()),
        }
    }
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Store<T> for MemoryStore<T> {
    fn insert(&self, entity: T) -> Result<(), DomainError> {
        self.entities.write().map_err(poisoned)?.push(entity);
        Ok(())
    }

    fn find(&self, id: &str) -> Result<Option<T>, DomainError> {
        let entities = self.entities.read().map_err(poisoned)?;
        Ok(entities.iter().find(|entity| entity.id() == id).cloned())
    }

    fn replace(&self, entity: T) -> Result<bool, DomainError> {
        let mut entities = self.entities.write().map_err(poisoned)?;
        match entities
            .iter()
            .position(|existing| existing.id() == entity.id())
        {
            Some(index) => {
                entities[index] = entity;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn remove(&self, id: &str) -> Result<bool, DomainError> {
        let mut entities = self.entities.write().map_err(poisoned)?;
        match entities.iter().position(|entity| entity.id() == id) {
            Some(index) => {
                entities.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn list(&self) -> Result<Vec<T>, DomainError> {
        Ok(self.entities.read().map_err(poisoned)?.clone())
    }
}

fn poisoned<E>(_: E) -> DomainError {
    DomainError::Internal("store lock poisoned".to_string())
}
