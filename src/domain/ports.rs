use super::errors::DomainError;

/// An identifiable record held in a store. Stores hand out owned copies, so
/// entities must be cloneable.
pub trait Entity: Clone + Send + Sync + 'static {
    fn id(&self) -> &str;
}

/// Storage capability consumed by the resource managers. Collections are
/// ordered; `list` returns entities in insertion order.
pub trait Store<T: Entity>: Send + Sync + 'static {
    fn insert(&self, entity: T) -> Result<(), DomainError>;
    fn find(&self, id: &str) -> Result<Option<T>, DomainError>;
    /// Swap the stored entity carrying the same id. Returns false when no
    /// such entity exists.
    fn replace(&self, entity: T) -> Result<bool, DomainError>;
    fn remove(&self, id: &str) -> Result<bool, DomainError>;
    fn list(&self) -> Result<Vec<T>, DomainError>;
}

/// Source of fresh opaque entity ids.
pub trait IdGenerator: Send + Sync + 'static {
    fn next_id(&self) -> String;
}
