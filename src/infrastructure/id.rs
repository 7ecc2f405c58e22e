use uuid::Uuid;

use crate::domain::ports::IdGenerator;

/// Random v4 UUIDs rendered as opaque id strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
