use serde_json::Value;

use crate::domain::dish::{Dish, DishFields};
use crate::domain::errors::DomainError;
use crate::domain::ports::{IdGenerator, Store};
use crate::domain::validate;

const REQUIRED_PROPERTIES: [&str; 4] = ["name", "description", "price", "image_url"];

/// Manager for the dish collection. Dishes have no lifecycle beyond field
/// validation: they are created, listed, read, and updated, never deleted.
pub struct DishService<S, G> {
    store: S,
    ids: G,
}

impl<S: Store<Dish>, G: IdGenerator> DishService<S, G> {
    pub fn new(store: S, ids: G) -> Self {
        Self { store, ids }
    }

    pub fn list(&self) -> Result<Vec<Dish>, DomainError> {
        self.store.list()
    }

    pub fn create(&self, data: &Value) -> Result<Dish, DomainError> {
        validate::require_properties("Dish", data, &REQUIRED_PROPERTIES)?;
        let dish = Dish::new(self.ids.next_id(), decode_fields(data)?);
        self.store.insert(dish.clone())?;
        Ok(dish)
    }

    pub fn read(&self, id: &str) -> Result<Dish, DomainError> {
        self.store.find(id)?.ok_or_else(|| not_found(id))
    }

    pub fn update(&self, id: &str, data: &Value) -> Result<Dish, DomainError> {
        let mut dish = self.read(id)?;
        validate::ensure_matching_id("Dish", data, id)?;
        validate::require_properties("Dish", data, &REQUIRED_PROPERTIES)?;
        dish.apply(decode_fields(data)?);
        if !self.store.replace(dish.clone())? {
            return Err(not_found(id));
        }
        Ok(dish)
    }
}

fn not_found(id: &str) -> DomainError {
    DomainError::NotFound(format!("Dish does not exist: {id}"))
}

fn decode_fields(data: &Value) -> Result<DishFields, DomainError> {
    serde_json::from_value(data.clone())
        .map_err(|err| DomainError::Validation(format!("Dish payload is invalid: {err}")))
}
