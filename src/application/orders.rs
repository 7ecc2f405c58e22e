use serde_json::Value;

use crate::domain::errors::DomainError;
use crate::domain::order::{Order, OrderFields, OrderStatus};
use crate::domain::ports::{IdGenerator, Store};
use crate::domain::validate;

const REQUIRED_PROPERTIES: [&str; 3] = ["deliverTo", "mobileNumber", "dishes"];

/// Manager for the order collection. On top of field validation, orders
/// carry the status lifecycle: created pending, frozen once delivered,
/// deletable only while pending.
pub struct OrderService<S, G> {
    store: S,
    ids: G,
}

impl<S: Store<Order>, G: IdGenerator> OrderService<S, G> {
    pub fn new(store: S, ids: G) -> Self {
        Self { store, ids }
    }

    pub fn list(&self) -> Result<Vec<Order>, DomainError> {
        self.store.list()
    }

    pub fn create(&self, data: &Value) -> Result<Order, DomainError> {
        validate::require_properties("Order", data, &REQUIRED_PROPERTIES)?;
        let order = Order::new(self.ids.next_id(), decode_fields(data)?);
        self.store.insert(order.clone())?;
        Ok(order)
    }

    pub fn read(&self, id: &str) -> Result<Order, DomainError> {
        self.store.find(id)?.ok_or_else(|| not_found(id))
    }

    /// Guards run in order: existence, body-id match, field validation,
    /// status transition. The first failure aborts the update and leaves the
    /// stored order untouched.
    pub fn update(&self, id: &str, data: &Value) -> Result<Order, DomainError> {
        let mut order = self.read(id)?;
        validate::ensure_matching_id("Order", data, id)?;
        validate::require_properties("Order", data, &REQUIRED_PROPERTIES)?;
        let status = next_status(&order, data)?;
        order.apply(decode_fields(data)?, status);
        if !self.store.replace(order.clone())? {
            return Err(not_found(id));
        }
        Ok(order)
    }

    pub fn delete(&self, id: &str) -> Result<(), DomainError> {
        let order = self.read(id)?;
        if order.status != OrderStatus::Pending {
            return Err(DomainError::Validation(
                "An order cannot be deleted unless it is pending".to_string(),
            ));
        }
        self.store.remove(id)?;
        Ok(())
    }
}

/// The status transition guard: the payload must name one of the four known
/// statuses, and an order that has reached "delivered" is immutable.
fn next_status(order: &Order, data: &Value) -> Result<OrderStatus, DomainError> {
    let requested = data.get("status").and_then(Value::as_str).unwrap_or("");
    if requested.is_empty() {
        return Err(unknown_status());
    }
    if order.status == OrderStatus::Delivered {
        return Err(DomainError::Validation(
            "A delivered order cannot be changed".to_string(),
        ));
    }
    OrderStatus::parse(requested).ok_or_else(unknown_status)
}

fn unknown_status() -> DomainError {
    DomainError::Validation(
        "Order must have a status of pending, preparing, out-for-delivery, delivered".to_string(),
    )
}

fn not_found(id: &str) -> DomainError {
    DomainError::NotFound(format!("Order does not exist: {id}"))
}

fn decode_fields(data: &Value) -> Result<OrderFields, DomainError> {
    serde_json::from_value(data.clone())
        .map_err(|err| DomainError::Validation(format!("Order payload is invalid: {err}")))
}
