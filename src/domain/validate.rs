//! Required-property validation shared by the dish and order managers.
//!
//! Payloads arrive as free-form JSON; both managers run the same
//! required-property sweep over them before decoding into typed fields.
//! Every check is a guard clause: the first violation is returned and
//! nothing after it runs.

use serde_json::Value;

use super::errors::DomainError;

/// Checks that every property named in `properties` is present and
/// well-formed on `data`, stopping at the first violation.
///
/// `resource` is the display name used in error messages ("Dish", "Order").
/// A property that is absent, null, or the empty string fails. Two
/// properties get extra scrutiny: `price` must be an integer greater than
/// zero, and `dishes` must be a non-empty array whose elements each carry an
/// integer quantity greater than zero.
pub fn require_properties(
    resource: &str,
    data: &Value,
    properties: &[&str],
) -> Result<(), DomainError> {
    for &property in properties {
        let value = match data.get(property) {
            None | Some(Value::Null) => return Err(missing_property(resource, property)),
            Some(value) => value,
        };
        if matches!(value, Value::String(text) if text.is_empty()) {
            return Err(missing_property(resource, property));
        }
        match property {
            "price" => require_price(value)?,
            "dishes" => require_line_items(value)?,
            _ => {}
        }
    }
    Ok(())
}

/// Rejects a body id that disagrees with the route id. An absent, null, or
/// empty-string body id is ignored.
pub fn ensure_matching_id(
    resource: &str,
    data: &Value,
    route_id: &str,
) -> Result<(), DomainError> {
    let body_id = match data.get("id") {
        None | Some(Value::Null) => return Ok(()),
        Some(Value::String(text)) if text.is_empty() || text == route_id => return Ok(()),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    };
    Err(DomainError::Validation(format!(
        "{resource} id does not match route id. {resource}: {body_id}, Route: {route_id}"
    )))
}

fn missing_property(resource: &str, property: &str) -> DomainError {
    DomainError::Validation(format!("{resource} must include a '{property}'"))
}

fn require_price(value: &Value) -> Result<(), DomainError> {
    if positive_integer(value) {
        Ok(())
    } else {
        Err(DomainError::Validation(
            "Dish must have a price that is an integer greater than 0".to_string(),
        ))
    }
}

fn require_line_items(value: &Value) -> Result<(), DomainError> {
    let items = match value.as_array() {
        Some(items) if !items.is_empty() => items,
        _ => {
            return Err(DomainError::Validation(
                "Order must include at least one dish".to_string(),
            ))
        }
    };
    for (index, item) in items.iter().enumerate() {
        if !item.get("quantity").is_some_and(positive_integer) {
            return Err(DomainError::Validation(format!(
                "Dish {index} must have a quantity that is an integer greater than 0"
            )));
        }
    }
    Ok(())
}

fn positive_integer(value: &Value) -> bool {
    value.as_i64().is_some_and(|number| number > 0)
}
