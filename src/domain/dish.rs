use serde::Deserialize;

use super::ports::Entity;

/// A menu entry. The id is assigned on creation and never changes; dishes are
/// never deleted through the API.
#[derive(Debug, Clone)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub image_url: String,
}

/// The mutable fields of a dish, decoded from an already-validated payload.
#[derive(Debug, Clone, Deserialize)]
pub struct DishFields {
    pub name: String,
    pub description: String,
    pub price: i64,
    pub image_url: String,
}

impl Dish {
    pub fn new(id: String, fields: DishFields) -> Self {
        Self {
            id,
            name: fields.name,
            description: fields.description,
            price: fields.price,
            image_url: fields.image_url,
        }
    }

    /// Overwrite every mutable field in place. The id is untouched.
    pub fn apply(&mut self, fields: DishFields) {
        self.name = fields.name;
        self.description = fields.description;
        self.price = fields.price;
        self.image_url = fields.image_url;
    }
}

impl Entity for Dish {
    fn id(&self) -> &str {
        &self.id
    }
}
