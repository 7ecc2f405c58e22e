use serde::Deserialize;

use super::ports::Entity;

/// Lifecycle of an order. "delivered" is terminal: a delivered order can no
/// longer be updated, and only pending orders may be deleted. The three
/// non-terminal statuses may be set in any sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    pub fn parse(value: &str) -> Option<OrderStatus> {
        match value {
            "pending" => Some(OrderStatus::Pending),
            "preparing" => Some(OrderStatus::Preparing),
            "out-for-delivery" => Some(OrderStatus::OutForDelivery),
            "delivered" => Some(OrderStatus::Delivered),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
        }
    }
}

/// One entry in an order's dish list. The dish reference is optional and is
/// not checked against the dish collection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub dish_id: Option<String>,
    pub quantity: i64,
}

#[derive(Debug, Clone)]
pub struct Order {
    pub id: String,
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: OrderStatus,
    pub dishes: Vec<LineItem>,
}

/// The mutable fields of an order, decoded from an already-validated payload.
/// Status is handled separately by the transition guard.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFields {
    pub deliver_to: String,
    pub mobile_number: String,
    pub dishes: Vec<LineItem>,
}

impl Order {
    /// New orders always start out pending, whatever the payload says.
    pub fn new(id: String, fields: OrderFields) -> Self {
        Self {
            id,
            deliver_to: fields.deliver_to,
            mobile_number: fields.mobile_number,
            status: OrderStatus::Pending,
            dishes: fields.dishes,
        }
    }

    pub fn apply(&mut self, fields: OrderFields, status: OrderStatus) {
        self.deliver_to = fields.deliver_to;
        self.mobile_number = fields.mobile_number;
        self.dishes = fields.dishes;
        self.status = status;
    }
}

impl Entity for Order {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_four_statuses() {
        for text in ["pending", "preparing", "out-for-delivery", "delivered"] {
            let status = OrderStatus::parse(text).unwrap();
            assert_eq!(status.as_str(), text);
        }
    }

    #[test]
    fn rejects_unknown_status() {
        assert!(OrderStatus::parse("cancelled").is_none());
        assert!(OrderStatus::parse("").is_none());
        assert!(OrderStatus::parse("Pending").is_none());
    }

    #[test]
    fn new_order_is_pending() {
        let order = Order::new(
            "1".to_string(),
            OrderFields {
                deliver_to: "123 Main".to_string(),
                mobile_number: "555-1234".to_string(),
                dishes: vec![LineItem {
                    dish_id: Some("d1".to_string()),
                    quantity: 2,
                }],
            },
        );
        assert_eq!(order.status, OrderStatus::Pending);
    }
}
