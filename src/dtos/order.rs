use serde::Deserialize;
use serde_json::{Map, Value};

use crate::models::order::OrderStatus;

#[derive(Debug, Deserialize)]
pub struct UpdateOrderRequest {
    pub status: Option<OrderStatus>,
    pub fulfillment_notes: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct OrderQuery {
    pub status: Option<String>,
}

/// Inbound BSS order as pasted into the simulator. Every field is optional and
/// both `snake_case` and `camelCase` keys are accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedOrder {
    pub customer_id: String,
    pub customer_name: String,
    pub product_id: String,
    pub product_name: String,
    pub quantity: u32,
    pub total_amount: f64,
    pub fulfillment_data: Map<String, Value>,
}

impl SimulatedOrder {
    pub fn from_value(value: &Value) -> Self {
        let text = |snake: &str, camel: &str, default: &str| {
            field(value, snake, camel)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .unwrap_or(default)
                .to_string()
        };

        Self {
            customer_id: text("customer_id", "customerId", "CUST-NEW"),
            customer_name: text("customer_name", "customerName", "New Customer"),
            product_id: text("product_id", "productId", "PROD-001"),
            product_name: text("product_name", "productName", "Default Product"),
            quantity: field(value, "quantity", "quantity")
                .and_then(Value::as_u64)
                .filter(|q| *q > 0)
                .and_then(|q| u32::try_from(q).ok())
                .unwrap_or(1),
            total_amount: field(value, "total_amount", "totalAmount")
                .and_then(Value::as_f64)
                .unwrap_or(0.0),
            fulfillment_data: field(value, "fulfillment_data", "fulfillmentData")
                .and_then(Value::as_object)
                .cloned()
                .unwrap_or_default(),
        }
    }
}

fn field<'a>(value: &'a Value, snake: &str, camel: &str) -> Option<&'a Value> {
    value.get(snake).or_else(|| value.get(camel))
}
