use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    New,
    Processing,
    Fulfilled,
    Cancelled,
}

#[derive(Debug, Clone, Serialize)]
pub struct Order {
    pub id: String,
    pub customer_id: String,
    pub customer_name: String,
    pub product_id: String,
    pub product_name: String,
    pub quantity: u32,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Whatever BSS sent along (shipping address, activation keys, ...).
    pub fulfillment_data: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_id: Option<String>,
}

impl Order {
    // Any status may follow any other; the operator picks it.
    pub fn set_status(&mut self, status: OrderStatus, now: DateTime<Utc>) {
        self.status = status;
        self.updated_at = now;
    }

    pub fn set_notes(&mut self, notes: String, now: DateTime<Utc>) {
        self.fulfillment_notes = Some(notes);
        self.updated_at = now;
    }

    pub fn counts_toward_sales(&self) -> bool {
        self.status != OrderStatus::Cancelled
    }
}
