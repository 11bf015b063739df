use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartnerStatus {
    Active,
    Inactive,
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PartnerType {
    Umbrella,
    SubPartner,
}

#[derive(Debug, Clone, Serialize)]
pub struct Partner {
    pub id: String,
    /// Contact person.
    pub name: String,
    pub company_name: String,
    pub email: String,
    pub status: PartnerStatus,
    pub partner_type: PartnerType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_partner_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub total_orders: u32,
    pub total_revenue: f64,
    pub commission_rate: f64,
}

impl Partner {
    pub fn commission_owed(&self) -> f64 {
        commission(self.total_revenue, self.commission_rate)
    }

    pub fn is_umbrella(&self) -> bool {
        self.partner_type == PartnerType::Umbrella
    }
}

/// revenue x rate%, rounded to cents.
pub fn commission(revenue: f64, rate_percent: f64) -> f64 {
    (revenue * rate_percent).round() / 100.0
}
