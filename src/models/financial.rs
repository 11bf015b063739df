use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

use crate::error::AppError;
use crate::models::partner::Partner;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayoutStatus {
    Pending,
    Paid,
}

/// Payout bookkeeping kept per partner; the money figures come from the partner.
#[derive(Debug, Clone)]
pub struct PayoutRecord {
    pub partner_id: String,
    pub payout_status: PayoutStatus,
    pub last_payout_date: Option<NaiveDate>,
}

impl PayoutRecord {
    pub fn pending(partner_id: impl Into<String>) -> Self {
        Self {
            partner_id: partner_id.into(),
            payout_status: PayoutStatus::Pending,
            last_payout_date: None,
        }
    }

    pub fn mark_paid(&mut self, today: NaiveDate) -> Result<(), AppError> {
        if self.payout_status == PayoutStatus::Paid {
            return Err(AppError::conflict(format!(
                "Payout for {} is already paid",
                self.partner_id
            )));
        }
        self.payout_status = PayoutStatus::Paid;
        self.last_payout_date = Some(today);
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FinancialReport {
    pub partner_id: String,
    pub partner_name: String,
    pub orders: u32,
    pub revenue: f64,
    pub commission_owed: f64,
    pub payout_status: PayoutStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_payout_date: Option<NaiveDate>,
}

impl FinancialReport {
    pub fn build(partner: &Partner, payout: &PayoutRecord) -> Self {
        Self {
            partner_id: partner.id.clone(),
            partner_name: partner.company_name.clone(),
            orders: partner.total_orders,
            revenue: partner.total_revenue,
            commission_owed: partner.commission_owed(),
            payout_status: payout.payout_status,
            last_payout_date: payout.last_payout_date,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PayoutHistoryEntry {
    pub period: String,
    pub amount: f64,
    pub status: PayoutStatus,
    pub date: NaiveDate,
}
