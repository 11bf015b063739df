use serde::Serialize;

use crate::models::financial::{FinancialReport, PayoutHistoryEntry, PayoutStatus};

#[derive(Debug, Serialize, PartialEq)]
pub struct FinancialSummary {
    pub total_pending_payouts: f64,
    pub total_revenue: f64,
    pub total_commission: f64,
}

impl FinancialSummary {
    pub fn from_reports(reports: &[FinancialReport]) -> Self {
        let total_pending_payouts = reports
            .iter()
            .filter(|r| r.payout_status == PayoutStatus::Pending)
            .map(|r| r.commission_owed)
            .sum();
        Self {
            total_pending_payouts,
            total_revenue: reports.iter().map(|r| r.revenue).sum(),
            total_commission: reports.iter().map(|r| r.commission_owed).sum(),
        }
    }
}

/// Platform view for the Super Admin, own view for a Partner Admin.
#[derive(Debug, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum FinancialsResponse {
    Platform {
        summary: FinancialSummary,
        reports: Vec<FinancialReport>,
    },
    Partner {
        report: FinancialReport,
        payout_history: Vec<PayoutHistoryEntry>,
    },
}
