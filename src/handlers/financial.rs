use axum::{extract::{Path, State}, Extension, Json};
use chrono::Utc;
use tracing::{info, instrument};

use crate::auth::roles::{Section, UserRole};
use crate::dtos::financial::{FinancialSummary, FinancialsResponse};
use crate::error::AppError;
use crate::middleware::auth::AuthContext;
use crate::models::financial::FinancialReport;
use crate::models::notification::NotificationType;
use crate::state::AppState;

// GET /financials
#[instrument(skip(state, auth))]
pub async fn get_financials(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<FinancialsResponse>, AppError> {
    auth.require(Section::Financials)?;

    let store = state.store.read().await;
    if auth.role == UserRole::PartnerAdmin {
        let partner_id = auth.own_partner_id()?;
        return Ok(Json(FinancialsResponse::Partner {
            report: store.financial_report(partner_id)?,
            payout_history: store.payout_history.get(partner_id).cloned().unwrap_or_default(),
        }));
    }

    let reports = store.financial_reports();
    Ok(Json(FinancialsResponse::Platform {
        summary: FinancialSummary::from_reports(&reports),
        reports,
    }))
}

// POST /financials/:partner_id/mark-paid - pending -> paid, no way back
#[instrument(skip(state, auth))]
pub async fn mark_payout_paid(
    Path(partner_id): Path<String>,
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<FinancialReport>, AppError> {
    auth.require(Section::Financials)?;
    auth.require_role(UserRole::O2SuperAdmin, "mark payouts as paid")?;

    let mut store = state.store.write().await;
    store.payout_mut(&partner_id)?.mark_paid(Utc::now().date_naive())?;
    let report = store.financial_report(&partner_id)?;
    store.notifications.push(
        "Commission Payout Complete",
        format!("Commission payout processed for {}", report.partner_name),
        NotificationType::Success,
    );

    info!(%partner_id, amount = report.commission_owed, "Payout marked as paid");
    Ok(Json(report))
}
