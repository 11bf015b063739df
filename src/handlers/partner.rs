use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use chrono::Utc;
use tracing::{info, instrument};

use crate::auth::roles::{Section, UserRole};
use crate::dtos::partner::{OnboardPartnerRequest, PartnerDetailResponse, PartnerFilter, PartnerQuery};
use crate::error::AppError;
use crate::middleware::auth::AuthContext;
use crate::models::notification::NotificationType;
use crate::models::partner::{Partner, PartnerStatus, PartnerType};
use crate::state::AppState;

const UMBRELLA_DEFAULT_RATE: f64 = 12.0;
const SUB_PARTNER_DEFAULT_RATE: f64 = 8.0;

// GET /partners - Super Admin sees everyone, Partner Manager the umbrella partners
#[instrument(skip(state, auth))]
pub async fn get_partners(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Query(query): Query<PartnerQuery>,
) -> Result<Json<Vec<Partner>>, AppError> {
    auth.require(Section::Partners)?;
    let filter = PartnerFilter::from_query(&query)?;
    let umbrella_only = auth.role == UserRole::O2PartnerManager;

    let store = state.store.read().await;
    let partners = store
        .partners
        .iter()
        .filter(|p| !umbrella_only || p.is_umbrella())
        .filter(|p| filter.matches(p))
        .cloned()
        .collect();

    Ok(Json(partners))
}

// GET /partners/:id
pub async fn get_partner(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<PartnerDetailResponse>, AppError> {
    auth.require(Section::Partners)?;

    let store = state.store.read().await;
    let partner = store.partner(&id)?.clone();
    if auth.role == UserRole::O2PartnerManager && !partner.is_umbrella() {
        return Err(AppError::not_found("Partner not found"));
    }
    let sub_partners = store.sub_partners_of(&id).cloned().collect();

    Ok(Json(PartnerDetailResponse {
        commission_owed: partner.commission_owed(),
        partner,
        sub_partners,
    }))
}

// POST /partners - Onboard an umbrella partner
#[instrument(skip(state, auth, payload))]
pub async fn onboard_partner(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(payload): Json<OnboardPartnerRequest>,
) -> Result<(StatusCode, Json<Partner>), AppError> {
    auth.require(Section::Partners)?;
    let partner = onboard(&state, payload, PartnerType::Umbrella, None).await?;
    Ok((StatusCode::CREATED, Json(partner)))
}

// GET /sub-partners - Partner Admin's own sub-partners
#[instrument(skip(state, auth))]
pub async fn get_sub_partners(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Query(query): Query<PartnerQuery>,
) -> Result<Json<Vec<Partner>>, AppError> {
    auth.require(Section::SubPartners)?;
    let parent_id = auth.own_partner_id()?;
    let filter = PartnerFilter::from_query(&query)?;

    let store = state.store.read().await;
    let partners = store
        .sub_partners_of(parent_id)
        .filter(|p| filter.matches(p))
        .cloned()
        .collect();

    Ok(Json(partners))
}

// POST /sub-partners - Onboard a sub-partner under the caller's partner
#[instrument(skip(state, auth, payload))]
pub async fn onboard_sub_partner(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(payload): Json<OnboardPartnerRequest>,
) -> Result<(StatusCode, Json<Partner>), AppError> {
    auth.require(Section::SubPartners)?;
    let parent_id = auth.own_partner_id()?.to_string();
    let partner = onboard(&state, payload, PartnerType::SubPartner, Some(parent_id)).await?;
    Ok((StatusCode::CREATED, Json(partner)))
}

async fn onboard(
    state: &AppState,
    payload: OnboardPartnerRequest,
    partner_type: PartnerType,
    parent_partner_id: Option<String>,
) -> Result<Partner, AppError> {
    payload.validate()?;
    let default_rate = match partner_type {
        PartnerType::Umbrella => UMBRELLA_DEFAULT_RATE,
        PartnerType::SubPartner => SUB_PARTNER_DEFAULT_RATE,
    };

    let mut store = state.store.write().await;
    let partner = Partner {
        id: store.next_partner_id(),
        name: payload.contact_name.trim().to_string(),
        company_name: payload.company_name.trim().to_string(),
        email: payload.email.trim().to_string(),
        status: PartnerStatus::Pending,
        partner_type,
        parent_partner_id,
        created_at: Utc::now(),
        total_orders: 0,
        total_revenue: 0.0,
        commission_rate: payload.commission_rate.unwrap_or(default_rate),
    };
    store.insert_partner(partner.clone())?;
    store.notifications.push(
        "Partner Onboarded",
        format!("{} has been successfully onboarded", partner.company_name),
        NotificationType::Success,
    );

    info!(partner_id = %partner.id, ?partner_type, "Partner onboarded");
    Ok(partner)
}
