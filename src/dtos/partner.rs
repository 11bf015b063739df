use serde::{Deserialize, Serialize};

use crate::dtos::{contains_ci, parse_enum_filter};
use crate::error::AppError;
use crate::models::partner::{Partner, PartnerStatus};

#[derive(Debug, Deserialize)]
pub struct OnboardPartnerRequest {
    pub company_name: String,
    pub contact_name: String,
    pub email: String,
    pub commission_rate: Option<f64>,
}

impl OnboardPartnerRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.company_name.trim().is_empty() {
            return Err(AppError::validation("Company name required"));
        }
        if self.contact_name.trim().is_empty() {
            return Err(AppError::validation("Contact name required"));
        }
        if self.email.trim().is_empty() {
            return Err(AppError::validation("Email required"));
        }
        if let Some(rate) = self.commission_rate {
            if !(0.0..=100.0).contains(&rate) {
                return Err(AppError::validation("Commission rate must be between 0 and 100"));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PartnerQuery {
    pub search: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Default)]
pub struct PartnerFilter {
    pub search: String,
    pub status: Option<PartnerStatus>,
}

impl PartnerFilter {
    pub fn from_query(query: &PartnerQuery) -> Result<Self, AppError> {
        Ok(Self {
            search: query.search.as_deref().unwrap_or_default().trim().to_string(),
            status: parse_enum_filter(query.status.as_deref(), "status")?,
        })
    }

    /// Search covers the company and the contact name.
    pub fn matches(&self, partner: &Partner) -> bool {
        (contains_ci(&partner.company_name, &self.search) || contains_ci(&partner.name, &self.search))
            && self.status.map_or(true, |s| partner.status == s)
    }
}

#[derive(Debug, Serialize)]
pub struct PartnerDetailResponse {
    #[serde(flatten)]
    pub partner: Partner,
    pub commission_owed: f64,
    pub sub_partners: Vec<Partner>,
}
