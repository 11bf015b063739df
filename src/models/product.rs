use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductStatus {
    PendingReview,
    Approved,
    Rejected,
    Syncing,
    Synced,
    SyncFailed,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::PendingReview => "pending-review",
            ProductStatus::Approved => "approved",
            ProductStatus::Rejected => "rejected",
            ProductStatus::Syncing => "syncing",
            ProductStatus::Synced => "synced",
            ProductStatus::SyncFailed => "sync-failed",
        }
    }

    /// Accepted by the catalog but not yet live in Herakles.
    pub fn awaiting_sync(&self) -> bool {
        matches!(
            self,
            ProductStatus::PendingReview
                | ProductStatus::Approved
                | ProductStatus::Syncing
                | ProductStatus::SyncFailed
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductType {
    Service,
    Hardware,
    Software,
    Subscription,
}

#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    pub price: f64,
    pub status: ProductStatus,
    pub source_partner: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_progress: Option<u8>,
}

impl Product {
    /// Approval hands the product straight to the Herakles sync.
    pub fn approve(&mut self, now: DateTime<Utc>) -> Result<(), AppError> {
        self.require_pending("approved")?;
        self.status = ProductStatus::Syncing;
        self.sync_progress = Some(0);
        self.updated_at = now;
        Ok(())
    }

    pub fn reject(&mut self, now: DateTime<Utc>) -> Result<(), AppError> {
        self.require_pending("rejected")?;
        self.status = ProductStatus::Rejected;
        self.updated_at = now;
        Ok(())
    }

    /// Returns false when the product is no longer syncing and was left alone.
    pub fn advance_sync(&mut self, progress: u8, now: DateTime<Utc>) -> bool {
        if self.status != ProductStatus::Syncing {
            return false;
        }
        self.sync_progress = Some(progress.min(99));
        self.updated_at = now;
        true
    }

    pub fn complete_sync(&mut self, now: DateTime<Utc>) -> bool {
        if self.status != ProductStatus::Syncing {
            return false;
        }
        self.status = ProductStatus::Synced;
        self.sync_progress = Some(100);
        self.updated_at = now;
        true
    }

    fn require_pending(&self, action: &str) -> Result<(), AppError> {
        if self.status != ProductStatus::PendingReview {
            return Err(AppError::conflict(format!(
                "Product {} is {} and cannot be {}",
                self.id,
                self.status.as_str(),
                action
            )));
        }
        Ok(())
    }
}
