// In-memory backing store. Everything here lives for the process lifetime only.
pub mod seed;

use std::collections::HashMap;

use chrono::{DateTime, Datelike, Utc};

use crate::error::AppError;
use crate::models::financial::{FinancialReport, PayoutHistoryEntry, PayoutRecord};
use crate::models::notification::NotificationFeed;
use crate::models::order::Order;
use crate::models::partner::Partner;
use crate::models::product::Product;
use crate::models::settings::{ApiActivity, ApiKey};

#[derive(Debug, Default)]
pub struct Store {
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
    pub partners: Vec<Partner>,
    pub payouts: Vec<PayoutRecord>,
    /// Keyed by partner id.
    pub payout_history: HashMap<String, Vec<PayoutHistoryEntry>>,
    pub notifications: NotificationFeed,
    /// Keyed by user id.
    pub api_keys: HashMap<String, ApiKey>,
    pub api_activity: Vec<ApiActivity>,
    product_seq: u32,
    order_seq: u32,
    partner_seq: u32,
}

impl Store {
    pub fn seeded(now: DateTime<Utc>) -> Self {
        let products = seed::products();
        let orders = seed::orders();
        let partners = seed::partners();

        let product_seq = max_suffix(products.iter().map(|p| p.id.as_str()));
        let order_seq = max_suffix(orders.iter().map(|o| o.id.as_str()));
        let partner_seq = max_suffix(partners.iter().map(|p| p.id.as_str()));

        Self {
            products,
            orders,
            partners,
            payouts: seed::payouts(),
            payout_history: HashMap::from([("PART-001".to_string(), seed::payout_history())]),
            notifications: seed::notifications(now),
            api_keys: HashMap::new(),
            api_activity: seed::api_activity(),
            product_seq,
            order_seq,
            partner_seq,
        }
    }

    // ---- products ----

    pub fn next_product_id(&mut self) -> String {
        self.product_seq += 1;
        format!("PROD-{:03}", self.product_seq)
    }

    pub fn insert_product(&mut self, product: Product) {
        self.products.insert(0, product);
    }

    pub fn product(&self, id: &str) -> Result<&Product, AppError> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::not_found("Product not found"))
    }

    pub fn product_mut(&mut self, id: &str) -> Result<&mut Product, AppError> {
        self.products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::not_found("Product not found"))
    }

    // ---- orders ----

    pub fn next_order_id(&mut self, now: DateTime<Utc>) -> String {
        self.order_seq += 1;
        format!("ORD-{}-{:03}", now.year(), self.order_seq)
    }

    pub fn insert_order(&mut self, order: Order) {
        self.orders.insert(0, order);
    }

    pub fn order(&self, id: &str) -> Result<&Order, AppError> {
        self.orders
            .iter()
            .find(|o| o.id == id)
            .ok_or_else(|| AppError::not_found("Order not found"))
    }

    pub fn order_mut(&mut self, id: &str) -> Result<&mut Order, AppError> {
        self.orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| AppError::not_found("Order not found"))
    }

    /// Source partner (company name) of the product an order was placed for.
    pub fn order_source_partner(&self, order: &Order) -> Option<&str> {
        self.products
            .iter()
            .find(|p| p.id == order.product_id)
            .map(|p| p.source_partner.as_str())
    }

    // ---- partners ----

    pub fn next_partner_id(&mut self) -> String {
        self.partner_seq += 1;
        format!("PART-{:03}", self.partner_seq)
    }

    /// New partners start with a pending payout and no payout history.
    pub fn insert_partner(&mut self, partner: Partner) -> Result<(), AppError> {
        if let Some(parent_id) = &partner.parent_partner_id {
            let parent = self.partner(parent_id)?;
            if !parent.is_umbrella() {
                return Err(AppError::validation(format!(
                    "Parent partner {parent_id} is not an umbrella partner"
                )));
            }
        }
        self.payouts.push(PayoutRecord::pending(partner.id.clone()));
        self.partners.insert(0, partner);
        Ok(())
    }

    pub fn partner(&self, id: &str) -> Result<&Partner, AppError> {
        self.partners
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::not_found("Partner not found"))
    }

    pub fn sub_partners_of<'a>(&'a self, parent_id: &'a str) -> impl Iterator<Item = &'a Partner> + 'a {
        self.partners
            .iter()
            .filter(move |p| p.parent_partner_id.as_deref() == Some(parent_id))
    }

    // ---- financials ----

    pub fn financial_reports(&self) -> Vec<FinancialReport> {
        self.payouts
            .iter()
            .filter_map(|payout| {
                let partner = self.partners.iter().find(|p| p.id == payout.partner_id)?;
                Some(FinancialReport::build(partner, payout))
            })
            .collect()
    }

    pub fn financial_report(&self, partner_id: &str) -> Result<FinancialReport, AppError> {
        let partner = self.partner(partner_id)?;
        let payout = self.payout(partner_id)?;
        Ok(FinancialReport::build(partner, payout))
    }

    pub fn payout(&self, partner_id: &str) -> Result<&PayoutRecord, AppError> {
        self.payouts
            .iter()
            .find(|r| r.partner_id == partner_id)
            .ok_or_else(|| AppError::not_found("Financial report not found"))
    }

    pub fn payout_mut(&mut self, partner_id: &str) -> Result<&mut PayoutRecord, AppError> {
        self.payouts
            .iter_mut()
            .find(|r| r.partner_id == partner_id)
            .ok_or_else(|| AppError::not_found("Financial report not found"))
    }
}

fn max_suffix<'a>(ids: impl Iterator<Item = &'a str>) -> u32 {
    ids.filter_map(|id| id.rsplit('-').next()?.parse::<u32>().ok())
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::partner::{PartnerStatus, PartnerType};

    fn partner(id: &str, parent: Option<&str>) -> Partner {
        Partner {
            id: id.into(),
            name: "Contact".into(),
            company_name: format!("{id} Ltd"),
            email: "c@example.com".into(),
            status: PartnerStatus::Pending,
            partner_type: if parent.is_some() { PartnerType::SubPartner } else { PartnerType::Umbrella },
            parent_partner_id: parent.map(Into::into),
            created_at: Utc::now(),
            total_orders: 0,
            total_revenue: 0.0,
            commission_rate: 8.0,
        }
    }

    #[test]
    fn ids_continue_after_seeded_records() {
        let mut store = Store::seeded(Utc::now());
        assert_eq!(store.next_product_id(), "PROD-006");
        assert_eq!(store.next_partner_id(), "PART-004");
        let now = Utc::now();
        assert_eq!(store.next_order_id(now), format!("ORD-{}-004", now.year()));
    }

    #[test]
    fn seeded_invariants_hold() {
        let store = Store::seeded(Utc::now());
        for p in &store.partners {
            if let Some(parent) = &p.parent_partner_id {
                assert!(store.partner(parent).unwrap().is_umbrella());
            }
        }
        assert_eq!(store.financial_reports().len(), 3);
        assert_eq!(store.notifications.unread_count(), 3);
    }

    #[test]
    fn sub_partner_needs_existing_umbrella_parent() {
        let mut store = Store::seeded(Utc::now());
        let missing = store.insert_partner(partner("PART-090", Some("PART-404")));
        assert!(matches!(missing, Err(AppError::NotFound(_))));
        let nested = store.insert_partner(partner("PART-091", Some("PART-003")));
        assert!(matches!(nested, Err(AppError::ValidationError(_))));
        store.insert_partner(partner("PART-092", Some("PART-002"))).unwrap();
        assert_eq!(store.sub_partners_of("PART-002").count(), 1);
    }

    #[test]
    fn onboarded_partner_gets_a_pending_report() {
        let mut store = Store::seeded(Utc::now());
        store.insert_partner(partner("PART-050", None)).unwrap();
        let report = store.financial_report("PART-050").unwrap();
        assert_eq!(report.commission_owed, 0.0);
        assert!(report.last_payout_date.is_none());
    }
}
