// Fixed sample data loaded on every start.
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde_json::{json, Map, Value};

use crate::models::financial::{PayoutHistoryEntry, PayoutRecord, PayoutStatus};
use crate::models::notification::{NotificationFeed, NotificationType};
use crate::models::order::{Order, OrderStatus};
use crate::models::partner::{Partner, PartnerStatus, PartnerType};
use crate::models::product::{Product, ProductStatus, ProductType};
use crate::models::settings::ApiActivity;

fn ts(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_default()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn data(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    description: &str,
    product_type: ProductType,
    price: f64,
    status: ProductStatus,
    source_partner: &str,
    created_at: &str,
    updated_at: &str,
    sync_progress: Option<u8>,
) -> Product {
    Product {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        product_type,
        price,
        status,
        source_partner: source_partner.into(),
        created_at: ts(created_at),
        updated_at: ts(updated_at),
        sync_progress,
    }
}

pub fn products() -> Vec<Product> {
    vec![
        product(
            "PROD-001",
            "O2 Business Connect Pro",
            "Enterprise connectivity solution with advanced security features",
            ProductType::Service,
            299.99,
            ProductStatus::Synced,
            "TechPartner Solutions",
            "2024-01-15T10:30:00Z",
            "2024-01-16T14:20:00Z",
            None,
        ),
        product(
            "PROD-002",
            "Cloud Storage Enterprise",
            "Scalable cloud storage solution for businesses",
            ProductType::Service,
            149.99,
            ProductStatus::PendingReview,
            "CloudTech Partners",
            "2024-01-20T09:15:00Z",
            "2024-01-20T09:15:00Z",
            None,
        ),
        product(
            "PROD-003",
            "Security Suite Advanced",
            "Comprehensive cybersecurity package",
            ProductType::Software,
            199.99,
            ProductStatus::Syncing,
            "SecureNet Solutions",
            "2024-01-18T11:45:00Z",
            "2024-01-21T16:30:00Z",
            Some(45),
        ),
        product(
            "PROD-004",
            "IoT Device Manager",
            "Centralized IoT device management platform",
            ProductType::Software,
            89.99,
            ProductStatus::SyncFailed,
            "IoT Innovations Ltd",
            "2024-01-19T13:20:00Z",
            "2024-01-21T08:45:00Z",
            None,
        ),
        product(
            "PROD-005",
            "Business Phone System",
            "VoIP phone system for small to medium businesses",
            ProductType::Service,
            79.99,
            ProductStatus::Approved,
            "CommTech Partners",
            "2024-01-17T15:10:00Z",
            "2024-01-20T10:25:00Z",
            None,
        ),
    ]
}

pub fn orders() -> Vec<Order> {
    vec![
        Order {
            id: "ORD-2024-003".into(),
            customer_id: "CUST-003".into(),
            customer_name: "Global Enterprises".into(),
            product_id: "PROD-005".into(),
            product_name: "Business Phone System".into(),
            quantity: 10,
            total_amount: 799.90,
            status: OrderStatus::New,
            created_at: ts("2024-01-22T16:45:00Z"),
            updated_at: ts("2024-01-22T16:45:00Z"),
            fulfillment_data: data(json!({
                "shippingAddress": "789 Enterprise Plaza, Birmingham, UK",
                "installationDate": "2024-01-30"
            })),
            fulfillment_notes: None,
            partner_id: None,
        },
        Order {
            id: "ORD-2024-002".into(),
            customer_id: "CUST-002".into(),
            customer_name: "Tech Innovations Ltd".into(),
            product_id: "PROD-003".into(),
            product_name: "Security Suite Advanced".into(),
            quantity: 2,
            total_amount: 399.98,
            status: OrderStatus::Processing,
            created_at: ts("2024-01-22T09:15:00Z"),
            updated_at: ts("2024-01-22T11:30:00Z"),
            fulfillment_data: data(json!({
                "shippingAddress": "456 Innovation Avenue, Manchester, UK",
                "licenseKeys": ["SEC-2024-001", "SEC-2024-002"]
            })),
            fulfillment_notes: None,
            partner_id: Some("PART-003".into()),
        },
        Order {
            id: "ORD-2024-001".into(),
            customer_id: "CUST-001".into(),
            customer_name: "Acme Corporation".into(),
            product_id: "PROD-001".into(),
            product_name: "O2 Business Connect Pro".into(),
            quantity: 5,
            total_amount: 1499.95,
            status: OrderStatus::Fulfilled,
            created_at: ts("2024-01-21T10:30:00Z"),
            updated_at: ts("2024-01-22T14:20:00Z"),
            fulfillment_data: data(json!({
                "shippingAddress": "123 Business Park, London, UK",
                "activationKey": "ABCD-1234-EFGH-5678",
                "serviceStartDate": "2024-01-25"
            })),
            fulfillment_notes: Some("Installation completed successfully".into()),
            partner_id: Some("PART-001".into()),
        },
    ]
}

pub fn partners() -> Vec<Partner> {
    vec![
        Partner {
            id: "PART-001".into(),
            name: "Michael Chen".into(),
            company_name: "TechPartner Solutions".into(),
            email: "michael.chen@techpartner.com".into(),
            status: PartnerStatus::Active,
            partner_type: PartnerType::Umbrella,
            parent_partner_id: None,
            created_at: ts("2023-06-15T10:00:00Z"),
            total_orders: 125,
            total_revenue: 45670.00,
            commission_rate: 15.0,
        },
        Partner {
            id: "PART-002".into(),
            name: "Sarah Mitchell".into(),
            company_name: "CloudTech Partners".into(),
            email: "sarah.mitchell@cloudtech.com".into(),
            status: PartnerStatus::Active,
            partner_type: PartnerType::Umbrella,
            parent_partner_id: None,
            created_at: ts("2023-08-20T14:30:00Z"),
            total_orders: 89,
            total_revenue: 32450.00,
            commission_rate: 12.0,
        },
        Partner {
            id: "PART-003".into(),
            name: "Alex Thompson".into(),
            company_name: "SecureNet Solutions".into(),
            email: "alex.thompson@securenet.com".into(),
            status: PartnerStatus::Active,
            partner_type: PartnerType::SubPartner,
            parent_partner_id: Some("PART-001".into()),
            created_at: ts("2023-09-10T11:15:00Z"),
            total_orders: 34,
            total_revenue: 12890.00,
            commission_rate: 8.0,
        },
    ]
}

pub fn payouts() -> Vec<PayoutRecord> {
    vec![
        PayoutRecord {
            partner_id: "PART-001".into(),
            payout_status: PayoutStatus::Pending,
            last_payout_date: Some(date(2023, 12, 15)),
        },
        PayoutRecord {
            partner_id: "PART-002".into(),
            payout_status: PayoutStatus::Paid,
            last_payout_date: Some(date(2024, 1, 15)),
        },
        PayoutRecord {
            partner_id: "PART-003".into(),
            payout_status: PayoutStatus::Pending,
            last_payout_date: Some(date(2023, 12, 15)),
        },
    ]
}

pub fn payout_history() -> Vec<PayoutHistoryEntry> {
    [
        ("January 2024", 3894.00, date(2024, 1, 15)),
        ("December 2023", 4200.50, date(2023, 12, 15)),
        ("November 2023", 3650.25, date(2023, 11, 15)),
        ("October 2023", 3120.75, date(2023, 10, 15)),
    ]
    .into_iter()
    .map(|(period, amount, date)| PayoutHistoryEntry {
        period: period.into(),
        amount,
        status: PayoutStatus::Paid,
        date,
    })
    .collect()
}

pub fn notifications(now: DateTime<Utc>) -> NotificationFeed {
    let mut feed = NotificationFeed::default();
    feed.push_at(
        "Commission Payout Complete",
        "Monthly commission payout processed",
        NotificationType::Success,
        now - Duration::minutes(60),
    );
    feed.push_at(
        "Product Sync Failed",
        "IoT Device Manager failed to sync with Herakles",
        NotificationType::Error,
        now - Duration::minutes(15),
    );
    feed.push_at(
        "New Order Received",
        "Order ORD-2024-004 from Innovation Corp",
        NotificationType::Info,
        now - Duration::minutes(5),
    );
    feed
}

pub fn api_activity() -> Vec<ApiActivity> {
    [
        ("2024-01-22T14:30:00Z", "Product 'PROD-123' created via API"),
        ("2024-01-22T13:15:00Z", "Order 'ORD-456' updated via API"),
        ("2024-01-22T11:45:00Z", "Product 'PROD-789' synced via API"),
        ("2024-01-22T10:20:00Z", "New partner 'PART-101' registered via API"),
        ("2024-01-22T09:30:00Z", "Bulk product import completed via API"),
    ]
    .into_iter()
    .map(|(at, action)| ApiActivity { timestamp: ts(at), action: action.into() })
    .collect()
}
