use serde::Serialize;

use crate::models::notification::Notification;

#[derive(Debug, Serialize)]
pub struct StatCard {
    pub title: &'static str,
    pub value: f64,
}

#[derive(Debug, Serialize)]
pub struct TopProduct {
    pub product_id: String,
    pub name: String,
    pub sales: u32,
    pub revenue: f64,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub stats: Vec<StatCard>,
    pub recent_activity: Vec<Notification>,
    pub top_products: Vec<TopProduct>,
}
