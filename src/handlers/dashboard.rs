use std::collections::HashMap;

use axum::{extract::State, Extension, Json};

use crate::auth::roles::{Section, UserRole};
use crate::dtos::dashboard::{DashboardResponse, StatCard, TopProduct};
use crate::error::AppError;
use crate::handlers::order::visible_to;
use crate::middleware::auth::AuthContext;
use crate::models::order::{Order, OrderStatus};
use crate::state::AppState;

const RECENT_ACTIVITY: usize = 5;
const TOP_PRODUCTS: usize = 4;

// GET /dashboard
pub async fn get_dashboard(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<DashboardResponse>, AppError> {
    auth.require(Section::Dashboard)?;

    let store = state.store.read().await;
    let orders: Vec<&Order> = store
        .orders
        .iter()
        .filter(|o| visible_to(&store, &auth, o))
        .collect();
    let new_orders = orders.iter().filter(|o| o.status == OrderStatus::New).count();
    let sales_volume: f64 = orders
        .iter()
        .filter(|o| o.counts_toward_sales())
        .map(|o| o.total_amount)
        .sum();

    let stats = if auth.role == UserRole::PartnerAdmin {
        let partner_id = auth.own_partner_id()?;
        let my_products = store
            .products
            .iter()
            .filter(|p| p.source_partner == auth.company_name)
            .count();
        vec![
            StatCard { title: "My Sub-partners", value: store.sub_partners_of(partner_id).count() as f64 },
            StatCard { title: "My Products", value: my_products as f64 },
            StatCard { title: "My New Orders", value: new_orders as f64 },
            StatCard { title: "My Sales Volume", value: sales_volume },
        ]
    } else {
        let pending_sync = store.products.iter().filter(|p| p.status.awaiting_sync()).count();
        vec![
            StatCard { title: "Total Partners", value: store.partners.len() as f64 },
            StatCard { title: "Products Pending Sync", value: pending_sync as f64 },
            StatCard { title: "New Orders", value: new_orders as f64 },
            StatCard { title: "Sales Volume", value: sales_volume },
        ]
    };

    Ok(Json(DashboardResponse {
        stats,
        recent_activity: store.notifications.recent(RECENT_ACTIVITY).to_vec(),
        top_products: top_products(&orders),
    }))
}

/// Products ranked by order revenue, cancelled orders excluded.
fn top_products(orders: &[&Order]) -> Vec<TopProduct> {
    let mut by_product: HashMap<&str, TopProduct> = HashMap::new();
    for order in orders.iter().filter(|o| o.counts_toward_sales()) {
        let entry = by_product
            .entry(order.product_id.as_str())
            .or_insert_with(|| TopProduct {
                product_id: order.product_id.clone(),
                name: order.product_name.clone(),
                sales: 0,
                revenue: 0.0,
            });
        entry.sales += order.quantity;
        entry.revenue += order.total_amount;
    }

    let mut ranked: Vec<TopProduct> = by_product.into_values().collect();
    ranked.sort_by(|a, b| {
        b.revenue
            .total_cmp(&a.revenue)
            .then_with(|| a.product_id.cmp(&b.product_id))
    });
    ranked.truncate(TOP_PRODUCTS);
    ranked
}
