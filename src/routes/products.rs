use axum::{
    routing::{get, post},
    Router,
};
use crate::handlers::product::{
    approve_product, bulk_import_products, create_product, get_pending_products, get_product,
    get_products, reject_product,
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(get_products).post(create_product))
        .route("/products/pending", get(get_pending_products))
        .route("/products/bulk-import", post(bulk_import_products))
        .route("/products/{id}", get(get_product))
        .route("/products/{id}/approve", post(approve_product))
        .route("/products/{id}/reject", post(reject_product))
}
