// src/handlers/product.rs
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use chrono::Utc;
use tracing::{info, instrument};

use crate::auth::roles::{Section, UserRole};
use crate::dtos::product::{
    BulkImportRequest, BulkImportResponse, CreateProductRequest, ProductFilter, ProductQuery,
};
use crate::error::AppError;
use crate::middleware::auth::AuthContext;
use crate::models::notification::NotificationType;
use crate::models::product::{Product, ProductStatus, ProductType};
use crate::state::AppState;
use crate::sync::spawn_product_sync;

const IMPORT_EXTENSIONS: [&str; 3] = [".csv", ".xlsx", ".xls"];

/// Partner Admins only ever see their own company's catalog.
fn visible_to(auth: &AuthContext, product: &Product) -> bool {
    auth.role != UserRole::PartnerAdmin || product.source_partner == auth.company_name
}

// GET /products - List products, optionally filtered
#[instrument(skip(state, auth))]
pub async fn get_products(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Query(query): Query<ProductQuery>,
) -> Result<Json<Vec<Product>>, AppError> {
    auth.require(Section::Products)?;
    let filter = ProductFilter::from_query(&query)?;

    let store = state.store.read().await;
    let products = store
        .products
        .iter()
        .filter(|p| visible_to(&auth, p) && filter.matches(p))
        .cloned()
        .collect();

    Ok(Json(products))
}

// GET /products/pending - Review queue for O2 admins
pub async fn get_pending_products(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<Vec<Product>>, AppError> {
    auth.require(Section::Products)?;
    auth.require_o2_admin("review products")?;

    let store = state.store.read().await;
    let pending = store
        .products
        .iter()
        .filter(|p| p.status == ProductStatus::PendingReview)
        .cloned()
        .collect();

    Ok(Json(pending))
}

// GET /products/:id - Get single product
#[instrument(skip(state, auth))]
pub async fn get_product(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<Product>, AppError> {
    auth.require(Section::Products)?;

    let store = state.store.read().await;
    let product = store.product(&id)?;
    if !visible_to(&auth, product) {
        return Err(AppError::not_found("Product not found"));
    }

    Ok(Json(product.clone()))
}

// POST /products - Partner submits a product for review
#[instrument(skip(state, auth, payload))]
pub async fn create_product(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(payload): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    auth.require(Section::Products)?;
    auth.require_role(UserRole::PartnerAdmin, "submit products")?;

    if payload.name.trim().is_empty() {
        return Err(AppError::validation("Product name required"));
    }
    if payload.description.trim().is_empty() {
        return Err(AppError::validation("Product description required"));
    }
    if !payload.price.is_finite() || payload.price <= 0.0 {
        return Err(AppError::validation("Price must be greater than 0"));
    }

    let now = Utc::now();
    let mut store = state.store.write().await;
    let product = Product {
        id: store.next_product_id(),
        name: payload.name.trim().to_string(),
        description: payload.description.trim().to_string(),
        product_type: payload.product_type,
        price: payload.price,
        status: ProductStatus::PendingReview,
        source_partner: auth.company_name.clone(),
        created_at: now,
        updated_at: now,
        sync_progress: None,
    };
    store.insert_product(product.clone());
    store.notifications.push(
        "Product Created",
        format!("{} has been submitted for review", product.name),
        NotificationType::Success,
    );

    info!(product_id = %product.id, "Product submitted for review");
    Ok((StatusCode::CREATED, Json(product)))
}

// POST /products/bulk-import - File contents are not read; two sample rows are added
#[instrument(skip(state, auth, payload), fields(file = %payload.file_name))]
pub async fn bulk_import_products(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(payload): Json<BulkImportRequest>,
) -> Result<(StatusCode, Json<BulkImportResponse>), AppError> {
    auth.require(Section::Products)?;
    auth.require_role(UserRole::PartnerAdmin, "import products")?;

    let file_name = payload.file_name.trim().to_lowercase();
    if !IMPORT_EXTENSIONS.iter().any(|ext| file_name.ends_with(ext)) {
        return Err(AppError::validation("Upload a .csv, .xlsx or .xls file"));
    }

    let now = Utc::now();
    let mut store = state.store.write().await;
    let samples = [
        ("Bulk Product 1", "Product imported from CSV", ProductType::Service, 99.99),
        ("Bulk Product 2", "Another product from CSV", ProductType::Software, 149.99),
    ];

    let mut imported = Vec::with_capacity(samples.len());
    for (name, description, product_type, price) in samples {
        let product = Product {
            id: store.next_product_id(),
            name: name.to_string(),
            description: description.to_string(),
            product_type,
            price,
            status: ProductStatus::PendingReview,
            source_partner: auth.company_name.clone(),
            created_at: now,
            updated_at: now,
            sync_progress: None,
        };
        store.insert_product(product.clone());
        imported.push(product);
    }

    store.notifications.push(
        "Bulk Import Complete",
        format!("Successfully imported {} products", imported.len()),
        NotificationType::Success,
    );

    info!(count = imported.len(), "Bulk import finished");
    Ok((
        StatusCode::CREATED,
        Json(BulkImportResponse { success: imported.len(), errors: 0, products: imported }),
    ))
}

// POST /products/:id/approve - Approve and start the Herakles sync
#[instrument(skip(state, auth))]
pub async fn approve_product(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<Product>, AppError> {
    auth.require(Section::Products)?;
    auth.require_o2_admin("approve products")?;

    let product = {
        let mut store = state.store.write().await;
        let product = store.product_mut(&id)?;
        product.approve(Utc::now())?;
        let product = product.clone();
        store.notifications.push(
            "Product Approved",
            "Product sync with Herakles initiated",
            NotificationType::Success,
        );
        product
    };

    info!(product_id = %id, approved_by = %auth.username, "Product approved, sync started");
    spawn_product_sync(state.clone(), id);

    Ok(Json(product))
}

// POST /products/:id/reject - Return the product to its partner
#[instrument(skip(state, auth))]
pub async fn reject_product(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<Product>, AppError> {
    auth.require(Section::Products)?;
    auth.require_o2_admin("reject products")?;

    let mut store = state.store.write().await;
    let product = store.product_mut(&id)?;
    product.reject(Utc::now())?;
    let product = product.clone();
    store.notifications.push(
        "Product Rejected",
        "Product has been rejected and returned to partner",
        NotificationType::Warning,
    );

    info!(product_id = %id, rejected_by = %auth.username, "Product rejected");
    Ok(Json(product))
}
