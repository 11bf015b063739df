// src/dtos/product.rs
use serde::{Deserialize, Serialize};

use crate::dtos::{contains_ci, parse_enum_filter};
use crate::error::AppError;
use crate::models::product::{Product, ProductStatus, ProductType};

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    pub price: f64,
}

#[derive(Debug, Deserialize)]
pub struct BulkImportRequest {
    pub file_name: String,
}

#[derive(Debug, Serialize)]
pub struct BulkImportResponse {
    pub success: usize,
    pub errors: usize,
    pub products: Vec<Product>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProductQuery {
    pub search: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "type")]
    pub product_type: Option<String>,
}

#[derive(Debug, Default)]
pub struct ProductFilter {
    pub search: String,
    pub status: Option<ProductStatus>,
    pub product_type: Option<ProductType>,
}

impl ProductFilter {
    pub fn from_query(query: &ProductQuery) -> Result<Self, AppError> {
        Ok(Self {
            search: query.search.as_deref().unwrap_or_default().trim().to_string(),
            status: parse_enum_filter(query.status.as_deref(), "status")?,
            product_type: parse_enum_filter(query.product_type.as_deref(), "type")?,
        })
    }

    /// Search covers the product name and the source partner.
    pub fn matches(&self, product: &Product) -> bool {
        let matches_search = contains_ci(&product.name, &self.search)
            || contains_ci(&product.source_partner, &self.search);
        let matches_status = self.status.map_or(true, |s| product.status == s);
        let matches_type = self.product_type.map_or(true, |t| product.product_type == t);

        matches_search && matches_status && matches_type
    }
}
