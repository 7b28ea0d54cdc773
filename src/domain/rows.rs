//! Row shapes of the hosted tables. Timestamps stay as strings because the
//! service returns them with or without an offset depending on the column type.

use crate::domain::model::{
    Listing, ListingKind, ProductCategory, ProductDetails, ServiceCategory, ServiceDetails,
};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsRow {
    pub id: i64,
    pub revenue: Option<f64>,
    pub orders_count: Option<i64>,
    pub rides_count: Option<i64>,
    pub users_count: Option<i64>,
    pub timestamp: Option<String>,
}

impl AnalyticsRow {
    pub fn recorded_at(&self) -> Option<DateTime<Utc>> {
        self.timestamp.as_deref().and_then(parse_timestamp)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRow {
    pub id: i64,
    pub title: String,
    pub category: ProductCategory,
    pub price: f64,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub seller_id: Option<i64>,
    pub stock: Option<i64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRow {
    pub id: i64,
    pub title: String,
    pub category: ServiceCategory,
    pub price: f64,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub seller_id: Option<i64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

fn seller_label(seller_id: Option<i64>) -> String {
    seller_id
        .map(|id| format!("Seller #{}", id))
        .unwrap_or_default()
}

impl From<ProductRow> for Listing {
    fn from(row: ProductRow) -> Self {
        Listing {
            id: row.id,
            title: row.title,
            price: row.price,
            location: seller_label(row.seller_id),
            features: Vec::new(),
            featured: false,
            kind: ListingKind::Product(ProductDetails {
                category: row.category,
                rating: None,
                reviews: None,
                original_price: None,
                stock: row.stock,
                description: row.description,
                image_url: row.image_url,
            }),
        }
    }
}

impl From<ServiceRow> for Listing {
    fn from(row: ServiceRow) -> Self {
        Listing {
            id: row.id,
            title: row.title,
            price: row.price,
            location: seller_label(row.seller_id),
            features: Vec::new(),
            featured: false,
            kind: ListingKind::Service(ServiceDetails {
                category: row.category,
                description: row.description,
                turnaround: None,
                image_url: row.image_url,
            }),
        }
    }
}

pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|naive| naive.and_utc())
}
