use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::ApiError;
use crate::products::repo::Product;

/// Request body for creating or fully replacing a product.
#[derive(Debug, Deserialize)]
pub struct ProductIn {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub stock_quantity: i64,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl ProductIn {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::Validation("Name must not be empty".into()));
        }
        if !(self.price > 0.0) {
            return Err(ApiError::Validation("Price must be greater than zero".into()));
        }
        if self.price > 1_000_000.0 {
            return Err(ApiError::Validation(
                "Price is too high even for Cyberpunk".into(),
            ));
        }
        if self.stock_quantity < 0 {
            return Err(ApiError::Validation(
                "Stock quantity must not be negative".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct ProductOut {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock_quantity: i64,
    pub image_url: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<Product> for ProductOut {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            price: p.price,
            stock_quantity: p.stock_quantity,
            image_url: p.image_url,
            created_at: p.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    100
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product_in(name: &str, price: f64, stock: i64) -> ProductIn {
        ProductIn {
            name: name.into(),
            description: None,
            price,
            stock_quantity: stock,
            image_url: None,
        }
    }

    #[test]
    fn accepts_a_plain_product() {
        assert!(product_in("Watch", 99.99, 1).validate().is_ok());
    }

    #[test]
    fn rejects_bad_fields() {
        assert!(product_in("", 99.99, 1).validate().is_err());
        assert!(product_in("Watch", 0.0, 1).validate().is_err());
        assert!(product_in("Watch", -5.0, 1).validate().is_err());
        assert!(product_in("Watch", f64::NAN, 1).validate().is_err());
        assert!(product_in("Watch", 2_000_000.0, 1).validate().is_err());
        assert!(product_in("Watch", 99.99, -1).validate().is_err());
    }
}
