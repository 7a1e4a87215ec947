use reqwest::Client;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;

/// a purchasable product as served by the catalog endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub specs: Vec<String>,
    /// wire format is a plain json number
    pub price: f64,
    pub image: String,
}

impl Product {
    /// price as ledger money; json numbers are finite so this is lossless
    /// up to rounding
    pub fn price_money(&self) -> Money {
        Money::from_decimal(Decimal::from_f64_retain(self.price).unwrap_or(Decimal::ZERO))
    }

    /// absolute url of the product image
    pub fn image_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.image)
    }
}

/// find a product by id in a fetched catalog
pub fn find_by_id(products: &[Product], id: u32) -> Option<&Product> {
    products.iter().find(|p| p.id == id)
}

/// errors from the catalog fetch; deliberately outside the ledger's
/// `ValidationError` taxonomy, a failed fetch never touches financial state
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// one-shot client for the product catalog.
///
/// no retry, no cancellation: the caller fetches once at startup and keeps
/// the list.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// fetch the full product list
    pub async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        let url = format!("{}/computers", self.base_url.trim_end_matches('/'));
        let products = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Product>>()
            .await?;
        Ok(products)
    }
}
