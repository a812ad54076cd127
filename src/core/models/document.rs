//! Goods-introduction document accepted by the registration service
//!
//! Field names follow the service's JSON schema, so most fields keep their
//! snake_case wire names and `importRequest` / `participantInn` are renamed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Document submitted for registration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Description>,
    pub doc_id: String,
    pub doc_status: String,
    pub doc_type: String,
    #[serde(rename = "importRequest", default)]
    pub import_request: bool,
    pub owner_inn: String,
    pub participant_inn: String,
    pub producer_inn: String,
    pub production_date: NaiveDate,
    pub production_type: String,
    #[serde(default)]
    pub products: Vec<Product>,
    pub reg_date: NaiveDate,
    pub reg_number: String,
}

/// Participant description block
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Description {
    #[serde(rename = "participantInn")]
    pub participant_inn: String,
}

/// One product line of a document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub certificate_document: String,
    pub certificate_document_date: NaiveDate,
    pub certificate_document_number: String,
    pub owner_inn: String,
    pub producer_inn: String,
    pub production_date: NaiveDate,
    pub tnved_code: String,
    pub uit_code: String,
    pub uitu_code: String,
}

impl Document {
    /// Number of product lines carried by this document
    pub fn product_count(&self) -> usize {
        self.products.len()
    }
}

impl Description {
    pub fn new(participant_inn: impl Into<String>) -> Self {
        Self {
            participant_inn: participant_inn.into(),
        }
    }
}
