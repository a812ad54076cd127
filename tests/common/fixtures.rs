//! Test fixtures and data factories

use chrono::NaiveDate;
use regdoc_gateway::{Description, Document, Product, Signature};

/// Factory for creating test documents
pub struct DocumentFactory;

impl DocumentFactory {
    /// Document with a single product line
    pub fn create(doc_id: &str) -> Document {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        Document {
            description: Some(Description::new("7701234567")),
            doc_id: doc_id.to_string(),
            doc_status: "NEW".to_string(),
            doc_type: "LP_INTRODUCE_GOODS".to_string(),
            import_request: false,
            owner_inn: "7701234567".to_string(),
            participant_inn: "7701234567".to_string(),
            producer_inn: "7707654321".to_string(),
            production_date: date,
            production_type: "OWN_PRODUCTION".to_string(),
            products: vec![Self::product()],
            reg_date: date,
            reg_number: format!("reg-{}", doc_id),
        }
    }

    pub fn product() -> Product {
        let date = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap();
        Product {
            certificate_document: "CONFORMITY_CERTIFICATE".to_string(),
            certificate_document_date: date,
            certificate_document_number: "RU-0001".to_string(),
            owner_inn: "7701234567".to_string(),
            producer_inn: "7707654321".to_string(),
            production_date: date,
            tnved_code: "6401100000".to_string(),
            uit_code: "010461111111111121abcdef".to_string(),
            uitu_code: "00046111111111111111".to_string(),
        }
    }

    pub fn signature() -> Signature {
        Signature::new("TUlJRmdqQ0NCU3FnQXdJQkFnSVFBLi4u").unwrap()
    }
}
