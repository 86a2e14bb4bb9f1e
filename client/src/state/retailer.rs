//! Retailer dashboard: simulated scan and local record update.
//!
//! Nothing here talks to the API. The scanned record is a fixed farmer
//! registration, and updates are merged into it and written to local storage
//! under `product_{productId}`.

#[cfg(test)]
#[path = "retailer_test.rs"]
mod retailer_test;

use serde_json::{Map, Value, json};

use crate::util::storage::RecordStore;

pub const STATUS_FARMER_REGISTERED: &str = "Farmer Registered";
pub const STATUS_RETAILER_UPDATED: &str = "Retailer Updated";
pub const RETAILER_ADDRESS: &str = "0x8bcc35ab6cc...742d";

/// Quality grades a retailer can assign, as `(value, label)`.
pub const QUALITY_OPTIONS: [(&str, &str); 5] = [
    ("premium", "Premium (A+)"),
    ("excellent", "Excellent (A)"),
    ("good", "Good (B+)"),
    ("standard", "Standard (B)"),
    ("poor", "Poor (C)"),
];

/// A product record as loaded from a scan, kept as loose JSON so merged
/// retailer fields sit alongside whatever the farmer registered.
pub type ScannedProduct = Map<String, Value>;

/// The record every simulated scan yields.
pub fn mock_scanned_product() -> ScannedProduct {
    let value = json!({
        "productId": "AGR-1703520000000",
        "productName": "Organic Tomatoes",
        "category": "vegetables",
        "dateOfManufacture": "2024-01-15",
        "time": "08:30",
        "place": "Green Valley Farm, Maharashtra",
        "qualityRating": "premium",
        "priceForFarmer": "45.00",
        "description": "Fresh organic tomatoes grown using sustainable farming practices",
        "farmerAddress": "0x742d35cc6ab...8bcc",
        "blockHash": "0xabc12345",
        "status": STATUS_FARMER_REGISTERED,
        "timestamp": "2024-01-15T08:30:00.000Z",
    });
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// Local storage key for a product record.
pub fn storage_key(product_id: &str) -> String {
    format!("product_{product_id}")
}

/// String field of a scanned record, empty when absent or not a string.
pub fn record_field<'a>(record: &'a ScannedProduct, key: &str) -> &'a str {
    record.get(key).and_then(Value::as_str).unwrap_or_default()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RetailerField {
    RetailPrice,
    RetailerQuality,
    RetailerLocation,
    AdditionalNotes,
}

impl RetailerField {
    pub const ALL: [Self; 4] = [
        Self::RetailPrice,
        Self::RetailerQuality,
        Self::RetailerLocation,
        Self::AdditionalNotes,
    ];

    /// Key used in the merged record.
    pub fn key(self) -> &'static str {
        match self {
            Self::RetailPrice => "retailPrice",
            Self::RetailerQuality => "retailerQuality",
            Self::RetailerLocation => "retailerLocation",
            Self::AdditionalNotes => "additionalNotes",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::RetailPrice => "Retail Price (₹)",
            Self::RetailerQuality => "Updated Quality Rating",
            Self::RetailerLocation => "Store Location",
            Self::AdditionalNotes => "Additional Notes",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::RetailPrice => "0.00",
            Self::RetailerQuality => "Verify quality",
            Self::RetailerLocation => "e.g., Fresh Market, Mumbai",
            Self::AdditionalNotes => "Storage conditions, handling notes...",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RetailerForm {
    pub retail_price: String,
    pub retailer_quality: String,
    pub retailer_location: String,
    pub additional_notes: String,
}

impl RetailerForm {
    pub fn get(&self, field: RetailerField) -> &str {
        match field {
            RetailerField::RetailPrice => &self.retail_price,
            RetailerField::RetailerQuality => &self.retailer_quality,
            RetailerField::RetailerLocation => &self.retailer_location,
            RetailerField::AdditionalNotes => &self.additional_notes,
        }
    }

    pub fn set(&mut self, field: RetailerField, value: String) {
        let slot = match field {
            RetailerField::RetailPrice => &mut self.retail_price,
            RetailerField::RetailerQuality => &mut self.retailer_quality,
            RetailerField::RetailerLocation => &mut self.retailer_location,
            RetailerField::AdditionalNotes => &mut self.additional_notes,
        };
        *slot = value;
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RetailerState {
    pub scanned: Option<ScannedProduct>,
    pub form: RetailerForm,
    pub info: Option<String>,
    pub error: Option<String>,
}

impl RetailerState {
    /// Load the mock record as if its QR code had just been scanned.
    pub fn simulate_scan(&mut self) {
        let record = mock_scanned_product();
        self.info = Some(format!("Product {} details loaded.", record_field(&record, "productId")));
        self.error = None;
        self.scanned = Some(record);
    }

    /// The scanned record with the form's values and retailer stamp applied.
    pub fn merged_record(&self, timestamp: &str) -> Option<ScannedProduct> {
        let mut record = self.scanned.clone()?;
        for field in RetailerField::ALL {
            record.insert(field.key().to_owned(), Value::from(self.form.get(field)));
        }
        record.insert("retailerAddress".to_owned(), Value::from(RETAILER_ADDRESS));
        record.insert("retailerTimestamp".to_owned(), Value::from(timestamp));
        record.insert("status".to_owned(), Value::from(STATUS_RETAILER_UPDATED));
        Some(record)
    }

    /// Persist the merged record and clear the form.
    ///
    /// Returns the storage key written, or `None` when nothing was scanned or
    /// the write failed (the failure is kept in `error`). The displayed scan
    /// is left as loaded.
    pub fn apply_update(&mut self, store: &mut impl RecordStore, timestamp: &str) -> Option<String> {
        let record = self.merged_record(timestamp)?;
        let key = storage_key(record_field(&record, "productId"));
        match store.put_json(&key, &record) {
            Ok(()) => {
                self.form = RetailerForm::default();
                self.info = Some("Retailer information has been added to the product record.".to_owned());
                self.error = None;
                Some(key)
            }
            Err(err) => {
                self.info = None;
                self.error = Some(err.to_string());
                None
            }
        }
    }
}
