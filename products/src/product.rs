//! Product record and registration body.
//!
//! DESIGN
//! ======
//! Two field-name variants are in circulation: the dashboard forms use
//! `productName`/`dateOfManufacture`/`time`/`place`/`priceForFarmer`, while
//! the API stores `name`/`harvestDate`/`harvestTime`/`farmLocation`/
//! `pricePerUnit`. Records serialize with the API names and accept either on
//! input, or both at once, so mock data, old clients and the server all
//! decode to one type.

#[cfg(test)]
#[path = "product_test.rs"]
mod product_test;

use serde::{Deserialize, Deserializer, Serialize};

/// A registered product as stored by the API and rendered by the dashboards.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawProduct")]
pub struct Product {
    pub product_id: String,
    pub name: String,
    pub category: String,
    /// Harvest or manufacture date, usually `YYYY-MM-DD`.
    pub harvest_date: String,
    pub harvest_time: String,
    pub farm_location: String,
    /// Free-form rating; see [`QualityRating`] for the recognised values.
    pub quality_rating: String,
    /// Price paid to the farmer. Accepts a JSON number or a numeric string.
    pub price_per_unit: Option<f64>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub farmer_address: Option<String>,
    /// RFC 3339 timestamp set by the API at registration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Simulated ledger transaction hash.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<String>,
}

impl Product {
    #[must_use]
    pub fn quality(&self) -> QualityRating {
        QualityRating::parse(&self.quality_rating)
    }

    /// Whether the record carries the identifier every success path requires.
    #[must_use]
    pub fn has_id(&self) -> bool {
        !self.product_id.trim().is_empty()
    }
}

/// Body of `POST /api/products/register`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawProduct")]
pub struct RegisterRequest {
    /// Caller-chosen id; the API generates one when absent or blank.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    pub name: String,
    pub category: String,
    pub harvest_date: String,
    pub harvest_time: String,
    pub farm_location: String,
    pub quality_rating: String,
    pub price_per_unit: Option<f64>,
    pub description: String,
}

impl RegisterRequest {
    /// Build the stored record under `product_id`. Ledger fields stay empty.
    #[must_use]
    pub fn into_product(self, product_id: String) -> Product {
        Product {
            product_id,
            name: self.name,
            category: self.category,
            harvest_date: self.harvest_date,
            harvest_time: self.harvest_time,
            farm_location: self.farm_location,
            quality_rating: self.quality_rating,
            price_per_unit: self.price_per_unit,
            description: self.description,
            farmer_address: None,
            created_at: None,
            transaction_hash: None,
        }
    }
}

/// Wire form of a product in either naming. Both names of a field may be
/// present at once; the API name wins unless it is blank.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProduct {
    #[serde(default)]
    product_id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    product_name: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    harvest_date: Option<String>,
    #[serde(default)]
    date_of_manufacture: Option<String>,
    #[serde(default)]
    harvest_time: Option<String>,
    #[serde(default)]
    time: Option<String>,
    #[serde(default)]
    farm_location: Option<String>,
    #[serde(default)]
    place: Option<String>,
    #[serde(default)]
    quality_rating: Option<String>,
    #[serde(default, deserialize_with = "price_from_number_or_string")]
    price_per_unit: Option<f64>,
    #[serde(default, deserialize_with = "price_from_number_or_string")]
    price_for_farmer: Option<f64>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    farmer_address: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    transaction_hash: Option<String>,
}

fn prefer(api: Option<String>, dashboard: Option<String>) -> String {
    api.filter(|value| !value.is_empty())
        .or(dashboard)
        .unwrap_or_default()
}

impl From<RawProduct> for Product {
    fn from(raw: RawProduct) -> Self {
        Self {
            product_id: raw.product_id.unwrap_or_default(),
            name: prefer(raw.name, raw.product_name),
            category: raw.category.unwrap_or_default(),
            harvest_date: prefer(raw.harvest_date, raw.date_of_manufacture),
            harvest_time: prefer(raw.harvest_time, raw.time),
            farm_location: prefer(raw.farm_location, raw.place),
            quality_rating: raw.quality_rating.unwrap_or_default(),
            price_per_unit: raw.price_per_unit.or(raw.price_for_farmer),
            description: raw.description.unwrap_or_default(),
            farmer_address: raw.farmer_address,
            created_at: raw.created_at,
            transaction_hash: raw.transaction_hash,
        }
    }
}

impl From<RawProduct> for RegisterRequest {
    fn from(raw: RawProduct) -> Self {
        let product_id = raw
            .product_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_owned);
        let product = Product::from(raw);
        Self {
            product_id,
            name: product.name,
            category: product.category,
            harvest_date: product.harvest_date,
            harvest_time: product.harvest_time,
            farm_location: product.farm_location,
            quality_rating: product.quality_rating,
            price_per_unit: product.price_per_unit,
            description: product.description,
        }
    }
}

/// Informal quality grade. Only used to pick a display colour.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QualityRating {
    Premium,
    Excellent,
    Good,
    Standard,
    Poor,
    /// Anything else, kept verbatim.
    Other(String),
}

impl QualityRating {
    /// Case-insensitive parse; never fails.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "premium" => Self::Premium,
            "excellent" => Self::Excellent,
            "good" => Self::Good,
            "standard" => Self::Standard,
            "poor" => Self::Poor,
            _ => Self::Other(raw.to_owned()),
        }
    }

    /// CSS modifier class for the rating badge.
    #[must_use]
    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Premium => "quality-badge quality-badge--premium",
            Self::Excellent => "quality-badge quality-badge--excellent",
            Self::Good => "quality-badge quality-badge--good",
            Self::Poor => "quality-badge quality-badge--poor",
            Self::Standard | Self::Other(_) => "quality-badge quality-badge--standard",
        }
    }
}

/// Parse the longest leading decimal number, the way browsers' `parseFloat`
/// does (`"12.5kg"` is `12.5`). Returns `None` when there is no numeric
/// prefix or the value is not finite.
#[must_use]
pub fn parse_price(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();
    let is_digit = |i: usize| i < len && bytes[i].is_ascii_digit();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_start = end;
    while is_digit(end) {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < len && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while is_digit(frac_end) {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    if end < len && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < len && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while is_digit(exp_end) {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

fn price_from_number_or_string<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Number(f64),
        Text(String),
    }

    Ok(match Option::<RawPrice>::deserialize(deserializer)? {
        None => None,
        Some(RawPrice::Number(value)) => Some(value),
        Some(RawPrice::Text(text)) => parse_price(&text),
    })
}
