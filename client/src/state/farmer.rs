//! Farmer registration form state.

#[cfg(test)]
#[path = "farmer_test.rs"]
mod farmer_test;

use products::product::parse_price;
use products::{RegisterRequest, Registration};

pub const MISSING_FIELDS_MESSAGE: &str = "Fill in all required fields";
pub const INVALID_PRICE_MESSAGE: &str = "Enter a valid price";

/// One input on the registration form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FarmerField {
    ProductName,
    Category,
    DateOfManufacture,
    Time,
    Place,
    QualityRating,
    PriceForFarmer,
    Description,
    ProductId,
}

impl FarmerField {
    /// Form order.
    pub const ALL: [Self; 9] = [
        Self::ProductName,
        Self::Category,
        Self::DateOfManufacture,
        Self::Time,
        Self::Place,
        Self::QualityRating,
        Self::PriceForFarmer,
        Self::Description,
        Self::ProductId,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::ProductName => "Product Name",
            Self::Category => "Category",
            Self::DateOfManufacture => "Date of Manufacture",
            Self::Time => "Time",
            Self::Place => "Place",
            Self::QualityRating => "Quality Rating",
            Self::PriceForFarmer => "Price for Farmer",
            Self::Description => "Description",
            Self::ProductId => "Product ID (optional)",
        }
    }

    /// HTML input type.
    pub fn input_type(self) -> &'static str {
        match self {
            Self::DateOfManufacture => "date",
            Self::Time => "time",
            Self::PriceForFarmer => "number",
            _ => "text",
        }
    }

    pub fn required(self) -> bool {
        !matches!(self, Self::ProductId)
    }

    pub fn multiline(self) -> bool {
        matches!(self, Self::Description)
    }
}

/// Raw text of every form input, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FarmerForm {
    pub product_name: String,
    pub category: String,
    pub date_of_manufacture: String,
    pub time: String,
    pub place: String,
    pub quality_rating: String,
    pub price_for_farmer: String,
    pub description: String,
    pub product_id: String,
}

impl FarmerForm {
    pub fn get(&self, field: FarmerField) -> &str {
        match field {
            FarmerField::ProductName => &self.product_name,
            FarmerField::Category => &self.category,
            FarmerField::DateOfManufacture => &self.date_of_manufacture,
            FarmerField::Time => &self.time,
            FarmerField::Place => &self.place,
            FarmerField::QualityRating => &self.quality_rating,
            FarmerField::PriceForFarmer => &self.price_for_farmer,
            FarmerField::Description => &self.description,
            FarmerField::ProductId => &self.product_id,
        }
    }

    pub fn set(&mut self, field: FarmerField, value: String) {
        let slot = match field {
            FarmerField::ProductName => &mut self.product_name,
            FarmerField::Category => &mut self.category,
            FarmerField::DateOfManufacture => &mut self.date_of_manufacture,
            FarmerField::Time => &mut self.time,
            FarmerField::Place => &mut self.place,
            FarmerField::QualityRating => &mut self.quality_rating,
            FarmerField::PriceForFarmer => &mut self.price_for_farmer,
            FarmerField::Description => &mut self.description,
            FarmerField::ProductId => &mut self.product_id,
        };
        *slot = value;
    }

    /// Build the registration body.
    ///
    /// # Errors
    ///
    /// Returns [`MISSING_FIELDS_MESSAGE`] when a required field is blank and
    /// [`INVALID_PRICE_MESSAGE`] when the price has no numeric prefix.
    pub fn to_request(&self) -> Result<RegisterRequest, &'static str> {
        let missing = FarmerField::ALL
            .iter()
            .any(|field| field.required() && self.get(*field).trim().is_empty());
        if missing {
            return Err(MISSING_FIELDS_MESSAGE);
        }
        let price = parse_price(&self.price_for_farmer).ok_or(INVALID_PRICE_MESSAGE)?;

        let product_id = self.product_id.trim();
        Ok(RegisterRequest {
            product_id: (!product_id.is_empty()).then(|| product_id.to_owned()),
            name: self.product_name.clone(),
            category: self.category.clone(),
            harvest_date: self.date_of_manufacture.clone(),
            harvest_time: self.time.clone(),
            farm_location: self.place.clone(),
            quality_rating: self.quality_rating.clone(),
            price_per_unit: Some(price),
            description: self.description.clone(),
        })
    }
}

/// Farmer dashboard state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FarmerState {
    pub form: FarmerForm,
    /// A registration request is outstanding; the submit button is disabled.
    pub loading: bool,
    /// QR image (`data:` URL) of the last successful registration.
    pub qr_code: Option<String>,
    pub product_id: Option<String>,
    pub error: Option<String>,
}

impl FarmerState {
    /// Validate the form and mark a request as outstanding.
    ///
    /// Returns `None` (and records an error for invalid input) when nothing
    /// should be sent.
    pub fn begin_submit(&mut self) -> Option<RegisterRequest> {
        if self.loading {
            return None;
        }
        match self.form.to_request() {
            Ok(request) => {
                self.loading = true;
                self.error = None;
                Some(request)
            }
            Err(message) => {
                self.error = Some(message.to_owned());
                None
            }
        }
    }

    /// Apply the outcome of a registration request.
    pub fn finish_submit(&mut self, result: Result<Registration, String>) {
        self.loading = false;
        match result {
            Ok(registration) => {
                self.qr_code = Some(registration.qr_code);
                self.product_id = Some(registration.product.product_id);
                self.error = None;
            }
            Err(message) => {
                self.qr_code = None;
                self.product_id = None;
                self.error = Some(message);
            }
        }
    }

    /// Clear the form and any result. An outstanding request stays outstanding.
    pub fn reset(&mut self) {
        *self = Self { loading: self.loading, ..Self::default() };
    }

    pub fn success_message(&self) -> Option<String> {
        self.product_id
            .as_ref()
            .map(|id| format!("Product {id} has been added to the blockchain."))
    }
}
