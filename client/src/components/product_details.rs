//! Verified product card.
//!
//! Every field is rendered as received; only the harvest date and price get
//! display formatting.

use leptos::prelude::*;
use products::Product;

use crate::util::format::{format_date, format_price};

#[component]
fn DetailRow(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="product-details__row">
            <span class="product-details__label">{label}</span>
            <span class="product-details__value">{value}</span>
        </div>
    }
}

#[component]
pub fn ProductDetails(product: Product) -> impl IntoView {
    let badge = product.quality().badge_class();
    let optional = |value: Option<String>| value.unwrap_or_default();

    view! {
        <section class="product-details">
            <header class="product-details__header">
                <h2>{product.name.clone()}</h2>
                <span class="product-details__verified">"Verified"</span>
            </header>
            <DetailRow label="Product ID" value=product.product_id.clone()/>
            <DetailRow label="Category" value=product.category.clone()/>
            <DetailRow label="Harvest Date" value=format_date(&product.harvest_date)/>
            <DetailRow label="Harvest Time" value=product.harvest_time.clone()/>
            <DetailRow label="Farm Location" value=product.farm_location.clone()/>
            <div class="product-details__row">
                <span class="product-details__label">"Quality Rating"</span>
                <span class=badge>{product.quality_rating.clone()}</span>
            </div>
            <DetailRow label="Price per Unit" value=format_price(product.price_per_unit)/>
            <DetailRow label="Description" value=product.description.clone()/>
            <DetailRow label="Farmer Address" value=optional(product.farmer_address.clone())/>
            <DetailRow label="Registered At" value=optional(product.created_at.clone())/>
            <DetailRow label="Transaction Hash" value=optional(product.transaction_hash.clone())/>
        </section>
    }
}
