//! Retailer dashboard: simulated scan and local product update.

use leptos::prelude::*;

use crate::components::alert::{ErrorAlert, InfoAlert};
use crate::components::role_header::RoleHeader;
use crate::state::retailer::{QUALITY_OPTIONS, RetailerField, RetailerState, record_field};
use crate::util::clock::now_iso;
use crate::util::storage::LocalStorage;

const SCANNED_ROWS: [(&str, &str); 8] = [
    ("Product ID", "productId"),
    ("Product Name", "productName"),
    ("Category", "category"),
    ("Harvest Date", "dateOfManufacture"),
    ("Farm Location", "place"),
    ("Farmer Quality Rating", "qualityRating"),
    ("Farmer Price", "priceForFarmer"),
    ("Blockchain Status", "status"),
];

#[component]
pub fn RetailerPage() -> impl IntoView {
    let state = RwSignal::new(RetailerState::default());

    let on_update = move |_| {
        let mut store = LocalStorage;
        let stamp = now_iso();
        let mut written = None;
        state.update(|s| written = s.apply_update(&mut store, &stamp));
        #[cfg(feature = "hydrate")]
        if let Some(key) = written {
            log::info!("stored retailer update under {key}");
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = written;
    };

    let field_view = move |field: RetailerField| {
        let value = move || state.with(|s| s.form.get(field).to_owned());
        let on_input = move |ev: leptos::ev::Event| state.update(|s| s.form.set(field, event_target_value(&ev)));
        let control = match field {
            RetailerField::RetailerQuality => view! {
                <select class="form-input" prop:value=value on:change=on_input>
                    <option value="">{field.placeholder()}</option>
                    {QUALITY_OPTIONS
                        .into_iter()
                        .map(|(grade, label)| view! { <option value=grade>{label}</option> })
                        .collect_view()}
                </select>
            }
            .into_any(),
            RetailerField::AdditionalNotes => view! {
                <textarea class="form-input" rows="3" placeholder={field.placeholder()} prop:value=value on:input=on_input>
                </textarea>
            }
            .into_any(),
            _ => view! {
                <input class="form-input" type="text" placeholder={field.placeholder()} prop:value=value on:input=on_input/>
            }
            .into_any(),
        };
        view! {
            <label class="form-field">
                <span class="form-field__label">{field.label()}</span>
                {control}
            </label>
        }
    };

    let scanned_view = move || {
        state.with(|s| {
            s.scanned.as_ref().map(|record| {
                SCANNED_ROWS
                    .into_iter()
                    .map(|(label, key)| {
                        let value = record_field(record, key).to_owned();
                        view! {
                            <div class="product-details__row">
                                <span class="product-details__label">{label}</span>
                                <span class="product-details__value">{value}</span>
                            </div>
                        }
                    })
                    .collect_view()
            })
        })
    };

    let info = Signal::derive(move || state.with(|s| s.info.clone()));
    let error = Signal::derive(move || state.with(|s| s.error.clone()));

    view! {
        <div class="dashboard dashboard--retailer">
            <RoleHeader role="Retailer"/>
            <main class="dashboard__body">
                <h1>"Retailer Dashboard"</h1>
                <section class="dashboard__card">
                    <h2>"Scan Product QR Code"</h2>
                    <button class="button button--primary" type="button" on:click=move |_| state.update(RetailerState::simulate_scan)>
                        "Simulate QR Scan"
                    </button>
                </section>
                <InfoAlert message=info/>
                <ErrorAlert message=error/>
                <Show when=move || state.with(|s| s.scanned.is_some())>
                    <section class="dashboard__card product-details">
                        <h2>"Product Information"</h2>
                        {scanned_view}
                    </section>
                    <section class="dashboard__card">
                        <h2>"Update Product Information"</h2>
                        {RetailerField::ALL.into_iter().map(field_view).collect_view()}
                        <button class="button button--primary" type="button" on:click=on_update>
                            "Update Product"
                        </button>
                    </section>
                </Show>
            </main>
        </div>
    }
}
