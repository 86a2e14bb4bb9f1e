//! Farmer dashboard: register a harvest and show its QR code.

use leptos::prelude::*;

use crate::components::alert::ErrorAlert;
use crate::components::role_header::RoleHeader;
use crate::state::farmer::{FarmerField, FarmerState};

#[component]
pub fn FarmerPage() -> impl IntoView {
    let state = RwSignal::new(FarmerState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut next = None;
        state.update(|s| next = s.begin_submit());
        let Some(request) = next else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::register_product(&request).await;
            state.update(|s| s.finish_submit(result));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    let field_view = move |field: FarmerField| {
        let value = move || state.with(|s| s.form.get(field).to_owned());
        let on_input = move |ev: leptos::ev::Event| state.update(|s| s.form.set(field, event_target_value(&ev)));
        let control = if field.multiline() {
            view! { <textarea class="form-input" rows="3" prop:value=value on:input=on_input></textarea> }.into_any()
        } else {
            view! {
                <input
                    class="form-input"
                    type={field.input_type()}
                    step={(field == FarmerField::PriceForFarmer).then_some("0.01")}
                    prop:value=value
                    on:input=on_input
                />
            }
            .into_any()
        };
        view! {
            <label class="form-field">
                <span class="form-field__label">{field.label()} {field.required().then_some(" *")}</span>
                {control}
            </label>
        }
    };

    let error = Signal::derive(move || state.with(|s| s.error.clone()));
    let busy = move || state.with(|s| s.loading);

    view! {
        <div class="dashboard dashboard--farmer">
            <RoleHeader role="Farmer"/>
            <main class="dashboard__body">
                <h1>"Farmer Dashboard"</h1>
                <form class="dashboard__card registration-form" on:submit=on_submit>
                    {FarmerField::ALL.into_iter().map(field_view).collect_view()}
                    <div class="form-actions">
                        <button class="button button--primary" type="submit" disabled=busy>
                            {move || if busy() { "Registering..." } else { "Register Product" }}
                        </button>
                        <button class="button" type="button" on:click=move |_| state.update(FarmerState::reset)>
                            "Reset"
                        </button>
                    </div>
                </form>
                <ErrorAlert message=error/>
                <Show when=move || state.with(|s| s.qr_code.is_some())>
                    <section class="dashboard__card qr-result">
                        <h2>"Product QR Code"</h2>
                        <img
                            class="qr-result__image"
                            alt="Product QR code"
                            src=move || state.with(|s| s.qr_code.clone().unwrap_or_default())
                        />
                        <p class="qr-result__message">
                            {move || state.with(FarmerState::success_message).unwrap_or_default()}
                        </p>
                    </section>
                </Show>
            </main>
        </div>
    }
}
