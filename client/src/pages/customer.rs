//! Customer dashboard: verify a product from its QR payload.
//!
//! Payloads come from the demo button, the manual input or an uploaded image.
//! All three funnel into the same verify request.

use leptos::prelude::*;
use products::VerifyPolicy;

use crate::components::alert::ErrorAlert;
use crate::components::product_details::ProductDetails;
use crate::components::role_header::RoleHeader;
use crate::state::customer::CustomerState;

#[component]
pub fn CustomerPage() -> impl IntoView {
    let state = RwSignal::new(CustomerState::default());

    let run_verify = move |code: String| {
        let policy = state.with_untracked(|s| s.policy);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::verify_product(&code, policy).await;
            state.update(|s| s.finish_verify(result));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (code, policy);
    };

    let on_demo = move |_| {
        let mut next = None;
        state.update(|s| next = s.demo_scan());
        if let Some(code) = next {
            run_verify(code);
        }
    };

    let on_manual = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut next = None;
        state.update(|s| next = s.submit_manual());
        if let Some(code) = next {
            run_verify(code);
        }
    };

    let on_file = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let Some(input) = ev
                .target()
                .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            input.set_value("");

            let mut started = false;
            state.update(|s| started = s.begin_upload());
            if !started {
                return;
            }
            leptos::task::spawn_local(async move {
                let decoded = match crate::util::upload::read_file(file).await {
                    Ok(bytes) => crate::util::upload::decode_qr(&bytes),
                    Err(reason) => Err(reason),
                };
                let mut next = None;
                match decoded {
                    Ok(code) => state.update(|s| next = s.decoded(&code)),
                    Err(reason) => {
                        log::warn!("qr upload decode failed: {reason}");
                        state.update(|s| s.decode_failed(&reason));
                    }
                }
                if let Some(code) = next {
                    run_verify(code);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_policy = move |ev: leptos::ev::Event| {
        if let Ok(policy) = event_target_value(&ev).parse::<VerifyPolicy>() {
            state.update(|s| s.policy = policy);
        }
    };

    let busy = move || state.with(|s| s.loading);
    let error = Signal::derive(move || state.with(|s| s.error.clone()));

    view! {
        <div class="dashboard dashboard--customer">
            <RoleHeader role="Customer"/>
            <main class="dashboard__body">
                <h1>"Verify Your Produce"</h1>
                <section class="dashboard__card">
                    <h2>"Scan QR Code"</h2>
                    <button class="button button--primary" type="button" disabled=busy on:click=on_demo>
                        {move || if busy() { "Verifying..." } else { "Scan Demo QR Code" }}
                    </button>
                    <label class="form-field">
                        <span class="form-field__label">"Upload QR image"</span>
                        <input class="form-input" type="file" accept="image/*" disabled=busy on:change=on_file/>
                    </label>
                    <form class="form-inline" on:submit=on_manual>
                        <input
                            class="form-input"
                            type="text"
                            placeholder="Paste QR code value"
                            prop:value=move || state.with(|s| s.manual_code.clone())
                            on:input=move |ev| state.update(|s| s.manual_code = event_target_value(&ev))
                        />
                        <button class="button" type="submit" disabled=busy>"Verify"</button>
                    </form>
                    <label class="form-field">
                        <span class="form-field__label">"Response check"</span>
                        <select
                            class="form-input"
                            prop:value=move || state.with(|s| s.policy.as_str())
                            on:change=on_policy
                        >
                            <option value={VerifyPolicy::Lenient.as_str()}>"Lenient"</option>
                            <option value={VerifyPolicy::Strict.as_str()}>"Strict"</option>
                        </select>
                    </label>
                </section>
                <ErrorAlert message=error/>
                {move || {
                    state
                        .with(|s| s.verified.clone())
                        .map(|product| view! { <ProductDetails product=product/> })
                }}
            </main>
        </div>
    }
}
