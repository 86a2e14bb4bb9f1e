//! Error and notice panels.

use leptos::prelude::*;

/// Red alert shown while `message` holds an error.
#[component]
pub fn ErrorAlert(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="alert alert--error" role="alert">
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}

#[component]
pub fn InfoAlert(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="alert alert--info" role="status">
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
