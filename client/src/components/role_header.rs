//! Dashboard header with the role badge and a way back to role selection.

use leptos::prelude::*;

#[component]
pub fn RoleHeader(role: &'static str) -> impl IntoView {
    view! {
        <header class="role-header">
            <div class="role-header__brand">
                <span class="role-header__name">"AgriChain"</span>
                <span class={format!("role-header__badge role-header__badge--{}", role.to_ascii_lowercase())}>
                    {role}
                </span>
            </div>
            <a class="role-header__exit" href="/">"Logout"</a>
        </header>
    }
}
