//! Role picker.

use leptos::prelude::*;

const ROLES: [(&str, &str, &str); 3] = [
    ("/farmer", "Farmer", "Register harvested produce and print its QR code."),
    ("/retailer", "Retailer", "Scan incoming produce and record retail details."),
    ("/customer", "Customer", "Scan a QR code to verify where your food came from."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"AgriChain"</h1>
            <p class="home-page__subtitle">"Farm-to-table produce traceability"</p>
            <div class="home-page__roles">
                {ROLES
                    .into_iter()
                    .map(|(href, title, blurb)| {
                        view! {
                            <a class="role-card" href=href>
                                <h2>{title}</h2>
                                <p>{blurb}</p>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
