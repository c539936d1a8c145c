//! Carte Page
//!
//! Locale root: heading, category grid and the service-charge notice.

use leptos::prelude::*;
use leptos_reveal::use_reveal;

use crate::components::{CategoryGrid, ElegantDivider};
use crate::config;
use crate::content;
use crate::context::use_page;
use crate::models::Carte;
use crate::pages::NotFoundPage;

#[component]
pub fn CartePage() -> impl IntoView {
    let page = use_page();
    match content::carte(page.locale) {
        Ok(carte) => view! { <CarteView carte=carte /> }.into_any(),
        Err(err) => {
            log::error!("[CONTENT] {}", err);
            view! { <NotFoundPage /> }.into_any()
        }
    }
}

#[component]
fn CarteView(carte: Carte) -> impl IntoView {
    let root = NodeRef::<leptos::html::Section>::new();
    let revealed = use_reveal(root, config::CARTE_REVEAL);
    let page = use_page().with_reveal(revealed);
    provide_context(page);

    let notice = (carte.service_charge_percent > 0).then(|| {
        let (before, percent, after) = page.labels().service_notice(carte.service_charge_percent);
        view! {
            <div class="service-notice">
                <p>{before}<span class="service-percent">{percent}</span>{after}</p>
            </div>
        }
    });

    view! {
        <section
            id="menu"
            node_ref=root
            class=move || if revealed.get() { "carte revealed" } else { "carte" }
        >
            <ElegantDivider wide=true />

            <div class="carte-intro">
                <h2 class="carte-heading">{carte.heading}</h2>
                <p>{carte.intro}</p>
            </div>

            <CategoryGrid categories=carte.categories />

            {notice}

            <ElegantDivider wide=true />
        </section>
    }
}
