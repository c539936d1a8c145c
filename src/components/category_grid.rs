//! Category Grid Component
//!
//! Carte cards linking to each category page.

use leptos::prelude::*;

use crate::config;
use crate::context::use_page;
use crate::models::Category;
use crate::route::Route;

#[component]
pub fn CategoryGrid(categories: Vec<Category>) -> impl IntoView {
    let page = use_page();
    let labels = page.labels();
    let revealed = page.revealed;

    let cards = categories
        .into_iter()
        .enumerate()
        .map(|(index, category)| {
            let href = Route::category(page.locale, category.slug.as_str()).href();
            let number = format!("{:02}", category.id);
            let background = format!("background-image: url('{}')", category.image);
            view! {
                <a
                    href=href
                    class=move || if revealed.get() { "carte-card revealed" } else { "carte-card" }
                    style=config::stagger_style(index, config::CARTE_STAGGER_MS)
                >
                    <div class="carte-image" style=background></div>
                    <div class="carte-overlay"></div>
                    <span class="corner corner-top"></span>
                    <span class="corner corner-bottom"></span>
                    <div class="carte-content">
                        <div>
                            <span class="carte-number">{number}</span>
                            <h3 class="carte-title">{category.title}</h3>
                            <div class="card-rule"></div>
                        </div>
                        <div>
                            <p class="carte-description">{category.description}</p>
                            <span class="carte-explore">{labels.explore}</span>
                        </div>
                    </div>
                </a>
            }
        })
        .collect_view();

    view! { <div class="carte-grid">{cards}</div> }
}
