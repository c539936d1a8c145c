//! Category Page
//!
//! All sections of one category, card grids and price lists interleaved
//! with separators.

use leptos::prelude::*;
use leptos_reveal::{use_reveal, RevealOptions};

use crate::components::{ElegantDivider, MenuSectionView, PriceList};
use crate::config;
use crate::content;
use crate::context::use_page;
use crate::models::{CategoryMenu, SectionLayout};
use crate::pages::NotFoundPage;
use crate::route::Route;

#[component]
pub fn CategoryPage(slug: String) -> impl IntoView {
    let page = use_page();
    let title = content::carte(page.locale)
        .ok()
        .and_then(|carte| carte.category(&slug).map(|c| c.title.clone()));

    match content::menu(page.locale, &slug) {
        Ok(menu) => view! { <MenuView menu=menu title=title /> }.into_any(),
        Err(err) => {
            log::warn!("[CONTENT] {}", err);
            view! { <NotFoundPage /> }.into_any()
        }
    }
}

/// Page latch settings. Any list section on the page waits on this latch,
/// so those pages fire as soon as anything shows.
fn page_reveal(menu: &CategoryMenu) -> RevealOptions {
    if menu.sections.iter().any(|s| s.layout == SectionLayout::List) {
        config::LIST_REVEAL
    } else {
        config::MENU_REVEAL
    }
}

#[component]
fn MenuView(menu: CategoryMenu, title: Option<String>) -> impl IntoView {
    // The header is short enough for any threshold; the page body is not
    let header = NodeRef::<leptos::html::Header>::new();
    let revealed = use_reveal(header, page_reveal(&menu));
    let page = use_page().with_reveal(revealed);
    provide_context(page);

    let blocks = menu.blocks();
    let last = blocks.len().saturating_sub(1);
    let body = blocks
        .into_iter()
        .enumerate()
        .map(|(index, block)| {
            let grid_class = if block.sections.len() > 1 { "block-grid" } else { "block-single" };
            let sections = block
                .sections
                .into_iter()
                .map(|section| match section.layout {
                    SectionLayout::Cards => view! { <MenuSectionView section=section /> }.into_any(),
                    SectionLayout::List => view! { <PriceList section=section /> }.into_any(),
                })
                .collect_view();
            view! {
                <div class="menu-block">
                    {block.heading.map(|h| view! { <h2 class="block-title">{h}</h2> })}
                    <div class=grid_class>{sections}</div>
                </div>
                {(index < last).then(|| view! { <ElegantDivider /> })}
            }
        })
        .collect_view();

    view! {
        <section class=move || if revealed.get() { "menu-page revealed" } else { "menu-page" }>
            <ElegantDivider wide=true />

            <header node_ref=header class="menu-header">
                <a class="back-link" href=Route::carte(page.locale).href()>
                    "← "{page.labels().back_to_carte}
                </a>
                {title.map(|t| view! { <h1 class="menu-title">{t}</h1> })}
            </header>

            <div class="menu-content">{body}</div>

            <ElegantDivider wide=true />
        </section>
    }
}
