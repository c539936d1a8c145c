//! El Tangerino Frontend App
//!
//! Resolves the request path once and renders the matching page.

use leptos::prelude::*;

use crate::config;
use crate::context::PageContext;
use crate::locale::Locale;
use crate::pages::{CartePage, CategoryPage, NotFoundPage};
use crate::route::{Page, Route};

/// Pathname of the current document
fn current_path() -> String {
    web_sys::window()
        .and_then(|win| win.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Set `<html lang>` and the tab title for the resolved page
fn apply_document_meta(locale: Locale) {
    let Some(doc) = web_sys::window().and_then(|win| win.document()) else {
        return;
    };
    if let Some(root) = doc.document_element() {
        let _ = root.set_attribute("lang", locale.html_lang());
    }
    doc.set_title(config::SITE_NAME);
}

#[component]
pub fn App() -> impl IntoView {
    let path = current_path();
    let route = Route::parse(&path);
    log::info!("[APP] {} -> {:?}", path, route);

    apply_document_meta(route.locale);
    provide_context(PageContext::new(route.locale));

    let home = Route::carte(route.locale).href();
    let page = match route.page {
        Page::Carte => view! { <CartePage /> }.into_any(),
        Page::Category(slug) => view! { <CategoryPage slug=slug /> }.into_any(),
        Page::NotFound => view! { <NotFoundPage /> }.into_any(),
    };

    view! {
        <div class="site">
            <header class="site-header">
                <a class="site-name" href=home>{config::SITE_NAME}</a>
            </header>
            <main class="site-main">
                {page}
            </main>
        </div>
    }
}
