//! Not Found Page
//!
//! Unknown paths and categories without content in the current locale.

use leptos::prelude::*;

use crate::context::use_page;
use crate::route::Route;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let page = use_page();
    let labels = page.labels();

    view! {
        <section class="not-found">
            <h1>{labels.not_found_title}</h1>
            <p>{labels.not_found_text}</p>
            <a class="back-link" href=Route::carte(page.locale).href()>{labels.back_to_carte}</a>
        </section>
    }
}
