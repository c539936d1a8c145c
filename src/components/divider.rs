//! Decorative separators between menu blocks.

use leptos::prelude::*;

/// Thin rule with a centered star
#[component]
pub fn ElegantDivider(#[prop(optional)] wide: bool) -> impl IntoView {
    view! {
        <div class=if wide { "divider divider-wide" } else { "divider" }>
            <div class="divider-line"></div>
            <div class="divider-star">"✦"</div>
            <div class="divider-line"></div>
        </div>
    }
}
