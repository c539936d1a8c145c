//! Menu Item Card Component
//!
//! One menu entry with an optional expandable detail block.

use leptos::prelude::*;
use leptos_reveal::use_reveal;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::config;
use crate::context::use_page;
use crate::expansion::entered_expanded;
use crate::models::MenuItem;

/// Smooth-scroll an element to the vertical center of the viewport
fn scroll_to_center(el: &web_sys::Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Center);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Forward an activation to the section. Cards without detail have nothing
/// to reveal, so their activations are dropped.
fn request_toggle(has_detail: bool, on_toggle: impl FnOnce()) -> bool {
    if has_detail {
        on_toggle();
    }
    has_detail
}

/// Card for a single item.
///
/// The card never owns its expansion state: activation only calls
/// `on_toggle`, and the parent section decides. Items without detail text
/// get no affordance and ignore activation.
#[component]
pub fn MenuItemCard(
    item: MenuItem,
    index: usize,
    #[prop(into)] is_expanded: Signal<bool>,
    #[prop(into)] on_toggle: Callback<()>,
) -> impl IntoView {
    let labels = use_page().labels();
    let card_ref = NodeRef::<leptos::html::Div>::new();
    let revealed = use_reveal(card_ref, config::ITEM_REVEAL);

    let has_detail = item.has_detail();
    let price = item.price.display();
    let name = item.name.clone();
    let short = item.short().map(str::to_owned);
    let portion = item.portion().map(str::to_owned);
    let badge = item.badge.map(|b| labels.badge(b));
    let item = StoredValue::new(item);

    // Bring the revealed text into view on the opening edge only
    Effect::new(move |was_expanded: Option<bool>| {
        let expanded = is_expanded.get();
        if entered_expanded(was_expanded, expanded) {
            if let Some(el) = card_ref.get_untracked() {
                scroll_to_center(&el);
            }
        }
        expanded
    });

    let activate = move || {
        request_toggle(has_detail, || on_toggle.run(()));
    };

    let card_class = move || {
        let mut c = String::from("menu-card");
        if has_detail { c.push_str(" expandable"); }
        if is_expanded.get() { c.push_str(" expanded"); }
        if revealed.get() { c.push_str(" revealed"); }
        c
    };

    view! {
        <div
            node_ref=card_ref
            class=card_class
            style=config::stagger_style(index, config::CARD_STAGGER_MS)
            role=has_detail.then_some("button")
            tabindex=has_detail.then_some("0")
            aria-expanded=move || has_detail.then(|| is_expanded.get().to_string())
            on:click=move |_| activate()
            on:keydown=move |ev: web_sys::KeyboardEvent| {
                if matches!(ev.key().as_str(), "Enter" | " ") {
                    ev.prevent_default();
                    activate();
                }
            }
        >
            <span class="corner corner-top"></span>
            <span class="corner corner-bottom"></span>

            <div class="card-body">
                <div class="card-header">
                    <h3 class="card-name">{name}</h3>
                    {price.map(|p| view! { <span class="card-price">{p}</span> })}
                </div>

                {portion.map(|p| view! { <span class="card-portion">{p}</span> })}

                <div class="card-rule"></div>

                {short.map(|s| view! { <p class="card-short">{s}</p> })}

                {move || {
                    item.with_value(|item| {
                        item.shown_detail(is_expanded.get()).map(|text| {
                            view! {
                                <div class="card-detail">
                                    <p>{text.to_owned()}</p>
                                </div>
                            }
                        })
                    })
                }}

                {has_detail.then(|| view! {
                    <div class="card-toggle">
                        <span>{move || labels.toggle(is_expanded.get())}</span>
                        <svg
                            class="card-chevron"
                            xmlns="http://www.w3.org/2000/svg"
                            width="12"
                            height="12"
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="currentColor"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                        >
                            <polyline points="6 9 12 15 18 9"></polyline>
                        </svg>
                    </div>
                })}

                {badge.map(|b| view! { <span class="card-badge">{b}</span> })}
            </div>

            <div class="card-highlight"></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_activation_with_detail_requests_toggle() {
        let calls = Cell::new(0);
        assert!(request_toggle(true, || calls.set(calls.get() + 1)));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_activation_without_detail_is_ignored() {
        let calls = Cell::new(0);
        assert!(!request_toggle(false, || calls.set(calls.get() + 1)));
        assert_eq!(calls.get(), 0);
    }
}
