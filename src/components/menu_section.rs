//! Menu Section Component
//!
//! Titled grid of item cards. Owns the section's expansion state.

use leptos::prelude::*;
use leptos_reveal::use_reveal;

use crate::components::MenuItemCard;
use crate::config;
use crate::expansion::ExpansionState;
use crate::models::MenuSection;

/// Card grid for one section; at most one card shows its details at a time
#[component]
pub fn MenuSectionView(section: MenuSection) -> impl IntoView {
    // Local to this section instance, reset on remount
    let (expansion, set_expansion) = signal(ExpansionState::default());
    let section_ref = NodeRef::<leptos::html::Div>::new();
    let revealed = use_reveal(section_ref, config::ITEM_REVEAL);

    let title = section.title.clone();
    let heading = section.heading().map(str::to_owned);

    let cards = section
        .items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let is_expanded = Memo::new(move |_| expansion.with(|s| s.is_expanded(index)));
            let title = title.clone();
            let on_toggle = Callback::new(move |_: ()| {
                set_expansion.update(|s| s.toggle(index));
                log::debug!("[MENU] {:?} expanded={:?}", title, expansion.with_untracked(|s| s.expanded()));
            });
            view! {
                <MenuItemCard
                    item=item
                    index=index
                    is_expanded=is_expanded
                    on_toggle=on_toggle
                />
            }
        })
        .collect_view();

    view! {
        <div
            node_ref=section_ref
            class=move || if revealed.get() { "menu-section revealed" } else { "menu-section" }
        >
            {heading.map(|h| view! { <h3 class="section-title">{h}</h3> })}
            <div class="card-grid">
                {cards}
            </div>
        </div>
    }
}
