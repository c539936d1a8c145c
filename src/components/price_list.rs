//! Price List Component
//!
//! Compact name / price rows for drink sections, with per-serving columns
//! when the section sells by the glass or bottle.

use leptos::prelude::*;

use crate::config;
use crate::context::use_page;
use crate::models::{serving_cell, MenuItem, MenuSection, ServingColumns};

/// Price cells for one row, in column order
fn row_cells(item: &MenuItem, columns: ServingColumns) -> Vec<String> {
    match (item.price.servings(), columns.any()) {
        (Some(s), true) => [
            columns.glass.then(|| serving_cell(s.glass)),
            columns.half.then(|| serving_cell(s.half)),
            columns.bottle.then(|| serving_cell(s.bottle)),
        ]
        .into_iter()
        .flatten()
        .collect(),
        _ => vec![item.price.display().unwrap_or_else(|| "-".to_string())],
    }
}

#[component]
pub fn PriceList(section: MenuSection) -> impl IntoView {
    let page = use_page();
    let labels = page.labels();
    let revealed = page.revealed;
    let columns = section.serving_columns();

    let header = columns.any().then(|| {
        let names = [
            columns.glass.then_some(labels.glass),
            columns.half.then_some(labels.half_bottle),
            columns.bottle.then_some(labels.bottle),
        ];
        view! {
            <div class="price-row price-header">
                <span class="price-name"></span>
                {names.into_iter().flatten().map(|n| view! { <span class="price-cell">{n}</span> }).collect_view()}
            </div>
        }
    });

    let rows = section
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let cells = row_cells(item, columns);
            let short = item.short().map(str::to_owned);
            view! {
                <div
                    class=move || if revealed.get() { "price-row revealed" } else { "price-row" }
                    style=config::stagger_style(index, config::ROW_STAGGER_MS)
                >
                    <span class="price-name">
                        {item.name.clone()}
                        {short.map(|s| view! { <small class="price-note">{s}</small> })}
                    </span>
                    {cells.into_iter().map(|c| view! { <span class="price-cell">{c}</span> }).collect_view()}
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="price-list">
            {section.heading().map(|h| view! { <h3 class="section-title">{h.to_owned()}</h3> })}
            {header}
            {rows}
        </div>
    }
}
