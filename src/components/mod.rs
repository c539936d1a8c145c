//! UI Components
//!
//! Reusable Leptos components.

mod menu_item_card;
mod menu_section;
mod price_list;
mod category_grid;
mod divider;

pub use menu_item_card::MenuItemCard;
pub use menu_section::MenuSectionView;
pub use price_list::PriceList;
pub use category_grid::CategoryGrid;
pub use divider::ElegantDivider;
