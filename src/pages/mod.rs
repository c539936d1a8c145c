//! Page Views
//!
//! One component per route.

mod carte;
mod category;
mod not_found;

pub use carte::CartePage;
pub use category::CategoryPage;
pub use not_found::NotFoundPage;
