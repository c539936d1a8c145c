//! Page Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::locale::{Labels, Locale};

/// Per-page values provided via context
#[derive(Clone, Copy)]
pub struct PageContext {
    /// Language of the current page
    pub locale: Locale,
    /// Page-level visibility latch; list rows animate in once it opens
    pub revealed: Signal<bool>,
}

impl PageContext {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            revealed: Signal::stored(true),
        }
    }

    /// Same page, gated on a visibility latch
    pub fn with_reveal(self, revealed: Signal<bool>) -> Self {
        Self { revealed, ..self }
    }

    pub fn labels(&self) -> &'static Labels {
        self.locale.labels()
    }
}

/// Get the page context, falling back to the default locale outside a page
pub fn use_page() -> PageContext {
    use_context::<PageContext>().unwrap_or_else(|| PageContext::new(Locale::default()))
}
