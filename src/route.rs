//! Routing
//!
//! Maps request paths to pages. The path prefix picks the locale:
//! `/` (French), `/eng/` (English), `/es/` (Spanish); categories live at
//! `<prefix>/menu/<slug>/`.

use percent_encoding::percent_decode_str;

use crate::locale::Locale;

/// Page to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    /// Category index
    Carte,
    /// One category by slug
    Category(String),
    NotFound,
}

/// Resolved request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub locale: Locale,
    pub page: Page,
}

impl Route {
    pub fn carte(locale: Locale) -> Self {
        Self { locale, page: Page::Carte }
    }

    pub fn category(locale: Locale, slug: impl Into<String>) -> Self {
        Self { locale, page: Page::Category(slug.into()) }
    }

    /// Resolve a URL pathname. Accepts a missing trailing slash and a
    /// trailing `index.html` as written by static exports.
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let mut segments: Vec<String> = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| percent_decode_str(s).decode_utf8_lossy().into_owned())
            .collect();

        if segments.last().is_some_and(|s| s == "index.html") {
            segments.pop();
        }

        let locale = segments
            .first()
            .and_then(|s| Locale::from_segment(s))
            .unwrap_or_default();
        let rest = if locale == Locale::default() { &segments[..] } else { &segments[1..] };

        let page = match rest {
            [] => Page::Carte,
            [menu, slug] if menu == "menu" && is_slug(slug) => Page::Category(slug.clone()),
            _ => Page::NotFound,
        };
        Self { locale, page }
    }

    /// Canonical link for this route, always with a trailing slash
    pub fn href(&self) -> String {
        match &self.page {
            Page::Carte => format!("{}/", self.locale.prefix()),
            Page::Category(slug) => category_href(self.locale, slug),
            Page::NotFound => format!("{}/", self.locale.prefix()),
        }
    }
}

fn category_href(locale: Locale, slug: &str) -> String {
    format!("{}/menu/{}/", locale.prefix(), slug)
}

/// Lowercase ASCII words joined by dashes
fn is_slug(s: &str) -> bool {
    !s.is_empty()
        && !s.starts_with('-')
        && !s.ends_with('-')
        && s.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_roots() {
        assert_eq!(Route::parse("/"), Route::carte(Locale::Fr));
        assert_eq!(Route::parse(""), Route::carte(Locale::Fr));
        assert_eq!(Route::parse("/eng/"), Route::carte(Locale::En));
        assert_eq!(Route::parse("/es"), Route::carte(Locale::Es));
    }

    #[test]
    fn test_category_paths() {
        assert_eq!(Route::parse("/menu/tapas/"), Route::category(Locale::Fr, "tapas"));
        assert_eq!(Route::parse("/eng/menu/tapas/"), Route::category(Locale::En, "tapas"));
        assert_eq!(Route::parse("/es/menu/tortillas"), Route::category(Locale::Es, "tortillas"));
        assert_eq!(
            Route::parse("/menu/specialites-de-la-maison/index.html"),
            Route::category(Locale::Fr, "specialites-de-la-maison")
        );
        assert_eq!(Route::parse("/eng/menu/cocktails/?from=home#top"), Route::category(Locale::En, "cocktails"));
    }

    #[test]
    fn test_unknown_paths() {
        assert_eq!(Route::parse("/menu/").page, Page::NotFound);
        assert_eq!(Route::parse("/de/menu/tapas/").page, Page::NotFound);
        assert_eq!(Route::parse("/menu/tapas/extra/").page, Page::NotFound);
        assert_eq!(Route::parse("/menu/Tapas/").page, Page::NotFound);
        // Locale is kept so the not-found page speaks the right language
        assert_eq!(Route::parse("/eng/nothing/").locale, Locale::En);
    }

    #[test]
    fn test_percent_decoding() {
        assert_eq!(Route::parse("/menu/rome%2Dnewyork/"), Route::category(Locale::Fr, "rome-newyork"));
        assert_eq!(Route::parse("/menu/caf%C3%A9/").page, Page::NotFound);
    }

    #[test]
    fn test_href_round_trip() {
        for locale in Locale::ALL {
            for route in [Route::carte(locale), Route::category(locale, "desserts")] {
                let href = route.href();
                assert!(href.ends_with('/'));
                assert_eq!(Route::parse(&href), route);
            }
        }
        assert_eq!(category_href(Locale::En, "tapas"), "/eng/menu/tapas/");
        assert_eq!(Route::carte(Locale::Fr).href(), "/");
    }

    #[test]
    fn test_category_links_per_locale() {
        let links: Vec<String> = Locale::ALL.iter().map(|l| Route::category(*l, "tapas").href()).collect();
        assert_eq!(links, vec!["/menu/tapas/", "/eng/menu/tapas/", "/es/menu/tapas/"]);
    }
}
