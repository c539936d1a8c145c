//! Embedded Content
//!
//! Locale-indexed menu content keyed by `(locale, slug)`, compiled into the
//! bundle from the JSON files under `content/`. Locales carry different
//! subsets of the categories.

use crate::error::{ContentError, Result};
use crate::locale::Locale;
use crate::models::{Carte, CategoryMenu};

const CARTES: &[(Locale, &str)] = &[
    (Locale::Fr, include_str!("../content/fr/carte.json")),
    (Locale::En, include_str!("../content/en/carte.json")),
    (Locale::Es, include_str!("../content/es/carte.json")),
];

const MENUS: &[(Locale, &str, &str)] = &[
    (Locale::Fr, "beers", include_str!("../content/fr/beers.json")),
    (Locale::Fr, "champagne", include_str!("../content/fr/champagne.json")),
    (Locale::Fr, "desserts", include_str!("../content/fr/desserts.json")),
    (Locale::Fr, "poissons", include_str!("../content/fr/poissons.json")),
    (Locale::Fr, "tapas", include_str!("../content/fr/tapas.json")),
    (Locale::Fr, "tortillas", include_str!("../content/fr/tortillas.json")),
    (Locale::En, "cocktails", include_str!("../content/en/cocktails.json")),
    (Locale::En, "poissons", include_str!("../content/en/poissons.json")),
    (Locale::En, "tapas", include_str!("../content/en/tapas.json")),
    (Locale::Es, "tapas", include_str!("../content/es/tapas.json")),
    (Locale::Es, "tortillas", include_str!("../content/es/tortillas.json")),
];

const CARTE_SLUG: &str = "carte";

/// Category index for a locale
pub fn carte(locale: Locale) -> Result<Carte> {
    let json = CARTES
        .iter()
        .find(|(l, _)| *l == locale)
        .map(|(_, json)| *json)
        .ok_or_else(|| ContentError::Missing { locale, slug: CARTE_SLUG.to_string() })?;

    serde_json::from_str(json).map_err(|source| ContentError::Parse {
        locale,
        slug: CARTE_SLUG.to_string(),
        source,
    })
}

/// Menu sections of one category in one locale
pub fn menu(locale: Locale, slug: &str) -> Result<CategoryMenu> {
    let json = MENUS
        .iter()
        .find(|(l, s, _)| *l == locale && *s == slug)
        .map(|(_, _, json)| *json)
        .ok_or_else(|| ContentError::Missing { locale, slug: slug.to_string() })?;

    let menu: CategoryMenu = serde_json::from_str(json).map_err(|source| ContentError::Parse {
        locale,
        slug: slug.to_string(),
        source,
    })?;

    if menu.slug != slug {
        return Err(ContentError::SlugMismatch { expected: slug.to_string(), found: menu.slug });
    }

    log::debug!("[CONTENT] {}/{}: {} sections", locale.as_str(), slug, menu.sections.len());
    Ok(menu)
}
