//! Locales
//!
//! The three hand-maintained site languages and the UI labels for each.
//! Menu text itself lives in `content/<locale>/`.

use crate::models::Badge;

/// Site language, chosen by path prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// French, served at the site root
    #[default]
    Fr,
    /// English, served under `/eng`
    En,
    /// Spanish, served under `/es`
    Es,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::Fr, Locale::En, Locale::Es];

    /// Path prefix without trailing slash ("" for the default locale)
    pub fn prefix(&self) -> &'static str {
        match self {
            Locale::Fr => "",
            Locale::En => "/eng",
            Locale::Es => "/es",
        }
    }

    /// Locale owning a leading path segment, if any
    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "eng" => Some(Locale::En),
            "es" => Some(Locale::Es),
            _ => None,
        }
    }

    /// Value for the document `lang` attribute
    pub fn html_lang(&self) -> &'static str {
        match self {
            Locale::Fr => "fr",
            Locale::En => "en",
            Locale::Es => "es",
        }
    }

    /// Content directory name
    pub fn as_str(&self) -> &'static str {
        self.html_lang()
    }

    pub fn labels(&self) -> &'static Labels {
        match self {
            Locale::Fr => &FR,
            Locale::En => &EN,
            Locale::Es => &ES,
        }
    }
}

/// Fixed UI strings for one locale
#[derive(Debug)]
pub struct Labels {
    pub details: &'static str,
    pub less: &'static str,
    pub new_badge: &'static str,
    pub explore: &'static str,
    pub back_to_carte: &'static str,
    pub not_found_title: &'static str,
    pub not_found_text: &'static str,
    pub glass: &'static str,
    pub half_bottle: &'static str,
    pub bottle: &'static str,
    service_notice: (&'static str, &'static str),
}

impl Labels {
    pub fn badge(&self, badge: Badge) -> &'static str {
        match badge {
            Badge::New => self.new_badge,
        }
    }

    /// Expand affordance text for the current state
    pub fn toggle(&self, expanded: bool) -> &'static str {
        if expanded {
            self.less
        } else {
            self.details
        }
    }

    /// Service-charge notice split around the percentage, so the figure can be
    /// highlighted on its own
    pub fn service_notice(&self, percent: u32) -> (&'static str, String, &'static str) {
        (self.service_notice.0, format!("{}%", percent), self.service_notice.1)
    }
}

static FR: Labels = Labels {
    details: "Détails",
    less: "Moins",
    new_badge: "NOUVEAU!",
    explore: "Explorer",
    back_to_carte: "Retour à la carte",
    not_found_title: "Page introuvable",
    not_found_text: "Cette page n'existe pas ou n'est pas encore disponible dans cette langue.",
    glass: "Verre",
    half_bottle: "½ Bout.",
    bottle: "Bouteille",
    service_notice: (
        "Nous informons notre aimable clientèle qu'un service de ",
        " sera ajouté à votre addition.",
    ),
};

static EN: Labels = Labels {
    details: "Details",
    less: "Less",
    new_badge: "NEW!",
    explore: "Explore",
    back_to_carte: "Back to the menu",
    not_found_title: "Page not found",
    not_found_text: "This page does not exist or is not yet available in this language.",
    glass: "Glass",
    half_bottle: "½ Bottle",
    bottle: "Bottle",
    service_notice: (
        "We inform our valued customers that a ",
        " service charge will be added to your bill.",
    ),
};

static ES: Labels = Labels {
    details: "Detalles",
    less: "Menos",
    new_badge: "¡NUEVO!",
    explore: "Explorar",
    back_to_carte: "Volver a la carta",
    not_found_title: "Página no encontrada",
    not_found_text: "Esta página no existe o aún no está disponible en este idioma.",
    glass: "Copa",
    half_bottle: "½ Botella",
    bottle: "Botella",
    service_notice: (
        "Informamos a nuestra distinguida clientela que se añadirá un servicio del ",
        " a su cuenta.",
    ),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_and_segment_agree() {
        for locale in Locale::ALL {
            let segment = locale.prefix().trim_start_matches('/');
            if locale == Locale::default() {
                assert_eq!(segment, "");
            } else {
                assert_eq!(Locale::from_segment(segment), Some(locale));
            }
        }
        assert_eq!(Locale::from_segment("fr"), None);
        assert_eq!(Locale::from_segment("menu"), None);
    }

    #[test]
    fn test_toggle_labels() {
        assert_eq!(Locale::Fr.labels().toggle(false), "Détails");
        assert_eq!(Locale::Fr.labels().toggle(true), "Moins");
        assert_eq!(Locale::En.labels().toggle(true), "Less");
        assert_eq!(Locale::Es.labels().toggle(false), "Detalles");
    }

    #[test]
    fn test_service_notice() {
        let (before, pct, after) = Locale::En.labels().service_notice(6);
        assert_eq!(format!("{}{}{}", before, pct, after),
            "We inform our valued customers that a 6% service charge will be added to your bill.");
    }
}
