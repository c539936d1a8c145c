//! Menu Models
//!
//! Data structures for the embedded menu content.

use serde::{Deserialize, Serialize};

/// Item price as written on the menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    /// Single amount, e.g. `140`
    Amount(u32),
    /// Free-form label, e.g. `"30 / 60"` for half / full portion
    Label(String),
    /// Per-serving amounts for drink tables
    Servings(Servings),
}

impl Price {
    /// Single-cell text; `None` for per-serving prices
    pub fn display(&self) -> Option<String> {
        match self {
            Price::Amount(amount) => Some(amount.to_string()),
            Price::Label(label) => Some(label.trim().to_string()),
            Price::Servings(_) => None,
        }
    }

    pub fn servings(&self) -> Option<&Servings> {
        match self {
            Price::Servings(servings) => Some(servings),
            _ => None,
        }
    }
}

/// Glass / half bottle / bottle prices; a missing serving shows as a dash
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Servings {
    #[serde(default)]
    pub glass: Option<u32>,
    #[serde(default)]
    pub half: Option<u32>,
    #[serde(default)]
    pub bottle: Option<u32>,
}

/// Text for one serving cell
pub fn serving_cell(amount: Option<u32>) -> String {
    amount.map(|a| a.to_string()).unwrap_or_else(|| "-".to_string())
}

/// Marker shown on a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Badge {
    New,
}

/// One priced menu entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub price: Price,
    /// Always-visible summary
    #[serde(default, rename = "short")]
    pub short_text: String,
    /// Revealed only when the card is expanded
    #[serde(default, rename = "detail")]
    pub detail_text: Option<String>,
    #[serde(default)]
    pub badge: Option<Badge>,
    /// Serving-size tag, e.g. "2 pers"
    #[serde(default, rename = "portion")]
    pub portion_note: Option<String>,
}

fn non_blank(text: &str) -> Option<&str> {
    let text = text.trim();
    (!text.is_empty()).then_some(text)
}

impl MenuItem {
    pub fn short(&self) -> Option<&str> {
        non_blank(&self.short_text)
    }

    /// Expandable text; blank counts as absent
    pub fn detail(&self) -> Option<&str> {
        self.detail_text.as_deref().and_then(non_blank)
    }

    /// Whether the card gets an expand affordance
    pub fn has_detail(&self) -> bool {
        self.detail().is_some()
    }

    pub fn portion(&self) -> Option<&str> {
        self.portion_note.as_deref().and_then(non_blank)
    }

    /// Detail text to show for the given expansion state
    pub fn shown_detail(&self, expanded: bool) -> Option<&str> {
        if expanded {
            self.detail()
        } else {
            None
        }
    }
}

/// How a section's items are laid out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionLayout {
    /// Expandable cards
    #[default]
    Cards,
    /// Compact name / price rows
    List,
}

/// Which serving columns a list section needs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServingColumns {
    pub glass: bool,
    pub half: bool,
    pub bottle: bool,
}

impl ServingColumns {
    pub fn any(&self) -> bool {
        self.glass || self.half || self.bottle
    }
}

/// A titled group of items within one category page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuSection {
    /// Heading; empty for a single implicit section
    #[serde(default)]
    pub title: String,
    /// Super-heading shared by consecutive sections
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub layout: SectionLayout,
    pub items: Vec<MenuItem>,
}

impl MenuSection {
    pub fn heading(&self) -> Option<&str> {
        non_blank(&self.title)
    }

    /// Serving columns used by at least one item
    pub fn serving_columns(&self) -> ServingColumns {
        self.items
            .iter()
            .filter_map(|item| item.price.servings())
            .fold(ServingColumns::default(), |cols, s| ServingColumns {
                glass: cols.glass || s.glass.is_some(),
                half: cols.half || s.half.is_some(),
                bottle: cols.bottle || s.bottle.is_some(),
            })
    }
}

/// Run of consecutive sections rendered under one optional group heading
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBlock {
    pub heading: Option<String>,
    pub sections: Vec<MenuSection>,
}

/// All sections of one category page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryMenu {
    pub slug: String,
    pub sections: Vec<MenuSection>,
}

impl CategoryMenu {
    /// Group consecutive sections that share a `group`; separators go
    /// between the returned blocks
    pub fn blocks(&self) -> Vec<SectionBlock> {
        let mut blocks: Vec<SectionBlock> = Vec::new();
        for section in &self.sections {
            let group = section.group.as_deref().and_then(non_blank);
            match blocks.last_mut() {
                Some(last) if group.is_some() && last.heading.as_deref() == group => {
                    last.sections.push(section.clone());
                }
                _ => blocks.push(SectionBlock {
                    heading: group.map(str::to_string),
                    sections: vec![section.clone()],
                }),
            }
        }
        blocks
    }
}

/// Entry on the carte (category index)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image: String,
    pub slug: String,
}

/// Locale root page content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Carte {
    pub heading: String,
    pub intro: String,
    /// Zero hides the notice
    #[serde(default)]
    pub service_charge_percent: u32,
    pub categories: Vec<Category>,
}

impl Carte {
    pub fn category(&self, slug: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.slug == slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(name: &str, detail: Option<&str>) -> MenuItem {
        MenuItem {
            name: name.to_string(),
            price: Price::Amount(80),
            short_text: format!("{} short", name),
            detail_text: detail.map(str::to_string),
            badge: None,
            portion_note: None,
        }
    }

    fn make_section(title: &str, group: Option<&str>) -> MenuSection {
        MenuSection {
            title: title.to_string(),
            group: group.map(str::to_string),
            layout: SectionLayout::List,
            items: vec![],
        }
    }

    #[test]
    fn test_price_variants() {
        let amount: Price = serde_json::from_str("140").unwrap();
        assert_eq!(amount, Price::Amount(140));
        assert_eq!(amount.display().as_deref(), Some("140"));

        let label: Price = serde_json::from_str("\"30 / 60\"").unwrap();
        assert_eq!(label.display().as_deref(), Some("30 / 60"));

        let servings: Price = serde_json::from_str(r#"{"glass": 110, "bottle": 320}"#).unwrap();
        assert_eq!(servings.display(), None);
        assert_eq!(
            servings.servings(),
            Some(&Servings { glass: Some(110), half: None, bottle: Some(320) })
        );
    }

    #[test]
    fn test_serving_cell_dash() {
        assert_eq!(serving_cell(Some(2000)), "2000");
        assert_eq!(serving_cell(None), "-");
    }

    #[test]
    fn test_optional_fields_absent() {
        let item: MenuItem = serde_json::from_str(r#"{"name": "Pastis", "price": 70}"#).unwrap();
        assert_eq!(item.short(), None);
        assert!(!item.has_detail());
        assert_eq!(item.portion(), None);
        assert_eq!(item.badge, None);
        assert_eq!(item.shown_detail(true), None);
    }

    #[test]
    fn test_blank_detail_is_absent() {
        let item = make_item("A", Some("   "));
        assert!(!item.has_detail());
        assert_eq!(item.shown_detail(true), None);
    }

    #[test]
    fn test_shown_detail_follows_expansion() {
        let item = make_item("A", Some("dA"));
        assert_eq!(item.shown_detail(false), None);
        assert_eq!(item.shown_detail(true), Some("dA"));
    }

    #[test]
    fn test_full_item_parses() {
        let json = r#"{
            "name": "SÉLECTION DE POISSONS",
            "price": 580,
            "short": "Assortiment de poissons frais",
            "detail": "Sélection du jour",
            "portion": "2 pers",
            "badge": "new"
        }"#;
        let item: MenuItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.portion(), Some("2 pers"));
        assert_eq!(item.badge, Some(Badge::New));
        assert!(item.has_detail());
    }

    #[test]
    fn test_serving_columns() {
        let mut section = make_section("ROSÉ", None);
        section.items.push(MenuItem {
            price: Price::Servings(Servings { glass: None, half: None, bottle: Some(340) }),
            ..make_item("Médaillon", None)
        });
        section.items.push(MenuItem {
            price: Price::Servings(Servings { glass: Some(110), half: None, bottle: Some(320) }),
            ..make_item("Manon", None)
        });
        let cols = section.serving_columns();
        assert!(cols.glass && cols.bottle && !cols.half);

        let plain = make_section("BIÈRES", None);
        assert!(!plain.serving_columns().any());
    }

    #[test]
    fn test_blocks_group_consecutive_sections() {
        let menu = CategoryMenu {
            slug: "champagne".to_string(),
            sections: vec![
                make_section("CHAMPAGNES", None),
                make_section("BLANC", Some("VINS MAROCAINS")),
                make_section("ROUGE", Some("VINS MAROCAINS")),
                make_section("BLANC", Some("VINS DU MONDE")),
                make_section("RHUM", None),
                make_section("GIN", None),
            ],
        };
        let blocks = menu.blocks();
        assert_eq!(blocks.len(), 5);
        assert_eq!(blocks[0].heading, None);
        assert_eq!(blocks[1].heading.as_deref(), Some("VINS MAROCAINS"));
        assert_eq!(blocks[1].sections.len(), 2);
        assert_eq!(blocks[2].heading.as_deref(), Some("VINS DU MONDE"));
        // Ungrouped sections never merge
        assert_eq!(blocks[3].sections.len(), 1);
        assert_eq!(blocks[4].sections.len(), 1);
    }

    #[test]
    fn test_empty_title_has_no_heading() {
        assert_eq!(make_section("", None).heading(), None);
        assert_eq!(make_section("TAPAS", None).heading(), Some("TAPAS"));
    }
}
