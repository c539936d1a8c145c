//! Site Configuration
//!
//! Compile-time settings for logging, reveal triggers and entrance stagger.

use leptos_reveal::RevealOptions;
use log::LevelFilter;

pub const SITE_NAME: &str = "El Tangerino";

/// Console log level
pub const LOG_LEVEL: LevelFilter = if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info };

/// Carte grid: start a little before the grid scrolls in
pub const CARTE_REVEAL: RevealOptions = RevealOptions::new(0.0).with_root_margin("100px 0px");
/// Category page root
pub const MENU_REVEAL: RevealOptions = RevealOptions::new(0.1);
/// Drink list pages are long; fire as soon as anything shows
pub const LIST_REVEAL: RevealOptions = RevealOptions::new(0.01);
/// Individual sections and cards
pub const ITEM_REVEAL: RevealOptions = RevealOptions::new(0.0);

/// Per-child entrance delay steps (ms)
pub const CARTE_STAGGER_MS: u32 = 150;
pub const CARD_STAGGER_MS: u32 = 50;
pub const ROW_STAGGER_MS: u32 = 20;

/// Longest any child waits before animating in
pub const MAX_STAGGER_MS: u32 = 1200;

/// Entrance delay for the child at `index`
pub fn stagger_delay_ms(index: usize, step_ms: u32) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    index.saturating_mul(step_ms).min(MAX_STAGGER_MS)
}

/// Inline style carrying the entrance delay
pub fn stagger_style(index: usize, step_ms: u32) -> String {
    format!("--stagger: {}ms", stagger_delay_ms(index, step_ms))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_steps() {
        assert_eq!(stagger_delay_ms(0, CARTE_STAGGER_MS), 0);
        assert_eq!(stagger_delay_ms(1, CARTE_STAGGER_MS), 150);
        assert_eq!(stagger_delay_ms(3, ROW_STAGGER_MS), 60);
    }

    #[test]
    fn test_stagger_is_capped() {
        assert_eq!(stagger_delay_ms(61, ROW_STAGGER_MS), MAX_STAGGER_MS);
        assert_eq!(stagger_delay_ms(usize::MAX, CARD_STAGGER_MS), MAX_STAGGER_MS);
    }

    #[test]
    fn test_stagger_style() {
        assert_eq!(stagger_style(2, CARD_STAGGER_MS), "--stagger: 100ms");
    }

    #[test]
    fn test_reveal_presets() {
        assert_eq!(CARTE_REVEAL.root_margin(), Some("100px 0px"));
        assert_eq!(MENU_REVEAL.threshold(), 0.1);
        assert!(LIST_REVEAL.threshold() < MENU_REVEAL.threshold());
    }
}
