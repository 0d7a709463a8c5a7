//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode` - single-width characters that work in all terminals
//! - `IconMode::NerdFonts` - Nerd Font glyphs (requires a Nerd Font installed)

use lstudio_app::config::IconMode;
use lstudio_core::{CatalogIcon, StepIcon};

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    fn pick(&self, nerd: &'static str, unicode: &'static str) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => nerd,
            IconMode::Unicode => unicode,
        }
    }

    /// Glyph for an explanation step
    pub fn step(&self, icon: StepIcon) -> &'static str {
        match icon {
            StepIcon::Predict => self.pick("\u{f0eb}", "\u{25d4}"), // nf-fa-lightbulb_o / ◔
            StepIcon::Question => self.pick("\u{f128}", "?"),
            StepIcon::Clarify => self.pick("\u{f05a}", "\u{25ce}"), // nf-fa-info_circle / ◎
            StepIcon::Summarize => self.pick("\u{f0ca}", "\u{2261}"), // nf-fa-list_ul / ≡
            StepIcon::Group => self.pick("\u{f0c0}", "\u{2234}"),   // nf-fa-users / ∴
            StepIcon::Discuss => self.pick("\u{f086}", "\u{275d}"), // nf-fa-comments / ❝
            StepIcon::Create => self.pick("\u{f040}", "\u{270e}"),  // nf-fa-pencil / ✎
            StepIcon::Present => self.pick("\u{f0a1}", "\u{25a3}"), // nf-fa-bullhorn / ▣
            StepIcon::Evaluate => self.pick("\u{f046}", "\u{2611}"), // nf-fa-check_square_o / ☑
            StepIcon::Reflect => self.pick("\u{f06e}", "\u{25d0}"), // nf-fa-eye / ◐
            StepIcon::Search => self.pick("\u{f002}", "\u{2315}"),  // nf-fa-search / ⌕
            StepIcon::Play => self.pick("\u{f04b}", "\u{25b6}"),    // nf-fa-play / ▶
            StepIcon::Brainstorm => self.pick("\u{f0e7}", "\u{2726}"), // nf-fa-bolt / ✦
            StepIcon::Map => self.pick("\u{f279}", "\u{229e}"),     // nf-fa-map / ⊞
            StepIcon::WhiteHat
            | StepIcon::RedHat
            | StepIcon::BlackHat
            | StepIcon::YellowHat
            | StepIcon::GreenHat
            | StepIcon::BlueHat => self.pick("\u{f19d}", "\u{25b2}"), // nf-fa-graduation_cap / ▲
            StepIcon::Default => self.pick("\u{f111}", "\u{2022}"), // nf-fa-circle / •
        }
    }

    /// Glyph for a strategy in the catalog
    pub fn catalog(&self, icon: CatalogIcon) -> &'static str {
        match icon {
            CatalogIcon::BookOpen => self.pick("\u{f02d}", "\u{25a4}"), // nf-fa-book / ▤
            CatalogIcon::Hats => self.pick("\u{f19d}", "\u{25b2}"),
            CatalogIcon::Brainstorm => self.pick("\u{f0e7}", "\u{2726}"),
            CatalogIcon::Map => self.pick("\u{f279}", "\u{229e}"),
            CatalogIcon::CheckCircle => self.pick("\u{f058}", "\u{29bf}"), // ⦿
            CatalogIcon::Briefcase => self.pick("\u{f0b1}", "\u{25a6}"),
            CatalogIcon::Puzzle => self.pick("\u{f12e}", "\u{271a}"),
            CatalogIcon::Search => self.pick("\u{f002}", "\u{2315}"),
            CatalogIcon::Mask => self.pick("\u{f21b}", "\u{25d1}"),
            CatalogIcon::Drama => self.pick("\u{f008}", "\u{25d3}"),
            CatalogIcon::GameController => self.pick("\u{f11b}", "\u{2660}"),
            CatalogIcon::Heart => self.pick("\u{f004}", "\u{2665}"),
            CatalogIcon::Cog => self.pick("\u{f013}", "\u{2699}"),
        }
    }

    pub fn app(&self) -> &'static str {
        self.pick("\u{f19d}", "\u{25c6}") // ◆
    }

    pub fn check(&self) -> &'static str {
        self.pick("\u{f00c}", "\u{2713}") // ✓
    }

    pub fn alert(&self) -> &'static str {
        self.pick("\u{f071}", "\u{26a0}") // ⚠
    }

    pub fn info(&self) -> &'static str {
        self.pick("\u{f05a}", "\u{2139}") // ℹ
    }

    pub fn chevron_right(&self) -> &'static str {
        self.pick("\u{f054}", "\u{203a}") // ›
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_STEP_ICONS: [StepIcon; 21] = [
        StepIcon::Predict,
        StepIcon::Question,
        StepIcon::Clarify,
        StepIcon::Summarize,
        StepIcon::Group,
        StepIcon::Discuss,
        StepIcon::Create,
        StepIcon::Present,
        StepIcon::Evaluate,
        StepIcon::Reflect,
        StepIcon::Search,
        StepIcon::Play,
        StepIcon::Brainstorm,
        StepIcon::Map,
        StepIcon::WhiteHat,
        StepIcon::RedHat,
        StepIcon::BlackHat,
        StepIcon::YellowHat,
        StepIcon::GreenHat,
        StepIcon::BlueHat,
        StepIcon::Default,
    ];

    #[test]
    fn test_every_step_icon_has_a_glyph() {
        for mode in [IconMode::Unicode, IconMode::NerdFonts] {
            let icons = IconSet::new(mode);
            for icon in ALL_STEP_ICONS {
                assert!(!icons.step(icon).is_empty(), "{:?} in {:?}", icon, mode);
            }
        }
    }

    #[test]
    fn test_unknown_tag_uses_default_glyph() {
        let icons = IconSet::new(IconMode::Unicode);
        let unknown = StepIcon::from_tag("nonexistent_tag");
        assert_eq!(icons.step(unknown), icons.step(StepIcon::Default));
        assert_ne!(icons.step(StepIcon::from_tag("white_hat")), icons.step(StepIcon::Default));
    }

    #[test]
    fn test_every_strategy_has_a_glyph() {
        let icons = IconSet::new(IconMode::Unicode);
        for strategy in lstudio_core::TEACHING_STRATEGIES {
            assert!(!icons.catalog(strategy.icon).is_empty());
        }
    }

    #[test]
    fn test_completion_mark_is_not_reused() {
        for mode in [IconMode::Unicode, IconMode::NerdFonts] {
            let icons = IconSet::new(mode);
            for icon in ALL_STEP_ICONS {
                assert_ne!(icons.step(icon), icons.check(), "{:?} in {:?}", icon, mode);
            }
            for strategy in lstudio_core::TEACHING_STRATEGIES {
                assert_ne!(icons.catalog(strategy.icon), icons.check(), "{}", strategy.id);
            }
        }
    }

    #[test]
    fn test_unicode_and_nerd_font_differ() {
        let unicode = IconSet::new(IconMode::Unicode);
        let nerd = IconSet::new(IconMode::NerdFonts);
        assert_ne!(unicode.check(), nerd.check());
        assert_ne!(unicode.step(StepIcon::Predict), nerd.step(StepIcon::Predict));
    }
}
