// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Every color, size and timing constant the portfolio draws with.

## Organization

- **Palette**: Neon accents on a near-black background
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Glow definitions

## Examples

```
use neon_portfolio::content::Accent;
use neon_portfolio::ui::design_tokens::{accent_color, opacity, palette};
use iced::Color;

let glow = Color {
    a: opacity::GLOW,
    ..accent_color(Accent::Cyan)
};
assert_eq!(glow.r, palette::CYAN.r);
```
"#]

use crate::content::Accent;
use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Background
    pub const BACKGROUND: Color = Color::from_rgb(0.039, 0.039, 0.039); // #0a0a0a
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Text grays
    pub const GRAY_300: Color = Color::from_rgb(0.82, 0.84, 0.86);
    pub const GRAY_400: Color = Color::from_rgb(0.61, 0.64, 0.69);
    pub const GRAY_500: Color = Color::from_rgb(0.42, 0.45, 0.50);
    pub const GRAY_800: Color = Color::from_rgb(0.12, 0.16, 0.22);

    // Neon accents
    pub const CYAN: Color = Color::from_rgb(0.0, 1.0, 0.941); // #00fff0
    pub const BLUE: Color = Color::from_rgb(0.0, 0.667, 1.0); // #00aaff
    pub const PURPLE: Color = Color::from_rgb(0.682, 0.0, 1.0); // #ae00ff
    pub const GOLD: Color = Color::from_rgb(1.0, 0.843, 0.0); // #FFD700

    // Semantic colors (notifications)
    pub const ERROR_500: Color = Color::from_rgb(1.0, 0.2, 0.4);
    pub const WARNING_500: Color = Color::from_rgb(1.0, 0.65, 0.1);
    pub const SUCCESS_500: Color = Color::from_rgb(0.0, 1.0, 0.6);
    pub const INFO_500: Color = BLUE;
}

/// Resolves a content accent to its neon color.
#[must_use]
pub fn accent_color(accent: Accent) -> Color {
    match accent {
        Accent::Cyan => palette::CYAN,
        Accent::Blue => palette::BLUE,
        Accent::Purple => palette::PURPLE,
        Accent::Gold => palette::GOLD,
    }
}

/// `color` with its alpha replaced.
#[must_use]
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color {
        a: alpha.clamp(0.0, 1.0),
        ..color
    }
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const FAINT: f32 = 0.1;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const BORDER: f32 = 0.3;
    pub const PANEL: f32 = 0.4;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const GLOW: f32 = 0.6;
    pub const OVERLAY_STRONG: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
    pub const SECTION_TOP: f32 = 96.0; // clears the navbar
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const NAVBAR_HEIGHT: f32 = 64.0;
    /// Below this window width the navbar collapses into a menu.
    pub const NAVBAR_COMPACT_BELOW: f32 = 1100.0;

    pub const CONTENT_MAX_WIDTH: f32 = 1200.0;
    pub const CARD_WIDTH: f32 = 340.0;
    pub const FORM_WIDTH: f32 = 480.0;
    pub const TOAST_WIDTH: f32 = 320.0;

    pub const HOLO_RING: f32 = 200.0;
    pub const PROGRESS_BAR_WIDTH: f32 = 420.0;
    pub const PROGRESS_BAR_HEIGHT: f32 = 8.0;
    pub const SKILL_BAR_HEIGHT: f32 = 6.0;
    pub const LOGO: f32 = 40.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Hero name
    pub const DISPLAY: f32 = 72.0;

    /// Section headings
    pub const TITLE_XL: f32 = 48.0;

    pub const TITLE_LG: f32 = 30.0;

    pub const TITLE_MD: f32 = 20.0;

    pub const TITLE_SM: f32 = 18.0;

    pub const BODY_LG: f32 = 16.0;

    pub const BODY: f32 = 14.0;

    pub const BODY_SM: f32 = 13.0;

    /// Badges, terminal lines
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const XL: f32 = 16.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Glow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    /// Neon halo around an element, centered.
    #[must_use]
    pub fn glow(color: Color, blur_radius: f32) -> Shadow {
        Shadow {
            color,
            offset: Vector::ZERO,
            blur_radius,
        }
    }
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::SECTION_TOP > sizing::NAVBAR_HEIGHT);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);

    // Typography validation
    assert!(typography::DISPLAY > typography::TITLE_XL);
    assert!(typography::TITLE_XL > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);

    // Color validation
    assert!(palette::CYAN.g <= 1.0 && palette::PURPLE.r <= 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn accents_map_to_distinct_colors() {
        let colors = [
            accent_color(Accent::Cyan),
            accent_color(Accent::Blue),
            accent_color(Accent::Purple),
            accent_color(Accent::Gold),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn with_alpha_clamps() {
        assert_eq!(with_alpha(palette::CYAN, 2.0).a, 1.0);
        assert_eq!(with_alpha(palette::CYAN, -1.0).a, 0.0);
    }
}
