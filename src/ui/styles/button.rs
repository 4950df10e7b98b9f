// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow, with_alpha};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Outlined neon button that fills with its accent on hover.
///
/// Used for the hero gateways and most section actions.
pub fn neon(accent: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| match status {
        button::Status::Active => button::Style {
            background: Some(Background::Color(with_alpha(accent, opacity::FAINT))),
            text_color: accent,
            border: Border {
                color: accent,
                width: 2.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::glow(with_alpha(accent, opacity::OVERLAY_SUBTLE), 10.0),
            snap: true,
        },
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(with_alpha(accent, opacity::OVERLAY_STRONG))),
            text_color: palette::BLACK,
            border: Border {
                color: accent,
                width: 2.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::glow(with_alpha(accent, opacity::GLOW), 30.0),
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(with_alpha(accent, opacity::FAINT))),
            text_color: with_alpha(accent, opacity::OVERLAY_MEDIUM),
            border: Border {
                color: with_alpha(accent, opacity::BORDER),
                width: 2.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Navigation entry; `active` marks the current section.
pub fn nav_item(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (background, text_color) = match (active, status) {
            (true, _) => (with_alpha(palette::CYAN, opacity::OVERLAY_SUBTLE), palette::CYAN),
            (false, button::Status::Hovered) => {
                (with_alpha(palette::BLUE, opacity::FAINT), palette::BLUE)
            }
            (false, button::Status::Pressed) => {
                (with_alpha(palette::BLUE, opacity::OVERLAY_SUBTLE), palette::CYAN)
            }
            (false, _) => (Color::TRANSPARENT, palette::GRAY_300),
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                color: if active { palette::CYAN } else { Color::TRANSPARENT },
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: if active {
                shadow::glow(with_alpha(palette::CYAN, opacity::OVERLAY_MEDIUM), 12.0)
            } else {
                shadow::NONE
            },
            snap: true,
        }
    }
}

/// Borderless card-sized button (trophies, logo).
pub fn ghost(accent: Color, selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let highlighted = selected || matches!(status, button::Status::Hovered);
        button::Style {
            background: Some(Background::Color(if highlighted {
                with_alpha(accent, opacity::FAINT)
            } else {
                with_alpha(palette::BLACK, opacity::PANEL)
            })),
            text_color: palette::WHITE,
            border: Border {
                color: with_alpha(
                    accent,
                    if highlighted {
                        opacity::OPAQUE
                    } else {
                        opacity::BORDER
                    },
                ),
                width: 2.0,
                radius: radius::LG.into(),
            },
            shadow: if highlighted {
                shadow::glow(with_alpha(accent, opacity::GLOW), 24.0)
            } else {
                shadow::NONE
            },
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neon_fills_on_hover() {
        let style = neon(palette::PURPLE);
        let active = style(&Theme::Dark, button::Status::Active);
        let hovered = style(&Theme::Dark, button::Status::Hovered);
        assert_eq!(active.text_color, palette::PURPLE);
        assert_eq!(hovered.text_color, palette::BLACK);
        assert!(hovered.shadow.blur_radius > active.shadow.blur_radius);
    }

    #[test]
    fn neon_disabled_is_dimmed() {
        let style = neon(palette::CYAN)(&Theme::Dark, button::Status::Disabled);
        assert!(style.text_color.a < 1.0);
        assert_eq!(style.shadow.blur_radius, 0.0);
    }

    #[test]
    fn active_nav_item_is_cyan_regardless_of_status() {
        for status in [button::Status::Active, button::Status::Hovered] {
            let style = nav_item(true)(&Theme::Dark, status);
            assert_eq!(style.text_color, palette::CYAN);
        }
        let idle = nav_item(false)(&Theme::Dark, button::Status::Active);
        assert_eq!(idle.text_color, palette::GRAY_300);
    }

    #[test]
    fn selected_ghost_glows_without_hover() {
        let style = ghost(palette::GOLD, true)(&Theme::Dark, button::Status::Active);
        assert_eq!(style.border.color, palette::GOLD);
        assert!(style.shadow.blur_radius > 0.0);
    }
}
