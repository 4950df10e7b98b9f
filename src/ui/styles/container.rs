// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow, with_alpha};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Translucent black panel with a thin accent border.
pub fn panel(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(with_alpha(palette::BLACK, opacity::PANEL))),
        border: Border {
            color: with_alpha(accent, opacity::BORDER),
            width: 1.0,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Card whose border and halo brighten with `glow` in `0.0..=1.0`.
pub fn glow_card(accent: Color, glow: f32) -> impl Fn(&Theme) -> container::Style {
    let glow = glow.clamp(0.0, 1.0);
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(with_alpha(palette::BLACK, opacity::OVERLAY_MEDIUM))),
        border: Border {
            color: with_alpha(accent, opacity::BORDER + glow * (1.0 - opacity::BORDER)),
            width: 2.0,
            radius: radius::XL.into(),
        },
        shadow: shadow::glow(with_alpha(accent, glow * opacity::GLOW), 10.0 + glow * 30.0),
        ..Default::default()
    }
}

/// Small rounded chip (skills, modalities, orbit labels).
pub fn chip(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(with_alpha(accent, opacity::FAINT))),
        text_color: Some(accent),
        border: Border {
            color: with_alpha(accent, opacity::OVERLAY_MEDIUM),
            width: 1.0,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// Fixed navigation bar.
pub fn navbar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(with_alpha(
            palette::BACKGROUND,
            opacity::OVERLAY_STRONG,
        ))),
        border: Border {
            color: with_alpha(palette::CYAN, opacity::OVERLAY_SUBTLE),
            width: 1.0,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Veil drawn over a section while it fades; `alpha` is the veil opacity.
pub fn veil(tint: Color, alpha: f32) -> impl Fn(&Theme) -> container::Style {
    let alpha = alpha.clamp(0.0, 1.0);
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            r: palette::BACKGROUND.r * (1.0 - alpha * 0.2) + tint.r * alpha * 0.2,
            g: palette::BACKGROUND.g * (1.0 - alpha * 0.2) + tint.g * alpha * 0.2,
            b: palette::BACKGROUND.b * (1.0 - alpha * 0.2) + tint.b * alpha * 0.2,
            a: alpha,
        })),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glow_card_brightens_with_glow() {
        let dim = glow_card(palette::BLUE, 0.0)(&Theme::Dark);
        let bright = glow_card(palette::BLUE, 1.0)(&Theme::Dark);
        assert!(bright.border.color.a > dim.border.color.a);
        assert!(bright.shadow.blur_radius > dim.shadow.blur_radius);
    }

    #[test]
    fn veil_alpha_is_clamped() {
        let style = veil(palette::PURPLE, 3.0)(&Theme::Dark);
        match style.background {
            Some(Background::Color(color)) => assert_eq!(color.a, 1.0),
            other => panic!("unexpected background {other:?}"),
        }
    }
}
