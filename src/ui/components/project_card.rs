// SPDX-License-Identifier: MPL-2.0
//! Project card.
//!
//! The card glows in its accent while hovered. Tilt is rendered as a halo
//! pushed away from the pointer, so the card appears to lean toward it.

use crate::content::Project;
use crate::domain::section::Section;
use crate::ui::components::heading::TITLE_FONT;
use crate::ui::design_tokens::{accent_color, palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{mouse_area, Column, Container, Row, Text};
use iced::{alignment::Vertical, Element, Font, Length, Theme, Vector};

/// Identifies a card across sections for hover tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardId {
    pub section: Section,
    pub index: usize,
}

/// Largest halo offset in pixels at full tilt.
const MAX_TILT_OFFSET: f32 = 12.0;

pub struct ProjectCard<'a, Message> {
    project: &'a Project,
    hovered: bool,
    tilt: Vector,
    on_enter: Option<Message>,
    on_exit: Option<Message>,
}

impl<'a, Message: Clone + 'a> ProjectCard<'a, Message> {
    pub fn new(project: &'a Project) -> Self {
        Self {
            project,
            hovered: false,
            tilt: Vector::new(0.0, 0.0),
            on_enter: None,
            on_exit: None,
        }
    }

    /// Marks the card hovered; `tilt` is the normalized pointer offset in
    /// `-1.0..=1.0` on each axis.
    #[must_use]
    pub fn hovered(mut self, hovered: bool, tilt: Vector) -> Self {
        self.hovered = hovered;
        self.tilt = tilt;
        self
    }

    #[must_use]
    pub fn on_hover(mut self, enter: Message, exit: Message) -> Self {
        self.on_enter = Some(enter);
        self.on_exit = Some(exit);
        self
    }

    pub fn view(self) -> Element<'a, Message> {
        let accent = accent_color(self.project.accent);

        let header = Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(
                Text::new(self.project.glyph)
                    .size(typography::TITLE_LG)
                    .color(accent),
            )
            .push(
                Text::new(self.project.title)
                    .size(typography::TITLE_SM)
                    .font(TITLE_FONT)
                    .color(palette::WHITE),
            );

        let body = Column::new()
            .spacing(spacing::SM)
            .push(header)
            .push(
                Text::new(self.project.description)
                    .size(typography::BODY)
                    .color(palette::GRAY_400),
            )
            .push(
                Text::new("> view_project()")
                    .size(typography::CAPTION)
                    .font(Font::MONOSPACE)
                    .color(accent),
            );

        let glow = if self.hovered { 1.0 } else { 0.0 };
        let offset = halo_offset(self.hovered, self.tilt);
        let base = styles::container::glow_card(accent, glow);
        let card = Container::new(body)
            .width(Length::Fixed(sizing::CARD_WIDTH))
            .padding(spacing::LG)
            .style(move |theme: &Theme| {
                let mut style = base(theme);
                style.shadow.offset = offset;
                style
            });

        let mut area = mouse_area(card);
        if let (Some(enter), Some(exit)) = (self.on_enter, self.on_exit) {
            area = area.on_enter(enter).on_exit(exit);
        }
        area.into()
    }
}

/// Shadow offset for a card under `tilt`; zero unless hovered.
#[must_use]
pub fn halo_offset(hovered: bool, tilt: Vector) -> Vector {
    if !hovered {
        return Vector::new(0.0, 0.0);
    }
    Vector::new(
        -tilt.x.clamp(-1.0, 1.0) * MAX_TILT_OFFSET,
        -tilt.y.clamp(-1.0, 1.0) * MAX_TILT_OFFSET,
    )
}
