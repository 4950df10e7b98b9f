// SPDX-License-Identifier: MPL-2.0
//! The nine portfolio sections.
//!
//! Each section is a pure view of a [`ViewContext`] snapshot. Interaction
//! flows back as [`Message`]s; [`update`] applies the local part and returns
//! an [`Event`] for anything the application has to act on (navigation,
//! toasts, the simulated send).

pub mod about;
pub mod achievements;
pub mod ai;
pub mod contact;
pub mod full_stack;
pub mod game_dev;
pub mod hero;
pub mod resume;
pub mod skills;

use crate::domain::contact::{ContactForm, Field, SubmitOutcome};
use crate::domain::section::{Section, SectionSnapshot};
use crate::i18n::fluent::I18n;
use crate::ui::components::CardId;
use crate::ui::design_tokens::{sizing, spacing};
use iced::widget::{scrollable, Column, Container};
use iced::{alignment::Horizontal, Element, Length, Size, Vector};

/// Interaction state owned by the sections.
#[derive(Debug, Default)]
pub struct State {
    pub hovered_card: Option<CardId>,
    pub selected_trophy: Option<usize>,
    pub vault_open: bool,
    pub contact: ContactForm,
}

/// Everything a section needs to draw itself.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub snapshot: SectionSnapshot,
    pub viewport: Size,
    /// Seconds since the rendered section was mounted.
    pub elapsed: f32,
    /// Spring-smoothed normalized pointer offset, `-1.0..=1.0` per axis.
    pub parallax: Vector,
    pub state: &'a State,
}

impl ViewContext<'_> {
    /// Width available to section content.
    #[must_use]
    pub fn content_width(&self) -> f32 {
        (self.viewport.width - 2.0 * spacing::XL).clamp(0.0, sizing::CONTENT_MAX_WIDTH)
    }

    #[must_use]
    pub fn is_hovered(&self, card: CardId) -> bool {
        self.state.hovered_card == Some(card)
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Section),
    CardHovered(Option<CardId>),
    TrophyPressed(usize),
    VaultHovered(bool),
    DownloadResume,
    ContactInput(Field, String),
    SubmitContact,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(Section),
    ResumeRequested,
    /// A send has started; the owner completes it after the send delay.
    ContactSending,
    ContactRejected(Field),
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Navigate(section) => Event::Navigate(section),
        Message::CardHovered(card) => {
            state.hovered_card = card;
            Event::None
        }
        Message::TrophyPressed(index) => {
            state.selected_trophy = if state.selected_trophy == Some(index) {
                None
            } else {
                Some(index)
            };
            Event::None
        }
        Message::VaultHovered(open) => {
            state.vault_open = open;
            Event::None
        }
        Message::DownloadResume => Event::ResumeRequested,
        Message::ContactInput(field, value) => {
            if !state.contact.is_sending() {
                state.contact.set(field, value);
            }
            Event::None
        }
        Message::SubmitContact => match state.contact.submit() {
            SubmitOutcome::Send => Event::ContactSending,
            SubmitOutcome::Rejected(field) => Event::ContactRejected(field),
            SubmitOutcome::Ignored => Event::None,
        },
    }
}

/// Renders the mounted section inside a scrollable page.
pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let content = match ctx.snapshot.mounted {
        Section::Home => hero::view(ctx),
        Section::About => about::view(ctx),
        Section::FullStack => full_stack::view(ctx),
        Section::GameDev => game_dev::view(ctx),
        Section::Ai => ai::view(ctx),
        Section::Achievements => achievements::view(ctx),
        Section::Skills => skills::view(ctx),
        Section::Resume => resume::view(ctx),
        Section::Contact => contact::view(ctx),
    };
    page(content)
}

/// Centers `content` under the navbar and makes it scroll.
fn page<'a>(content: Element<'a, Message>) -> Element<'a, Message> {
    scrollable(
        Container::new(
            Column::new()
                .max_width(sizing::CONTENT_MAX_WIDTH)
                .push(content),
        )
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding([spacing::SECTION_TOP, spacing::XL]),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
