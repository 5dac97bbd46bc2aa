//! Display cards for events.
//!
//! An [`EventCard`] is the display-ready view of one event: formatted date,
//! tag chips, a "learn more" link and a [`SaveMenu`] of calendar links.

use chrono::TimeZone;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::event::Event;
use crate::links::{CalendarExport, CalendarTarget};

/// Open state of a save menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    /// Returns the opposite state.
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }
}

/// One entry of the save menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarLink {
    pub target: CalendarTarget,
    pub label: String,
    pub icon: String,
    pub href: String,
}

impl CalendarLink {
    /// Builds the entry for `target` from an export descriptor.
    pub fn new(target: CalendarTarget, export: &CalendarExport) -> Self {
        Self {
            target,
            label: target.display_name().to_string(),
            icon: target.icon().to_string(),
            href: target.link(export),
        }
    }
}

/// The "SAVE" dropdown on a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveMenu {
    state: MenuState,
    links: Vec<CalendarLink>,
}

impl SaveMenu {
    /// Builds a closed menu with one link per [`CalendarTarget`].
    pub fn for_export(export: &CalendarExport) -> Self {
        Self {
            state: MenuState::Closed,
            links: CalendarTarget::ALL
                .iter()
                .map(|t| CalendarLink::new(*t, export))
                .collect(),
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    pub fn open(&mut self) {
        self.state = MenuState::Open;
    }

    pub fn close(&mut self) {
        self.state = MenuState::Closed;
    }

    /// Flips between open and closed, returning the new state.
    pub fn toggle(&mut self) -> MenuState {
        self.state = self.state.toggled();
        self.state
    }

    pub fn links(&self) -> &[CalendarLink] {
        &self.links
    }

    /// Returns the link for a target.
    pub fn link(&self, target: CalendarTarget) -> Option<&CalendarLink> {
        self.links.iter().find(|l| l.target == target)
    }
}

/// A display-ready event card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventCard {
    pub id: String,
    pub title: String,
    /// Upper-cased category label.
    pub event_type: String,
    /// Start date as `Mar 5, 2025`.
    pub date_display: String,
    pub description: String,
    /// Lower-cased tag chips.
    pub tags: Vec<String>,
    pub learn_more_href: String,
    /// Drives the pulsing indicator; carries no other state.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub on_going: bool,
    pub save_menu: SaveMenu,
}

impl EventCard {
    /// Builds the card for `event`, formatting the date in `tz`.
    pub fn build<Tz>(event: &Event, on_going: bool, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let export = CalendarExport::from_event(event);

        Self {
            id: event.id.clone(),
            title: event.title.clone(),
            event_type: event.event_type.to_uppercase(),
            date_display: format_event_date(event, tz),
            description: event.description.clone(),
            tags: event.tags.iter().map(|t| t.to_lowercase()).collect(),
            learn_more_href: event_href(&event.id),
            on_going,
            save_menu: SaveMenu::for_export(&export),
        }
    }
}

/// Formats the start date of an event as `Mar 5, 2025` in `tz`.
pub fn format_event_date<Tz>(event: &Event, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    event.start.with_timezone(tz).format("%b %-d, %Y").to_string()
}

/// Path of the detail page for an event.
pub fn event_href(id: &str) -> String {
    format!("/events/{}", urlencoding::encode(id))
}
