//! Widget-name to action table, rebuilt every time a page is shown.

use bevy::prelude::*;

use crate::names::*;
use crate::page::{PageId, WidgetType};

/// Interaction a binding listens for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    ValueChanged,
    Toggled,
    PointerEnter,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SocialLink {
    Twitter,
    Instagram,
    Discord,
    Steam,
}

/// What a bound widget does when its event fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    StartGame,
    Tutorial,
    Navigate(PageId),
    MasterVolume,
    MusicVolume,
    SfxVolume,
    Fullscreen,
    CreateServer,
    Connect,
    OpenSocial(SocialLink),
}

/// A widget the router knows how to bind, on whichever page it appears.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    pub widget: &'static str,
    pub widget_type: WidgetType,
    pub event: EventKind,
    pub action: MenuAction,
}

const fn click(widget: &'static str, action: MenuAction) -> CatalogEntry {
    CatalogEntry {
        widget,
        widget_type: WidgetType::Button,
        event: EventKind::Click,
        action,
    }
}

const fn slider(widget: &'static str, action: MenuAction) -> CatalogEntry {
    CatalogEntry {
        widget,
        widget_type: WidgetType::Slider,
        event: EventKind::ValueChanged,
        action,
    }
}

/// Every bindable widget across all pages.
pub const CATALOG: &[CatalogEntry] = &[
    // Main menu
    click(START_GAME_BUTTON, MenuAction::StartGame),
    click(HOST_BUTTON, MenuAction::Navigate(PageId::Host)),
    click(JOIN_BUTTON, MenuAction::Navigate(PageId::Join)),
    click(TUTORIAL_BUTTON, MenuAction::Tutorial),
    click(SETTINGS_BUTTON, MenuAction::Navigate(PageId::Settings)),
    click(CREDITS_BUTTON, MenuAction::Navigate(PageId::Credits)),
    click(ABOUT_US_BUTTON, MenuAction::Navigate(PageId::AboutUs)),
    // Shared
    click(BACK_BUTTON, MenuAction::Navigate(PageId::MainMenu)),
    click(SKIP_BUTTON, MenuAction::Navigate(PageId::MainMenu)),
    // Settings
    slider(MASTER_VOLUME, MenuAction::MasterVolume),
    slider(MUSIC_VOLUME, MenuAction::MusicVolume),
    slider(SFX_VOLUME, MenuAction::SfxVolume),
    CatalogEntry {
        widget: FULLSCREEN_TOGGLE,
        widget_type: WidgetType::Toggle,
        event: EventKind::Toggled,
        action: MenuAction::Fullscreen,
    },
    // Host / join
    click(CREATE_SERVER_BUTTON, MenuAction::CreateServer),
    click(CONNECT_BUTTON, MenuAction::Connect),
    // About us
    click(TWITTER_LINK, MenuAction::OpenSocial(SocialLink::Twitter)),
    click(INSTAGRAM_LINK, MenuAction::OpenSocial(SocialLink::Instagram)),
    click(DISCORD_LINK, MenuAction::OpenSocial(SocialLink::Discord)),
    click(STEAM_LINK, MenuAction::OpenSocial(SocialLink::Steam)),
];

/// A catalog entry resolved against a concrete widget entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WidgetBinding {
    pub widget: &'static str,
    pub entity: Entity,
    pub event: EventKind,
    pub action: MenuAction,
}

impl CatalogEntry {
    /// Resolves this entry on the current page. `None` means the widget is
    /// not on this page, which is not an error.
    pub fn bind(
        &self,
        lookup: impl FnOnce(&str, WidgetType) -> Option<Entity>,
    ) -> Option<WidgetBinding> {
        let entity = lookup(self.widget, self.widget_type)?;
        Some(WidgetBinding {
            widget: self.widget,
            entity,
            event: self.event,
            action: self.action,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BindingTable {
    bindings: Vec<WidgetBinding>,
}

impl BindingTable {
    pub fn build(mut lookup: impl FnMut(&str, WidgetType) -> Option<Entity>) -> Self {
        let bindings = CATALOG
            .iter()
            .filter_map(|entry| entry.bind(&mut lookup))
            .collect();
        Self { bindings }
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WidgetBinding> {
        self.bindings.iter()
    }

    pub fn get(&self, widget: &str) -> Option<&WidgetBinding> {
        self.bindings.iter().find(|b| b.widget == widget)
    }

    /// Bindings listening for `event` on `entity`.
    pub fn matching(&self, entity: Entity, event: EventKind) -> impl Iterator<Item = &WidgetBinding> {
        self.bindings
            .iter()
            .filter(move |b| b.entity == entity && b.event == event)
    }
}
