use bevy::ecs::entity::Entities;
use bevy::prelude::*;
use std::collections::HashMap;

use crate::binding::{BindingTable, MenuAction};
use crate::components::*;
use crate::config::{MenuConfig, SocialLinks};
use crate::error::MenuError;
use crate::input::{WidgetEvent, WidgetEventKind};
use crate::names;
use crate::page::{PageDef, PageId, WidgetType};
use crate::platform::PlatformRequest;
use crate::widgets::{spawn_page, WidgetIndex};

/// Request to replace the mounted page.
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShowPage {
    pub page: PageId,
}

impl ShowPage {
    pub fn new(page: PageId) -> Self {
        Self { page }
    }
}

/// Triggered after a page is mounted and its bindings are built.
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageShown {
    pub page: PageId,
    pub root: Entity,
}

/// Triggered when a `ShowPage` request leaves the current page in place.
#[derive(Event, Clone, Debug, PartialEq, Eq)]
pub struct ShowPageFailed {
    pub page: PageId,
    pub error: MenuError,
}

/// Game actions the menu does not implement itself
#[derive(Message, Clone, Debug, PartialEq)]
pub enum MenuCommand {
    StartGame,
    Tutorial,
    CreateServer {
        name: Option<String>,
        max_players: Option<i32>,
        password: Option<String>,
    },
    Connect {
        address: Option<String>,
    },
}

/// Page asset handles, keyed by page
#[derive(Resource, Debug, Default)]
pub struct MenuPages(HashMap<PageId, Handle<PageDef>>);

impl MenuPages {
    pub fn insert(&mut self, page: PageId, handle: Handle<PageDef>) {
        self.0.insert(page, handle);
    }

    pub fn get(&self, page: PageId) -> Option<&Handle<PageDef>> {
        self.0.get(&page)
    }

    pub fn iter(&self) -> impl Iterator<Item = (PageId, &Handle<PageDef>)> {
        self.0.iter().map(|(page, handle)| (*page, handle))
    }
}

/// Currently mounted page, its widgets and their bindings
#[derive(Resource, Debug, Default)]
pub struct PageRouter {
    current: Option<PageId>,
    root: Option<Entity>,
    widgets: WidgetIndex,
    bindings: BindingTable,
}

impl PageRouter {
    pub fn current(&self) -> Option<PageId> {
        self.current
    }

    pub fn root(&self) -> Option<Entity> {
        self.root
    }

    pub fn widgets(&self) -> &WidgetIndex {
        &self.widgets
    }

    pub fn bindings(&self) -> &BindingTable {
        &self.bindings
    }
}

pub(crate) fn show_default_page(mut commands: Commands, config: Res<MenuConfig>) {
    info!("Menu ready, showing {}", config.default_page);
    commands.trigger(ShowPage::new(config.default_page));
}

pub(crate) fn on_show_page(
    show: On<ShowPage>,
    mut commands: Commands,
    mut router: ResMut<PageRouter>,
    pages: Res<MenuPages>,
    page_assets: Res<Assets<PageDef>>,
    document: Query<Entity, With<MenuDocument>>,
    mounted: Query<Entity, With<PageRoot>>,
    entities: &Entities,
) {
    let page = show.page;
    let result = mount_page(
        &mut commands,
        &mut router,
        &pages,
        &page_assets,
        &document,
        &mounted,
        entities,
        page,
    );
    match result {
        Ok(root) => commands.trigger(PageShown { page, root }),
        Err(error) => {
            error!("Cannot show page {}: {}", page, error);
            commands.trigger(ShowPageFailed { page, error });
        }
    }
}

fn mount_page(
    commands: &mut Commands,
    router: &mut PageRouter,
    pages: &MenuPages,
    page_assets: &Assets<PageDef>,
    document: &Query<Entity, With<MenuDocument>>,
    mounted: &Query<Entity, With<PageRoot>>,
    entities: &Entities,
    page: PageId,
) -> Result<Entity, MenuError> {
    let handle = pages.get(page).ok_or(MenuError::PageNotConfigured(page))?;
    let def = page_assets
        .get(handle)
        .ok_or(MenuError::PageNotLoaded(page))?;
    let document = document.single().map_err(|_| MenuError::MissingDocument)?;

    // Despawning the old tree drops every binding that pointed into it.
    for old in mounted.iter() {
        commands.entity(old).despawn();
    }
    // A root spawned earlier in this flush is not visible to the query yet.
    if let Some(pending) = router.root {
        if !mounted.contains(pending) && entities.contains(pending) {
            commands.entity(pending).despawn();
        }
    }

    let (root, widgets) = spawn_page(commands, document, page, def);
    let bindings = BindingTable::build(|name, ty| widgets.find(name, ty));
    info!("Showing page {} with {} bindings", page, bindings.len());

    router.current = Some(page);
    router.root = Some(root);
    router.widgets = widgets;
    router.bindings = bindings;
    Ok(root)
}

/// Runs the bound action for every widget event on the current page.
pub(crate) fn dispatch_widget_events(
    mut commands: Commands,
    mut events: MessageReader<WidgetEvent>,
    router: Res<PageRouter>,
    social: Res<SocialLinks>,
    text_fields: Query<&MenuTextField>,
    sliders: Query<&MenuSlider>,
    mut platform: MessageWriter<PlatformRequest>,
    mut menu_commands: MessageWriter<MenuCommand>,
) {
    for event in events.read() {
        for binding in router.bindings().matching(event.entity, event.kind.event_kind()) {
            match (binding.action, event.kind) {
                (MenuAction::Navigate(page), _) => {
                    commands.trigger(ShowPage::new(page));
                }
                (MenuAction::StartGame, _) => {
                    info!("Start Game clicked");
                    menu_commands.write(MenuCommand::StartGame);
                }
                (MenuAction::Tutorial, _) => {
                    info!("Tutorial clicked");
                    menu_commands.write(MenuCommand::Tutorial);
                }
                (MenuAction::MasterVolume, WidgetEventKind::ValueChanged(value)) => {
                    info!("Master Volume: {}", value);
                    platform.write(PlatformRequest::SetMasterVolume(value));
                }
                (MenuAction::MusicVolume, WidgetEventKind::ValueChanged(value)) => {
                    info!("Music Volume: {}", value);
                }
                (MenuAction::SfxVolume, WidgetEventKind::ValueChanged(value)) => {
                    info!("SFX Volume: {}", value);
                }
                (MenuAction::Fullscreen, WidgetEventKind::Toggled(fullscreen)) => {
                    info!("Fullscreen: {}", fullscreen);
                    platform.write(PlatformRequest::SetFullscreen(fullscreen));
                }
                (MenuAction::CreateServer, _) => {
                    let text = |name| read_text(&router, &text_fields, name);
                    let name = text(names::SERVER_NAME);
                    let password = text(names::PASSWORD_FIELD);
                    let max_players = router
                        .widgets()
                        .find(names::MAX_PLAYERS, WidgetType::Slider)
                        .and_then(|e| sliders.get(e).ok())
                        .map(|slider| slider.value.round() as i32);
                    info!(
                        "Creating server: {:?}, Max Players: {:?}, Password: {:?}",
                        name, max_players, password
                    );
                    menu_commands.write(MenuCommand::CreateServer {
                        name,
                        max_players,
                        password,
                    });
                }
                (MenuAction::Connect, _) => {
                    let address = read_text(&router, &text_fields, names::SERVER_IP);
                    info!("Connecting to: {:?}", address);
                    menu_commands.write(MenuCommand::Connect { address });
                }
                (MenuAction::OpenSocial(link), _) => {
                    let url = social.url(link);
                    info!("Opening URL: {}", url);
                    platform.write(PlatformRequest::OpenUrl(url.to_string()));
                }
                (action, kind) => {
                    debug!("Ignoring {:?} for {:?}", kind, action);
                }
            }
        }
    }
}

fn read_text(router: &PageRouter, fields: &Query<&MenuTextField>, name: &str) -> Option<String> {
    let entity = router.widgets().find(name, WidgetType::TextField)?;
    fields.get(entity).ok().map(|field| field.value.clone())
}
