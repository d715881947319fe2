#![allow(dead_code)]

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use menu::names::*;
use menu::*;

#[derive(Resource, Default)]
pub struct Recorded {
    pub platform: Vec<PlatformRequest>,
    pub commands: Vec<MenuCommand>,
    pub shown: Vec<PageId>,
    pub failed: Vec<(PageId, MenuError)>,
}

fn record_messages(
    mut platform: MessageReader<PlatformRequest>,
    mut commands: MessageReader<MenuCommand>,
    mut recorded: ResMut<Recorded>,
) {
    recorded.platform.extend(platform.read().cloned());
    recorded.commands.extend(commands.read().cloned());
}

fn record_page_shown(shown: On<PageShown>, mut recorded: ResMut<Recorded>) {
    recorded.shown.push(shown.page);
}

fn record_show_failed(failed: On<ShowPageFailed>, mut recorded: ResMut<Recorded>) {
    recorded.failed.push((failed.page, failed.error.clone()));
}

fn regular(name: &str, text: &str) -> WidgetDef {
    WidgetDef::button(name, text).with_class(MENU_REGULAR_BUTTON)
}

pub fn main_menu_page() -> PageDef {
    PageDef::new(WidgetDef::column([
        regular(START_GAME_BUTTON, "Start Game"),
        regular(HOST_BUTTON, "Host"),
        regular(JOIN_BUTTON, "Join"),
        regular(TUTORIAL_BUTTON, "Tutorial"),
        regular(SETTINGS_BUTTON, "Settings"),
        regular(CREDITS_BUTTON, "Credits"),
        regular(ABOUT_US_BUTTON, "About Us"),
    ]))
}

pub fn settings_page() -> PageDef {
    PageDef::new(WidgetDef::column([
        WidgetDef::slider(MASTER_VOLUME, 0.0, 1.0, 1.0),
        WidgetDef::slider(MUSIC_VOLUME, 0.0, 1.0, 1.0),
        WidgetDef::slider(SFX_VOLUME, 0.0, 1.0, 1.0),
        WidgetDef::toggle(FULLSCREEN_TOGGLE, "Fullscreen", false),
        WidgetDef::button(BACK_BUTTON, "Back"),
    ]))
}

pub fn host_page() -> PageDef {
    let mut max_players = WidgetDef::slider(MAX_PLAYERS, 2.0, 16.0, 8.0);
    if let WidgetKind::Slider { whole_numbers, .. } = &mut max_players.kind {
        *whole_numbers = true;
    }
    PageDef::new(WidgetDef::column([
        WidgetDef::text_field(SERVER_NAME, "My Server"),
        max_players,
        WidgetDef::text_field(PASSWORD_FIELD, "secret"),
        WidgetDef::button(CREATE_SERVER_BUTTON, "Create"),
        WidgetDef::button(BACK_BUTTON, "Back"),
    ]))
}

pub fn join_page() -> PageDef {
    PageDef::new(WidgetDef::column([
        WidgetDef::text_field(SERVER_IP, "127.0.0.1"),
        WidgetDef::button(CONNECT_BUTTON, "Connect"),
        WidgetDef::button(BACK_BUTTON, "Back"),
    ]))
}

pub fn credits_page() -> PageDef {
    PageDef::new(WidgetDef::column([
        WidgetDef::label("Made by the team"),
        regular(SKIP_BUTTON, "Skip"),
    ]))
}

pub fn about_us_page() -> PageDef {
    PageDef::new(WidgetDef::column([
        WidgetDef::new(WidgetKind::Row).with_children([
            WidgetDef::button(TWITTER_LINK, "Twitter"),
            WidgetDef::button(INSTAGRAM_LINK, "Instagram"),
            WidgetDef::button(DISCORD_LINK, "Discord"),
            WidgetDef::button(STEAM_LINK, "Steam"),
        ]),
        WidgetDef::button(BACK_BUTTON, "Back"),
    ]))
}

pub fn all_pages() -> Vec<(PageId, PageDef)> {
    vec![
        (PageId::MainMenu, main_menu_page()),
        (PageId::Settings, settings_page()),
        (PageId::Host, host_page()),
        (PageId::Join, join_page()),
        (PageId::Credits, credits_page()),
        (PageId::AboutUs, about_us_page()),
    ]
}

/// Headless app with the given pages registered and nothing updated yet.
pub fn test_app_with(config: MenuConfig, pages: Vec<(PageId, PageDef)>) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(AssetPlugin::default());
    app.add_plugins(StatesPlugin);
    app.add_plugins(MenuPlugin { config });

    app.init_resource::<Recorded>();
    app.add_systems(PostUpdate, record_messages);
    app.add_observer(record_page_shown);
    app.add_observer(record_show_failed);

    let handles: Vec<_> = {
        let mut assets = app.world_mut().resource_mut::<Assets<PageDef>>();
        pages
            .into_iter()
            .map(|(page, def)| (page, assets.add(def)))
            .collect()
    };
    let mut menu_pages = app.world_mut().resource_mut::<MenuPages>();
    for (page, handle) in handles {
        menu_pages.insert(page, handle);
    }
    app
}

pub fn test_app(pages: Vec<(PageId, PageDef)>) -> App {
    test_app_with(MenuConfig::without_page_files(), pages)
}

/// Runs startup, the loading check and the default page.
pub fn ready(app: &mut App) {
    app.update();
    app.update();
}

pub fn current_page(app: &App) -> Option<PageId> {
    app.world().resource::<PageRouter>().current()
}

pub fn widget(app: &App, name: &str, ty: WidgetType) -> Entity {
    app.world()
        .resource::<PageRouter>()
        .widgets()
        .find(name, ty)
        .unwrap_or_else(|| panic!("{name} should be on the current page"))
}

pub fn press(app: &mut App, entity: Entity) {
    app.world_mut().entity_mut(entity).insert(Interaction::Pressed);
    app.update();
}

pub fn click(app: &mut App, name: &str) {
    let button = widget(app, name, WidgetType::Button);
    press(app, button);
}

pub fn recorded(app: &App) -> &Recorded {
    app.world().resource::<Recorded>()
}

pub fn page_roots(app: &mut App) -> usize {
    let mut query = app.world_mut().query_filtered::<Entity, With<PageRoot>>();
    query.iter(app.world()).count()
}
