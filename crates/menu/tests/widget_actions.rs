mod common;

use bevy::prelude::*;
use bevy::ui::RelativeCursorPosition;
use common::*;
use menu::names::*;
use menu::*;

fn app_on(page: PageId) -> App {
    let config = MenuConfig {
        default_page: page,
        ..MenuConfig::without_page_files()
    };
    let mut app = test_app_with(config, all_pages());
    ready(&mut app);
    app
}

#[test]
fn test_master_volume_requests_global_volume() {
    let mut app = app_on(PageId::Settings);
    let master = widget(&app, MASTER_VOLUME, WidgetType::Slider);

    app.world_mut()
        .write_message(WidgetEvent::new(master, WidgetEventKind::ValueChanged(0.25)));
    app.update();

    assert_eq!(
        recorded(&app).platform,
        vec![PlatformRequest::SetMasterVolume(0.25)]
    );
}

/// Presses a slider with the cursor at `x`, centered on the node, then
/// releases it.
fn drag(app: &mut App, slider: Entity, x: f32) {
    app.world_mut().entity_mut(slider).insert((
        RelativeCursorPosition {
            normalized: Some(Vec2::new(x, 0.0)),
            ..default()
        },
        Interaction::Pressed,
    ));
    app.update();
    app.world_mut().entity_mut(slider).insert(Interaction::None);
    app.update();
}

#[test]
fn test_dragging_master_volume_sets_global_volume() {
    let mut app = app_on(PageId::Settings);
    let master = widget(&app, MASTER_VOLUME, WidgetType::Slider);

    drag(&mut app, master, 0.25);

    assert_eq!(
        recorded(&app).platform,
        vec![PlatformRequest::SetMasterVolume(0.75)]
    );
    let value = app.world().get::<MenuSlider>(master).map(|s| s.value);
    assert_eq!(value, Some(0.75));
}

#[test]
fn test_dragging_max_players_snaps_to_whole_numbers() {
    let mut app = app_on(PageId::Host);
    let max_players = widget(&app, MAX_PLAYERS, WidgetType::Slider);

    drag(&mut app, max_players, 0.3);

    let value = app.world().get::<MenuSlider>(max_players).map(|s| s.value);
    assert_eq!(value, Some(13.0));
    assert!(recorded(&app).platform.is_empty());

    click(&mut app, CREATE_SERVER_BUTTON);
    assert_eq!(
        recorded(&app).commands,
        vec![MenuCommand::CreateServer {
            name: Some("My Server".to_string()),
            max_players: Some(13),
            password: Some("secret".to_string()),
        }]
    );
}

#[test]
fn test_music_and_sfx_volume_only_log() {
    let mut app = app_on(PageId::Settings);
    let music = widget(&app, MUSIC_VOLUME, WidgetType::Slider);
    let sfx = widget(&app, SFX_VOLUME, WidgetType::Slider);

    app.world_mut()
        .write_message(WidgetEvent::new(music, WidgetEventKind::ValueChanged(0.3)));
    app.world_mut()
        .write_message(WidgetEvent::new(sfx, WidgetEventKind::ValueChanged(0.6)));
    app.update();

    assert!(recorded(&app).platform.is_empty());
    assert!(recorded(&app).commands.is_empty());
}

#[test]
fn test_fullscreen_toggle_click_requests_fullscreen() {
    let mut app = app_on(PageId::Settings);
    let toggle = widget(&app, FULLSCREEN_TOGGLE, WidgetType::Toggle);

    press(&mut app, toggle);

    assert_eq!(
        recorded(&app).platform,
        vec![PlatformRequest::SetFullscreen(true)]
    );
    let state = app.world().get::<MenuToggle>(toggle).map(|t| t.on);
    assert_eq!(state, Some(true));

    // Release, then press again to turn it back off.
    app.world_mut().entity_mut(toggle).insert(Interaction::None);
    app.update();
    press(&mut app, toggle);
    assert_eq!(
        recorded(&app).platform,
        vec![
            PlatformRequest::SetFullscreen(true),
            PlatformRequest::SetFullscreen(false),
        ]
    );
}

#[test]
fn test_social_link_opens_configured_url() {
    let mut app = app_on(PageId::AboutUs);
    app.world_mut().resource_mut::<SocialLinks>().twitter = "https://twitter.com/example".to_string();

    click(&mut app, TWITTER_LINK);

    assert_eq!(
        recorded(&app).platform,
        vec![PlatformRequest::OpenUrl("https://twitter.com/example".to_string())]
    );
}

#[test]
fn test_social_links_default_to_placeholders() {
    let mut app = app_on(PageId::AboutUs);

    click(&mut app, STEAM_LINK);
    click(&mut app, DISCORD_LINK);

    assert_eq!(
        recorded(&app).platform,
        vec![
            PlatformRequest::OpenUrl("https://store.steampowered.com/app/yourappid".to_string()),
            PlatformRequest::OpenUrl("https://discord.gg/yourinvite".to_string()),
        ]
    );
}

#[test]
fn test_start_game_and_tutorial_are_stubs() {
    let mut app = app_on(PageId::MainMenu);

    click(&mut app, START_GAME_BUTTON);
    click(&mut app, TUTORIAL_BUTTON);

    assert_eq!(
        recorded(&app).commands,
        vec![MenuCommand::StartGame, MenuCommand::Tutorial]
    );
    assert_eq!(current_page(&app), Some(PageId::MainMenu));
    assert!(recorded(&app).platform.is_empty());
}

#[test]
fn test_create_server_reads_host_form() {
    let mut app = app_on(PageId::Host);

    click(&mut app, CREATE_SERVER_BUTTON);

    assert_eq!(
        recorded(&app).commands,
        vec![MenuCommand::CreateServer {
            name: Some("My Server".to_string()),
            max_players: Some(8),
            password: Some("secret".to_string()),
        }]
    );
}

#[test]
fn test_create_server_tolerates_missing_fields() {
    let page = PageDef::new(WidgetDef::column([WidgetDef::button(
        CREATE_SERVER_BUTTON,
        "Create",
    )]));
    let config = MenuConfig {
        default_page: PageId::Host,
        ..MenuConfig::without_page_files()
    };
    let mut app = test_app_with(config, vec![(PageId::Host, page)]);
    ready(&mut app);

    click(&mut app, CREATE_SERVER_BUTTON);

    assert_eq!(
        recorded(&app).commands,
        vec![MenuCommand::CreateServer {
            name: None,
            max_players: None,
            password: None,
        }]
    );
}

#[test]
fn test_connect_reads_server_ip() {
    let mut app = app_on(PageId::Join);

    click(&mut app, CONNECT_BUTTON);

    assert_eq!(
        recorded(&app).commands,
        vec![MenuCommand::Connect {
            address: Some("127.0.0.1".to_string()),
        }]
    );
}

#[test]
fn test_single_click_fires_once() {
    let mut app = app_on(PageId::MainMenu);
    let start = widget(&app, START_GAME_BUTTON, WidgetType::Button);

    press(&mut app, start);
    // Still held down: no new click.
    app.update();
    app.update();

    assert_eq!(recorded(&app).commands, vec![MenuCommand::StartGame]);
}
