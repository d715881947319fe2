use bevy::prelude::*;
use bevy::window::{MonitorSelection, WindowMode};
use client::{ClientOptions, MenuScenePlugin};
use menu::{MenuPlugin, PlatformPlugin};

fn main() -> anyhow::Result<()> {
    let options = ClientOptions::parse(std::env::args().skip(1))?;
    let config = options.menu_config();

    let mode = if options.fullscreen {
        WindowMode::BorderlessFullscreen(MonitorSelection::Current)
    } else {
        WindowMode::Windowed
    };

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Main Menu".to_string(),
                mode,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(MenuScenePlugin {
            lobby_music: options.lobby_music.clone(),
            output_name: config.hover_output_name.clone(),
        })
        .add_plugins(MenuPlugin { config })
        .add_plugins(PlatformPlugin)
        .run();

    Ok(())
}
