use bevy::prelude::*;

/// Plugin that spawns the menu camera and, optionally, the lobby music the
/// hover sounds play through
#[derive(Default)]
pub struct MenuScenePlugin {
    pub lobby_music: Option<String>,
    pub output_name: String,
}

impl Plugin for MenuScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera);

        if let Some(path) = self.lobby_music.clone() {
            let name = self.output_name.clone();
            app.add_systems(Startup, move |commands: Commands, asset_server: Res<AssetServer>| {
                spawn_lobby_music(commands, asset_server, &path, &name);
            });
        } else {
            warn!("No lobby music configured, hover sounds need another audio output");
        }
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn spawn_lobby_music(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    path: &str,
    name: &str,
) {
    info!("Starting lobby music from {}", path);
    commands.spawn((
        Name::new(name.to_string()),
        AudioPlayer::new(asset_server.load(path.to_string())),
        PlaybackSettings::LOOP,
    ));
}
