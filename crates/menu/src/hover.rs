use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::components::MenuDocument;
use crate::error::MenuError;
use crate::input::{WidgetEvent, WidgetEventKind};
use crate::names::MENU_REGULAR_BUTTON;
use crate::page::WidgetType;
use crate::router::{PageRouter, PageShown};

/// Where hover sounds come from and where they play.
#[derive(Resource, Clone, Debug)]
pub struct HoverSoundSettings {
    pub sound: Option<Handle<AudioSource>>,
    /// Explicit output entity; must carry an `AudioPlayer`
    pub output: Option<Entity>,
    /// Fallback output, looked up by `Name`
    pub output_name: String,
    pub rebind_on_page_change: bool,
}

impl Default for HoverSoundSettings {
    fn default() -> Self {
        Self {
            sound: None,
            output: None,
            output_name: "Lobby music".to_string(),
            rebind_on_page_change: false,
        }
    }
}

/// Resolved hover sound setup
#[derive(Resource, Debug, Default)]
pub struct HoverBindings {
    attempted: bool,
    output: Option<Entity>,
    sound: Option<Handle<AudioSource>>,
    targets: Vec<Entity>,
}

impl HoverBindings {
    pub fn output(&self) -> Option<Entity> {
        self.output
    }

    pub fn targets(&self) -> &[Entity] {
        &self.targets
    }

    pub fn is_bound(&self) -> bool {
        self.output.is_some() && self.sound.is_some()
    }
}

pub(crate) fn bind_hover_sounds(
    shown: On<PageShown>,
    mut hover: ResMut<HoverBindings>,
    settings: Res<HoverSoundSettings>,
    router: Res<PageRouter>,
    asset_server: Res<AssetServer>,
    document: Query<Entity, With<MenuDocument>>,
    players: Query<(Entity, Option<&Name>), With<AudioPlayer>>,
) {
    if hover.attempted && !settings.rebind_on_page_change {
        return;
    }
    hover.attempted = true;

    match resolve(&settings, &asset_server, &document, &players) {
        Ok((output, sound)) => {
            hover.targets = router
                .widgets()
                .with_class(MENU_REGULAR_BUTTON, WidgetType::Button)
                .collect();
            info!(
                "Bound hover sound to {} buttons on {}",
                hover.targets.len(),
                shown.page
            );
            hover.output = Some(output);
            hover.sound = Some(sound);
        }
        Err(e) => {
            error!("Hover sounds disabled: {}", e);
            *hover = HoverBindings {
                attempted: true,
                ..default()
            };
        }
    }
}

fn resolve(
    settings: &HoverSoundSettings,
    asset_server: &AssetServer,
    document: &Query<Entity, With<MenuDocument>>,
    players: &Query<(Entity, Option<&Name>), With<AudioPlayer>>,
) -> Result<(Entity, Handle<AudioSource>), MenuError> {
    let document = document.single().map_err(|_| MenuError::MissingDocument)?;

    let output = settings
        .output
        .filter(|entity| players.contains(*entity))
        .or_else(|| players.contains(document).then_some(document))
        .or_else(|| {
            players
                .iter()
                .find(|(_, name)| name.is_some_and(|n| n.as_str() == settings.output_name))
                .map(|(entity, _)| entity)
        })
        .ok_or_else(|| MenuError::MissingAudioOutput(settings.output_name.clone()))?;

    let sound = settings
        .sound
        .clone()
        .filter(|sound| {
            !matches!(asset_server.get_load_state(sound.id()), Some(LoadState::Failed(_)))
        })
        .ok_or(MenuError::MissingHoverSound)?;
    Ok((output, sound))
}

/// Plays the hover sound once per pointer-enter on a bound button, at the
/// output's volume.
pub(crate) fn play_hover_sounds(
    mut commands: Commands,
    mut events: MessageReader<WidgetEvent>,
    hover: Res<HoverBindings>,
    sources: Option<Res<Assets<AudioSource>>>,
    players: Query<Option<&PlaybackSettings>, With<AudioPlayer>>,
    mut reported_missing: Local<bool>,
) {
    let (Some(output), Some(sound)) = (hover.output, hover.sound.as_ref()) else {
        events.clear();
        return;
    };
    for event in events.read() {
        if event.kind != WidgetEventKind::PointerEnter || !hover.targets.contains(&event.entity) {
            continue;
        }
        let Ok(output_settings) = players.get(output) else {
            warn!("Hover sound output {} is gone", output);
            return;
        };
        // A player without a source never finishes, so it would never despawn.
        if !sources.as_ref().is_some_and(|s| s.contains(sound.id())) {
            if !*reported_missing {
                *reported_missing = true;
                error!("Hover sound {:?} is not loaded, skipping playback", sound.id());
            }
            continue;
        }
        let volume = output_settings.map_or(PlaybackSettings::DESPAWN.volume, |s| s.volume);
        commands.entity(output).with_child((
            AudioPlayer::new(sound.clone()),
            PlaybackSettings::DESPAWN.with_volume(volume),
        ));
    }
}
