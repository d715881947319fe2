pub mod binding;
pub mod components;
pub mod config;
pub mod error;
pub mod hover;
pub mod input;
pub mod names;
pub mod page;
pub mod platform;
pub mod router;
pub mod state;
pub mod widgets;

use bevy::asset::LoadState;
use bevy::input::keyboard::KeyboardInput;
use bevy::prelude::*;
use bevy_common_assets::ron::RonAssetPlugin;
use std::collections::HashSet;

pub use binding::{BindingTable, EventKind, MenuAction, SocialLink, WidgetBinding, CATALOG};
pub use components::*;
pub use config::{MenuConfig, SocialLinks};
pub use error::MenuError;
pub use hover::{HoverBindings, HoverSoundSettings};
pub use input::{FocusedField, WidgetEvent, WidgetEventKind};
pub use page::{PageDef, PageId, WidgetDef, WidgetKind, WidgetType};
pub use platform::{PlatformPlugin, PlatformRequest};
pub use router::{MenuCommand, MenuPages, PageRouter, PageShown, ShowPage, ShowPageFailed};
pub use state::MenuState;
pub use widgets::WidgetIndex;

/// Plugin that loads the menu pages, routes between them and plays hover
/// sounds. Add [`PlatformPlugin`] next to it to apply volume, fullscreen and
/// URL requests to the running engine.
#[derive(Default)]
pub struct MenuPlugin {
    pub config: MenuConfig,
}

impl Plugin for MenuPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RonAssetPlugin::<PageDef>::new(&["page.ron"]));
        app.init_state::<MenuState>();

        app.add_message::<WidgetEvent>();
        app.add_message::<PlatformRequest>();
        app.add_message::<MenuCommand>();
        app.add_message::<KeyboardInput>();

        app.insert_resource(self.config.clone());
        app.insert_resource(self.config.social.clone());
        app.insert_resource(HoverSoundSettings {
            output_name: self.config.hover_output_name.clone(),
            rebind_on_page_change: self.config.rebind_hover_on_page_change,
            ..default()
        });
        app.init_resource::<MenuPages>();
        app.init_resource::<PageRouter>();
        app.init_resource::<HoverBindings>();
        app.init_resource::<FocusedField>();

        app.add_systems(Startup, (spawn_menu_document, load_menu_assets));
        app.add_systems(Update, check_pages_loaded.run_if(in_state(MenuState::Loading)));
        app.add_systems(OnEnter(MenuState::Ready), router::show_default_page);

        app.add_observer(router::on_show_page);
        app.add_observer(hover::bind_hover_sounds);

        app.add_systems(
            Update,
            (
                (input::emit_interaction_events, input::drag_sliders),
                (
                    router::dispatch_widget_events,
                    hover::play_hover_sounds,
                    input::focus_text_fields,
                ),
                input::type_into_focused_field,
            )
                .chain()
                .run_if(in_state(MenuState::Ready)),
        );
        app.add_systems(
            PostUpdate,
            (
                widgets::refresh_button_colors,
                widgets::refresh_slider_fills,
                widgets::refresh_toggle_labels,
                widgets::refresh_text_fields,
            ),
        );

        info!("MenuPlugin initialized");
    }
}

fn spawn_menu_document(mut commands: Commands) {
    commands.spawn((
        MenuDocument,
        Name::new("Menu Document"),
        Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        },
        BackgroundColor(Color::srgb(0.1, 0.1, 0.1)),
    ));
}

fn load_menu_assets(
    config: Res<MenuConfig>,
    asset_server: Res<AssetServer>,
    mut pages: ResMut<MenuPages>,
    mut hover: ResMut<HoverSoundSettings>,
) {
    for (page, path) in &config.pages {
        pages.insert(*page, asset_server.load(path.clone()));
    }
    if let Some(path) = &config.hover_sound {
        hover.sound = Some(asset_server.load(path.clone()));
    }
}

/// Moves to `MenuState::Ready` once no page is still loading. Failed pages
/// are reported and stay unavailable.
fn check_pages_loaded(
    asset_server: Res<AssetServer>,
    page_assets: Res<Assets<PageDef>>,
    pages: Res<MenuPages>,
    mut reported: Local<HashSet<PageId>>,
    mut next_state: ResMut<NextState<MenuState>>,
) {
    let mut pending = 0;
    for (page, handle) in pages.iter() {
        if page_assets.contains(handle.id()) {
            continue;
        }
        match asset_server.get_load_state(handle.id()) {
            Some(LoadState::Failed(_)) => {
                if reported.insert(page) {
                    error!("Page asset for {} failed to load", page);
                }
            }
            // Not managed by the asset server, so it will never arrive.
            None => {}
            Some(_) => pending += 1,
        }
    }

    if pending == 0 {
        info!("All menu pages loaded, transitioning to MenuState::Ready");
        next_state.set(MenuState::Ready);
    }
}
