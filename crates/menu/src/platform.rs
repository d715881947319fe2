//! Process-wide settings and external I/O requested by menu widgets.
//!
//! The router only writes [`PlatformRequest`] messages. [`PlatformPlugin`]
//! applies them to the running engine; headless apps and tests leave it out
//! and observe the messages instead.

use bevy::audio::{GlobalVolume, Volume};
use bevy::prelude::*;
use bevy::window::{MonitorSelection, PrimaryWindow, WindowMode};

#[derive(Message, Clone, Debug, PartialEq)]
pub enum PlatformRequest {
    SetMasterVolume(f32),
    SetFullscreen(bool),
    OpenUrl(String),
}

/// Plugin applying platform requests to `GlobalVolume`, the primary window
/// and the system URL handler
pub struct PlatformPlugin;

impl Plugin for PlatformPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<PlatformRequest>();
        app.add_systems(PostUpdate, apply_platform_requests);
    }
}

fn apply_platform_requests(
    mut requests: MessageReader<PlatformRequest>,
    mut global_volume: Option<ResMut<GlobalVolume>>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    for request in requests.read() {
        match request {
            PlatformRequest::SetMasterVolume(volume) => match global_volume.as_mut() {
                Some(global) => global.volume = Volume::Linear(*volume),
                None => warn!("GlobalVolume resource missing, master volume not applied"),
            },
            PlatformRequest::SetFullscreen(fullscreen) => match windows.single_mut() {
                Ok(mut window) => {
                    window.mode = if *fullscreen {
                        WindowMode::BorderlessFullscreen(MonitorSelection::Current)
                    } else {
                        WindowMode::Windowed
                    };
                }
                Err(_) => warn!("No primary window, fullscreen not applied"),
            },
            PlatformRequest::OpenUrl(url) => {
                if let Err(e) = open::that(url) {
                    error!("Failed to open URL {}: {}", url, e);
                }
            }
        }
    }
}
