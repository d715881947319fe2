use bevy::prelude::*;

/// Menu lifecycle state
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum MenuState {
    /// Page assets are still loading
    #[default]
    Loading,
    /// Every configured page is loaded (or failed); the router is live
    Ready,
}
