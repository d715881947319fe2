//! Widget names and style classes the router and hover controller look up.
//!
//! Page assets must use these exact strings; a renamed widget simply stops
//! being bound.

pub const START_GAME_BUTTON: &str = "start-game__button";
pub const HOST_BUTTON: &str = "host__button";
pub const JOIN_BUTTON: &str = "join__button";
pub const TUTORIAL_BUTTON: &str = "tutorial__button";
pub const SETTINGS_BUTTON: &str = "settings__button";
pub const CREDITS_BUTTON: &str = "credits__button";
pub const ABOUT_US_BUTTON: &str = "about-us__button";

pub const BACK_BUTTON: &str = "back-button";
pub const SKIP_BUTTON: &str = "skip-button";

pub const MASTER_VOLUME: &str = "master-volume";
pub const MUSIC_VOLUME: &str = "music-volume";
pub const SFX_VOLUME: &str = "sfx-volume";
pub const FULLSCREEN_TOGGLE: &str = "fullscreen-toggle";

pub const CREATE_SERVER_BUTTON: &str = "create-server-button";
pub const SERVER_NAME: &str = "server-name";
pub const MAX_PLAYERS: &str = "max-players";
pub const PASSWORD_FIELD: &str = "password-field";

pub const CONNECT_BUTTON: &str = "connect-button";
pub const SERVER_IP: &str = "server-ip";

pub const TWITTER_LINK: &str = "twitter-link";
pub const INSTAGRAM_LINK: &str = "instagram-link";
pub const DISCORD_LINK: &str = "discord-link";
pub const STEAM_LINK: &str = "steam-link";

/// Buttons carrying this class play the hover sound.
pub const MENU_REGULAR_BUTTON: &str = "menuRegularButton";
