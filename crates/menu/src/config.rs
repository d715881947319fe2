use bevy::prelude::*;
use std::collections::HashMap;

use crate::binding::SocialLink;
use crate::page::PageId;

/// Social media URLs opened from the about-us page
#[derive(Resource, Clone, Debug, PartialEq, Eq)]
pub struct SocialLinks {
    pub twitter: String,
    pub instagram: String,
    pub discord: String,
    pub steam: String,
}

impl Default for SocialLinks {
    fn default() -> Self {
        Self {
            twitter: "https://twitter.com/yourhandle".to_string(),
            instagram: "https://instagram.com/yourhandle".to_string(),
            discord: "https://discord.gg/yourinvite".to_string(),
            steam: "https://store.steampowered.com/app/yourappid".to_string(),
        }
    }
}

impl SocialLinks {
    pub fn url(&self, link: SocialLink) -> &str {
        match link {
            SocialLink::Twitter => &self.twitter,
            SocialLink::Instagram => &self.instagram,
            SocialLink::Discord => &self.discord,
            SocialLink::Steam => &self.steam,
        }
    }
}

/// Configuration for the menu plugin
#[derive(Resource, Clone, Debug)]
pub struct MenuConfig {
    /// Asset path of each page. Pages without an entry cannot be shown.
    pub pages: HashMap<PageId, String>,
    /// Page shown once loading finishes
    pub default_page: PageId,
    pub social: SocialLinks,
    /// Asset path of the hover sound effect
    pub hover_sound: Option<String>,
    /// Name of the fallback entity whose audio player outputs hover sounds
    pub hover_output_name: String,
    /// Re-scan for hover targets on every page instead of only the first
    pub rebind_hover_on_page_change: bool,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            pages: PageId::ALL
                .into_iter()
                .map(|page| (page, page.asset_path()))
                .collect(),
            default_page: PageId::MainMenu,
            social: SocialLinks::default(),
            hover_sound: None,
            hover_output_name: "Lobby music".to_string(),
            rebind_hover_on_page_change: false,
        }
    }
}

impl MenuConfig {
    /// Config with no page paths, for apps that add page assets themselves.
    pub fn without_page_files() -> Self {
        Self {
            pages: HashMap::new(),
            ..default()
        }
    }
}
