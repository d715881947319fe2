use anyhow::{anyhow, bail, Context};
use menu::{MenuConfig, PageId};

/// Command-line options for the client. Audio paths are relative to the
/// asset root.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientOptions {
    pub start_page: PageId,
    pub hover_sound: Option<String>,
    pub lobby_music: Option<String>,
    pub fullscreen: bool,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            start_page: PageId::MainMenu,
            hover_sound: None,
            lobby_music: None,
            fullscreen: false,
        }
    }
}

impl ClientOptions {
    /// Parses `--start-page <page>`, `--hover-sound <path>`,
    /// `--lobby-music <path>`, `--no-music` and `--fullscreen`.
    pub fn parse<I, S>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut options = Self::default();
        let mut args = args.into_iter().map(Into::into);
        while let Some(arg) = args.next() {
            let mut value = || {
                args.next()
                    .ok_or_else(|| anyhow!("missing value for {arg}"))
            };
            match arg.as_str() {
                "-p" | "--start-page" => {
                    let page = value()?;
                    options.start_page = page
                        .parse()
                        .with_context(|| format!("invalid --start-page {page:?}"))?;
                }
                "--hover-sound" => options.hover_sound = Some(value()?),
                "--lobby-music" => options.lobby_music = Some(value()?),
                "--no-music" => options.lobby_music = None,
                "--fullscreen" => options.fullscreen = true,
                _ => bail!("unknown argument {arg:?}"),
            }
        }
        Ok(options)
    }

    pub fn menu_config(&self) -> MenuConfig {
        MenuConfig {
            default_page: self.start_page,
            hover_sound: self.hover_sound.clone(),
            ..MenuConfig::default()
        }
    }
}
