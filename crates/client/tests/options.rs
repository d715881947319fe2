use client::options::ClientOptions;
use menu::PageId;

#[test]
fn test_no_arguments_gives_defaults() {
    let options = ClientOptions::parse(Vec::<String>::new()).unwrap();
    assert_eq!(options, ClientOptions::default());

    let config = options.menu_config();
    assert_eq!(config.default_page, PageId::MainMenu);
    assert_eq!(config.hover_sound, None);
    assert_eq!(config.pages.len(), PageId::ALL.len());
}

#[test]
fn test_start_page_and_audio_flags() {
    let options = ClientOptions::parse([
        "--start-page",
        "about-us",
        "--hover-sound",
        "sfx/hover.wav",
        "--no-music",
        "--fullscreen",
    ])
    .unwrap();

    assert_eq!(options.start_page, PageId::AboutUs);
    assert_eq!(options.hover_sound.as_deref(), Some("sfx/hover.wav"));
    assert_eq!(
        options.menu_config().hover_sound.as_deref(),
        Some("sfx/hover.wav")
    );
    assert_eq!(options.lobby_music, None);
    assert!(options.fullscreen);
}

#[test]
fn test_unknown_page_is_rejected() {
    let err = ClientOptions::parse(["-p", "lobby"]).unwrap_err();
    assert!(format!("{err:#}").contains("unknown page `lobby`"));
}

#[test]
fn test_missing_value_is_rejected() {
    let err = ClientOptions::parse(["--lobby-music"]).unwrap_err();
    assert!(err.to_string().contains("missing value for --lobby-music"));
}

#[test]
fn test_unknown_argument_is_rejected() {
    assert!(ClientOptions::parse(["--server"]).is_err());
}
