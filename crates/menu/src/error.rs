use thiserror::Error;

use crate::page::PageId;

/// Configuration problems the menu reports instead of panicking.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    #[error("no page asset is configured for `{0}`")]
    PageNotConfigured(PageId),
    #[error("page asset for `{0}` is not loaded")]
    PageNotLoaded(PageId),
    #[error("menu document entity not found")]
    MissingDocument,
    #[error("no audio output found for hover sounds (assign one or spawn a `{0}` entity with an AudioPlayer)")]
    MissingAudioOutput(String),
    #[error("no hover sound asset assigned")]
    MissingHoverSound,
    #[error("unknown page `{0}`")]
    UnknownPage(String),
}
