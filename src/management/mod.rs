mod archive;
mod artist;
mod auth;
mod store;

pub use archive::{ArtistArchiveManager, SaveOutcome};
pub use artist::{
    ALBUM_GROUPS, ALBUM_LIMIT, ALBUM_PAGE_SIZE, ArtistAggregator, ArtistChooser,
    NEW_RELEASES_LIMIT, POPULAR_ARTISTS_LIMIT, RELATED_ARTISTS_LIMIT, SEARCH_LIMIT,
    TOP_TRACKS_LIMIT,
};
pub use auth::{AuthError, TokenManager};
pub use store::{JsonFileStore, MemoryStore, Store, StoreError};
