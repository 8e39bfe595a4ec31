use crate::paste::ids::IdGenerator;
use crate::paste::store::BlobStore;

/// Shared application state passed to all handlers via axum State extractor.
#[derive(Clone)]
pub struct AppState {
    /// Filesystem-backed paste storage
    pub store: BlobStore,
    /// Identifier generator for `GET /`
    pub ids: IdGenerator,
}

impl AppState {
    pub fn new(store: BlobStore, ids: IdGenerator) -> Self {
        Self { store, ids }
    }
}
