//! Anonymous paste store.
//!
//! A paste is a blob of bytes addressed by an identifier that doubles as the
//! URL path segment and the file name below the storage root.
//!
//! `GET /` mints a random identifier and redirects to it; `GET /{id}` renders
//! the paste (creating it empty on first access); `POST /{id}` replaces it.

pub mod ids;
pub mod page;
pub mod routes;
pub mod store;
