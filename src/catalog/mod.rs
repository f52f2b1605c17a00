pub mod cache;
pub mod client;
pub mod store;
pub mod types;

pub use client::{CatalogError, CatalogSource, HttpCatalog};
pub use store::MediaStore;
pub use types::{Episode, MediaInfo, Movie, Show};
