//! Collection domain entities.

pub mod model;
pub mod slug;

pub use model::{Collection, CollectionSummary, CreateCollection};
pub use slug::is_valid_slug;
