//! File type taxonomy entities.

pub mod model;

pub use model::{FileType, FileTypeGroup, FileTypeInfo};
