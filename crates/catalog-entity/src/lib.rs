//! # catalog-entity
//!
//! Domain entity models for the collection catalog. Every struct in this
//! crate represents a database table row or a joined query result. All
//! entities derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and
//! database entities additionally derive `sqlx::FromRow`.

pub mod collection;
pub mod data_manager;
pub mod file;
pub mod file_type;
pub mod version;
