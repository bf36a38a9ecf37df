//! Concrete repository implementations, one per catalog entity.
//!
//! Repositories hold a cloned [`sqlx::PgPool`] and expose pool-bound
//! methods for request-scoped operations. Operations that must compose
//! into a caller-managed transaction (the import workflow) are also
//! available as `*_in` associated functions taking any [`sqlx::PgExecutor`].

pub mod collection;
pub mod data_manager;
pub mod file;
pub mod file_type;
pub mod version;
