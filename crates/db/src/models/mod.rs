//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts (where the entity is writable)
//! - A `Deserialize` update DTO (`id` plus all-`Option` fields) for patches

pub mod anime;
pub mod book;
pub mod todo;
