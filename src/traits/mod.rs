//! Trait definitions for Ethos operations.
//!
//! Each entity type implements the traits its endpoints support, keeping
//! path and query details next to the model.

mod get;
mod list;
mod update;

pub use get::Get;
pub use list::List;
pub use update::Update;
