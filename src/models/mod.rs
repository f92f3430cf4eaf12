//! Ethos API model types.

mod hold;
mod hold_type;
mod person;

pub use hold::*;
pub use hold_type::*;
pub use person::*;
