//! Row structs returned by the repositories.
//!
//! Each struct is `FromRow` + `Serialize` and is written to the wire as-is.

pub mod breed;
pub mod dog;
