//! Domain types shared by the shelter database and API crates.

pub mod dog;
pub mod error;
pub mod types;
