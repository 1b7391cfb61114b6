//! Route handlers. Each one maps straight onto a single `db` operation or a
//! page render; there is no logic in between.

pub mod pages;
pub mod queries;
pub mod tables;

pub use crate::AppState;
