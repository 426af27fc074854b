//! Helper functions shared by the content layer and the CLI

mod date;
mod list;

pub use date::*;
pub use list::*;
