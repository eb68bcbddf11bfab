//! Built-in marker and metadata tables.

pub mod arabic;
pub mod english;
