//! `tome` assembles a directory of loosely-structured text files
//! (markdown-with-front-matter, TOML, JSON) into a single in-memory catalog: a
//! mapping from document ids to fully-resolved field mappings. Documents in
//! the same file inherit from a per-file defaults document, field values can
//! define textual macros, and a small expression language pulls file contents
//! or content hashes into fields.

pub use catalog::*;
pub use config::*;
pub use error::*;
pub use expr::*;
pub use front_matter::*;
pub use inherit::*;
pub use macros::*;
pub use scanner::*;
pub use value::*;

pub mod catalog;
pub mod config;
mod error;
mod expr;
mod front_matter;
mod inherit;
mod macros;
pub mod scanner;
mod value;

#[cfg(test)]
mod __fixtures;
