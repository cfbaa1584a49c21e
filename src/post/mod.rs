//! Post records and the metadata parser that builds them.
//!
//! A post file is a markdown document whose first block, delimited by two
//! `---` lines, holds `key: value` metadata. See [`parse_document`].

mod literal;
mod parser;
mod types;

pub use literal::parse_string_list;
pub use parser::{parse_attribute, parse_document};
pub use types::{DATE_FORMAT, Post};
